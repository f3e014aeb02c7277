use super::{Delegate, FieldValue, Fields, Geometry, Object, Record};

/// Bare feature form: identifier, geometry and attribute properties.
#[derive(Clone, PartialEq, Debug)]
pub struct RawFeature {
	pub id: FieldValue,
	pub geometry: Geometry,
	pub properties: Object,
}

impl Default for RawFeature {
	fn default() -> RawFeature {
		RawFeature {
			id: FieldValue::Null,
			geometry: Geometry::null(),
			properties: Object::new(),
		}
	}
}

impl Delegate for RawFeature {
	const NAMES: &'static [&'static str] = &["id", "geometry", "properties", "type"];

	fn get(&self, name: &str) -> FieldValue {
		match name {
			"id" => self.id.clone(),
			"geometry" => FieldValue::Geometry(self.geometry.clone()),
			"properties" => FieldValue::Object(self.properties.clone()),
			// a feature's type is always "Feature"
			"type" => FieldValue::from("Feature"),
			_ => FieldValue::Null,
		}
	}

	fn set(&mut self, name: &str, value: FieldValue) {
		match name {
			"id" => self.id = value,
			"geometry" => self.geometry = coerce_geometry(value),
			"properties" => self.properties = coerce_properties(value),
			_ => {}
		}
	}

	fn reset(&mut self, name: &str) {
		match name {
			"id" => self.id = FieldValue::Null,
			"geometry" => self.geometry = Geometry::null(),
			"properties" => self.properties = Object::new(),
			_ => {}
		}
	}
}

fn coerce_geometry(value: FieldValue) -> Geometry {
	match value {
		FieldValue::Geometry(geometry) => geometry,
		FieldValue::Map(fields) => Geometry::from_fields(fields),
		FieldValue::Object(object) => Geometry::from_fields(object.into_fields()),
		_ => Geometry::null(),
	}
}

fn coerce_properties(value: FieldValue) -> Object {
	match value {
		FieldValue::Object(object) => object,
		FieldValue::Map(fields) => Object::from_fields(fields),
		_ => Object::new(),
	}
}

/// A GeoJSON feature object.
///
/// Delegates `"id"`, `"geometry"`, `"properties"` and `"type"` to a
/// [`RawFeature`]; `"type"` always reads as `"Feature"`. Extra fields are
/// carried verbatim for forward compatibility with GeoJSON extensions.
pub type Feature = Record<RawFeature>;

impl Feature {
	pub fn new() -> Feature {
		Feature::default()
	}

	/// Builds a feature from a GeoJSON-shaped mapping.
	///
	/// A mapping-valued `"geometry"` is promoted to a [`Geometry`] and a
	/// mapping-valued `"properties"` to an [`Object`]; missing ones default
	/// to the null geometry and an empty object. A supplied `"type"` is
	/// ignored: a feature's type is always `"Feature"`. All other keys pass
	/// through untouched.
	pub fn from_fields(data: Fields) -> Feature {
		Record::from_parts(RawFeature::default(), data)
	}

	pub fn with_id(mut self, id: impl Into<FieldValue>) -> Feature {
		self.delegate.id = id.into();
		self
	}

	pub fn with_geometry(mut self, geometry: impl Into<Geometry>) -> Feature {
		self.delegate.geometry = geometry.into();
		self
	}

	pub fn with_properties(mut self, properties: impl Into<Object>) -> Feature {
		self.delegate.properties = properties.into();
		self
	}

	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Feature {
		let key = key.into();
		if RawFeature::delegates(&key) {
			self.delegate.set(&key, value.into());
		} else {
			self.data.insert(key, value);
		}
		self
	}

	/// The identifier, or `None` when the feature has none.
	pub fn id(&self) -> Option<&FieldValue> {
		if self.delegate.id.is_null() {
			None
		} else {
			Some(&self.delegate.id)
		}
	}

	pub fn geometry(&self) -> &Geometry {
		&self.delegate.geometry
	}

	pub fn properties(&self) -> &Object {
		&self.delegate.properties
	}

	/// The whole record flattened to a plain mapping, for handoff to an
	/// external encoder. Sub-records are flattened to mappings as well.
	pub fn props(&self) -> Fields {
		let mut props = Fields::new();
		props.insert("id", self.delegate.id.clone());
		props.insert("type", "Feature");
		props.insert(
			"geometry",
			FieldValue::Map(self.delegate.geometry.props()),
		);
		props.insert(
			"properties",
			FieldValue::Map(self.delegate.properties.clone().into_fields()),
		);
		for (key, value) in self.data.iter() {
			props.insert(key, value.clone());
		}
		props
	}
}
