use super::{Coordinates, Delegate, FieldValue, Fields, Record};

/// Bare geometry form: kind and coordinates, both optional.
///
/// Omitted fields stay absent rather than becoming empty collections, so
/// "no geometry supplied" stays distinguishable from "geometry of unknown
/// shape". The recognized-kind set (Point, LineString, Polygon, ...) is a
/// convention of the callers; nothing is enforced here.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RawGeometry {
	pub kind: Option<String>,
	pub coordinates: Option<Coordinates>,
}

impl RawGeometry {
	pub fn new(kind: impl Into<String>, coordinates: impl Into<Coordinates>) -> RawGeometry {
		RawGeometry {
			kind: Some(kind.into()),
			coordinates: Some(coordinates.into()),
		}
	}
}

impl Delegate for RawGeometry {
	const NAMES: &'static [&'static str] = &["type", "coordinates"];

	// Two geometries are equal iff kind and coordinates are equal;
	// pass-through fields do not take part.
	const EQ_DELEGATED_ONLY: bool = true;

	fn get(&self, name: &str) -> FieldValue {
		match name {
			"type" => self.kind.as_deref().map_or(FieldValue::Null, FieldValue::from),
			"coordinates" => self
				.coordinates
				.as_ref()
				.map_or(FieldValue::Null, FieldValue::from),
			_ => FieldValue::Null,
		}
	}

	fn set(&mut self, name: &str, value: FieldValue) {
		match name {
			"type" => {
				self.kind = match value {
					FieldValue::Null => None,
					FieldValue::String(kind) => Some(kind),
					other => Some(other.to_string()),
				}
			}
			"coordinates" => self.coordinates = Coordinates::try_from(&value).ok(),
			_ => {}
		}
	}

	fn reset(&mut self, name: &str) {
		match name {
			"type" => self.kind = None,
			"coordinates" => self.coordinates = None,
			_ => {}
		}
	}
}

/// A GeoJSON geometry object.
///
/// Exposes the mapping keys `"type"` and `"coordinates"`, delegated to a
/// [`RawGeometry`]. `Geometry::default()` is the null geometry used when a
/// feature has no geometry; two null geometries compare equal.
pub type Geometry = Record<RawGeometry>;

impl Geometry {
	pub fn new(kind: impl Into<String>, coordinates: impl Into<Coordinates>) -> Geometry {
		Geometry::from(RawGeometry::new(kind, coordinates))
	}

	/// The null geometry.
	pub fn null() -> Geometry {
		Geometry::default()
	}

	/// Promotes a GeoJSON-shaped mapping. `"type"` and `"coordinates"` land
	/// in the delegate; unrecognized keys are kept verbatim.
	pub fn from_fields(data: Fields) -> Geometry {
		Record::from_parts(RawGeometry::default(), data)
	}

	pub fn kind(&self) -> Option<&str> {
		self.delegate.kind.as_deref()
	}

	pub fn coordinates(&self) -> Option<&Coordinates> {
		self.delegate.coordinates.as_ref()
	}

	/// The two geometry fields as a flat mapping, for handoff to an
	/// external encoder. Absent fields are included as `Null`.
	pub fn props(&self) -> Fields {
		let mut props = Fields::new();
		props.insert("type", self.delegate.get("type"));
		props.insert("coordinates", self.delegate.get("coordinates"));
		props
	}
}

impl From<RawGeometry> for Geometry {
	fn from(value: RawGeometry) -> Self {
		Record {
			delegate: value,
			data: Fields::new(),
		}
	}
}

impl From<Fields> for Geometry {
	fn from(value: Fields) -> Self {
		Geometry::from_fields(value)
	}
}
