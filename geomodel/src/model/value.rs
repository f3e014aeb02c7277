use super::{Fields, Geometry, Object};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::fmt::{Debug, Display};

/// Tagged-union value for attribute properties and extra fields.
///
/// Scalar variants cover everything a GeoJSON property can hold; the
/// container variants let a record carry nested mappings, sequences and
/// other records verbatim.
#[derive(Clone, PartialEq)]
pub enum FieldValue {
	Bool(bool),
	Double(f64),
	Float(f32),
	Geometry(Geometry),
	Int(i64),
	List(Vec<FieldValue>),
	Map(Fields),
	Null,
	Object(Object),
	String(String),
	UInt(u64),
}

impl FieldValue {
	pub fn is_null(&self) -> bool {
		matches!(self, FieldValue::Null)
	}

	/// Promotes a raw attribute string to a typed value.
	pub fn parse_str(value: &str) -> Self {
		lazy_static! {
			static ref REG_DOUBLE: Regex = RegexBuilder::new(r"^\d*\.\d+$").build().unwrap();
			static ref REG_INT: Regex = RegexBuilder::new(r"^\-\d+$").build().unwrap();
			static ref REG_UINT: Regex = RegexBuilder::new(r"^\d+$").build().unwrap();
		}

		match value {
			"" => FieldValue::String("".to_string()),
			"true" => FieldValue::Bool(true),
			"false" => FieldValue::Bool(false),
			_ => {
				if REG_DOUBLE.is_match(value) {
					FieldValue::Double(value.parse::<f64>().unwrap())
				} else if REG_INT.is_match(value) {
					FieldValue::Int(value.parse::<i64>().unwrap())
				} else if REG_UINT.is_match(value) {
					FieldValue::UInt(value.parse::<u64>().unwrap())
				} else {
					FieldValue::String(value.to_string())
				}
			}
		}
	}
}

impl Default for FieldValue {
	fn default() -> Self {
		FieldValue::Null
	}
}

impl Debug for FieldValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::List(v) => f.debug_list().entries(v).finish(),
			Self::Map(v) => v.fmt(f),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::Geometry(v) => f.debug_tuple("Geometry").field(v).finish(),
		}
	}
}

impl Display for FieldValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FieldValue::Bool(v) => write!(f, "{v}"),
			FieldValue::Double(v) => write!(f, "{v}"),
			FieldValue::Float(v) => write!(f, "{v}"),
			FieldValue::Int(v) => write!(f, "{v}"),
			FieldValue::Null => write!(f, "null"),
			FieldValue::String(v) => write!(f, "{v}"),
			FieldValue::UInt(v) => write!(f, "{v}"),
			other => write!(f, "{other:?}"),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::String(value.to_string())
	}
}

impl From<&String> for FieldValue {
	fn from(value: &String) -> Self {
		FieldValue::String(value.clone())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::String(value)
	}
}

impl From<u8> for FieldValue {
	fn from(value: u8) -> Self {
		FieldValue::UInt(value as u64)
	}
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			FieldValue::Int(value as i64)
		} else {
			FieldValue::UInt(value as u64)
		}
	}
}

impl From<u32> for FieldValue {
	fn from(value: u32) -> Self {
		FieldValue::UInt(value as u64)
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		FieldValue::Int(value)
	}
}

impl From<u64> for FieldValue {
	fn from(value: u64) -> Self {
		FieldValue::UInt(value)
	}
}

impl From<f32> for FieldValue {
	fn from(value: f32) -> Self {
		FieldValue::Float(value)
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		FieldValue::Double(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Bool(value)
	}
}

impl From<Vec<FieldValue>> for FieldValue {
	fn from(value: Vec<FieldValue>) -> Self {
		FieldValue::List(value)
	}
}

impl From<Fields> for FieldValue {
	fn from(value: Fields) -> Self {
		FieldValue::Map(value)
	}
}

impl From<Object> for FieldValue {
	fn from(value: Object) -> Self {
		FieldValue::Object(value)
	}
}

impl From<Geometry> for FieldValue {
	fn from(value: Geometry) -> Self {
		FieldValue::Geometry(value)
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(FieldValue::Null, Into::into)
	}
}
