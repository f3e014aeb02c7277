use super::FieldValue;
use anyhow::{bail, Result};
use std::fmt::Debug;

/// Positions inside a MultiPolygon sit four sequence levels deep; anything
/// deeper is rejected when promoting from a `FieldValue`.
const MAX_DEPTH: usize = 4;

/// Nested numeric coordinate data.
///
/// Nesting depth is a convention of the geometry kind (a bare value, a
/// position, a ring, ...) and is not enforced here.
#[derive(Clone, PartialEq)]
pub enum Coordinates {
	Num(f64),
	Seq(Vec<Coordinates>),
}

impl From<f64> for Coordinates {
	fn from(value: f64) -> Self {
		Coordinates::Num(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::Seq(vec![Coordinates::Num(value.0), Coordinates::Num(value.1)])
	}
}

impl<T: Into<f64> + Copy> From<[T; 2]> for Coordinates {
	fn from(value: [T; 2]) -> Self {
		Coordinates::Seq(vec![
			Coordinates::Num(value[0].into()),
			Coordinates::Num(value[1].into()),
		])
	}
}

impl<T> From<Vec<T>> for Coordinates
where
	Coordinates: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		Coordinates::Seq(value.into_iter().map(Coordinates::from).collect())
	}
}

impl TryFrom<&FieldValue> for Coordinates {
	type Error = anyhow::Error;

	fn try_from(value: &FieldValue) -> Result<Self> {
		fn recursive(value: &FieldValue, depth: usize) -> Result<Coordinates> {
			Ok(match value {
				FieldValue::Double(v) => Coordinates::Num(*v),
				FieldValue::Float(v) => Coordinates::Num(*v as f64),
				FieldValue::Int(v) => Coordinates::Num(*v as f64),
				FieldValue::UInt(v) => Coordinates::Num(*v as f64),
				FieldValue::List(list) => {
					if depth >= MAX_DEPTH {
						bail!("coordinates are nested too deep")
					}
					Coordinates::Seq(
						list
							.iter()
							.map(|entry| recursive(entry, depth + 1))
							.collect::<Result<Vec<Coordinates>>>()?,
					)
				}
				other => bail!("expected a number or a sequence in coordinates, but got {other:?}"),
			})
		}

		recursive(value, 0)
	}
}

impl From<&Coordinates> for FieldValue {
	fn from(value: &Coordinates) -> Self {
		match value {
			Coordinates::Num(v) => FieldValue::Double(*v),
			Coordinates::Seq(seq) => FieldValue::List(seq.iter().map(FieldValue::from).collect()),
		}
	}
}

impl From<Coordinates> for FieldValue {
	fn from(value: Coordinates) -> Self {
		FieldValue::from(&value)
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Coordinates::Num(v) => v.fmt(f),
			Coordinates::Seq(seq) => f.debug_list().entries(seq).finish(),
		}
	}
}
