use super::FieldValue;
use std::{fmt::Debug, vec};

/// Insertion-ordered mapping from field name to value.
///
/// Replacing an existing key keeps its original position. Equality is
/// order-independent: two mappings are equal when they hold the same keys
/// with equal values.
#[derive(Clone, Default)]
pub struct Fields {
	entries: Vec<(String, FieldValue)>,
}

impl Fields {
	pub fn new() -> Fields {
		Fields {
			entries: Vec::new(),
		}
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
		let key = key.into();
		let value = value.into();
		if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
			entry.1 = value;
		} else {
			self.entries.push((key, value));
		}
	}

	pub fn get(&self, key: &str) -> Option<&FieldValue> {
		self
			.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v)
	}

	pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
		let index = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(index).1)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.iter().any(|(k, _)| k == key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.iter().map(|(k, _)| k.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> + '_ {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl PartialEq for Fields {
	fn eq(&self, other: &Self) -> bool {
		self.entries.len() == other.entries.len()
			&& self.entries.iter().all(|(k, v)| other.get(k) == Some(v))
	}
}

impl IntoIterator for Fields {
	type Item = (String, FieldValue);
	type IntoIter = vec::IntoIter<(String, FieldValue)>;
	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl From<Vec<(&str, FieldValue)>> for Fields {
	fn from(value: Vec<(&str, FieldValue)>) -> Self {
		value
			.into_iter()
			.map(|(k, v)| (k.to_string(), v))
			.collect()
	}
}

impl From<Vec<(&str, &str)>> for Fields {
	fn from(value: Vec<(&str, &str)>) -> Self {
		value
			.into_iter()
			.map(|(k, v)| (k.to_string(), FieldValue::from(v)))
			.collect()
	}
}

impl FromIterator<(String, FieldValue)> for Fields {
	fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
		let mut fields = Fields::new();
		for (key, value) in iter {
			fields.insert(key, value);
		}
		fields
	}
}

impl Debug for Fields {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
