use super::{FieldValue, Fields};
use crate::{deprecation, ModelError};
use std::fmt::Debug;

/// Redirects a fixed set of field names to attributes of an owned value
/// instead of the record's local storage.
///
/// `NAMES` lists the delegated field names in declaration order; the
/// accessor methods are only ever invoked with names from that list.
pub trait Delegate: Clone + PartialEq {
	const NAMES: &'static [&'static str];

	/// When `true`, equality of the containing record compares only the
	/// delegated fields; pass-through fields are still stored and iterated
	/// but do not take part in comparisons.
	const EQ_DELEGATED_ONLY: bool = false;

	/// Current value of a delegated field. Unset fields read as `Null`.
	fn get(&self, name: &str) -> FieldValue;

	/// Writes a delegated field, coercing the value as construction would.
	fn set(&mut self, name: &str, value: FieldValue);

	/// Resets a delegated field to its default.
	fn reset(&mut self, name: &str);

	fn delegates(name: &str) -> bool {
		Self::NAMES.contains(&name)
	}
}

impl Delegate for () {
	const NAMES: &'static [&'static str] = &[];

	fn get(&self, _name: &str) -> FieldValue {
		FieldValue::Null
	}

	fn set(&mut self, _name: &str, _value: FieldValue) {}

	fn reset(&mut self, _name: &str) {}
}

/// Mapping-like record over named fields.
///
/// Reads consult the delegate first and fall back to local storage.
/// Iteration yields the delegated names in declaration order, then the
/// remaining fields in the order they were supplied at construction.
///
/// Records are logically immutable once constructed. The mutating methods
/// (`set`, `update`, `pop`, `remove`) are legacy shims kept for callers of
/// the old mutable-mapping API: each emits a deprecation notice on the
/// `"deprecation"` log target, then performs the write exactly as the
/// constructor would have.
#[derive(Clone)]
pub struct Record<D: Delegate = ()> {
	pub(crate) delegate: D,
	pub(crate) data: Fields,
}

impl<D: Delegate> PartialEq for Record<D> {
	fn eq(&self, other: &Self) -> bool {
		if self.delegate != other.delegate {
			return false;
		}
		D::EQ_DELEGATED_ONLY || self.data == other.data
	}
}

/// A plain record with no delegated fields.
pub type Object = Record<()>;

impl<D: Delegate> Record<D> {
	/// Builds a record from a delegate and raw field data. Delegated names
	/// found in `data` are routed into the delegate, everything else is
	/// stored verbatim.
	pub fn from_parts(delegate: D, data: Fields) -> Self {
		let mut record = Record {
			delegate,
			data: Fields::new(),
		};
		for (key, value) in data {
			if D::delegates(&key) {
				record.delegate.set(&key, value);
			} else {
				record.data.insert(key, value);
			}
		}
		record
	}

	pub fn get(&self, key: &str) -> Option<FieldValue> {
		if D::delegates(key) {
			Some(self.delegate.get(key))
		} else {
			self.data.get(key).cloned()
		}
	}

	pub fn get_or_err(&self, key: &str) -> Result<FieldValue, ModelError> {
		self
			.get(key)
			.ok_or_else(|| ModelError::KeyNotFound(key.to_string()))
	}

	pub fn contains_key(&self, key: &str) -> bool {
		D::delegates(key) || self.data.contains_key(key)
	}

	pub fn len(&self) -> usize {
		D::NAMES.len() + self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Field names: delegated names first, then local fields in the order
	/// they were supplied. The sequence is a snapshot and does not reflect
	/// later mutation.
	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		let mut keys: Vec<&str> = Vec::with_capacity(self.len());
		for &name in D::NAMES {
			keys.push(name);
		}
		for key in self.data.keys() {
			keys.push(key);
		}
		keys.into_iter()
	}

	/// Fields as name/value pairs, in the same order as [`keys`](Self::keys).
	pub fn iter(&self) -> impl Iterator<Item = (&str, FieldValue)> + '_ {
		let mut entries: Vec<(&str, FieldValue)> = Vec::with_capacity(self.len());
		for &name in D::NAMES {
			entries.push((name, self.delegate.get(name)));
		}
		for (key, value) in self.data.iter() {
			entries.push((key, value.clone()));
		}
		entries.into_iter()
	}

	/// Deprecated mutation shim. Writes one field in place.
	pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
		deprecation::warn_immutable("set");
		self.write(key, value.into());
	}

	/// Deprecated mutation shim. Writes every supplied entry; emits a single
	/// deprecation notice for the whole call.
	pub fn update<I>(&mut self, entries: I)
	where
		I: IntoIterator<Item = (String, FieldValue)>,
	{
		deprecation::warn_immutable("update");
		for (key, value) in entries {
			self.write(&key, value);
		}
	}

	/// Deprecated mutation shim. Removes a field and returns its value.
	///
	/// A delegated field is reset to its default instead of removed, and its
	/// pre-reset value is returned.
	pub fn pop(&mut self, key: &str) -> Result<FieldValue, ModelError> {
		deprecation::warn_immutable("pop");
		self.take(key)
	}

	/// Deprecated mutation shim. Like [`pop`](Self::pop), but yields the
	/// given default instead of failing on an absent key.
	pub fn pop_or(&mut self, key: &str, default: impl Into<FieldValue>) -> FieldValue {
		deprecation::warn_immutable("pop");
		self.take(key).unwrap_or_else(|_| default.into())
	}

	/// Deprecated mutation shim. Removes a field, discarding its value.
	pub fn remove(&mut self, key: &str) -> Result<(), ModelError> {
		deprecation::warn_immutable("remove");
		self.take(key).map(|_| ())
	}

	fn write(&mut self, key: &str, value: FieldValue) {
		if D::delegates(key) {
			self.delegate.set(key, value);
		} else {
			self.data.insert(key, value);
		}
	}

	fn take(&mut self, key: &str) -> Result<FieldValue, ModelError> {
		if D::delegates(key) {
			let value = self.delegate.get(key);
			self.delegate.reset(key);
			Ok(value)
		} else {
			self
				.data
				.remove(key)
				.ok_or_else(|| ModelError::KeyNotFound(key.to_string()))
		}
	}
}

impl<D: Delegate + Default> Default for Record<D> {
	fn default() -> Self {
		Record {
			delegate: D::default(),
			data: Fields::new(),
		}
	}
}

impl Object {
	pub fn new() -> Object {
		Object::default()
	}

	pub fn from_fields(data: Fields) -> Object {
		Record::from_parts((), data)
	}

	pub fn into_fields(self) -> Fields {
		self.data
	}
}

impl From<Fields> for Object {
	fn from(value: Fields) -> Self {
		Object::from_fields(value)
	}
}

impl From<Vec<(&str, FieldValue)>> for Object {
	fn from(value: Vec<(&str, FieldValue)>) -> Self {
		Object::from_fields(Fields::from(value))
	}
}

impl FromIterator<(String, FieldValue)> for Object {
	fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
		Object::from_fields(Fields::from_iter(iter))
	}
}

impl<D: Delegate> Debug for Record<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::deprecation::capture;

	#[derive(Clone, PartialEq, Debug, Default)]
	struct ThingDelegate {
		value: FieldValue,
	}

	impl Delegate for ThingDelegate {
		const NAMES: &'static [&'static str] = &["value"];

		fn get(&self, _name: &str) -> FieldValue {
			self.value.clone()
		}

		fn set(&mut self, _name: &str, value: FieldValue) {
			self.value = value;
		}

		fn reset(&mut self, _name: &str) {
			self.value = FieldValue::Null;
		}
	}

	type Thing = Record<ThingDelegate>;

	#[test]
	fn object_len() {
		let obj = Object::from(vec![("g", FieldValue::from(1))]);
		assert_eq!(obj.len(), 1);
		assert!(!obj.is_empty());
		assert!(Object::new().is_empty());
	}

	#[test]
	fn object_iter() {
		let obj = Object::from(vec![("g", FieldValue::from(1))]);
		let values: Vec<FieldValue> = obj.keys().map(|k| obj.get(k).unwrap()).collect();
		assert_eq!(values, vec![FieldValue::from(1)]);
	}

	#[test]
	fn object_equality_covers_all_fields() {
		let a = Object::from(vec![("g", FieldValue::from(1))]);
		let b = Object::from(vec![("g", FieldValue::from(1))]);
		let c = Object::from(vec![("g", FieldValue::from(2))]);
		assert_eq!(a, b);
		assert_ne!(a, c);
		assert_ne!(a, Object::new());
	}

	#[test]
	fn object_get_or_err() {
		let obj = Object::from(vec![("g", FieldValue::from(1))]);
		assert_eq!(obj.get_or_err("g"), Ok(FieldValue::from(1)));
		assert_eq!(
			obj.get_or_err("h"),
			Err(ModelError::KeyNotFound("h".to_string()))
		);
	}

	#[test]
	fn set_warns_and_writes() {
		let mut obj = Object::new();
		capture::take();
		obj.set("g", 1);
		assert_eq!(capture::take(), 1);
		assert!(obj.contains_key("g"));
		assert_eq!(obj.get("g"), Some(FieldValue::from(1)));
	}

	#[test]
	fn update_warns_once_and_writes() {
		let mut obj = Object::new();
		capture::take();
		obj.update(vec![
			("g".to_string(), FieldValue::from(1)),
			("h".to_string(), FieldValue::from(2)),
		]);
		assert_eq!(capture::take(), 1);
		assert_eq!(obj.get("g"), Some(FieldValue::from(1)));
		assert_eq!(obj.get("h"), Some(FieldValue::from(2)));
	}

	#[test]
	fn pop_warns_and_removes() {
		let mut obj = Object::from(vec![("g", FieldValue::from(1))]);
		capture::take();
		assert_eq!(obj.pop("g"), Ok(FieldValue::from(1)));
		assert_eq!(capture::take(), 1);
		assert!(!obj.contains_key("g"));
	}

	#[test]
	fn pop_missing_key_fails() {
		let mut obj = Object::new();
		capture::take();
		assert_eq!(
			obj.pop("g"),
			Err(ModelError::KeyNotFound("g".to_string()))
		);
		assert_eq!(capture::take(), 1);
	}

	#[test]
	fn pop_or_falls_back_to_default() {
		let mut obj = Object::new();
		capture::take();
		assert_eq!(obj.pop_or("g", 7), FieldValue::from(7));
		assert_eq!(capture::take(), 1);
	}

	#[test]
	fn remove_warns_and_removes() {
		let mut obj = Object::from(vec![("g", FieldValue::from(1))]);
		capture::take();
		assert_eq!(obj.remove("g"), Ok(()));
		assert_eq!(capture::take(), 1);
		assert!(!obj.contains_key("g"));
		assert_eq!(
			obj.remove("g"),
			Err(ModelError::KeyNotFound("g".to_string()))
		);
	}

	#[test]
	fn set_delegated() {
		let mut thing = Thing::default();
		assert_eq!(thing.get("value"), Some(FieldValue::Null));
		capture::take();
		thing.set("value", 1);
		assert_eq!(capture::take(), 1);
		assert_eq!(thing.get("value"), Some(FieldValue::from(1)));
		assert_eq!(thing.len(), 1);
	}

	#[test]
	fn remove_delegated_resets_instead_of_failing() {
		let mut thing = Record::from_parts(
			ThingDelegate {
				value: FieldValue::from(1),
			},
			Fields::new(),
		);
		assert_eq!(thing.get("value"), Some(FieldValue::from(1)));
		capture::take();
		assert_eq!(thing.remove("value"), Ok(()));
		assert_eq!(capture::take(), 1);
		assert_eq!(thing.get("value"), Some(FieldValue::Null));
	}

	#[test]
	fn pop_delegated_returns_value_and_resets() {
		let mut thing = Record::from_parts(
			ThingDelegate {
				value: FieldValue::from(1),
			},
			Fields::new(),
		);
		assert_eq!(thing.pop("value"), Ok(FieldValue::from(1)));
		assert_eq!(thing.get("value"), Some(FieldValue::Null));
		assert_eq!(thing.len(), 1);
	}

	#[test]
	fn delegated_names_lead_iteration_order() {
		let thing = Record::from_parts(
			ThingDelegate::default(),
			Fields::from(vec![("b", "1"), ("a", "2")]),
		);
		assert_eq!(thing.keys().collect::<Vec<_>>(), vec!["value", "b", "a"]);
		assert_eq!(thing.len(), 3);
	}

	#[test]
	fn delegated_key_in_construction_data_is_routed() {
		let thing: Thing = Record::from_parts(
			ThingDelegate::default(),
			Fields::from(vec![("value", FieldValue::from(9)), ("extra", FieldValue::from(1))]),
		);
		assert_eq!(thing.get("value"), Some(FieldValue::from(9)));
		assert_eq!(thing.len(), 2);
		assert_eq!(thing.keys().collect::<Vec<_>>(), vec!["value", "extra"]);
	}

	#[test]
	fn debug_formats_as_map() {
		let obj = Object::from(vec![("g", FieldValue::from(1u64))]);
		assert_eq!(format!("{obj:?}"), "{\"g\": UInt(1)}");
	}
}
