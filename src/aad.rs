use serde_json::Value;
use std::collections::BTreeMap;

use super::Error;

/// Turn a flat record of scalar values into canonical AAD bytes.
///
/// The record is serialized as compact JSON with its keys in ascending lexicographic
/// order, so two records with the same key/value set always produce byte-identical AAD,
/// no matter what order they were built in.  That determinism is what lets you rebuild
/// the context at decryption time and have the tag check succeed.
///
/// Values must be scalars (strings, numbers, booleans, or null).  A nested object is a
/// programming error, and so is an array: canonicalization is only defined for flat
/// records, and both composite kinds are rejected rather than guessed at.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// let context = json!({ "second": 2, "first": 1 });
/// assert_eq!(br#"{"first":1,"second":2}"#.to_vec(), data_at_rest::aad(&context)?);
/// # Ok::<(), data_at_rest::Error>(())
/// ```
///
/// # Errors
///
/// Will return [`Error::InvalidRecord`] if `record` is not a JSON object, or
/// [`Error::NestedValue`] if any field's value is an object or an array.
#[tracing::instrument(level = "trace")]
pub fn aad(record: &Value) -> Result<Vec<u8>, Error> {
	let Value::Object(fields) = record else {
		return Err(Error::invalid_record("expected an object"));
	};

	let mut canonical: BTreeMap<&String, &Value> = BTreeMap::new();

	for (name, value) in fields {
		if value.is_object() || value.is_array() {
			return Err(Error::nested_value(name));
		}

		canonical.insert(name, value);
	}

	serde_json::to_vec(&canonical)
		.map_err(|e| Error::insanity(format!("canonical AAD serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn sorts_record_keys() {
		let record = json!({ "second": 2, "first": 1 });

		assert_eq!(
			br#"{"first":1,"second":2}"#.to_vec(),
			aad(&record).expect("canonicalization failed")
		);
	}

	#[test]
	fn insertion_order_does_not_matter() {
		let mut forwards = serde_json::Map::new();
		forwards.insert("alpha".to_string(), json!("a"));
		forwards.insert("bravo".to_string(), json!(2));
		forwards.insert("charlie".to_string(), json!(true));

		let mut backwards = serde_json::Map::new();
		backwards.insert("charlie".to_string(), json!(true));
		backwards.insert("bravo".to_string(), json!(2));
		backwards.insert("alpha".to_string(), json!("a"));

		assert_eq!(
			aad(&Value::Object(forwards)).expect("canonicalization failed"),
			aad(&Value::Object(backwards)).expect("canonicalization failed")
		);
	}

	#[test]
	fn scalar_values_serialize_as_json_literals() {
		let record = json!({ "s": "x", "n": 1.5, "b": false, "z": null });

		assert_eq!(
			br#"{"b":false,"n":1.5,"s":"x","z":null}"#.to_vec(),
			aad(&record).expect("canonicalization failed")
		);
	}

	#[test]
	fn rejects_nested_object() {
		let record = json!({ "second": 2, "first": { "second": 22, "first": 11 } });

		let result = aad(&record);
		assert!(matches!(result, Err(Error::NestedValue(f)) if f == "first"));
	}

	#[test]
	fn rejects_array_value() {
		let record = json!({ "first": 1, "second": [2, 2] });

		let result = aad(&record);
		assert!(matches!(result, Err(Error::NestedValue(f)) if f == "second"));
	}

	#[test]
	fn rejects_non_object_record() {
		let result = aad(&json!([1, 2, 3]));
		assert!(matches!(result, Err(Error::InvalidRecord(_))));

		let result = aad(&json!("just a string"));
		assert!(matches!(result, Err(Error::InvalidRecord(_))));
	}

	#[test]
	fn empty_record_is_an_empty_object() {
		assert_eq!(
			b"{}".to_vec(),
			aad(&json!({})).expect("canonicalization failed")
		);
	}
}
