//! Three-state field result: absent, disabled, or configured.

use serde::{Serialize, Serializer};

/// Outcome of normalizing a field that can be explicitly switched off.
///
/// The widget's wire format overloads falsy values: a missing key means
/// "not configured" while a literal `false` means "configured off (or the
/// configuration was unusable)". The distinction matters downstream, so it
/// is a real sum type here instead of a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Setting<T> {
	/// The field was not configured; it is omitted from output.
	#[default]
	Absent,
	/// The field was explicitly disabled, or configured but unusable.
	/// Serialized as the literal `false` the widget expects.
	Disabled,
	/// A normalized configuration value.
	Value(T),
}

impl<T> Setting<T> {
	pub fn is_absent(&self) -> bool {
		matches!(self, Setting::Absent)
	}

	pub fn is_disabled(&self) -> bool {
		matches!(self, Setting::Disabled)
	}

	/// The configured value, if there is one.
	pub fn value(&self) -> Option<&T> {
		match self {
			Setting::Value(v) => Some(v),
			_ => None,
		}
	}

	pub fn into_value(self) -> Option<T> {
		match self {
			Setting::Value(v) => Some(v),
			_ => None,
		}
	}
}

impl<T: Serialize> Serialize for Setting<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			// Absent fields are skipped at the struct level; `null` only
			// appears if a caller serializes a bare `Setting`.
			Setting::Absent => serializer.serialize_none(),
			Setting::Disabled => serializer.serialize_bool(false),
			Setting::Value(v) => v.serialize(serializer),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_accessors() {
		let s: Setting<i32> = Setting::Value(7);
		assert_eq!(s.value(), Some(&7));
		assert!(!s.is_absent());
		assert!(Setting::<i32>::Absent.is_absent());
		assert!(Setting::<i32>::Disabled.is_disabled());
		assert_eq!(Setting::<i32>::Disabled.into_value(), None);
	}

	#[test]
	fn test_serialize_disabled_as_false() {
		assert_eq!(serde_json::to_value(Setting::<i32>::Disabled).unwrap(), json!(false));
		assert_eq!(serde_json::to_value(Setting::Value(7)).unwrap(), json!(7));
	}
}
