//! Display-message normalization.

use serde::{Deserialize, Serialize};

use crate::raw::{Field, RawOptions, keys};

/// Text shown alongside the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageConfig {
	pub text: String,
}

/// Resolve the display message, current schema first.
///
/// Accepted shapes, first match wins: `message` as a non-empty string,
/// `message.text` as a non-empty string, legacy `displayMessage` as a
/// non-empty string. Empty strings count as absent.
pub fn normalize_message(opts: &RawOptions) -> Option<MessageConfig> {
	let field = opts.field(keys::MESSAGE);
	if let Some(text) = field.nonempty_str() {
		return Some(MessageConfig { text: text.to_string() });
	}
	if let Some(obj) = field.object() {
		if let Some(text) = Field::of(obj.get("text")).nonempty_str() {
			return Some(MessageConfig { text: text.to_string() });
		}
	}
	opts.field(keys::DISPLAY_MESSAGE)
		.nonempty_str()
		.map(|text| MessageConfig { text: text.to_string() })
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn raw(value: serde_json::Value) -> RawOptions {
		RawOptions::from_value(value).unwrap()
	}

	#[test]
	fn test_bare_string() {
		let opts = raw(json!({ "message": "hello" }));
		assert_eq!(normalize_message(&opts).unwrap().text, "hello");
	}

	#[test]
	fn test_object_form() {
		let opts = raw(json!({ "message": { "text": "hello" } }));
		assert_eq!(normalize_message(&opts).unwrap().text, "hello");
	}

	#[test]
	fn test_current_schema_beats_legacy() {
		let opts = raw(json!({
			"message": { "text": "new" },
			"displayMessage": "old"
		}));
		assert_eq!(normalize_message(&opts).unwrap().text, "new");
	}

	#[test]
	fn test_legacy_fallback() {
		let opts = raw(json!({ "displayMessage": "old" }));
		assert_eq!(normalize_message(&opts).unwrap().text, "old");
	}

	#[test]
	fn test_empty_object_text_falls_through_to_legacy() {
		let opts = raw(json!({
			"message": { "text": "" },
			"displayMessage": "old"
		}));
		assert_eq!(normalize_message(&opts).unwrap().text, "old");
	}

	#[test]
	fn test_unusable_shapes_are_absent() {
		for value in [json!({}), json!({ "message": "" }), json!({ "message": 5 })] {
			assert_eq!(normalize_message(&raw(value)), None);
		}
	}
}
