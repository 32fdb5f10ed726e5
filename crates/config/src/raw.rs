//! Untrusted raw options and per-field shape classification.
//!
//! Widget embedders hand us one open-ended options object. Field values
//! arrive in whatever shape the embedder chose: a bare string, a bare
//! boolean, a structured object, or garbage. Rather than chaining runtime
//! predicate checks, every lookup classifies the value into a [`Field`]
//! variant so each normalizer can match the possible shapes exhaustively.

use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

/// Option-field names, both schemas.
pub mod keys {
	pub const MESSAGE: &str = "message";
	pub const DISPLAY_MESSAGE: &str = "displayMessage";
	pub const CONTENT: &str = "content";
	pub const SHOW_CONTENT_PREVIEW: &str = "showContentPreview";
	pub const TAG: &str = "tag";
	pub const SHOW_TAG_FIELD: &str = "showTagField";
	pub const CATEGORY: &str = "category";
	pub const SHOW_CATEGORY_FIELD: &str = "showCategoryField";
	pub const BOOST_RANK: &str = "boostRank";
	pub const GET_BOOST_RANK: &str = "getBoostRank";
	pub const RANK_HOURS: &str = "rankHours";
	pub const WALLETS: &str = "wallets";
	pub const INITIAL_WALLET: &str = "initialWallet";
	pub const OUTPUTS: &str = "outputs";
}

/// The raw, untyped options object.
///
/// Legacy flat names and current-schema nested names may coexist in one
/// map; each normalizer reads whichever it needs and applies its own
/// precedence. The map is never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOptions(Map<String, Value>);

impl RawOptions {
	/// An empty options object (every field absent).
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap a JSON value, which must be an object at the root.
	pub fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			other => Err(ConfigError::NotAnObject {
				found: json_type_name(&other),
			}),
		}
	}

	/// Parse a JSON document into raw options.
	pub fn from_json_str(input: &str) -> Result<Self> {
		Self::from_value(serde_json::from_str(input)?)
	}

	/// Classify the named field's value.
	pub fn field(&self, name: &str) -> Field<'_> {
		Field::of(self.0.get(name))
	}
}

impl From<Map<String, Value>> for RawOptions {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

/// A raw field value, classified by shape.
///
/// Numbers are carried as `f64`; JSON cannot encode NaN or infinity, so the
/// usual numeric hazards reduce to sign and zero checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
	/// The key does not exist in the options object.
	Absent,
	/// The key exists with an explicit `null`.
	Null,
	Bool(bool),
	Num(f64),
	Str(&'a str),
	Array(&'a [Value]),
	Object(&'a Map<String, Value>),
}

impl<'a> Field<'a> {
	/// Classify an optional JSON value (absent key included).
	pub fn of(value: Option<&'a Value>) -> Self {
		match value {
			None => Field::Absent,
			Some(Value::Null) => Field::Null,
			Some(Value::Bool(b)) => Field::Bool(*b),
			Some(Value::Number(n)) => Field::Num(n.as_f64().unwrap_or(0.0)),
			Some(Value::String(s)) => Field::Str(s),
			Some(Value::Array(a)) => Field::Array(a),
			Some(Value::Object(o)) => Field::Object(o),
		}
	}

	/// The string value, if this is a string of length >= 1.
	pub fn nonempty_str(self) -> Option<&'a str> {
		match self {
			Field::Str(s) if !s.is_empty() => Some(s),
			_ => None,
		}
	}

	/// The string value, if this is a string of any length.
	pub fn str_any(self) -> Option<&'a str> {
		match self {
			Field::Str(s) => Some(s),
			_ => None,
		}
	}

	/// The boolean value, if this is an actual boolean. Truthy stand-ins
	/// (`1`, `"true"`) do not count.
	pub fn strict_bool(self) -> Option<bool> {
		match self {
			Field::Bool(b) => Some(b),
			_ => None,
		}
	}

	/// The numeric value, if this is a number.
	pub fn number(self) -> Option<f64> {
		match self {
			Field::Num(n) => Some(n),
			_ => None,
		}
	}

	pub fn array(self) -> Option<&'a [Value]> {
		match self {
			Field::Array(a) => Some(a),
			_ => None,
		}
	}

	pub fn object(self) -> Option<&'a Map<String, Value>> {
		match self {
			Field::Object(o) => Some(o),
			_ => None,
		}
	}

	/// Legacy unset test: absent, `null`, `false`, `0`, and `""` all mean
	/// "the embedder did not configure this". Kept for the fields whose
	/// legacy contract was defined in those terms.
	pub fn is_unset(self) -> bool {
		match self {
			Field::Absent | Field::Null => true,
			Field::Bool(b) => !b,
			Field::Num(n) => n == 0.0,
			Field::Str(s) => s.is_empty(),
			Field::Array(_) | Field::Object(_) => false,
		}
	}

	pub fn is_set(self) -> bool {
		!self.is_unset()
	}

	/// Human-readable shape name for diagnostics.
	pub fn type_name(self) -> &'static str {
		match self {
			Field::Absent => "absent",
			Field::Null => "null",
			Field::Bool(_) => "boolean",
			Field::Num(_) => "number",
			Field::Str(_) => "string",
			Field::Array(_) => "array",
			Field::Object(_) => "object",
		}
	}
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
