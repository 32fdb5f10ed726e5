//! Tag and category field normalization.
//!
//! Both are the same labeled-toggle field: a free-form text input with a
//! visibility toggle and a disabled state, differing only in which option
//! key carries the value and which legacy flag forces visibility. One
//! parameterized normalizer serves both.

use serde::{Deserialize, Serialize};

use crate::raw::{Field, RawOptions, keys};

/// A free-form input field with visibility and disabled toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledField {
	pub value: String,
	pub show: bool,
	pub disabled: bool,
}

impl Default for LabeledField {
	fn default() -> Self {
		Self {
			value: String::new(),
			show: true,
			disabled: false,
		}
	}
}

/// Resolve the tag field (`tag` / legacy `showTagField`).
pub fn normalize_tag(opts: &RawOptions) -> Option<LabeledField> {
	normalize_labeled(opts, keys::TAG, keys::SHOW_TAG_FIELD)
}

/// Resolve the category field (`category` / legacy `showCategoryField`).
pub fn normalize_category(opts: &RawOptions) -> Option<LabeledField> {
	normalize_labeled(opts, keys::CATEGORY, keys::SHOW_CATEGORY_FIELD)
}

/// Shared resolution for labeled-toggle fields.
///
/// An unset value yields the defaults only when the legacy flag is
/// literally `true` (letting a legacy caller force an empty-but-visible
/// field); otherwise the field is omitted. A non-empty string sets the
/// value; an object is accepted when it carries a string `value` (empty
/// allowed) or a literal `show: true`. Any other shape omits the field.
///
/// The legacy flag, when a strict boolean, overrides the computed `show`
/// in every accepted branch.
fn normalize_labeled(
	opts: &RawOptions,
	field_key: &str,
	legacy_show_key: &str,
) -> Option<LabeledField> {
	let legacy_show = opts.field(legacy_show_key).strict_bool();
	let field = opts.field(field_key);

	if field.is_unset() {
		return match legacy_show {
			Some(true) => Some(LabeledField::default()),
			_ => None,
		};
	}

	let mut out = match field {
		Field::Str(value) => LabeledField {
			value: value.to_string(),
			..LabeledField::default()
		},
		Field::Object(obj) => {
			let value = Field::of(obj.get("value")).str_any();
			let show = Field::of(obj.get("show")).strict_bool();
			if value.is_none() && show != Some(true) {
				return None;
			}
			LabeledField {
				value: value.unwrap_or("").to_string(),
				show: show.unwrap_or(true),
				disabled: Field::of(obj.get("disabled")).strict_bool().unwrap_or(false),
			}
		}
		_ => return None,
	};

	if let Some(show) = legacy_show {
		out.show = show;
	}
	Some(out)
}
