//! Content-preview normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigWarning;
use crate::raw::{Field, RawOptions, keys};
use crate::setting::Setting;

/// Referenced content plus preview visibility.
///
/// Extra properties supplied alongside `hash` in the object form are
/// preserved verbatim in `rest` and flattened back on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
	pub hash: String,
	pub show: bool,
	#[serde(flatten)]
	pub rest: Map<String, Value>,
}

/// Resolve the content field.
///
/// A non-empty string is taken as the hash; an object must carry a
/// non-empty string `hash`. A missing key is [`Setting::Absent`]; anything
/// else present but unusable is [`Setting::Disabled`], so downstream code
/// can tell "no content configured" from "content configuration broken".
///
/// Visibility: a strict-boolean legacy `showContentPreview` overrides an
/// object-supplied `show`; with neither, previews default on.
pub fn normalize_content(
	opts: &RawOptions,
	warnings: &mut Vec<ConfigWarning>,
) -> Setting<ContentConfig> {
	let field = opts.field(keys::CONTENT);

	let (hash, object_show, rest) = match field {
		Field::Absent => return Setting::Absent,
		// An explicit `false` is an intentional switch-off, not malformed input.
		Field::Bool(false) => return Setting::Disabled,
		Field::Str(s) if !s.is_empty() => (s.to_string(), None, Map::new()),
		Field::Object(obj) => match Field::of(obj.get("hash")).nonempty_str() {
			Some(hash) => {
				let rest: Map<String, Value> = obj
					.iter()
					.filter(|(k, _)| k.as_str() != "hash" && k.as_str() != "show")
					.map(|(k, v)| (k.clone(), v.clone()))
					.collect();
				(hash.to_string(), Field::of(obj.get("show")).strict_bool(), rest)
			}
			None => {
				warnings.push(ConfigWarning::MalformedContent { found: "object without a hash" });
				return Setting::Disabled;
			}
		},
		other => {
			warnings.push(ConfigWarning::MalformedContent { found: other.type_name() });
			return Setting::Disabled;
		}
	};

	let show = opts
		.field(keys::SHOW_CONTENT_PREVIEW)
		.strict_bool()
		.or(object_show)
		.unwrap_or(true);

	Setting::Value(ContentConfig { hash, show, rest })
}
