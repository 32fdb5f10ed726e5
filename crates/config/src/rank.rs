//! Boost-rank normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigWarning;
use crate::raw::{Field, RawOptions, keys};
use crate::setting::Setting;

/// Ranking window used when the caller supplies none (or a bad one).
pub const DEFAULT_RANK_HOURS: f64 = 24.0;

/// Parameters for the ranking query the widget issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
	/// Lookback window in hours. Always positive.
	pub hours: f64,
	/// Tags to filter the ranking query with.
	pub tags: Vec<String>,
	/// Categories to filter the ranking query with.
	pub categories: Vec<String>,
}

impl Default for RankConfig {
	fn default() -> Self {
		Self {
			hours: DEFAULT_RANK_HOURS,
			tags: Vec::new(),
			categories: Vec::new(),
		}
	}
}

/// Resolve the boost-rank field.
///
/// The current-schema `boostRank` wins when it is a strict boolean
/// (`true` = defaults, `false` = disabled) or an object (merged over
/// defaults). Otherwise the legacy trio applies: ranking is on by default,
/// `getBoostRank: false` switches it off, and `rankHours` sets the window
/// when positive.
///
/// A merged `hours` that is not a positive number is replaced by
/// [`DEFAULT_RANK_HOURS`] with a warning rather than rejected.
pub fn normalize_rank(
	opts: &RawOptions,
	warnings: &mut Vec<ConfigWarning>,
) -> Setting<RankConfig> {
	match opts.field(keys::BOOST_RANK) {
		Field::Bool(true) => return Setting::Value(RankConfig::default()),
		Field::Bool(false) => return Setting::Disabled,
		Field::Object(obj) => {
			let mut config = RankConfig::default();
			if let Some(raw_hours) = obj.get("hours") {
				config.hours = positive_hours(raw_hours, warnings);
			}
			config.tags = string_list(Field::of(obj.get("tags")));
			config.categories = string_list(Field::of(obj.get("categories")));
			return Setting::Value(config);
		}
		// Not a boolean or an object: treat as undefined, consult legacy.
		_ => {}
	}

	match opts.field(keys::GET_BOOST_RANK) {
		Field::Bool(false) => Setting::Disabled,
		// Ranking is enabled by default.
		Field::Absent => Setting::Value(RankConfig::default()),
		_ => {
			let mut config = RankConfig::default();
			if let Some(raw_hours) = opts.field(keys::RANK_HOURS).number() {
				if raw_hours > 0.0 {
					config.hours = raw_hours;
				} else {
					warnings.push(ConfigWarning::InvalidRankHours {
						got: raw_hours.to_string(),
					});
				}
			}
			Setting::Value(config)
		}
	}
}

fn positive_hours(raw: &Value, warnings: &mut Vec<ConfigWarning>) -> f64 {
	match Field::of(Some(raw)).number() {
		Some(hours) if hours > 0.0 => hours,
		_ => {
			warnings.push(ConfigWarning::InvalidRankHours { got: raw.to_string() });
			DEFAULT_RANK_HOURS
		}
	}
}

/// String entries of an array field; non-strings are dropped.
fn string_list(field: Field<'_>) -> Vec<String> {
	field
		.array()
		.map(|entries| {
			entries
				.iter()
				.filter_map(|v| v.as_str().map(str::to_string))
				.collect()
		})
		.unwrap_or_default()
}
