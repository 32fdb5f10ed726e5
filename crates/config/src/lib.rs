//! Configuration normalization for the boost widget.
//!
//! Embedders configure the widget with one untyped options object that may
//! follow the deprecated flat schema, the nested current schema, or a mix
//! of both. This crate folds whatever arrives into one canonical
//! [`Config`], applying per-field precedence (current schema wins unless
//! documented otherwise), shape-tolerant coercion, and defaults.
//!
//! Normalization never fails and never panics: a malformed field is
//! defaulted, omitted, or disabled, and the incident is recorded in
//! [`Config::warnings`] for the embedder to surface.
//!
//! ```
//! use boostbutton_config::{Config, RawOptions, normalize};
//! use boostbutton_wallets::WalletCatalog;
//!
//! let opts = RawOptions::from_json_str(
//!     r#"{ "displayMessage": "hello world", "tag": "bitcoin", "boostRank": { "hours": 6 } }"#,
//! )
//! .unwrap();
//! let config = normalize(&opts, &WalletCatalog::default());
//!
//! assert_eq!(config.message.unwrap().text, "hello world");
//! assert_eq!(config.tag.unwrap().value, "bitcoin");
//! assert_eq!(config.boost_rank.value().unwrap().hours, 6.0);
//! ```
//!
//! Each field normalizer is a free function over the whole raw object
//! (legacy names sit at the top level, current-schema names are nested),
//! independently callable and tested; [`normalize`] is only the fan-out.

pub mod content;
pub mod difficulty;
pub mod error;
pub mod labeled;
pub mod message;
pub mod outputs;
pub mod rank;
pub mod raw;
pub mod setting;
pub mod wallets;

use boostbutton_wallets::WalletCatalog;
use serde::Serialize;
use serde_json::Value;

pub use content::ContentConfig;
pub use difficulty::{DifficultyConfig, SliderConfig};
pub use error::{ConfigError, ConfigWarning, Result};
pub use labeled::LabeledField;
pub use message::MessageConfig;
pub use rank::RankConfig;
pub use raw::{Field, RawOptions};
pub use setting::Setting;
pub use wallets::WalletsConfig;

/// The canonical widget configuration.
///
/// Every field is normalized independently; none depends on another's
/// result. Serialization matches the widget's wire format: camelCase keys,
/// absent fields omitted, disabled [`Setting`]s as literal `false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
	/// Display text for the widget.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<MessageConfig>,
	/// Referenced content and preview visibility.
	#[serde(skip_serializing_if = "Setting::is_absent")]
	pub content: Setting<ContentConfig>,
	/// Tag input field.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<LabeledField>,
	/// Category input field.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<LabeledField>,
	/// Ranking-query parameters; `Disabled` switches ranking off.
	#[serde(skip_serializing_if = "Setting::is_absent")]
	pub boost_rank: Setting<RankConfig>,
	/// Difficulty-slider bounds (currently inert, see [`difficulty`]).
	pub difficulty: DifficultyConfig,
	/// Slider presentation (currently inert, see [`difficulty`]).
	pub slider: SliderConfig,
	/// Offered wallets and the preselected one.
	pub wallets: WalletsConfig,
	/// Payment outputs, passed through unvalidated.
	pub outputs: Vec<Value>,
	/// Non-fatal diagnostics collected during normalization.
	#[serde(skip)]
	pub warnings: Vec<ConfigWarning>,
}

/// Normalize raw options into a [`Config`] against a wallet catalog.
///
/// Pure and infallible: one fan-out over the nine field normalizers, one
/// fan-in. Concurrent calls never interact.
pub fn normalize(opts: &RawOptions, catalog: &WalletCatalog) -> Config {
	let mut warnings = Vec::new();
	Config {
		message: message::normalize_message(opts),
		content: content::normalize_content(opts, &mut warnings),
		tag: labeled::normalize_tag(opts),
		category: labeled::normalize_category(opts),
		boost_rank: rank::normalize_rank(opts, &mut warnings),
		difficulty: difficulty::normalize_difficulty(opts),
		slider: difficulty::normalize_slider(opts),
		wallets: wallets::normalize_wallets(opts, catalog, &mut warnings),
		outputs: outputs::normalize_outputs(opts),
		warnings,
	}
}

impl Config {
	/// Normalize a JSON value (must be an object at the root).
	pub fn from_value(value: Value, catalog: &WalletCatalog) -> Result<Self> {
		Ok(normalize(&RawOptions::from_value(value)?, catalog))
	}

	/// Parse and normalize a JSON document.
	pub fn from_json_str(input: &str, catalog: &WalletCatalog) -> Result<Self> {
		Ok(normalize(&RawOptions::from_json_str(input)?, catalog))
	}
}
