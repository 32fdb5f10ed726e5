//! Wallet-selection normalization.

use boostbutton_wallets::WalletCatalog;
use serde::{Deserialize, Serialize};

use crate::error::ConfigWarning;
use crate::raw::{Field, RawOptions, keys};

/// The wallets the widget offers and the one it preselects.
///
/// `available` is always non-empty and drawn from the catalog; `initial`
/// is always a catalog member (though not necessarily in `available` when
/// the embedder narrowed the list without picking an initial wallet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletsConfig {
	pub available: Vec<String>,
	pub initial: String,
}

/// Resolve the wallet selection against a catalog.
///
/// The `wallets` field may be an object (`available` list plus `initial`),
/// a single wallet identifier, or a bare list of identifiers. Whatever the
/// path, the selection passes through the catalog filter last, so no
/// invalid identifier survives; an entirely invalid selection falls back
/// to the catalog's own set. The legacy `initialWallet` beats an
/// object-supplied `initial`, and both are canonicalized.
pub fn normalize_wallets(
	opts: &RawOptions,
	catalog: &WalletCatalog,
	warnings: &mut Vec<ConfigWarning>,
) -> WalletsConfig {
	let mut available: Vec<String> = catalog.valid().to_vec();
	let mut object_initial: Option<&str> = None;

	match opts.field(keys::WALLETS) {
		Field::Object(obj) => {
			if let Some(entries) = Field::of(obj.get("available")).array() {
				available = entries
					.iter()
					.filter_map(|v| v.as_str().map(str::to_string))
					.collect();
			}
			object_initial = Field::of(obj.get("initial")).nonempty_str();
		}
		Field::Str(wallet) => {
			if catalog.is_valid(wallet) {
				available = vec![wallet.to_string()];
			}
		}
		Field::Array(entries) if !entries.is_empty() => {
			available = entries
				.iter()
				.filter_map(|v| v.as_str().map(str::to_string))
				.collect();
		}
		_ => {}
	}

	// The validity gate runs last and unconditionally; nothing above is
	// trusted to produce only catalog members.
	let dropped: Vec<String> = available
		.iter()
		.filter(|w| !catalog.is_valid(w))
		.cloned()
		.collect();
	if !dropped.is_empty() {
		tracing::warn!(dropped = ?dropped, "dropping unknown wallets from selection");
		warnings.push(ConfigWarning::UnknownWallets { dropped });
	}
	let mut available = catalog.filter_valid(&available);
	if available.is_empty() {
		tracing::warn!("wallet selection has no valid entries, using catalog defaults");
		warnings.push(ConfigWarning::NoValidWallets);
		available = catalog.valid().to_vec();
	}

	let initial = match opts.field(keys::INITIAL_WALLET).nonempty_str() {
		Some(wallet) => catalog.canonicalize(wallet),
		None => match object_initial {
			Some(wallet) => catalog.canonicalize(wallet),
			None => catalog.default_wallet().to_string(),
		},
	};

	WalletsConfig { available, initial }
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn wallets(value: serde_json::Value) -> (WalletsConfig, Vec<ConfigWarning>) {
		let opts = RawOptions::from_value(value).unwrap();
		let mut warnings = Vec::new();
		let config = normalize_wallets(&opts, &WalletCatalog::default(), &mut warnings);
		(config, warnings)
	}

	#[test]
	fn test_defaults() {
		let (config, warnings) = wallets(json!({}));
		assert_eq!(config.available, &["moneybutton", "relayx"]);
		assert_eq!(config.initial, "moneybutton");
		assert!(warnings.is_empty());
	}

	#[test]
	fn test_single_valid_string() {
		let (config, _) = wallets(json!({ "wallets": "relayx" }));
		assert_eq!(config.available, &["relayx"]);
	}

	#[test]
	fn test_single_invalid_string_keeps_defaults() {
		let (config, warnings) = wallets(json!({ "wallets": "bogus" }));
		assert_eq!(config.available, &["moneybutton", "relayx"]);
		assert!(warnings.is_empty());
	}

	#[test]
	fn test_array_is_filtered() {
		let (config, warnings) = wallets(json!({ "wallets": ["relayx", "bogus"] }));
		assert_eq!(config.available, &["relayx"]);
		assert_eq!(
			warnings,
			vec![ConfigWarning::UnknownWallets { dropped: vec!["bogus".to_string()] }]
		);
	}

	#[test]
	fn test_all_invalid_falls_back_to_catalog() {
		let (config, warnings) = wallets(json!({ "wallets": ["bogus", "fake"] }));
		assert_eq!(config.available, &["moneybutton", "relayx"]);
		assert!(warnings.contains(&ConfigWarning::NoValidWallets));
	}

	#[test]
	fn test_object_form() {
		let (config, _) = wallets(json!({
			"wallets": { "available": ["relayx"], "initial": "relayx" }
		}));
		assert_eq!(config.available, &["relayx"]);
		assert_eq!(config.initial, "relayx");
	}

	#[test]
	fn test_object_invalid_initial_canonicalized() {
		let (config, _) = wallets(json!({
			"wallets": { "initial": "bogus" }
		}));
		assert_eq!(config.initial, "moneybutton");
	}

	#[test]
	fn test_legacy_initial_beats_object_initial() {
		let (config, _) = wallets(json!({
			"wallets": { "initial": "moneybutton" },
			"initialWallet": "relayx"
		}));
		assert_eq!(config.initial, "relayx");
	}

	#[test]
	fn test_legacy_initial_canonicalized() {
		let (config, _) = wallets(json!({ "initialWallet": "bogus" }));
		assert_eq!(config.initial, "moneybutton");
	}

	#[test]
	fn test_custom_catalog() {
		let catalog = WalletCatalog::new(
			["handcash", "relayx"].map(String::from),
			"handcash",
		);
		let opts = RawOptions::from_value(json!({ "wallets": "moneybutton" })).unwrap();
		let mut warnings = Vec::new();
		let config = normalize_wallets(&opts, &catalog, &mut warnings);
		// "moneybutton" is not in this catalog.
		assert_eq!(config.available, &["handcash", "relayx"]);
		assert_eq!(config.initial, "handcash");
	}

	#[test]
	fn test_available_invariant_holds() {
		for value in [
			json!({ "wallets": [] }),
			json!({ "wallets": [1, 2, 3] }),
			json!({ "wallets": { "available": [] } }),
			json!({ "wallets": null }),
			json!({ "wallets": 7 }),
		] {
			let (config, _) = wallets(value.clone());
			assert!(!config.available.is_empty(), "available empty for {value}");
			let catalog = WalletCatalog::default();
			assert!(config.available.iter().all(|w| catalog.is_valid(w)));
		}
	}
}
