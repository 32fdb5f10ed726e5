//! Wallet catalog for the boost widget.
//!
//! A catalog is a closed enumeration of wallet identifiers the widget can
//! drive, plus the one used when the caller expresses no preference. The
//! catalog is an explicit value handed to configuration normalization rather
//! than a module-level singleton, so callers (and tests) can substitute their
//! own enumeration.
//!
//! Identifiers are plain lowercase strings (`"moneybutton"`, `"relayx"`).
//! Anything outside the catalog is invalid and is dropped or canonicalized
//! to the default, never passed through.

use serde::{Deserialize, Serialize};

/// Wallet identifiers the stock widget ships with.
pub const VALID_WALLETS: &[&str] = &["moneybutton", "relayx"];

/// Wallet used when the caller expresses no preference.
pub const DEFAULT_WALLET: &str = "moneybutton";

/// A closed set of wallet identifiers with a designated default.
///
/// Invariant: `default` is always a member of `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletCatalog {
	valid: Vec<String>,
	default: String,
}

impl Default for WalletCatalog {
	fn default() -> Self {
		Self::new(
			VALID_WALLETS.iter().map(|w| w.to_string()),
			DEFAULT_WALLET,
		)
	}
}

impl WalletCatalog {
	/// Build a catalog from an identifier set and a default.
	///
	/// The default is appended to the set if missing, so the catalog
	/// invariant holds regardless of input.
	pub fn new(valid: impl IntoIterator<Item = String>, default: impl Into<String>) -> Self {
		let default = default.into();
		let mut valid: Vec<String> = valid.into_iter().collect();
		if !valid.contains(&default) {
			valid.push(default.clone());
		}
		Self { valid, default }
	}

	/// All valid wallet identifiers, in catalog order.
	pub fn valid(&self) -> &[String] {
		&self.valid
	}

	/// The identifier used when no valid preference is given.
	pub fn default_wallet(&self) -> &str {
		&self.default
	}

	/// Whether `wallet` is a member of the catalog.
	pub fn is_valid(&self, wallet: &str) -> bool {
		self.valid.iter().any(|w| w == wallet)
	}

	/// Canonicalize an identifier: valid ones pass through unchanged,
	/// anything else becomes the catalog default.
	pub fn canonicalize(&self, wallet: &str) -> String {
		if self.is_valid(wallet) {
			wallet.to_string()
		} else {
			self.default.clone()
		}
	}

	/// Drop invalid identifiers from a list, preserving order.
	pub fn filter_valid<I, S>(&self, wallets: I) -> Vec<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		wallets
			.into_iter()
			.filter(|w| self.is_valid(w.as_ref()))
			.map(|w| w.as_ref().to_string())
			.collect()
	}
}
