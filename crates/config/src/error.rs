//! Error and warning types for configuration normalization.

use thiserror::Error;

/// Errors that can occur while constructing raw options.
///
/// Normalization itself never fails: once a [`crate::RawOptions`] exists,
/// every malformed field is absorbed locally (defaulted, omitted, or
/// disabled) rather than surfaced as an error.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The options document was not valid JSON.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// The options document was valid JSON but not an object at the root.
	#[error("options must be an object, got {found}")]
	NotAnObject {
		/// The shape that was found instead.
		found: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal warning during normalization.
///
/// These are collected on the normalized config and reported to the
/// embedder, but never prevent a config from being produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
	/// A content field was present but neither a hash string nor an
	/// object carrying one; the content preview is disabled.
	MalformedContent {
		/// The shape that was found.
		found: &'static str,
	},
	/// A boost-rank hours value was not a positive number and was
	/// replaced by the default.
	InvalidRankHours {
		/// The offending value, rendered as JSON.
		got: String,
	},
	/// Wallet identifiers outside the catalog were dropped from the
	/// available set.
	UnknownWallets {
		/// The dropped identifiers, in input order.
		dropped: Vec<String>,
	},
	/// The wallet selection contained no valid entry at all; the catalog
	/// default set is used instead.
	NoValidWallets,
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::MalformedContent { found } => {
				write!(
					f,
					"'content' is {found}, expected a hash string or an object with a 'hash'; content disabled"
				)
			}
			ConfigWarning::InvalidRankHours { got } => {
				write!(f, "boost rank hours {got} is not a positive number, using default")
			}
			ConfigWarning::UnknownWallets { dropped } => {
				write!(f, "unknown wallets ignored: {}", dropped.join(", "))
			}
			ConfigWarning::NoValidWallets => {
				write!(f, "wallet selection has no valid entries, using catalog defaults")
			}
		}
	}
}
