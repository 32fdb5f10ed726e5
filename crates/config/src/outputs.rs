//! Payment-output passthrough.

use serde_json::Value;

use crate::raw::{RawOptions, keys};

/// Resolve the outputs list.
///
/// Entries are handed to the widget verbatim; their shape (address,
/// amount, currency) is the widget contract, not validated here.
pub fn normalize_outputs(opts: &RawOptions) -> Vec<Value> {
	opts.field(keys::OUTPUTS)
		.array()
		.map(<[Value]>::to_vec)
		.unwrap_or_default()
}
