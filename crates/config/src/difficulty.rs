//! Difficulty and slider normalization.
//!
//! Both fields are deliberately inert for now: the widget's difficulty
//! slider reads its bounds from built-in defaults, and none of the legacy
//! knobs (`minDiff`, `maxDiff`, `initialDiff`, `diffMultiplier`,
//! `lockDiff`, `showInputDiff`, `showSliderDiff`, `sliderDiffStep`,
//! `sliderDiffMarkerStep`, `sliderMarkersMaxCount`) nor the nested
//! `difficulty` / `slider` objects are consulted. Embedder input for these
//! fields is accepted and ignored.
//!
//! TODO: wire up `min`/`max`/`initial`/`multiplier`/`locked`/`showInput`
//! and the slider step/marker settings once the target shape is confirmed
//! with the widget owners.

use serde::{Deserialize, Serialize};

use crate::raw::RawOptions;

/// Difficulty-slider bounds. Currently empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DifficultyConfig {}

/// Slider presentation settings. Currently empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SliderConfig {}

/// Resolve the difficulty field. Input is ignored by design; see the
/// module docs.
pub fn normalize_difficulty(_opts: &RawOptions) -> DifficultyConfig {
	DifficultyConfig::default()
}

/// Resolve the slider field. Input is ignored by design; see the module
/// docs.
pub fn normalize_slider(_opts: &RawOptions) -> SliderConfig {
	SliderConfig::default()
}
