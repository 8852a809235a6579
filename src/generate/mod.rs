//! Token generation: scales from anchors, dark-mode derivation, presets.

mod dark;
mod preset;
mod scale;

pub use dark::{derive_dark_tokens, invert_scale};
pub use preset::{BuiltinPresets, Preset};
pub use scale::{generate_colour_scale, reference_lightness};
