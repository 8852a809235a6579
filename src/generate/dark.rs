//! Dark-mode derivation.
//!
//! Dark counterparts invert lightness per step (`l' = 1 - l`) and keep
//! chroma and hue, so step 50 is the darkest surface in dark mode and the
//! step numbering keeps its meaning for consumers.

use crate::types::{Colour, ColourScale, SemanticTokens};

/// Invert a single scale's lightness.
pub fn invert_scale(scale: &ColourScale) -> ColourScale {
    scale
        .iter()
        .map(|(step, colour)| {
            let inverted = Colour {
                l: 1.0 - colour.l,
                c: colour.c,
                h: colour.h,
            }
            .clamp()
            .round(3);
            (step, inverted)
        })
        .collect()
}

/// Derive the dark-mode counterpart of a full token set.
///
/// Role order is preserved so light and dark CSS blocks line up.
pub fn derive_dark_tokens(light: &SemanticTokens) -> SemanticTokens {
    light
        .iter()
        .map(|(role, scale)| (role.to_string(), invert_scale(scale)))
        .collect()
}
