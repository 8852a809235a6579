//! Core domain types for tekton.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - OKLCH colour values
//! - `Step` / `ColourScale` - the 11-step colour scales
//! - `SemanticTokens` - named role to scale mappings
//! - `CompositionTokens` - non-colour design values

mod colour;
mod composition;
mod scale;
mod semantic;

pub use colour::{interpolate_hue, Colour, CHROMA_MAX, HUE_TURN};
pub use composition::{
    BorderStyle, BorderTokens, CompositionTokens, ShadowTokens, SpacingTokens, TypographyTokens,
};
pub use scale::{ColourScale, Step};
pub use semantic::{SemanticTokens, REQUIRED_ROLES};

pub(crate) use colour::parse_oklch_parts;
