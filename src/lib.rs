//! tekton - Design token generation engine
//!
//! A library for turning a small brand colour specification into a
//! complete, deterministic set of design tokens: OKLCH colour scales,
//! semantic roles, and composition values, exported as CSS custom
//! properties, a Tailwind config, or DTCG JSON, with a derived dark-mode
//! variant. A content-addressed cache wraps generation so interactive
//! editing stays responsive.

pub mod cache;
pub mod engine;
pub mod error;
pub mod export;
pub mod generate;
pub mod manifest;
pub mod types;
pub mod validation;

pub use cache::{
    canonical_digest, CacheConfig, CacheEntry, CacheKey, CacheStats, FileInvalidationTracker,
    TokenCache,
};
pub use engine::{build_theme, GeneratedTheme, TokenEngine};
pub use error::{Result, TektonError};
pub use export::{
    export_to_dtcg, export_to_tailwind, format_rule, generate_css_from_tokens,
    generate_css_variables, generate_dark_mode_css, generate_dark_mode_overrides,
    merge_light_and_dark_css, CssOptions, TailwindFormat, TailwindOptions, DARK_SELECTOR,
};
pub use generate::{
    derive_dark_tokens, generate_colour_scale, invert_scale, reference_lightness, BuiltinPresets,
    Preset,
};
pub use manifest::{Anchor, BrandSpec};
pub use types::{
    interpolate_hue, BorderStyle, BorderTokens, Colour, ColourScale, CompositionTokens,
    SemanticTokens, ShadowTokens, SpacingTokens, Step, TypographyTokens, CHROMA_MAX,
    REQUIRED_ROLES,
};
pub use validation::{
    check_composition, check_theme_contrast, contrast_ratio, parse_overrides, validate_override,
    Diagnostic, RawOverrides, Severity, ValidationResult,
};
