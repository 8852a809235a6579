//! Validation for overrides, composition tokens, and generated themes.
//!
//! All checks accumulate diagnostics instead of failing fast, so a token
//! editor can surface every problem in one pass. Validation never clamps
//! or repairs values.

mod checks;
mod contrast;
mod warning;

pub use checks::{check_composition, parse_overrides, validate_override, RawOverrides};
pub use contrast::{check_theme_contrast, contrast_ratio, AAA_NORMAL_TEXT, AA_NORMAL_TEXT};
pub use warning::{Diagnostic, Severity, ValidationResult};
