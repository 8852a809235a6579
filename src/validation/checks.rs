//! Validation checks for overrides and composition tokens.
//!
//! Each check returns a `ValidationResult` accumulating every violation.
//! Checks never clamp: clamping is a construction-time operation for
//! trusted values, validation only reports.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, TektonError};
use crate::types::{
    parse_oklch_parts, Colour, ColourScale, CompositionTokens, SemanticTokens, Step, CHROMA_MAX,
    HUE_TURN,
};

use super::warning::ValidationResult;

/// Raw semantic overrides as declared by a caller or a brand file:
/// role name to step key to colour string, nothing trusted yet.
pub type RawOverrides = BTreeMap<String, BTreeMap<String, String>>;

/// Validate raw overrides.
///
/// Every step key must be one of the 11 canonical keys and every colour
/// value must parse as in-bounds OKLCH. An empty map is valid.
pub fn validate_override(overrides: &RawOverrides) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (role, steps) in overrides {
        for (step_key, value) in steps {
            if Step::parse(step_key).is_none() {
                result.error(
                    "tekton::validate::override-step",
                    format!("role '{}': invalid step key '{}'", role, step_key),
                );
            }
            check_oklch_value(&mut result, role, step_key, value);
        }
    }

    result
}

fn check_oklch_value(result: &mut ValidationResult, role: &str, step_key: &str, value: &str) {
    let Some((l, c, h)) = parse_oklch_parts(value) else {
        result.error(
            "tekton::validate::override-colour",
            format!(
                "role '{}' step '{}': '{}' does not parse as oklch(L C H)",
                role, step_key, value
            ),
        );
        return;
    };

    // Pattern matched; report each out-of-range component separately
    if !(0.0..=1.0).contains(&l) {
        result.error(
            "tekton::validate::range",
            format!(
                "role '{}' step '{}': lightness {} outside [0, 1]",
                role, step_key, l
            ),
        );
    }
    if !(0.0..=CHROMA_MAX).contains(&c) {
        result.error(
            "tekton::validate::range",
            format!(
                "role '{}' step '{}': chroma {} outside [0, {}]",
                role, step_key, c, CHROMA_MAX
            ),
        );
    }
    if !(0.0..HUE_TURN).contains(&h) {
        result.error(
            "tekton::validate::range",
            format!(
                "role '{}' step '{}': hue {} outside [0, 360)",
                role, step_key, h
            ),
        );
    }
}

/// Validate then lower raw overrides into typed semantic tokens.
///
/// Returns a `Validation` error joining every accumulated problem when the
/// raw input is invalid.
pub fn parse_overrides(overrides: &RawOverrides) -> Result<SemanticTokens> {
    let result = validate_override(overrides);
    if !result.is_valid() {
        return Err(TektonError::Validation {
            message: result.error_messages().join("; "),
            help: Some("Fix every listed override before generating".to_string()),
        });
    }

    let mut tokens = SemanticTokens::new();
    for (role, steps) in overrides {
        let scale: ColourScale = steps
            .iter()
            .filter_map(|(step_key, value)| {
                let step = Step::parse(step_key)?;
                let colour = Colour::parse_oklch(value)?;
                Some((step, colour))
            })
            .collect();
        tokens = tokens.with_role(role.clone(), scale);
    }
    Ok(tokens)
}

/// Validate a composition token bundle's value formats.
///
/// Dimension fields must be unit-bearing CSS lengths; line-height may also
/// be a bare number; font weight must sit on the 100..900 grid.
pub fn check_composition(tokens: &CompositionTokens) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_dimension(&mut result, "border.width", &tokens.border.width);
    check_dimension(&mut result, "border.radius", &tokens.border.radius);
    check_dimension(&mut result, "shadow.x", &tokens.shadow.x);
    check_dimension(&mut result, "shadow.y", &tokens.shadow.y);
    check_dimension(&mut result, "shadow.blur", &tokens.shadow.blur);
    if let Some(spread) = &tokens.shadow.spread {
        check_dimension(&mut result, "shadow.spread", spread);
    }
    check_dimension(&mut result, "spacing.padding", &tokens.spacing.padding);
    check_dimension(&mut result, "spacing.margin", &tokens.spacing.margin);
    check_dimension(&mut result, "spacing.gap", &tokens.spacing.gap);
    check_dimension(&mut result, "typography.fontSize", &tokens.typography.font_size);
    check_dimension(
        &mut result,
        "typography.letterSpacing",
        &tokens.typography.letter_spacing,
    );

    let line_height = &tokens.typography.line_height;
    if !is_dimension(line_height) && line_height.parse::<f64>().is_err() {
        result.error(
            "tekton::validate::dimension",
            format!(
                "typography.lineHeight: '{}' is not a length or a number",
                line_height
            ),
        );
    }

    let weight = tokens.typography.font_weight;
    if !(100..=900).contains(&weight) || weight % 100 != 0 {
        result.error(
            "tekton::validate::font-weight",
            format!(
                "typography.fontWeight: {} is not a multiple of 100 in 100..=900",
                weight
            ),
        );
    }

    result
}

fn check_dimension(result: &mut ValidationResult, field: &str, value: &str) {
    if !is_dimension(value) {
        result.error(
            "tekton::validate::dimension",
            format!("{}: '{}' is not a unit-bearing length", field, value),
        );
    }
}

fn is_dimension(value: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^-?(\d+\.?\d*|\.\d+)(px|rem|em|pt|%|vh|vw|ch)$").unwrap()
    });
    re.is_match(value)
}
