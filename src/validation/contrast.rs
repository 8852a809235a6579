//! WCAG contrast checks over generated token sets.

use crate::types::{Colour, SemanticTokens, Step};

use super::warning::ValidationResult;

/// Minimum contrast for normal text at WCAG AA.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum contrast for normal text at WCAG AAA.
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// WCAG relative luminance of the gamut-clamped sRGB rendering.
fn relative_luminance(colour: Colour) -> f64 {
    let linear: palette::LinSrgb = colour.to_srgb().into_linear();
    0.2126 * linear.red as f64 + 0.7152 * linear.green as f64 + 0.0722 * linear.blue as f64
}

/// WCAG contrast ratio between two colours, in `[1, 21]`.
pub fn contrast_ratio(a: Colour, b: Colour) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Warn for role text colours that fall below AA against the neutral
/// background.
///
/// Uses each role's 700 step as the text colour and neutral 50 as the
/// background, the pairing component themes rely on. Contrast problems are
/// warnings, not errors: a brand may accept them deliberately.
pub fn check_theme_contrast(tokens: &SemanticTokens) -> ValidationResult {
    let mut result = ValidationResult::new();

    let background = tokens
        .get("neutral")
        .and_then(|scale| scale.get(Step::S50));
    let Some(background) = background else {
        result.warning(
            "tekton::validate::contrast",
            "no neutral 50 background to check contrast against",
        );
        return result;
    };

    for (role, scale) in tokens.iter() {
        let Some(text) = scale.get(Step::S700) else {
            continue;
        };
        let ratio = contrast_ratio(text, background);
        if ratio < AA_NORMAL_TEXT {
            result.warning(
                "tekton::validate::contrast",
                format!(
                    "role '{}' step 700 on neutral 50 is {:.2}:1, below AA {}:1",
                    role, ratio, AA_NORMAL_TEXT
                ),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_colour_scale, BuiltinPresets};
    use crate::types::ColourScale;

    #[test]
    fn test_black_on_white_is_maximal() {
        let ratio = contrast_ratio(Colour::BLACK, Colour::WHITE);
        assert!(ratio > 20.0, "got {}", ratio);
    }

    #[test]
    fn test_same_colour_is_unity() {
        let c = Colour { l: 0.5, c: 0.1, h: 220.0 };
        let ratio = contrast_ratio(c, c);
        assert!((ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetry() {
        let a = Colour { l: 0.3, c: 0.1, h: 220.0 };
        let b = Colour { l: 0.9, c: 0.02, h: 60.0 };
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_default_preset_passes_aa() {
        let tokens = BuiltinPresets::default_preset().tokens();
        let result = check_theme_contrast(&tokens);
        let messages: Vec<&str> = result.iter().map(|d| d.message.as_str()).collect();
        assert!(!result.has_warnings(), "{:?}", messages);
    }

    #[test]
    fn test_flat_light_theme_warns() {
        let washed: ColourScale = Step::ALL
            .iter()
            .map(|&step| (step, Colour { l: 0.8, c: 0.0, h: 0.0 }))
            .collect();
        let neutral = generate_colour_scale(Colour { l: 0.53, c: 0.01, h: 220.0 }, Step::S500);

        let tokens: SemanticTokens = [
            ("primary".to_string(), washed),
            ("neutral".to_string(), neutral),
        ]
        .into_iter()
        .collect();

        let result = check_theme_contrast(&tokens);
        assert!(result.has_warnings());
    }

    #[test]
    fn test_missing_neutral_warns() {
        let result = check_theme_contrast(&SemanticTokens::new());
        assert!(result.has_warnings());
    }
}
