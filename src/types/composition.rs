//! Composition tokens for non-colour design values.
//!
//! The bundle shape is fixed: border, shadow, spacing, and typography.
//! Dimension fields are unit-bearing strings (`"1px"`, `"1rem"`) validated
//! by format, never parsed into numbers internally.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Colour;

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    None,
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::None => "none",
        };
        f.write_str(s)
    }
}

/// Border tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    pub width: String,
    pub style: BorderStyle,
    #[serde(rename = "color")]
    pub colour: Colour,
    pub radius: String,
}

/// Shadow tokens. Spread is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub x: String,
    pub y: String,
    pub blur: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<String>,
    #[serde(rename = "color")]
    pub colour: Colour,
}

/// Spacing tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub padding: String,
    pub margin: String,
    pub gap: String,
}

/// Typography tokens. Font weight is the CSS 100..900 grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_size: String,
    pub font_weight: u16,
    pub line_height: String,
    pub letter_spacing: String,
}

/// The fixed-shape composition token bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionTokens {
    pub border: BorderTokens,
    pub shadow: ShadowTokens,
    pub spacing: SpacingTokens,
    pub typography: TypographyTokens,
}

impl CompositionTokens {
    /// Flatten into custom-property suffix/value pairs, in a fixed order.
    ///
    /// Suffixes are kebab-case and get the caller's prefix applied by the
    /// CSS exporter (`--tekton-border-width`, ...).
    pub fn css_properties(&self) -> Vec<(String, String)> {
        let mut props = vec![
            ("border-width".to_string(), self.border.width.clone()),
            ("border-style".to_string(), self.border.style.to_string()),
            ("border-color".to_string(), self.border.colour.to_string()),
            ("border-radius".to_string(), self.border.radius.clone()),
            ("shadow-x".to_string(), self.shadow.x.clone()),
            ("shadow-y".to_string(), self.shadow.y.clone()),
            ("shadow-blur".to_string(), self.shadow.blur.clone()),
        ];
        if let Some(spread) = &self.shadow.spread {
            props.push(("shadow-spread".to_string(), spread.clone()));
        }
        props.extend([
            ("shadow-color".to_string(), self.shadow.colour.to_string()),
            ("spacing-padding".to_string(), self.spacing.padding.clone()),
            ("spacing-margin".to_string(), self.spacing.margin.clone()),
            ("spacing-gap".to_string(), self.spacing.gap.clone()),
            (
                "typography-font-size".to_string(),
                self.typography.font_size.clone(),
            ),
            (
                "typography-font-weight".to_string(),
                self.typography.font_weight.to_string(),
            ),
            (
                "typography-line-height".to_string(),
                self.typography.line_height.clone(),
            ),
            (
                "typography-letter-spacing".to_string(),
                self.typography.letter_spacing.clone(),
            ),
        ]);
        props
    }
}
