//! CSS custom-property exporter.
//!
//! Output is deterministic for a fixed input: roles in declared order,
//! steps ascending, composition properties in their fixed order. Every
//! declaration line ends with `;` and blocks keep balanced braces.

use crate::types::{CompositionTokens, SemanticTokens};

/// Selector for the dark-mode override block.
pub const DARK_SELECTOR: &str = "[data-theme=\"dark\"]";

/// Options for CSS output.
#[derive(Debug, Clone)]
pub struct CssOptions {
    /// Custom-property prefix (`--<prefix>-<role>-<step>`).
    pub prefix: String,
    /// Emit without newlines or double spaces.
    pub minify: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            prefix: "tekton".to_string(),
            minify: false,
        }
    }
}

/// Format a rule block from declaration pairs.
pub fn format_rule(selector: &str, declarations: &[(String, String)], minify: bool) -> String {
    if minify {
        let body: String = declarations
            .iter()
            .map(|(property, value)| format!("{}:{};", property, value))
            .collect();
        return format!("{}{{{}}}", selector, body);
    }

    let mut out = format!("{} {{\n", selector);
    for (property, value) in declarations {
        out.push_str(&format!("  {}: {};\n", property, value));
    }
    out.push('}');
    out
}

fn semantic_declarations(tokens: &SemanticTokens, prefix: &str) -> Vec<(String, String)> {
    let mut declarations = Vec::new();
    for (role, scale) in tokens.iter() {
        for (step, colour) in scale.iter() {
            declarations.push((
                format!("--{}-{}-{}", prefix, role, step),
                colour.to_string(),
            ));
        }
    }
    declarations
}

fn composition_declarations(
    composition: &CompositionTokens,
    prefix: &str,
) -> Vec<(String, String)> {
    composition
        .css_properties()
        .into_iter()
        .map(|(suffix, value)| (format!("--{}-{}", prefix, suffix), value))
        .collect()
}

/// Generate the `:root` block for a semantic token set.
pub fn generate_css_variables(tokens: &SemanticTokens, options: &CssOptions) -> String {
    format_rule(
        ":root",
        &semantic_declarations(tokens, &options.prefix),
        options.minify,
    )
}

/// Generate the `:root` block for semantic plus optional composition
/// tokens. Composition values are flattened into the same block.
pub fn generate_css_from_tokens(
    tokens: &SemanticTokens,
    composition: Option<&CompositionTokens>,
    options: &CssOptions,
) -> String {
    let mut declarations = semantic_declarations(tokens, &options.prefix);
    if let Some(composition) = composition {
        declarations.extend(composition_declarations(composition, &options.prefix));
    }
    format_rule(":root", &declarations, options.minify)
}

/// Generate the `[data-theme="dark"]` override block for a dark token set.
pub fn generate_dark_mode_css(dark: &SemanticTokens, options: &CssOptions) -> String {
    format_rule(
        DARK_SELECTOR,
        &semantic_declarations(dark, &options.prefix),
        options.minify,
    )
}

/// Generate the dark override block, ordering roles the way the light set
/// declares them.
///
/// The full dark set is emitted even where a value matches light mode;
/// consumers toggle a single attribute and the cascade does the rest.
pub fn generate_dark_mode_overrides(
    light: &SemanticTokens,
    dark: &SemanticTokens,
    options: &CssOptions,
) -> String {
    let mut ordered = SemanticTokens::new();
    for (role, _) in light.iter() {
        if let Some(scale) = dark.get(role) {
            ordered = ordered.with_role(role, scale.clone());
        }
    }
    for (role, scale) in dark.iter() {
        if !ordered.contains_role(role) {
            ordered = ordered.with_role(role, scale.clone());
        }
    }
    generate_dark_mode_css(&ordered, options)
}

/// Concatenate light and dark blocks. An empty dark block is the identity.
pub fn merge_light_and_dark_css(light: &str, dark: &str) -> String {
    if dark.is_empty() {
        return light.to_string();
    }
    format!("{}\n{}", light, dark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{derive_dark_tokens, generate_colour_scale, BuiltinPresets};
    use crate::types::{Colour, ColourScale, Step};

    fn theme() -> SemanticTokens {
        BuiltinPresets::default_preset().tokens()
    }

    #[test]
    fn test_root_block_structure() {
        let css = generate_css_variables(&theme(), &CssOptions::default());

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with('}'));
        assert_eq!(css.matches('{').count(), css.matches('}').count());

        // Every declaration line is indented and terminated
        for line in css.lines().filter(|l| l.contains("--tekton-")) {
            assert!(line.starts_with("  --tekton-"), "bad line: {}", line);
            assert!(line.ends_with(';'), "unterminated line: {}", line);
        }
    }

    #[test]
    fn test_all_steps_for_every_role() {
        let css = generate_css_variables(&theme(), &CssOptions::default());
        for role in ["primary", "neutral", "success", "warning", "error"] {
            for step in Step::ALL {
                let property = format!("--tekton-{}-{}:", role, step);
                assert!(css.contains(&property), "missing {}", property);
            }
        }
    }

    #[test]
    fn test_declared_role_order() {
        let css = generate_css_variables(&theme(), &CssOptions::default());
        let primary = css.find("--tekton-primary-50:").unwrap();
        let neutral = css.find("--tekton-neutral-50:").unwrap();
        let error = css.find("--tekton-error-50:").unwrap();
        assert!(primary < neutral && neutral < error);
    }

    #[test]
    fn test_exact_output_shape() {
        let scale: ColourScale = [
            (Step::S500, Colour { l: 0.6, c: 0.15, h: 220.0 }),
            (Step::S600, Colour { l: 0.5, c: 0.15, h: 220.0 }),
        ]
        .into_iter()
        .collect();
        let tokens: SemanticTokens = [("primary".to_string(), scale)].into_iter().collect();

        let css = generate_css_variables(&tokens, &CssOptions::default());
        insta::assert_snapshot!(css, @r#"
:root {
  --tekton-primary-500: oklch(0.6 0.15 220);
  --tekton-primary-600: oklch(0.5 0.15 220);
}
"#);
    }

    #[test]
    fn test_custom_prefix() {
        let options = CssOptions {
            prefix: "app".to_string(),
            ..CssOptions::default()
        };
        let css = generate_css_variables(&theme(), &options);
        assert!(css.contains("--app-primary-500:"));
        assert!(!css.contains("--tekton-"));
    }

    #[test]
    fn test_minified_output() {
        let options = CssOptions {
            minify: true,
            ..CssOptions::default()
        };
        let normal = generate_css_variables(&theme(), &CssOptions::default());
        let minified = generate_css_variables(&theme(), &options);

        assert!(minified.len() < normal.len());
        assert!(!minified.contains('\n'));
        assert!(!minified.contains("  "));
        assert!(minified.starts_with(":root{"));
    }

    #[test]
    fn test_empty_token_set() {
        let css = generate_css_variables(&SemanticTokens::new(), &CssOptions::default());
        assert_eq!(css, ":root {\n}");
    }

    fn sample_composition() -> CompositionTokens {
        use crate::types::{
            BorderStyle, BorderTokens, ShadowTokens, SpacingTokens, TypographyTokens,
        };
        CompositionTokens {
            border: BorderTokens {
                width: "1px".to_string(),
                style: BorderStyle::Solid,
                colour: Colour { l: 0.88, c: 0.002, h: 0.0 },
                radius: "4px".to_string(),
            },
            shadow: ShadowTokens {
                x: "0px".to_string(),
                y: "1px".to_string(),
                blur: "2px".to_string(),
                spread: None,
                colour: Colour::BLACK,
            },
            spacing: SpacingTokens {
                padding: "1rem".to_string(),
                margin: "1rem".to_string(),
                gap: "0.5rem".to_string(),
            },
            typography: TypographyTokens {
                font_size: "1rem".to_string(),
                font_weight: 400,
                line_height: "1.5".to_string(),
                letter_spacing: "0em".to_string(),
            },
        }
    }

    #[test]
    fn test_composition_flattened_into_root() {
        let composition = sample_composition();
        let css =
            generate_css_from_tokens(&theme(), Some(&composition), &CssOptions::default());

        assert!(css.contains("--tekton-border-width: 1px;"));
        assert!(css.contains("--tekton-shadow-blur: 2px;"));
        assert!(css.contains("--tekton-spacing-padding: 1rem;"));
        assert!(css.contains("--tekton-typography-font-weight: 400;"));
        // Still one block
        assert_eq!(css.matches('{').count(), 1);
    }

    #[test]
    fn test_dark_block_selector() {
        let dark = derive_dark_tokens(&theme());
        let css = generate_dark_mode_css(&dark, &CssOptions::default());

        assert!(css.starts_with("[data-theme=\"dark\"] {\n"));
        assert!(css.contains("--tekton-primary-500:"));
        assert_eq!(css.matches('{').count(), css.matches('}').count());
    }

    #[test]
    fn test_dark_overrides_full_emission() {
        let light = theme();
        let mut dark = derive_dark_tokens(&light);
        // Reuse the light error scale; it must still be emitted
        dark = dark.with_role("error", light.get("error").unwrap().clone());

        let css = generate_dark_mode_overrides(&light, &dark, &CssOptions::default());
        for step in Step::ALL {
            assert!(css.contains(&format!("--tekton-error-{}:", step)));
        }
    }

    #[test]
    fn test_dark_overrides_keep_light_role_order() {
        let light = theme();
        // Declared in a different order on the dark side
        let mut reversed: Vec<_> = light.iter().collect();
        reversed.reverse();
        let dark: SemanticTokens = reversed
            .into_iter()
            .map(|(role, scale)| (role.to_string(), scale.clone()))
            .collect();

        let css = generate_dark_mode_overrides(&light, &dark, &CssOptions::default());
        let primary = css.find("--tekton-primary-50:").unwrap();
        let error = css.find("--tekton-error-50:").unwrap();
        assert!(primary < error);
    }

    #[test]
    fn test_merge_identity_on_empty_dark() {
        let light = generate_css_variables(&theme(), &CssOptions::default());
        assert_eq!(merge_light_and_dark_css(&light, ""), light);
    }

    #[test]
    fn test_merge_separates_blocks_with_newline() {
        let light = generate_css_variables(&theme(), &CssOptions::default());
        let dark = generate_dark_mode_css(&derive_dark_tokens(&theme()), &CssOptions::default());

        let merged = merge_light_and_dark_css(&light, &dark);
        assert!(merged.contains("}\n[data-theme=\"dark\"] {"));
        assert!(merged.find(":root").unwrap() < merged.find(DARK_SELECTOR).unwrap());
    }

    #[test]
    fn test_scale_values_round_trip_into_css() {
        let anchor = Colour { l: 0.5, c: 0.15, h: 220.0 };
        let scale = generate_colour_scale(anchor, Step::S500);
        let tokens: SemanticTokens = [("primary".to_string(), scale)].into_iter().collect();

        let css = generate_css_variables(&tokens, &CssOptions::default());
        assert!(css.contains("--tekton-primary-500: oklch(0.5 0.15 220);"));
    }
}
