//! Tailwind config exporter.
//!
//! Emits a config module whose `theme.extend.colors` carries one nested
//! object per role or named scale, with every step rendered as 6-digit
//! hex. OKLCH stays canonical; hex here is the derived preview form.

use crate::types::SemanticTokens;

/// Output module flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailwindFormat {
    /// CommonJS `module.exports = { ... };`
    #[default]
    CommonJs,
    /// TypeScript `const config = { ... } satisfies Config`
    TypeScript,
}

/// Options for Tailwind output.
#[derive(Debug, Clone, Default)]
pub struct TailwindOptions {
    pub format: TailwindFormat,
}

/// Export semantic tokens (plus optional extra named scales) as a Tailwind
/// config module.
///
/// Scales in `extra` that share a name with a semantic role are skipped;
/// the semantic entry wins.
pub fn export_to_tailwind(
    semantic: &SemanticTokens,
    extra: Option<&SemanticTokens>,
    options: &TailwindOptions,
) -> String {
    let mut colours = String::new();
    for (name, scale) in semantic.iter() {
        push_scale(&mut colours, name, scale);
    }
    if let Some(extra) = extra {
        for (name, scale) in extra.iter() {
            if !semantic.contains_role(name) {
                push_scale(&mut colours, name, scale);
            }
        }
    }

    let body = format!(
        "  theme: {{\n    extend: {{\n      colors: {{\n{}      }},\n    }},\n  }},",
        colours
    );

    match options.format {
        TailwindFormat::CommonJs => {
            format!("module.exports = {{\n{}\n}};\n", body)
        }
        TailwindFormat::TypeScript => {
            format!(
                "import type {{ Config }} from 'tailwindcss'\n\nconst config = {{\n{}\n}} satisfies Config\n\nexport default config\n",
                body
            )
        }
    }
}

fn push_scale(out: &mut String, name: &str, scale: &crate::types::ColourScale) {
    out.push_str(&format!("        {}: {{\n", name));
    for (step, colour) in scale.iter() {
        out.push_str(&format!("          '{}': '{}',\n", step, colour.to_hex()));
    }
    out.push_str("        },\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_colour_scale, BuiltinPresets};
    use crate::types::{Colour, Step};

    fn theme() -> SemanticTokens {
        BuiltinPresets::default_preset().tokens()
    }

    #[test]
    fn test_commonjs_shape() {
        let config = export_to_tailwind(&theme(), None, &TailwindOptions::default());

        assert!(config.starts_with("module.exports = {"));
        assert!(config.contains("theme: {"));
        assert!(config.contains("extend: {"));
        assert!(config.contains("colors: {"));
        assert!(config.contains("primary: {"));
        assert!(config.contains("neutral: {"));
        assert_eq!(config.matches('{').count(), config.matches('}').count());
    }

    #[test]
    fn test_typescript_shape() {
        let options = TailwindOptions {
            format: TailwindFormat::TypeScript,
        };
        let config = export_to_tailwind(&theme(), None, &options);

        assert!(config.starts_with("import type { Config } from 'tailwindcss'"));
        assert!(config.contains("const config = {"));
        assert!(config.contains("} satisfies Config"));
        assert!(config.contains("export default config"));
    }

    #[test]
    fn test_every_step_rendered_as_hex() {
        let config = export_to_tailwind(&theme(), None, &TailwindOptions::default());

        for step in Step::ALL {
            assert!(config.contains(&format!("'{}': '#", step)));
        }
        // Hex values are 6-digit lowercase
        for value in config.split('#').skip(1) {
            let hex: String = value.chars().take(6).collect();
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_extra_scales_appended() {
        let extra: SemanticTokens = [(
            "brand".to_string(),
            generate_colour_scale(Colour { l: 0.5, c: 0.2, h: 300.0 }, Step::S500),
        )]
        .into_iter()
        .collect();

        let config = export_to_tailwind(&theme(), Some(&extra), &TailwindOptions::default());
        assert!(config.contains("brand: {"));
    }

    #[test]
    fn test_semantic_entry_wins_over_extra() {
        let extra: SemanticTokens = [(
            "primary".to_string(),
            generate_colour_scale(Colour { l: 0.9, c: 0.0, h: 0.0 }, Step::S500),
        )]
        .into_iter()
        .collect();

        let config = export_to_tailwind(&theme(), Some(&extra), &TailwindOptions::default());
        assert_eq!(config.matches("primary: {").count(), 1);
    }
}
