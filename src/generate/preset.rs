//! Builtin brand presets.
//!
//! A preset is a complete five-role anchor set that lowers into full
//! colour scales. Brand specs start from a preset and override from there.

use crate::types::{Colour, SemanticTokens, Step};

use super::scale::generate_colour_scale;

/// A named anchor set for the five required roles.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    anchors: [(&'static str, Colour); 5],
}

impl Preset {
    /// Anchor colour for a role, if the preset defines one.
    pub fn anchor(&self, role: &str) -> Option<Colour> {
        self.anchors
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, colour)| *colour)
    }

    /// Lower the anchors into complete colour scales, in declared order.
    pub fn tokens(&self) -> SemanticTokens {
        self.anchors
            .iter()
            .map(|(role, anchor)| (role.to_string(), generate_colour_scale(*anchor, Step::S500)))
            .collect()
    }
}

/// Builtin preset catalogue.
pub struct BuiltinPresets;

impl BuiltinPresets {
    /// Get all builtin presets.
    pub fn all() -> Vec<Preset> {
        vec![
            Preset {
                name: "default",
                description: "Balanced chroma, blue primary",
                anchors: [
                    ("primary", Colour { l: 0.53, c: 0.15, h: 220.0 }),
                    ("neutral", Colour { l: 0.53, c: 0.01, h: 220.0 }),
                    ("success", Colour { l: 0.53, c: 0.15, h: 140.0 }),
                    ("warning", Colour { l: 0.53, c: 0.15, h: 60.0 }),
                    ("error", Colour { l: 0.53, c: 0.15, h: 20.0 }),
                ],
            },
            Preset {
                name: "accessible",
                description: "Darker midpoints for stronger text contrast",
                anchors: [
                    ("primary", Colour { l: 0.47, c: 0.12, h: 220.0 }),
                    ("neutral", Colour { l: 0.47, c: 0.005, h: 220.0 }),
                    ("success", Colour { l: 0.45, c: 0.12, h: 145.0 }),
                    ("warning", Colour { l: 0.48, c: 0.11, h: 65.0 }),
                    ("error", Colour { l: 0.45, c: 0.13, h: 25.0 }),
                ],
            },
            Preset {
                name: "vibrant",
                description: "High-chroma anchors for saturated brands",
                anchors: [
                    ("primary", Colour { l: 0.55, c: 0.25, h: 220.0 }),
                    ("neutral", Colour { l: 0.55, c: 0.02, h: 220.0 }),
                    ("success", Colour { l: 0.56, c: 0.21, h: 145.0 }),
                    ("warning", Colour { l: 0.6, c: 0.19, h: 70.0 }),
                    ("error", Colour { l: 0.55, c: 0.23, h: 25.0 }),
                ],
            },
        ]
    }

    /// Get a builtin preset by name.
    pub fn get(name: &str) -> Option<Preset> {
        Self::all().into_iter().find(|preset| preset.name == name)
    }

    /// The preset used when a brand spec names none.
    pub fn default_preset() -> Preset {
        Self::get("default").expect("default preset exists")
    }
}
