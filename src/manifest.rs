//! Brand manifest (brand.yaml) parsing.
//!
//! The manifest is the file form of a brand spec: anchor colours, manual
//! overrides, composition values, and output options. All fields default
//! so a minimal file only names an anchor or a preset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TektonError};
use crate::types::{Colour, CompositionTokens, Step};
use crate::validation::RawOverrides;

/// An anchor colour binding a semantic role to an OKLCH value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Semantic role the anchor drives (e.g. "primary").
    pub role: String,

    /// The anchor colour.
    #[serde(rename = "color")]
    pub colour: Colour,

    /// Scale step the anchor lightness lands on exactly.
    #[serde(default = "default_base_step")]
    pub base_step: Step,
}

impl Anchor {
    /// Anchor a role at step 500.
    pub fn new(role: impl Into<String>, colour: Colour) -> Self {
        Self {
            role: role.into(),
            colour,
            base_step: default_base_step(),
        }
    }
}

fn default_base_step() -> Step {
    Step::S500
}

fn default_dark_mode() -> bool {
    true
}

/// A brand specification loaded from brand.yaml or built in code.
///
/// Serializes deterministically, which is what the cache keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandSpec {
    /// Brand name, informational only.
    pub name: String,

    /// Builtin preset supplying the five required roles. Defaults to
    /// "default" when unset.
    pub preset: Option<String>,

    /// Anchor colours; each replaces its role's preset scale.
    pub anchors: Vec<Anchor>,

    /// Manual per-step overrides, validated before use.
    pub overrides: RawOverrides,

    /// Optional composition token bundle.
    pub composition: Option<CompositionTokens>,

    /// Derive and emit a dark-mode counterpart.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    /// Custom-property prefix; "tekton" when unset.
    pub prefix: Option<String>,
}

impl Default for BrandSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            preset: None,
            anchors: Vec::new(),
            overrides: RawOverrides::new(),
            composition: None,
            dark_mode: true,
            prefix: None,
        }
    }
}

impl BrandSpec {
    /// Load a brand spec from a brand.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TektonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read brand file: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a brand spec from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TektonError::Config {
            message: format!("Invalid brand file: {}", e),
            help: Some("Check brand.yaml syntax".to_string()),
        })
    }

    /// The effective custom-property prefix.
    pub fn effective_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("tekton")
    }

    /// The effective preset name.
    pub fn effective_preset(&self) -> &str {
        self.preset.as_deref().unwrap_or("default")
    }
}
