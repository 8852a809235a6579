//! Cached pipeline entry point.
//!
//! `TokenEngine` wraps the pure generation functions with the token cache,
//! keyed by a canonical hash of the brand spec, and owns the file tracker
//! used to invalidate cached results when a source file changes.

use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::{CacheConfig, CacheKey, CacheStats, FileInvalidationTracker, TokenCache};
use crate::error::{Result, TektonError};
use crate::export::{
    export_to_dtcg, export_to_tailwind, generate_css_from_tokens, generate_dark_mode_overrides,
    merge_light_and_dark_css, CssOptions, TailwindFormat, TailwindOptions,
};
use crate::generate::{derive_dark_tokens, generate_colour_scale, BuiltinPresets};
use crate::manifest::BrandSpec;
use crate::types::{CompositionTokens, SemanticTokens};
use crate::validation::{check_composition, parse_overrides};

/// A fully generated theme, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTheme {
    pub light: SemanticTokens,
    pub dark: Option<SemanticTokens>,
    pub composition: Option<CompositionTokens>,
    pub prefix: String,
}

impl GeneratedTheme {
    /// Export as CSS custom properties: a `:root` block, followed by the
    /// dark override block when dark mode was derived.
    pub fn to_css(&self, minify: bool) -> String {
        let options = CssOptions {
            prefix: self.prefix.clone(),
            minify,
        };
        let light = generate_css_from_tokens(&self.light, self.composition.as_ref(), &options);

        match &self.dark {
            Some(dark) => {
                let dark_css = generate_dark_mode_overrides(&self.light, dark, &options);
                merge_light_and_dark_css(&light, &dark_css)
            }
            None => light,
        }
    }

    /// Export as a Tailwind config module.
    pub fn to_tailwind(&self, format: TailwindFormat) -> String {
        export_to_tailwind(&self.light, None, &TailwindOptions { format })
    }

    /// Export as DTCG JSON.
    pub fn to_dtcg(&self) -> String {
        export_to_dtcg(&self.light, self.dark.as_ref())
    }
}

/// Build a theme from a brand spec without caching.
///
/// Preset roles come first, anchors replace their roles, validated
/// overrides merge per step, and the result must be complete before dark
/// derivation runs.
pub fn build_theme(spec: &BrandSpec) -> Result<GeneratedTheme> {
    let preset_name = spec.effective_preset();
    let preset = BuiltinPresets::get(preset_name).ok_or_else(|| TektonError::Config {
        message: format!("Unknown preset '{}'", preset_name),
        help: Some("Builtin presets are default, accessible, and vibrant".to_string()),
    })?;

    let mut tokens = preset.tokens();
    for anchor in &spec.anchors {
        let scale = generate_colour_scale(anchor.colour.round(3), anchor.base_step);
        tokens = tokens.with_role(anchor.role.clone(), scale);
    }

    let overrides = parse_overrides(&spec.overrides)?;
    let tokens = tokens.with_overrides(Some(&overrides));
    tokens.validate_complete()?;

    if let Some(composition) = &spec.composition {
        let result = check_composition(composition);
        if !result.is_valid() {
            return Err(TektonError::Validation {
                message: result.error_messages().join("; "),
                help: Some("Fix the composition token values listed above".to_string()),
            });
        }
    }

    let dark = spec.dark_mode.then(|| derive_dark_tokens(&tokens));

    Ok(GeneratedTheme {
        light: tokens,
        dark,
        composition: spec.composition.clone(),
        prefix: spec.effective_prefix().to_string(),
    })
}

/// The cached token pipeline.
#[derive(Debug, Default)]
pub struct TokenEngine {
    cache: TokenCache<GeneratedTheme>,
    tracker: FileInvalidationTracker,
}

impl TokenEngine {
    /// Create an engine with the given cache configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            cache: TokenCache::new(config),
            tracker: FileInvalidationTracker::new(),
        }
    }

    /// Generate a theme, reusing a cached result for an equivalent spec.
    ///
    /// The cache key is a canonical hash of the spec, so two specs that
    /// serialize to the same structure share one entry regardless of how
    /// they were built.
    pub fn generate(&mut self, spec: &BrandSpec) -> Result<GeneratedTheme> {
        let key = CacheKey::structured(spec);

        if let Some(theme) = self.cache.get(key.clone()) {
            debug!(brand = %spec.name, "token generation cache hit");
            return Ok(theme);
        }

        debug!(brand = %spec.name, "generating tokens");
        let theme = build_theme(spec)?;
        self.cache.set(key, theme.clone());
        Ok(theme)
    }

    /// Record a source file observation, clearing the cache when the file
    /// changed since it was last seen.
    ///
    /// Returns `true` when the cache was invalidated.
    pub fn check_source(&mut self, path: impl AsRef<Path>, timestamp: SystemTime) -> bool {
        let path = path.as_ref();
        if self.tracker.is_modified(path, timestamp) {
            debug!(path = %path.display(), "source changed, clearing token cache");
            self.cache.clear();
            self.tracker.record_file(path, timestamp);
            return true;
        }
        false
    }

    /// Cache statistics since the last invalidation.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.get_stats()
    }

    /// Drop every cached theme.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The file tracker backing `check_source`.
    pub fn tracker(&self) -> &FileInvalidationTracker {
        &self.tracker
    }
}
