//! Semantic token sets mapping role names to colour scales.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TektonError};

use super::ColourScale;

/// The roles every complete token set must provide. Optional roles
/// (secondary, accent, info, ...) are open-ended.
pub const REQUIRED_ROLES: [&str; 5] = ["primary", "neutral", "success", "warning", "error"];

/// A semantic token set: role name to colour scale, in declared order.
///
/// Declared order is preserved so exporters emit roles deterministically.
/// Required-role validation happens where a set is declared complete, not
/// on every mutation, so partial sets are legal intermediates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SemanticTokens {
    roles: Vec<(String, ColourScale)>,
}

impl SemanticTokens {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a role's scale by name.
    pub fn get(&self, role: &str) -> Option<&ColourScale> {
        self.roles
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, scale)| scale)
    }

    /// Check if a role is present.
    pub fn contains_role(&self, role: &str) -> bool {
        self.get(role).is_some()
    }

    /// Iterate roles in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColourScale)> {
        self.roles.iter().map(|(name, scale)| (name.as_str(), scale))
    }

    /// Role names in declared order.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|(name, _)| name.as_str())
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if the set has no roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Return a copy with one role's scale replaced (or appended if new).
    pub fn with_role(&self, role: impl Into<String>, scale: ColourScale) -> Self {
        let mut result = self.clone();
        result.insert(role.into(), scale);
        result
    }

    /// Apply per-role overrides, returning a new token set.
    ///
    /// Each override scale is merged per-step over the matching base scale;
    /// roles present only in `overrides` are appended as new roles. A
    /// `None` argument is a no-op clone.
    pub fn with_overrides(&self, overrides: Option<&SemanticTokens>) -> Self {
        let Some(overrides) = overrides else {
            return self.clone();
        };

        let mut result = self.clone();
        for (role, partial) in overrides.iter() {
            let merged = ColourScale::merge(result.get(role), partial);
            result.insert(role.to_string(), merged);
        }
        result
    }

    /// Declare this token set complete.
    ///
    /// All five required roles must be present and every scale (required or
    /// optional) must carry all 11 steps. Problems are accumulated into one
    /// error rather than reported one at a time.
    pub fn validate_complete(&self) -> Result<()> {
        let mut problems = Vec::new();

        for role in REQUIRED_ROLES {
            if !self.contains_role(role) {
                problems.push(format!("missing required role '{}'", role));
            }
        }

        for (role, scale) in self.iter() {
            if !scale.is_complete() {
                let missing: Vec<&str> = scale
                    .missing_steps()
                    .iter()
                    .map(|step| step.as_str())
                    .collect();
                problems.push(format!(
                    "role '{}' is missing steps {}",
                    role,
                    missing.join(", ")
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(TektonError::Validation {
                message: problems.join("; "),
                help: Some(
                    "A complete token set needs primary, neutral, success, warning, and error \
                     roles, each with all 11 steps"
                        .to_string(),
                ),
            })
        }
    }

    pub(crate) fn insert(&mut self, role: String, scale: ColourScale) {
        match self.roles.iter_mut().find(|(name, _)| *name == role) {
            Some(entry) => entry.1 = scale,
            None => self.roles.push((role, scale)),
        }
    }
}

impl FromIterator<(String, ColourScale)> for SemanticTokens {
    fn from_iter<I: IntoIterator<Item = (String, ColourScale)>>(iter: I) -> Self {
        let mut tokens = Self::new();
        for (role, scale) in iter {
            tokens.insert(role, scale);
        }
        tokens
    }
}

impl Serialize for SemanticTokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roles.len()))?;
        for (role, scale) in &self.roles {
            map.serialize_entry(role, scale)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SemanticTokens {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct TokensVisitor;

        impl<'de> Visitor<'de> for TokensVisitor {
            type Value = SemanticTokens;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of role names to colour scales")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut tokens = SemanticTokens::new();
                while let Some((role, scale)) = access.next_entry::<String, ColourScale>()? {
                    tokens.insert(role, scale);
                }
                Ok(tokens)
            }
        }

        deserializer.deserialize_map(TokensVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Step};

    fn flat_scale(l: f64) -> ColourScale {
        Step::ALL
            .iter()
            .map(|&step| (step, Colour { l, c: 0.1, h: 220.0 }))
            .collect()
    }

    fn base_tokens() -> SemanticTokens {
        REQUIRED_ROLES
            .iter()
            .map(|&role| (role.to_string(), flat_scale(0.5)))
            .collect()
    }

    #[test]
    fn test_declared_order_preserved() {
        let tokens = base_tokens();
        let names: Vec<&str> = tokens.role_names().collect();
        assert_eq!(names, REQUIRED_ROLES.to_vec());
    }

    #[test]
    fn test_with_overrides_replaces_single_step() {
        let base = base_tokens();
        let replacement = Colour { l: 0.65, c: 0.15, h: 200.0 };
        let overrides: SemanticTokens = [(
            "primary".to_string(),
            [(Step::S500, replacement)].into_iter().collect(),
        )]
        .into_iter()
        .collect();

        let result = base.with_overrides(Some(&overrides));

        assert_eq!(result.get("primary").unwrap().get(Step::S500), Some(replacement));
        // Untouched step and untouched roles stay identical
        assert_eq!(
            result.get("primary").unwrap().get(Step::S600),
            base.get("primary").unwrap().get(Step::S600)
        );
        assert_eq!(result.get("neutral"), base.get("neutral"));
        assert_eq!(result.get("error"), base.get("error"));
    }

    #[test]
    fn test_with_overrides_empty_is_identity() {
        let base = base_tokens();
        assert_eq!(base.with_overrides(Some(&SemanticTokens::new())), base);
        assert_eq!(base.with_overrides(None), base);
    }

    #[test]
    fn test_with_overrides_appends_new_role() {
        let base = base_tokens();
        let overrides: SemanticTokens =
            [("secondary".to_string(), flat_scale(0.6))].into_iter().collect();

        let result = base.with_overrides(Some(&overrides));

        assert_eq!(result.len(), 6);
        assert_eq!(result.role_names().last(), Some("secondary"));
        assert!(result.get("secondary").unwrap().is_complete());
    }

    #[test]
    fn test_validate_complete_ok() {
        assert!(base_tokens().validate_complete().is_ok());
    }

    #[test]
    fn test_validate_complete_missing_role() {
        let mut tokens = base_tokens();
        tokens.roles.retain(|(name, _)| name != "warning");

        let err = tokens.validate_complete().unwrap_err();
        assert!(err.to_string().contains("warning"));
    }

    #[test]
    fn test_validate_complete_partial_scale() {
        let partial: ColourScale =
            [(Step::S500, Colour { l: 0.5, c: 0.1, h: 0.0 })].into_iter().collect();
        let tokens = base_tokens().with_role("accent", partial);

        let err = tokens.validate_complete().unwrap_err();
        assert!(err.to_string().contains("accent"));
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let tokens = base_tokens().with_role("secondary", flat_scale(0.4));
        let json = serde_json::to_string(&tokens).unwrap();
        let back: SemanticTokens = serde_json::from_str(&json).unwrap();

        assert_eq!(back, tokens);
        let names: Vec<&str> = back.role_names().collect();
        assert_eq!(names.last(), Some(&"secondary"));
    }
}
