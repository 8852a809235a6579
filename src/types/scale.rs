//! Colour scale steps and scales.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TektonError;

use super::Colour;

/// A step key in a colour scale, lightest (`50`) to darkest (`950`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Step {
    #[serde(rename = "50")]
    S50,
    #[serde(rename = "100")]
    S100,
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "300")]
    S300,
    #[serde(rename = "400")]
    S400,
    #[serde(rename = "500")]
    S500,
    #[serde(rename = "600")]
    S600,
    #[serde(rename = "700")]
    S700,
    #[serde(rename = "800")]
    S800,
    #[serde(rename = "900")]
    S900,
    #[serde(rename = "950")]
    S950,
}

impl Step {
    /// All 11 canonical steps in ascending order.
    pub const ALL: [Step; 11] = [
        Step::S50,
        Step::S100,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
        Step::S900,
        Step::S950,
    ];

    /// The step key as written in CSS variables and config output.
    pub fn as_str(self) -> &'static str {
        match self {
            Step::S50 => "50",
            Step::S100 => "100",
            Step::S200 => "200",
            Step::S300 => "300",
            Step::S400 => "400",
            Step::S500 => "500",
            Step::S600 => "600",
            Step::S700 => "700",
            Step::S800 => "800",
            Step::S900 => "900",
            Step::S950 => "950",
        }
    }

    /// Parse a step key, returning `None` for anything outside the 11
    /// canonical keys.
    pub fn parse(s: &str) -> Option<Self> {
        Step::ALL.iter().copied().find(|step| step.as_str() == s)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = TektonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::parse(s).ok_or_else(|| TektonError::Parse {
            message: format!("Invalid scale step: {}", s),
            help: Some("Valid steps are 50, 100, 200, ..., 900, 950".to_string()),
        })
    }
}

/// An ordered mapping from step to colour.
///
/// A complete scale has all 11 steps; a partial scale (an override) may
/// omit steps and is merged against a base before use. Completeness is
/// checked where a token set is declared complete, not at every mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColourScale {
    steps: BTreeMap<Step, Colour>,
}

impl ColourScale {
    /// Create an empty scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the colour at a step.
    pub fn get(&self, step: Step) -> Option<Colour> {
        self.steps.get(&step).copied()
    }

    /// Return a copy of this scale with one step replaced.
    pub fn with_step(&self, step: Step, colour: Colour) -> Self {
        let mut steps = self.steps.clone();
        steps.insert(step, colour);
        Self { steps }
    }

    /// Iterate steps in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Step, Colour)> + '_ {
        self.steps.iter().map(|(step, colour)| (*step, *colour))
    }

    /// Number of steps present.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the scale has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check if all 11 canonical steps are present.
    pub fn is_complete(&self) -> bool {
        self.steps.len() == Step::ALL.len()
    }

    /// Steps missing from a complete scale.
    pub fn missing_steps(&self) -> Vec<Step> {
        Step::ALL
            .iter()
            .copied()
            .filter(|step| !self.steps.contains_key(step))
            .collect()
    }

    /// Merge a partial scale over a base.
    ///
    /// Any step present in `partial` replaces the corresponding step in
    /// `base`; absent steps are copied from `base` unchanged. A `None` base
    /// behaves as an empty scale, used when introducing a brand-new role
    /// with no prior default.
    pub fn merge(base: Option<&ColourScale>, partial: &ColourScale) -> ColourScale {
        let mut steps = base.map(|b| b.steps.clone()).unwrap_or_default();
        for (step, colour) in partial.iter() {
            steps.insert(step, colour);
        }
        ColourScale { steps }
    }
}

impl FromIterator<(Step, Colour)> for ColourScale {
    fn from_iter<I: IntoIterator<Item = (Step, Colour)>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
