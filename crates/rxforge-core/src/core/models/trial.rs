use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const PERCENT_MAX: f64 = 100.0;
pub const SEVERITY_MAX: f64 = 50.0;

/// The binary outcome of evaluating trial metrics against the pass/fail criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn is_passed(self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "Passed"),
            Verdict::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid verdict: '{0}'. Expected 'Passed' or 'Failed'.")]
pub struct ParseVerdictError(String);

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Passed" => Ok(Verdict::Passed),
            "Failed" => Ok(Verdict::Failed),
            other => Err(ParseVerdictError(other.to_string())),
        }
    }
}

/// The five simulated metrics of a trial.
///
/// Efficacy, safety and potency live on a 0-100 scale, side effects and toxicity on a 0-50
/// severity scale. Values are kept unrounded; one-decimal rendering is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub efficacy: f64,
    pub safety: f64,
    pub side_effects: f64,
    pub potency: f64,
    pub toxicity: f64,
}

impl Metrics {
    pub fn new(efficacy: f64, safety: f64, side_effects: f64, potency: f64, toxicity: f64) -> Self {
        Self {
            efficacy,
            safety,
            side_effects,
            potency,
            toxicity,
        }
    }

    /// Clamps every metric into its documented range.
    pub fn clamped(self) -> Self {
        Self {
            efficacy: self.efficacy.clamp(0.0, PERCENT_MAX),
            safety: self.safety.clamp(0.0, PERCENT_MAX),
            side_effects: self.side_effects.clamp(0.0, SEVERITY_MAX),
            potency: self.potency.clamp(0.0, PERCENT_MAX),
            toxicity: self.toxicity.clamp(0.0, SEVERITY_MAX),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        let percent = 0.0..=PERCENT_MAX;
        let severity = 0.0..=SEVERITY_MAX;
        percent.contains(&self.efficacy)
            && percent.contains(&self.safety)
            && severity.contains(&self.side_effects)
            && percent.contains(&self.potency)
            && severity.contains(&self.toxicity)
    }
}

/// The outcome of a simulated trial. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub display_name: String,
    pub token: String,
    pub metrics: Metrics,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_pulls_every_metric_into_range() {
        let m = Metrics::new(130.0, -5.0, 60.0, 101.0, 75.5).clamped();
        assert_eq!(m, Metrics::new(100.0, 0.0, 50.0, 100.0, 50.0));
        assert!(m.is_within_bounds());
    }

    #[test]
    fn clamped_leaves_in_range_values_untouched() {
        let m = Metrics::new(42.5, 99.9, 0.0, 100.0, 50.0);
        assert_eq!(m.clamped(), m);
    }

    #[test]
    fn is_within_bounds_detects_overflowing_efficacy() {
        assert!(!Metrics::new(110.0, 90.0, 10.0, 70.0, 10.0).is_within_bounds());
    }

    #[test]
    fn verdict_display_and_parse_agree() {
        for verdict in [Verdict::Passed, Verdict::Failed] {
            assert_eq!(verdict.to_string().parse::<Verdict>(), Ok(verdict));
        }
        assert!("passed".parse::<Verdict>().is_err());
        assert!(Verdict::Passed.is_passed());
        assert!(!Verdict::Failed.is_passed());
    }
}
