use crate::core::models::trial::{Metrics, PERCENT_MAX, SEVERITY_MAX, Verdict};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// Pass/fail thresholds. Every comparison is strict, so a metric sitting exactly on its
/// threshold fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialCriteria {
    pub efficacy_min: f64,
    pub safety_min: f64,
    pub side_effects_max: f64,
    pub potency_min: f64,
    pub toxicity_max: f64,
}

impl TrialCriteria {
    pub fn evaluate(&self, metrics: &Metrics) -> Verdict {
        let passed = metrics.efficacy > self.efficacy_min
            && metrics.safety > self.safety_min
            && metrics.side_effects < self.side_effects_max
            && metrics.potency > self.potency_min
            && metrics.toxicity < self.toxicity_max;
        if passed {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }
}

impl Default for TrialCriteria {
    fn default() -> Self {
        Self {
            efficacy_min: 70.0,
            safety_min: 80.0,
            side_effects_max: 20.0,
            potency_min: 60.0,
            toxicity_max: 25.0,
        }
    }
}

/// What happens when the disease bonus pushes efficacy past 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusOverflow {
    /// Re-clamp efficacy into `[0, 100]` after the bonus.
    #[default]
    Clamp,
    /// Keep the raw sum, so efficacy may exceed 100.
    Preserve,
}

impl fmt::Display for BonusOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusOverflow::Clamp => write!(f, "clamp"),
            BonusOverflow::Preserve => write!(f, "preserve"),
        }
    }
}

impl FromStr for BonusOverflow {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(BonusOverflow::Clamp),
            "preserve" => Ok(BonusOverflow::Preserve),
            other => Err(ConfigError::InvalidValue {
                parameter: "overflow",
                reason: format!("expected 'clamp' or 'preserve', got '{}'", other),
            }),
        }
    }
}

/// A flat efficacy bonus granted when the disease text mentions a keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseBonus {
    pub keyword: String, // Matched case-insensitively as a substring
    pub efficacy: f64,
    pub overflow: BonusOverflow,
}

impl DiseaseBonus {
    pub fn applies_to(&self, disease: &str) -> bool {
        !self.keyword.is_empty()
            && disease
                .to_lowercase()
                .contains(&self.keyword.to_lowercase())
    }
}

impl Default for DiseaseBonus {
    fn default() -> Self {
        Self {
            keyword: "pain".to_string(),
            efficacy: 10.0,
            overflow: BonusOverflow::Clamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationConfig {
    pub criteria: TrialCriteria,
    pub disease_bonus: DiseaseBonus,
}

impl SimulationConfig {
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    efficacy_min: Option<f64>,
    safety_min: Option<f64>,
    side_effects_max: Option<f64>,
    potency_min: Option<f64>,
    toxicity_max: Option<f64>,
    bonus_keyword: Option<String>,
    bonus_efficacy: Option<f64>,
    bonus_overflow: Option<BonusOverflow>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn efficacy_min(mut self, value: f64) -> Self {
        self.efficacy_min = Some(value);
        self
    }
    pub fn safety_min(mut self, value: f64) -> Self {
        self.safety_min = Some(value);
        self
    }
    pub fn side_effects_max(mut self, value: f64) -> Self {
        self.side_effects_max = Some(value);
        self
    }
    pub fn potency_min(mut self, value: f64) -> Self {
        self.potency_min = Some(value);
        self
    }
    pub fn toxicity_max(mut self, value: f64) -> Self {
        self.toxicity_max = Some(value);
        self
    }
    pub fn criteria(self, criteria: TrialCriteria) -> Self {
        self.efficacy_min(criteria.efficacy_min)
            .safety_min(criteria.safety_min)
            .side_effects_max(criteria.side_effects_max)
            .potency_min(criteria.potency_min)
            .toxicity_max(criteria.toxicity_max)
    }
    pub fn bonus_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.bonus_keyword = Some(keyword.into());
        self
    }
    pub fn bonus_efficacy(mut self, value: f64) -> Self {
        self.bonus_efficacy = Some(value);
        self
    }
    pub fn bonus_overflow(mut self, overflow: BonusOverflow) -> Self {
        self.bonus_overflow = Some(overflow);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let criteria = TrialCriteria {
            efficacy_min: check_range(
                "efficacy_min",
                self.efficacy_min
                    .ok_or(ConfigError::MissingParameter("efficacy_min"))?,
                PERCENT_MAX,
            )?,
            safety_min: check_range(
                "safety_min",
                self.safety_min
                    .ok_or(ConfigError::MissingParameter("safety_min"))?,
                PERCENT_MAX,
            )?,
            side_effects_max: check_range(
                "side_effects_max",
                self.side_effects_max
                    .ok_or(ConfigError::MissingParameter("side_effects_max"))?,
                SEVERITY_MAX,
            )?,
            potency_min: check_range(
                "potency_min",
                self.potency_min
                    .ok_or(ConfigError::MissingParameter("potency_min"))?,
                PERCENT_MAX,
            )?,
            toxicity_max: check_range(
                "toxicity_max",
                self.toxicity_max
                    .ok_or(ConfigError::MissingParameter("toxicity_max"))?,
                SEVERITY_MAX,
            )?,
        };

        let bonus_efficacy = self
            .bonus_efficacy
            .ok_or(ConfigError::MissingParameter("bonus_efficacy"))?;
        if !bonus_efficacy.is_finite() {
            return Err(ConfigError::InvalidValue {
                parameter: "bonus_efficacy",
                reason: format!("{} is not a finite number", bonus_efficacy),
            });
        }

        let disease_bonus = DiseaseBonus {
            keyword: self
                .bonus_keyword
                .ok_or(ConfigError::MissingParameter("bonus_keyword"))?,
            efficacy: bonus_efficacy,
            overflow: self
                .bonus_overflow
                .ok_or(ConfigError::MissingParameter("bonus_overflow"))?,
        };

        Ok(SimulationConfig {
            criteria,
            disease_bonus,
        })
    }
}

fn check_range(parameter: &'static str, value: f64, max: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            parameter,
            reason: format!("{} is outside [0, {}]", value, max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> SimulationConfigBuilder {
        SimulationConfig::builder()
            .criteria(TrialCriteria::default())
            .bonus_keyword("pain")
            .bonus_efficacy(10.0)
            .bonus_overflow(BonusOverflow::Clamp)
    }

    #[test]
    fn builder_with_default_values_matches_default() {
        assert_eq!(complete_builder().build().unwrap(), SimulationConfig::default());
    }

    #[test]
    fn builder_reports_first_missing_parameter() {
        let result = SimulationConfig::builder()
            .efficacy_min(70.0)
            .safety_min(80.0)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("side_effects_max"))
        );

        let result = SimulationConfig::builder()
            .criteria(TrialCriteria::default())
            .bonus_efficacy(10.0)
            .bonus_overflow(BonusOverflow::Preserve)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("bonus_keyword")));
    }

    #[test]
    fn builder_rejects_out_of_range_thresholds() {
        let result = complete_builder().toxicity_max(60.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "toxicity_max",
                ..
            })
        ));

        let result = complete_builder().efficacy_min(f64::NAN).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "efficacy_min",
                ..
            })
        ));
    }

    #[test]
    fn criteria_pass_typical_passing_metrics() {
        let criteria = TrialCriteria::default();
        let metrics = Metrics::new(75.0, 85.0, 10.0, 65.0, 20.0);
        assert_eq!(criteria.evaluate(&metrics), Verdict::Passed);

        let metrics = Metrics {
            side_effects: 20.0,
            ..metrics
        };
        assert_eq!(criteria.evaluate(&metrics), Verdict::Failed);
    }

    #[test]
    fn criteria_boundaries_are_strict() {
        let criteria = TrialCriteria::default();
        let passing = Metrics::new(70.01, 80.01, 19.99, 60.01, 24.99);
        assert_eq!(criteria.evaluate(&passing), Verdict::Passed);

        let boundary_cases = [
            Metrics {
                efficacy: 70.0,
                ..passing
            },
            Metrics {
                safety: 80.0,
                ..passing
            },
            Metrics {
                side_effects: 20.0,
                ..passing
            },
            Metrics {
                potency: 60.0,
                ..passing
            },
            Metrics {
                toxicity: 25.0,
                ..passing
            },
        ];
        for metrics in boundary_cases {
            assert_eq!(
                criteria.evaluate(&metrics),
                Verdict::Failed,
                "{:?} should fail",
                metrics
            );
        }
    }

    #[test]
    fn disease_bonus_matches_keyword_case_insensitively() {
        let bonus = DiseaseBonus::default();
        assert!(bonus.applies_to("chronic pain"));
        assert!(bonus.applies_to("Back PAIN"));
        assert!(bonus.applies_to("painful joints"));
        assert!(!bonus.applies_to("fever"));
        assert!(!bonus.applies_to(""));
    }

    #[test]
    fn disease_bonus_with_empty_keyword_never_applies() {
        let bonus = DiseaseBonus {
            keyword: String::new(),
            ..DiseaseBonus::default()
        };
        assert!(!bonus.applies_to("chronic pain"));
    }

    #[test]
    fn bonus_overflow_parses_and_displays() {
        assert_eq!("clamp".parse::<BonusOverflow>(), Ok(BonusOverflow::Clamp));
        assert_eq!(
            " Preserve ".parse::<BonusOverflow>(),
            Ok(BonusOverflow::Preserve)
        );
        assert!("wrap".parse::<BonusOverflow>().is_err());
        assert_eq!(BonusOverflow::Preserve.to_string(), "preserve");
    }
}
