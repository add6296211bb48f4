use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use rxforge::engine::config::{BonusOverflow, DiseaseBonus, SimulationConfig, TrialCriteria};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DELAY_MS: u64 = 1500;
pub const DEFAULT_DISEASE: &str = "unspecified condition";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCriteriaConfig {
    #[serde(rename = "efficacy-min")]
    efficacy_min: Option<f64>,
    #[serde(rename = "safety-min")]
    safety_min: Option<f64>,
    #[serde(rename = "side-effects-max")]
    side_effects_max: Option<f64>,
    #[serde(rename = "potency-min")]
    potency_min: Option<f64>,
    #[serde(rename = "toxicity-max")]
    toxicity_max: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDiseaseBonusConfig {
    keyword: Option<String>,
    efficacy: Option<f64>,
    overflow: Option<BonusOverflow>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialRunSection {
    #[serde(rename = "delay-ms")]
    delay_ms: Option<u64>,
    #[serde(rename = "default-disease")]
    default_disease: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    #[serde(rename = "catalog-path")]
    catalog_path: Option<PathBuf>,
    criteria: Option<PartialCriteriaConfig>,
    #[serde(rename = "disease-bonus")]
    disease_bonus: Option<PartialDiseaseBonusConfig>,
    run: Option<PartialRunSection>,
}

/// Everything a `run` needs once the file, `--set` overrides and CLI flags are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub simulation: SimulationConfig,
    pub catalog_path: Option<PathBuf>,
    pub delay: Duration,
    pub default_disease: String,
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file when a path is given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn merge_with_cli(mut self, args: &RunArgs) -> Result<RunSettings> {
        self.apply_set_values(&args.set_values)?;

        let criteria = self.criteria.take().unwrap_or_default();
        let bonus = self.disease_bonus.take().unwrap_or_default();
        let run = self.run.take().unwrap_or_default();

        let default_criteria = TrialCriteria::default();
        let default_bonus = DiseaseBonus::default();

        let simulation = SimulationConfig::builder()
            .efficacy_min(criteria.efficacy_min.unwrap_or(default_criteria.efficacy_min))
            .safety_min(criteria.safety_min.unwrap_or(default_criteria.safety_min))
            .side_effects_max(
                criteria
                    .side_effects_max
                    .unwrap_or(default_criteria.side_effects_max),
            )
            .potency_min(criteria.potency_min.unwrap_or(default_criteria.potency_min))
            .toxicity_max(criteria.toxicity_max.unwrap_or(default_criteria.toxicity_max))
            .bonus_keyword(bonus.keyword.unwrap_or(default_bonus.keyword))
            .bonus_efficacy(bonus.efficacy.unwrap_or(default_bonus.efficacy))
            .bonus_overflow(bonus.overflow.unwrap_or(default_bonus.overflow))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let delay_ms = if args.no_delay {
            0
        } else {
            args.delay_ms.or(run.delay_ms).unwrap_or(DEFAULT_DELAY_MS)
        };

        Ok(RunSettings {
            simulation,
            catalog_path: args.catalog.clone().or(self.catalog_path),
            delay: Duration::from_millis(delay_ms),
            default_disease: run
                .default_disease
                .unwrap_or_else(|| DEFAULT_DISEASE.to_string()),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        let config_err = |e: parser::ParseError| CliError::Config(e.to_string());

        for kv_pair in set_values {
            let (key, value_str) = parser::parse_key_value(kv_pair).map_err(config_err)?;
            let float = || parser::parse_value::<f64>(key, value_str, "float").map_err(config_err);

            match key {
                "catalog-path" => {
                    self.catalog_path = Some(PathBuf::from(value_str));
                }
                "criteria.efficacy-min" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .efficacy_min = Some(float()?);
                }
                "criteria.safety-min" => {
                    self.criteria.get_or_insert_with(Default::default).safety_min = Some(float()?);
                }
                "criteria.side-effects-max" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .side_effects_max = Some(float()?);
                }
                "criteria.potency-min" => {
                    self.criteria.get_or_insert_with(Default::default).potency_min =
                        Some(float()?);
                }
                "criteria.toxicity-max" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .toxicity_max = Some(float()?);
                }
                "disease-bonus.keyword" => {
                    self.disease_bonus
                        .get_or_insert_with(Default::default)
                        .keyword = Some(value_str.to_string());
                }
                "disease-bonus.efficacy" => {
                    self.disease_bonus
                        .get_or_insert_with(Default::default)
                        .efficacy = Some(float()?);
                }
                "disease-bonus.overflow" => {
                    let overflow = value_str
                        .parse::<BonusOverflow>()
                        .map_err(|e| CliError::Config(e.to_string()))?;
                    self.disease_bonus
                        .get_or_insert_with(Default::default)
                        .overflow = Some(overflow);
                }
                "run.delay-ms" => {
                    self.run.get_or_insert_with(Default::default).delay_ms = Some(
                        parser::parse_value::<u64>(key, value_str, "integer").map_err(config_err)?,
                    );
                }
                "run.default-disease" => {
                    self.run.get_or_insert_with(Default::default).default_disease =
                        Some(value_str.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
