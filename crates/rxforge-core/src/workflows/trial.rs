use crate::core::catalog::Catalog;
use crate::core::io::traits::HistoryStore;
use crate::core::models::history::HistoryEntry;
use crate::core::models::trial::TrialResult;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::generator;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::simulator::TrialSimulator;
use rand::Rng;
use tracing::{info, instrument};

/// The caller's input for one "create and test" run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRequest {
    pub base_key: String,
    pub disease: String,
    pub modifiers: String, // Comma-separated, parsed by the engine
}

impl TrialRequest {
    pub fn new(base_key: &str, disease: &str, modifiers: &str) -> Self {
        Self {
            base_key: base_key.to_string(),
            disease: disease.to_string(),
            modifiers: modifiers.to_string(),
        }
    }
}

/// Generates a compound, simulates its trial and, when a store is given, appends the outcome
/// to the history.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for an unknown base key and
/// [`EngineError::History`] if the history store cannot be written. Nothing is recorded when
/// generation fails.
#[instrument(skip_all, name = "trial_workflow", fields(base = %request.base_key))]
pub fn run(
    request: &TrialRequest,
    catalog: &Catalog,
    config: &SimulationConfig,
    history: Option<&mut dyn HistoryStore>,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<TrialResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Generating compound",
    });
    let compound = generator::generate(
        catalog,
        &request.base_key,
        &request.disease,
        &request.modifiers,
    )?;
    reporter.report(Progress::Message(format!(
        "Generated: {}",
        compound.display_name
    )));
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Running trial simulation",
    });
    let result = TrialSimulator::new(catalog, config).simulate(
        &compound,
        &request.disease,
        &request.modifiers,
        rng,
    );
    reporter.report(Progress::PhaseFinish);
    info!(
        "Trial for '{}' finished: {}",
        result.display_name, result.verdict
    );

    if let Some(store) = history {
        reporter.report(Progress::PhaseStart {
            name: "Recording history",
        });
        store.append(HistoryEntry::from_trial(&request.disease, &result))?;
        reporter.report(Progress::PhaseFinish);
    }

    Ok(result)
}
