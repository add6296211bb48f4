use crate::error::{CliError, Result};
use rxforge::engine::progress::{Progress, ProgressReporter};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Waits out the artificial "processing" delay unless `cancel` resolves first.
///
/// A zero duration returns immediately without reporting a phase.
pub async fn processing_delay<F>(
    duration: Duration,
    cancel: F,
    reporter: &ProgressReporter<'_>,
) -> Result<()>
where
    F: Future,
{
    if duration.is_zero() {
        return Ok(());
    }

    debug!("Waiting {:?} before running the simulation.", duration);
    reporter.report(Progress::PhaseStart {
        name: "Loading simulation...",
    });

    let outcome = tokio::select! {
        _ = tokio::time::sleep(duration) => Ok(()),
        _ = cancel => {
            warn!("Processing delay cancelled.");
            Err(CliError::Cancelled)
        }
    };

    reporter.report(Progress::PhaseFinish);
    outcome
}
