use crate::cli::{OutputFormat, RunArgs};
use crate::commands::catalog::load_catalog;
use crate::config::PartialRunConfig;
use crate::data::DataManager;
use crate::error::Result;
use crate::render;
use crate::utils::delay::processing_delay;
use crate::utils::progress::CliProgressHandler;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rxforge::core::io::export::{self, DEFAULT_EXPORT_FILE_NAME};
use rxforge::core::io::history::JsonHistoryFile;
use rxforge::core::io::traits::HistoryStore;
use rxforge::core::models::trial::TrialResult;
use rxforge::engine::progress::ProgressReporter;
use rxforge::workflows::{self, trial::TrialRequest};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub async fn run(args: RunArgs) -> Result<()> {
    info!("Initializing data manager...");
    let data_manager = DataManager::new()?;
    execute(args, &data_manager, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
    .map(|_| ())
}

/// Runs one create-and-test cycle and prints the outcome.
///
/// `cancel` aborts the processing delay when it resolves first.
pub async fn execute<F: Future>(
    args: RunArgs,
    data_manager: &DataManager,
    cancel: F,
) -> Result<TrialResult> {
    let partial_config = PartialRunConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_with_cli(&args)?;
    debug!("Final run settings: {:?}", &settings);

    let catalog = load_catalog(settings.catalog_path.as_deref())?;

    let disease = if args.disease.trim().is_empty() {
        settings.default_disease.clone()
    } else {
        args.disease.clone()
    };
    let request = TrialRequest::new(&args.base, &disease, &args.modifiers);

    let progress_handler = match args.format {
        OutputFormat::Text => CliProgressHandler::new(),
        OutputFormat::Json => CliProgressHandler::hidden(),
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    processing_delay(settings.delay, cancel, &reporter).await?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Seeding the trial generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut history_file = if args.no_history {
        None
    } else {
        Some(JsonHistoryFile::new(data_manager.history_path()))
    };
    let history = history_file
        .as_mut()
        .map(|store| store as &mut dyn HistoryStore);

    info!("Invoking the trial workflow...");
    let result = tokio::task::block_in_place(|| {
        workflows::trial::run(
            &request,
            &catalog,
            &settings.simulation,
            history,
            &mut rng,
            &reporter,
        )
    })?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", render::render_report(&result, &disease));
            println!();
            print!("{}", render::render_chart(&result.metrics));
        }
        OutputFormat::Json => {
            println!("{}", export::to_json_string(&result)?);
        }
    }

    if let Some(target) = &args.export {
        let output_path = resolve_export_path(target);
        export::write_json_to_path(&result, &output_path)?;
        info!("Exported trial result to {:?}", &output_path);
        if args.format == OutputFormat::Text {
            println!("✓ Results exported to: {}", output_path.display());
        }
    }

    Ok(result)
}

/// A directory target receives the default export file name.
fn resolve_export_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(DEFAULT_EXPORT_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}
