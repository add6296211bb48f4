use crate::cli::{HistoryArgs, HistoryCommands, OutputFormat};
use crate::data::DataManager;
use crate::error::Result;
use crate::render;
use rxforge::core::io::history::JsonHistoryFile;
use rxforge::core::io::traits::HistoryStore;
use tracing::info;

pub async fn run(args: HistoryArgs) -> Result<()> {
    let manager = DataManager::new()?;
    let output = execute(args.command, &manager)?;
    print!("{}", output);
    Ok(())
}

fn execute(command: HistoryCommands, manager: &DataManager) -> Result<String> {
    let mut store = JsonHistoryFile::new(manager.history_path());
    match command {
        HistoryCommands::List { format } => {
            let entries = store.entries()?;
            info!("Loaded {} history entries.", entries.len());
            match format {
                OutputFormat::Text => Ok(render::render_history(&entries)),
                OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?)),
            }
        }
        HistoryCommands::Clear => {
            store.clear()?;
            Ok("✓ History cleared.\n".to_string())
        }
        HistoryCommands::Path => Ok(format!("{}\n", store.path().display())),
    }
}
