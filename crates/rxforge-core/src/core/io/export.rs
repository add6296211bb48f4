use crate::core::models::trial::TrialResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "drug_test_results.json";

/// The downloadable document form of a trial result.
///
/// Metrics are rendered as strings with one decimal, matching what the report shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedTrial {
    pub compound: String,
    pub token: String,
    pub efficacy: String,
    pub safety: String,
    pub side_effects: String,
    pub potency: String,
    pub toxicity: String,
    pub result: String,
}

impl From<&TrialResult> for ExportedTrial {
    fn from(trial: &TrialResult) -> Self {
        let m = &trial.metrics;
        Self {
            compound: trial.display_name.clone(),
            token: trial.token.clone(),
            efficacy: format!("{:.1}", m.efficacy),
            safety: format!("{:.1}", m.safety),
            side_effects: format!("{:.1}", m.side_effects),
            potency: format!("{:.1}", m.potency),
            toxicity: format!("{:.1}", m.toxicity),
            result: trial.verdict.to_string(),
        }
    }
}

pub fn to_json_string(trial: &TrialResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportedTrial::from(trial))
}

pub fn write_json(trial: &TrialResult, writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &ExportedTrial::from(trial))?;
    writeln!(writer)
}

pub fn write_json_to_path<P: AsRef<Path>>(trial: &TrialResult, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(trial, &mut writer)?;
    writer.flush()
}
