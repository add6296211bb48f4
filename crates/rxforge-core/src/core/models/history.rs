use super::trial::{TrialResult, Verdict};
use serde::{Deserialize, Serialize};

/// One row of the session history: what was tested, against what, and how it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub disease: String,
    pub compound: String,
    pub result: Verdict,
}

impl HistoryEntry {
    pub fn new(disease: &str, compound: &str, result: Verdict) -> Self {
        Self {
            disease: disease.to_string(),
            compound: compound.to_string(),
            result,
        }
    }

    pub fn from_trial(disease: &str, trial: &TrialResult) -> Self {
        Self::new(disease, &trial.display_name, trial.verdict)
    }
}
