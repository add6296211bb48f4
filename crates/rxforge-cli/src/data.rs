use crate::error::{CliError, Result};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that relocates the data directory.
pub const DATA_DIR_ENV: &str = "RXFORGE_DATA_DIR";

const HISTORY_FILE_NAME: &str = "history.json";

#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path(std::env::var_os(DATA_DIR_ENV))?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    pub fn history_path(&self) -> PathBuf {
        self.base_path.join(HISTORY_FILE_NAME)
    }

    fn determine_data_path(override_path: Option<OsString>) -> Result<PathBuf> {
        match override_path {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            Some(_) => {
                warn!(
                    "{} is set but empty, falling back to default path.",
                    DATA_DIR_ENV
                );
                Self::get_default_data_path()
            }
            None => Self::get_default_data_path(),
        }
    }

    fn get_default_data_path() -> Result<PathBuf> {
        ProjectDirs::from("dev", "rxforge", "rxforge")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}
