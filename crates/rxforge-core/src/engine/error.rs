use super::config::ConfigError;
use crate::core::catalog::CatalogLoadError;
use crate::core::io::traits::HistoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: unknown base compound '{key}' (available: {available})")]
    InvalidInput { key: String, available: String },

    #[error("Catalog error: {source}")]
    Catalog {
        #[from]
        source: CatalogLoadError,
    },

    #[error("History error: {source}")]
    History {
        #[from]
        source: HistoryError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
