//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - **Data models** ([`models`]) - Compounds, trial metrics, verdicts and history entries
//! - **Catalog** ([`catalog`]) - Base compound and modifier effect tables, built-in or loaded
//!   from TOML
//! - **File I/O** ([`io`]) - The append-only history log and the JSON result exporter
//! - **Utilities** ([`utils`]) - Modifier list parsing

pub mod catalog;
pub mod io;
pub mod models;
pub mod utils;
