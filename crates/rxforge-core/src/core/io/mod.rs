//! Provides input/output functionality for trial results.
//!
//! This module contains the history store abstraction with its JSON file backend, and the
//! exporter that serializes a single trial result into a downloadable JSON document.

pub mod export;
pub mod history;
pub mod traits;
