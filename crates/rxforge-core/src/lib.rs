//! # RxForge Core Library
//!
//! A small library that fabricates fictional drug compounds and runs randomized, threshold-based
//! "trials" against them. Nothing here models real chemistry: compound tokens are opaque strings
//! and every metric comes from a uniform random draw.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`BaseCompound`, `TrialResult`,
//!   `HistoryEntry`), the base compound and modifier effect catalog, modifier parsing, and file
//!   I/O for history logs and exported results.
//!
//! - **[`engine`]: The Logic Core.** The compound generator, the trial simulator, the
//!   configuration that drives them (pass/fail criteria, disease bonus), progress reporting,
//!   and the engine error type.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a complete
//!   "create and test" run that generates a compound, simulates its trial and records the outcome
//!   in an injected history store.

pub mod core;
pub mod engine;
pub mod workflows;
