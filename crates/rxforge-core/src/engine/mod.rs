//! # Engine Module
//!
//! The engine turns user input into a generated compound and a simulated trial result.
//!
//! - **Generation** ([`generator`]) - Builds the display name and identifier token of a compound
//!   from a base key, a disease and a modifier list
//! - **Simulation** ([`simulator`]) - Draws random metrics, applies modifier effects, clamps,
//!   applies the disease bonus and evaluates the verdict
//! - **Configuration** ([`config`]) - Pass/fail criteria and the disease bonus policy
//! - **Progress Monitoring** ([`progress`]) - Progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod generator;
pub mod progress;
pub mod simulator;
