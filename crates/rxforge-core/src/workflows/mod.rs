//! # Workflows Module
//!
//! High-level entry points for front ends.
//!
//! - **Trial Workflow** ([`trial`]) - Generates a compound, simulates its trial and appends the
//!   outcome to a history store, reporting progress along the way.

pub mod trial;
