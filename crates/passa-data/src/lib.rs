//! Data layer for the account auditor.
//!
//! Responsible for reading CSV account exports, assembling the statistics
//! summary, extracting per-account findings and running the top-level
//! analysis pipeline.

pub mod analysis;
pub mod findings;
pub mod reader;
pub mod summary;

pub use passa_core as core;
