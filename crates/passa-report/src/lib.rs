//! Reporting layer for the account auditor.
//!
//! Renders the console security report and the detailed findings text file,
//! and writes the JSON exports consumed by charting tools.

pub mod console;
pub mod detailed;
pub mod export;

pub use passa_core as core;
