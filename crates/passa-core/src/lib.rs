//! Core types for the password and account age auditor.
//!
//! Parses elapsed-time text into decimal years, holds the per-account model,
//! and provides the statistics and age-bracket primitives the data layer
//! builds its summary from.

pub mod classifier;
pub mod duration;
pub mod error;
pub mod formatting;
pub mod metrics;
pub mod models;
pub mod settings;

pub use error::{AuditError, Result};
