//! Main analysis pipeline.
//!
//! Loads the account export, assembles the statistics summary and the flat
//! per-account rows, returning an [`AuditAnalysis`] ready for reporting.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use passa_core::error::Result;
use passa_core::models::{AccountDetail, AccountRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::findings::Findings;
use crate::reader::load_accounts;
use crate::summary::{account_details, assemble, StatisticsSummary};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Where the records came from (usually the CSV path).
    pub source: String,
    /// Number of account records analysed.
    pub records_loaded: usize,
    /// Elapsed-time values that were neither `"Never"` nor parseable.
    pub unparsed_values: usize,
    /// Wall-clock seconds spent reading the export.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent computing statistics.
    pub analysis_time_seconds: f64,
}

/// The complete output of [`analyze_accounts`].
#[derive(Debug, Clone)]
pub struct AuditAnalysis {
    pub summary: StatisticsSummary,
    /// One row per account, in input order.
    pub details: Vec<AccountDetail>,
    pub metadata: AnalysisMetadata,
}

impl AuditAnalysis {
    /// Named accounts behind the headline counts.
    pub fn findings(&self) -> Findings<'_> {
        Findings::collect(&self.details)
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline over the CSV export at `path`.
pub fn analyze_accounts(path: &Path) -> Result<AuditAnalysis> {
    info!("Reading file: {}", path.display());

    let load_start = Instant::now();
    let records = load_accounts(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let mut analysis = analyze_records(&records, path.display().to_string())?;
    analysis.metadata.load_time_seconds = load_time;
    Ok(analysis)
}

/// Run the statistics stage over records that are already loaded.
pub fn analyze_records(
    records: &[AccountRecord],
    source: impl Into<String>,
) -> Result<AuditAnalysis> {
    let analysis_start = Instant::now();
    let summary = assemble(records)?;
    let details = account_details(records);
    let analysis_time = analysis_start.elapsed().as_secs_f64();

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        source: source.into(),
        records_loaded: records.len(),
        unparsed_values: records.iter().map(AccountRecord::unparsed_field_count).sum(),
        load_time_seconds: 0.0,
        analysis_time_seconds: analysis_time,
    };

    info!(
        "Analysed {} accounts across {} domains ({} unparsed values)",
        metadata.records_loaded, summary.total_domains, metadata.unparsed_values
    );

    Ok(AuditAnalysis {
        summary,
        details,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
