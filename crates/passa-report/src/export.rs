//! JSON exports of the analysis for charting and downstream tooling.
//!
//! Three files are written into the output directory:
//! - `statistics.json`: the statistics summary and analysis metadata,
//! - `accounts.json`: one row per account,
//! - `chart_data.json`: the series behind the age charts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use passa_core::classifier::AgeBracket;
use passa_core::error::Result;
use passa_core::models::AccountDetail;
use passa_data::analysis::{AnalysisMetadata, AuditAnalysis};
use passa_data::findings::{bracket_crosstab, BracketCounts};
use passa_data::summary::StatisticsSummary;
use serde::Serialize;
use tracing::{debug, info};

pub const STATISTICS_FILE: &str = "statistics.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const CHART_DATA_FILE: &str = "chart_data.json";

// ── Export payloads ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct StatisticsExport<'a> {
    metadata: &'a AnalysisMetadata,
    summary: &'a StatisticsSummary,
}

/// Account age against password age for one account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgePair {
    pub account_age_years: f64,
    pub password_age_years: f64,
}

/// One step of a domain's cumulative account-creation curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreationPoint {
    /// How long ago the account was created.
    pub years_ago: f64,
    /// Accounts in the domain no older than `years_ago`.
    pub cumulative_accounts: usize,
}

/// Account-age bracket counts per domain, columns in [`AgeBracket::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketTable {
    pub brackets: Vec<&'static str>,
    pub domains: BTreeMap<String, BracketCounts>,
}

/// Everything needed to draw the audit charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Known password ages, in input order.
    pub password_age_years: Vec<f64>,
    /// Accounts where both ages are known.
    pub account_vs_password_age: Vec<AgePair>,
    /// Known last-logon ages, in input order.
    pub last_logon_years: Vec<f64>,
    pub creation_timeline: BTreeMap<String, Vec<CreationPoint>>,
    pub account_age_by_domain: BracketTable,
}

impl ChartData {
    pub fn from_details(details: &[AccountDetail]) -> Self {
        Self {
            password_age_years: details.iter().filter_map(|d| d.password_age_years).collect(),
            account_vs_password_age: details
                .iter()
                .filter_map(|d| {
                    Some(AgePair {
                        account_age_years: d.account_age_years?,
                        password_age_years: d.password_age_years?,
                    })
                })
                .collect(),
            last_logon_years: details.iter().filter_map(|d| d.last_logon_years).collect(),
            creation_timeline: creation_timeline(details),
            account_age_by_domain: BracketTable {
                brackets: AgeBracket::ALL.iter().map(|b| b.label()).collect(),
                domains: bracket_crosstab(details),
            },
        }
    }
}

/// Cumulative account creation per domain, newest account first.
///
/// Each point counts the domain's accounts aged at most `years_ago`.
/// Accounts with an unknown account age are left out.
pub fn creation_timeline(details: &[AccountDetail]) -> BTreeMap<String, Vec<CreationPoint>> {
    let mut ages: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for detail in details {
        if let Some(age) = detail.account_age_years {
            ages.entry(detail.domain.clone()).or_default().push(age);
        }
    }

    ages.into_iter()
        .map(|(domain, mut domain_ages)| {
            domain_ages.sort_by(f64::total_cmp);
            let points = domain_ages
                .into_iter()
                .enumerate()
                .map(|(i, years_ago)| CreationPoint {
                    years_ago,
                    cumulative_accounts: i + 1,
                })
                .collect();
            (domain, points)
        })
        .collect()
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Write all JSON exports into `dir`, returning the written paths.
///
/// `dir` must already exist.
pub fn write_exports(dir: &Path, analysis: &AuditAnalysis) -> Result<Vec<PathBuf>> {
    let statistics = StatisticsExport {
        metadata: &analysis.metadata,
        summary: &analysis.summary,
    };

    let written = vec![
        write_json(&dir.join(STATISTICS_FILE), &statistics)?,
        write_json(&dir.join(ACCOUNTS_FILE), &analysis.details)?,
        write_json(
            &dir.join(CHART_DATA_FILE),
            &ChartData::from_details(&analysis.details),
        )?,
    ];

    info!("Exported {} JSON files to {}", written.len(), dir.display());
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    debug!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
