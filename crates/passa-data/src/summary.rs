//! Assembly of the account statistics summary.
//!
//! Every figure here is derived from an immutable slice of records in one
//! call; nothing is cached between calls.

use std::collections::BTreeMap;

use passa_core::error::{AuditError, Result};
use passa_core::formatting::percentage;
use passa_core::metrics::{summarize, FieldStatistics, STANDARD_THRESHOLDS};
use passa_core::models::{AccountDetail, AccountRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ── StatisticsSummary ─────────────────────────────────────────────────────────

/// Immutable snapshot of the statistics for one account collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Time since the last password change.
    pub password_age: FieldStatistics,
    /// Time since account creation.
    pub account_age: FieldStatistics,
    /// Time since the last logon.
    pub last_logon: FieldStatistics,
    /// Account age minus password age.
    pub age_difference: FieldStatistics,
    /// Number of accounts per domain.
    pub domain_distribution: BTreeMap<String, usize>,
    pub total_accounts: usize,
    pub total_domains: usize,
    /// Accounts whose last-logon text is `"Never"`.
    pub never_logged_in: usize,
    /// Accounts whose password-change text equals their creation text.
    pub never_changed_password: usize,
}

impl StatisticsSummary {
    /// `count` as a percentage of all accounts, one decimal place.
    pub fn share(&self, count: usize) -> f64 {
        percentage(count as f64, self.total_accounts as f64, 1)
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Build the [`StatisticsSummary`] for `records`.
///
/// Fails with [`AuditError::InsufficientData`] when `records` is empty.
pub fn assemble(records: &[AccountRecord]) -> Result<StatisticsSummary> {
    if records.is_empty() {
        return Err(AuditError::InsufficientData);
    }

    let column = |field: fn(&AccountRecord) -> Option<f64>| -> Vec<Option<f64>> {
        records.iter().map(field).collect()
    };

    let domain_distribution = domain_distribution(records);

    let summary = StatisticsSummary {
        password_age: summarize(
            &column(AccountRecord::password_age_years),
            &STANDARD_THRESHOLDS,
        ),
        account_age: summarize(
            &column(AccountRecord::account_age_years),
            &STANDARD_THRESHOLDS,
        ),
        last_logon: summarize(
            &column(AccountRecord::last_logon_years),
            &STANDARD_THRESHOLDS,
        ),
        age_difference: summarize(&column(AccountRecord::age_difference_years), &[]),
        total_accounts: records.len(),
        total_domains: domain_distribution.len(),
        domain_distribution,
        never_logged_in: records.iter().filter(|r| r.never_logged_in()).count(),
        never_changed_password: records
            .iter()
            .filter(|r| r.password_never_changed())
            .count(),
    };

    debug!(
        "Assembled statistics for {} accounts across {} domains",
        summary.total_accounts, summary.total_domains
    );

    Ok(summary)
}

/// Number of records per domain.
pub fn domain_distribution(records: &[AccountRecord]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for record in records {
        *distribution.entry(record.domain().to_string()).or_insert(0) += 1;
    }
    distribution
}

/// Flat per-account rows, in input order, with each account-age bracket.
pub fn account_details(records: &[AccountRecord]) -> Vec<AccountDetail> {
    records.iter().map(AccountDetail::from).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
