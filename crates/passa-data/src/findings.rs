//! Per-account findings for detail-level reporting.
//!
//! The summary only carries counts; these queries name the accounts behind
//! them, in input order.

use std::collections::BTreeMap;

use passa_core::classifier::AgeBracket;
use passa_core::models::AccountDetail;
use serde::Serialize;

/// Per-bracket account counts, indexed like [`AgeBracket::ALL`].
pub type BracketCounts = [usize; AgeBracket::ALL.len()];

// ── Queries ───────────────────────────────────────────────────────────────────

/// Accounts whose password is strictly older than `years`.
pub fn passwords_older_than(details: &[AccountDetail], years: f64) -> Vec<&AccountDetail> {
    details
        .iter()
        .filter(|d| d.password_age_years.is_some_and(|age| age > years))
        .collect()
}

/// Accounts whose last logon is strictly older than `years`.
///
/// Accounts that never logged on, or whose logon age is unknown, are not
/// included.
pub fn inactive_longer_than(details: &[AccountDetail], years: f64) -> Vec<&AccountDetail> {
    details
        .iter()
        .filter(|d| d.last_logon_years.is_some_and(|age| age > years))
        .collect()
}

/// Accounts whose raw last-logon text is `"Never"`.
pub fn never_logged_in(details: &[AccountDetail]) -> Vec<&AccountDetail> {
    details.iter().filter(|d| d.never_logged_in()).collect()
}

/// Accounts whose raw password-change text equals their creation text.
pub fn never_changed_password(details: &[AccountDetail]) -> Vec<&AccountDetail> {
    details.iter().filter(|d| d.password_never_changed()).collect()
}

/// Account-age bracket counts per domain.
///
/// Accounts with an unknown account age are left out; a domain whose
/// accounts all have unknown ages still appears with zero counts.
pub fn bracket_crosstab(details: &[AccountDetail]) -> BTreeMap<String, BracketCounts> {
    let mut table: BTreeMap<String, BracketCounts> = BTreeMap::new();
    for detail in details {
        let row = table.entry(detail.domain.clone()).or_default();
        if let Some(bracket) = detail.account_age_bracket {
            row[bracket.index()] += 1;
        }
    }
    table
}

// ── Findings ──────────────────────────────────────────────────────────────────

/// The account lists behind the detailed findings report.
#[derive(Debug, Clone, Serialize)]
pub struct Findings<'a> {
    pub passwords_over_20_years: Vec<&'a AccountDetail>,
    pub passwords_over_15_years: Vec<&'a AccountDetail>,
    pub never_changed_password: Vec<&'a AccountDetail>,
    pub never_logged_in: Vec<&'a AccountDetail>,
    pub inactive_over_1_year: Vec<&'a AccountDetail>,
}

impl<'a> Findings<'a> {
    pub fn collect(details: &'a [AccountDetail]) -> Self {
        Self {
            passwords_over_20_years: passwords_older_than(details, 20.0),
            passwords_over_15_years: passwords_older_than(details, 15.0),
            never_changed_password: never_changed_password(details),
            never_logged_in: never_logged_in(details),
            inactive_over_1_year: inactive_longer_than(details, 1.0),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use passa_core::models::{AccountRecord, RawAccount};

    fn detail(domain: &str, name: &str, logon: &str, changed: &str, created: &str) -> AccountDetail {
        let record = AccountRecord::from_raw(RawAccount::new(domain, name, logon, changed, created));
        AccountDetail::from(&record)
    }

    fn sample() -> Vec<AccountDetail> {
        vec![
            detail(
                "CORP",
                "svc-backup",
                "3 years, 0 months and 0 days",
                "22 years, 0 months and 0 days",
                "22 years, 0 months and 0 days",
            ),
            detail(
                "CORP",
                "alice",
                "2 days",
                "17 years, 1 month and 0 days",
                "19 years, 0 months and 0 days",
            ),
            detail("LAB", "bob", "Never", "20 days", "20 days"),
            detail("LAB", "carol", "garbage", "garbage", "Never"),
        ]
    }

    fn names(found: &[&AccountDetail]) -> Vec<String> {
        found.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_passwords_older_than_is_strict() {
        let details = sample();
        assert_eq!(names(&passwords_older_than(&details, 20.0)), vec!["svc-backup"]);
        assert_eq!(
            names(&passwords_older_than(&details, 15.0)),
            vec!["svc-backup", "alice"]
        );
        assert!(passwords_older_than(&details, 22.0).is_empty());
    }

    #[test]
    fn test_inactive_excludes_never_and_unknown() {
        let details = sample();
        assert_eq!(names(&inactive_longer_than(&details, 1.0)), vec!["svc-backup"]);
    }

    #[test]
    fn test_never_logged_in() {
        let details = sample();
        assert_eq!(names(&never_logged_in(&details)), vec!["bob"]);
    }

    #[test]
    fn test_never_changed_password_by_raw_text() {
        let details = sample();
        assert_eq!(
            names(&never_changed_password(&details)),
            vec!["svc-backup", "bob"]
        );
    }

    #[test]
    fn test_bracket_crosstab() {
        let table = bracket_crosstab(&sample());
        let corp = table["CORP"];
        assert_eq!(corp[AgeBracket::OverTwentyYears.index()], 1);
        assert_eq!(corp[AgeBracket::FifteenToTwentyYears.index()], 1);
        assert_eq!(corp.iter().sum::<usize>(), 2);

        // carol has no known account age.
        let lab = table["LAB"];
        assert_eq!(lab[AgeBracket::UnderNinetyDays.index()], 1);
        assert_eq!(lab.iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_findings_collect() {
        let details = sample();
        let findings = Findings::collect(&details);
        assert_eq!(findings.passwords_over_20_years.len(), 1);
        assert_eq!(findings.passwords_over_15_years.len(), 2);
        assert_eq!(findings.never_changed_password.len(), 2);
        assert_eq!(findings.never_logged_in.len(), 1);
        assert_eq!(findings.inactive_over_1_year.len(), 1);
    }
}
