use serde::{Deserialize, Serialize};

use crate::classifier::AgeBracket;
use crate::duration::{DurationParser, NEVER};

/// Column headers every account export must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Domain",
    "Name",
    "Last Logon",
    "Last Password Change",
    "Account Creation Date",
];

/// One row of an account export, exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAccount {
    /// Directory domain the account belongs to.
    #[serde(rename = "Domain")]
    pub domain: String,
    /// Account name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Elapsed time since the last logon, or `"Never"`.
    #[serde(rename = "Last Logon")]
    pub last_logon: String,
    /// Elapsed time since the password was last changed.
    #[serde(rename = "Last Password Change")]
    pub last_password_change: String,
    /// Elapsed time since the account was created.
    #[serde(rename = "Account Creation Date")]
    pub account_creation: String,
}

impl RawAccount {
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
        last_logon: impl Into<String>,
        last_password_change: impl Into<String>,
        account_creation: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            last_logon: last_logon.into(),
            last_password_change: last_password_change.into(),
            account_creation: account_creation.into(),
        }
    }
}

/// An account together with the ages parsed from its raw text.
///
/// The raw row is kept untouched and the parsed ages are computed once, in
/// [`AccountRecord::from_raw`]. Neither can be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    raw: RawAccount,
    last_logon_years: Option<f64>,
    password_age_years: Option<f64>,
    account_age_years: Option<f64>,
    age_difference_years: Option<f64>,
}

impl AccountRecord {
    /// Parse the elapsed-time fields of `raw`.
    pub fn from_raw(raw: RawAccount) -> Self {
        let password_age_years = DurationParser::parse(&raw.last_password_change);
        let account_age_years = DurationParser::parse(&raw.account_creation);
        let age_difference_years = match (account_age_years, password_age_years) {
            (Some(account), Some(password)) => Some(account - password),
            _ => None,
        };

        Self {
            last_logon_years: DurationParser::parse(&raw.last_logon),
            password_age_years,
            account_age_years,
            age_difference_years,
            raw,
        }
    }

    pub fn raw(&self) -> &RawAccount {
        &self.raw
    }

    pub fn domain(&self) -> &str {
        &self.raw.domain
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn last_logon_years(&self) -> Option<f64> {
        self.last_logon_years
    }

    pub fn password_age_years(&self) -> Option<f64> {
        self.password_age_years
    }

    pub fn account_age_years(&self) -> Option<f64> {
        self.account_age_years
    }

    /// Account age minus password age; `None` when either is unknown.
    pub fn age_difference_years(&self) -> Option<f64> {
        self.age_difference_years
    }

    /// Whether the raw last-logon text is the `"Never"` sentinel.
    pub fn never_logged_in(&self) -> bool {
        self.raw.last_logon == NEVER
    }

    /// Whether the password-change text is identical to the creation text.
    ///
    /// This compares the raw strings, not the parsed ages: two differently
    /// formatted strings for the same age do not count, while two empty cells
    /// do.
    pub fn password_never_changed(&self) -> bool {
        self.raw.last_password_change == self.raw.account_creation
    }

    /// Number of elapsed-time fields that are neither `"Never"` nor parseable.
    pub fn unparsed_field_count(&self) -> usize {
        [
            (&self.raw.last_logon, self.last_logon_years),
            (&self.raw.last_password_change, self.password_age_years),
            (&self.raw.account_creation, self.account_age_years),
        ]
        .into_iter()
        .filter(|(text, parsed)| parsed.is_none() && text.as_str() != NEVER)
        .count()
    }
}

/// Flat per-account row handed to report and export consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetail {
    pub domain: String,
    pub name: String,
    pub password_age_years: Option<f64>,
    pub account_age_years: Option<f64>,
    pub last_logon_years: Option<f64>,
    pub age_difference_years: Option<f64>,
    /// Bracket of the account age; `None` when the age is unknown.
    pub account_age_bracket: Option<AgeBracket>,
    pub last_logon_raw: String,
    pub last_password_change_raw: String,
    pub account_creation_raw: String,
}

impl AccountDetail {
    /// See [`AccountRecord::never_logged_in`].
    pub fn never_logged_in(&self) -> bool {
        self.last_logon_raw == NEVER
    }

    /// See [`AccountRecord::password_never_changed`].
    pub fn password_never_changed(&self) -> bool {
        self.last_password_change_raw == self.account_creation_raw
    }
}

impl From<&AccountRecord> for AccountDetail {
    fn from(record: &AccountRecord) -> Self {
        Self {
            domain: record.raw.domain.clone(),
            name: record.raw.name.clone(),
            password_age_years: record.password_age_years,
            account_age_years: record.account_age_years,
            last_logon_years: record.last_logon_years,
            age_difference_years: record.age_difference_years,
            account_age_bracket: AgeBracket::of(record.account_age_years),
            last_logon_raw: record.raw.last_logon.clone(),
            last_password_change_raw: record.raw.last_password_change.clone(),
            account_creation_raw: record.raw.account_creation.clone(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
