//! Fixed age brackets used for distribution reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of eight non-overlapping age intervals, in decimal years.
///
/// Each bracket covers `[lower, upper)`; the last one is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "<90 days")]
    UnderNinetyDays,
    #[serde(rename = "90d-1yr")]
    NinetyDaysToOneYear,
    #[serde(rename = "1-2yr")]
    OneToTwoYears,
    #[serde(rename = "2-5yr")]
    TwoToFiveYears,
    #[serde(rename = "5-10yr")]
    FiveToTenYears,
    #[serde(rename = "10-15yr")]
    TenToFifteenYears,
    #[serde(rename = "15-20yr")]
    FifteenToTwentyYears,
    #[serde(rename = ">20yr")]
    OverTwentyYears,
}

impl AgeBracket {
    /// All brackets in ascending order.
    pub const ALL: [AgeBracket; 8] = [
        AgeBracket::UnderNinetyDays,
        AgeBracket::NinetyDaysToOneYear,
        AgeBracket::OneToTwoYears,
        AgeBracket::TwoToFiveYears,
        AgeBracket::FiveToTenYears,
        AgeBracket::TenToFifteenYears,
        AgeBracket::FifteenToTwentyYears,
        AgeBracket::OverTwentyYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeBracket::UnderNinetyDays => "<90 days",
            AgeBracket::NinetyDaysToOneYear => "90d-1yr",
            AgeBracket::OneToTwoYears => "1-2yr",
            AgeBracket::TwoToFiveYears => "2-5yr",
            AgeBracket::FiveToTenYears => "5-10yr",
            AgeBracket::TenToFifteenYears => "10-15yr",
            AgeBracket::FifteenToTwentyYears => "15-20yr",
            AgeBracket::OverTwentyYears => ">20yr",
        }
    }

    /// Inclusive lower bound in years.
    pub fn lower_bound(self) -> f64 {
        match self {
            AgeBracket::UnderNinetyDays => 0.0,
            AgeBracket::NinetyDaysToOneYear => 0.25,
            AgeBracket::OneToTwoYears => 1.0,
            AgeBracket::TwoToFiveYears => 2.0,
            AgeBracket::FiveToTenYears => 5.0,
            AgeBracket::TenToFifteenYears => 10.0,
            AgeBracket::FifteenToTwentyYears => 15.0,
            AgeBracket::OverTwentyYears => 20.0,
        }
    }

    /// Exclusive upper bound in years; `None` for the open-ended bracket.
    pub fn upper_bound(self) -> Option<f64> {
        Self::ALL
            .get(self.index() + 1)
            .map(|next| next.lower_bound())
    }

    /// Position of this bracket in [`AgeBracket::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bracket containing `years`.
    ///
    /// A value on a boundary belongs to the higher bracket. Unknown ages, and
    /// values below zero or NaN, have no bracket.
    pub fn of(years: Option<f64>) -> Option<Self> {
        let years = years?;
        if years.is_nan() || years < 0.0 {
            return None;
        }
        Self::ALL
            .iter()
            .rev()
            .find(|bracket| years >= bracket.lower_bound())
            .copied()
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-function form of [`AgeBracket::of`].
pub fn bracket_of(years: Option<f64>) -> Option<AgeBracket> {
    AgeBracket::of(years)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
