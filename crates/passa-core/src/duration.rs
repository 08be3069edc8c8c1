//! Elapsed-time text parsing.
//!
//! Directory exports describe ages as free text such as
//! `"2 years, 3 months and 10 days"`. [`DurationParser`] turns that text into
//! a decimal number of years, using fixed approximations of 12 months and
//! 365 days per year.
//!
//! Three forms are recognised, each matched from the start of the string.
//! Whitespace between tokens is optional and trailing text is ignored:
//!
//! | Form | Example                            | Value              |
//! |------|------------------------------------|--------------------|
//! | full | `2 years, 3 months and 10 days`    | `Y + M/12 + D/365` |
//! | no-year | `5 months and 2 days`           | `M/12 + D/365`     |
//! | days-only | `10 days`                     | `D/365`            |

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Sentinel written by directory exports for events that never happened.
pub const NEVER: &str = "Never";

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

// ── DurationForm / DurationParts ──────────────────────────────────────────────

/// Which grammar form produced a parsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationForm {
    /// `<Y> year(s), <M> month(s) and <D> day(s)`
    Full,
    /// `<M> month(s) and <D> day(s)`
    MonthsAndDays,
    /// `<D> day(s)`
    DaysOnly,
}

/// The components captured from one elapsed-time string.
///
/// Components absent from the matched form are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationParts {
    pub form: DurationForm,
    pub years: u64,
    pub months: u64,
    pub days: u64,
}

impl DurationParts {
    /// The elapsed time expressed in decimal years.
    pub fn decimal_years(&self) -> f64 {
        self.years as f64
            + self.months as f64 / MONTHS_PER_YEAR
            + self.days as f64 / DAYS_PER_YEAR
    }
}

/// A failure while converting a structurally valid duration.
#[derive(Error, Debug)]
pub enum DurationError {
    /// A numeric group does not fit in a `u64`.
    #[error("numeric group \"{digits}\" is out of range: {source}")]
    OutOfRange {
        digits: String,
        #[source]
        source: ParseIntError,
    },
}

// ── DurationParser ────────────────────────────────────────────────────────────

/// Parses elapsed-time strings into decimal years.
pub struct DurationParser;

impl DurationParser {
    /// Parse `text` into decimal years.
    ///
    /// Returns `None` for the `"Never"` sentinel and for text matching none of
    /// the recognised forms; the latter is logged at debug level. Internal
    /// failures are logged as warnings with the offending text and also yield
    /// `None`. This function never fails.
    pub fn parse(text: &str) -> Option<f64> {
        match Self::parse_parts(text) {
            Ok(Some(parts)) => Some(parts.decimal_years()),
            Ok(None) => {
                if text != NEVER {
                    debug!("Unparseable time string \"{}\"", text);
                }
                None
            }
            Err(e) => {
                warn!("Error parsing time string \"{}\": {}", text, e);
                None
            }
        }
    }

    /// Parse `text` into its matched form and components.
    ///
    /// `Ok(None)` means the text is `"Never"` or not a duration at all.
    /// `Err` is only returned for text that matches a form but whose numbers
    /// cannot be represented.
    pub fn parse_parts(text: &str) -> Result<Option<DurationParts>, DurationError> {
        if text == NEVER {
            return Ok(None);
        }

        // Text mentioning years must use the full form; it never falls back
        // to the shorter forms.
        let matched = if text.contains("year") {
            full_form(text)
        } else {
            months_and_days_form(text).or_else(|| days_only_form(text))
        };

        matched.map(RawParts::resolve).transpose()
    }
}

// ── Grammar ───────────────────────────────────────────────────────────────────

/// Digit groups captured by a form, before integer conversion.
struct RawParts<'a> {
    form: DurationForm,
    years: Option<&'a str>,
    months: Option<&'a str>,
    days: &'a str,
}

impl RawParts<'_> {
    fn resolve(self) -> Result<DurationParts, DurationError> {
        Ok(DurationParts {
            form: self.form,
            years: self.years.map(to_number).transpose()?.unwrap_or(0),
            months: self.months.map(to_number).transpose()?.unwrap_or(0),
            days: to_number(self.days)?,
        })
    }
}

fn to_number(digits: &str) -> Result<u64, DurationError> {
    digits.parse::<u64>().map_err(|source| DurationError::OutOfRange {
        digits: digits.to_string(),
        source,
    })
}

/// `<Y> year(s), <M> month(s) and <D> day(s)`
fn full_form(text: &str) -> Option<RawParts<'_>> {
    let mut cursor = Cursor::new(text);

    let years = cursor.digits()?;
    cursor.skip_whitespace();
    let plural = cursor.unit("year")?;
    // "year" is only accepted for a count of exactly one.
    if !plural && years != "1" {
        return None;
    }
    cursor.literal(",")?;
    cursor.skip_whitespace();

    let (months, days) = months_and_days(&mut cursor)?;

    Some(RawParts {
        form: DurationForm::Full,
        years: Some(years),
        months: Some(months),
        days,
    })
}

/// `<M> month(s) and <D> day(s)`
fn months_and_days_form(text: &str) -> Option<RawParts<'_>> {
    let mut cursor = Cursor::new(text);
    let (months, days) = months_and_days(&mut cursor)?;

    Some(RawParts {
        form: DurationForm::MonthsAndDays,
        years: None,
        months: Some(months),
        days,
    })
}

/// `<D> day(s)`
fn days_only_form(text: &str) -> Option<RawParts<'_>> {
    let mut cursor = Cursor::new(text);
    let days = day_count(&mut cursor)?;

    Some(RawParts {
        form: DurationForm::DaysOnly,
        years: None,
        months: None,
        days,
    })
}

/// Shared tail of the full and no-year forms.
fn months_and_days<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    let months = cursor.digits()?;
    cursor.skip_whitespace();
    cursor.unit("month")?;
    cursor.skip_whitespace();
    cursor.literal("and")?;
    cursor.skip_whitespace();
    let days = day_count(cursor)?;
    Some((months, days))
}

fn day_count<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let days = cursor.digits()?;
    cursor.skip_whitespace();
    cursor.unit("day")?;
    Some(days)
}

/// Forward-only scanner over the remaining input.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Consume a non-empty run of ASCII digits.
    fn digits(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(digits)
    }

    fn literal(&mut self, expected: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// Consume `singular` with an optional trailing `s`.
    ///
    /// Returns whether the plural inflection was used.
    fn unit(&mut self, singular: &str) -> Option<bool> {
        self.literal(singular)?;
        Some(self.literal("s").is_some())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
