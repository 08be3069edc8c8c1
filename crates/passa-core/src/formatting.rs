/// Placeholder printed for statistics with no data behind them.
pub const NOT_AVAILABLE: &str = "n/a";

/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use passa_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Nudge by half an ULP at the target precision so exact midpoints round
    // up despite their binary representation.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    let grouped = group_thousands(&integer_part.to_string());

    let result = if decimals == 0 {
        grouped
    } else {
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` starts with "0.", e.g. "0.50".
        format!("{}{}", grouped, &frac_str[1..])
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format an optional age in years with one decimal place.
///
/// # Examples
///
/// ```
/// use passa_core::formatting::format_years;
///
/// assert_eq!(format_years(Some(2.26)), "2.3 years");
/// assert_eq!(format_years(None), "n/a");
/// ```
pub fn format_years(years: Option<f64>) -> String {
    match years {
        Some(value) => format!("{} years", format_number(value, 1)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format `count` and its share of `total` as `"12 (34.5%)"`.
///
/// # Examples
///
/// ```
/// use passa_core::formatting::format_count_share;
///
/// assert_eq!(format_count_share(1, 8), "1 (12.5%)");
/// assert_eq!(format_count_share(0, 0), "0 (0.0%)");
/// ```
pub fn format_count_share(count: usize, total: usize) -> String {
    format!(
        "{} ({:.1}%)",
        format_number(count as f64, 0),
        percentage(count as f64, total as f64, 1)
    )
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use passa_core::formatting::percentage;
///
/// assert!((percentage(50.0, 200.0, 1) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(0.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let raw = (part / whole) * 100.0;
    let factor = 10_f64.powi(decimal_places as i32);
    (raw * factor).round() / factor
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_with_thousands() {
        assert_eq!(format_number(1_234.5, 1), "1,234.5");
        assert_eq!(format_number(1_000.0, 0), "1,000");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-9_876.5, 1), "-9,876.5");
    }

    #[test]
    fn test_format_number_rounds_up() {
        assert_eq!(format_number(1.005, 2), "1.01");
    }

    // ── format_years ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_years_value() {
        assert_eq!(format_years(Some(0.0)), "0.0 years");
        assert_eq!(format_years(Some(21.04)), "21.0 years");
    }

    #[test]
    fn test_format_years_missing_is_not_zero() {
        assert_eq!(format_years(None), NOT_AVAILABLE);
    }

    // ── format_count_share ───────────────────────────────────────────────────

    #[test]
    fn test_format_count_share() {
        assert_eq!(format_count_share(3, 4), "3 (75.0%)");
        assert_eq!(format_count_share(1_500, 3_000), "1,500 (50.0%)");
    }

    #[test]
    fn test_format_count_share_zero_total() {
        assert_eq!(format_count_share(0, 0), "0 (0.0%)");
    }

    // ── percentage ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentage_basic() {
        let p = percentage(50.0, 200.0, 1);
        assert!((p - 25.0).abs() < 1e-9, "percentage = {p}");
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(10.0, 0.0, 2), 0.0);
    }

    #[test]
    fn test_percentage_rounding() {
        let p = percentage(1.0, 3.0, 2);
        assert!((p - 33.33).abs() < 1e-2, "percentage = {p}");
    }
}
