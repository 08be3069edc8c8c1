//! Aggregate statistics over a column of optional ages.

use serde::{Deserialize, Serialize};

// ── Thresholds ────────────────────────────────────────────────────────────────

/// A labelled cutoff, in decimal years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    pub label: &'static str,
    pub cutoff: f64,
}

impl Threshold {
    pub const fn new(label: &'static str, cutoff: f64) -> Self {
        Self { label, cutoff }
    }
}

/// The cutoffs reported for every tracked field, ascending.
pub const STANDARD_THRESHOLDS: [Threshold; 5] = [
    Threshold::new("over_90_days", 0.25),
    Threshold::new("over_1_year", 1.0),
    Threshold::new("over_2_years", 2.0),
    Threshold::new("over_15_years", 15.0),
    Threshold::new("over_20_years", 20.0),
];

/// Number of values strictly greater than a threshold's cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCount {
    pub label: String,
    pub cutoff: f64,
    pub count: usize,
}

// ── FieldStatistics ───────────────────────────────────────────────────────────

/// Descriptive statistics over the known values of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std_dev: Option<f64>,
}

/// Everything computed for one field of the account collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldStatistics {
    /// Number of known values.
    pub count: usize,
    /// Number of unknown (`None`) values.
    pub missing: usize,
    /// `None` when no value is known.
    pub aggregates: Option<Aggregates>,
    /// One entry per requested threshold, in the order given.
    pub over: Vec<ThresholdCount>,
    /// Values at or below the smallest cutoff; `None` without thresholds.
    pub at_or_below_lowest: Option<ThresholdCount>,
}

impl FieldStatistics {
    pub fn has_data(&self) -> bool {
        self.aggregates.is_some()
    }

    pub fn mean(&self) -> Option<f64> {
        self.aggregates.as_ref().map(|a| a.mean)
    }

    pub fn median(&self) -> Option<f64> {
        self.aggregates.as_ref().map(|a| a.median)
    }

    pub fn min(&self) -> Option<f64> {
        self.aggregates.as_ref().map(|a| a.min)
    }

    pub fn max(&self) -> Option<f64> {
        self.aggregates.as_ref().map(|a| a.max)
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.aggregates.as_ref().and_then(|a| a.std_dev)
    }

    /// Count of values above the threshold labelled `label`, if requested.
    pub fn over(&self, label: &str) -> Option<usize> {
        self.over.iter().find(|t| t.label == label).map(|t| t.count)
    }

    /// Count of values at or below the smallest cutoff (0 without thresholds).
    pub fn compliant(&self) -> usize {
        self.at_or_below_lowest.as_ref().map_or(0, |t| t.count)
    }
}

// ── summarize ─────────────────────────────────────────────────────────────────

/// Reduce a column of optional values to [`FieldStatistics`].
///
/// `None` entries are skipped for every figure. Threshold counts use a
/// strict `>` comparison.
pub fn summarize(values: &[Option<f64>], thresholds: &[Threshold]) -> FieldStatistics {
    let mut known: Vec<f64> = values.iter().flatten().copied().collect();
    known.sort_by(f64::total_cmp);

    let over = thresholds
        .iter()
        .map(|t| ThresholdCount {
            label: t.label.to_string(),
            cutoff: t.cutoff,
            count: known.iter().filter(|&&v| v > t.cutoff).count(),
        })
        .collect();

    let at_or_below_lowest = thresholds
        .iter()
        .min_by(|a, b| a.cutoff.total_cmp(&b.cutoff))
        .map(|lowest| ThresholdCount {
            label: format!("at_or_below_{}", lowest.label.trim_start_matches("over_")),
            cutoff: lowest.cutoff,
            count: known.iter().filter(|&&v| v <= lowest.cutoff).count(),
        });

    FieldStatistics {
        count: known.len(),
        missing: values.len() - known.len(),
        aggregates: aggregates(&known),
        over,
        at_or_below_lowest,
    }
}

/// Descriptive statistics of an already **sorted** slice.
fn aggregates(sorted: &[f64]) -> Option<Aggregates> {
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;

    Some(Aggregates {
        mean,
        median: median(sorted)?,
        min,
        max,
        std_dev: sample_std_dev(sorted, mean),
    })
}

/// Median of a **sorted** slice; the mean of the two middle values when the
/// length is even.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Standard deviation with an `n - 1` denominator.
fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() as f64 - 1.0)).sqrt())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ── no data ──────────────────────────────────────────────────────────────

    #[test]
    fn test_all_none_is_undefined_not_zero() {
        let stats = summarize(&[None, None, None], &STANDARD_THRESHOLDS);
        assert!(!stats.has_data());
        assert_eq!(stats.mean(), None);
        assert_eq!(stats.median(), None);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
        assert_eq!(stats.std_dev(), None);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.missing, 3);
        assert!(stats.over.iter().all(|t| t.count == 0));
    }

    #[test]
    fn test_empty_sequence_is_undefined() {
        let stats = summarize(&[], &STANDARD_THRESHOLDS);
        assert!(stats.aggregates.is_none());
        assert_eq!(stats.missing, 0);
    }

    // ── aggregates ───────────────────────────────────────────────────────────

    #[test]
    fn test_aggregates_skip_none() {
        let stats = summarize(&[Some(1.0), None, Some(3.0), Some(2.0)], &[]);
        let agg = stats.aggregates.unwrap();
        assert!(close(agg.mean, 2.0));
        assert!(close(agg.median, 2.0));
        assert!(close(agg.min, 1.0));
        assert!(close(agg.max, 3.0));
        assert!(close(agg.std_dev.unwrap(), 1.0));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.missing, 1);
    }

    #[test]
    fn test_median_even_length_averages_middle_pair() {
        let stats = summarize(&[Some(4.0), Some(1.0), Some(3.0), Some(2.0)], &[]);
        assert!(close(stats.median().unwrap(), 2.5));
    }

    #[test]
    fn test_single_value_has_no_sample_std_dev() {
        let stats = summarize(&[Some(5.0)], &[]);
        assert!(close(stats.mean().unwrap(), 5.0));
        assert_eq!(stats.std_dev(), None);
    }

    #[test]
    fn test_zero_is_a_real_value() {
        let stats = summarize(&[Some(0.0), None], &[]);
        assert!(stats.has_data());
        assert_eq!(stats.min(), Some(0.0));
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_sample_std_dev_known_value() {
        // 2, 4, 4, 4, 5, 5, 7, 9: sum of squares 32, n - 1 = 7.
        let values: Vec<Option<f64>> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .into_iter()
            .map(Some)
            .collect();
        let stats = summarize(&values, &[]);
        assert!(close(stats.std_dev().unwrap(), (32.0_f64 / 7.0).sqrt()));
    }

    // ── thresholds ───────────────────────────────────────────────────────────

    #[test]
    fn test_threshold_counts_are_strictly_greater() {
        let values = [Some(0.25), Some(1.0), Some(1.5), Some(20.0), Some(21.0), None];
        let stats = summarize(&values, &STANDARD_THRESHOLDS);
        assert_eq!(stats.over("over_90_days"), Some(4));
        assert_eq!(stats.over("over_1_year"), Some(3));
        assert_eq!(stats.over("over_2_years"), Some(2));
        assert_eq!(stats.over("over_15_years"), Some(2));
        assert_eq!(stats.over("over_20_years"), Some(1));
        assert_eq!(stats.over("over_99_years"), None);
    }

    #[test]
    fn test_at_or_below_lowest_cutoff() {
        let values = [Some(0.0), Some(0.25), Some(0.26), None];
        let stats = summarize(&values, &STANDARD_THRESHOLDS);
        let compliant = stats.at_or_below_lowest.as_ref().unwrap();
        assert_eq!(compliant.label, "at_or_below_90_days");
        assert!(close(compliant.cutoff, 0.25));
        assert_eq!(stats.compliant(), 2);
        assert_eq!(stats.compliant() + stats.over("over_90_days").unwrap(), stats.count);
    }

    #[test]
    fn test_no_thresholds_means_no_compliance_count() {
        let stats = summarize(&[Some(1.0)], &[]);
        assert!(stats.over.is_empty());
        assert!(stats.at_or_below_lowest.is_none());
        assert_eq!(stats.compliant(), 0);
    }

    #[test]
    fn test_threshold_counts_monotonically_non_increasing() {
        let values: Vec<Option<f64>> = (0..200)
            .map(|i| if i % 7 == 0 { None } else { Some(i as f64 * 0.13) })
            .collect();
        let stats = summarize(&values, &STANDARD_THRESHOLDS);
        for pair in stats.over.windows(2) {
            assert!(pair[0].cutoff < pair[1].cutoff);
            assert!(pair[1].count <= pair[0].count);
        }
    }

    // ── median ───────────────────────────────────────────────────────────────

    #[test]
    fn test_median_helper() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[3.0]), Some(3.0));
        assert_eq!(median(&[1.0, 2.0, 10.0]), Some(2.0));
    }
}
