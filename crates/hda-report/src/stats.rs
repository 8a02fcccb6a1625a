//! Descriptive statistics for distribution reports.

use crate::types::Summary;

/// Summarize `values`. Returns `None` for an empty slice. NaNs are ignored.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    Some(Summary {
        count: sorted.len(),
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_summary() {
        assert_eq!(summarize(&[]), None);
        assert_eq!(summarize(&[f64::NAN]), None);
    }

    #[test]
    fn single_value_is_every_statistic() {
        let summary = summarize(&[1.7]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 1.7);
        assert_eq!(summary.median, 1.7);
        assert_eq!(summary.max, 1.7);
    }

    #[test]
    fn quartiles_interpolate() {
        let summary = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q3, 3.25);
        assert_eq!(summary.max, 4.0);
    }
}
