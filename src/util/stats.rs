use super::format::round_to;

/// Summary of a numeric series shown on the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatSummary {
    pub min: f64,
    pub max: f64,
    /// Arithmetic mean rounded to two decimals.
    pub avg: f64,
    /// Middle element after sorting; the lower of the two middles for
    /// even-length input.
    pub median: f64,
}

/// Compute min / max / average / median. Empty input gives all zeros.
pub fn calculate_stats(values: &[f64]) -> StatSummary {
    if values.is_empty() {
        return StatSummary::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let avg = values.iter().sum::<f64>() / values.len() as f64;
    let median = sorted[(sorted.len() - 1) / 2];

    StatSummary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        avg: round_to(avg, 2),
        median,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_all_zero() {
        let s = calculate_stats(&[]);
        assert_eq!(
            s,
            StatSummary {
                min: 0.0,
                max: 0.0,
                avg: 0.0,
                median: 0.0
            }
        );
    }

    #[test]
    fn test_even_length_takes_lower_middle() {
        let s = calculate_stats(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert_eq!(s.avg, 2.5);
        assert_eq!(s.median, 2.0);
    }

    #[test]
    fn test_odd_length_and_rounding() {
        let s = calculate_stats(&[8.8, 9.0, 8.6]);
        assert_eq!(s.median, 8.8);
        assert_eq!(s.avg, 8.8);

        let s = calculate_stats(&[1.0, 1.0, 2.0]);
        assert_eq!(s.avg, 1.33);
        assert_eq!(s.median, 1.0);
    }

    #[test]
    fn test_single_value() {
        let s = calculate_stats(&[0.92]);
        assert_eq!(s.min, 0.92);
        assert_eq!(s.max, 0.92);
        assert_eq!(s.median, 0.92);
        assert_eq!(s.avg, 0.92);
    }
}
