/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Largest amount rounded shares of `count` hypotheses can miss 1.00 by.
pub fn rounding_tolerance(count: usize) -> f64 {
    0.005 * count as f64
}

/// Divide each raw score by the total and round each share to 2dp.
///
/// Shares are rounded independently, so the result can miss 1.00 by up to
/// [`rounding_tolerance`]. A non-positive or non-finite total spreads evenly.
pub fn normalize(raw: &[f64]) -> Vec<f64> {
    if raw.is_empty() {
        return Vec::new();
    }
    let total: f64 = raw.iter().sum();
    if total > 0.0 && total.is_finite() {
        raw.iter().map(|r| round2(r / total)).collect()
    } else {
        vec![round2(1.0 / raw.len() as f64); raw.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sums_to_one() {
        let n = normalize(&[0.6, 0.3, 0.3]);
        assert_eq!(n, vec![0.5, 0.25, 0.25]);
    }

    #[test]
    fn test_each_share_is_rounded_on_its_own() {
        let n = normalize(&[0.3, 0.3, 0.3]);
        assert_eq!(n, vec![0.33, 0.33, 0.33]);
        let sum: f64 = n.iter().sum();
        assert!((sum - 1.0).abs() <= rounding_tolerance(n.len()));
    }

    #[test]
    fn test_degenerate_total_spreads_evenly() {
        assert_eq!(normalize(&[0.0, 0.0]), vec![0.5, 0.5]);
        assert!(normalize(&[]).is_empty());
    }
}
