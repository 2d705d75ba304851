//! Shannon entropy of an expression distribution.
//!
//! Measures how evenly a feature's expression is spread over a set of
//! samples. `0` means all expression sits in one sample (or none at all);
//! `ln(n)` means perfectly uniform expression over `n` samples.

/// Shannon entropy (natural log) of the distribution obtained by normalising
/// `values` by their sum.
///
/// An all-zero (or empty) input has entropy `0.0`. Zero-valued entries
/// contribute nothing, following the `p ln p -> 0` convention.
#[must_use]
pub fn shannon_entropy<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let sum: f64 = values
        .iter()
        .map(|&fpkm| fpkm / total)
        .filter(|&p| p > 0.0)
        .map(|p| p * p.ln())
        .sum();

    // A single non-zero sample yields -0.0; fold it back onto 0.0.
    let entropy = -sum;
    if entropy > 0.0 { entropy } else { 0.0 }
}

/// Upper bound of [`shannon_entropy`] over `n` samples.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn max_entropy(n: usize) -> f64 {
    if n <= 1 { 0.0 } else { (n as f64).ln() }
}

/// Entropy divided by its upper bound, in `[0, 1]`.
///
/// Returns `0.0` when fewer than two samples are present.
#[must_use]
pub fn normalized_entropy(entropy: f64, n: usize) -> f64 {
    let max = max_entropy(n);
    if max == 0.0 {
        0.0
    } else {
        (entropy / max).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f64 = 1e-12;

    #[test]
    fn mixed_expression_matches_hand_computation() {
        let h = shannon_entropy([10.0, 0.0, 30.0]);
        let expected = -(0.75_f64 * 0.75_f64.ln() + 0.25_f64 * 0.25_f64.ln());
        assert!((h - expected).abs() < EPS);
        assert!((h - 0.5623).abs() < 1e-4);
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single_zero(vec![0.0])]
    #[case::all_zero(vec![0.0, 0.0, 0.0])]
    fn zero_total_is_exactly_zero(#[case] values: Vec<f64>) {
        let h = shannon_entropy(values);
        assert_eq!(h.to_bits(), 0.0_f64.to_bits());
    }

    #[rstest]
    #[case::one(vec![5.0])]
    #[case::one_of_three(vec![0.0, 12.5, 0.0])]
    fn concentrated_expression_is_zero(#[case] values: Vec<f64>) {
        let h = shannon_entropy(values);
        assert_eq!(h.to_bits(), 0.0_f64.to_bits());
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(10)]
    fn uniform_expression_reaches_ln_n(#[case] n: usize) {
        let h = shannon_entropy(std::iter::repeat_n(4.2, n));
        assert!((h - max_entropy(n)).abs() < EPS);
        assert!((normalized_entropy(h, n) - 1.0).abs() < EPS);
    }

    #[rstest]
    #[case(vec![1.0, 2.0, 3.0, 4.0])]
    #[case(vec![100.0, 0.1, 0.1])]
    #[case(vec![0.0, 7.0, 7.0, 0.0, 1.0])]
    fn non_uniform_expression_is_strictly_below_ln_n(#[case] values: Vec<f64>) {
        let n = values.len();
        let h = shannon_entropy(values);
        assert!(h >= 0.0);
        assert!(h < max_entropy(n));
    }

    #[test]
    fn scaling_does_not_change_entropy() {
        let a = shannon_entropy([1.0, 2.0, 5.0]);
        let b = shannon_entropy([1000.0, 2000.0, 5000.0]);
        assert!((a - b).abs() < EPS);
    }

    #[test]
    fn max_entropy_degenerate_sizes() {
        assert_eq!(max_entropy(0), 0.0);
        assert_eq!(max_entropy(1), 0.0);
        assert_eq!(normalized_entropy(0.0, 1), 0.0);
    }
}
