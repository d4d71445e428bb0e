//! Shared test utilities for ta-cn tests.
//!
//! Besides comparison helpers this module holds straightforward O(n·k)
//! transcriptions of the scan definitions, used as references for the
//! single-pass implementations.

/// Approximate equality check; two NaN values compare equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for long running sums.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Asserts element-wise approximate equality of two series.
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[f64], expected: &[f64], eps: f64, label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(approx_eq(*a, *e, eps), "{label}[{i}]: expected {e}, got {a}");
    }
}

/// Bars since the last true bar, searching backwards from each index.
/// Before the first true bar the distance counts from index 0.
#[allow(dead_code)]
pub fn naive_barslast(cond: &[bool]) -> Vec<usize> {
    (0..cond.len())
        .map(|i| (0..=i).rev().find(|&j| cond[j]).map_or(i, |j| i - j))
        .collect()
}

/// Length of the true run ending at each index.
#[allow(dead_code)]
pub fn naive_barslastcount(cond: &[bool]) -> Vec<usize> {
    (0..cond.len())
        .map(|i| cond[..=i].iter().rev().take_while(|&&c| c).count())
        .collect()
}

/// First true offset inside each clipped trailing window, `period` if none.
#[allow(dead_code)]
pub fn naive_barssincen(cond: &[bool], period: usize) -> Vec<usize> {
    (0..cond.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(period);
            cond[start..=i].iter().position(|&c| c).unwrap_or(period)
        })
        .collect()
}

/// FILTER by explicit copy-then-mutate: each surviving signal clears the
/// next `n` bars of the working copy.
#[allow(dead_code)]
pub fn naive_filter(cond: &[bool], n: usize) -> Vec<bool> {
    let mut out = cond.to_vec();
    for i in 0..out.len() {
        if out[i] {
            for later in out.iter_mut().skip(i + 1).take(n) {
                *later = false;
            }
        }
    }
    out
}

/// Trailing max with "any NaN in window gives NaN".
#[allow(dead_code)]
pub fn naive_window_max(data: &[f64], period: usize) -> Vec<f64> {
    naive_window(data, period, |w| w.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Trailing min with "any NaN in window gives NaN".
#[allow(dead_code)]
pub fn naive_window_min(data: &[f64], period: usize) -> Vec<f64> {
    naive_window(data, period, |w| w.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Trailing sum with "any NaN in window gives NaN".
#[allow(dead_code)]
pub fn naive_window_sum(data: &[f64], period: usize) -> Vec<f64> {
    naive_window(data, period, |w| w.iter().sum())
}

#[allow(dead_code)]
fn naive_window(data: &[f64], period: usize, agg: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    (0..data.len())
        .map(|i| {
            if i + 1 < period {
                return f64::NAN;
            }
            let window = &data[i + 1 - period..=i];
            if window.iter().any(|x| x.is_nan()) {
                f64::NAN
            } else {
                agg(window)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
    }

    #[test]
    fn test_naive_references() {
        let cond = [false, true, false, false, true, true, false];
        assert_eq!(naive_barslast(&cond), vec![0, 0, 1, 2, 0, 0, 1]);
        assert_eq!(naive_barslastcount(&cond), vec![0, 1, 0, 0, 1, 2, 0]);
        assert_eq!(
            naive_filter(&[true, true, false, false, false], 2),
            vec![true, false, false, false, false]
        );
        assert_eq!(naive_barssincen(&[false, false], 3), vec![3, 3]);
    }
}
