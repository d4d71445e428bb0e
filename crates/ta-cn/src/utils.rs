//! Helpers shared by the indicators and their tests.
//!
//! # Floating-Point Comparison
//!
//! Rolling sums accumulate rounding error, so outputs are compared with a
//! tolerance rather than `==`. NaN compares equal to NaN here, which is what
//! the warm-up region of an indicator needs.
//!
//! # Example
//!
//! ```
//! use ta_cn::utils::{approx_eq, EPSILON};
//!
//! let a = 0.1 + 0.2;
//! assert!(approx_eq(a, 0.3, EPSILON));
//! assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
//! ```

use crate::traits::{ConditionElement, SeriesElement};

/// Tolerance for comparisons of directly computed values.
pub const EPSILON: f64 = 1e-10;

/// Tolerance for values that went through long running sums.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Returns `true` if `a` and `b` differ by less than `tolerance`, or if both
/// are NaN.
///
/// ```
/// use ta_cn::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => true,
        (false, false) => (a - b).abs() < tolerance,
        _ => false,
    }
}

/// Relative counterpart of [`approx_eq`], for values of large magnitude.
///
/// ```
/// use ta_cn::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => return true,
        (false, false) => {}
        _ => return false,
    }

    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    if scale == T::zero() {
        return diff == T::zero();
    }
    diff / scale < rel_tolerance
}

/// Number of NaN values in `data`.
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Number of leading NaN values in `data`, i.e. the observed warm-up length.
///
/// ```
/// use ta_cn::indicators::hhv;
/// use ta_cn::utils::count_nan_prefix;
///
/// let out = hhv(&[1.0_f64, 2.0, 3.0, 4.0], 3).unwrap();
/// assert_eq!(count_nan_prefix(&out), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Encodes a condition as a 0/1 series, the form COUNT expects.
///
/// ```
/// use ta_cn::indicators::count;
/// use ta_cn::utils::encode_condition;
///
/// let up = [true, false, true, true];
/// let encoded: Vec<f64> = encode_condition(&up);
/// assert_eq!(count(&encoded, 0).unwrap(), vec![1.0, 1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn encode_condition<C: ConditionElement, T: SeriesElement>(cond: &[C]) -> Vec<T> {
    cond.iter()
        .map(|c| if c.is_true() { T::one() } else { T::zero() })
        .collect()
}
