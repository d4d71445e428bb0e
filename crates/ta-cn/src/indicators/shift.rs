//! REF, DIFF and CONST: shifting and differencing a series.
//!
//! # Formula
//!
//! ```text
//! REF(real, k)[i]  = real[i - k]        NaN when i - k is outside the series
//! DIFF(real, k)[i] = real[i] - real[i - k]
//! CONST(real)[i]   = real[len - 1]
//! ```
//!
//! A positive `k` looks back, a negative `k` looks ahead and `k == 0` is the
//! identity. Shifting by `|k| >= len` yields an all-NaN series.

use crate::error::{Error, Result};
use crate::traits::{validate_not_empty, validate_output_len, SeriesElement};

/// Default REF/DIFF shift.
pub const DEFAULT_SHIFT: isize = 1;

/// Number of NaN positions REF introduces (at the front for `k > 0`, at the
/// back for `k < 0`).
#[inline]
#[must_use]
pub const fn ref_lookback(period: isize) -> usize {
    period.unsigned_abs()
}

/// Number of NaN positions DIFF introduces.
#[inline]
#[must_use]
pub const fn diff_lookback(period: isize) -> usize {
    period.unsigned_abs()
}

/// Computes REF into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::EmptyInput` if `real` is empty
/// - `Error::BufferTooSmall` if `output.len() < real.len()`
#[doc(alias = "REF")]
pub fn ref_into<T: SeriesElement>(real: &[T], period: isize, output: &mut [T]) -> Result<()> {
    validate_not_empty(real)?;
    validate_output_len(output.len(), real.len(), "ref")?;

    let n = real.len();
    let output = &mut output[..n];
    let shift = period.unsigned_abs().min(n);

    if period >= 0 {
        output[..shift].fill(T::nan());
        output[shift..].copy_from_slice(&real[..n - shift]);
    } else {
        output[..n - shift].copy_from_slice(&real[shift..]);
        output[n - shift..].fill(T::nan());
    }

    Ok(())
}

/// Shifts `real` by `period` bars, filling vacated positions with NaN.
///
/// # Errors
///
/// See [`ref_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::ref_;
///
/// let close = vec![1.0_f64, 2.0, 3.0, 4.0];
///
/// let yesterday = ref_(&close, 1).unwrap();
/// assert!(yesterday[0].is_nan());
/// assert_eq!(&yesterday[1..], &[1.0, 2.0, 3.0]);
///
/// let tomorrow = ref_(&close, -1).unwrap();
/// assert_eq!(&tomorrow[..3], &[2.0, 3.0, 4.0]);
/// assert!(tomorrow[3].is_nan());
/// ```
#[doc(alias = "REF")]
pub fn ref_<T: SeriesElement>(real: &[T], period: isize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); real.len()];
    ref_into(real, period, &mut output)?;
    Ok(output)
}

/// Computes DIFF into a pre-allocated output buffer.
///
/// # Errors
///
/// See [`ref_into`].
#[doc(alias = "DIFF")]
pub fn diff_into<T: SeriesElement>(real: &[T], period: isize, output: &mut [T]) -> Result<()> {
    ref_into(real, period, output)?;
    for (out, &value) in output.iter_mut().zip(real) {
        *out = value - *out;
    }
    Ok(())
}

/// Difference between each bar and the bar `period` positions away.
///
/// # Errors
///
/// See [`ref_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::diff;
///
/// let close = vec![10.0_f64, 12.0, 11.0, 15.0];
/// let result = diff(&close, 1).unwrap();
/// assert!(result[0].is_nan());
/// assert_eq!(&result[1..], &[2.0, -1.0, 4.0]);
/// ```
#[doc(alias = "DIFF")]
pub fn diff<T: SeriesElement>(real: &[T], period: isize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); real.len()];
    diff_into(real, period, &mut output)?;
    Ok(output)
}

/// Replaces every element with the last element of the series.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `real` is empty.
///
/// # Example
///
/// ```
/// use ta_cn::indicators::const_;
///
/// let result = const_(&[3.0_f64, 1.0, 7.0]).unwrap();
/// assert_eq!(result, vec![7.0, 7.0, 7.0]);
/// ```
#[doc(alias = "CONST")]
pub fn const_<T: SeriesElement>(real: &[T]) -> Result<Vec<T>> {
    let last = real.last().copied().ok_or(Error::EmptyInput)?;
    Ok(vec![last; real.len()])
}

/// REF configuration with the conventional 1-bar default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ref {
    period: isize,
}

impl Default for Ref {
    fn default() -> Self {
        Self {
            period: DEFAULT_SHIFT,
        }
    }
}

impl Ref {
    /// Creates a configuration with the default shift (1).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shift; negative values look ahead.
    #[must_use]
    pub const fn period(mut self, period: isize) -> Self {
        self.period = period;
        self
    }

    /// Returns the configured shift.
    #[must_use]
    pub const fn get_period(&self) -> isize {
        self.period
    }

    /// Computes REF with the configured shift.
    ///
    /// # Errors
    ///
    /// See [`ref_into`].
    pub fn compute<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<T>> {
        ref_(real, self.period)
    }
}

/// DIFF configuration with the conventional 1-bar default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diff {
    period: isize,
}

impl Default for Diff {
    fn default() -> Self {
        Self {
            period: DEFAULT_SHIFT,
        }
    }
}

impl Diff {
    /// Creates a configuration with the default shift (1).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shift; negative values difference against later bars.
    #[must_use]
    pub const fn period(mut self, period: isize) -> Self {
        self.period = period;
        self
    }

    /// Returns the configured shift.
    #[must_use]
    pub const fn get_period(&self) -> isize {
        self.period
    }

    /// Computes DIFF with the configured shift.
    ///
    /// # Errors
    ///
    /// See [`ref_into`].
    pub fn compute<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<T>> {
        diff(real, self.period)
    }
}
