//! Running-sum accumulator for trailing sums, means and cumulative sums.
//!
//! [`RollingSum`] adds the incoming value and evicts the outgoing one, so each
//! slide of the window costs O(1). NaN values are counted rather than added:
//! while any NaN is inside the window the accumulator reports NaN, and once
//! the NaN slides out the sum is valid again without having been poisoned.
//!
//! Infinities are counted by sign for the same reason, since evicting one
//! would compute `inf - inf`. A window holding `+inf` sums to `+inf`, one
//! holding both signs sums to NaN.
//!
//! Cumulative sums behave differently on purpose: a NaN poisons every later
//! position, the same as a plain running total.
//!
//! # Example
//!
//! ```
//! use ta_cn::kernels::rolling_sum::{cumsum, rolling_mean, rolling_sum};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//!
//! let sums = rolling_sum(&data, 2).unwrap();
//! assert!(sums[0].is_nan());
//! assert!((sums[3] - 7.0).abs() < 1e-10);
//!
//! let means = rolling_mean(&data, 2).unwrap();
//! assert!((means[3] - 3.5).abs() < 1e-10);
//!
//! let total = cumsum(&data).unwrap();
//! assert!((total[3] - 10.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::traits::{validate_not_empty, validate_output_len, validate_window_input, SeriesElement};

/// Running sum over a sliding window.
///
/// The accumulator does not store the window itself; callers evict exactly
/// the value they pushed `period` steps earlier.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingSum<T> {
    sum: T,
    nan_count: usize,
    pos_inf_count: usize,
    neg_inf_count: usize,
    len: usize,
}

impl<T: SeriesElement> RollingSum<T> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            nan_count: 0,
            pos_inf_count: 0,
            neg_inf_count: 0,
            len: 0,
        }
    }

    /// Adds a value entering the window.
    #[inline]
    pub fn push(&mut self, value: T) {
        if value.is_nan() {
            self.nan_count += 1;
        } else if value.is_infinite() {
            if value > T::zero() {
                self.pos_inf_count += 1;
            } else {
                self.neg_inf_count += 1;
            }
        } else {
            self.sum = self.sum + value;
        }
        self.len += 1;
    }

    /// Removes a value leaving the window.
    ///
    /// `value` must be one previously passed to [`push`](Self::push).
    #[inline]
    pub fn evict(&mut self, value: T) {
        if value.is_nan() {
            self.nan_count = self.nan_count.saturating_sub(1);
        } else if value.is_infinite() {
            if value > T::zero() {
                self.pos_inf_count = self.pos_inf_count.saturating_sub(1);
            } else {
                self.neg_inf_count = self.neg_inf_count.saturating_sub(1);
            }
        } else {
            self.sum = self.sum - value;
        }
        self.len = self.len.saturating_sub(1);
    }

    /// Number of values currently in the window.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no values are in the window.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if a NaN is inside the window.
    #[inline]
    #[must_use]
    pub const fn has_nan(&self) -> bool {
        self.nan_count > 0
    }

    /// The window sum, or NaN while a NaN (or both infinities) is inside
    /// the window.
    #[inline]
    pub fn value(&self) -> T {
        match (self.has_nan(), self.pos_inf_count > 0, self.neg_inf_count > 0) {
            (true, _, _) | (false, true, true) => T::nan(),
            (false, true, false) => T::infinity(),
            (false, false, true) => T::neg_infinity(),
            (false, false, false) => self.sum,
        }
    }
}

/// Computes the trailing sum over `period` into a pre-allocated buffer.
///
/// The first `period - 1` outputs are NaN. Returns the number of valid
/// positions.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data.len() < period`
/// - `Error::BufferTooSmall` if `output.len() < data.len()`
pub fn rolling_sum_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_window_input(data, period, "rolling_sum")?;
    validate_output_len(output.len(), data.len(), "rolling_sum")?;

    let mut acc = RollingSum::new();
    for (i, &value) in data.iter().enumerate() {
        acc.push(value);
        if i >= period {
            acc.evict(data[i - period]);
        }
        output[i] = if i + 1 >= period { acc.value() } else { T::nan() };
    }

    Ok(data.len() - period + 1)
}

/// Computes the trailing sum over `period`.
///
/// # Errors
///
/// See [`rolling_sum_into`].
pub fn rolling_sum<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rolling_sum_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the trailing arithmetic mean over `period` into a buffer.
///
/// # Errors
///
/// See [`rolling_sum_into`]; additionally `Error::NumericConversion` if
/// `period` cannot be represented as `T`.
pub fn rolling_mean_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_window_input(data, period, "rolling_mean")?;
    validate_output_len(output.len(), data.len(), "rolling_mean")?;
    let period_t = T::from_usize(period)?;

    let valid = rolling_sum_into(data, period, output)?;
    for value in output.iter_mut().take(data.len()).skip(period - 1) {
        *value = *value / period_t;
    }

    Ok(valid)
}

/// Computes the trailing arithmetic mean over `period`.
///
/// # Errors
///
/// See [`rolling_mean_into`].
pub fn rolling_mean<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rolling_mean_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the cumulative sum from the start of the series into a buffer.
///
/// # Errors
///
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::BufferTooSmall` if `output.len() < data.len()`
pub fn cumsum_into<T: SeriesElement>(data: &[T], output: &mut [T]) -> Result<usize> {
    validate_not_empty(data)?;
    validate_output_len(output.len(), data.len(), "cumsum")?;

    let mut total = T::zero();
    for (out, &value) in output.iter_mut().zip(data) {
        total = total + value;
        *out = total;
    }

    Ok(data.len())
}

/// Computes the cumulative sum from the start of the series.
///
/// # Errors
///
/// See [`cumsum_into`].
pub fn cumsum<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); data.len()];
    cumsum_into(data, &mut output)?;
    Ok(output)
}
