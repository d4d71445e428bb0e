//! SUM, COUNT and MA: trailing sums and the simple moving average.
//!
//! # Formula
//!
//! ```text
//! SUM[i]   = real[i-period+1] + ... + real[i]      (period > 0)
//! SUM[i]   = real[0] + ... + real[i]               (period == 0)
//! COUNT    = SUM over a 0/1-encoded condition
//! MA[i]    = SUM[i] / period
//! ```
//!
//! # Lookback
//!
//! `period - 1` leading NaN values for a positive period; none for the
//! cumulative form.

use crate::error::Result;
use crate::kernels::rolling_sum::{cumsum_into, rolling_mean_into, rolling_sum_into};
use crate::traits::SeriesElement;

/// Default SUM/MA window.
pub const DEFAULT_SUM_PERIOD: usize = 5;

/// Number of leading NaN values in SUM output.
///
/// The cumulative form (`period == 0`) has no warm-up.
#[inline]
#[must_use]
pub const fn sum_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Minimum input length accepted by SUM.
#[inline]
#[must_use]
pub const fn sum_min_len(period: usize) -> usize {
    if period == 0 {
        1
    } else {
        period
    }
}

/// Number of leading NaN values in MA output.
#[inline]
#[must_use]
pub const fn ma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Minimum input length accepted by MA.
#[inline]
#[must_use]
pub const fn ma_min_len(period: usize) -> usize {
    period
}

/// Computes SUM into a pre-allocated output buffer.
///
/// `period == 0` selects the cumulative sum from the start of the series.
///
/// # Errors
///
/// - `Error::EmptyInput` if `real` is empty
/// - `Error::InsufficientData` if `real.len() < period`
/// - `Error::BufferTooSmall` if `output.len() < real.len()`
#[doc(alias = "SUM")]
pub fn sum_into<T: SeriesElement>(real: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    if period == 0 {
        cumsum_into(real, output)
    } else {
        rolling_sum_into(real, period, output)
    }
}

/// Trailing sum over `period` bars; `period == 0` is the cumulative sum.
///
/// # Errors
///
/// See [`sum_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::sum;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0];
///
/// let rolling = sum(&data, 2).unwrap();
/// assert!(rolling[0].is_nan());
/// assert_eq!(&rolling[1..], &[3.0, 5.0, 7.0]);
///
/// let cumulative = sum(&data, 0).unwrap();
/// assert_eq!(cumulative, vec![1.0, 3.0, 6.0, 10.0]);
/// ```
#[doc(alias = "SUM")]
pub fn sum<T: SeriesElement>(real: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); real.len()];
    sum_into(real, period, &mut output)?;
    Ok(output)
}

/// Number of bars in the trailing `period` where the condition holds.
///
/// The condition must already be encoded as 0/1 values; this is SUM under
/// another name, including the cumulative `period == 0` form.
///
/// # Errors
///
/// See [`sum_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::count;
///
/// let up_days = vec![1.0_f64, 0.0, 1.0, 1.0, 0.0];
/// let result = count(&up_days, 3).unwrap();
/// assert_eq!(&result[2..], &[2.0, 2.0, 2.0]);
/// ```
#[doc(alias = "COUNT")]
pub fn count<T: SeriesElement>(real: &[T], period: usize) -> Result<Vec<T>> {
    sum(real, period)
}

/// Computes MA into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `real` is empty
/// - `Error::InsufficientData` if `real.len() < period`
/// - `Error::BufferTooSmall` if `output.len() < real.len()`
#[doc(alias = "MA")]
pub fn ma_into<T: SeriesElement>(real: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    rolling_mean_into(real, period, output)
}

/// Simple moving average over `period` bars.
///
/// # Errors
///
/// See [`ma_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::ma;
///
/// let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
/// let result = ma(&data, 3).unwrap();
/// assert!(result[1].is_nan());
/// assert!((result[2] - 11.0).abs() < 1e-10);
/// ```
#[doc(alias = "MA")]
pub fn ma<T: SeriesElement>(real: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); real.len()];
    ma_into(real, period, &mut output)?;
    Ok(output)
}

/// SUM configuration with the conventional 5-bar default.
///
/// A period of 0 selects the cumulative sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum {
    period: usize,
}

impl Default for Sum {
    fn default() -> Self {
        Self {
            period: DEFAULT_SUM_PERIOD,
        }
    }
}

impl Sum {
    /// Creates a configuration with the default period (5).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cumulative-sum configuration.
    #[must_use]
    pub const fn cumulative() -> Self {
        Self { period: 0 }
    }

    /// Sets the window length.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the configured window length.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Computes SUM with the configured period.
    ///
    /// # Errors
    ///
    /// See [`sum_into`].
    pub fn compute<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<T>> {
        sum(real, self.period)
    }
}

/// MA configuration with the conventional 5-bar default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ma {
    period: usize,
}

impl Default for Ma {
    fn default() -> Self {
        Self {
            period: DEFAULT_SUM_PERIOD,
        }
    }
}

impl Ma {
    /// Creates a configuration with the default period (5).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the configured window length.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Computes MA with the configured period.
    ///
    /// # Errors
    ///
    /// See [`ma_into`].
    pub fn compute<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<T>> {
        ma(real, self.period)
    }
}
