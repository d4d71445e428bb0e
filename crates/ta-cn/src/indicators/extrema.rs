//! HHV / LLV and HHVBARS / LLVBARS: trailing highest and lowest values.
//!
//! # Formula
//!
//! ```text
//! HHV[i]     = max(real[i-period+1 ..= i])
//! LLV[i]     = min(real[i-period+1 ..= i])
//! HHVBARS[i] = offset of HHV[i] counted from real[i-period+1]
//! LLVBARS[i] = offset of LLV[i] counted from real[i-period+1]
//! ```
//!
//! The bars-ago distance to the current bar is `period - 1 - HHVBARS[i]`.
//! When the extremum occurs more than once in a window the most recent
//! occurrence wins.
//!
//! # Lookback
//!
//! The first `period - 1` outputs are NaN (`None` for the BARS variants).
//! Any window containing NaN also yields NaN / `None`.

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_argextremum_into, rolling_extremum_into, Extremum};
use crate::traits::SeriesElement;

/// Default HHV/LLV window.
pub const DEFAULT_EXTREMA_PERIOD: usize = 5;

/// Number of leading NaN values in HHV output.
#[inline]
#[must_use]
pub const fn hhv_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Minimum input length accepted by HHV.
#[inline]
#[must_use]
pub const fn hhv_min_len(period: usize) -> usize {
    period
}

/// Number of leading NaN values in LLV output.
#[inline]
#[must_use]
pub const fn llv_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Minimum input length accepted by LLV.
#[inline]
#[must_use]
pub const fn llv_min_len(period: usize) -> usize {
    period
}

/// Computes HHV into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `real` is empty
/// - `Error::InsufficientData` if `real.len() < period`
/// - `Error::BufferTooSmall` if `output.len() < real.len()`
#[doc(alias = "HHV")]
pub fn hhv_into<T: SeriesElement>(real: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    rolling_extremum_into(real, period, Extremum::Max, output)
}

/// Highest value over the trailing `period` bars.
///
/// # Errors
///
/// See [`hhv_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::hhv;
///
/// let high = vec![10.0_f64, 12.0, 11.0, 9.0, 13.0];
/// let result = hhv(&high, 3).unwrap();
/// assert!(result[1].is_nan());
/// assert_eq!(&result[2..], &[12.0, 12.0, 13.0]);
/// ```
#[doc(alias = "HHV")]
pub fn hhv<T: SeriesElement>(real: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); real.len()];
    hhv_into(real, period, &mut output)?;
    Ok(output)
}

/// Computes LLV into a pre-allocated output buffer.
///
/// # Errors
///
/// See [`hhv_into`].
#[doc(alias = "LLV")]
pub fn llv_into<T: SeriesElement>(real: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    rolling_extremum_into(real, period, Extremum::Min, output)
}

/// Lowest value over the trailing `period` bars.
///
/// # Errors
///
/// See [`hhv_into`].
#[doc(alias = "LLV")]
pub fn llv<T: SeriesElement>(real: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); real.len()];
    llv_into(real, period, &mut output)?;
    Ok(output)
}

/// Computes HHVBARS into a pre-allocated output buffer.
///
/// # Errors
///
/// See [`hhv_into`].
#[doc(alias = "HHVBARS")]
pub fn hhvbars_into<T: SeriesElement>(
    real: &[T],
    period: usize,
    output: &mut [Option<usize>],
) -> Result<usize> {
    rolling_argextremum_into(real, period, Extremum::Max, output)
}

/// Offset of the trailing `period`-bar high, counted from the window start.
///
/// # Errors
///
/// See [`hhv_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::hhvbars;
///
/// let high = vec![10.0_f64, 12.0, 11.0, 9.0];
/// let result = hhvbars(&high, 3).unwrap();
/// // [10, 12, 11] -> 12 at offset 1; [12, 11, 9] -> 12 at offset 0
/// assert_eq!(result, vec![None, None, Some(1), Some(0)]);
/// ```
#[doc(alias = "HHVBARS")]
pub fn hhvbars<T: SeriesElement>(real: &[T], period: usize) -> Result<Vec<Option<usize>>> {
    let mut output = vec![None; real.len()];
    hhvbars_into(real, period, &mut output)?;
    Ok(output)
}

/// Computes LLVBARS into a pre-allocated output buffer.
///
/// # Errors
///
/// See [`hhv_into`].
#[doc(alias = "LLVBARS")]
pub fn llvbars_into<T: SeriesElement>(
    real: &[T],
    period: usize,
    output: &mut [Option<usize>],
) -> Result<usize> {
    rolling_argextremum_into(real, period, Extremum::Min, output)
}

/// Offset of the trailing `period`-bar low, counted from the window start.
///
/// # Errors
///
/// See [`hhv_into`].
#[doc(alias = "LLVBARS")]
pub fn llvbars<T: SeriesElement>(real: &[T], period: usize) -> Result<Vec<Option<usize>>> {
    let mut output = vec![None; real.len()];
    llvbars_into(real, period, &mut output)?;
    Ok(output)
}

/// HHV / HHVBARS configuration with the conventional 5-bar default.
///
/// # Example
///
/// ```
/// use ta_cn::indicators::Hhv;
///
/// let data: Vec<f64> = (1..=6).map(f64::from).collect();
/// let result = Hhv::new().compute(&data).unwrap();
/// assert!((result[5] - 6.0).abs() < 1e-10);
///
/// let bars = Hhv::new().period(2).compute_bars(&data).unwrap();
/// assert_eq!(bars[5], Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hhv {
    period: usize,
}

impl Default for Hhv {
    fn default() -> Self {
        Self {
            period: DEFAULT_EXTREMA_PERIOD,
        }
    }
}

impl Hhv {
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

    /// Computes HHV with the configured period.
    ///
    /// # Errors
    ///
    /// See [`hhv_into`].
    pub fn compute<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<T>> {
        hhv(real, self.period)
    }

    /// Computes HHVBARS with the configured period.
    ///
    /// # Errors
    ///
    /// See [`hhv_into`].
    pub fn compute_bars<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<Option<usize>>> {
        hhvbars(real, self.period)
    }
}

/// LLV / LLVBARS configuration with the conventional 5-bar default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Llv {
    period: usize,
}

impl Default for Llv {
    fn default() -> Self {
        Self {
            period: DEFAULT_EXTREMA_PERIOD,
        }
    }
}

impl Llv {
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

    /// Computes LLV with the configured period.
    ///
    /// # Errors
    ///
    /// See [`hhv_into`].
    pub fn compute<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<T>> {
        llv(real, self.period)
    }

    /// Computes LLVBARS with the configured period.
    ///
    /// # Errors
    ///
    /// See [`hhv_into`].
    pub fn compute_bars<T: SeriesElement>(&self, real: &[T]) -> Result<Vec<Option<usize>>> {
        llvbars(real, self.period)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_lookback_and_min_len() {
        assert_eq!(hhv_lookback(5), 4);
        assert_eq!(llv_lookback(1), 0);
        assert_eq!(hhv_min_len(5), 5);
        assert_eq!(llv_min_len(3), 3);
    }

    #[test]
    fn test_hhv_llv_basic() {
        let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let high = hhv(&data, 3).unwrap();
        let low = llv(&data, 3).unwrap();

        assert_eq!(high.len(), data.len());
        assert!(high[0].is_nan() && high[1].is_nan());
        assert_eq!(&high[2..], &[4.0, 4.0, 5.0, 9.0, 9.0, 9.0]);
        assert_eq!(&low[2..], &[1.0, 1.0, 1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_hhv_nan_count_equals_lookback() {
        let data: Vec<f64> = (0..20).map(|x| (x as f64).sin()).collect();
        let result = hhv(&data, 7).unwrap();
        let nan_count = result.iter().filter(|x| x.is_nan()).count();
        assert_eq!(nan_count, hhv_lookback(7));
    }

    #[test]
    fn test_hhvbars_ties_most_recent() {
        let data = vec![5.0_f64, 5.0, 1.0, 5.0];
        let result = hhvbars(&data, 3).unwrap();
        // [5, 5, 1] -> latest 5 at offset 1; [5, 1, 5] -> offset 2
        assert_eq!(result, vec![None, None, Some(1), Some(2)]);
    }

    #[test]
    fn test_llvbars_basic() {
        let data = vec![4.0_f64, 2.0, 3.0, 5.0, 1.0];
        let result = llvbars(&data, 3).unwrap();
        assert_eq!(result, vec![None, None, Some(1), Some(0), Some(2)]);
    }

    #[test]
    fn test_bars_bounded_by_period() {
        let data: Vec<f64> = (0..50).map(|x| ((x * 7) % 11) as f64).collect();
        for period in 1..8 {
            for value in hhvbars(&data, period).unwrap().into_iter().flatten() {
                assert!(value < period);
            }
            for value in llvbars(&data, period).unwrap().into_iter().flatten() {
                assert!(value < period);
            }
        }
    }

    #[test]
    fn test_hhv_into_buffer_too_small() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let mut output = vec![0.0_f64; 2];
        assert!(matches!(
            hhv_into(&data, 2, &mut output),
            Err(Error::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn test_hhv_errors() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(hhv(&empty, 5), Err(Error::EmptyInput)));
        assert!(matches!(llv(&[1.0_f64], 0), Err(Error::InvalidPeriod { .. })));
        assert!(matches!(
            hhvbars(&[1.0_f64, 2.0], 5),
            Err(Error::InsufficientData { required: 5, actual: 2, .. })
        ));
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(Hhv::new().get_period(), 5);
        assert_eq!(Llv::default().get_period(), 5);
        assert_eq!(Llv::new().period(9).get_period(), 9);
    }

    #[test]
    fn test_config_compute_matches_function() {
        let data: Vec<f64> = (0..12).map(|x| ((x * 5) % 7) as f64).collect();
        assert_eq!(Llv::new().compute(&data).unwrap()[4..], llv(&data, 5).unwrap()[4..]);
        assert_eq!(
            Llv::new().period(3).compute_bars(&data).unwrap(),
            llvbars(&data, 3).unwrap()
        );
    }
}
