//! BARSLAST, BARSLASTCOUNT and BARSSINCEN: bar counters over a condition.
//!
//! All three take a condition series (any [`ConditionElement`], a value is
//! true when nonzero) and run a single forward pass.
//!
//! | Function | `out[i]` |
//! |---|---|
//! | [`barslast`] | bars since the most recent true bar at or before `i` (0 on a true bar) |
//! | [`barslastcount`] | length of the run of consecutive true bars ending at `i` (0 on a false bar) |
//! | [`barssincen`] | offset of the first true bar inside the trailing window, counted from the window start; `period` if the window has none |
//!
//! # Cold Start
//!
//! BARSLAST starts its counter at 0 on index 0 whether or not the condition
//! holds there, so a series that has never been true counts `0, 1, 2, ...`.
//! BARSSINCEN clips its window at the start of the series and searches only
//! the available prefix.
//!
//! # Example
//!
//! ```
//! use ta_cn::indicators::{barslast, barslastcount, barssincen};
//!
//! let cond = [0, 1, 0, 0, 1, 1, 0];
//! assert_eq!(barslast(&cond).unwrap(), vec![0, 0, 1, 2, 0, 0, 1]);
//! assert_eq!(barslastcount(&cond).unwrap(), vec![0, 1, 0, 0, 1, 2, 0]);
//! assert_eq!(barssincen(&cond, 3).unwrap(), vec![3, 1, 1, 0, 2, 1, 0]);
//! ```

use std::collections::VecDeque;

use crate::error::Result;
use crate::traits::{validate_not_empty, validate_output_len, validate_period, ConditionElement};

/// Default BARSSINCEN window.
pub const DEFAULT_BARSSINCEN_PERIOD: usize = 5;

/// Computes BARSLAST into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::EmptyInput` if `cond` is empty
/// - `Error::BufferTooSmall` if `output.len() < cond.len()`
#[doc(alias = "BARSLAST")]
pub fn barslast_into<C: ConditionElement>(cond: &[C], output: &mut [usize]) -> Result<()> {
    validate_not_empty(cond)?;
    validate_output_len(output.len(), cond.len(), "barslast")?;

    let mut distance = 0_usize;
    for (i, (out, &value)) in output.iter_mut().zip(cond).enumerate() {
        if value.is_true() {
            distance = 0;
        } else if i > 0 {
            distance += 1;
        }
        *out = distance;
    }

    Ok(())
}

/// Number of bars since the condition was last true.
///
/// # Errors
///
/// See [`barslast_into`].
#[doc(alias = "BARSLAST")]
pub fn barslast<C: ConditionElement>(cond: &[C]) -> Result<Vec<usize>> {
    let mut output = vec![0; cond.len()];
    barslast_into(cond, &mut output)?;
    Ok(output)
}

/// Computes BARSLASTCOUNT into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::EmptyInput` if `cond` is empty
/// - `Error::BufferTooSmall` if `output.len() < cond.len()`
#[doc(alias = "BARSLASTCOUNT")]
pub fn barslastcount_into<C: ConditionElement>(cond: &[C], output: &mut [usize]) -> Result<()> {
    validate_not_empty(cond)?;
    validate_output_len(output.len(), cond.len(), "barslastcount")?;

    let mut run = 0_usize;
    for (out, &value) in output.iter_mut().zip(cond) {
        run = if value.is_true() { run + 1 } else { 0 };
        *out = run;
    }

    Ok(())
}

/// Number of consecutive bars, ending at each bar, on which the condition
/// holds. The first bar of a run counts as 1.
///
/// # Errors
///
/// See [`barslastcount_into`].
#[doc(alias = "BARSLASTCOUNT")]
pub fn barslastcount<C: ConditionElement>(cond: &[C]) -> Result<Vec<usize>> {
    let mut output = vec![0; cond.len()];
    barslastcount_into(cond, &mut output)?;
    Ok(output)
}

/// Computes BARSSINCEN into a pre-allocated output buffer.
///
/// Runs in O(n): a deque holds the indices of true bars inside the current
/// window, and its front is the first true bar of the window.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `cond` is empty
/// - `Error::BufferTooSmall` if `output.len() < cond.len()`
#[doc(alias = "BARSSINCEN")]
pub fn barssincen_into<C: ConditionElement>(
    cond: &[C],
    period: usize,
    output: &mut [usize],
) -> Result<()> {
    validate_period(period)?;
    validate_not_empty(cond)?;
    validate_output_len(output.len(), cond.len(), "barssincen")?;

    let mut true_bars: VecDeque<usize> = VecDeque::with_capacity(period.min(cond.len()));
    for (i, (out, &value)) in output.iter_mut().zip(cond).enumerate() {
        if value.is_true() {
            true_bars.push_back(i);
        }

        let window_start = (i + 1).saturating_sub(period);
        while true_bars.front().is_some_and(|&first| first < window_start) {
            true_bars.pop_front();
        }

        *out = true_bars
            .front()
            .map_or(period, |&first| first - window_start);
    }

    Ok(())
}

/// Offset, from the start of the trailing `period`-bar window, of the first
/// bar in that window on which the condition holds.
///
/// Windows with no true bar yield `period`, so every output is at most
/// `period`. Near the start of the series the window is clipped to the bars
/// available. A `period` longer than the series is allowed.
///
/// # Errors
///
/// See [`barssincen_into`].
#[doc(alias = "BARSSINCEN")]
pub fn barssincen<C: ConditionElement>(cond: &[C], period: usize) -> Result<Vec<usize>> {
    let mut output = vec![period; cond.len()];
    barssincen_into(cond, period, &mut output)?;
    Ok(output)
}

/// BARSSINCEN configuration with a 5-bar default window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarsSinceN {
    period: usize,
}

impl Default for BarsSinceN {
    fn default() -> Self {
        Self {
            period: DEFAULT_BARSSINCEN_PERIOD,
        }
    }
}

impl BarsSinceN {
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

    /// Computes BARSSINCEN with the configured period.
    ///
    /// # Errors
    ///
    /// See [`barssincen_into`].
    pub fn compute<C: ConditionElement>(&self, cond: &[C]) -> Result<Vec<usize>> {
        barssincen(cond, self.period)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    /// Direct transcription of the window definition, O(n·k).
    fn barssincen_naive(cond: &[bool], period: usize) -> Vec<usize> {
        (0..cond.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(period);
                cond[start..=i]
                    .iter()
                    .position(|&c| c)
                    .unwrap_or(period)
            })
            .collect()
    }

    // ==================== BARSLAST ====================

    #[test]
    fn test_barslast_reference_scenario() {
        let cond = [0.0_f64, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0];
        assert_eq!(barslast(&cond).unwrap(), vec![0, 0, 1, 2, 0, 0, 1]);
    }

    #[test]
    fn test_barslast_all_false_counts_from_zero() {
        let cond = [false; 6];
        assert_eq!(barslast(&cond).unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_barslast_all_true_is_zero() {
        let cond = [1_i32; 5];
        assert!(barslast(&cond).unwrap().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_barslast_zero_iff_true() {
        let cond: Vec<bool> = (0..40).map(|i| i % 7 == 3 || i % 5 == 0).collect();
        let result = barslast(&cond).unwrap();
        for i in 1..cond.len() {
            assert_eq!(result[i] == 0, cond[i], "index {i}");
        }
    }

    #[test]
    fn test_barslast_nan_is_true() {
        let cond = [0.0_f64, f64::NAN, 0.0];
        assert_eq!(barslast(&cond).unwrap(), vec![0, 0, 1]);
    }

    // ==================== BARSLASTCOUNT ====================

    #[test]
    fn test_barslastcount_reference_scenario() {
        let cond = [0, 1, 0, 0, 1, 1, 0];
        assert_eq!(barslastcount(&cond).unwrap(), vec![0, 1, 0, 0, 1, 2, 0]);
    }

    #[test]
    fn test_barslastcount_alternating() {
        let cond = [true, false, true, false, true];
        assert_eq!(barslastcount(&cond).unwrap(), vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_barslastcount_all_false_and_all_true() {
        assert_eq!(barslastcount(&[0.0_f32; 4]).unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(barslastcount(&[2_u8; 4]).unwrap(), vec![1, 2, 3, 4]);
    }

    // ==================== BARSSINCEN ====================

    #[test]
    fn test_barssincen_no_true_is_period() {
        let cond = [false; 8];
        assert_eq!(barssincen(&cond, 3).unwrap(), vec![3; 8]);
    }

    #[test]
    fn test_barssincen_prefix_window() {
        // Window clipped at the start: first true at index 1 is offset 1
        // from index 0 until index 0 leaves a 4-bar window.
        let cond = [false, true, false, false, false, false];
        assert_eq!(barssincen(&cond, 4).unwrap(), vec![4, 1, 1, 1, 0, 4]);
    }

    #[test]
    fn test_barssincen_period_longer_than_series() {
        let cond = [false, false, true];
        assert_eq!(barssincen(&cond, 100).unwrap(), vec![100, 100, 2]);
    }

    #[test]
    fn test_barssincen_period_one() {
        let cond = [true, false, true];
        assert_eq!(barssincen(&cond, 1).unwrap(), vec![0, 1, 0]);
    }

    #[test]
    fn test_barssincen_matches_naive() {
        let cond: Vec<bool> = (0..60).map(|i| (i * 13) % 9 < 2).collect();
        for period in 1..12 {
            assert_eq!(
                barssincen(&cond, period).unwrap(),
                barssincen_naive(&cond, period),
                "period {period}"
            );
        }
    }

    #[test]
    fn test_barssincen_bounded() {
        let cond: Vec<f64> = (0..50).map(|i| f64::from((i * 3) % 7 == 0)).collect();
        let period = 6;
        for value in barssincen(&cond, period).unwrap() {
            assert!(value <= period);
        }
    }

    #[test]
    fn test_barssincen_config() {
        let cond = [0, 0, 0, 0, 0, 1];
        assert_eq!(BarsSinceN::new().get_period(), 5);
        assert_eq!(BarsSinceN::new().compute(&cond).unwrap()[5], 4);
        assert_eq!(BarsSinceN::new().period(2).compute(&cond).unwrap()[5], 1);
    }

    // ==================== Errors ====================

    #[test]
    fn test_errors() {
        let empty: [f64; 0] = [];
        assert!(matches!(barslast(&empty), Err(Error::EmptyInput)));
        assert!(matches!(barslastcount(&empty), Err(Error::EmptyInput)));
        assert!(matches!(barssincen(&empty, 3), Err(Error::EmptyInput)));
        assert!(matches!(
            barssincen(&[1.0_f64], 0),
            Err(Error::InvalidPeriod { .. })
        ));

        let mut small = vec![0_usize; 1];
        assert!(matches!(
            barslast_into(&[true, false], &mut small),
            Err(Error::BufferTooSmall { .. })
        ));
        assert!(matches!(
            barslastcount_into(&[true, false], &mut small),
            Err(Error::BufferTooSmall { .. })
        ));
        assert!(matches!(
            barssincen_into(&[true, false], 2, &mut small),
            Err(Error::BufferTooSmall { .. })
        ));
    }
}
