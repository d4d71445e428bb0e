//! FILTER: suppress the bars that follow a signal.
//!
//! After a bar on which the condition is true, the next `n` bars are forced
//! to zero. A bar that was forced to zero is no longer a signal, so it does
//! not open a suppression window of its own. Windows from different signals
//! never extend one another.
//!
//! ```text
//! cond   = [1, 1, 0, 0, 1, 1, 0]     n = 2
//! FILTER = [1, 0, 0, 0, 1, 0, 0]
//!              ^  ^        ^  ^
//! ```
//!
//! Marked bars are suppressed by the signal to their left.
//!
//! [`filter`] and [`filter_into`] leave the input untouched.
//! [`filter_in_place`] rewrites a buffer the caller owns.

use crate::error::Result;
use crate::traits::{validate_not_empty, validate_output_len, ConditionElement};

/// Default suppression length.
pub const DEFAULT_FILTER_PERIOD: usize = 5;

#[inline]
fn filter_bar<C: ConditionElement>(value: C, remaining: &mut usize, n: usize) -> C {
    if *remaining > 0 {
        *remaining -= 1;
        C::cleared()
    } else {
        if value.is_true() {
            *remaining = n;
        }
        value
    }
}

/// Computes FILTER into a separate output buffer.
///
/// # Errors
///
/// - `Error::EmptyInput` if `cond` is empty
/// - `Error::BufferTooSmall` if `output.len() < cond.len()`
#[doc(alias = "FILTER")]
pub fn filter_into<C: ConditionElement>(cond: &[C], n: usize, output: &mut [C]) -> Result<()> {
    validate_not_empty(cond)?;
    validate_output_len(output.len(), cond.len(), "filter")?;

    let mut remaining = 0_usize;
    for (out, &value) in output.iter_mut().zip(cond) {
        *out = filter_bar(value, &mut remaining, n);
    }

    Ok(())
}

/// Applies FILTER to `cond`, overwriting suppressed bars with zero.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `cond` is empty.
#[doc(alias = "FILTER")]
pub fn filter_in_place<C: ConditionElement>(cond: &mut [C], n: usize) -> Result<()> {
    validate_not_empty(cond)?;

    let mut remaining = 0_usize;
    for value in cond.iter_mut() {
        *value = filter_bar(*value, &mut remaining, n);
    }

    Ok(())
}

/// Returns a copy of `cond` with the `n` bars after each signal zeroed.
///
/// `n == 0` returns an unchanged copy.
///
/// # Errors
///
/// See [`filter_into`].
///
/// # Example
///
/// ```
/// use ta_cn::indicators::filter;
///
/// let cond = [1.0_f64, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
/// assert_eq!(filter(&cond, 2).unwrap(), vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
///
/// // The signal at index 1 falls inside the window opened at index 0.
/// let cond = [true, true, false, false, false];
/// assert_eq!(filter(&cond, 2).unwrap(), vec![true, false, false, false, false]);
/// ```
#[doc(alias = "FILTER")]
pub fn filter<C: ConditionElement>(cond: &[C], n: usize) -> Result<Vec<C>> {
    let mut output = vec![C::cleared(); cond.len()];
    filter_into(cond, n, &mut output)?;
    Ok(output)
}

/// FILTER configuration with a 5-bar default suppression length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filter {
    period: usize,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            period: DEFAULT_FILTER_PERIOD,
        }
    }
}

impl Filter {
    /// Creates a configuration with the default suppression length (5).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bars suppressed after each signal.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the configured suppression length.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Computes FILTER with the configured suppression length.
    ///
    /// # Errors
    ///
    /// See [`filter_into`].
    pub fn compute<C: ConditionElement>(&self, cond: &[C]) -> Result<Vec<C>> {
        filter(cond, self.period)
    }
}
