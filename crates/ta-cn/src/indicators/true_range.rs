//! TR: True Range.
//!
//! # Formula
//!
//! ```text
//! TR[i] = max(
//!     high[i] - low[i],                 // current range
//!     |high[i] - close[i-1]|,           // gap up from previous close
//!     |close[i-1] - low[i]|             // gap down from previous close
//! )
//! ```
//!
//! # NaN Handling
//!
//! Index 0 has no previous close and is NaN. A NaN in any of the three
//! terms makes that bar NaN rather than being skipped by the max.
//!
//! # Example
//!
//! ```
//! use ta_cn::indicators::tr;
//!
//! let high = vec![10.0_f64, 11.0, 12.0];
//! let low = vec![9.0_f64, 10.0, 10.5];
//! let close = vec![9.5_f64, 10.8, 11.0];
//!
//! let result = tr(&high, &low, &close).unwrap();
//! assert!(result[0].is_nan());
//! assert!((result[1] - 1.5).abs() < 1e-10); // |11 - 9.5|
//! assert!((result[2] - 1.5).abs() < 1e-10); // 12 - 10.5
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_not_empty, validate_output_len, SeriesElement};

/// Number of leading NaN values in TR output.
#[inline]
#[must_use]
pub const fn tr_lookback() -> usize {
    1
}

#[inline]
fn nan_max<T: SeriesElement>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if a >= b {
        a
    } else {
        b
    }
}

#[inline]
fn true_range_bar<T: SeriesElement>(high: T, low: T, prev_close: T) -> T {
    let range = high - low;
    let gap_up = (high - prev_close).abs();
    let gap_down = (prev_close - low).abs();
    nan_max(nan_max(range, gap_up), gap_down)
}

fn validate_hlc<T>(high: &[T], low: &[T], close: &[T]) -> Result<()> {
    validate_not_empty(high)?;
    if low.len() != high.len() || close.len() != high.len() {
        return Err(Error::ShapeMismatch {
            description: format!(
                "tr inputs must have the same length: high={}, low={}, close={}",
                high.len(),
                low.len(),
                close.len()
            ),
        });
    }
    Ok(())
}

/// Computes TR into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::ShapeMismatch` if `high`, `low` and `close` differ in length
/// - `Error::BufferTooSmall` if `output.len() < high.len()`
#[doc(alias = "TR")]
pub fn tr_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    output: &mut [T],
) -> Result<()> {
    validate_hlc(high, low, close)?;
    validate_output_len(output.len(), high.len(), "tr")?;

    output[0] = T::nan();
    for i in 1..high.len() {
        output[i] = true_range_bar(high[i], low[i], close[i - 1]);
    }

    Ok(())
}

/// Computes the True Range of a high/low/close series.
///
/// # Errors
///
/// See [`tr_into`].
#[doc(alias = "TR")]
pub fn tr<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); high.len()];
    tr_into(high, low, close, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_tr_lookback() {
        assert_eq!(tr_lookback(), 1);
    }

    #[test]
    fn test_tr_picks_largest_component() {
        // range dominates
        let r = true_range_bar(12.0_f64, 8.0, 10.0);
        assert!((r - 4.0).abs() < 1e-10);
        // gap up dominates
        let r = true_range_bar(15.0_f64, 14.0, 10.0);
        assert!((r - 5.0).abs() < 1e-10);
        // gap down dominates
        let r = true_range_bar(7.0_f64, 6.0, 10.0);
        assert!((r - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_tr_nan_propagates() {
        assert!(true_range_bar(f64::NAN, 1.0, 2.0).is_nan());
        assert!(true_range_bar(3.0, 1.0, f64::NAN).is_nan());

        let high = vec![10.0_f64, 11.0, 12.0, 13.0];
        let low = vec![9.0_f64, f64::NAN, 11.0, 12.0];
        let close = vec![9.5_f64, 10.5, 11.5, 12.5];
        let result = tr(&high, &low, &close).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!((result[2] - 1.5).abs() < 1e-10);
        assert!((result[3] - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_tr_non_negative() {
        let high = vec![10.0_f64, 10.5, 9.0, 12.0, 11.0];
        let low = vec![9.0_f64, 9.5, 8.0, 10.0, 10.0];
        let close = vec![9.5_f64, 10.0, 8.5, 11.0, 10.5];
        let result = tr(&high, &low, &close).unwrap();
        for value in &result[1..] {
            assert!(*value >= 0.0);
        }
    }

    #[test]
    fn test_tr_errors() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(tr(&empty, &empty, &empty), Err(Error::EmptyInput)));

        let result = tr(&[1.0_f64, 2.0], &[1.0], &[1.0, 2.0]);
        match result {
            Err(Error::ShapeMismatch { description }) => {
                assert!(description.contains("low=1"));
            }
            other => panic!("Expected ShapeMismatch, got {other:?}"),
        }

        let mut small = vec![0.0_f64; 1];
        assert!(matches!(
            tr_into(&[1.0_f64, 2.0], &[1.0, 2.0], &[1.0, 2.0], &mut small),
            Err(Error::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn test_tr_single_bar() {
        let result = tr(&[2.0_f64], &[1.0], &[1.5]).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].is_nan());
    }
}
