//! Core traits for ta-cn numeric operations.
//!
//! Two element traits drive the whole crate:
//!
//! - [`SeriesElement`]: floating-point series values (`f32`, `f64`), used by
//!   the windowed aggregates, shifts and true range.
//! - [`ConditionElement`]: anything that can be read as a truth value by the
//!   nonzero test, used by the scan functions (`barslast`, `filter`, ...).
//!
//! The module also holds the shared input validation helpers.
//!
//! # Example
//!
//! ```
//! use ta_cn::traits::{ConditionElement, SeriesElement};
//!
//! assert!(1.5_f64.is_true());
//! assert!(!0.0_f64.is_true());
//! assert!(true.is_true());
//! assert!(!0_i32.is_true());
//!
//! let five: f64 = SeriesElement::from_usize(5).unwrap();
//! assert!((five - 5.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for floating-point types that can be used as series elements.
///
/// Blanket-implemented for every `num_traits::Float` that is also
/// `Send + Sync`, which in practice means `f32` and `f64`.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// A value that can be interpreted as a condition by the nonzero test.
///
/// `is_true` is `value != 0`. For floating-point values NaN compares unequal
/// to zero and is therefore true, the same as a truthiness check on a raw
/// float. `cleared` is the value FILTER writes over suppressed bars.
pub trait ConditionElement: Copy + Send + Sync + 'static {
    /// Returns `true` when the value is nonzero.
    fn is_true(self) -> bool;

    /// The zero value of this type.
    fn cleared() -> Self;
}

impl ConditionElement for bool {
    #[inline]
    fn is_true(self) -> bool {
        self
    }

    #[inline]
    fn cleared() -> Self {
        false
    }
}

macro_rules! impl_condition_float {
    ($($t:ty),*) => {$(
        impl ConditionElement for $t {
            #[inline]
            #[allow(clippy::float_cmp)]
            fn is_true(self) -> bool {
                self != 0.0
            }

            #[inline]
            fn cleared() -> Self {
                0.0
            }
        }
    )*};
}

macro_rules! impl_condition_int {
    ($($t:ty),*) => {$(
        impl ConditionElement for $t {
            #[inline]
            fn is_true(self) -> bool {
                self != 0
            }

            #[inline]
            fn cleared() -> Self {
                0
            }
        }
    )*};
}

impl_condition_float!(f32, f64);
impl_condition_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Validates that a window length is positive.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a series is not empty.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the series is empty.
#[inline]
pub const fn validate_not_empty<T>(data: &[T]) -> Result<()> {
    if data.is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(())
    }
}

/// Validates the input of a trailing-window aggregate.
///
/// Checks, in order:
/// 1. the period is non-zero
/// 2. the data is not empty
/// 3. the data has at least `period` elements
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if data length is less than the period
#[inline]
pub fn validate_window_input<T>(data: &[T], period: usize, indicator: &'static str) -> Result<()> {
    validate_period(period)?;
    validate_not_empty(data)?;
    if data.len() < period {
        return Err(Error::InsufficientData {
            indicator,
            required: period,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Validates that an output buffer can hold `required` elements.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output_len < required`.
#[inline]
pub const fn validate_output_len(
    output_len: usize,
    required: usize,
    indicator: &'static str,
) -> Result<()> {
    if output_len < required {
        Err(Error::BufferTooSmall {
            indicator,
            required,
            actual: output_len,
        })
    } else {
        Ok(())
    }
}
