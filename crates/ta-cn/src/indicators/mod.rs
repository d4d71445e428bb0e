//! Indicator functions.
//!
//! Every function takes one or more input series plus scalar parameters and
//! returns an output of the same length as its input.
//!
//! # Indicator Categories
//!
//! ## Condition Scans
//!
//! Single forward passes over a condition series (nonzero is true):
//!
//! - [`barslast`] - bars since the condition was last true
//! - [`barslastcount`] - length of the current run of true bars
//! - [`barssincen`] - offset of the first true bar inside a trailing window
//! - [`filter`] - zero the bars following each signal
//!
//! ## Window Aggregates
//!
//! - [`hhv`] / [`llv`] - highest and lowest value over a trailing window
//! - [`hhvbars`] / [`llvbars`] - offset of that extremum from the window start
//! - [`sum`] - trailing sum, or cumulative sum for period 0
//! - [`count`] - number of true bars in a window (0/1-encoded condition)
//! - [`ma`] - simple moving average
//!
//! ## Shifts and Ranges
//!
//! - [`ref_`] - shift by `k` bars (negative looks ahead)
//! - [`diff`] - difference against the bar `k` positions away
//! - [`const_`] - broadcast the last value
//! - [`tr`] - true range of a high/low/close series
//!
//! # Example
//!
//! ```
//! use ta_cn::indicators::{barslast, hhv, ma};
//!
//! let close = vec![10.0_f64, 10.5, 10.2, 10.8, 11.0, 10.9];
//!
//! let highest = hhv(&close, 3).unwrap();
//! assert!((highest[5] - 11.0).abs() < 1e-10);
//!
//! let average = ma(&close, 3).unwrap();
//! assert!(average[1].is_nan());
//!
//! let new_high: Vec<bool> = close.iter().zip(&highest).map(|(c, h)| c == h).collect();
//! let since = barslast(&new_high).unwrap();
//! assert_eq!(since[5], 1);
//! ```
//!
//! # NaN Handling
//!
//! Window aggregates emit NaN during their warm-up (`period - 1` bars) and for
//! any window that contains a NaN. The scans read NaN as a true condition.
//!
//! # Error Handling
//!
//! Functions return [`Result<T, Error>`](crate::error::Error) for:
//!
//! - Empty input ([`EmptyInput`](crate::error::Error::EmptyInput))
//! - Zero windows where a positive one is required
//!   ([`InvalidPeriod`](crate::error::Error::InvalidPeriod))
//! - Windows longer than the series
//!   ([`InsufficientData`](crate::error::Error::InsufficientData))
//! - Multi-series inputs of different lengths
//!   ([`ShapeMismatch`](crate::error::Error::ShapeMismatch))

pub mod bars;
pub mod extrema;
pub mod filter;
pub mod shift;
pub mod sum;
pub mod true_range;

pub use bars::{
    barslast, barslast_into, barslastcount, barslastcount_into, barssincen, barssincen_into,
    BarsSinceN, DEFAULT_BARSSINCEN_PERIOD,
};
pub use extrema::{
    hhv, hhv_into, hhv_lookback, hhv_min_len, hhvbars, hhvbars_into, llv, llv_into,
    llv_lookback, llv_min_len, llvbars, llvbars_into, Hhv, Llv, DEFAULT_EXTREMA_PERIOD,
};
pub use filter::{filter, filter_in_place, filter_into, Filter, DEFAULT_FILTER_PERIOD};
pub use shift::{
    const_, diff, diff_into, diff_lookback, ref_, ref_into, ref_lookback, Diff, Ref,
    DEFAULT_SHIFT,
};
pub use sum::{
    count, ma, ma_into, ma_lookback, ma_min_len, sum, sum_into, sum_lookback, sum_min_len, Ma,
    Sum, DEFAULT_SUM_PERIOD,
};
pub use true_range::{tr, tr_into, tr_lookback};
