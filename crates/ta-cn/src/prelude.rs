//! Commonly used types and functions in one import.
//!
//! ```
//! use ta_cn::prelude::*;
//!
//! let close = vec![1.0_f64, 3.0, 2.0, 5.0, 4.0];
//! let high = hhv(&close, 3).unwrap();
//! let offset = hhvbars(&close, 3).unwrap();
//! assert_eq!(high[4], 5.0);
//! assert_eq!(offset[4], Some(1));
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - The element traits [`SeriesElement`] and [`ConditionElement`]
//! - Every indicator function with its `_into` variant and lookback helper
//! - The configuration structs ([`Hhv`], [`Filter`], ...)
//! - [`SeriesFrame`] and [`BatchProcessor`] for column-wise work

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{ConditionElement, SeriesElement};

// Condition scans
pub use crate::indicators::{
    barslast, barslast_into, barslastcount, barslastcount_into, barssincen, barssincen_into,
    filter, filter_in_place, filter_into,
};

// Window aggregates, shifts and ranges
pub use crate::indicators::{
    const_, count, diff, diff_into, hhv, hhv_into, hhvbars, hhvbars_into, llv, llv_into,
    llvbars, llvbars_into, ma, ma_into, ref_, ref_into, sum, sum_into, tr, tr_into,
};

// Configuration types
pub use crate::indicators::{BarsSinceN, Diff, Filter, Hhv, Llv, Ma, Ref, Sum};

// Lookback functions
pub use crate::indicators::{
    diff_lookback, hhv_lookback, hhv_min_len, llv_lookback, llv_min_len, ma_lookback,
    ma_min_len, ref_lookback, sum_lookback, sum_min_len, tr_lookback,
};

// Columns and batches
pub use crate::batch::BatchProcessor;
pub use crate::frame::SeriesFrame;
