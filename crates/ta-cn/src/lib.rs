//! ta-cn: bar-counting scans and rolling-window indicators for price series.
//!
//! The crate covers the formula vocabulary common to Chinese charting
//! platforms: condition scans such as BARSLAST and FILTER, and the window
//! aggregates HHV, LLV, SUM, MA, REF and friends they are combined with.
//!
//! # Features
//!
//! - **O(n)**: every function is a single pass; window extrema use a
//!   monotonic deque and window sums a running accumulator
//! - **Generics**: series work with `f32` and `f64`; conditions accept
//!   `bool`, floats and integers
//! - **Columns**: [`frame::SeriesFrame`] applies any function per column,
//!   optionally in parallel (`parallel` feature)
//! - **Typed errors**: invalid windows, empty and mismatched inputs are
//!   reported before any computation starts
//! - **Persistence**: indicator configs and frames serialize with the `serde`
//!   feature; deserialized frames are shape-checked
//!
//! Feature-gated tests only run when the feature is on:
//! `cargo test --all-features`.
//!
//! # Quick Start
//!
//! ```
//! use ta_cn::prelude::*;
//!
//! let close = vec![10.0_f64, 10.4, 10.1, 10.9, 11.2, 11.0, 11.5];
//!
//! // Bars since the close last crossed above its 3-bar average.
//! let average = ma(&close, 3).unwrap();
//! let above: Vec<bool> = close.iter().zip(&average).map(|(c, m)| c > m).collect();
//! let since = barslast(&above).unwrap();
//! assert_eq!(since[6], 0);
//!
//! // Only the first of a cluster of signals survives.
//! let signals = filter(&above, 2).unwrap();
//! assert_eq!(signals, vec![false, false, false, true, false, false, true]);
//! ```
//!
//! # Available Functions
//!
//! ## Condition Scans
//! - [`indicators::barslast()`], [`indicators::barslastcount()`],
//!   [`indicators::barssincen()`], [`indicators::filter()`]
//!
//! ## Window Aggregates
//! - [`indicators::hhv()`], [`indicators::llv()`], [`indicators::hhvbars()`],
//!   [`indicators::llvbars()`], [`indicators::sum()`], [`indicators::count()`],
//!   [`indicators::ma()`]
//!
//! ## Shifts and Ranges
//! - [`indicators::ref_()`], [`indicators::diff()`], [`indicators::const_()`],
//!   [`indicators::tr()`]
//!
//! # Error Handling
//!
//! ```
//! use ta_cn::prelude::*;
//!
//! // Window longer than the series
//! assert!(matches!(hhv(&[1.0_f64, 2.0], 5), Err(Error::InsufficientData { .. })));
//!
//! // Zero window
//! assert!(matches!(barssincen(&[true], 0), Err(Error::InvalidPeriod { .. })));
//!
//! // Empty input
//! let empty: Vec<f64> = vec![];
//! assert!(matches!(barslast(&empty), Err(Error::EmptyInput)));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod frame;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
pub use frame::SeriesFrame;
pub use traits::{ConditionElement, SeriesElement};
pub use utils::{
    approx_eq, approx_eq_relative, count_nan_prefix, count_nans, encode_condition, EPSILON,
    LOOSE_EPSILON,
};
