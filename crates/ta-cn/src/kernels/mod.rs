//! Rolling-window primitives.
//!
//! These are the aggregate kernels the thin indicator wrappers delegate to.
//!
//! # Kernels
//!
//! - [`rolling_extrema`]: monotonic deque for O(n) rolling max/min and the
//!   offset of the extremum inside the window
//! - [`rolling_sum`]: running-sum accumulator with evict-on-slide for rolling
//!   sum and mean, plus the cumulative sum
//!
//! Both follow the same NaN policy: any NaN inside a window makes that
//! window's output NaN (or `None` for offsets).

pub mod rolling_extrema;
pub mod rolling_sum;

pub use rolling_extrema::{
    rolling_argextremum_into, rolling_argmax, rolling_argmin, rolling_extremum_into,
    rolling_extremum_naive, rolling_max, rolling_max_into, rolling_min, rolling_min_into,
    Extremum, MonotonicDeque,
};
pub use rolling_sum::{
    cumsum, cumsum_into, rolling_mean, rolling_mean_into, rolling_sum, rolling_sum_into,
    RollingSum,
};
