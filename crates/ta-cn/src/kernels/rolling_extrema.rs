//! Rolling extrema using a monotonic deque for O(n) rolling max/min.
//!
//! This module provides the trailing-window maximum and minimum primitives
//! behind HHV/LLV, together with the position of the extremum inside the
//! window behind HHVBARS/LLVBARS.
//!
//! # Algorithm
//!
//! The monotonic deque keeps a queue of indices such that:
//! - for rolling max, the values at those indices are strictly decreasing
//! - for rolling min, the values at those indices are strictly increasing
//!
//! The front of the deque is therefore always the extremum of the current
//! window. Equal values evict the older index, so ties resolve to the most
//! recent occurrence.
//!
//! # NaN Policy
//!
//! A window that contains any NaN produces NaN (or `None` for the position
//! kernels). NaN values are never pushed into the deque; a separate counter
//! tracks how many NaNs are inside the current window.
//!
//! # Complexity
//!
//! - Time: O(n) for n elements (amortized O(1) per element)
//! - Space: O(k) for the deque, where k is the period
//!
//! # Example
//!
//! ```
//! use ta_cn::kernels::rolling_extrema::{rolling_argmax, rolling_max, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max_result = rolling_max(&data, 3).unwrap();
//! assert!((max_result[2] - 4.0).abs() < 1e-10); // max of [3, 1, 4]
//! assert!((max_result[5] - 9.0).abs() < 1e-10); // max of [1, 5, 9]
//!
//! let min_result = rolling_min(&data, 3).unwrap();
//! assert!((min_result[5] - 1.0).abs() < 1e-10); // min of [1, 5, 9]
//!
//! // 9.0 sits at offset 2 of the window [1, 5, 9]
//! let pos = rolling_argmax(&data, 3).unwrap();
//! assert_eq!(pos[5], Some(2));
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::Result;
use crate::traits::{validate_output_len, validate_window_input, SeriesElement};

/// Which extremum a kernel tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Rolling maximum.
    Max,
    /// Rolling minimum.
    Min,
}

/// A monotonic deque for efficiently tracking rolling extrema.
///
/// The deque stores indices into the data slice. It never holds the index
/// of a NaN value.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    deque: VecDeque<usize>,
    period: usize,
    _phantom: PhantomData<T>,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates a new monotonic deque with the specified window size.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_cn::kernels::rolling_extrema::MonotonicDeque;
    ///
    /// let deque: MonotonicDeque<f64> = MonotonicDeque::new(5);
    /// assert!(deque.is_empty());
    /// ```
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
            _phantom: PhantomData,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the number of indices currently in the deque.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Clears the deque.
    #[inline]
    pub fn clear(&mut self) {
        self.deque.clear();
    }

    /// Pushes `data[index]` for the given extremum kind.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push(&mut self, kind: Extremum, index: usize, data: &[T]) {
        match kind {
            Extremum::Max => self.push_max(index, data),
            Extremum::Min => self.push_min(index, data),
        }
    }

    /// Pushes a new value for computing rolling maximum.
    ///
    /// Keeps the values at the stored indices strictly decreasing, so the
    /// front always holds the index of the window maximum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_max(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back_idx) = self.deque.back() {
                if value >= data[back_idx] {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }
        self.remove_expired(index);
    }

    /// Pushes a new value for computing rolling minimum.
    ///
    /// Keeps the values at the stored indices strictly increasing, so the
    /// front always holds the index of the window minimum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_min(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back_idx) = self.deque.back() {
                if value <= data[back_idx] {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }
        self.remove_expired(index);
    }

    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        if current_index + 1 < self.period {
            return;
        }
        let window_start = current_index + 1 - self.period;
        while let Some(&front_idx) = self.deque.front() {
            if front_idx < window_start {
                self.deque.pop_front();
            } else {
                break;
            }
        }
    }

    /// Returns the index of the current extremum value.
    ///
    /// Returns `None` if the deque is empty.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current extremum value, or NaN if the deque is empty.
    #[inline]
    pub fn get_extremum(&self, data: &[T]) -> T {
        self.front_index().map_or_else(T::nan, |idx| data[idx])
    }
}

/// Drives a monotonic deque over `data` and reports, for every complete
/// window ending at `i`, the index of its extremum (`None` if the window
/// contains a NaN).
fn scan_windows<T, F>(data: &[T], period: usize, kind: Extremum, mut emit: F)
where
    T: SeriesElement,
    F: FnMut(usize, Option<usize>),
{
    let mut deque: MonotonicDeque<T> = MonotonicDeque::new(period);
    let mut nan_in_window = 0_usize;

    for i in 0..data.len() {
        if data[i].is_nan() {
            nan_in_window += 1;
        }
        if i >= period && data[i - period].is_nan() {
            nan_in_window -= 1;
        }

        deque.push(kind, i, data);

        if i + 1 >= period {
            let front = if nan_in_window == 0 {
                deque.front_index()
            } else {
                None
            };
            emit(i, front);
        }
    }
}

/// Computes a rolling extremum value into a pre-allocated output buffer.
///
/// The first `period - 1` outputs are NaN. Returns the number of valid
/// (non-warm-up) positions, `data.len() - period + 1`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data.len() < period`
/// - `Error::BufferTooSmall` if `output.len() < data.len()`
pub fn rolling_extremum_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    kind: Extremum,
    output: &mut [T],
) -> Result<usize> {
    let indicator = match kind {
        Extremum::Max => "rolling_max",
        Extremum::Min => "rolling_min",
    };
    validate_window_input(data, period, indicator)?;
    validate_output_len(output.len(), data.len(), indicator)?;

    for value in output.iter_mut().take(period - 1) {
        *value = T::nan();
    }
    scan_windows(data, period, kind, |i, front| {
        output[i] = front.map_or_else(T::nan, |idx| data[idx]);
    });

    Ok(data.len() - period + 1)
}

/// Computes the position of a rolling extremum into a pre-allocated buffer.
///
/// Each output is the 0-based offset of the extremum from the oldest element
/// of its window, or `None` during warm-up and for windows containing NaN.
///
/// # Errors
///
/// Same as [`rolling_extremum_into`].
pub fn rolling_argextremum_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    kind: Extremum,
    output: &mut [Option<usize>],
) -> Result<usize> {
    let indicator = match kind {
        Extremum::Max => "rolling_argmax",
        Extremum::Min => "rolling_argmin",
    };
    validate_window_input(data, period, indicator)?;
    validate_output_len(output.len(), data.len(), indicator)?;

    for value in output.iter_mut().take(period - 1) {
        *value = None;
    }
    scan_windows(data, period, kind, |i, front| {
        let window_start = i + 1 - period;
        output[i] = front.map(|idx| idx - window_start);
    });

    Ok(data.len() - period + 1)
}

/// Computes the rolling maximum using a monotonic deque.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data.len() < period`
///
/// # Example
///
/// ```
/// use ta_cn::kernels::rolling_extrema::rolling_max;
///
/// let data = vec![1.0_f64, 3.0, 2.0, 5.0, 4.0];
/// let result = rolling_max(&data, 3).unwrap();
///
/// assert!(result[1].is_nan());
/// assert!((result[2] - 3.0).abs() < 1e-10);
/// assert!((result[3] - 5.0).abs() < 1e-10);
/// ```
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rolling_extremum_into(data, period, Extremum::Max, &mut output)?;
    Ok(output)
}

/// Computes the rolling maximum into a pre-allocated output buffer.
///
/// # Errors
///
/// See [`rolling_extremum_into`].
pub fn rolling_max_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    rolling_extremum_into(data, period, Extremum::Max, output)
}

/// Computes the rolling minimum using a monotonic deque.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data.len() < period`
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rolling_extremum_into(data, period, Extremum::Min, &mut output)?;
    Ok(output)
}

/// Computes the rolling minimum into a pre-allocated output buffer.
///
/// # Errors
///
/// See [`rolling_extremum_into`].
pub fn rolling_min_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    rolling_extremum_into(data, period, Extremum::Min, output)
}

/// Offset of the rolling maximum from the start of each window.
///
/// # Errors
///
/// See [`rolling_argextremum_into`].
pub fn rolling_argmax<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<usize>>> {
    let mut output = vec![None; data.len()];
    rolling_argextremum_into(data, period, Extremum::Max, &mut output)?;
    Ok(output)
}

/// Offset of the rolling minimum from the start of each window.
///
/// # Errors
///
/// See [`rolling_argextremum_into`].
pub fn rolling_argmin<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<usize>>> {
    let mut output = vec![None; data.len()];
    rolling_argextremum_into(data, period, Extremum::Min, &mut output)?;
    Ok(output)
}

/// Computes a rolling extremum and its window offset with the naive
/// O(n×k) scan.
///
/// Provided for comparison and testing; use the deque kernels in production.
/// Follows the same NaN and tie policy as the deque kernels.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period == 0`
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data.len() < period`
pub fn rolling_extremum_naive<T: SeriesElement>(
    data: &[T],
    period: usize,
    kind: Extremum,
) -> Result<Vec<Option<(T, usize)>>> {
    validate_window_input(data, period, "rolling_extremum_naive")?;

    let mut result = vec![None; data.len()];
    for (i, out) in result.iter_mut().enumerate().skip(period - 1) {
        let window = &data[i + 1 - period..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mut best = (window[0], 0);
        for (offset, &value) in window.iter().enumerate().skip(1) {
            let better = match kind {
                Extremum::Max => value >= best.0,
                Extremum::Min => value <= best.0,
            };
            if better {
                best = (value, offset);
            }
        }
        *out = Some(best);
    }

    Ok(result)
}
