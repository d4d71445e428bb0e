//! Applying one indicator to many independent series.
//!
//! Each series is scanned on its own; no state crosses from one series to the
//! next. With the `parallel` feature enabled the series are spread over the
//! Rayon thread pool once the batch is large enough, otherwise they run one
//! after another on the calling thread. Results come back in input order.
//!
//! ```toml
//! [dependencies]
//! ta-cn = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use ta_cn::batch::BatchProcessor;
//! use ta_cn::indicators::{barslast, hhv};
//!
//! let closes = vec![
//!     vec![1.0_f64, 2.0, 3.0, 4.0, 5.0],
//!     vec![5.0, 4.0, 3.0, 2.0, 1.0],
//! ];
//! let highs = BatchProcessor::new().process(&closes, |s| hhv(s, 3)).unwrap();
//! assert_eq!(highs[1][2], 5.0);
//!
//! let signals = vec![vec![true, false, false], vec![false, false, true]];
//! let since = BatchProcessor::new().process(&signals, |s| barslast(s)).unwrap();
//! assert_eq!(since, vec![vec![0, 1, 2], vec![0, 1, 0]]);
//! ```

use tracing::debug;

use crate::error::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of series below which a batch stays on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Runs an indicator over a batch of series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProcessor {
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a processor with the default parallel threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum batch size that is processed in parallel.
    ///
    /// Has no effect without the `parallel` feature.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Returns `true` if a batch of `batch_len` series would be split across
    /// threads.
    #[must_use]
    pub const fn runs_parallel(&self, batch_len: usize) -> bool {
        cfg!(feature = "parallel") && batch_len >= self.min_parallel_threshold
    }

    /// Applies `indicator_fn` to every series in `series`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`, in input order
    /// when sequential. In parallel mode any one of the failing series'
    /// errors is returned.
    pub fn process<T, F, R>(&self, series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
    where
        T: Sync,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        self.run(series.len(), |i| indicator_fn(&series[i]))
    }

    /// Like [`process`](Self::process), over borrowed slices.
    ///
    /// # Errors
    ///
    /// See [`process`](Self::process).
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], indicator_fn: F) -> Result<Vec<R>>
    where
        T: Sync,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        self.run(series.len(), |i| indicator_fn(series[i]))
    }

    /// Applies a high/low/close indicator such as [`tr`](crate::indicators::tr)
    /// to every `(high, low, close)` triple.
    ///
    /// # Errors
    ///
    /// See [`process`](Self::process).
    pub fn process_hlc<T, F, R>(
        &self,
        datasets: &[(Vec<T>, Vec<T>, Vec<T>)],
        indicator_fn: F,
    ) -> Result<Vec<R>>
    where
        T: Sync,
        F: Fn(&[T], &[T], &[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        self.run(datasets.len(), |i| {
            let (high, low, close) = &datasets[i];
            indicator_fn(high, low, close)
        })
    }

    fn run<F, R>(&self, batch_len: usize, job: F) -> Result<Vec<R>>
    where
        F: Fn(usize) -> Result<R> + Send + Sync,
        R: Send,
    {
        let parallel = self.runs_parallel(batch_len);
        debug!(batch_len, parallel, "processing batch");

        #[cfg(feature = "parallel")]
        if parallel {
            return (0..batch_len).into_par_iter().map(job).collect();
        }

        (0..batch_len).map(job).collect()
    }
}

/// Shorthand for `BatchProcessor::new().process(series, indicator_fn)`.
///
/// # Errors
///
/// See [`BatchProcessor::process`].
pub fn process_batch<T, F, R>(series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
where
    T: Sync,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, indicator_fn)
}

/// Shorthand for `BatchProcessor::new().process_hlc(datasets, indicator_fn)`.
///
/// # Errors
///
/// See [`BatchProcessor::process`].
pub fn process_hlc_batch<T, F, R>(
    datasets: &[(Vec<T>, Vec<T>, Vec<T>)],
    indicator_fn: F,
) -> Result<Vec<R>>
where
    T: Sync,
    F: Fn(&[T], &[T], &[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process_hlc(datasets, indicator_fn)
}
