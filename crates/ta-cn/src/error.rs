//! Error types for ta-cn.
//!
//! Every failure in this crate is an input-validation failure. Checks run
//! before any scan starts, so a returned error never leaves a half-written
//! output behind.

use thiserror::Error;

/// The main error type for ta-cn operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input data series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The window length is invalid for the requested operation.
    ///
    /// Returned when a positive window is required and zero was given.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// The input data series is shorter than the requested window.
    #[error("{indicator}: insufficient data, required {required} elements, got {actual}")]
    InsufficientData {
        /// Name of the indicator that rejected the input.
        indicator: &'static str,
        /// The number of data points required.
        required: usize,
        /// The number of data points provided.
        actual: usize,
    },

    /// Inputs that must share a shape do not.
    ///
    /// Covers multi-series functions such as TR and ragged tabular input
    /// handed to [`SeriesFrame`](crate::frame::SeriesFrame).
    #[error("shape mismatch: {description}")]
    ShapeMismatch {
        /// Human-readable description of the mismatch.
        description: String,
    },

    /// A caller-supplied output buffer is shorter than the input.
    #[error("{indicator}: output buffer too small, required {required} elements, got {actual}")]
    BufferTooSmall {
        /// Name of the indicator that rejected the buffer.
        indicator: &'static str,
        /// The number of elements required.
        required: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the ta-cn Error type.
pub type Result<T> = std::result::Result<T, Error>;
