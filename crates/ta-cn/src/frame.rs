//! Column-major frames of equal-length series.
//!
//! A [`SeriesFrame`] holds several series side by side, one column per
//! instrument or field, with time running down the rows. Indicators are
//! applied column by column through [`SeriesFrame::map_columns`], so a frame
//! of closes for many symbols can be scanned in one call.
//!
//! Tabular input comes in either orientation: [`SeriesFrame::from_columns`]
//! for column lists and [`SeriesFrame::from_rows`] for row records. Column
//! order is preserved and rows are never reordered.
//!
//! # Example
//!
//! ```
//! use ta_cn::frame::SeriesFrame;
//! use ta_cn::indicators::{barslastcount, hhv};
//!
//! let rows = vec![
//!     vec![10.0_f64, 20.0],
//!     vec![11.0, 19.0],
//!     vec![12.0, 21.0],
//! ];
//! let frame = SeriesFrame::from_rows(&rows).unwrap();
//! assert_eq!(frame.n_rows(), 3);
//! assert_eq!(frame.column(1), Some(&[20.0, 19.0, 21.0][..]));
//!
//! let highest = frame.map_columns(|c| hhv(c, 2)).unwrap();
//! assert_eq!(highest.column(1).unwrap()[2], 21.0);
//!
//! let up = SeriesFrame::from_columns(vec![vec![1, 1, 0], vec![0, 1, 1]]).unwrap();
//! let runs = up.map_columns(|c| barslastcount(c)).unwrap();
//! assert_eq!(runs.column(1), Some(&[0_usize, 1, 2][..]));
//! ```

use tracing::debug;

use crate::batch::BatchProcessor;
use crate::error::{Error, Result};

/// A dense, column-major collection of equal-length series.
///
/// With the `serde` feature, deserialized frames pass the same shape checks
/// as [`SeriesFrame::from_columns`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawFrame<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct SeriesFrame<T> {
    columns: Vec<Vec<T>>,
    names: Option<Vec<String>>,
    n_rows: usize,
}

impl<T> SeriesFrame<T> {
    /// Builds a frame from a list of columns.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if there are no columns or the columns have no rows
    /// - `Error::ShapeMismatch` if the columns differ in length
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = check_columns(&columns)?;
        Ok(Self::assemble(columns, None, n_rows))
    }

    /// Builds a frame from `(name, column)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`from_columns`](Self::from_columns).
    pub fn from_named_columns<S: Into<String>>(columns: Vec<(S, Vec<T>)>) -> Result<Self> {
        let (names, columns): (Vec<String>, Vec<Vec<T>>) = columns
            .into_iter()
            .map(|(name, column)| (name.into(), column))
            .unzip();
        let n_rows = check_columns(&columns)?;
        Ok(Self::assemble(columns, Some(names), n_rows))
    }

    fn assemble(columns: Vec<Vec<T>>, names: Option<Vec<String>>, n_rows: usize) -> Self {
        debug!(rows = n_rows, cols = columns.len(), "built frame");
        Self {
            columns,
            names,
            n_rows,
        }
    }

    /// Number of rows (bars) in every column.
    #[must_use]
    pub const fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names, if the frame was built with them.
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// The column at `index`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[T]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// The column called `name`.
    #[must_use]
    pub fn column_by_name(&self, name: &str) -> Option<&[T]> {
        let index = self.names.as_ref()?.iter().position(|n| n == name)?;
        self.column(index)
    }

    /// Iterates over the columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &[T]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Consumes the frame and returns its columns.
    #[must_use]
    pub fn into_columns(self) -> Vec<Vec<T>> {
        self.columns
    }

    /// Applies `indicator_fn` to every column with a default [`BatchProcessor`].
    ///
    /// Column names carry over to the result.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing column.
    pub fn map_columns<U, F>(&self, indicator_fn: F) -> Result<SeriesFrame<U>>
    where
        T: Sync,
        U: Send,
        F: Fn(&[T]) -> Result<Vec<U>> + Send + Sync,
    {
        self.map_columns_with(&BatchProcessor::new(), indicator_fn)
    }

    /// Applies `indicator_fn` to every column using `processor`.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing column, or `Error::ShapeMismatch` if the
    /// function returns columns of differing lengths.
    pub fn map_columns_with<U, F>(
        &self,
        processor: &BatchProcessor,
        indicator_fn: F,
    ) -> Result<SeriesFrame<U>>
    where
        T: Sync,
        U: Send,
        F: Fn(&[T]) -> Result<Vec<U>> + Send + Sync,
    {
        debug!(
            rows = self.n_rows,
            cols = self.columns.len(),
            "mapping frame columns"
        );
        let columns = processor.process(&self.columns, indicator_fn)?;
        let n_rows = check_columns(&columns)?;
        Ok(SeriesFrame {
            columns,
            names: self.names.clone(),
            n_rows,
        })
    }
}

impl<T: Copy> SeriesFrame<T> {
    /// Builds a frame from row records, one entry per column in each row.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if there are no rows or the rows have no fields
    /// - `Error::ShapeMismatch` if the rows differ in width
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(Error::EmptyInput);
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::ShapeMismatch {
                description: format!(
                    "row {index} has {} fields, expected {width}",
                    row.len()
                ),
            });
        }

        let columns = (0..width)
            .map(|col| rows.iter().map(|row| row[col]).collect())
            .collect();
        Ok(Self::assemble(columns, None, rows.len()))
    }

    /// Copies the frame out as row records.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.n_rows)
            .map(|row| self.columns.iter().map(|column| column[row]).collect())
            .collect()
    }
}

/// Unchecked wire form of a [`SeriesFrame`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFrame<T> {
    columns: Vec<Vec<T>>,
    #[serde(default)]
    names: Option<Vec<String>>,
    #[serde(default)]
    n_rows: Option<usize>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawFrame<T>> for SeriesFrame<T> {
    type Error = Error;

    fn try_from(raw: RawFrame<T>) -> Result<Self> {
        let n_rows = check_columns(&raw.columns)?;
        if let Some(declared) = raw.n_rows.filter(|&declared| declared != n_rows) {
            return Err(Error::ShapeMismatch {
                description: format!("n_rows is {declared}, columns have {n_rows} rows"),
            });
        }
        if let Some(names) = raw.names.as_ref().filter(|n| n.len() != raw.columns.len()) {
            return Err(Error::ShapeMismatch {
                description: format!(
                    "{} names for {} columns",
                    names.len(),
                    raw.columns.len()
                ),
            });
        }
        Ok(Self::assemble(raw.columns, raw.names, n_rows))
    }
}

fn check_columns<T>(columns: &[Vec<T>]) -> Result<usize> {
    let n_rows = columns.first().map_or(0, Vec::len);
    if n_rows == 0 {
        return Err(Error::EmptyInput);
    }
    if let Some((index, column)) = columns
        .iter()
        .enumerate()
        .find(|(_, c)| c.len() != n_rows)
    {
        return Err(Error::ShapeMismatch {
            description: format!(
                "column {index} has {} rows, expected {n_rows}",
                column.len()
            ),
        });
    }
    Ok(n_rows)
}
