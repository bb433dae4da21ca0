//! Error type for the crate's single fallible entry point.

/// Errors returned while constructing a [`crate::Terminal`].
///
/// Every other public method is total over its inputs (spec §7): there are no
/// user-facing errors once a `Terminal` exists.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OzTermError {
    /// `rows` or `cols` was zero; a terminal needs at least one row and column.
    #[error("invalid terminal dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}
