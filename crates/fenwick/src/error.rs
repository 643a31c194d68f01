use thiserror::Error;

/// Errors raised by [`FenwickTree`](crate::FenwickTree) operations.
///
/// Every operation validates its inputs before touching storage, so an `Err`
/// always leaves the tree exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenwickError {
    /// The index, after adding `len` to a negative value, is still negative
    /// or not below `len` (this includes every index into an empty tree).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// The operation has to undo an aggregation but the operator was built
    /// without an inverse.
    #[error("operator has no inverse defined")]
    MissingInverse,
    /// `range_sum` was called with `end < start`.
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange { start: usize, end: usize },
    /// `index_of` / `remove` did not find the value.
    #[error("value not found")]
    ValueNotFound,
}

pub type Result<T> = std::result::Result<T, FenwickError>;
