//! Generic Fenwick tree (binary indexed tree).
//!
//! A [`FenwickTree`] stores a sequence in an implicit aggregation layout so
//! that prefix reductions under a user supplied associative [`Operator`] cost
//! `O(log n)`, while the sequence can still be updated, appended to and
//! edited by position.
//!
//! ```
//! use fenwick::{FenwickTree, Operator};
//!
//! let mut tree = FenwickTree::from_values([1_i64, 2, 3, 4, 5], Operator::additive());
//! assert_eq!(tree.storage(), &[1, 3, 3, 10, 5]);
//! assert_eq!(tree.get(4), Ok(15));
//!
//! tree.set(0, 10)?;
//! assert_eq!(tree.original_layout()?, vec![10, 2, 3, 4, 5]);
//! # Ok::<(), fenwick::FenwickError>(())
//! ```
//!
//! The tree is a plain single-owner value: share it across threads behind a
//! lock, every operation either reads or rewrites the layout.

pub mod bits;
mod error;
mod iter;
pub mod layout;
mod operator;
mod traits;
mod tree;

pub use error::{FenwickError, Result};
pub use iter::PrefixSums;
pub use operator::{BinaryFn, Operator};
pub use traits::OrderedContainer;
pub use tree::FenwickTree;
