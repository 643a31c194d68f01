//! Operator strategy for a [`FenwickTree`](crate::FenwickTree).
//!
//! An operator is a pair of plain function pointers: an associative
//! `combine` and an optional `inverse`. Both must be pure (deterministic, no
//! side effects); neither property can be checked by the type system.
//!
//! `combine(a, b)` aggregates `a` followed by `b`. Construction, prefix
//! queries and `append` keep that left-to-right order, so they are exact for
//! associative operators that do not commute (string concatenation, matrix
//! products, ..). `update` and `set` fold their delta into every aggregate
//! that covers the position, which is only exact when `combine` commutes.
//!
//! `inverse(total, prefix)` must undo a left-hand contribution:
//! `inverse(combine(a, b), a) == b`.

use std::cmp;
use std::fmt;
use std::ops::{Add, BitXor, Div, Mul, Sub};

use crate::error::{FenwickError, Result};

pub type BinaryFn<T> = fn(&T, &T) -> T;

pub struct Operator<T> {
    combine: BinaryFn<T>,
    inverse: Option<BinaryFn<T>>,
}

impl<T> Operator<T> {
    /// Associative operator without an inverse.
    ///
    /// Trees built with it can be queried, appended to and updated, but
    /// every operation that has to undo an aggregation fails with
    /// [`FenwickError::MissingInverse`].
    pub const fn new(combine: BinaryFn<T>) -> Self {
        Self {
            combine,
            inverse: None,
        }
    }

    pub const fn with_inverse(combine: BinaryFn<T>, inverse: BinaryFn<T>) -> Self {
        Self {
            combine,
            inverse: Some(inverse),
        }
    }

    #[inline]
    pub fn has_inverse(&self) -> bool {
        self.inverse.is_some()
    }

    #[inline(always)]
    pub fn combine(&self, a: &T, b: &T) -> T {
        (self.combine)(a, b)
    }

    pub fn inverse(&self, total: &T, prefix: &T) -> Result<T> {
        Ok((self.inverse_fn()?)(total, prefix))
    }

    #[inline]
    pub(crate) fn combine_fn(&self) -> BinaryFn<T> {
        self.combine
    }

    #[inline]
    pub(crate) fn inverse_fn(&self) -> Result<BinaryFn<T>> {
        self.inverse.ok_or(FenwickError::MissingInverse)
    }
}

impl<T: Clone + Add<Output = T> + Sub<Output = T>> Operator<T> {
    /// `+` with `-` as inverse.
    pub fn additive() -> Self {
        Self::with_inverse(add::<T>, sub::<T>)
    }
}

impl<T: Clone + Mul<Output = T> + Div<Output = T>> Operator<T> {
    /// `*` with `/` as inverse. Only a true inverse over fields without zero
    /// elements in the data (floats, rationals).
    pub fn multiplicative() -> Self {
        Self::with_inverse(mul::<T>, div::<T>)
    }
}

impl<T: Clone + BitXor<Output = T>> Operator<T> {
    /// `^`, which is its own inverse.
    pub fn xor() -> Self {
        Self::with_inverse(xor::<T>, xor::<T>)
    }
}

impl<T: Clone + Ord> Operator<T> {
    pub fn min() -> Self {
        Self::new(min::<T>)
    }

    pub fn max() -> Self {
        Self::new(max::<T>)
    }
}

impl<T> Clone for Operator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Operator<T> {}

impl<T> fmt::Debug for Operator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("invertible", &self.has_inverse())
            .finish()
    }
}

fn add<T: Clone + Add<Output = T>>(a: &T, b: &T) -> T {
    a.clone() + b.clone()
}

fn sub<T: Clone + Sub<Output = T>>(a: &T, b: &T) -> T {
    a.clone() - b.clone()
}

fn mul<T: Clone + Mul<Output = T>>(a: &T, b: &T) -> T {
    a.clone() * b.clone()
}

fn div<T: Clone + Div<Output = T>>(a: &T, b: &T) -> T {
    a.clone() / b.clone()
}

fn xor<T: Clone + BitXor<Output = T>>(a: &T, b: &T) -> T {
    a.clone() ^ b.clone()
}

fn min<T: Clone + Ord>(a: &T, b: &T) -> T {
    cmp::min(a, b).clone()
}

fn max<T: Clone + Ord>(a: &T, b: &T) -> T {
    cmp::max(a, b).clone()
}
