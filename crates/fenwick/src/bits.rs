//! Index bit walks shared by every tree operation.
//!
//! All walks are plain iterators over `usize` positions. They are pure
//! functions of their start arguments, so a fresh walk can be built whenever
//! one is needed.

use std::iter::FusedIterator;

/// Value of the least significant set bit of `i` (`0` for `i == 0`).
#[inline(always)]
pub fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Clears the lowest set bit on each step, yielding `i` first.
///
/// Walking a 1-based position down to zero visits every block that together
/// covers the prefix ending at that position.
#[derive(Clone, Debug)]
pub struct ConsumeOneBits {
    index: usize,
}

impl ConsumeOneBits {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Iterator for ConsumeOneBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.index == 0 {
            return None;
        }
        let current = self.index;
        self.index &= self.index - 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.index.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ConsumeOneBits {}
impl FusedIterator for ConsumeOneBits {}

/// Sets the lowest zero bit on each step while below `bound`, yielding the
/// start index first.
///
/// On 0-based positions this is the upward walk through every block whose
/// run contains the start position.
#[derive(Clone, Debug)]
pub struct FlipZeroBits {
    index: usize,
    bound: usize,
}

impl FlipZeroBits {
    #[inline]
    pub fn new(index: usize, bound: usize) -> Self {
        Self { index, bound }
    }
}

impl Iterator for FlipZeroBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.index >= self.bound {
            return None;
        }
        let current = self.index;
        // `usize::MAX` has no zero bit left; park past the bound.
        self.index = match current.checked_add(1) {
            Some(next) => current | next,
            None => self.bound,
        };
        Some(current)
    }
}

impl FusedIterator for FlipZeroBits {}

/// Powers of two that divide `index`, i.e. one per trailing zero bit:
/// `1, 2, 4, ..` up to `lowbit(index) / 2`.
///
/// These are the sizes (and backward distances) of the nested blocks that
/// sit directly to the left of a 1-based position inside its own run. Odd
/// positions and zero yield nothing. Reversing the walk visits the blocks
/// left to right.
#[derive(Clone, Debug)]
pub struct PowersOfTwo {
    low: u32,
    high: u32,
}

impl PowersOfTwo {
    #[inline]
    pub fn new(index: usize) -> Self {
        let high = if index == 0 { 0 } else { index.trailing_zeros() };
        Self { low: 0, high }
    }
}

impl Iterator for PowersOfTwo {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.low >= self.high {
            return None;
        }
        let step = 1_usize << self.low;
        self.low += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.high - self.low) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for PowersOfTwo {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        if self.low >= self.high {
            return None;
        }
        self.high -= 1;
        Some(1_usize << self.high)
    }
}

impl ExactSizeIterator for PowersOfTwo {}
impl FusedIterator for PowersOfTwo {}
