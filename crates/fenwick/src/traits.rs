use std::ops::RangeBounds;

use crate::error::Result;
use crate::tree::FenwickTree;

/// Mutable ordered sequence whose reads are prefix aggregates.
///
/// Indices are `isize`; negative values count from the end.
pub trait OrderedContainer {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate of the values at `[0, index]`.
    fn get(&self, index: isize) -> Result<Self::Item>;

    /// Aggregate of the values at `(start, end]`.
    fn range_sum(&self, start: isize, end: isize) -> Result<Self::Item>;

    /// [`range_sum`](Self::range_sum) from the first to the last position.
    fn range_sum_all(&self) -> Result<Self::Item> {
        self.range_sum(0, -1)
    }

    /// Replaces the value at `index`. Tree-backed containers are exact only
    /// for commutative operators.
    fn set(&mut self, index: isize, value: Self::Item) -> Result<()>;

    /// Combines `value` into the value at `index`.
    fn update(&mut self, index: isize, value: Self::Item) -> Result<()>;

    fn append(&mut self, value: Self::Item);

    fn insert(&mut self, index: isize, value: Self::Item) -> Result<()>;

    fn pop_at(&mut self, index: isize) -> Result<Self::Item>;

    fn pop(&mut self) -> Result<Self::Item> {
        self.pop_at(-1)
    }

    fn delete(&mut self, index: isize) -> Result<()> {
        self.pop_at(index).map(drop)
    }

    /// First match inside `window`, bounded like a sequence slice.
    fn index_of<R: RangeBounds<isize>>(&self, value: &Self::Item, window: R) -> Result<usize>;

    fn remove(&mut self, value: &Self::Item) -> Result<()> {
        let index = self.index_of(value, ..)?;
        self.delete(index as isize)
    }

    /// The plain values, in order.
    fn original_layout(&self) -> Result<Vec<Self::Item>>;
}

impl<T: Clone + PartialEq> OrderedContainer for FenwickTree<T> {
    type Item = T;

    fn len(&self) -> usize {
        FenwickTree::len(self)
    }

    fn get(&self, index: isize) -> Result<T> {
        FenwickTree::get(self, index)
    }

    fn range_sum(&self, start: isize, end: isize) -> Result<T> {
        FenwickTree::range_sum(self, start, end)
    }

    fn set(&mut self, index: isize, value: T) -> Result<()> {
        FenwickTree::set(self, index, value)
    }

    fn update(&mut self, index: isize, value: T) -> Result<()> {
        FenwickTree::update(self, index, value)
    }

    fn append(&mut self, value: T) {
        FenwickTree::append(self, value)
    }

    fn insert(&mut self, index: isize, value: T) -> Result<()> {
        FenwickTree::insert(self, index, value)
    }

    fn pop_at(&mut self, index: isize) -> Result<T> {
        FenwickTree::pop_at(self, index)
    }

    fn pop(&mut self) -> Result<T> {
        FenwickTree::pop(self)
    }

    fn index_of<R: RangeBounds<isize>>(&self, value: &T, window: R) -> Result<usize> {
        FenwickTree::index_of(self, value, window)
    }

    fn remove(&mut self, value: &T) -> Result<()> {
        FenwickTree::remove(self, value)
    }

    fn original_layout(&self) -> Result<Vec<T>> {
        FenwickTree::original_layout(self)
    }
}
