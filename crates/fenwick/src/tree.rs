use std::fmt;
use std::ops::{Bound, RangeBounds};

use tracing::{debug, trace};

use crate::bits::{ConsumeOneBits, FlipZeroBits, PowersOfTwo};
use crate::error::{FenwickError, Result};
use crate::iter::PrefixSums;
use crate::layout;
use crate::operator::{BinaryFn, Operator};

/// Fenwick tree (binary indexed tree) over an arbitrary associative
/// [`Operator`].
///
/// Indexed operations take `isize` positions with sequence-style negative
/// indexing: `-1` is the last element, `-len` the first.
///
/// | operation | cost | needs inverse |
/// |---|---|---|
/// | [`get`](Self::get), [`update`](Self::update) | `O(log n)` | no |
/// | [`append`](Self::append) | `O(log n)` worst, `O(1)` amortized | no |
/// | [`set`](Self::set), [`range_sum`](Self::range_sum) | `O(log n)` | yes |
/// | [`pop`](Self::pop) | `O(log n)` | when `len` is even |
/// | [`insert`](Self::insert), [`pop_at`](Self::pop_at) | `O(n)` | yes |
pub struct FenwickTree<T> {
    storage: Vec<T>,
    op: Operator<T>,
}

impl<T> FenwickTree<T> {
    pub fn new(op: Operator<T>) -> Self {
        Self {
            storage: Vec::new(),
            op,
        }
    }

    /// Builds the tree from `values` in `O(n)`.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I, op: Operator<T>) -> Self {
        let mut storage = values.into_iter().collect::<Vec<_>>();
        layout::bit_layout(&mut storage, op.combine_fn());
        trace!(len = storage.len(), "built fenwick layout");
        Self { storage, op }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn operator(&self) -> &Operator<T> {
        &self.op
    }

    /// Raw encoded storage: aggregates, not the original values.
    pub fn storage(&self) -> &[T] {
        &self.storage
    }

    /// Counts negative positions from the end, without range checks.
    fn wrap(&self, index: isize) -> isize {
        if index < 0 {
            index.saturating_add(self.len() as isize)
        } else {
            index
        }
    }

    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.len();
        let resolved = self.wrap(index);
        if resolved < 0 || resolved as usize >= len {
            return Err(FenwickError::IndexOutOfRange { index, len });
        }
        Ok(resolved as usize)
    }
}

impl<T: Clone> FenwickTree<T> {
    /// Aggregate of the original values at `[0, index]`.
    pub fn get(&self, index: isize) -> Result<T> {
        let index = self.normalize(index)?;
        Ok(self.prefix(index))
    }

    /// Aggregate of every value, `None` when empty.
    pub fn total(&self) -> Option<T> {
        self.get(-1).ok()
    }

    /// `inverse(get(end), get(start))`: the values in `(start, end]`.
    pub fn range_sum(&self, start: isize, end: isize) -> Result<T> {
        let inverse = self.op.inverse_fn()?;
        let start = self.normalize(start)?;
        let end = self.normalize(end)?;
        if end < start {
            return Err(FenwickError::InvalidRange { start, end });
        }
        Ok(inverse(&self.prefix(end), &self.prefix(start)))
    }

    /// [`range_sum`](Self::range_sum) with the default bounds, first to last
    /// position. The first value is outside the result, like any `start`.
    pub fn range_sum_all(&self) -> Result<T> {
        self.range_sum(0, -1)
    }

    /// Original value at `index`, peeled out of its aggregate.
    pub fn value_at(&self, index: isize) -> Result<T> {
        let index = self.normalize(index)?;
        // Odd 1-based positions hold a raw value.
        if index & 1 == 0 {
            return Ok(self.storage[index].clone());
        }
        let inverse = self.op.inverse_fn()?;
        Ok(self.peel(index, inverse))
    }

    /// Combines `value` into the original value at `index`.
    ///
    /// Exact only for commutative operators. Every block covering `index`
    /// becomes `combine(block, value)`, so `value` lands on the right edge of
    /// blocks that end past `index`. With concatenation, updating position 5
    /// of `"abcdefgh"` with `"Z"` makes `get(7)` return `"abcdefghZ"`; no
    /// error is reported.
    pub fn update(&mut self, index: isize, value: T) -> Result<()> {
        let index = self.normalize(index)?;
        let combine = self.op.combine_fn();
        for i in FlipZeroBits::new(index, self.len()) {
            self.storage[i] = combine(&self.storage[i], &value);
        }
        Ok(())
    }

    /// Replaces the original value at `index` with `value`.
    ///
    /// Exact only for commutative operators. Each covering block strips the
    /// old value with `inverse(block, old)`, which removes a left-hand part,
    /// then appends `value` on the right. An order-sensitive operator leaves
    /// wrong aggregates behind without any error.
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        let inverse = self.op.inverse_fn()?;
        let index = self.normalize(index)?;
        let combine = self.op.combine_fn();
        let old = self.peel(index, inverse);
        for i in FlipZeroBits::new(index, self.len()) {
            let without = inverse(&self.storage[i], &old);
            self.storage[i] = combine(&without, &value);
        }
        Ok(())
    }

    pub fn append(&mut self, value: T) {
        let len = self.len();
        let combine = self.op.combine_fn();
        // The new position closes one nested block per trailing zero bit.
        let mut value = value;
        for step in PowersOfTwo::new(len + 1) {
            value = combine(&self.storage[len - step], &value);
        }
        self.storage.push(value);
    }

    /// Inserts `value` before `index`, rebuilding the whole layout.
    ///
    /// Like a sequence insert, the position is clamped into `[0, len]` after
    /// negative normalization, so out-of-range positions insert at an end.
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        let mut values = self.original_layout()?;
        let len = values.len();
        let position = self.wrap(index).clamp(0, len as isize) as usize;
        debug!(len, index = position, "rebuilding fenwick layout for insert");
        values.insert(position, value);
        self.rebuild(values);
        Ok(())
    }

    /// Removes and returns the last original value.
    pub fn pop(&mut self) -> Result<T> {
        let last = self.normalize(-1)?;
        if last & 1 == 0 {
            return Ok(self.storage.remove(last));
        }
        let inverse = self.op.inverse_fn()?;
        let value = self.peel(last, inverse);
        self.storage.truncate(last);
        Ok(value)
    }

    /// Removes and returns the original value at `index`.
    ///
    /// The last position takes the [`pop`](Self::pop) fast path; any other
    /// position rebuilds the layout in `O(n)`.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let index = self.normalize(index)?;
        if index + 1 == self.len() {
            return self.pop();
        }
        let mut values = self.original_layout()?;
        debug!(len = values.len(), index, "rebuilding fenwick layout for removal");
        let value = values.remove(index);
        self.rebuild(values);
        Ok(value)
    }

    pub fn delete(&mut self, index: isize) -> Result<()> {
        self.pop_at(index).map(drop)
    }

    /// Appends the original values of `other`, never its aggregates.
    pub fn extend_from_tree(&mut self, other: &FenwickTree<T>) -> Result<()> {
        let values = other.original_layout()?;
        debug!(len = self.len(), added = values.len(), "extending from decoded tree");
        self.extend(values);
        Ok(())
    }

    /// Decodes the original values in `O(n)`.
    pub fn original_layout(&self) -> Result<Vec<T>> {
        let inverse = self.op.inverse_fn()?;
        let mut values = self.storage.clone();
        layout::original_layout(&mut values, inverse);
        Ok(values)
    }

    /// Prefix aggregates for every index, front to back.
    pub fn prefix_sums(&self) -> PrefixSums<'_, T> {
        PrefixSums::new(self)
    }

    pub(crate) fn prefix(&self, index: usize) -> T {
        debug_assert!(index < self.len());
        let mut acc = self.storage[index].clone();
        for i in ConsumeOneBits::new((index + 1) & index) {
            acc = self.op.combine(&self.storage[i - 1], &acc);
        }
        acc
    }

    /// Strips the nested blocks to the left of `index` out of its aggregate,
    /// leftmost block first.
    fn peel(&self, index: usize, inverse: BinaryFn<T>) -> T {
        let mut value = self.storage[index].clone();
        for step in PowersOfTwo::new(index + 1).rev() {
            value = inverse(&value, &self.storage[index - step]);
        }
        value
    }

    fn rebuild(&mut self, mut values: Vec<T>) {
        layout::bit_layout(&mut values, self.op.combine_fn());
        self.storage = values;
    }
}

impl<T: Clone + PartialEq> FenwickTree<T> {
    /// Position of the first original value equal to `value` inside
    /// `window`.
    ///
    /// Window bounds behave like sequence slice bounds: negative ones count
    /// from the end, and the result is clamped to the tree.
    pub fn index_of<R: RangeBounds<isize>>(&self, value: &T, window: R) -> Result<usize> {
        let values = self.original_layout()?;
        let len = values.len() as isize;
        let start = match window.start_bound() {
            Bound::Included(&s) => self.wrap(s),
            Bound::Excluded(&s) => self.wrap(s).saturating_add(1),
            Bound::Unbounded => 0,
        }
        .clamp(0, len) as usize;
        let end = match window.end_bound() {
            Bound::Included(&e) => self.wrap(e).saturating_add(1),
            Bound::Excluded(&e) => self.wrap(e),
            Bound::Unbounded => len,
        }
        .clamp(0, len) as usize;
        if start >= end {
            return Err(FenwickError::ValueNotFound);
        }
        values[start..end]
            .iter()
            .position(|v| v == value)
            .map(|offset| start + offset)
            .ok_or(FenwickError::ValueNotFound)
    }

    pub fn contains(&self, value: &T) -> Result<bool> {
        Ok(self.original_layout()?.contains(value))
    }

    pub fn count(&self, value: &T) -> Result<usize> {
        Ok(self
            .original_layout()?
            .iter()
            .filter(|&v| v == value)
            .count())
    }

    /// Removes the first original value equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        let index = self.index_of(value, ..)?;
        self.delete(index as isize)
    }
}

impl<T: Clone> Extend<T> for FenwickTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: Clone> Clone for FenwickTree<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            op: self.op,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FenwickTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FenwickTree")
            .field("storage", &self.storage)
            .field("op", &self.op)
            .finish()
    }
}

/// Renders the raw encoded storage, e.g. `[1, 3, 3, 10, 5]`.
impl<T: fmt::Debug> fmt::Display for FenwickTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn sums(values: &[i64]) -> FenwickTree<i64> {
        FenwickTree::from_values(values.iter().copied(), Operator::additive())
    }

    fn no_inverse(values: &[i64]) -> FenwickTree<i64> {
        FenwickTree::from_values(values.iter().copied(), Operator::new(|a, b| a + b))
    }

    #[test]
    fn construct_known_scenario() {
        let tree = sums(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.storage(), &[1, 3, 3, 10, 5]);
        assert_eq!(tree.get(4), Ok(15));
        assert_eq!(tree.original_layout(), Ok(vec![1, 2, 3, 4, 5]));
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
    }

    #[test]
    fn display_renders_raw_storage() {
        assert_eq!(sums(&[]).to_string(), "[]");
        assert_eq!(sums(&[1, 2, 5]).to_string(), "[1, 3, 5]");
        assert_eq!(sums(&[1, 5, 10]).to_string(), "[1, 6, 10]");
    }

    #[test]
    fn get_supports_negative_indices() {
        let tree = sums(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.get(-1), tree.get(4));
        assert_eq!(tree.get(-5), Ok(1));
        assert_eq!(
            tree.get(-6),
            Err(FenwickError::IndexOutOfRange { index: -6, len: 5 })
        );
        assert_eq!(
            tree.get(5),
            Err(FenwickError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn empty_tree_rejects_every_index() {
        let mut tree = sums(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.total(), None);
        for index in [-1, 0, 1] {
            assert!(matches!(
                tree.get(index),
                Err(FenwickError::IndexOutOfRange { .. })
            ));
            assert!(tree.update(index, 1).is_err());
            assert!(tree.set(index, 1).is_err());
            assert!(tree.pop_at(index).is_err());
        }
        assert!(matches!(
            tree.pop(),
            Err(FenwickError::IndexOutOfRange { len: 0, .. })
        ));
        assert_eq!(tree.original_layout(), Ok(vec![]));
    }

    #[test]
    fn appends_match_direct_construction() {
        let mut tree = sums(&[]);
        for value in 1..=5 {
            tree.append(value);
        }
        assert_eq!(tree.storage(), sums(&[1, 2, 3, 4, 5]).storage());

        let values = (0..100).map(|x| x * 3 - 40).collect::<Vec<i64>>();
        let mut grown = no_inverse(&[]);
        grown.extend(values.iter().copied());
        assert_eq!(grown.storage(), no_inverse(&values).storage());
    }

    #[test]
    fn set_replaces_value() {
        let mut tree = sums(&(0..10).collect::<Vec<_>>());
        tree.set(0, 10).unwrap();
        let layout = tree.original_layout().unwrap();
        assert_eq!(layout[0], 10);
        assert_eq!(tree.get(9), Ok(55));
        assert_eq!(&layout[1..], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

        tree.set(-1, 0).unwrap();
        tree.set(7, 100).unwrap();
        assert_eq!(
            tree.original_layout(),
            Ok(vec![10, 1, 2, 3, 4, 5, 6, 100, 8, 0])
        );
    }

    #[test]
    fn update_combines_into_value() {
        let mut tree = sums(&[1, 2, 3, 4, 5]);
        tree.update(1, 10).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![1, 12, 3, 4, 5]));
        assert_eq!(tree.get(0), Ok(1));
        assert_eq!(tree.get(1), Ok(13));
        assert_eq!(tree.get(4), Ok(25));

        let mut plain = no_inverse(&[1, 2, 3]);
        plain.update(-1, 4).unwrap();
        assert_eq!(plain.get(2), Ok(10));
        assert!(plain.update(3, 4).is_err());
    }

    #[test]
    fn value_at_peels_aggregates() {
        let tree = sums(&[4, 8, 15, 16, 23, 42]);
        let decoded = (0..6).map(|i| tree.value_at(i).unwrap()).collect::<Vec<_>>();
        assert_eq!(decoded, vec![4, 8, 15, 16, 23, 42]);

        let plain = no_inverse(&[4, 8, 15]);
        assert_eq!(plain.value_at(2), Ok(15));
        assert_eq!(plain.value_at(1), Err(FenwickError::MissingInverse));
    }

    #[test]
    fn range_sum_excludes_start() {
        let tree = sums(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.range_sum(0, 4), Ok(14));
        assert_eq!(tree.range_sum(1, 3), Ok(7));
        assert_eq!(tree.range_sum(2, 2), Ok(0));
        assert_eq!(tree.range_sum(-3, -1), Ok(9));
        assert_eq!(
            tree.range_sum(3, 1),
            Err(FenwickError::InvalidRange { start: 3, end: 1 })
        );
        assert!(matches!(
            tree.range_sum(0, 5),
            Err(FenwickError::IndexOutOfRange { .. })
        ));
        assert_eq!(
            no_inverse(&[1, 2]).range_sum(0, 1),
            Err(FenwickError::MissingInverse)
        );
    }

    #[test]
    fn range_sum_all_uses_default_bounds() {
        let tree = sums(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.range_sum_all(), tree.range_sum(0, 4));
        assert_eq!(tree.range_sum_all(), Ok(14));
        assert_eq!(sums(&[7]).range_sum_all(), Ok(0));
        assert_eq!(
            sums(&[]).range_sum_all(),
            Err(FenwickError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            no_inverse(&[1, 2]).range_sum_all(),
            Err(FenwickError::MissingInverse)
        );
    }

    #[test]
    fn insert_rebuilds_with_clamping() {
        let mut tree = sums(&[1, 2, 3]);
        tree.insert(1, 9).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![1, 9, 2, 3]));
        tree.insert(-1, 7).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![1, 9, 2, 7, 3]));
        tree.insert(100, 5).unwrap();
        tree.insert(-100, 0).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![0, 1, 9, 2, 7, 3, 5]));
        assert_eq!(tree.storage(), sums(&[0, 1, 9, 2, 7, 3, 5]).storage());
    }

    #[test]
    fn pop_returns_original_values() {
        let values = [5_i64, -3, 8, 13, 2, 7, 11, 1];
        let mut tree = sums(&values);
        for expected in values.iter().rev() {
            assert_eq!(tree.pop(), Ok(*expected));
            assert_eq!(tree.storage(), sums(&values[..tree.len()]).storage());
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn pop_last_without_inverse_only_on_odd_length() {
        let mut tree = no_inverse(&[1, 2, 3]);
        assert_eq!(tree.pop(), Ok(3));
        assert_eq!(tree.pop(), Err(FenwickError::MissingInverse));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(1), Ok(3));
    }

    #[test]
    fn pop_at_and_delete() {
        let mut tree = sums(&[10, 20, 30, 40, 50]);
        assert_eq!(tree.pop_at(1), Ok(20));
        assert_eq!(tree.pop_at(-1), Ok(50));
        tree.delete(0).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![30, 40]));
        assert_eq!(
            tree.delete(2),
            Err(FenwickError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn failed_operations_leave_tree_untouched() {
        let mut tree = no_inverse(&[1, 2, 3, 4]);
        let before = tree.storage().to_vec();
        assert_eq!(tree.set(1, 5), Err(FenwickError::MissingInverse));
        assert_eq!(tree.insert(0, 5), Err(FenwickError::MissingInverse));
        assert_eq!(tree.pop_at(0), Err(FenwickError::MissingInverse));
        assert_eq!(tree.pop(), Err(FenwickError::MissingInverse));
        assert_eq!(tree.remove(&2), Err(FenwickError::MissingInverse));
        assert_eq!(tree.index_of(&2, ..), Err(FenwickError::MissingInverse));
        assert!(tree.update(4, 1).is_err());
        assert_eq!(tree.storage(), before.as_slice());
    }

    #[test]
    fn index_of_respects_window() {
        let tree = sums(&[3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(tree.index_of(&1, ..), Ok(1));
        assert_eq!(tree.index_of(&1, 2..), Ok(3));
        assert_eq!(tree.index_of(&9, 0..5), Err(FenwickError::ValueNotFound));
        assert_eq!(tree.index_of(&9, 0..=5), Ok(5));
        assert_eq!(tree.index_of(&6, 3..100), Ok(7));
        assert_eq!(tree.index_of(&3, 5..2), Err(FenwickError::ValueNotFound));
        assert_eq!(tree.index_of(&7, ..), Err(FenwickError::ValueNotFound));
        assert_eq!(tree.contains(&5), Ok(true));
        assert_eq!(tree.contains(&7), Ok(false));
        assert_eq!(tree.count(&1), Ok(2));
    }

    #[test]
    fn index_of_counts_negative_bounds_from_the_end() {
        let tree = sums(&[3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(tree.index_of(&1, -5..), Ok(3));
        assert_eq!(tree.index_of(&3, -8..), Ok(0));
        assert_eq!(tree.index_of(&6, -100..), Ok(7));
        assert_eq!(tree.index_of(&9, ..-3), Err(FenwickError::ValueNotFound));
        assert_eq!(tree.index_of(&9, ..=-3), Ok(5));
        assert_eq!(tree.index_of(&2, -4..-1), Ok(6));
        assert_eq!(tree.index_of(&6, -4..-1), Err(FenwickError::ValueNotFound));
        assert_eq!(tree.index_of(&3, 2..-100), Err(FenwickError::ValueNotFound));
    }

    #[test]
    fn remove_first_match() {
        let mut tree = sums(&[3, 1, 4, 1, 5]);
        tree.remove(&1).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![3, 4, 1, 5]));
        tree.remove(&5).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![3, 4, 1]));
        assert_eq!(tree.remove(&8), Err(FenwickError::ValueNotFound));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn extend_from_tree_uses_original_values() {
        let mut tree = sums(&[1, 2]);
        let other = sums(&[3, 4, 5, 6]);
        tree.extend_from_tree(&other).unwrap();
        assert_eq!(tree.original_layout(), Ok(vec![1, 2, 3, 4, 5, 6]));
        assert_eq!(tree.storage(), sums(&[1, 2, 3, 4, 5, 6]).storage());

        let mut target = no_inverse(&[1]);
        assert_eq!(
            target.extend_from_tree(&no_inverse(&[1, 2])),
            Err(FenwickError::MissingInverse)
        );
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn clone_is_deep() {
        let tree = sums(&[1, 2, 3]);
        let mut copy = tree.clone();
        copy.update(0, 100).unwrap();
        assert_eq!(tree.get(2), Ok(6));
        assert_eq!(copy.get(2), Ok(106));
    }

    #[test]
    fn non_commutative_prefix_order() {
        let op = Operator::<String>::with_inverse(
            |a, b| format!("{a}{b}"),
            |total, prefix| total[prefix.len()..].to_string(),
        );
        let letters = ["a", "b", "c", "d", "e", "f"];
        let mut tree = FenwickTree::new(op);
        tree.extend(letters.iter().map(|s| s.to_string()));
        let prefixes = tree.prefix_sums().collect::<Vec<_>>();
        assert_eq!(prefixes, vec!["a", "ab", "abc", "abcd", "abcde", "abcdef"]);
        assert_eq!(tree.range_sum(1, 4), Ok("cde".to_string()));
        assert_eq!(tree.value_at(3), Ok("d".to_string()));
        assert_eq!(tree.pop(), Ok("f".to_string()));
        assert_eq!(tree.pop_at(1), Ok("b".to_string()));
        assert_eq!(tree.total(), Some("acde".to_string()));
    }

    #[test]
    fn point_writes_assume_a_commutative_operator() {
        let op = Operator::<String>::with_inverse(
            |a, b| format!("{a}{b}"),
            |total, prefix| total[prefix.len()..].to_string(),
        );
        let letters = ["a", "b", "c", "d", "e", "f", "g", "h"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        let mut updated = FenwickTree::from_values(letters.clone(), op);
        updated.update(5, "Z".to_string()).unwrap();
        assert_eq!(updated.get(5), Ok("abcdefZ".to_string()));
        assert_eq!(updated.get(6), Ok("abcdefZg".to_string()));
        // The block closing at 7 gets "Z" on its right edge.
        assert_eq!(updated.get(7), Ok("abcdefghZ".to_string()));

        let mut replaced = FenwickTree::from_values(letters, op);
        replaced.set(5, "Z".to_string()).unwrap();
        assert_eq!(replaced.get(4), Ok("abcde".to_string()));
        assert_eq!(replaced.get(7), Ok("bcdefghZ".to_string()));
    }

    #[traced_test]
    #[test]
    fn rebuilds_are_logged() {
        let mut tree = sums(&[1, 2, 3, 4]);
        tree.insert(2, 10).unwrap();
        assert!(logs_contain("rebuilding fenwick layout for insert"));
        tree.pop_at(0).unwrap();
        assert!(logs_contain("rebuilding fenwick layout for removal"));
    }
}
