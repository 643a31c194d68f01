use std::iter::FusedIterator;

use crate::tree::FenwickTree;

/// Iterator over the prefix aggregates of a tree, `get(0)` through
/// `get(len - 1)`. Each step costs `O(log n)`.
///
/// Reversing it yields the sums from the last index down without touching
/// the tree.
#[derive(Clone, Debug)]
pub struct PrefixSums<'a, T> {
    tree: &'a FenwickTree<T>,
    front: usize,
    back: usize,
}

impl<'a, T> PrefixSums<'a, T> {
    pub(crate) fn new(tree: &'a FenwickTree<T>) -> Self {
        Self {
            tree,
            front: 0,
            back: tree.len(),
        }
    }
}

impl<T: Clone> Iterator for PrefixSums<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let sum = self.tree.prefix(self.front);
        self.front += 1;
        Some(sum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T: Clone> DoubleEndedIterator for PrefixSums<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.tree.prefix(self.back))
    }
}

impl<T: Clone> ExactSizeIterator for PrefixSums<'_, T> {}
impl<T: Clone> FusedIterator for PrefixSums<'_, T> {}
