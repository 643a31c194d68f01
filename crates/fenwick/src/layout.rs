//! Conversion between a plain sequence and its Fenwick encoding.
//!
//! In the encoding, 1-based position `i` holds the aggregate of the run of
//! `lowbit(i)` original values ending at `i`. Both directions work in place
//! and in `O(n)`.

use crate::operator::BinaryFn;

/// Encodes `values` in place.
///
/// Pass `s` (block size `1, 2, 4, ..`) folds the block of size `s` ending at
/// 0-based `j - s` into every position `j ≡ 2s - 1 (mod 2s)`. A pass only
/// reads positions `≡ s - 1 (mod 2s)`, none of which it writes.
pub fn bit_layout<T>(values: &mut [T], combine: BinaryFn<T>) {
    let n = values.len();
    let mut size = 1_usize;
    while size < n {
        let mut j = 2 * size - 1;
        while j < n {
            let (left, right) = values.split_at_mut(j);
            right[0] = combine(&left[j - size], &right[0]);
            j += 2 * size;
        }
        size <<= 1;
    }
}

/// Decodes `values` in place, undoing [`bit_layout`] pass by pass from the
/// largest block size down to `1`.
pub fn original_layout<T>(values: &mut [T], inverse: BinaryFn<T>) {
    let n = values.len();
    if n < 2 {
        return;
    }
    // Largest power of two strictly below `n`.
    let mut size = 1_usize << (usize::BITS - 1 - (n - 1).leading_zeros());
    loop {
        let mut j = 2 * size - 1;
        while j < n {
            let (left, right) = values.split_at_mut(j);
            right[0] = inverse(&right[0], &left[j - size]);
            j += 2 * size;
        }
        if size == 1 {
            break;
        }
        size >>= 1;
    }
}
