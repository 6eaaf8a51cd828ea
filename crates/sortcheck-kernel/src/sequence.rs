//! The sequence a run sorts.
//!
//! A sequence is always created in strict reverse order, `n-1` down to `0`.
//! That is the worst case for the exchange sorters and has exactly one
//! correct sorted form.

use sortcheck_types::SortSize;

/// Fixed-length, exclusively owned buffer of `i32` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i32>,
}

impl Sequence {
    /// Creates `[n-1, n-2, ..., 0]`.
    pub fn reversed(size: SortSize) -> Self {
        let n = size.get();
        // SortSize caps n at 2^31, so every value fits in an i32.
        let values: Vec<i32> = (0..n).rev().map(|v| v as i32).collect();

        // Postcondition: length matches the requested size
        assert_eq!(
            values.len(),
            n,
            "generated sequence has {} elements, expected {n}",
            values.len()
        );
        // Postcondition: strict reverse permutation of 0..n
        debug_assert!(
            values
                .iter()
                .enumerate()
                .all(|(i, &v)| v as usize == n - 1 - i)
        );

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a sequence holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Mutable view for the sort stage. Length cannot change through it.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

impl AsRef<[i32]> for Sequence {
    fn as_ref(&self) -> &[i32] {
        &self.values
    }
}
