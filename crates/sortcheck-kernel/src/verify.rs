//! The ascending-permutation check.

use sortcheck_types::{Mismatch, Outcome};

/// Scans `values` once and checks that slot `i` holds `i`.
///
/// Stops at the first bad slot. This is a fail-fast check, so a failure
/// reports where the sort first went wrong rather than how many slots are
/// wrong.
pub fn verify_ascending(values: &[i32]) -> Outcome {
    let first_bad = values
        .iter()
        .enumerate()
        .find(|&(i, &v)| usize::try_from(v).ok() != Some(i));

    match first_bad {
        None => Outcome::Success,
        Some((index, &value)) => {
            // Postcondition: the diagnostic points inside the sequence
            debug_assert!(index < values.len());
            Outcome::Failure(Mismatch { index, value })
        }
    }
}
