//! Comparison-exchange sorters.
//!
//! Both sorters are quadratic on purpose. The calibrated sizes exist to
//! exercise different memory footprints, not to measure sorting speed.

use sortcheck_types::SortAlgorithm;

use crate::canary;

/// An in-place sort over `i32` values.
///
/// Implementations must leave any permutation in non-decreasing order and
/// must not change the slice length. The verifier does not trust this: it
/// checks the result independently, which is what lets tests and canaries
/// plug in broken sorters.
pub trait Sorter {
    /// Name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Sorts `values` in place.
    fn sort(&self, values: &mut [i32]);
}

/// `n` passes over neighbouring pairs, swapping any pair out of order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentExchange;

impl Sorter for AdjacentExchange {
    fn name(&self) -> &'static str {
        SortAlgorithm::AdjacentExchange.name()
    }

    fn sort(&self, values: &mut [i32]) {
        if canary::skip_sort() {
            return;
        }

        let n = values.len();
        let pair_limit = canary::adjacent_pair_limit(n);
        for _ in 0..n {
            for j in 0..pair_limit {
                if values[j] > values[j + 1] {
                    values.swap(j, j + 1);
                }
            }
        }
    }
}

/// For each anchor slot `i`, swaps in every later element smaller than it.
///
/// After anchor `i` is processed, slot `i` holds the minimum of `values[i..]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchoredExchange;

impl Sorter for AnchoredExchange {
    fn name(&self) -> &'static str {
        SortAlgorithm::AnchoredExchange.name()
    }

    fn sort(&self, values: &mut [i32]) {
        if canary::skip_sort() {
            return;
        }

        let n = values.len();
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                if values[i] > values[j] {
                    values.swap(i, j);
                }
            }
            debug_assert!(values[i..].iter().all(|&v| v >= values[i]));
        }
    }
}

static ADJACENT_EXCHANGE: AdjacentExchange = AdjacentExchange;
static ANCHORED_EXCHANGE: AnchoredExchange = AnchoredExchange;

/// Returns the sorter for `algorithm`.
pub fn sorter_for(algorithm: SortAlgorithm) -> &'static dyn Sorter {
    match algorithm {
        SortAlgorithm::AdjacentExchange => &ADJACENT_EXCHANGE,
        SortAlgorithm::AnchoredExchange => &ANCHORED_EXCHANGE,
    }
}
