//! # sortcheck-kernel: Functional core of `sortcheck`
//!
//! The kernel generates a reverse-ordered sequence, sorts it in place and
//! checks the result against the ascending permutation `0..n`.
//!
//! ## Key Principles
//!
//! - **No IO**: The kernel never prints, logs or reads configuration
//! - **No randomness**: Input is always `n-1, n-2, ..., 0`
//! - **Owned state**: Each run allocates its own sequence and drops it at the end
//! - **Outcome, not error**: A wrong permutation is an [`Outcome::Failure`];
//!   only a bad size is an `Err`
//!
//! ## Architecture
//!
//! - [`sequence`]: The reverse-ordered input
//! - [`sort`]: Comparison-exchange sorters behind the [`Sorter`] trait
//! - [`verify`]: The fail-fast ascending check
//! - [`run`]: Type-state run `Generated → Sorted → Verified`
//! - [`canary`]: Feature-gated intentional bugs
//!
//! ## Example
//!
//! ```
//! use sortcheck_kernel::{Outcome, run_sort_test};
//!
//! assert_eq!(run_sort_test(10), Ok(Outcome::Success));
//! assert!(run_sort_test(0).is_err());
//! ```

pub mod canary;
pub mod run;
pub mod sequence;
pub mod sort;
pub mod verify;


pub use run::{Generated, SortRun, Sorted, Stage, Verified};
pub use sequence::Sequence;
pub use sort::{AdjacentExchange, AnchoredExchange, Sorter, sorter_for};
pub use verify::verify_ascending;

pub use sortcheck_types::{ContractViolation, Mismatch, Outcome, SortAlgorithm, SortSize};

/// Generates, sorts and verifies a sequence of `size` elements.
///
/// The size is checked before anything is allocated. Uses adjacent-exchange
/// sorting; see [`run_sort_test_with`] to pick another sorter.
pub fn run_sort_test(size: usize) -> Result<Outcome, ContractViolation> {
    let size = SortSize::new(size)?;
    let run = run_sort_test_with(size, sorter_for(SortAlgorithm::AdjacentExchange));
    Ok(run.outcome())
}

/// Runs all three stages with the given sorter and returns the verified run.
///
/// The returned run still owns the sorted sequence so callers can sample it.
pub fn run_sort_test_with(size: SortSize, sorter: &dyn Sorter) -> SortRun<Verified> {
    SortRun::generate(size).sort(sorter).verify()
}
