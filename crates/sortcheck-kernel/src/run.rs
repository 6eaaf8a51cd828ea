//! Type-state sort run.
//!
//! A run moves through three stages in a fixed order:
//!
//! ```text
//! Generated ──sort()──▶ Sorted ──verify()──▶ Verified(Success | Failure)
//! ```
//!
//! Each transition consumes the previous stage, so a stage cannot be skipped,
//! repeated, or revisited. Verifying an unsorted run does not compile:
//!
//! ```compile_fail
//! use sortcheck_kernel::{SortRun, SortSize};
//!
//! let run = SortRun::generate(SortSize::new(10).unwrap());
//! let _ = run.verify();
//! ```
//!
//! Nor does sorting the same generated sequence twice:
//!
//! ```compile_fail
//! use sortcheck_kernel::{AdjacentExchange, SortRun, SortSize};
//!
//! let run = SortRun::generate(SortSize::new(10).unwrap());
//! let sorted = run.sort(&AdjacentExchange);
//! let again = run.sort(&AdjacentExchange);
//! ```

use sortcheck_types::{Outcome, SortSize};

use crate::sequence::Sequence;
use crate::sort::Sorter;
use crate::verify::verify_ascending;

/// Marker for the stages of a [`SortRun`].
pub trait Stage {
    const NAME: &'static str;
}

/// The sequence holds `n-1..=0` and has not been touched.
#[derive(Debug)]
pub struct Generated;

/// The sort stage has run. Nothing is known about the order yet.
#[derive(Debug)]
pub struct Sorted {
    sorter: &'static str,
}

/// Verification has run and produced its one outcome.
#[derive(Debug)]
pub struct Verified {
    sorter: &'static str,
    outcome: Outcome,
}

impl Stage for Generated {
    const NAME: &'static str = "generated";
}

impl Stage for Sorted {
    const NAME: &'static str = "sorted";
}

impl Stage for Verified {
    const NAME: &'static str = "verified";
}

/// One generate/sort/verify run, parameterized by its current stage.
#[derive(Debug)]
pub struct SortRun<S: Stage> {
    size: SortSize,
    sequence: Sequence,
    stage: S,
}

impl<S: Stage> SortRun<S> {
    pub fn size(&self) -> SortSize {
        self.size
    }

    /// Read-only view of the sequence at this stage.
    pub fn sequence(&self) -> &[i32] {
        self.sequence.as_slice()
    }

    pub fn stage_name(&self) -> &'static str {
        S::NAME
    }
}

impl SortRun<Generated> {
    /// Allocates a fresh reverse-ordered sequence of `size` elements.
    pub fn generate(size: SortSize) -> Self {
        Self {
            size,
            sequence: Sequence::reversed(size),
            stage: Generated,
        }
    }

    /// Sorts the sequence in place with `sorter`.
    pub fn sort(mut self, sorter: &dyn Sorter) -> SortRun<Sorted> {
        let len_before = self.sequence.len();
        sorter.sort(self.sequence.as_mut_slice());

        // Invariant: sorting never changes the element count
        assert_eq!(
            self.sequence.len(),
            len_before,
            "sorter {} changed the sequence length",
            sorter.name()
        );

        SortRun {
            size: self.size,
            sequence: self.sequence,
            stage: Sorted {
                sorter: sorter.name(),
            },
        }
    }
}

impl SortRun<Sorted> {
    /// Runs the fail-fast ascending check and fixes the outcome.
    pub fn verify(self) -> SortRun<Verified> {
        let outcome = verify_ascending(self.sequence.as_slice());

        SortRun {
            size: self.size,
            sequence: self.sequence,
            stage: Verified {
                sorter: self.stage.sorter,
                outcome,
            },
        }
    }

    pub fn sorter(&self) -> &'static str {
        self.stage.sorter
    }
}

impl SortRun<Verified> {
    pub fn outcome(&self) -> Outcome {
        self.stage.outcome
    }

    pub fn sorter(&self) -> &'static str {
        self.stage.sorter
    }

    /// Ends the run, handing back the sorted values.
    pub fn into_sequence(self) -> Vec<i32> {
        self.sequence.into_vec()
    }
}
