//! The verifier: runs specs through the kernel and reports what happened.

use std::time::Instant;

use sortcheck_kernel::{SortRun, sorter_for};
use sortcheck_types::{Outcome, SamplePolicy, SizeVariant, SortAlgorithm, SortSize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::report::{BatchReport, RunReport};

/// What to run: a size plus the sort and sample settings for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpec {
    pub size: SortSize,
    /// Set when the size is one of the calibrated variants.
    pub variant: Option<SizeVariant>,
    pub algorithm: SortAlgorithm,
    pub sample: SamplePolicy,
}

impl RunSpec {
    /// A calibrated variant with its own default sort and sample.
    pub fn variant(variant: SizeVariant) -> Self {
        Self {
            size: variant.size(),
            variant: Some(variant),
            algorithm: variant.default_algorithm(),
            sample: variant.default_sample(),
        }
    }

    /// An arbitrary size: adjacent exchange, no sample.
    pub fn sized(size: SortSize) -> Self {
        Self {
            size,
            variant: None,
            algorithm: SortAlgorithm::AdjacentExchange,
            sample: SamplePolicy::Nothing,
        }
    }

    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_sample(mut self, sample: SamplePolicy) -> Self {
        self.sample = sample;
        self
    }

    /// Label for logs and tables: the variant name, or the bare size.
    pub fn label(&self) -> String {
        match self.variant {
            Some(variant) => variant.to_string(),
            None => format!("n={}", self.size),
        }
    }
}

/// Runs generate → sort → verify once per spec.
///
/// Holds no state between runs; every run allocates its own sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedArrayVerifier {
    _private: (),
}

impl SortedArrayVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `size` and runs it with the parameterized defaults.
    ///
    /// A size of zero or below is rejected before anything is allocated.
    pub fn run_size(&self, size: i64) -> Result<RunReport> {
        let size = SortSize::try_from(size).inspect_err(|e| {
            warn!(error = %e, "rejected sort size");
        })?;
        Ok(self.run(&RunSpec::sized(size)))
    }

    /// Runs one spec to completion.
    pub fn run(&self, spec: &RunSpec) -> RunReport {
        let label = spec.label();
        info!(
            run = %label,
            size = spec.size.get(),
            algorithm = %spec.algorithm,
            "starting sort run"
        );

        let started = Instant::now();
        let run = SortRun::generate(spec.size);
        debug!(run = %label, stage = run.stage_name(), "sequence generated");

        let run = run.sort(sorter_for(spec.algorithm));
        debug!(run = %label, stage = run.stage_name(), sorter = run.sorter(), "sequence sorted");

        let run = run.verify();
        let elapsed = started.elapsed();
        let outcome = run.outcome();

        match outcome {
            Outcome::Success => info!(
                run = %label,
                elapsed_us = elapsed.as_micros() as u64,
                "sort verified"
            ),
            Outcome::Failure(mismatch) => warn!(
                run = %label,
                index = mismatch.index,
                value = mismatch.value,
                "sort verification failed"
            ),
        }

        // Samples only come from a verified sequence.
        let sample = match outcome {
            Outcome::Success => spec.sample.select(run.sequence()).to_vec(),
            Outcome::Failure(_) => Vec::new(),
        };

        RunReport {
            variant: spec.variant,
            size: spec.size.get(),
            algorithm: spec.algorithm,
            outcome,
            sample_is_tail: !sample.is_empty() && spec.sample.is_partial(spec.size.get()),
            sample,
            footprint_bytes: spec.size.footprint_bytes(),
            elapsed_us: elapsed.as_micros() as u64,
        }
    }

    /// Runs every spec in order, one after the other.
    ///
    /// A failed run does not stop the batch.
    pub fn run_all(&self, specs: &[RunSpec]) -> BatchReport {
        let runs: Vec<RunReport> = specs.iter().map(|spec| self.run(spec)).collect();
        let batch = BatchReport { runs };

        info!(
            runs = batch.runs.len(),
            failures = batch.failures(),
            "batch complete"
        );
        batch
    }
}
