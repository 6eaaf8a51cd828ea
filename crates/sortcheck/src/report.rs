//! Run reports and the printed outcome line.
//!
//! The headline text and the exit status are what external harnesses depend
//! on. Everything after the headline is informational.

use serde::{Deserialize, Serialize};
use sortcheck_types::{Outcome, SizeVariant, SortAlgorithm};

use crate::error::Result;

/// Headline printed when every slot verified.
pub const SUCCESS_HEADLINE: &str = "Sort Succeeded!";

/// Headline printed when verification found a bad slot.
pub const FAILURE_HEADLINE: &str = "***Sort Failed***";

/// Result of one run, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Calibrated variant, or `None` for an arbitrary size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<SizeVariant>,
    pub size: usize,
    pub algorithm: SortAlgorithm,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Sorted values to show after the headline. Empty on failure.
    pub sample: Vec<i32>,
    /// True when `sample` is only the tail of the sequence.
    pub sample_is_tail: bool,
    pub footprint_bytes: usize,
    pub elapsed_us: u64,
}

impl RunReport {
    pub fn headline(&self) -> &'static str {
        if self.outcome.is_success() {
            SUCCESS_HEADLINE
        } else {
            FAILURE_HEADLINE
        }
    }

    /// The outcome line, e.g. `Sort Succeeded! ... 998 999`.
    pub fn line(&self) -> String {
        let mut line = self.headline().to_string();

        match self.outcome {
            Outcome::Success => {
                if !self.sample.is_empty() {
                    if self.sample_is_tail {
                        line.push_str(" ...");
                    }
                    for value in &self.sample {
                        line.push(' ');
                        line.push_str(&value.to_string());
                    }
                }
            }
            Outcome::Failure(mismatch) => {
                line.push_str(&format!(" ({mismatch})"));
            }
        }

        line
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Reports from a sequence of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub runs: Vec<RunReport>,
}

impl BatchReport {
    pub fn all_passed(&self) -> bool {
        self.runs.iter().all(|run| run.outcome.is_success())
    }

    pub fn successes(&self) -> usize {
        self.runs.iter().filter(|run| run.outcome.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.runs.len() - self.successes()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
