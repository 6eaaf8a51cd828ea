//! Error types for the sortcheck facade.

use sortcheck_types::ContractViolation;

/// Errors raised before a run starts.
///
/// A sort that produces the wrong order is not an error; it comes back as
/// [`Outcome::Failure`](sortcheck_types::Outcome::Failure) inside a report.
#[derive(thiserror::Error, Debug)]
pub enum SortcheckError {
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortcheckError>;
