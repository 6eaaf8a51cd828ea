//! # sortcheck
//!
//! Self-verifying in-place sort runs.
//!
//! Each run generates `n-1, ..., 0`, sorts it with a quadratic
//! comparison-exchange sort, then checks that slot `i` holds `i`. Three
//! calibrated variants (10, 1000 and 8192 elements) exercise different
//! memory footprints.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     sortcheck                        │
//! │  ┌──────────┐   ┌──────────┐   ┌────────┐   ┌──────┐ │
//! │  │ RunSpec  │ → │  Kernel  │ → │ Report │ → │ Line │ │
//! │  │ (config) │   │(gen/sort/│   │ (JSON) │   │(text)│ │
//! │  │          │   │ verify)  │   │        │   │      │ │
//! │  └──────────┘   └──────────┘   └────────┘   └──────┘ │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use sortcheck::{RunSpec, SizeVariant, SortedArrayVerifier};
//!
//! let verifier = SortedArrayVerifier::new();
//! let report = verifier.run(&RunSpec::variant(SizeVariant::Small));
//!
//! assert!(report.outcome.is_success());
//! assert_eq!(report.line(), "Sort Succeeded! 0 1 2 3 4 5 6 7 8 9");
//! ```

mod error;
mod report;
mod verifier;

pub use error::{Result, SortcheckError};
pub use report::{BatchReport, FAILURE_HEADLINE, RunReport, SUCCESS_HEADLINE};
pub use verifier::{RunSpec, SortedArrayVerifier};

// Re-export core types from sortcheck-types
pub use sortcheck_types::{
    ContractViolation, Mismatch, Outcome, ParseError, SamplePolicy, SizeVariant, SortAlgorithm,
    SortSize,
};

// Re-export canary introspection
pub use sortcheck_kernel::canary::{any_canary_enabled, enabled_canaries};
