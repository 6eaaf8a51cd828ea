//! # sortcheck-types: Core types for `sortcheck`
//!
//! Shared value types used across the `sortcheck` crates:
//! - Run sizing ([`SortSize`], [`SizeVariant`])
//! - Sort selection ([`SortAlgorithm`])
//! - Sample reporting ([`SamplePolicy`])
//! - Verification results ([`Outcome`], [`Mismatch`])
//! - Contract errors ([`ContractViolation`])

use std::{
    fmt::{self, Display},
    num::NonZeroUsize,
    str::FromStr,
};

use serde::{Deserialize, Serialize};


// ============================================================================
// Contract Violations
// ============================================================================

/// A caller passed a size the verifier cannot run with.
///
/// This is the only error the verifier raises. A sort that produces the
/// wrong permutation is reported through [`Outcome::Failure`] instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("sort size must be positive, got 0")]
    ZeroSize,

    #[error("sort size must be positive, got {0}")]
    NegativeSize(i64),

    #[error("sort size {size} exceeds the maximum of {max}")]
    SizeOutOfRange { size: u64, max: usize },
}

// ============================================================================
// Sort Size
// ============================================================================

/// Number of elements in one generated sequence.
///
/// Always at least 1, and small enough that every value in `0..size`
/// fits in an `i32` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SortSize(NonZeroUsize);

impl SortSize {
    /// Largest accepted size: the values `0..MAX` must all fit in an `i32`.
    pub const MAX: usize = 1 << 31;

    /// Validates `size` eagerly, before anything is allocated.
    pub fn new(size: usize) -> Result<Self, ContractViolation> {
        let Some(non_zero) = NonZeroUsize::new(size) else {
            return Err(ContractViolation::ZeroSize);
        };
        if size > Self::MAX {
            return Err(ContractViolation::SizeOutOfRange {
                size: size as u64,
                max: Self::MAX,
            });
        }
        Ok(Self(non_zero))
    }

    /// Returns the element count.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Bytes occupied by a sequence of this size.
    pub fn footprint_bytes(self) -> usize {
        self.get() * std::mem::size_of::<i32>()
    }
}

impl Display for SortSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for SortSize {
    type Error = ContractViolation;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for SortSize {
    type Error = ContractViolation;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(ContractViolation::NegativeSize(value));
        }
        let size = usize::try_from(value).map_err(|_| ContractViolation::SizeOutOfRange {
            size: value as u64,
            max: Self::MAX,
        })?;
        Self::new(size)
    }
}

impl From<SortSize> for usize {
    fn from(size: SortSize) -> Self {
        size.get()
    }
}

// ============================================================================
// Size Variants
// ============================================================================

/// The three calibrated runs, each exercising a different memory footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeVariant {
    /// 10 elements; every sorted value is printed.
    Small,
    /// 1000 elements; the tail of the sorted sequence is printed.
    Medium,
    /// 8192 elements; nothing but the outcome is printed.
    Large,
}

impl SizeVariant {
    /// Every calibrated variant, in run order.
    pub const ALL: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Medium, SizeVariant::Large];

    /// Element count of this variant.
    pub fn element_count(self) -> usize {
        match self {
            SizeVariant::Small => 10,
            SizeVariant::Medium => 1000,
            SizeVariant::Large => 8192,
        }
    }

    pub fn size(self) -> SortSize {
        // Calibrated counts are non-zero and far below `SortSize::MAX`.
        SortSize(NonZeroUsize::MIN.saturating_add(self.element_count() - 1))
    }

    /// The sort each variant has always used.
    pub fn default_algorithm(self) -> SortAlgorithm {
        match self {
            SizeVariant::Small | SizeVariant::Medium => SortAlgorithm::AdjacentExchange,
            SizeVariant::Large => SortAlgorithm::AnchoredExchange,
        }
    }

    pub fn default_sample(self) -> SamplePolicy {
        match self {
            SizeVariant::Small => SamplePolicy::All,
            SizeVariant::Medium => SamplePolicy::Tail(5),
            SizeVariant::Large => SamplePolicy::Nothing,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SizeVariant::Small => "small",
            SizeVariant::Medium => "medium",
            SizeVariant::Large => "large",
        }
    }
}

impl Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(SizeVariant::Small),
            "medium" => Ok(SizeVariant::Medium),
            "large" => Ok(SizeVariant::Large),
            other => Err(ParseError::UnknownVariant(other.to_string())),
        }
    }
}

// ============================================================================
// Sort Algorithm
// ============================================================================

/// Which comparison-exchange sort runs over the sequence.
///
/// Both are quadratic and both leave any permutation in non-decreasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    /// `n` passes over neighbouring pairs, swapping any that are out of order.
    #[serde(alias = "adjacent")]
    AdjacentExchange,
    /// For each anchor slot, swap in any later element smaller than it.
    #[serde(alias = "anchored")]
    AnchoredExchange,
}

impl SortAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::AdjacentExchange => "adjacent-exchange",
            SortAlgorithm::AnchoredExchange => "anchored-exchange",
        }
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adjacent" | "adjacent-exchange" => Ok(SortAlgorithm::AdjacentExchange),
            "anchored" | "anchored-exchange" => Ok(SortAlgorithm::AnchoredExchange),
            other => Err(ParseError::UnknownAlgorithm(other.to_string())),
        }
    }
}

// ============================================================================
// Sample Policy
// ============================================================================

/// How many sorted values accompany a success line.
///
/// Text form: `all`, `none`, or `tail:K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SamplePolicy {
    All,
    /// The last `k` values.
    Tail(usize),
    Nothing,
}

impl SamplePolicy {
    /// Returns the slice of `values` this policy reports.
    pub fn select<T>(self, values: &[T]) -> &[T] {
        match self {
            SamplePolicy::All => values,
            SamplePolicy::Tail(k) => &values[values.len().saturating_sub(k)..],
            SamplePolicy::Nothing => &[],
        }
    }

    /// Whether the sample is a tail of a longer sequence.
    pub fn is_partial(self, len: usize) -> bool {
        match self {
            SamplePolicy::Tail(k) => k < len,
            SamplePolicy::All | SamplePolicy::Nothing => false,
        }
    }
}

impl Display for SamplePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplePolicy::All => f.write_str("all"),
            SamplePolicy::Tail(k) => write!(f, "tail:{k}"),
            SamplePolicy::Nothing => f.write_str("none"),
        }
    }
}

impl FromStr for SamplePolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "all" => Ok(SamplePolicy::All),
            "none" | "nothing" => Ok(SamplePolicy::Nothing),
            _ => {
                let count = lowered
                    .strip_prefix("tail:")
                    .ok_or_else(|| ParseError::UnknownSample(s.to_string()))?;
                count
                    .parse::<usize>()
                    .map(SamplePolicy::Tail)
                    .map_err(|_| ParseError::UnknownSample(s.to_string()))
            }
        }
    }
}

impl TryFrom<String> for SamplePolicy {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SamplePolicy> for String {
    fn from(policy: SamplePolicy) -> Self {
        policy.to_string()
    }
}

/// Errors from parsing the text forms of the enums above.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown size variant '{0}' (expected small, medium or large)")]
    UnknownVariant(String),

    #[error("unknown sort algorithm '{0}' (expected adjacent or anchored)")]
    UnknownAlgorithm(String),

    #[error("unknown sample policy '{0}' (expected all, none or tail:K)")]
    UnknownSample(String),
}

// ============================================================================
// Verification Outcome
// ============================================================================

/// The first slot that broke the ascending invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mismatch {
    pub index: usize,
    /// What the slot actually held (it should have held `index`).
    pub value: i32,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} holds {}", self.index, self.value)
    }
}

/// Terminal result of one verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Every slot `i` held `i`.
    Success,
    /// The scan stopped at the first bad slot.
    Failure(Mismatch),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Returns the diagnostic, if the run failed.
    pub fn mismatch(&self) -> Option<Mismatch> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(mismatch) => Some(*mismatch),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("success"),
            Outcome::Failure(mismatch) => write!(f, "failure ({mismatch})"),
        }
    }
}
