//! Canary mutations for proving the verifier catches broken sorts.
//!
//! Each canary is an intentional bug gated by a feature flag. A canary that
//! does not turn a run into [`Outcome::Failure`](sortcheck_types::Outcome)
//! means the verification step is not doing its job.
//!
//! # Available Canaries
//!
//! - `canary-skip-sort`: The sort stage does nothing
//! - `canary-off-by-one`: Adjacent exchange never compares the last pair
//!
//! # Usage
//!
//! ```bash
//! # Every run must now report ***Sort Failed*** and exit 1
//! cargo run -p sortcheck-cli --features canary-skip-sort -- small
//! ```

/// Canary: Skip the sort stage entirely.
///
/// **Expected Detection**: `verify_ascending`, index 0 holding `n-1`
#[cfg(feature = "canary-skip-sort")]
pub fn skip_sort() -> bool {
    true
}

#[cfg(not(feature = "canary-skip-sort"))]
pub fn skip_sort() -> bool {
    false
}

/// Canary: Stop the adjacent-exchange inner loop one pair early.
///
/// **Expected Detection**: `verify_ascending`, index 0 holding 1
/// **Why it fails**: The smallest value starts in the last slot and is never
/// compared, so it stays there.
#[cfg(feature = "canary-off-by-one")]
pub fn adjacent_pair_limit(len: usize) -> usize {
    len.saturating_sub(2)
}

/// Number of neighbouring pairs one adjacent-exchange pass compares.
#[cfg(not(feature = "canary-off-by-one"))]
pub fn adjacent_pair_limit(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Returns true if any canary feature is enabled.
pub fn any_canary_enabled() -> bool {
    cfg!(feature = "canary-skip-sort") || cfg!(feature = "canary-off-by-one")
}

/// Returns a list of all enabled canaries.
pub fn enabled_canaries() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut canaries = Vec::new();

    #[cfg(feature = "canary-skip-sort")]
    canaries.push("canary-skip-sort");

    #[cfg(feature = "canary-off-by-one")]
    canaries.push("canary-off-by-one");

    canaries
}
