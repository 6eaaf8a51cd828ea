//! # sortcheck-bench: Performance benchmarks for sortcheck
//!
//! ## Benchmarks
//!
//! - **sort**: generation, each sorter, and verification per size
//! - **latency**: full verifier runs per calibrated variant, as percentiles
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p sortcheck-bench
//!
//! # Save baseline for comparison
//! cargo bench -p sortcheck-bench --bench sort -- --save-baseline main
//!
//! # Compare against baseline
//! cargo bench -p sortcheck-bench --bench sort -- --baseline main
//! ```

#![allow(clippy::cast_precision_loss)] // Latency stats use f64 for percentile display

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use hdrhistogram::Histogram;
use sortcheck::{RunSpec, SortedArrayVerifier};

/// Largest latency the tracker distinguishes: one hour, in nanoseconds.
pub const MAX_TRACKABLE_NS: u64 = 3_600_000_000_000;

/// Tracks latency percentiles for operations.
#[derive(Debug)]
pub struct LatencyTracker {
    histogram: Histogram<u64>,
}

impl LatencyTracker {
    /// Creates a tracker covering 1ns to [`MAX_TRACKABLE_NS`] with 3
    /// significant digits of precision.
    pub fn new() -> Result<Self> {
        let histogram = Histogram::new_with_bounds(1, MAX_TRACKABLE_NS, 3)
            .context("invalid histogram configuration")?;
        Ok(Self { histogram })
    }

    /// Records a latency measurement in nanoseconds.
    ///
    /// Anything above [`MAX_TRACKABLE_NS`] is recorded as the maximum.
    pub fn record(&mut self, latency_ns: u64) {
        self.histogram.saturating_record(latency_ns);
    }

    pub fn count(&self) -> u64 {
        self.histogram.len()
    }

    pub fn p50(&self) -> u64 {
        self.histogram.value_at_quantile(0.50)
    }

    pub fn p95(&self) -> u64 {
        self.histogram.value_at_quantile(0.95)
    }

    pub fn p99(&self) -> u64 {
        self.histogram.value_at_quantile(0.99)
    }

    pub fn max(&self) -> u64 {
        self.histogram.max()
    }

    pub fn min(&self) -> u64 {
        self.histogram.min()
    }

    pub fn mean(&self) -> f64 {
        self.histogram.mean()
    }

    /// Exports latency statistics as JSON for CI integration.
    pub fn to_json(&self, operation: &str) -> String {
        serde_json::json!({
            "operation": operation,
            "count": self.count(),
            "min_ns": self.min(),
            "p50_ns": self.p50(),
            "p95_ns": self.p95(),
            "p99_ns": self.p99(),
            "max_ns": self.max(),
            "mean_ns": self.mean(),
        })
        .to_string()
    }

    /// Writes a summary of latency statistics.
    pub fn write_summary<W: Write>(&self, writer: &mut W, operation: &str) -> std::io::Result<()> {
        writeln!(writer, "{operation} ({} runs):", self.count())?;
        for (label, ns) in [
            ("p50", self.p50()),
            ("p95", self.p95()),
            ("p99", self.p99()),
            ("max", self.max()),
        ] {
            writeln!(
                writer,
                "  {label:<5} {ns:>12} ns ({:>10.2} μs)",
                ns as f64 / 1000.0
            )?;
        }
        Ok(())
    }
}

/// Runs `spec` through the verifier `iterations` times and records each run.
///
/// Fails if any run does not verify; a latency for a broken sort is
/// meaningless.
pub fn measure_runs(spec: &RunSpec, iterations: usize) -> Result<LatencyTracker> {
    let verifier = SortedArrayVerifier::new();
    let mut tracker = LatencyTracker::new()?;

    for iteration in 0..iterations {
        let started = Instant::now();
        let report = verifier.run(spec);
        let elapsed_ns = started.elapsed().as_nanos() as u64;

        if !report.outcome.is_success() {
            anyhow::bail!(
                "run {} of {} failed: {}",
                iteration + 1,
                spec.label(),
                report.outcome
            );
        }
        tracker.record(elapsed_ns);
    }

    Ok(tracker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortcheck::SizeVariant;
    use test_case::test_case;

    #[test]
    fn test_tracker_percentiles() {
        let mut tracker = LatencyTracker::new().unwrap();
        for ns in 1..=100 {
            tracker.record(ns * 1000);
        }

        assert_eq!(tracker.count(), 100);
        assert!(tracker.p50() <= tracker.p95());
        assert!(tracker.p95() <= tracker.p99());
        assert!(tracker.p99() <= tracker.max());
        assert!(tracker.min() >= 1000);
    }

    #[test]
    fn test_tracker_keeps_recorded_magnitudes() {
        let mut tracker = LatencyTracker::new().unwrap();
        tracker.record(1_000);
        tracker.record(250_000_000);

        assert_eq!(tracker.min(), 1_000);
        // 3 significant digits: within 0.1% of the recorded value
        assert!(tracker.max() >= 249_750_000);
        assert!(tracker.max() <= 250_250_000);
    }

    #[test]
    fn test_tracker_clamps_beyond_one_hour() {
        let mut tracker = LatencyTracker::new().unwrap();
        tracker.record(MAX_TRACKABLE_NS * 2);

        assert_eq!(tracker.count(), 1);
        assert!(tracker.max() >= MAX_TRACKABLE_NS / 1000 * 999);
        assert!(tracker.max() <= MAX_TRACKABLE_NS / 1000 * 1001);
    }

    #[test]
    fn test_tracker_json_names_operation() {
        let mut tracker = LatencyTracker::new().unwrap();
        tracker.record(500);

        let json: serde_json::Value = serde_json::from_str(&tracker.to_json("small")).unwrap();
        assert_eq!(json["operation"], "small");
        assert_eq!(json["count"], 1);
    }

    #[test]
    fn test_write_summary() {
        let mut tracker = LatencyTracker::new().unwrap();
        tracker.record(2000);

        let mut out = Vec::new();
        tracker.write_summary(&mut out, "medium").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("medium (1 runs):"));
        assert!(text.contains("p99"));
    }

    #[test_case(SizeVariant::Small, 5 ; "small")]
    #[test_case(SizeVariant::Medium, 2 ; "medium")]
    fn test_measure_runs_records_every_iteration(variant: SizeVariant, iterations: usize) {
        let tracker = measure_runs(&RunSpec::variant(variant), iterations).unwrap();
        assert_eq!(tracker.count(), iterations as u64);
    }
}
