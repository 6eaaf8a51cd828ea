//! Sort run commands: one variant, one arbitrary size, or the whole batch.

use anyhow::Result;
use sortcheck::{
    BatchReport, RunReport, RunSpec, SamplePolicy, SizeVariant, SortAlgorithm, SortSize,
    SortedArrayVerifier, any_canary_enabled, enabled_canaries,
};
use sortcheck_config::OutputFormat;
use tracing::warn;

use super::{RunStatus, Settings};
use crate::style::{self, colors::SemanticStyle};

/// Runs one calibrated variant.
pub fn variant(settings: &Settings, variant: SizeVariant) -> Result<RunStatus> {
    warn_if_canary();

    let spec = RunSpec::variant(variant)
        .with_algorithm(settings.config.run.algorithm.resolve(variant));
    let report = SortedArrayVerifier::new().run(&spec);

    print_report(settings, &report)?;
    Ok(status_of(report.outcome.is_success()))
}

/// Runs an arbitrary size. Sizes of zero or below are contract violations.
pub fn sized(
    settings: &Settings,
    size: i64,
    algorithm: SortAlgorithm,
    sample: SamplePolicy,
) -> Result<RunStatus> {
    warn_if_canary();

    let size = SortSize::try_from(size).inspect_err(|e| {
        warn!(size, error = %e, "rejected sort size");
    })?;
    let spec = RunSpec::sized(size)
        .with_algorithm(algorithm)
        .with_sample(sample);
    let report = SortedArrayVerifier::new().run(&spec);

    print_report(settings, &report)?;
    Ok(status_of(report.outcome.is_success()))
}

/// Runs every configured variant in order.
pub fn all(settings: &Settings) -> Result<RunStatus> {
    warn_if_canary();

    let algorithm = settings.config.run.algorithm;
    let specs: Vec<RunSpec> = settings
        .config
        .run
        .variants
        .iter()
        .map(|&variant| RunSpec::variant(variant).with_algorithm(algorithm.resolve(variant)))
        .collect();

    let batch = SortedArrayVerifier::new().run_all(&specs);

    match settings.format() {
        OutputFormat::Json => println!("{}", batch.to_json()?),
        OutputFormat::Text => {
            for report in &batch.runs {
                println!("{}", styled_line(report));
            }
            style::print_spacer();
            style::print_batch_table(&batch);
            print_batch_summary(&batch);
        }
    }

    Ok(status_of(batch.all_passed()))
}

fn print_report(settings: &Settings, report: &RunReport) -> Result<()> {
    match settings.format() {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", styled_line(report)),
    }
    Ok(())
}

/// The outcome line with only the headline colored.
fn styled_line(report: &RunReport) -> String {
    let line = report.line();
    let headline = report.headline();
    let rest = &line[headline.len()..];

    if report.outcome.is_success() {
        format!("{}{rest}", headline.success())
    } else {
        format!("{}{rest}", headline.error())
    }
}

fn print_batch_summary(batch: &BatchReport) {
    if batch.all_passed() {
        style::print_success(&format!("All {} runs verified", batch.runs.len()));
    } else {
        style::print_error(&format!(
            "{} verified, {} failed",
            batch.successes(),
            batch.failures()
        ));
    }
}

fn warn_if_canary() {
    if any_canary_enabled() {
        let canaries = enabled_canaries().join(", ");
        warn!(%canaries, "canary mutations enabled");
        style::print_warn(&format!("canary build ({canaries}): runs are expected to fail"));
    }
}

fn status_of(passed: bool) -> RunStatus {
    if passed {
        RunStatus::Passed
    } else {
        RunStatus::Failed
    }
}
