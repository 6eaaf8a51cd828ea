//! Integration tests for CLI commands.
//!
//! Runs the binary end-to-end and checks the outcome line, the JSON reports
//! and the exit status.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sortcheck(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sortcheck").unwrap();
    cmd.arg("--config-dir")
        .arg(config_dir.path())
        .arg("--no-color")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Calibrated Variants
// ============================================================================

#[cfg(not(any(feature = "canary-skip-sort", feature = "canary-off-by-one")))]
mod variants {
    use super::*;

    #[test]
    fn small_prints_every_value() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .arg("small")
            .assert()
            .success()
            .stdout("Sort Succeeded! 0 1 2 3 4 5 6 7 8 9\n");
    }

    #[test]
    fn medium_prints_the_tail() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .arg("medium")
            .assert()
            .success()
            .stdout("Sort Succeeded! ... 995 996 997 998 999\n");
    }

    #[test]
    fn large_prints_headline_only() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .arg("large")
            .assert()
            .success()
            .stdout("Sort Succeeded!\n");
    }

    #[test]
    fn large_with_adjacent_algorithm_from_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sortcheck.toml"),
            "[run]\nalgorithm = \"adjacent\"\n",
        )
        .unwrap();

        let json = stdout_json(sortcheck(&temp).args(["--format", "json", "large"]));
        assert_eq!(json["algorithm"], "adjacent-exchange");
        assert_eq!(json["status"], "success");
    }

    // ========================================================================
    // Arbitrary Sizes
    // ========================================================================

    #[test]
    fn run_single_element() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .args(["run", "1", "--sample", "all"])
            .assert()
            .success()
            .stdout("Sort Succeeded! 0\n");
    }

    #[test]
    fn run_defaults_to_headline_only() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .args(["run", "37"])
            .assert()
            .success()
            .stdout("Sort Succeeded!\n");
    }

    #[test]
    fn run_anchored_with_tail_sample() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .args(["run", "300", "--algorithm", "anchored", "--sample", "tail:3"])
            .assert()
            .success()
            .stdout("Sort Succeeded! ... 297 298 299\n");
    }

    #[test]
    fn run_tail_covering_whole_sequence_has_no_ellipsis() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .args(["run", "3", "--sample", "tail:5"])
            .assert()
            .success()
            .stdout("Sort Succeeded! 0 1 2\n");
    }

    // ========================================================================
    // JSON Output
    // ========================================================================

    #[test]
    fn small_json_report() {
        let temp = TempDir::new().unwrap();

        let json = stdout_json(sortcheck(&temp).args(["--format", "json", "small"]));

        assert_eq!(json["variant"], "small");
        assert_eq!(json["size"], 10);
        assert_eq!(json["status"], "success");
        assert_eq!(json["footprint_bytes"], 40);
        assert_eq!(json["sample"], serde_json::json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
    }

    #[test]
    fn run_json_report_has_no_variant() {
        let temp = TempDir::new().unwrap();

        let json = stdout_json(sortcheck(&temp).args(["run", "64", "--format", "json"]));

        assert!(json.get("variant").is_none());
        assert_eq!(json["size"], 64);
        assert_eq!(json["footprint_bytes"], 256);
    }

    #[test]
    fn format_from_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sortcheck.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let json = stdout_json(sortcheck(&temp).arg("medium"));
        assert_eq!(json["variant"], "medium");
        assert_eq!(json["sample"], serde_json::json!([995, 996, 997, 998, 999]));
    }

    #[test]
    fn cli_format_overrides_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sortcheck.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        sortcheck(&temp)
            .args(["--format", "text", "small"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Sort Succeeded!"));
    }

    // ========================================================================
    // Batch
    // ========================================================================

    #[test]
    fn all_runs_every_variant() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .arg("all")
            .assert()
            .success()
            .stdout(predicate::str::contains("Sort Succeeded! 0 1 2 3 4 5 6 7 8 9"))
            .stdout(predicate::str::contains("Sort Succeeded! ... 995 996 997 998 999"))
            .stdout(predicate::str::contains("8192"))
            .stdout(predicate::str::contains("All 3 runs verified"));
    }

    #[test]
    fn all_respects_configured_variants() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sortcheck.toml"),
            "[run]\nvariants = [\"small\"]\n",
        )
        .unwrap();

        let json = stdout_json(sortcheck(&temp).args(["--format", "json", "all"]));
        let runs = json["runs"].as_array().unwrap();

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0]["variant"], "small");
    }

    #[test]
    fn local_config_overrides_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sortcheck.toml"),
            "[run]\nvariants = [\"small\"]\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("sortcheck.local.toml"),
            "[run]\nvariants = [\"medium\", \"small\"]\n",
        )
        .unwrap();

        let json = stdout_json(sortcheck(&temp).args(["--format", "json", "all"]));
        let runs = json["runs"].as_array().unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["variant"], "medium");
        assert_eq!(runs[1]["variant"], "small");
    }

    // ========================================================================
    // Environment Overrides
    // ========================================================================

    #[test]
    fn env_variants_set_batch_order() {
        let temp = TempDir::new().unwrap();

        let json = stdout_json(
            sortcheck(&temp)
                .env("SORTCHECK_RUN_VARIANTS", "large,small")
                .args(["--format", "json", "all"]),
        );
        let runs = json["runs"].as_array().unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["variant"], "large");
        assert_eq!(runs[1]["variant"], "small");
    }

    #[test]
    fn env_format_overrides_local_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sortcheck.local.toml"),
            "[output]\nformat = \"text\"\n",
        )
        .unwrap();

        let json = stdout_json(
            sortcheck(&temp)
                .env("SORTCHECK_OUTPUT_FORMAT", "json")
                .arg("small"),
        );
        assert_eq!(json["variant"], "small");
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn cli_format_overrides_env() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .env("SORTCHECK_OUTPUT_FORMAT", "json")
            .args(["--format", "text", "small"])
            .assert()
            .success()
            .stdout("Sort Succeeded! 0 1 2 3 4 5 6 7 8 9\n");
    }

    #[test]
    fn verbose_logs_go_to_stderr() {
        let temp = TempDir::new().unwrap();

        sortcheck(&temp)
            .args(["-v", "small"])
            .assert()
            .success()
            .stdout("Sort Succeeded! 0 1 2 3 4 5 6 7 8 9\n")
            .stderr(predicate::str::contains("sort verified"));
    }
}

// ============================================================================
// Canary Builds
// ============================================================================

#[cfg(feature = "canary-off-by-one")]
#[test]
fn off_by_one_canary_fails_verification() {
    let temp = TempDir::new().unwrap();

    sortcheck(&temp)
        .arg("small")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("***Sort Failed***"));
}

#[cfg(feature = "canary-skip-sort")]
#[test]
fn skip_sort_canary_fails_verification() {
    let temp = TempDir::new().unwrap();

    sortcheck(&temp)
        .args(["--format", "json", "run", "4"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"status\":\"failure\""))
        .stdout(predicate::str::contains("\"index\":0"));
}

// ============================================================================
// Config Commands
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let temp = TempDir::new().unwrap();

    sortcheck(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[run]"))
        .stdout(predicate::str::contains("variant-default"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn config_show_reflects_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("sortcheck.toml"),
        "[run]\nalgorithm = \"anchored\"\n",
    )
    .unwrap();

    sortcheck(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm = \"anchored\""));
}

#[test]
fn config_validate_accepts_defaults() {
    let temp = TempDir::new().unwrap();

    sortcheck(&temp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_names_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sortcheck.toml"), "[run]\nvariants = [\"small\"]\n").unwrap();

    sortcheck(&temp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sortcheck.toml"))
        .stdout(predicate::str::contains("Variants: small"));
}

#[test]
fn config_validate_without_project_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    sortcheck(&temp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"));
}

#[test]
fn config_validate_rejects_empty_variants() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sortcheck.toml"), "[run]\nvariants = []\n").unwrap();

    sortcheck(&temp)
        .args(["config", "validate"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least one variant"));
}

#[test]
fn unknown_variant_in_config_fails_runs() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("sortcheck.toml"),
        "[run]\nvariants = [\"huge\"]\n",
    )
    .unwrap();

    sortcheck(&temp).arg("all").assert().failure().code(2);
}
