//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn json_stdout(output: &std::process::Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("dedup"))
        .stdout(predicate::str::contains("RESOLUTE_LOG_PATH"));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("lint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// =============================================================================
// Info
// =============================================================================

#[test]
fn info_json_contains_expected_fields() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["rate_limit"].is_object());
}

#[test]
fn global_flags_accepted() {
    cmd()
        .args(["-q", "--color", "never", "info"])
        .assert()
        .success();
    cmd().args(["-vv", "info"]).assert().success();
}

// =============================================================================
// Dedup
// =============================================================================

#[test]
fn dedup_keeps_first_of_similar_candidates() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("candidates.txt");
    fs::write(
        &input,
        "Read more books\nRead books more often\nExercise daily\n",
    )
    .unwrap();

    cmd()
        .args(["dedup", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("Read more books\nExercise daily\n"));
}

#[test]
fn dedup_drops_candidates_similar_to_seeds() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("candidates.txt");
    fs::write(&input, "Save more money each month\nAdopt a cat\n").unwrap();
    let seeds = tmp.path().join("seeds.txt");
    fs::write(&seeds, "Save more money\n").unwrap();

    cmd()
        .args([
            "dedup",
            input.to_str().unwrap(),
            "--seeds",
            seeds.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("Adopt a cat\n"));
}

#[test]
fn dedup_drops_malformed_candidates() {
    cmd()
        .args(["dedup", "-"])
        .write_stdin("#$%^&*()\nLearn to paint\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("Learn to paint\n"));
}

#[test]
fn dedup_raw_input_uses_block_before_separator() {
    let output = cmd()
        .args(["--json", "dedup", "--raw", "-", "--seed", "Go outside more"])
        .write_stdin("\n- Learn Spanish\n- Visit Japan\n-----\n- Learn Spanish again\n")
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["kept"], serde_json::json!(["Learn Spanish", "Visit Japan"]));
    assert_eq!(json["candidates"].as_array().unwrap().len(), 2);
    assert_eq!(json["seeds"].as_array().unwrap().len(), 1);
}

#[test]
fn dedup_raw_input_without_separator_keeps_nothing() {
    let output = cmd()
        .args(["--json", "dedup", "--raw", "-"])
        .write_stdin("- Learn Spanish\n- Visit Japan\n")
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["kept"], serde_json::json!([]));
}

#[test]
fn dedup_caps_candidates() {
    let input: String = [
        "Learn Spanish",
        "Adopt a cat",
        "Visit Japan",
        "Plant a garden",
        "Bake bread",
        "Paint a portrait",
        "Climb a mountain",
        "Knit a scarf",
        "Write a novel",
        "Build a birdhouse",
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect();

    let output = cmd()
        .args(["--json", "dedup", "-"])
        .write_stdin(input)
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert!(json["kept"].as_array().unwrap().len() <= 6);
    assert_eq!(json["truncated"], 4);
}

#[test]
fn dedup_explain_names_the_duplicate_source() {
    cmd()
        .args(["dedup", "-", "--explain"])
        .write_stdin("Read more books\nRead books more often\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(\"Read more books\") Read books more often"))
        .stdout(predicate::str::contains("kept"));
}

#[test]
fn dedup_missing_input_fails() {
    cmd()
        .args(["dedup", "/nonexistent/candidates.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/candidates.txt"));
}

#[test]
fn dedup_respects_input_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resolute.toml"), "max_input_bytes = 8\n").unwrap();
    let input = tmp.path().join("candidates.txt");
    fs::write(&input, "Read more books\n").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "dedup",
            "candidates.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Normalize & Similarity
// =============================================================================

#[test]
fn normalize_prints_stems() {
    let output = cmd()
        .args(["--json", "normalize", "Save more money", "Read more books"])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json[0]["phrase"], "Save more money");
    assert_eq!(json[0]["normalized"], "money");
    assert_eq!(json[1]["normalized"], "book");
}

#[test]
fn normalize_requires_a_phrase() {
    cmd().arg("normalize").assert().failure();
}

#[test]
fn similarity_reports_duplicate() {
    let output = cmd()
        .args(["--json", "similarity", "Read more books", "Read books more often"])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["first"], "book");
    assert_eq!(json["second"], "book often");
    assert_eq!(json["duplicate"], true);
    assert_eq!(json["threshold"], 0.8);
}

#[test]
fn similarity_literal_skips_normalization() {
    let output = cmd()
        .args(["--json", "similarity", "--literal", "money", "money"])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["score"], 1.0);
}

// =============================================================================
// Next Steps & Prompts
// =============================================================================

#[test]
fn next_steps_filters_punctuation_only() {
    let output = cmd()
        .args(["--json", "next-steps", "--raw", "-"])
        .write_stdin("\n- Create a budget\n- $$$ ### !!!\n- Create a budget for the year\n-----")
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(
        json["steps"],
        serde_json::json!(["Create a budget", "Create a budget for the year"])
    );
    assert_eq!(json["dropped"], 1);
}

#[test]
fn prompt_next_steps_ends_with_goal() {
    cmd()
        .args(["prompt", "next-steps", "Learn to cook"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Goal: Learn to cook\nSteps to take:\n"));
}

#[test]
fn prompt_resolutions_reports_temperature() {
    let output = cmd()
        .args(["--json", "prompt", "resolutions", "Save more money"])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["temperature"], 0.8);
    assert!(
        json["prompt"]
            .as_str()
            .unwrap()
            .ends_with("similar to \"Save more money\":")
    );
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
