//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from any user or working-directory config.
fn spine_age(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("spine-age").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("SPINE_AGE_LOG_DIR")
        .env_remove("SPINE_AGE_POLICY")
        .env_remove("RUST_LOG");
    cmd
}

const ALL_A: &str = "AAAAAAAAAAA";
const ALL_C: &str = "CCCCCCCCCCC";

#[test]
fn help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assess"))
        .stdout(predicate::str::contains("questions"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spine-age"));
}

#[test]
fn questions_lists_catalog() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core and Posture"))
        .stdout(predicate::str::contains("Strength and Balance"))
        .stdout(predicate::str::contains("Recovery and Lifestyle"))
        .stdout(predicate::str::contains("11 questions, total score 0-22"));
}

#[test]
fn perfect_answers_at_thirty() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your estimated functional spine age: 16 years",
        ))
        .stdout(predicate::str::contains(
            "aging better than your body by 14 years",
        ))
        .stdout(predicate::str::contains("6 / 6"))
        .stdout(predicate::str::contains("Excellent"));
}

#[test]
fn worst_answers_as_a_teenager() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .args(["assess", "--age", "15", "--answers", ALL_C])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your estimated functional spine age: 22 years",
        ))
        .stdout(predicate::str::contains("Needs attention"));
}

#[test]
fn classic_policy_from_flag() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .args([
            "assess", "--age", "40", "--answers", ALL_C, "--policy", "classic",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your estimated functional spine age: 65 years",
        ));
}

#[test]
fn json_output() {
    let tmp = TempDir::new().unwrap();
    let output = spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["spine_age"], 16);
    assert_eq!(value["result"]["total_score"], 22);
    assert_eq!(value["result"]["category_scores"]["Core and Posture"], 6);
    assert_eq!(value["interpretation"]["chart"]["y_max"], 10);
}

#[test]
fn age_out_of_range_is_rejected() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .args(["assess", "--age", "5", "--answers", ALL_A])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--age"));

    spine_age(tmp.path())
        .args(["assess", "--age", "101", "--answers", ALL_A])
        .assert()
        .failure();
}

#[test]
fn wrong_answer_count_fails() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", "AAB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 11 answers, got 3"));
}

#[test]
fn unknown_answer_label_fails() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", "AAAAAAAAAAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown answer label"));
}

#[test]
fn two_submissions_append_two_lines() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");

    for answers in [ALL_A, ALL_C] {
        spine_age(tmp.path())
            .args(["assess", "--age", "30", "--email", "a@b.com", "--answers", answers])
            .arg("--log-dir")
            .arg(&logs)
            .assert()
            .success()
            .stdout(predicate::str::contains("Progress saved for: a@b.com"));
    }

    let log = std::fs::read_to_string(logs.join("user_progress_a_at_b.com.txt")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("| Age: 30 | Spine Age: 16 | Scores: {\"Core and Posture\":6,"));
    assert!(lines[1].contains("| Age: 30 | Spine Age: 60 | Scores: {\"Core and Posture\":0,"));

    spine_age(tmp.path())
        .args(["history", "--email", "a@b.com"])
        .arg("--log-dir")
        .arg(&logs)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 submission(s) for a@b.com"));
}

#[test]
fn no_email_writes_no_log() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A])
        .arg("--log-dir")
        .arg(&logs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress saved").not());
    assert!(!logs.exists());
}

#[test]
fn history_without_records() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .args(["history", "--email", "nobody@example.com"])
        .arg("--log-dir")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No progress recorded"));
}

#[test]
fn report_writes_pdf() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("reports");
    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A, "--report"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to:"));

    let bytes = std::fs::read(out.join("Spine_Age_Report.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Estimated Spine Age: 16 years"));
    assert!(!out.join("Spine_Age_Report.html").exists());
}

#[test]
fn report_all_formats_from_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("spine-age.toml"),
        "output_dir = \"out\"\nformat = \"all\"\n",
    )
    .unwrap();

    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A, "--report"])
        .assert()
        .success();

    assert!(tmp.path().join("out/Spine_Age_Report.pdf").exists());
    let html = std::fs::read_to_string(tmp.path().join("out/Spine_Age_Report.html")).unwrap();
    assert!(html.contains("<svg"));
}

#[test]
fn init_creates_config_once() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created spine-age.toml"));
    assert!(tmp.path().join("spine-age.toml").exists());

    spine_age(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.toml");
    std::fs::write(&path, "policy = \"sideways\"\n").unwrap();
    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A, "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn interactive_json_keeps_stdout_parseable() {
    let tmp = TempDir::new().unwrap();
    let output = spine_age(tmp.path())
        .args(["assess", "--json"])
        .write_stdin("\n30\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["actual_age"], 30);
    assert_eq!(value["result"]["spine_age"], 16);

    let prompts = String::from_utf8_lossy(&output.stderr);
    assert!(prompts.contains("Email to save your progress"));
    assert!(prompts.contains("### Core and Posture"));
}

#[test]
fn interactive_text_prompts_on_stdout() {
    let tmp = TempDir::new().unwrap();
    spine_age(tmp.path())
        .arg("assess")
        .write_stdin("\n30\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your actual age in years"))
        .stdout(predicate::str::contains(
            "Your estimated functional spine age: 24 years",
        ));
}

#[test]
fn failed_report_keeps_result_and_progress() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let logs = tmp.path().join("logs");

    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A, "--report"])
        .args(["--email", "a@b.com"])
        .arg("--output")
        .arg(&blocker)
        .arg("--log-dir")
        .arg(&logs)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Your estimated functional spine age: 16 years",
        ))
        .stdout(predicate::str::contains("Progress saved for: a@b.com"))
        .stderr(predicate::str::contains("Report export failed"))
        .stderr(predicate::str::contains("Error: 1 export action(s) failed"));

    let log = std::fs::read_to_string(logs.join("user_progress_a_at_b.com.txt")).unwrap();
    assert_eq!(log.lines().count(), 1);
}

#[test]
fn email_with_path_separator_is_not_logged() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");

    spine_age(tmp.path())
        .args(["assess", "--age", "30", "--answers", ALL_A])
        .args(["--email", "x/../y@z"])
        .arg("--log-dir")
        .arg(&logs)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Your estimated functional spine age: 16 years",
        ))
        .stderr(predicate::str::contains("must not contain a path separator"));

    assert!(!logs.exists());
    assert!(!tmp.path().join("user_progress_y_at_z.txt").exists());
}
