//! Integration tests for the shoyaku CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn shoyaku() -> Command {
    Command::cargo_bin("shoyaku").unwrap()
}

#[test]
fn test_analyze_english_text() {
    shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("harbor.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("# tests/fixtures/harbor.txt"))
        .stdout(predicate::str::contains(
            "- The main reason for this growth was the new railway line",
        ))
        .stdout(predicate::str::contains(
            "- In conclusion, the railway reshaped the harbor town forever",
        ))
        .stdout(predicate::str::contains("## Chapter 1: harbor (pages 1-2)"))
        .stdout(predicate::str::contains("Harbor"))
        .stdout(predicate::str::contains("--- Page").not());
}

#[test]
fn test_analyze_japanese_text() {
    shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("neko.txt"))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"猫\""))
        .stdout(predicate::str::contains("猫が庭で静かに座っていました"));
}

#[test]
fn test_json_output() {
    let output = shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("harbor.txt"))
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &json[0];
    assert_eq!(report["source"], "tests/fixtures/harbor.txt");
    assert!(report["summary"]["brief"].is_string());
    assert_eq!(report["chapters"][0]["page_numbers"], serde_json::json!([1, 2]));
    assert!(report["chapters"][0]["word_count"].as_u64().unwrap() > 50);
    assert!(report["key_points"].as_array().unwrap().len() <= 10);
}

#[test]
fn test_json_document_input() {
    let output = shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("book.json"))
        .arg("-f")
        .arg("json")
        .arg("--threads")
        .arg("2")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let chapters = json[0]["chapters"].as_array().unwrap();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0]["title"], "Rivers");
    assert_eq!(chapters[1]["title"], "Deserts");
    assert_eq!(chapters[1]["main_topics"][0], "Sahara Desert");
    assert_eq!(json[0]["key_points"][0], "Thus rivers shape the land we live on");
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("harbor.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Key points:"));
    assert!(content.contains("Porto"));
}

#[test]
fn test_unreadable_input_leaves_no_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let broken = temp_dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    let output_file = temp_dir.path().join("report.json");

    shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("harbor.txt"))
        .arg("-i")
        .arg(&broken)
        .arg("-o")
        .arg(&output_file)
        .arg("-f")
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse document"));

    assert!(!output_file.exists());
}

#[test]
fn test_glob_pattern() {
    let output = shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-f")
        .arg("json")
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sources: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["source"].as_str().unwrap())
        .collect();
    assert_eq!(
        sources,
        vec!["tests/fixtures/harbor.txt", "tests/fixtures/neko.txt"]
    );
}

#[test]
fn test_sequential_matches_parallel() {
    let run = |extra: &[&str]| {
        shoyaku()
            .arg("analyze")
            .arg("-i")
            .arg(fixture_path("book.json"))
            .arg("-f")
            .arg("json")
            .args(extra)
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(&["--sequential"]), run(&["--threads", "3"]));
}

#[test]
fn test_invalid_file() {
    shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_glob_without_matches() {
    shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("*.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_zero_threads_rejected() {
    shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("harbor.txt"))
        .arg("--threads")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("threads must be greater than 0"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("shoyaku.toml");
    fs::write(
        &config_file,
        r#"
[analysis]
max_themes = 2

[output]
default_format = "json"
pretty_json = false
"#,
    )
    .unwrap();

    let output = shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("harbor.txt"))
        .arg("-c")
        .arg(&config_file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["themes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_extra_lexicon() {
    let output = shoyaku()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("harbor.txt"))
        .arg("-f")
        .arg("json")
        .arg("--lexicon")
        .arg(fixture_path("book-lexicon.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let themes: Vec<&str> = json[0]["themes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert!(!themes.contains(&"Harbor"));

    let key_points = json[0]["key_points"].to_string();
    assert!(key_points.contains("Fishermen still mend their nets"));

    let topics = json[0]["chapters"][0]["main_topics"].to_string();
    assert!(!topics.contains("\"Porto\""));
}

#[test]
fn test_validate_lexicon() {
    shoyaku()
        .arg("validate")
        .arg("-l")
        .arg(fixture_path("book-lexicon.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Lexicon is valid!"))
        .stdout(predicate::str::contains("Language code: en-harbor"))
        .stdout(predicate::str::contains("Lead-ins: 1"));
}

#[test]
fn test_validate_invalid_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("broken.toml");
    fs::write(&lexicon, "[metadata]\ncode = \"\"\nname = \"x\"\n").unwrap();

    shoyaku()
        .arg("validate")
        .arg("-l")
        .arg(&lexicon)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Lexicon is invalid!"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("custom.toml");

    shoyaku()
        .arg("generate-config")
        .arg("-l")
        .arg("xx")
        .arg("-o")
        .arg(&lexicon)
        .assert()
        .success();

    shoyaku()
        .arg("validate")
        .arg("-l")
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code: xx"));
}

#[test]
fn test_help_command() {
    shoyaku()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extractive summaries"));
}

#[test]
fn test_list_lexicons() {
    shoyaku()
        .arg("list")
        .arg("lexicons")
        .assert()
        .success()
        .stdout(predicate::str::contains("en - English"))
        .stdout(predicate::str::contains("ja - Japanese"));
}

#[test]
fn test_list_formats() {
    shoyaku()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}
