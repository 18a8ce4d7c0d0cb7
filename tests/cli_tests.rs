//! End-to-end tests for the giftai binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, locale: &str, error_rate: f64) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            "locale = \"{}\"\n[simulator]\nmin_delay_ms = 0\nmax_delay_ms = 5\nerror_rate = {:?}\n",
            locale, error_rate
        ),
    )
    .unwrap();
    path
}

fn write_config_without_locale(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, "[simulator]\nmin_delay_ms = 0\nmax_delay_ms = 5\nerror_rate = 0.0\n").unwrap();
    path
}

fn giftai(config: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("giftai").unwrap();
    cmd.env_remove("LC_ALL").env_remove("LANG");
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_suggest_prints_three_ranked_lines() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "en", 0.0);

    let output = giftai(&config)
        .args(["suggest", "--tone", "funny", "--to", "Sam", "--no-errors"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("1. ") && lines[0].ends_with("(0.95)"));
    assert!(lines[1].starts_with("2. ") && lines[1].ends_with("(0.90)"));
    assert!(lines[2].starts_with("3. ") && lines[2].ends_with("(0.85)"));
}

#[test]
fn test_suggest_json_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "ja", 0.0);

    let output = giftai(&config)
        .args(["suggest", "--tone", "unknown-tone", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let batch: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(batch["tone"], "emotional");
    assert_eq!(batch["locale"], "ja");
    assert_eq!(batch["suggestions"].as_array().unwrap().len(), 3);
    assert!(batch["generated_at"].is_string());
}

#[test]
fn test_suggest_fails_when_every_request_errors() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "en", 1.0);

    let output = giftai(&config)
        .args(["suggest", "--tone", "formal"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let catalog = [
        "⏰ Timeout: the server took too long to respond",
        "🔧 Server error: please try again later",
        "⚠️ Rate limited: please wait a moment",
    ];
    assert!(catalog.contains(&stderr.trim_end()), "stderr: {:?}", stderr);
    assert!(!stderr.contains("Location"));
    assert!(!stderr.contains("BACKTRACE"));
}

#[test]
fn test_no_errors_flag_bypasses_injection() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "en", 1.0);

    giftai(&config)
        .args(["suggest", "--no-errors"])
        .assert()
        .success();
}

#[test]
fn test_locale_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "ja", 0.0);

    giftai(&config)
        .args(["--locale", "en-US", "fallback", "--tone", "funny"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for always making me laugh"));
}

#[test]
fn test_error_command_prints_catalog_entry() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "ja", 0.0);

    giftai(&config)
        .arg("error")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("タイムアウト")
                .or(predicate::str::contains("サーバーエラー"))
                .or(predicate::str::contains("リクエスト制限")),
        );
}

#[test]
fn test_locales_marks_current() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "vi", 0.0);

    giftai(&config)
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("* 🇻🇳 vi  Tiếng Việt"))
        .stdout(predicate::str::contains("日本語"));
}

#[test]
fn test_malformed_config_warns_and_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "locale = [").unwrap();

    giftai(&path)
        .arg("locales")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("* 🇯🇵 ja"));
}

#[test]
fn test_invalid_simulator_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[simulator]\nmin_delay_ms = 10\nmax_delay_ms = 10\n").unwrap();

    giftai(&path)
        .arg("error")
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_delay_ms"));
}

#[test]
fn test_lang_environment_picks_locale_when_config_has_none() {
    let dir = TempDir::new().unwrap();
    let config = write_config_without_locale(&dir);

    giftai(&config)
        .env("LANG", "en_US.UTF-8")
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("* 🇺🇸 en  English"));

    giftai(&config)
        .env("LANG", "vi_VN.UTF-8")
        .args(["fallback", "--tone", "funny"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cảm ơn vì luôn làm mình cười"));
}

#[test]
fn test_lc_all_overrides_lang() {
    let dir = TempDir::new().unwrap();
    let config = write_config_without_locale(&dir);

    giftai(&config)
        .env("LANG", "en_US.UTF-8")
        .env("LC_ALL", "vi_VN.UTF-8")
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("* 🇻🇳 vi"));
}

#[test]
fn test_config_locale_beats_lang_environment() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "ja", 0.0);

    giftai(&config)
        .env("LANG", "en_US.UTF-8")
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("* 🇯🇵 ja"));
}

#[test]
fn test_invalid_simulator_config_does_not_affect_other_commands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "locale = \"en\"\n[simulator]\nerror_rate = 2.0\n").unwrap();

    giftai(&path)
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("* 🇺🇸 en"));

    giftai(&path)
        .args(["fallback", "--tone", "formal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wishing you the very best of health"));
}
