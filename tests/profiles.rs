//! Tests for profile persistence through the CLI (non-interactive paths only).

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;

fn run_with_config(config: &std::path::Path, args: &[&str]) -> (bool, String) {
    let mut cmd = Command::cargo_bin("polltop").expect("binary built");
    let output = cmd
        .env("XDG_CONFIG_HOME", config)
        .args(args)
        .output()
        .expect("run polltop");
    let ok = output.status.success();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (ok, text)
}

fn profiles_path(config: &std::path::Path) -> PathBuf {
    config.join("polltop").join("profiles.json")
}

#[test]
fn profile_created_on_first_use() {
    let td = tempfile::tempdir().unwrap();
    let (_ok, _out) = run_with_config(
        td.path(),
        &["--profile", "unittest", "http://example:5000/data", "--dry-run"],
    );
    let data = fs::read_to_string(profiles_path(td.path())).expect("profiles.json created");
    assert!(data.contains("unittest"), "profiles.json missing profile entry: {data}");
    assert!(data.contains("http://example:5000/data"), "{data}");
}

#[test]
fn profile_overwrite_only_when_changed() {
    let td = tempfile::tempdir().unwrap();
    run_with_config(td.path(), &["--profile", "prod", "http://one:5000/data", "--dry-run"]);
    let first = fs::read_to_string(profiles_path(td.path())).unwrap();

    // Identical re-run must not duplicate or corrupt
    run_with_config(td.path(), &["--profile", "prod", "http://one:5000/data", "--dry-run"]);
    let second = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert_eq!(first, second, "profile file changed despite identical input");

    // Different URL with --save overwrites without prompting
    run_with_config(
        td.path(),
        &["--profile", "prod", "--save", "http://two:5000/data", "--dry-run"],
    );
    let third = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(third.contains("two"), "updated URL not written: {third}");
}

#[test]
fn profile_interval_persisted() {
    let td = tempfile::tempdir().unwrap();
    run_with_config(
        td.path(),
        &["--profile", "lab", "-i", "5", "http://lab:5000/data", "--dry-run"],
    );
    let data = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(data.contains("lab"));
    assert!(data.contains("interval_secs"), "{data}");
    assert!(data.contains('5'), "{data}");
}
