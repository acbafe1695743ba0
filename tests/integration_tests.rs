//! Integration tests for the pathsift CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn pathsift() -> Command {
    let mut cmd = Command::cargo_bin("pathsift").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// root/{notes.txt, data/, data/2023_raw.csv, data/2023_raw.tmp, data/2022.csv}
fn populate(root: &Path) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(root.join("notes.txt"), "notes").unwrap();
    fs::write(data.join("2023_raw.csv"), "a,b").unwrap();
    fs::write(data.join("2023_raw.tmp"), "tmp").unwrap();
    fs::write(data.join("2022.csv"), "a,b").unwrap();
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    dir
}

/// Index `dir/tree` into `dir/db.idx`
fn write_index(dir: &Path) -> PathBuf {
    let db = dir.join("db.idx");
    pathsift()
        .args(["--no-progress", "index"])
        .arg(dir.join("tree"))
        .arg("-o")
        .arg(&db)
        .assert()
        .success();
    db
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    pathsift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("index"))
        .stdout(predicate::str::contains("search"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    pathsift()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathsift"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    pathsift()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_index_prints_every_entry() {
    let dir = fixture();
    let root = dir.path().display().to_string();

    pathsift()
        .args(["--no-progress", "index"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{root}/notes.txt")))
        .stdout(predicate::str::contains(format!("{root}/data/2022.csv")))
        .stdout(predicate::str::contains(format!("{root}/data\n")));
}

#[test]
fn test_index_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    pathsift()
        .arg("index")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_index_to_file_and_reuse() {
    let work = TempDir::new().unwrap();
    populate(&work.path().join("tree"));
    let db = write_index(work.path());

    let contents = fs::read_to_string(&db).unwrap();
    assert_eq!(contents.lines().count(), 5);

    // A second run leaves the existing file alone
    fs::write(&db, "/kept\n").unwrap();
    write_index(work.path());
    assert_eq!(fs::read_to_string(&db).unwrap(), "/kept\n");
}

#[test]
fn test_search_with_all_passes() {
    let work = TempDir::new().unwrap();
    populate(&work.path().join("tree"));
    let db = write_index(work.path());

    pathsift()
        .args(["--no-progress", "search", "--db"])
        .arg(&db)
        .args(["-s", "2023", "-s", "/data/", "-i", ".csv", "-i", ".tmp", "-e", "_RAW.TMP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023_raw.csv"))
        .stdout(predicate::str::contains("2023_raw.tmp").not())
        .stdout(predicate::str::contains("2022.csv").not());
}

#[test]
fn test_search_case_sensitive_flag() {
    let dir = fixture();

    pathsift()
        .args(["--no-progress", "search", "--case-sensitive", "-s", "NOTES", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt").not());

    pathsift()
        .args(["--no-progress", "search", "-s", "NOTES", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"));
}

#[test]
fn test_search_framed_terms_anchor_to_path_end() {
    let dir = fixture();

    pathsift()
        .args(["--no-progress", "search", "-s", ".csv$", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2022.csv"))
        .stdout(predicate::str::contains("notes.txt").not());

    // Without framing the marker is just an absent character
    pathsift()
        .args(["--no-progress", "search", "--anchoring", "plain", "-s", ".csv$", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_search_requires_a_source() {
    pathsift()
        .args(["search", "-s", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--db"));
}

#[test]
fn test_search_empty_term_is_rejected() {
    let dir = fixture();
    pathsift()
        .args(["search", "-s", "", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_search_missing_index_fails() {
    let dir = TempDir::new().unwrap();
    pathsift()
        .args(["search", "-s", "x", "--db"])
        .arg(dir.path().join("nope.idx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_search_then_keep_files_to_output() {
    let dir = fixture();
    let out = TempDir::new().unwrap();
    let result = out.path().join("result.idx");

    pathsift()
        .args(["--no-progress", "search", "-s", "data", "--keep-class", "file", "-o"])
        .arg(&result)
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success();

    let lines: Vec<String> = fs::read_to_string(&result)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.contains("/data/")));
}

#[test]
fn test_class_drops_folders() {
    let work = TempDir::new().unwrap();
    populate(&work.path().join("tree"));
    let db = write_index(work.path());

    pathsift()
        .args(["--no-progress", "class"])
        .arg(&db)
        .arg("folder")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("/tree/data\n").not());
}

#[test]
fn test_class_invalid_kind_fails() {
    let work = TempDir::new().unwrap();
    populate(&work.path().join("tree"));
    let db = write_index(work.path());

    pathsift()
        .arg("class")
        .arg(&db)
        .arg("socket")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_find_glob() {
    let dir = fixture();
    pathsift()
        .args(["find", "**/*.csv", "--base"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2023_raw.csv"))
        .stdout(predicate::str::contains("2022.csv"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_dupes_reports_repeated_names() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("x")).unwrap();
    fs::create_dir_all(dir.path().join("y")).unwrap();
    fs::write(dir.path().join("x").join("a.txt"), "").unwrap();
    fs::write(dir.path().join("y").join("a.txt"), "").unwrap();
    fs::write(dir.path().join("x").join("b.txt"), "").unwrap();

    pathsift()
        .args(["--no-progress", "dupes", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt").not());
}

#[test]
fn test_sample_dry_run_then_apply() {
    let dir = fixture();
    let dest = TempDir::new().unwrap();
    let target = dest.path().join("mirror");

    pathsift()
        .args(["--no-progress", "sample"])
        .arg(dir.path())
        .arg(&target)
        .args(["-n", "100", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"));
    assert!(!target.exists());

    pathsift()
        .args(["--no-progress", "sample"])
        .arg(dir.path())
        .arg(&target)
        .args(["-n", "100", "--seed", "1", "--apply"])
        .assert()
        .success();
    assert!(target.join("data").join("2022.csv").is_file());
    assert!(target.join("notes.txt").is_file());
}

#[test]
fn test_config_show_formats() {
    let dir = TempDir::new().unwrap();

    pathsift()
        .current_dir(dir.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"anchoring\": \"framed\""));

    pathsift()
        .current_dir(dir.path())
        .env("PATHSIFT_SEARCH__ANCHORING", "plain")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anchoring = \"plain\""));

    pathsift()
        .current_dir(dir.path())
        .args(["config", "show", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn test_repository_config_is_picked_up() {
    let dir = fixture();
    fs::write(
        dir.path().join("pathsift.toml"),
        "[search]\ncase_sensitive = true\n",
    )
    .unwrap();

    pathsift()
        .current_dir(dir.path())
        .args(["--no-progress", "search", "-s", "NOTES", "--root", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_config_show_section() {
    let dir = TempDir::new().unwrap();

    pathsift()
        .current_dir(dir.path())
        .args(["config", "show", "--section", "search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anchoring = \"framed\""))
        .stdout(predicate::str::contains("[sample]").not());

    pathsift()
        .current_dir(dir.path())
        .args(["config", "show", "--section", "sample.count"])
        .assert()
        .success()
        .stdout("1000\n");

    pathsift()
        .current_dir(dir.path())
        .args(["config", "show", "--section", "search.missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key 'search.missing' not found"));
}

#[test]
fn test_search_writes_output_file() {
    let work = TempDir::new().unwrap();
    populate(&work.path().join("tree"));
    let db = write_index(work.path());
    let result = work.path().join("result.idx");

    pathsift()
        .args(["--no-progress", "search", "-s", ".csv", "--db"])
        .arg(&db)
        .arg("-o")
        .arg(&result)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote 2 paths"));

    let written = fs::read_to_string(&result).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.lines().all(|line| line.ends_with(".csv")));
}
