//! Behavioural properties of the three-pass filter and the class filter

use pathsift::filter::{FilterRequest, filter, filter_by_class};
use pathsift::index::{IndexOutcome, IndexRequest, PathSet, build_index};
use pathsift::matcher::{Anchoring, TermSet};
use pathsift::progress::SilentProgress;
use std::fs;
use tempfile::TempDir;

fn index(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

fn set(paths: &[&str]) -> PathSet {
    paths.iter().map(|p| p.to_string()).collect()
}

fn sample_index() -> Vec<String> {
    index(&[
        "/data/raw/2023/a.csv",
        "/data/raw/2023/b.tmp",
        "/data/raw/2022/a.csv",
        "/data/clean/2023/a.csv",
        "/home/user/notes.txt",
        "/home/user/Notes.TXT",
    ])
}

fn run(paths: Vec<String>, request: &FilterRequest) -> PathSet {
    filter(paths, request, &SilentProgress).unwrap()
}

#[test]
fn test_filtering_is_idempotent() {
    let request = FilterRequest::new()
        .with_search(TermSet::new(["/raw/"]))
        .with_include(TermSet::new(["2023", ".csv"]))
        .with_exclude(TermSet::new([".tmp"]));

    let once = run(sample_index(), &request);
    let twice = run(once.iter().cloned().collect(), &request);
    assert_eq!(once, twice);
}

#[test]
fn test_include_and_exclude_ignore_term_order() {
    let forward = FilterRequest::new()
        .with_include(TermSet::new(["2022", "notes", "clean"]))
        .with_exclude(TermSet::new([".tmp", "notes.txt"]));
    let backward = FilterRequest::new()
        .with_include(TermSet::new(["clean", "notes", "2022"]))
        .with_exclude(TermSet::new(["notes.txt", ".tmp"]));

    assert_eq!(run(sample_index(), &forward), run(sample_index(), &backward));
}

#[test]
fn test_each_pass_runs_independently() {
    let terms = TermSet::new(["2023"]);

    let alone = run(sample_index(), &FilterRequest::new().with_search(terms.clone()));
    assert_eq!(
        alone,
        set(&["/data/raw/2023/a.csv", "/data/raw/2023/b.tmp", "/data/clean/2023/a.csv"])
    );

    let include = run(sample_index(), &FilterRequest::new().with_include(terms.clone()));
    assert_eq!(include, alone);

    let exclude = run(sample_index(), &FilterRequest::new().with_exclude(terms));
    let expected: PathSet = sample_index()
        .into_iter()
        .filter(|p| !alone.contains(p))
        .collect();
    assert_eq!(exclude, expected);
}

#[test]
fn test_empty_term_sets_are_identity() {
    let input = index(&["  /x/a.txt  ", "/x/b.txt", "", "/y/a.txt\t"]);
    let result = run(input, &FilterRequest::new());
    assert_eq!(result, set(&["/x/a.txt", "/x/b.txt", "/y/a.txt"]));
}

#[test]
fn test_case_sensitivity_controls_matching() {
    let request = FilterRequest::new().with_search(TermSet::single("b.txt"));
    assert_eq!(run(index(&["/A/B.txt"]), &request), set(&["/A/B.txt"]));

    let strict = request.case_sensitive(true);
    assert!(run(index(&["/A/B.txt"]), &strict).is_empty());
}

#[test]
fn test_scenario_require_all() {
    let request = FilterRequest::new().with_search(TermSet::single("a.txt"));
    let result = run(index(&["/x/a.txt", "/x/b.txt", "/y/a.txt"]), &request);
    assert_eq!(result, set(&["/x/a.txt", "/y/a.txt"]));
}

#[test]
fn test_scenario_include_then_exclude() {
    let request = FilterRequest::new()
        .with_include(TermSet::single("/x"))
        .with_exclude(TermSet::single("b.txt"));
    let result = run(index(&["/x/a.txt", "/x/b.txt", "/y/a.txt"]), &request);
    assert_eq!(result, set(&["/x/a.txt"]));
}

#[test]
fn test_framed_terms_anchor_at_path_boundaries() {
    let request = FilterRequest::new().with_search(TermSet::single("^/home/"));
    let result = run(index(&["/home/a", "/srv/home/b"]), &request);
    assert_eq!(result, set(&["/home/a"]));

    let plain = request.anchoring(Anchoring::Plain);
    assert!(run(index(&["/home/a", "/srv/home/b"]), &plain).is_empty());
}

#[test]
fn test_scenario_index_one_file_and_nested_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("top.txt"), "").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("nested.txt"), "").unwrap();

    let outcome = build_index(&IndexRequest::new(vec![dir.path().to_path_buf()]), &SilentProgress).unwrap();
    let IndexOutcome::InMemory(entries) = outcome else {
        panic!("expected an in-memory index");
    };
    assert_eq!(entries.len(), 3);

    let root = dir.path().to_str().unwrap();
    let expected: PathSet = ["sub", "top.txt", "sub/nested.txt"]
        .iter()
        .map(|rel| format!("{root}/{rel}"))
        .collect();
    assert_eq!(entries.into_iter().collect::<PathSet>(), expected);
}

#[test]
fn test_scenario_dropping_folders_leaves_files() {
    let dir = TempDir::new().unwrap();
    let file_a = dir.path().join("a.txt");
    let file_b = dir.path().join("inner").join("b.txt");
    fs::create_dir(dir.path().join("inner")).unwrap();
    fs::write(&file_a, "").unwrap();
    fs::write(&file_b, "").unwrap();

    let paths: PathSet = [
        dir.path().join("inner"),
        file_a.clone(),
        file_b.clone(),
    ]
    .iter()
    .map(|p| p.to_str().unwrap().to_string())
    .collect();

    let files = filter_by_class(&paths, "folder", false, &SilentProgress).unwrap();
    let expected: PathSet = [file_a, file_b]
        .iter()
        .map(|p| p.to_str().unwrap().to_string())
        .collect();
    assert_eq!(files, expected);
}
