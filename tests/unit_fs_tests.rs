//! # File System Module Unit Tests / 文件系统模块单元测试
//!
//! Tests for glob expansion and report reads.
//!
//! 测试 glob 展开和报告读取。

mod common;

use junit_reporter::infra::fs::{is_directory, read_report, resolve_pattern};
use std::path::PathBuf;

fn layout() -> tempfile::TempDir {
    let dir = common::setup_report_dir();
    common::write_report(dir.path(), "TESTS-root.xml", common::PASSING_REPORT);
    common::write_report(dir.path(), "unit/TESTS-b.xml", common::PASSING_REPORT);
    common::write_report(dir.path(), "unit/TESTS-a.xml", common::PASSING_REPORT);
    common::write_report(dir.path(), "unit/deep/TESTS-c.xml", common::FAILING_REPORT);
    common::write_report(dir.path(), "unit/notes.txt", "not a report");
    dir
}

fn file_names(paths: &[PathBuf], root: &std::path::Path) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_recursive_pattern_matches_every_depth() {
    let dir = layout();
    let paths = resolve_pattern(&common::pattern_in(dir.path(), "**/TESTS*.xml")).unwrap();
    assert_eq!(
        file_names(&paths, dir.path()),
        vec![
            "TESTS-root.xml",
            "unit/TESTS-a.xml",
            "unit/TESTS-b.xml",
            "unit/deep/TESTS-c.xml",
        ]
    );
}

#[test]
fn test_single_star_does_not_cross_directories() {
    let dir = layout();
    let paths = resolve_pattern(&common::pattern_in(dir.path(), "unit/*.xml")).unwrap();
    assert_eq!(
        file_names(&paths, dir.path()),
        vec!["unit/TESTS-a.xml", "unit/TESTS-b.xml"]
    );
}

#[test]
fn test_literal_path_matches_itself() {
    let dir = layout();
    let pattern = common::pattern_in(dir.path(), "unit/TESTS-a.xml");
    let paths = resolve_pattern(&pattern).unwrap();
    assert_eq!(paths, vec![PathBuf::from(pattern)]);
}

#[test]
fn test_missing_literal_path_matches_nothing() {
    let dir = layout();
    let paths = resolve_pattern(&common::pattern_in(dir.path(), "unit/missing.xml")).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_missing_base_directory_matches_nothing() {
    let dir = layout();
    let paths = resolve_pattern(&common::pattern_in(dir.path(), "build/reports/**/*.xml")).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_directories_are_never_matched() {
    let dir = layout();
    let paths = resolve_pattern(&common::pattern_in(dir.path(), "*")).unwrap();
    assert_eq!(file_names(&paths, dir.path()), vec!["TESTS-root.xml"]);
}

#[test]
fn test_relative_pattern_against_fixtures() {
    let paths = resolve_pattern("tests/fixtures/junit_*.xml").unwrap();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("tests/fixtures/junit_failures.xml"),
            PathBuf::from("tests/fixtures/junit_success.xml"),
        ]
    );
}

#[test]
fn test_undefined_variable_is_an_error() {
    let result = resolve_pattern("$JUNIT_REPORTER_SURELY_UNDEFINED_VAR/*.xml");
    assert!(result.is_err());
}

#[test]
fn test_is_directory() {
    let dir = layout();
    assert!(is_directory(dir.path()));
    assert!(!is_directory(&dir.path().join("TESTS-root.xml")));
    assert!(!is_directory(&dir.path().join("nope")));
}

#[tokio::test]
async fn test_read_existing_report() {
    let dir = layout();
    let contents = read_report(&dir.path().join("unit/TESTS-a.xml")).await.unwrap();
    assert_eq!(contents.as_deref(), Some(common::PASSING_REPORT));
}

#[tokio::test]
async fn test_read_missing_report_is_none() {
    let dir = common::setup_report_dir();
    let contents = read_report(&dir.path().join("gone.xml")).await.unwrap();
    assert!(contents.is_none());
}
