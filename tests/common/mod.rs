// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

use junit_reporter::core::config::ReportOptions;

/// A bare `<testsuite>` report where every test passes.
pub const PASSING_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite name="passing" tests="3" failures="0" errors="0" skipped="0">
  <testcase classname="pkg.Passing" name="first" time="0.1"/>
  <testcase classname="pkg.Passing" name="second" time="0.2"/>
  <testcase classname="pkg.Passing" name="third" time="0.3"/>
</testsuite>
"#;

/// A `<testsuites>` report with one failure, one error and one skipped test.
pub const FAILING_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites>
  <testsuite name="failing" tests="5" failures="1" errors="1" skipped="1">
    <testcase classname="pkg.Failing" name="passes" time="0.1"/>
    <testcase classname="pkg.Failing" name="asserts" time="0.2">
      <failure message="expected 1 to equal 2" type="AssertionError">at check (test.js:10:3)</failure>
    </testcase>
    <testcase classname="pkg.Failing" name="throws" time="0.3">
      <error message="boom" type="TypeError"/>
    </testcase>
    <testcase classname="pkg.Failing" name="skips" time="0">
      <skipped/>
    </testcase>
    <testcase classname="pkg.Failing" name="also passes" time="0.4"/>
  </testsuite>
</testsuites>
"#;

pub fn setup_report_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes `contents` to `relative` below `dir`, creating parent directories.
pub fn write_report(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create report directory");
    }
    fs::write(&path, contents).expect("Failed to write report");
    path
}

/// Options pointing at `pattern` with every other option at its default.
pub fn options_for(pattern: impl Into<String>) -> ReportOptions {
    ReportOptions {
        path_to_report: pattern.into(),
        ..ReportOptions::default()
    }
}

/// Builds a glob below `dir` from a relative pattern.
pub fn pattern_in(dir: &Path, relative: &str) -> String {
    format!("{}/{}", dir.display(), relative)
}
