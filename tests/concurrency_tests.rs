//! # Concurrency Tests / 并发测试
//!
//! Reports are extracted by one task per file. These tests check that the
//! outcome does not depend on how many tasks run at once.
//!
//! 每个报告文件由一个任务提取。这些测试检查结果不依赖于同时运行的任务数量。

mod common;

use junit_reporter::core::pipeline::{gather_all_suites, run_report};
use junit_reporter::infra::fs::resolve_pattern;
use junit_reporter::reporting::RecordingReporter;

const FILE_COUNT: usize = 40;

fn many_reports() -> tempfile::TempDir {
    let dir = common::setup_report_dir();
    for i in 0..FILE_COUNT {
        let failures = usize::from(i % 7 == 0);
        let body = if failures == 1 {
            format!(r#"<testcase classname="suite{i:02}" name="case"><failure message="m{i}"/></testcase>"#)
        } else {
            format!(r#"<testcase classname="suite{i:02}" name="case"/>"#)
        };
        common::write_report(
            dir.path(),
            &format!("shard{}/TESTS-{i:02}.xml", i % 3),
            &format!(
                r#"<testsuite name="suite{i:02}" tests="1" failures="{failures}" skipped="0">{body}</testsuite>"#
            ),
        );
    }
    dir
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_suites_follow_path_order_for_any_job_count() {
    let dir = many_reports();
    let paths = resolve_pattern(&common::pattern_in(dir.path(), "**/TESTS-*.xml")).unwrap();
    assert_eq!(paths.len(), FILE_COUNT);

    let names = |suites: Vec<junit_reporter::models::Suite>| -> Vec<String> {
        suites
            .iter()
            .map(|s| s.element().attribute("name").unwrap_or_default().to_string())
            .collect()
    };

    let sequential = names(gather_all_suites(paths.clone(), 1).await.unwrap());
    let parallel = names(gather_all_suites(paths.clone(), 8).await.unwrap());
    let unbounded = names(gather_all_suites(paths, FILE_COUNT).await.unwrap());

    assert_eq!(sequential.len(), FILE_COUNT);
    assert_eq!(sequential, parallel);
    assert_eq!(sequential, unbounded);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_host_output_is_identical_for_any_job_count() {
    let dir = many_reports();
    let options = common::options_for(common::pattern_in(dir.path(), "**/TESTS-*.xml"));

    let mut outputs = Vec::new();
    for jobs in [1, 3, 16] {
        let mut reporter = RecordingReporter::new();
        run_report(&options, jobs, &mut reporter).await.unwrap();
        outputs.push(reporter);
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], outputs[2]);
    assert!(outputs[0].has_failed());
}

#[tokio::test]
async fn test_zero_jobs_still_makes_progress() {
    let dir = many_reports();
    let paths = resolve_pattern(&common::pattern_in(dir.path(), "**/TESTS-*.xml")).unwrap();
    let suites = gather_all_suites(paths, 0).await.unwrap();
    assert_eq!(suites.len(), FILE_COUNT);
}
