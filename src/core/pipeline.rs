//! # Report Pipeline Module / 报告管道模块
//!
//! Drives one report run: resolve the pattern, extract every matched file
//! concurrently, then summarize and report failures through the host
//! channels.
//!
//! 驱动一次报告运行：解析模式，并发提取每个匹配的文件，
//! 然后通过宿主通道汇总并报告失败。

use futures::{StreamExt, TryStreamExt, stream};
use std::path::PathBuf;

use crate::{
    core::{
        collector::gather_failed_test_cases,
        config::ReportOptions,
        extractor::gather_suites,
        models::Suite,
        summary::summarize,
        table::report_failures,
    },
    error::ReportError,
    infra::fs,
    reporting::Reporter,
};

/// The warning posted when the pattern matches no file.
pub fn no_reports_message(pattern: &str) -> String {
    format!(":mag: Can't find junit reports at `{pattern}`, skipping generating JUnit Report.")
}

/// The main entry point for a report run.
///
/// # Arguments
/// * `options` - The options of this run
/// * `jobs` - Upper bound of report files read at the same time
/// * `reporter` - The host channels
///
/// # Returns
/// `Ok(())` once everything was posted. Any unreadable or malformed report
/// aborts the run before anything but the pattern lookup happened.
pub async fn run_report<R>(
    options: &ReportOptions,
    jobs: usize,
    reporter: &mut R,
) -> Result<(), ReportError>
where
    R: Reporter + ?Sized,
{
    let pattern = options.path_to_report.clone();
    let paths = tokio::task::spawn_blocking(move || fs::resolve_pattern(&pattern)).await??;

    if paths.is_empty() {
        reporter.warn(&no_reports_message(&options.path_to_report));
        return Ok(());
    }

    let suites = gather_all_suites(paths, jobs).await?;
    report_suites(&suites, options, reporter);
    Ok(())
}

/// Extracts the suites of every path, one task per file with at most `jobs`
/// in flight. Results are concatenated in path order no matter which task
/// finishes first.
pub async fn gather_all_suites(paths: Vec<PathBuf>, jobs: usize) -> Result<Vec<Suite>, ReportError> {
    let per_file: Vec<Vec<Suite>> = stream::iter(paths)
        .map(|path| tokio::spawn(async move { gather_suites(&path).await }))
        .buffered(jobs.max(1))
        .map(|joined| joined.map_err(ReportError::from).and_then(|result| result))
        .try_collect()
        .await?;

    Ok(per_file.into_iter().flatten().collect())
}

/// Posts the summary and the failure report for already extracted suites.
pub fn report_suites<R>(suites: &[Suite], options: &ReportOptions, reporter: &mut R)
where
    R: Reporter + ?Sized,
{
    if options.show_message_test_summary {
        reporter.info(&summarize(suites));
    }

    let failing = gather_failed_test_cases(suites);
    if !failing.is_empty() && options.show_test_failures {
        report_failures(&failing, options, reporter);
    }
}
