//! # Summary Module / 摘要模块
//!
//! Sums the suite counters of a run and renders the summary message posted
//! to the host's info channel.
//!
//! 汇总一次运行中测试套件的计数，并渲染发送到宿主信息通道的摘要消息。

use crate::core::models::{Suite, TestTotals};

/// Sums `tests`, `failures + errors` and `skipped` over all suites.
pub fn aggregate(suites: &[Suite]) -> TestTotals {
    suites.iter().fold(TestTotals::default(), |mut totals, suite| {
        totals.add_suite(suite);
        totals
    })
}

/// Renders the summary message for the given totals.
///
/// # Output Format / 输出格式
/// ```text
/// :x: 1 tests have failed
/// There are 1 tests failing and 3 skipped out of 19 total tests.
/// ```
/// or
/// ```text
/// :white_check_mark: All tests are passing
/// Nice one! All 3 tests are passing.
/// (There are 2 skipped tests not included in that total)
/// ```
/// where the last line only appears when tests were skipped.
pub fn render_summary(totals: &TestTotals) -> String {
    if totals.is_failing() {
        return format!(
            ":x: {failures} tests have failed\nThere are {failures} tests failing and {skipped} skipped out of {count} total tests.",
            failures = totals.failures,
            skipped = totals.skipped,
            count = totals.count,
        );
    }

    let mut message = format!(
        ":white_check_mark: All tests are passing\nNice one! All {} tests are passing.",
        totals.count
    );
    if totals.skipped > 0 {
        message.push_str(&format!(
            "\n(There are {} skipped tests not included in that total)",
            totals.skipped
        ));
    }
    message
}

/// Aggregates and renders in one step.
pub fn summarize(suites: &[Suite]) -> String {
    render_summary(&aggregate(suites))
}
