//! # Failure Collection Module / 失败收集模块
//!
//! Narrows the suites of a run down to the test cases that actually carry a
//! `<failure>` or `<error>` node.
//!
//! 将一次运行的测试套件缩小到真正带有 `<failure>` 或 `<error>` 节点的测试用例。

use crate::core::models::{Suite, TestCase};

/// Collects the failing test cases of every suite whose counters report a
/// failure or an error.
///
/// Suites are visited in input order and their cases in document order. A
/// suite counter is not proof that any case carries failure details, so each
/// case is checked on its own and cases without a failure node are dropped.
pub fn gather_failed_test_cases(suites: &[Suite]) -> Vec<TestCase> {
    suites
        .iter()
        .filter(|suite| suite.has_failures())
        .flat_map(Suite::test_cases)
        .filter(TestCase::is_failing)
        .collect()
}
