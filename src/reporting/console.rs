//! # Console Reporting Module / 控制台报告模块
//!
//! Prints host channel output to stdout. Info and markdown text is printed
//! verbatim so it can be piped into a review comment; warnings and failures
//! are marked and colored.
//!
//! 将宿主通道输出打印到标准输出。信息和 markdown 文本原样输出，
//! 以便可以直接用于审查评论；警告和失败会被标记并着色。

use colored::*;

use crate::reporting::Reporter;

/// Reporter that writes every channel call to stdout.
///
/// # Output Format / 输出格式
/// ```text
/// :x: 1 tests have failed
/// There are 1 tests failing and 3 skipped out of 19 total tests.
/// ✖ Tests have failed, see below for more information.
/// ### Tests:
/// ...
/// ```
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    failed: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a blocking failure was posted.
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

impl Reporter for ConsoleReporter {
    fn info(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warn(&mut self, text: &str) {
        println!("{} {}", "⚠".yellow(), text.yellow());
    }

    fn fail(&mut self, text: &str) {
        self.failed = true;
        println!("{} {}", "✖".red().bold(), text.red().bold());
    }

    fn markdown(&mut self, text: &str) {
        println!("\n{}", text.trim_end());
    }
}
