//! # Configuration Module / 配置模块
//!
//! This module defines the options of a report run and the `JUnitReport.toml`
//! config file that carries them, along with the CLI output format.
//!
//! 此模块定义报告运行的选项、承载这些选项的 `JUnitReport.toml` 配置文件，
//! 以及 CLI 的输出格式。

use serde::{Deserialize, Serialize};

/// Default glob used to find report files.
pub const DEFAULT_REPORT_PATTERN: &str = "./build/reports/**/TESTS*.xml";

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "JUnitReport.toml";

/// Options of one report run. Immutable for the duration of the run.
/// 一次报告运行的选项。在运行期间保持不变。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportOptions {
    /// Glob pattern locating the report files.
    /// 用于定位报告文件的 glob 模式。
    pub path_to_report: String,
    /// Whether the aggregate summary is posted to the info channel.
    /// 是否将汇总摘要发送到信息通道。
    pub show_message_test_summary: bool,
    /// Whether failing cases are signalled and rendered as a table.
    /// 是否发出失败信号并将失败用例渲染为表格。
    pub show_test_failures: bool,
    /// Label used in the failure message, e.g. "Unit tests have failed".
    /// 失败消息中使用的标签。
    pub name: String,
    /// Report failures on the warn channel instead of fail.
    /// 通过警告通道而不是失败通道报告失败。
    pub only_warn: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            path_to_report: DEFAULT_REPORT_PATTERN.to_string(),
            show_message_test_summary: true,
            show_test_failures: true,
            name: "Tests".to_string(),
            only_warn: false,
        }
    }
}

/// How host channel output is written by the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable lines on stdout.
    #[default]
    Console,
    /// A JSON array of every channel call, in order.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// The `JUnitReport.toml` config file.
///
/// ```toml
/// language = "en"
/// jobs = 4
/// format = "console"
///
/// [report]
/// pathToReport = "./build/reports/**/TESTS*.xml"
/// showMessageTestSummary = true
/// showTestFailures = true
/// name = "Tests"
/// onlyWarn = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Upper bound of report files read concurrently.
    /// Defaults to the number of CPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub report: ReportOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            jobs: None,
            format: OutputFormat::default(),
            report: ReportOptions::default(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}
