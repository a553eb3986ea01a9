//! # JUnit Reporter Library / JUnit 报告库
//!
//! This library aggregates JUnit-style XML test reports produced by arbitrary
//! test runners and turns them into a summary message plus a markdown failure
//! table for a code review host.
//!
//! 此库汇总任意测试运行器生成的 JUnit 风格 XML 测试报告，
//! 并将其转换为摘要消息和 markdown 失败表格，供代码审查平台使用。
//!
//! ## Modules / 模块
//!
//! - `core` - Report model, extraction, aggregation, rendering and the pipeline
//! - `infra` - File system collaborator (glob expansion and report reads)
//! - `reporting` - Host channel capability and its implementations
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 报告模型、提取、汇总、渲染以及处理管道
//! - `infra` - 文件系统协作者（glob 展开和报告读取）
//! - `reporting` - 宿主通道接口及其实现
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::models;
pub use crate::core::pipeline::run_report;
pub use error::ReportError;
pub use reporting::Reporter;

/// Picks the interface language for console output.
///
/// An explicitly requested language wins. Otherwise the system locale is
/// detected and matched against the bundled catalogs: first the full locale
/// (e.g. "zh-CN"), then just the language code (e.g. "en"), and finally the
/// default "en".
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
