//! # Reporting Module / 报告模块
//!
//! This module defines the host channels a report run talks to and the
//! implementations shipped with the CLI: a colored console reporter and a
//! recording reporter whose log can be serialized to JSON.
//!
//! 此模块定义报告运行所使用的宿主通道，以及 CLI 自带的实现：
//! 彩色控制台报告器和可序列化为 JSON 的记录报告器。

pub mod console;
pub mod recording;

pub use console::ConsoleReporter;
pub use recording::{Channel, HostMessage, RecordingReporter};

/// The four host channels a report run communicates through.
/// Every call is fire-and-forget.
///
/// 报告运行所使用的四个宿主通道。每次调用都无需等待结果。
pub trait Reporter {
    /// Posts summary information.
    fn info(&mut self, text: &str);
    /// Posts a non-blocking warning.
    fn warn(&mut self, text: &str);
    /// Posts a blocking failure.
    fn fail(&mut self, text: &str);
    /// Posts a rendered markdown block.
    fn markdown(&mut self, text: &str);
}
