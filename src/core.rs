//! # Core Module / 核心模块
//!
//! This module contains the report pipeline of JUnit Reporter: the typed XML
//! model, suite extraction, failure collection, summary aggregation, failure
//! table rendering and the orchestrating pipeline.
//!
//! 此模块包含 JUnit Reporter 的报告处理管道：类型化 XML 模型、
//! 测试套件提取、失败收集、摘要汇总、失败表格渲染以及编排管道。

pub mod collector;
pub mod config;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod summary;
pub mod table;

// Re-exports
pub use config::{ReportConfig, ReportOptions};
pub use models::{Suite, TestCase, TestTotals};
pub use pipeline::run_report;
