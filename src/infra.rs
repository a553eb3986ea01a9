//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the file system collaborator of the report pipeline
//! and the i18n lookup used for console messages.
//!
//! 此模块提供报告管道的文件系统协作者以及控制台消息所用的国际化查找。

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
