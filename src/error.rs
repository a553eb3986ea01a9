//! # Error Types / 错误类型
//!
//! Errors that abort a report run. A report file that vanished between glob
//! expansion and reading is not an error; everything here is fatal for the
//! whole invocation.
//!
//! 中止报告运行的错误。在 glob 展开和读取之间消失的报告文件不算错误；
//! 此处的所有错误都会终止整个调用。

use std::path::PathBuf;

/// Fatal failures of the report pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An existing report file could not be read as UTF-8 text.
    #[error("failed to read report {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file is not well-formed XML.
    #[error("malformed XML in report {}: {source}", path.display())]
    MalformedXml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The report pattern references an environment variable that is not set.
    #[error("failed to expand report pattern `{pattern}`: {source}")]
    Expand {
        pattern: String,
        #[source]
        source: shellexpand::LookupError<std::env::VarError>,
    },

    /// The configured report pattern is not a valid glob.
    #[error("invalid report pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Directory traversal failed while expanding the report pattern.
    #[error("failed to scan {} for reports: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A report extraction task panicked or was cancelled.
    #[error("report extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
