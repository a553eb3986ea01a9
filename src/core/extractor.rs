//! # Suite Extraction Module / 测试套件提取模块
//!
//! Turns one report file into the ordered list of `<testsuite>` elements it
//! holds. Both common root shapes are accepted: a bare `<testsuite>` root and
//! a `<testsuites>` wrapper (optionally nested one level under another root).
//!
//! 将一个报告文件转换为其中包含的 `<testsuite>` 元素的有序列表。
//! 接受两种常见的根结构：单独的 `<testsuite>` 根和 `<testsuites>` 包装。

use std::path::Path;

use crate::{
    core::models::{Element, Suite, Tag},
    error::ReportError,
    infra::fs,
};

/// Reads and parses the report at `path`.
///
/// A path that no longer exists yields no suites. A file that exists but
/// cannot be read or parsed aborts the run.
pub async fn gather_suites(path: &Path) -> Result<Vec<Suite>, ReportError> {
    let Some(contents) = fs::read_report(path).await? else {
        return Ok(Vec::new());
    };
    parse_suites(&contents).map_err(|source| ReportError::MalformedXml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses report XML text and extracts its suites in document order.
pub fn parse_suites(contents: &str) -> Result<Vec<Suite>, roxmltree::Error> {
    let document = roxmltree::Document::parse(contents)?;
    let root = Element::from_xml(document.root_element());
    Ok(suites_of(root))
}

/// Picks the suite root of a document and lists its suites.
pub fn suites_of(root: Element) -> Vec<Suite> {
    let suite_root = match root.first_child_element() {
        Some(child) if child.tag() == Tag::TestSuites => child.clone(),
        _ => root,
    };

    if suite_root.tag() == Tag::TestSuite {
        return vec![Suite::new(suite_root)];
    }
    suite_root
        .descendants(Tag::TestSuite)
        .into_iter()
        .cloned()
        .map(Suite::new)
        .collect()
}
