//! # Failure Table Module / 失败表格模块
//!
//! Renders failing test cases as a markdown table for the host's markdown
//! channel and raises the one-shot failure signal that precedes it.
//!
//! 将失败的测试用例渲染为 markdown 表格并发送到宿主的 markdown 通道，
//! 同时在此之前发出一次失败信号。

use crate::{
    core::{
        config::ReportOptions,
        models::{Element, TestCase},
    },
    reporting::Reporter,
};

/// Heading line of the rendered table.
pub const TABLE_HEADING: &str = "### Tests:";

/// Header of the synthesized error column.
pub const ERROR_COLUMN: &str = "Error";

/// The message signalled once per run when any failing case was found.
pub fn failure_message(options: &ReportOptions) -> String {
    format!(
        "{} have failed, see below for more information.",
        options.name
    )
}

/// Signals the failure on the fail channel (or warn when `onlyWarn` is set)
/// and posts the rendered table to the markdown channel.
///
/// `failing` must not be empty.
pub fn report_failures<R>(failing: &[TestCase], options: &ReportOptions, reporter: &mut R)
where
    R: Reporter + ?Sized,
{
    let message = failure_message(options);
    if options.only_warn {
        reporter.warn(&message);
    } else {
        reporter.fail(&message);
    }
    reporter.markdown(&render_failure_table(failing));
}

/// Renders the markdown failure table.
///
/// Columns come from the attributes of the first case, in declaration order,
/// and are reused for every row. A later case lacking one of those attributes
/// gets an empty cell; attributes only later cases have are not shown.
///
/// # Output Format / 输出格式
/// ```text
/// ### Tests:
///
/// | Classname | Name | Time | Error |
/// | --- | --- | --- | --- |
/// | a.B | does things | 0.052 | <pre>expected 0 to be above 0</pre> |
/// ```
pub fn render_failure_table(failing: &[TestCase]) -> String {
    let keys: Vec<&str> = failing
        .first()
        .map(|first| first.attributes().iter().map(|a| a.name.as_str()).collect())
        .unwrap_or_default();

    let mut headers: Vec<String> = keys.iter().map(|key| capitalize(key)).collect();
    headers.push(ERROR_COLUMN.to_string());

    let mut table = format!("{TABLE_HEADING}\n\n");
    table.push_str(&render_row(&headers));
    table.push_str(&render_row(&vec!["---".to_string(); headers.len()]));

    for case in failing {
        let mut cells: Vec<String> = keys
            .iter()
            .map(|key| case.attribute(key).unwrap_or_default().to_string())
            .collect();
        cells.push(case.failure_node().map(error_detail).unwrap_or_default());
        table.push_str(&render_row(&cells));
    }
    table
}

/// Builds the detail text of a `<failure>` or `<error>` node.
///
/// The content is `"{type}: "` (for a non-empty `type`), the `message`, a
/// newline plus `stack` when present, and a newline plus the trimmed text or
/// CDATA body when present. The body has `<` and `>` escaped. The whole
/// detail is wrapped in `<pre>` so it renders as a preformatted block.
pub fn error_detail(node: &Element) -> String {
    let mut detail = String::from("<pre>");
    if let Some(kind) = node.attribute("type").filter(|kind| !kind.is_empty()) {
        detail.push_str(kind);
        detail.push_str(": ");
    }
    if let Some(message) = node.attribute("message") {
        detail.push_str(message);
    }
    if let Some(stack) = node.attribute("stack") {
        detail.push('\n');
        detail.push_str(stack);
    }
    if let Some(body) = node.text() {
        detail.push('\n');
        detail.push_str(&escape_angle_brackets(body.trim()));
    }
    detail.push_str("</pre>");
    detail
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

fn escape_angle_brackets(input: &str) -> String {
    input.replace('<', "&lt;").replace('>', "&gt;")
}

/// Keeps a cell on a single table line: pipes are escaped and line breaks
/// become `<br>`.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}

fn render_row(cells: &[String]) -> String {
    let cells: Vec<String> = cells.iter().map(|cell| escape_cell(cell)).collect();
    format!("| {} |\n", cells.join(" | "))
}
