//! # Extractor Module Unit Tests / Extractor 模块单元测试
//!
//! Tests for locating suites in the supported report root shapes and for
//! reading report files.
//!
//! 测试在支持的报告根结构中定位测试套件以及读取报告文件。

mod common;

use junit_reporter::ReportError;
use junit_reporter::core::extractor::{gather_suites, parse_suites};

fn suite_names(xml: &str) -> Vec<String> {
    parse_suites(xml)
        .unwrap()
        .iter()
        .map(|s| s.element().attribute("name").unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_bare_testsuite_root_is_the_only_suite() {
    let xml = r#"<testsuite name="outer"><testsuite name="inner"/></testsuite>"#;
    assert_eq!(suite_names(xml), vec!["outer"]);
}

#[test]
fn test_testsuites_root_lists_every_suite() {
    let xml = r#"<testsuites>
        <testsuite name="a"/>
        <testsuite name="b"/>
    </testsuites>"#;
    assert_eq!(suite_names(xml), vec!["a", "b"]);
}

#[test]
fn test_nested_suites_are_flattened_in_document_order() {
    let xml = r#"<testsuites>
        <testsuite name="a">
            <testsuite name="a.1"/>
        </testsuite>
        <testsuite name="b"/>
    </testsuites>"#;
    assert_eq!(suite_names(xml), vec!["a", "a.1", "b"]);
}

#[test]
fn test_testsuites_wrapped_in_another_root() {
    let xml = r#"<report><testsuites><testsuite name="wrapped"/></testsuites></report>"#;
    assert_eq!(suite_names(xml), vec!["wrapped"]);
}

#[test]
fn test_unknown_root_collects_descendant_suites() {
    let xml = r#"<results><run><testsuite name="deep"/></run></results>"#;
    assert_eq!(suite_names(xml), vec!["deep"]);
}

#[test]
fn test_document_without_suites_is_empty() {
    assert!(suite_names("<testsuites/>").is_empty());
}

#[test]
fn test_malformed_xml_is_an_error() {
    assert!(parse_suites("<testsuite><testcase></testsuite>").is_err());
    assert!(parse_suites("").is_err());
}

#[tokio::test]
async fn test_missing_file_yields_no_suites() {
    let dir = common::setup_report_dir();
    let suites = gather_suites(&dir.path().join("gone.xml")).await.unwrap();
    assert!(suites.is_empty());
}

#[tokio::test]
async fn test_report_file_is_parsed() {
    let dir = common::setup_report_dir();
    let path = common::write_report(dir.path(), "TESTS-a.xml", common::FAILING_REPORT);

    let suites = gather_suites(&path).await.unwrap();
    assert_eq!(suites.len(), 1);
    assert_eq!(suites[0].tests(), 5);
}

#[tokio::test]
async fn test_malformed_file_reports_its_path() {
    let dir = common::setup_report_dir();
    let path = common::write_report(dir.path(), "broken.xml", "<testsuite>");

    match gather_suites(&path).await {
        Err(ReportError::MalformedXml { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a malformed XML error, got {:?}", other),
    }
}
