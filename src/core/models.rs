//! # Data Models Module / 数据模型模块
//!
//! This module defines the owned XML tree the pipeline works on and the
//! report-level views over it: suites, test cases and aggregated totals.
//!
//! 此模块定义了处理管道所使用的 XML 树，以及基于它的报告级视图：
//! 测试套件、测试用例和汇总统计。

/// The element names the pipeline dispatches on.
/// Every other element name maps to `Other`.
/// 处理管道所依据的元素名称。其他元素名称都映射为 `Other`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<testsuites>`, the optional wrapper around suites.
    TestSuites,
    /// `<testsuite>`
    TestSuite,
    /// `<testcase>`
    TestCase,
    /// `<failure>`, an assertion failure inside a test case.
    Failure,
    /// `<error>`, an unexpected error inside a test case.
    Error,
    /// Any element not listed above.
    Other,
}

impl Tag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "testsuites" => Tag::TestSuites,
            "testsuite" => Tag::TestSuite,
            "testcase" => Tag::TestCase,
            "failure" => Tag::Failure,
            "error" => Tag::Error,
            _ => Tag::Other,
        }
    }
}

/// A node of a parsed report document. Comments and processing
/// instructions are dropped while building the tree.
/// 已解析报告文档中的节点。构建树时会丢弃注释和处理指令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, including CDATA sections.
    Text(String),
}

/// A single attribute, kept in declaration order on its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An owned XML element.
/// 一个拥有所有权的 XML 元素。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            tag: Tag::from_name(name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute append. Used by tests and by the XML reader.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Converts a parsed `roxmltree` element and its subtree into an owned element.
    pub fn from_xml(node: roxmltree::Node<'_, '_>) -> Self {
        let mut element = Element::new(node.tag_name().name());
        for attr in node.attributes() {
            element = element.with_attribute(attr.name(), attr.value());
        }
        for child in node.children() {
            if child.is_element() {
                element.children.push(Node::Element(Element::from_xml(child)));
            } else if child.is_text() {
                if let Some(text) = child.text() {
                    element.children.push(Node::Text(text.to_string()));
                }
            }
        }
        element
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Reads an attribute as a count. Missing or non-numeric values are 0.
    pub fn count_attribute(&self, name: &str) -> i64 {
        self.attribute(name).map(parse_count).unwrap_or(0)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty()
    }

    /// The first child element, skipping text nodes.
    pub fn first_child_element(&self) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// The concatenated direct text children, or `None` when the element
    /// has no text child at all.
    pub fn text(&self) -> Option<String> {
        let mut texts = self.children.iter().filter_map(|child| match child {
            Node::Text(text) => Some(text.as_str()),
            Node::Element(_) => None,
        });
        let first = texts.next()?;
        Some(texts.fold(first.to_string(), |mut acc, text| {
            acc.push_str(text);
            acc
        }))
    }

    /// All descendant elements with the given tag, in document order.
    /// The element itself is never included.
    pub fn descendants(&self, tag: Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: Tag, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(element) = child {
                if element.tag == tag {
                    found.push(element);
                }
                element.collect_descendants(tag, found);
            }
        }
    }

    pub fn first_descendant(&self, tag: Tag) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            Node::Element(element) if element.tag == tag => Some(element),
            Node::Element(element) => element.first_descendant(tag),
            Node::Text(_) => None,
        })
    }
}

/// Parses a count the way report attributes are commonly read: leading
/// whitespace, an optional sign, then as many base-10 digits as are present.
/// Anything without leading digits counts as 0.
pub fn parse_count(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    // Too many digits for i64: clamp instead of dropping the count.
    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// One `<testsuite>` element.
/// 一个 `<testsuite>` 元素。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    element: Element,
}

impl Suite {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn tests(&self) -> i64 {
        self.element.count_attribute("tests")
    }

    pub fn failures(&self) -> i64 {
        self.element.count_attribute("failures")
    }

    pub fn errors(&self) -> i64 {
        self.element.count_attribute("errors")
    }

    pub fn skipped(&self) -> i64 {
        self.element.count_attribute("skipped")
    }

    /// Whether the suite's own counters report any failure or error.
    pub fn has_failures(&self) -> bool {
        self.failures() != 0 || self.errors() != 0
    }

    /// Every `<testcase>` beneath this suite, in document order.
    pub fn test_cases(&self) -> Vec<TestCase> {
        self.element
            .descendants(Tag::TestCase)
            .into_iter()
            .cloned()
            .map(TestCase::new)
            .collect()
    }
}

/// One `<testcase>` element.
/// 一个 `<testcase>` 元素。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    element: Element,
}

impl TestCase {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn attributes(&self) -> &[Attribute] {
        self.element.attributes()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attribute(name)
    }

    /// True when the case has child nodes and at least one nested
    /// `<failure>` or `<error>` element.
    pub fn is_failing(&self) -> bool {
        self.element.has_child_nodes()
            && (self.element.first_descendant(Tag::Failure).is_some()
                || self.element.first_descendant(Tag::Error).is_some())
    }

    /// The node describing why the case failed. An `<error>` is preferred
    /// over a `<failure>`.
    pub fn failure_node(&self) -> Option<&Element> {
        self.element
            .first_descendant(Tag::Error)
            .or_else(|| self.element.first_descendant(Tag::Failure))
    }
}

/// Totals accumulated over every suite of every report file.
/// Errors are folded into `failures`.
/// 所有报告文件中所有测试套件的汇总统计。错误会计入 `failures`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestTotals {
    pub count: i64,
    pub failures: i64,
    pub skipped: i64,
}

impl TestTotals {
    pub fn add_suite(&mut self, suite: &Suite) {
        self.count = self.count.saturating_add(suite.tests());
        self.failures = self
            .failures
            .saturating_add(suite.failures())
            .saturating_add(suite.errors());
        self.skipped = self.skipped.saturating_add(suite.skipped());
    }

    pub fn is_failing(&self) -> bool {
        self.failures > 0
    }
}
