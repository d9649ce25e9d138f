//! Renderable element tree
//!
//! Components build a small tree of tagged nodes with ordered attributes.
//! Hosts either walk the tree themselves or serialize it with
//! [`Element::to_markup`], which escapes text and attribute values.
//!
//! ```rust
//! use plugin_ui_cn::element::{li, span, ul};
//!
//! let list = ul().role("list").child(li().role("none").child(span().text("Sales")));
//! assert_eq!(
//!     list.to_markup(),
//!     r#"<ul role="list"><li role="none"><span>Sales</span></li></ul>"#
//! );
//! ```

use std::fmt::Write;

use indexmap::IndexMap;

/// Element tags produced by the components
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Ul,
    Li,
    Button,
    Anchor,
    Input,
}

impl Tag {
    /// Tag name as written in markup
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Button => "button",
            Tag::Anchor => "a",
            Tag::Input => "input",
        }
    }

    fn is_void(self) -> bool {
        matches!(self, Tag::Input)
    }
}

/// A node in the element tree
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Tagged node with attributes and children
    Node(Node),
    /// Text, escaped on output
    Text(String),
    /// Trusted markup inserted verbatim (icons)
    Raw(String),
}

impl Element {
    /// Text element
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(content.into())
    }

    /// Inline SVG icon
    pub fn svg(markup: impl Into<String>) -> Self {
        Element::Raw(markup.into())
    }

    /// Inner node, if this is a tagged node
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::Node(node) => node.children.iter().for_each(|c| c.collect_text(out)),
            Element::Text(text) => out.push_str(text),
            Element::Raw(_) => {}
        }
    }

    /// Serialize to markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Element::Node(node) => node.write_markup(out),
            Element::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Element::Raw(markup) => out.push_str(markup),
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Text(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Text(text)
    }
}

/// Tagged node
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    tag: Tag,
    attrs: IndexMap<String, String>,
    children: Vec<Element>,
}

impl Node {
    /// Create an empty node
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute (later calls overwrite, keeping the first position)
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.insert(name.into(), value.to_string());
        self
    }

    /// Set an attribute only when `value` is `Some`
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set `data-slot`
    pub fn slot(self, slot: &str) -> Self {
        self.attr("data-slot", slot)
    }

    /// Set `role`
    pub fn role(self, role: &str) -> Self {
        self.attr("role", role)
    }

    /// Set `class` when a class string is given
    pub fn class(self, class_name: Option<&str>) -> Self {
        self.attr_opt("class", class_name)
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Element::Text(content.into()))
    }

    /// Node tag
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Child elements
    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// All nodes in this subtree (self included) whose `data-slot` is `slot`, in document order
    pub fn find_slot(&self, slot: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.get_attr("data-slot") == Some(slot) {
                found.push(node);
            }
        });
        found
    }

    /// All nodes in this subtree (self included) with the given tag, in document order
    pub fn find_tag(&self, tag: Tag) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.tag == tag {
                found.push(node);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            if let Element::Node(node) = child {
                node.walk(visit);
            }
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Serialize to markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let tag = self.tag.as_str();
        out.push('<');
        out.push_str(tag);
        for (name, value) in &self.attrs {
            // writing to a String cannot fail
            let _ = write!(
                out,
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        out.push('>');
        if self.tag.is_void() {
            return;
        }
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// `<div>`
pub fn div() -> Node {
    Node::new(Tag::Div)
}

/// `<span>`
pub fn span() -> Node {
    Node::new(Tag::Span)
}

/// `<ul>`
pub fn ul() -> Node {
    Node::new(Tag::Ul)
}

/// `<li>`
pub fn li() -> Node {
    Node::new(Tag::Li)
}

/// `<button>`
pub fn button() -> Node {
    Node::new(Tag::Button)
}

/// `<a>`
pub fn anchor() -> Node {
    Node::new(Tag::Anchor)
}

/// `<input>`
pub fn input() -> Node {
    Node::new(Tag::Input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_escapes_text_and_attributes() {
        let node = div()
            .attr("title", "a \"quoted\" & title")
            .text("Tom & Jerry <3");
        assert_eq!(
            node.to_markup(),
            "<div title=\"a &quot;quoted&quot; &amp; title\">Tom &amp; Jerry &lt;3</div>"
        );
    }

    #[test]
    fn test_void_and_raw() {
        let node = div()
            .child(Element::svg("<svg></svg>"))
            .child(input().attr("type", "search"));
        assert_eq!(node.to_markup(), "<div><svg></svg><input type=\"search\"></div>");
    }

    #[test]
    fn test_attr_order_and_overwrite() {
        let node = span().attr("a", 1).attr("b", 2).attr("a", 3);
        let attrs: Vec<_> = node.attrs().collect();
        assert_eq!(attrs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_find_slot_and_text() {
        let tree = div()
            .slot("outer")
            .child(span().slot("label").text("Reports"))
            .child(div().child(span().slot("label").text("Sales")));

        let labels = tree.find_slot("label");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].text_content(), "Sales");
        assert_eq!(tree.text_content(), "ReportsSales");
        assert_eq!(tree.find_tag(Tag::Span).len(), 2);
    }

    #[test]
    fn test_optional_class() {
        assert_eq!(div().class(None).to_markup(), "<div></div>");
        assert_eq!(div().class(Some("x")).to_markup(), "<div class=\"x\"></div>");
    }
}
