// src/view/html.rs
// HTML adapter: materializes the node tree as markup

use super::{Element, Node};

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Element {
    /// Serialize this element and its subtree to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());

    if !el.classes().is_empty() {
        write_attribute(out, "class", &el.classes().join(" "));
    }
    for (name, value) in el.attributes() {
        write_attribute(out, name, value);
    }
    if !el.styles().is_empty() {
        let style = el
            .styles()
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ");
        write_attribute(out, "style", &style);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag()) {
        return;
    }

    for child in el.children() {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}
