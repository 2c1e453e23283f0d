//! HTML serialization for the element tree
//!
//! Rendering goes through [`maud::Render`], so an [`Element`] can be
//! spliced straight into an `html!` template or turned into a standalone
//! string with [`Element::to_html`]. Text nodes and attribute values are
//! escaped with maud's escaper; attribute names and tags render verbatim.

use std::fmt::Write as _;

use maud::{Escaper, Markup, Render};
use tracing::warn;

use crate::element::{AttrValue, Element, Node};

/// Tags that never take children or a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

fn write_escaped(text: &str, out: &mut String) {
    // Escaping into a String cannot fail.
    let _ = Escaper::new(out).write_str(text);
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());
    for (name, value) in element.attrs() {
        match value {
            AttrValue::Text(text) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                write_escaped(text, out);
                out.push('"');
            }
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Flag(false) => {}
        }
    }
    out.push('>');

    if is_void(element.tag()) {
        if !element.child_nodes().is_empty() {
            warn!(tag = element.tag(), "dropping children of void element");
        }
        return;
    }

    for child in element.child_nodes() {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(element) => write_element(element, out),
        Node::Text(text) => write_escaped(text, out),
    }
}

impl Element {
    /// Serialize this element to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }

    /// Serialize as pre-escaped [`Markup`] for use in `html!` templates.
    pub fn markup(&self) -> Markup {
        Render::render(self)
    }
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        write_element(self, buffer);
    }
}

impl Render for Node {
    fn render_to(&self, buffer: &mut String) {
        write_node(self, buffer);
    }
}
