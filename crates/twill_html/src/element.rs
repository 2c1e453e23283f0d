//! Element tree for component output
//!
//! Components build an [`Element`] rather than pushing strings around:
//! a tag, an ordered attribute map, and child [`Node`]s. The tree keeps
//! attributes addressable until render time, which is what lets a button
//! compute its final class attribute after collecting caller overrides.
//!
//! Attribute names pass through verbatim, so `data-*`, `aria-*`, and
//! framework attributes like `hx-post` need no special casing here.

use std::borrow::Cow;

use indexmap::IndexMap;

/// An attribute value: text, or a boolean flag.
///
/// Flags follow HTML semantics. `Flag(true)` renders as the bare
/// attribute name (`disabled`), `Flag(false)` renders nothing at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl AttrValue {
    /// The text content, if this is a text attribute.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            AttrValue::Flag(_) => None,
        }
    }

    /// Whether this value renders at all.
    pub fn is_present(&self) -> bool {
        !matches!(self, AttrValue::Flag(false))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Cow<'static, str>> for AttrValue {
    fn from(value: Cow<'static, str>) -> Self {
        AttrValue::Text(value.into_owned())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// A node in the element tree: a nested element or a text run.
///
/// Text is stored raw and escaped at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An HTML element under construction.
///
/// Attributes keep insertion order; setting an existing name replaces
/// the value in place. Children render in the order they were added.
///
/// # Example
///
/// ```
/// use twill_html::el;
///
/// let link = el("a")
///     .attr("href", "/docs")
///     .class("underline")
///     .child("Read the docs");
/// assert_eq!(link.to_html(), r#"<a href="/docs" class="underline">Read the docs</a>"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    attrs: IndexMap<Cow<'static, str>, AttrValue>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value under the same name.
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append to the class attribute. Repeated calls accumulate with a
    /// separating space; conflict resolution is the caller's business.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        if class.is_empty() {
            return self;
        }
        match self.attrs.get_mut("class") {
            Some(AttrValue::Text(existing)) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            _ => {
                self.attrs
                    .insert(Cow::Borrowed("class"), AttrValue::Text(class.to_owned()));
            }
        }
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Text content of an attribute, `None` for flags and absent names.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }

    /// Whether a boolean attribute is set.
    pub fn has_flag(&self, name: &str) -> bool {
        matches!(self.attrs.get(name), Some(AttrValue::Flag(true)))
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(name, value)| (name.as_ref(), value))
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

/// Start an element with the given tag.
pub fn el(tag: impl Into<Cow<'static, str>>) -> Element {
    Element::new(tag)
}

/// Start a `div`.
pub fn div() -> Element {
    Element::new("div")
}

/// Start a `span`.
pub fn span() -> Element {
    Element::new("span")
}

/// A bare text node.
pub fn text(text: impl Into<String>) -> Node {
    Node::Text(text.into())
}
