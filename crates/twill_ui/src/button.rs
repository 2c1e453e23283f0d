//! Button component
//!
//! [`Button`] is a builder over the variant axes in [`crate::variant`].
//! It collects a label, optional extra children, pass-through attributes,
//! and state flags, then resolves everything into a `<button>` element
//! whose class attribute is a single conflict-free string.
//!
//! Class fragments compose in a fixed order so that later layers win
//! merges: base, shape, size, tone and impact, disabled state, loading
//! state, caller overrides. A caller can therefore retint a button with
//! `.class("bg-emerald-600")` without touching its padding or focus ring.
//!
//! # Example
//!
//! ```
//! use twill_ui::{button, Tone};
//!
//! let html = button("Delete").tone(Tone::Danger).build().to_html();
//! assert!(html.contains("bg-red-600"));
//! assert!(html.ends_with(">Delete</button>"));
//! ```

use std::borrow::Cow;

use indexmap::IndexMap;
use tracing::debug;

use twill_core::ClassList;
use twill_html::{AttrValue, Element, Node};

use crate::spinner::Spinner;
use crate::variant::{
    tone_impact_classes, Impact, Shape, Size, Tone, BASE_CLASSES, DISABLED_CLASSES,
    LOADING_CLASSES,
};

/// A variant-driven button.
///
/// Construct with [`button`] or [`Button::new`], chain setters, then
/// [`build`](Button::build) an [`Element`] or splice the button straight
/// into a maud template via [`maud::Render`].
#[derive(Clone, Debug)]
pub struct Button {
    tone: Tone,
    impact: Impact,
    shape: Shape,
    size: Size,
    disabled: bool,
    loading: bool,
    class: Option<String>,
    attrs: IndexMap<Cow<'static, str>, AttrValue>,
    children: Vec<Node>,
}

/// Start a button with a text label.
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            tone: Tone::default(),
            impact: Impact::default(),
            shape: Shape::default(),
            size: Size::default(),
            disabled: false,
            loading: false,
            class: None,
            attrs: IndexMap::new(),
            children: vec![Node::Text(label.into())],
        }
    }

    /// A button with no label; add content with [`child`](Button::child).
    pub fn empty() -> Self {
        Self {
            children: Vec::new(),
            ..Self::new("")
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn impact(mut self, impact: Impact) -> Self {
        self.impact = impact;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Disable the button. Renders the `disabled` attribute and layers
    /// on the disabled classes.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the button as busy. Appends a spinner after the children,
    /// sets `aria-busy`, and layers on the loading classes. Interactivity
    /// is untouched; pair with [`disabled`](Button::disabled) to block
    /// clicks during the wait.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Caller class overrides, merged in last so they win conflicts.
    /// Repeated calls accumulate in call order.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().trim();
        if class.is_empty() {
            return self;
        }
        match &mut self.class {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.class = Some(class.to_owned()),
        }
        self
    }

    /// Set a pass-through attribute such as `id`, `data-*`, or `hx-post`.
    ///
    /// Names are not interpreted and values are forwarded verbatim. The
    /// computed `class` attribute always replaces a pass-through value
    /// under that name; a pass-through `disabled` survives unless
    /// [`disabled`](Button::disabled) turns the computed flag on. Use
    /// [`class`](Button::class) to extend the computed class list.
    pub fn attr(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<AttrValue>,
    ) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child after the label.
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

    /// The resolved class attribute for the current variant and state.
    pub fn classes(&self) -> String {
        ClassList::new()
            .push(BASE_CLASSES)
            .push(self.shape.classes())
            .push(self.size.classes())
            .push(tone_impact_classes(self.tone, self.impact))
            .push_if(self.disabled, DISABLED_CLASSES)
            .push_if(self.loading, LOADING_CLASSES)
            .push(self.class.clone().unwrap_or_default())
            .merge()
    }

    /// Resolve into a `<button>` element.
    pub fn build(&self) -> Element {
        let class = self.classes();
        debug!(
            tone = self.tone.as_str(),
            impact = self.impact.as_str(),
            shape = self.shape.as_str(),
            size = self.size.as_str(),
            class = %class,
            "resolved button classes"
        );

        let mut element = Element::new("button");
        if !self.attrs.contains_key("type") {
            element = element.attr("type", "button");
        }
        for (name, value) in &self.attrs {
            element = element.attr(name.clone(), value.clone());
        }
        element = element.attr("class", class);
        if self.disabled {
            element = element.attr("disabled", true);
        }
        element = element.children(self.children.iter().cloned());
        if self.loading {
            element = element.attr("aria-busy", "true");
            element = element.child(Spinner::new().build());
        }
        element
    }
}

impl maud::Render for Button {
    fn render_to(&self, buffer: &mut String) {
        maud::Render::render_to(&self.build(), buffer)
    }
}
