//! Loading spinner
//!
//! A border-trick spinner: a round span with a transparent top border,
//! spun by `animate-spin`. It inherits `currentColor`, so it matches
//! whatever text color the surrounding component resolved to.

use twill_core::merge;
use twill_html::{span, Element};

/// Classes that make up the spinner. The size rides on `h-4 w-4` and can
/// be overridden per instance.
pub const SPINNER_CLASSES: &str =
    "inline-block h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent";

/// An inline loading indicator.
///
/// Decorative by contract: it always renders `aria-hidden`, and
/// components announce busyness themselves (the button sets `aria-busy`).
#[derive(Clone, Debug, Default)]
pub struct Spinner {
    class: Option<String>,
}

/// Start a spinner.
pub fn spinner() -> Spinner {
    Spinner::new()
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Class overrides, merged over [`SPINNER_CLASSES`].
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Resolve into a `<span>` element.
    pub fn build(&self) -> Element {
        let class = match &self.class {
            Some(extra) => merge([SPINNER_CLASSES, extra.as_str()]),
            None => SPINNER_CLASSES.to_owned(),
        };
        span().attr("class", class).attr("aria-hidden", "true")
    }
}

impl maud::Render for Spinner {
    fn render_to(&self, buffer: &mut String) {
        maud::Render::render_to(&self.build(), buffer)
    }
}
