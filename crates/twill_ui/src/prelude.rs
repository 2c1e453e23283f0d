//! Common imports for building pages with Twill components
//!
//! ```
//! use twill_ui::prelude::*;
//!
//! let toolbar = div()
//!     .class("inline-flex gap-2")
//!     .child(button("Save").tone(Tone::Success).build())
//!     .child(button("Delete").tone(Tone::Danger).impact(Impact::Bordered).build());
//! assert!(toolbar.to_html().contains("bg-emerald-600"));
//! ```

pub use crate::button::{button, Button};
pub use crate::spinner::{spinner, Spinner};
pub use crate::variant::{Impact, ParseVariantError, Shape, Size, Tone};

pub use twill_core::{merge, ClassList};
pub use twill_html::{div, el, span, text, AttrValue, Element, Node};

pub use maud::{html, Markup, Render};
