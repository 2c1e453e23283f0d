//! Twill HTML Model
//!
//! A small element tree for component output:
//!
//! - **Builders**: [`el`], [`div`], [`span`] start an [`Element`]; `attr`,
//!   `class`, and `child` calls chain onto it
//! - **Open attributes**: names pass through verbatim, values are plain
//!   text or boolean flags, insertion order is preserved
//! - **Rendering**: every element implements [`maud::Render`], so trees
//!   splice into `html!` templates or serialize with [`Element::to_html`]
//!
//! # Example
//!
//! ```
//! use twill_html::{div, span};
//!
//! let card = div()
//!     .class("rounded-md p-4")
//!     .attr("data-state", "open")
//!     .child(span().child("Hello"));
//! assert_eq!(
//!     card.to_html(),
//!     r#"<div class="rounded-md p-4" data-state="open"><span>Hello</span></div>"#
//! );
//! ```

pub mod element;
pub mod render;

pub use element::{div, el, span, text, AttrValue, Element, Node};
