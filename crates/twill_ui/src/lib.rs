//! Twill UI Components
//!
//! Variant-driven components styled with utility classes. A component is
//! described by a handful of closed axes rather than free-form styling:
//! pick a [`Tone`], an [`Impact`], a [`Shape`], and a [`Size`], and the
//! component resolves them into a single conflict-free class string.
//!
//! Caller overrides merge on top via [`twill_core::merge`], so appending
//! `bg-emerald-600` retints a button without disturbing its padding,
//! focus ring, or hover states.
//!
//! # Example
//!
//! ```
//! use twill_ui::prelude::*;
//!
//! let save = button("Save")
//!     .tone(Tone::Success)
//!     .size(Size::Lg)
//!     .attr("data-action", "save")
//!     .build();
//! assert!(save.to_html().starts_with("<button type=\"button\""));
//! ```
//!
//! Components implement [`maud::Render`] and can be spliced straight
//! into `html!` templates:
//!
//! ```
//! use twill_ui::prelude::*;
//!
//! let page = html! {
//!     div class="p-8" { (button("Get started").shape(Shape::Pill)) }
//! };
//! assert!(page.into_string().contains("rounded-full"));
//! ```

pub mod button;
pub mod prelude;
pub mod spinner;
pub mod variant;

pub use button::{button, Button};
pub use spinner::{spinner, Spinner};
pub use variant::{Impact, ParseVariantError, Shape, Size, Tone};
