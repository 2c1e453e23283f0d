//! Twill Core Engine
//!
//! Foundational styling primitives for the Twill component kit:
//!
//! - **Conflict groups**: [`ClassGroup`] maps a utility class to the style
//!   property it drives, so `bg-red-500` and `bg-indigo-600` are known to
//!   fight over the same slot
//! - **Ordered merge**: [`merge`] flattens class fragments into a single
//!   class string, later fragments winning conflicts while everything
//!   else keeps its input order
//! - **Class lists**: [`ClassList`] layers base, variant, and override
//!   fragments before handing them to the merge
//!
//! # Example
//!
//! ```
//! use twill_core::merge;
//!
//! let class = merge(["px-4 py-2", "px-6"]);
//! assert_eq!(class, "py-2 px-6");
//! ```

pub mod group;
pub mod list;
pub mod merge;

pub use group::ClassGroup;
pub use list::ClassList;
pub use merge::merge;
