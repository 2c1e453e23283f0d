//! Ordered collections of class fragments

use std::borrow::Cow;

use crate::merge::merge;

/// An ordered list of class fragments waiting to be merged.
///
/// Components compose their class attribute from layered fragments:
/// base classes first, variant classes next, caller overrides last.
/// `ClassList` keeps that layering explicit and defers conflict
/// resolution to [`merge`], so the last pushed fragment wins.
///
/// # Example
///
/// ```
/// use twill_core::ClassList;
///
/// let class = ClassList::new()
///     .push("px-4 py-2 bg-indigo-600")
///     .push_if(true, "opacity-50")
///     .push("bg-red-500")
///     .merge();
/// assert_eq!(class, "px-4 py-2 opacity-50 bg-red-500");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClassList {
    fragments: Vec<Cow<'static, str>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Blank fragments are skipped so callers can pass
    /// optional overrides straight through.
    pub fn push(mut self, fragment: impl Into<Cow<'static, str>>) -> Self {
        let fragment = fragment.into();
        if !fragment.trim().is_empty() {
            self.fragments.push(fragment);
        }
        self
    }

    /// Append a fragment only when `condition` holds. State classes hang
    /// off this: `push_if(disabled, "opacity-50 cursor-not-allowed")`.
    pub fn push_if(self, condition: bool, fragment: impl Into<Cow<'static, str>>) -> Self {
        if condition {
            self.push(fragment)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Resolve the list into its final class string, later fragments
    /// winning conflicts.
    pub fn merge(&self) -> String {
        merge(self.fragments.iter().map(Cow::as_ref))
    }
}

impl<S: Into<Cow<'static, str>>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(ClassList::new(), ClassList::push)
    }
}
