//! Ordered merge of utility-class fragments
//!
//! [`merge`] flattens any number of whitespace-separated class fragments
//! into a single class string in which at most one utility survives per
//! conflict slot. Later fragments win, which is what lets a caller
//! override a component default by appending to it.
//!
//! A conflict slot is the pair of a [`ClassGroup`] and the modifier chain
//! in front of the utility. `hover:bg-red-500` never unseats a plain
//! `bg-indigo-600`; they drive different states. Modifier order is
//! irrelevant for conflicts (`hover:focus:` and `focus:hover:` share a
//! slot), but the surviving token keeps whatever spelling it arrived with.
//!
//! Unrecognized classes carry no group. They pass through in order,
//! are only deduplicated on exact text, and each miss is reported at
//! debug level.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::group::ClassGroup;

/// A class token split into its modifier chain and base utility.
///
/// `hover:!bg-red-500` carries one modifier, the important flag, and the
/// base `bg-red-500`. Modifiers are kept twice: in source order for
/// display and sorted for conflict keying.
struct ParsedClass<'a> {
    sorted_modifiers: SmallVec<[&'a str; 4]>,
    important: bool,
    base: &'a str,
}

/// Split a token on `:` at bracket depth zero. Arbitrary segments like
/// `[&:hover]` or `bg-[url(a:b)]` may themselves contain colons.
fn split_modifiers(token: &str) -> SmallVec<[&str; 4]> {
    let mut parts: SmallVec<[&str; 4]> = SmallVec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                parts.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&token[start..]);
    parts
}

fn parse_class(token: &str) -> ParsedClass<'_> {
    let mut parts = split_modifiers(token);
    // The final segment is the utility itself; everything before it is a
    // modifier.
    let last = parts.pop().unwrap_or(token);
    let (important, base) = match last.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, last),
    };
    parts.sort_unstable();
    ParsedClass {
        sorted_modifiers: parts,
        important,
        base,
    }
}

/// Identity of a conflict slot.
///
/// Grouped classes collide per (modifiers, important, group). Classes
/// without a group only collide with their own exact spelling.
#[derive(PartialEq, Eq, Hash)]
enum ConflictKey<'a> {
    Group {
        modifiers: SmallVec<[&'a str; 4]>,
        important: bool,
        group: ClassGroup,
    },
    Verbatim(&'a str),
}

/// Merge class fragments, later fragments winning conflicts.
///
/// Fragments may hold any number of whitespace-separated classes; empty
/// and blank fragments contribute nothing. Within the output each
/// surviving class keeps the relative position it held in the input, and
/// the result carries single spaces and no leading or trailing blanks.
///
/// # Example
///
/// ```
/// use twill_core::merge;
///
/// let class = merge(["px-4 py-2 bg-indigo-600", "bg-red-500"]);
/// assert_eq!(class, "px-4 py-2 bg-red-500");
///
/// // Modifier chains keep their own conflict slots.
/// let class = merge(["bg-indigo-600 hover:bg-indigo-500", "hover:bg-red-400"]);
/// assert_eq!(class, "bg-indigo-600 hover:bg-red-400");
/// ```
pub fn merge<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let fragments: SmallVec<[I::Item; 8]> = fragments.into_iter().collect();
    let tokens: Vec<&str> = fragments
        .iter()
        .flat_map(|fragment| fragment.as_ref().split_whitespace())
        .collect();

    // Walk from the back so the last writer of each slot is the one kept,
    // then restore input order at the end.
    let mut seen: FxHashSet<ConflictKey> = FxHashSet::default();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
    for &token in tokens.iter().rev() {
        let parsed = parse_class(token);
        match ClassGroup::of(parsed.base) {
            Some(group) => {
                let key = ConflictKey::Group {
                    modifiers: parsed.sorted_modifiers.clone(),
                    important: parsed.important,
                    group,
                };
                if seen.contains(&key) {
                    trace!(class = token, "dropping conflicting class");
                    continue;
                }
                // A surviving shorthand also claims its longhand slots so
                // earlier side values cannot sneak past it.
                for &covered in group.overrides() {
                    seen.insert(ConflictKey::Group {
                        modifiers: parsed.sorted_modifiers.clone(),
                        important: parsed.important,
                        group: covered,
                    });
                }
                seen.insert(key);
                kept.push(token);
            }
            None => {
                debug!(class = token, "no conflict group for class");
                if seen.insert(ConflictKey::Verbatim(token)) {
                    kept.push(token);
                } else {
                    trace!(class = token, "dropping duplicate class");
                }
            }
        }
    }
    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_later_class_wins_same_group() {
        assert_eq!(merge(["bg-red-500 bg-indigo-600"]), "bg-indigo-600");
        assert_eq!(merge(["bg-red-500", "bg-indigo-600"]), "bg-indigo-600");
        assert_eq!(merge(["p-2", "p-4", "p-8"]), "p-8");
    }

    #[test]
    fn test_non_conflicting_classes_all_survive_in_order() {
        assert_eq!(
            merge(["inline-flex items-center", "px-4 py-2"]),
            "inline-flex items-center px-4 py-2"
        );
    }

    #[test]
    fn test_fragment_boundaries_do_not_matter() {
        assert_eq!(
            merge(["px-4 py-2 px-6"]),
            merge(["px-4", "py-2", "px-6"]),
        );
        assert_eq!(merge(["px-4 py-2 px-6"]), "py-2 px-6");
    }

    #[test]
    fn test_modifiers_scope_conflicts() {
        assert_eq!(
            merge(["bg-indigo-600 hover:bg-indigo-500", "bg-red-500"]),
            "hover:bg-indigo-500 bg-red-500"
        );
        assert_eq!(
            merge(["hover:bg-indigo-500", "hover:bg-red-400"]),
            "hover:bg-red-400"
        );
        assert_eq!(
            merge(["focus-visible:ring-2", "hover:ring-4"]),
            "focus-visible:ring-2 hover:ring-4"
        );
    }

    #[test]
    fn test_modifier_order_is_one_slot() {
        assert_eq!(
            merge(["hover:focus:underline", "focus:hover:no-underline"]),
            "focus:hover:no-underline"
        );
    }

    #[test]
    fn test_important_is_its_own_slot() {
        assert_eq!(merge(["!p-4", "p-2"]), "!p-4 p-2");
        assert_eq!(merge(["!p-4", "!p-2"]), "!p-2");
    }

    #[test]
    fn test_negative_values_conflict_with_positive() {
        assert_eq!(merge(["-mt-2", "mt-4"]), "mt-4");
        assert_eq!(merge(["mt-4", "-mt-2"]), "-mt-2");
    }

    #[test]
    fn test_arbitrary_values_join_their_group() {
        assert_eq!(merge(["bg-indigo-600", "bg-[#1da1f2]"]), "bg-[#1da1f2]");
        assert_eq!(merge(["text-sm", "text-[11px]"]), "text-[11px]");
    }

    #[test]
    fn test_shorthand_drops_earlier_longhands() {
        assert_eq!(merge(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(merge(["pl-1 pr-3", "px-6"]), "px-6");
        assert_eq!(merge(["rounded-t-lg rounded-bl-sm", "rounded-md"]), "rounded-md");
        assert_eq!(merge(["border-t-2", "border-2"]), "border-2");
    }

    #[test]
    fn test_longhand_after_shorthand_keeps_both() {
        assert_eq!(merge(["p-4", "px-6"]), "p-4 px-6");
        assert_eq!(merge(["rounded-md", "rounded-tl-none"]), "rounded-md rounded-tl-none");
    }

    #[test]
    fn test_font_size_drops_earlier_line_height() {
        assert_eq!(merge(["leading-7", "text-lg"]), "text-lg");
        assert_eq!(merge(["text-lg", "leading-7"]), "text-lg leading-7");
    }

    #[test]
    fn test_width_and_color_do_not_collide() {
        assert_eq!(merge(["ring-2", "ring-red-500"]), "ring-2 ring-red-500");
        assert_eq!(merge(["border", "border-red-600"]), "border border-red-600");
        assert_eq!(merge(["text-lg", "text-red-600"]), "text-lg text-red-600");
        assert_eq!(merge(["font-bold", "font-mono"]), "font-bold font-mono");
        assert_eq!(merge(["shadow-md", "shadow-indigo-500/50"]), "shadow-md shadow-indigo-500/50");
    }

    #[test]
    fn test_unknown_classes_pass_through_and_dedup_exact() {
        assert_eq!(merge(["btn cta-button", "btn"]), "cta-button btn");
        assert_eq!(merge(["sr-only", "bg-red-500"]), "sr-only bg-red-500");
    }

    #[test]
    fn test_blank_input_shapes() {
        assert_eq!(merge::<[&str; 0]>([]), "");
        assert_eq!(merge([""]), "");
        assert_eq!(merge(["   "]), "");
        assert_eq!(merge(["  px-4   py-2  ", ""]), "px-4 py-2");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge(["px-2 py-1 bg-red-500", "p-4 bg-indigo-600 hover:bg-indigo-500"]);
        let twice = merge([once.as_str()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_owned_fragments_are_accepted() {
        let parts: Vec<String> = vec!["px-4".to_owned(), "px-6".to_owned()];
        assert_eq!(merge(parts), "px-6");
    }

    #[test]
    fn test_bracketed_colon_is_not_a_modifier_split() {
        // The colon inside the arbitrary value must not split the token.
        assert_eq!(merge(["bg-[color:red]", "bg-red-500"]), "bg-red-500");
        assert_eq!(
            merge(["hover:bg-[color:red]", "hover:bg-red-500"]),
            "hover:bg-red-500"
        );
    }

    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl LogCapture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
        type Writer = LogCapture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_classification_miss_is_logged_at_debug() {
        let capture = LogCapture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(capture.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        let merged = tracing::subscriber::with_default(subscriber, || {
            merge(["js-analytics-hook px-2", "px-4"])
        });

        // The unknown class is kept and reported, classified ones stay quiet.
        assert_eq!(merged, "js-analytics-hook px-4");
        let log = capture.contents();
        assert!(log.contains("no conflict group for class"));
        assert!(log.contains("js-analytics-hook"));
        assert_eq!(log.matches("no conflict group").count(), 1);
    }
}
