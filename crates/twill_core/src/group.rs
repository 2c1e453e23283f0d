//! Conflict groups for utility classes
//!
//! Two utility classes conflict when they drive the same style property.
//! `bg-red-500` and `bg-indigo-600` both set the background color, so only
//! one of them may survive a merge. [`ClassGroup`] names these properties,
//! and [`ClassGroup::of`] maps a bare utility (modifiers already stripped)
//! to its group.
//!
//! Some shorthand groups swallow their longhand counterparts as well:
//! a later `p-4` makes an earlier `px-2` dead. [`ClassGroup::overrides`]
//! lists the groups a shorthand claims in addition to its own.
//!
//! Classification is keyword and prefix driven. A handful of prefixes are
//! ambiguous (`text-lg` sizes, `text-red-600` colors) and are split on the
//! shape of the value segment. Utilities outside the covered set simply get
//! no group and pass through merges verbatim.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// The style property a utility class controls.
///
/// Groups mirror the utility families of a Tailwind-style class set:
/// spacing, sizing, typography, backgrounds, borders, effects,
/// interactivity, and motion. Side and corner variants (`PaddingX`,
/// `RadiusTopLeft`) are distinct groups so that `px-2 py-2` can coexist,
/// while [`ClassGroup::overrides`] lets the shorthand win over them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassGroup {
    // Layout
    Display,
    Position,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    Visibility,
    Overflow,
    OverflowX,
    OverflowY,

    // Flexbox
    FlexDirection,
    FlexWrap,
    Flex,
    Grow,
    Shrink,
    AlignItems,
    AlignSelf,
    JustifyContent,
    Gap,
    GapX,
    GapY,

    // Spacing
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,

    // Sizing
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,

    // Typography
    FontSize,
    FontWeight,
    FontFamily,
    FontStyle,
    LineHeight,
    LetterSpacing,
    TextAlign,
    TextColor,
    TextTransform,
    TextDecoration,
    TextOverflow,
    WhiteSpace,
    VerticalAlign,

    // Backgrounds
    BackgroundColor,
    BackgroundImage,

    // Borders
    BorderWidth,
    BorderWidthX,
    BorderWidthY,
    BorderWidthTop,
    BorderWidthRight,
    BorderWidthBottom,
    BorderWidthLeft,
    BorderColor,
    BorderColorX,
    BorderColorY,
    BorderColorTop,
    BorderColorRight,
    BorderColorBottom,
    BorderColorLeft,
    BorderStyle,
    Radius,
    RadiusTop,
    RadiusRight,
    RadiusBottom,
    RadiusLeft,
    RadiusTopLeft,
    RadiusTopRight,
    RadiusBottomRight,
    RadiusBottomLeft,

    // Effects
    RingWidth,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    OutlineStyle,
    OutlineWidth,
    OutlineOffset,
    OutlineColor,
    Shadow,
    ShadowColor,
    Opacity,

    // Interactivity
    Cursor,
    UserSelect,
    PointerEvents,

    // Motion
    TransitionProperty,
    TransitionDuration,
    TransitionTiming,
    TransitionDelay,
    Animation,

    // Transforms
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    TranslateX,
    TranslateY,
}

impl ClassGroup {
    /// Classify a bare utility (no modifiers, no `!` prefix).
    ///
    /// A leading `-` marks a negative value and is ignored for grouping;
    /// `-mt-2` and `mt-2` fight over the same property.
    ///
    /// Returns `None` for utilities outside the covered set, which the
    /// merge then treats as opaque and passes through.
    pub fn of(utility: &str) -> Option<ClassGroup> {
        let utility = utility.strip_prefix('-').unwrap_or(utility);
        if let Some(group) = keyword_group(utility) {
            return Some(group);
        }
        prefixed_group(utility)
    }

    /// Groups a utility in this group makes stale in addition to its own.
    ///
    /// Shorthands claim their longhands (`p-4` beats `px-2` and `pl-1`),
    /// and `FontSize` claims `LineHeight` because `text-*` sizes carry a
    /// line height of their own. The relation is one way: a longhand never
    /// unseats an earlier shorthand.
    pub fn overrides(self) -> &'static [ClassGroup] {
        use ClassGroup::*;
        match self {
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            Overflow => &[OverflowX, OverflowY],
            Gap => &[GapX, GapY],
            Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
            ],
            PaddingX => &[PaddingRight, PaddingLeft],
            PaddingY => &[PaddingTop, PaddingBottom],
            Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
            ],
            MarginX => &[MarginRight, MarginLeft],
            MarginY => &[MarginTop, MarginBottom],
            FontSize => &[LineHeight],
            BorderWidth => &[
                BorderWidthX,
                BorderWidthY,
                BorderWidthTop,
                BorderWidthRight,
                BorderWidthBottom,
                BorderWidthLeft,
            ],
            BorderWidthX => &[BorderWidthRight, BorderWidthLeft],
            BorderWidthY => &[BorderWidthTop, BorderWidthBottom],
            BorderColor => &[
                BorderColorX,
                BorderColorY,
                BorderColorTop,
                BorderColorRight,
                BorderColorBottom,
                BorderColorLeft,
            ],
            BorderColorX => &[BorderColorRight, BorderColorLeft],
            BorderColorY => &[BorderColorTop, BorderColorBottom],
            Radius => &[
                RadiusTop,
                RadiusRight,
                RadiusBottom,
                RadiusLeft,
                RadiusTopLeft,
                RadiusTopRight,
                RadiusBottomRight,
                RadiusBottomLeft,
            ],
            RadiusTop => &[RadiusTopLeft, RadiusTopRight],
            RadiusRight => &[RadiusTopRight, RadiusBottomRight],
            RadiusBottom => &[RadiusBottomRight, RadiusBottomLeft],
            RadiusLeft => &[RadiusTopLeft, RadiusBottomLeft],
            Scale => &[ScaleX, ScaleY],
            _ => &[],
        }
    }
}

/// Utilities that are a fixed word rather than a prefix plus value.
const KEYWORDS: &[(&str, ClassGroup)] = &[
    // Display
    ("block", ClassGroup::Display),
    ("inline-block", ClassGroup::Display),
    ("inline", ClassGroup::Display),
    ("flex", ClassGroup::Display),
    ("inline-flex", ClassGroup::Display),
    ("grid", ClassGroup::Display),
    ("inline-grid", ClassGroup::Display),
    ("contents", ClassGroup::Display),
    ("hidden", ClassGroup::Display),
    // Position
    ("static", ClassGroup::Position),
    ("fixed", ClassGroup::Position),
    ("absolute", ClassGroup::Position),
    ("relative", ClassGroup::Position),
    ("sticky", ClassGroup::Position),
    // Visibility
    ("visible", ClassGroup::Visibility),
    ("invisible", ClassGroup::Visibility),
    ("collapse", ClassGroup::Visibility),
    // Flexbox
    ("flex-row", ClassGroup::FlexDirection),
    ("flex-row-reverse", ClassGroup::FlexDirection),
    ("flex-col", ClassGroup::FlexDirection),
    ("flex-col-reverse", ClassGroup::FlexDirection),
    ("flex-wrap", ClassGroup::FlexWrap),
    ("flex-wrap-reverse", ClassGroup::FlexWrap),
    ("flex-nowrap", ClassGroup::FlexWrap),
    ("flex-1", ClassGroup::Flex),
    ("flex-auto", ClassGroup::Flex),
    ("flex-initial", ClassGroup::Flex),
    ("flex-none", ClassGroup::Flex),
    ("grow", ClassGroup::Grow),
    ("grow-0", ClassGroup::Grow),
    ("shrink", ClassGroup::Shrink),
    ("shrink-0", ClassGroup::Shrink),
    // Typography
    ("italic", ClassGroup::FontStyle),
    ("not-italic", ClassGroup::FontStyle),
    ("underline", ClassGroup::TextDecoration),
    ("overline", ClassGroup::TextDecoration),
    ("line-through", ClassGroup::TextDecoration),
    ("no-underline", ClassGroup::TextDecoration),
    ("uppercase", ClassGroup::TextTransform),
    ("lowercase", ClassGroup::TextTransform),
    ("capitalize", ClassGroup::TextTransform),
    ("normal-case", ClassGroup::TextTransform),
    ("truncate", ClassGroup::TextOverflow),
    ("text-ellipsis", ClassGroup::TextOverflow),
    ("text-clip", ClassGroup::TextOverflow),
    // Borders
    ("border", ClassGroup::BorderWidth),
    ("border-x", ClassGroup::BorderWidthX),
    ("border-y", ClassGroup::BorderWidthY),
    ("border-t", ClassGroup::BorderWidthTop),
    ("border-r", ClassGroup::BorderWidthRight),
    ("border-b", ClassGroup::BorderWidthBottom),
    ("border-l", ClassGroup::BorderWidthLeft),
    ("border-solid", ClassGroup::BorderStyle),
    ("border-dashed", ClassGroup::BorderStyle),
    ("border-dotted", ClassGroup::BorderStyle),
    ("border-double", ClassGroup::BorderStyle),
    ("border-hidden", ClassGroup::BorderStyle),
    ("border-none", ClassGroup::BorderStyle),
    ("rounded", ClassGroup::Radius),
    ("rounded-t", ClassGroup::RadiusTop),
    ("rounded-r", ClassGroup::RadiusRight),
    ("rounded-b", ClassGroup::RadiusBottom),
    ("rounded-l", ClassGroup::RadiusLeft),
    ("rounded-tl", ClassGroup::RadiusTopLeft),
    ("rounded-tr", ClassGroup::RadiusTopRight),
    ("rounded-br", ClassGroup::RadiusBottomRight),
    ("rounded-bl", ClassGroup::RadiusBottomLeft),
    // Effects
    ("ring", ClassGroup::RingWidth),
    ("outline", ClassGroup::OutlineStyle),
    ("outline-none", ClassGroup::OutlineStyle),
    ("outline-dashed", ClassGroup::OutlineStyle),
    ("outline-dotted", ClassGroup::OutlineStyle),
    ("outline-double", ClassGroup::OutlineStyle),
    ("shadow", ClassGroup::Shadow),
    ("shadow-inner", ClassGroup::Shadow),
    ("shadow-none", ClassGroup::Shadow),
    // Motion
    ("transition", ClassGroup::TransitionProperty),
    ("transition-none", ClassGroup::TransitionProperty),
    ("transition-all", ClassGroup::TransitionProperty),
    ("transition-colors", ClassGroup::TransitionProperty),
    ("transition-opacity", ClassGroup::TransitionProperty),
    ("transition-shadow", ClassGroup::TransitionProperty),
    ("transition-transform", ClassGroup::TransitionProperty),
];

fn keyword_group(utility: &str) -> Option<ClassGroup> {
    static TABLE: OnceLock<FxHashMap<&'static str, ClassGroup>> = OnceLock::new();
    let table = TABLE.get_or_init(|| KEYWORDS.iter().copied().collect());
    table.get(utility).copied()
}

/// Named font sizes, so `text-lg` sizes while `text-red-600` colors.
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

/// Named font weights, so `font-bold` weighs while `font-serif` sets a family.
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl"];

/// Whether a value segment carries a plain scale step (`2`, `0.5`, `1/2`)
/// or an arbitrary length (`[3px]`). Used to split width-like utilities
/// from color-like ones under a shared prefix.
fn is_scale_value(value: &str) -> bool {
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        return inner.starts_with(|c: char| c.is_ascii_digit()) || inner.starts_with('.');
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '/')
}

/// Whether an arbitrary value like `[11px]` or `[1.375rem]` looks like a
/// length rather than a color.
fn is_arbitrary_length(value: &str) -> bool {
    match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => inner.starts_with(|c: char| c.is_ascii_digit()) || inner.starts_with('.'),
        None => false,
    }
}

/// Prefix rules, most specific first. Each returns as soon as it matches,
/// so `inset-x-` must be checked before `inset-`, and the `text-` rule can
/// assume alignment and size have already been ruled out when it falls
/// back to color.
fn prefixed_group(utility: &str) -> Option<ClassGroup> {
    use ClassGroup::*;

    // Layout
    if let Some(rest) = utility.strip_prefix("inset-") {
        if let Some(value) = rest.strip_prefix("x-") {
            return present(value, InsetX);
        }
        if let Some(value) = rest.strip_prefix("y-") {
            return present(value, InsetY);
        }
        return present(rest, Inset);
    }
    if let Some(value) = utility.strip_prefix("top-") {
        return present(value, Top);
    }
    if let Some(value) = utility.strip_prefix("right-") {
        return present(value, Right);
    }
    if let Some(value) = utility.strip_prefix("bottom-") {
        return present(value, Bottom);
    }
    if let Some(value) = utility.strip_prefix("left-") {
        return present(value, Left);
    }
    if let Some(value) = utility.strip_prefix("z-") {
        return present(value, ZIndex);
    }
    if let Some(rest) = utility.strip_prefix("overflow-") {
        if let Some(value) = rest.strip_prefix("x-") {
            return present(value, OverflowX);
        }
        if let Some(value) = rest.strip_prefix("y-") {
            return present(value, OverflowY);
        }
        return present(rest, Overflow);
    }

    // Flexbox
    if let Some(value) = utility.strip_prefix("grow-") {
        return present(value, Grow);
    }
    if let Some(value) = utility.strip_prefix("shrink-") {
        return present(value, Shrink);
    }
    if let Some(value) = utility.strip_prefix("flex-") {
        // Direction and wrap are fixed words handled by the keyword table;
        // whatever remains is a flex-basis shorthand like `flex-[2]`.
        return present(value, Flex);
    }
    if let Some(value) = utility.strip_prefix("items-") {
        return present(value, AlignItems);
    }
    if let Some(value) = utility.strip_prefix("self-") {
        return present(value, AlignSelf);
    }
    if let Some(value) = utility.strip_prefix("justify-") {
        return present(value, JustifyContent);
    }
    if let Some(rest) = utility.strip_prefix("gap-") {
        if let Some(value) = rest.strip_prefix("x-") {
            return present(value, GapX);
        }
        if let Some(value) = rest.strip_prefix("y-") {
            return present(value, GapY);
        }
        return present(rest, Gap);
    }

    // Spacing
    if let Some(value) = utility.strip_prefix("px-") {
        return present(value, PaddingX);
    }
    if let Some(value) = utility.strip_prefix("py-") {
        return present(value, PaddingY);
    }
    if let Some(value) = utility.strip_prefix("pt-") {
        return present(value, PaddingTop);
    }
    if let Some(value) = utility.strip_prefix("pr-") {
        return present(value, PaddingRight);
    }
    if let Some(value) = utility.strip_prefix("pb-") {
        return present(value, PaddingBottom);
    }
    if let Some(value) = utility.strip_prefix("pl-") {
        return present(value, PaddingLeft);
    }
    if let Some(value) = utility.strip_prefix("p-") {
        return present(value, Padding);
    }
    if let Some(value) = utility.strip_prefix("mx-") {
        return present(value, MarginX);
    }
    if let Some(value) = utility.strip_prefix("my-") {
        return present(value, MarginY);
    }
    if let Some(value) = utility.strip_prefix("mt-") {
        return present(value, MarginTop);
    }
    if let Some(value) = utility.strip_prefix("mr-") {
        return present(value, MarginRight);
    }
    if let Some(value) = utility.strip_prefix("mb-") {
        return present(value, MarginBottom);
    }
    if let Some(value) = utility.strip_prefix("ml-") {
        return present(value, MarginLeft);
    }
    if let Some(value) = utility.strip_prefix("m-") {
        return present(value, Margin);
    }

    // Sizing
    if let Some(value) = utility.strip_prefix("min-w-") {
        return present(value, MinWidth);
    }
    if let Some(value) = utility.strip_prefix("max-w-") {
        return present(value, MaxWidth);
    }
    if let Some(value) = utility.strip_prefix("min-h-") {
        return present(value, MinHeight);
    }
    if let Some(value) = utility.strip_prefix("max-h-") {
        return present(value, MaxHeight);
    }
    if let Some(value) = utility.strip_prefix("w-") {
        return present(value, Width);
    }
    if let Some(value) = utility.strip_prefix("h-") {
        return present(value, Height);
    }

    // Typography
    if let Some(value) = utility.strip_prefix("text-") {
        if value.is_empty() {
            return None;
        }
        if TEXT_ALIGNMENTS.contains(&value) {
            return Some(TextAlign);
        }
        if TEXT_SIZES.contains(&value) || is_arbitrary_length(value) {
            return Some(FontSize);
        }
        return Some(TextColor);
    }
    if let Some(value) = utility.strip_prefix("font-") {
        if value.is_empty() {
            return None;
        }
        if FONT_WEIGHTS.contains(&value) {
            return Some(FontWeight);
        }
        return Some(FontFamily);
    }
    if let Some(value) = utility.strip_prefix("leading-") {
        return present(value, LineHeight);
    }
    if let Some(value) = utility.strip_prefix("tracking-") {
        return present(value, LetterSpacing);
    }
    if let Some(value) = utility.strip_prefix("whitespace-") {
        return present(value, WhiteSpace);
    }
    if let Some(value) = utility.strip_prefix("align-") {
        return present(value, VerticalAlign);
    }

    // Backgrounds
    if let Some(value) = utility.strip_prefix("bg-") {
        if value.is_empty() {
            return None;
        }
        if value == "none" || value.starts_with("gradient-") || value.starts_with("[url(") {
            return Some(BackgroundImage);
        }
        return Some(BackgroundColor);
    }

    // Borders
    if let Some(rest) = utility.strip_prefix("border-") {
        for (side, width_group, color_group) in [
            ("x-", BorderWidthX, BorderColorX),
            ("y-", BorderWidthY, BorderColorY),
            ("t-", BorderWidthTop, BorderColorTop),
            ("r-", BorderWidthRight, BorderColorRight),
            ("b-", BorderWidthBottom, BorderColorBottom),
            ("l-", BorderWidthLeft, BorderColorLeft),
        ] {
            if let Some(value) = rest.strip_prefix(side) {
                if value.is_empty() {
                    return None;
                }
                if is_scale_value(value) {
                    return Some(width_group);
                }
                return Some(color_group);
            }
        }
        if rest.is_empty() {
            return None;
        }
        if is_scale_value(rest) {
            return Some(BorderWidth);
        }
        return Some(BorderColor);
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        for (corner, group) in [
            ("tl-", RadiusTopLeft),
            ("tr-", RadiusTopRight),
            ("br-", RadiusBottomRight),
            ("bl-", RadiusBottomLeft),
            ("t-", RadiusTop),
            ("r-", RadiusRight),
            ("b-", RadiusBottom),
            ("l-", RadiusLeft),
        ] {
            if let Some(value) = rest.strip_prefix(corner) {
                return present(value, group);
            }
        }
        return present(rest, Radius);
    }

    // Effects
    if let Some(value) = utility.strip_prefix("ring-offset-") {
        if value.is_empty() {
            return None;
        }
        if is_scale_value(value) {
            return Some(RingOffsetWidth);
        }
        return Some(RingOffsetColor);
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        if value.is_empty() {
            return None;
        }
        if is_scale_value(value) {
            return Some(RingWidth);
        }
        return Some(RingColor);
    }
    if let Some(value) = utility.strip_prefix("outline-offset-") {
        return present(value, OutlineOffset);
    }
    if let Some(value) = utility.strip_prefix("outline-") {
        if value.is_empty() {
            return None;
        }
        if is_scale_value(value) {
            return Some(OutlineWidth);
        }
        return Some(OutlineColor);
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        if value.is_empty() {
            return None;
        }
        if SHADOW_SIZES.contains(&value) || is_arbitrary_length(value) {
            return Some(Shadow);
        }
        return Some(ShadowColor);
    }
    if let Some(value) = utility.strip_prefix("opacity-") {
        return present(value, Opacity);
    }

    // Interactivity
    if let Some(value) = utility.strip_prefix("cursor-") {
        return present(value, Cursor);
    }
    if let Some(value) = utility.strip_prefix("select-") {
        return present(value, UserSelect);
    }
    if let Some(value) = utility.strip_prefix("pointer-events-") {
        return present(value, PointerEvents);
    }

    // Motion
    if let Some(value) = utility.strip_prefix("transition-") {
        return present(value, TransitionProperty);
    }
    if let Some(value) = utility.strip_prefix("duration-") {
        return present(value, TransitionDuration);
    }
    if let Some(value) = utility.strip_prefix("ease-") {
        return present(value, TransitionTiming);
    }
    if let Some(value) = utility.strip_prefix("delay-") {
        return present(value, TransitionDelay);
    }
    if let Some(value) = utility.strip_prefix("animate-") {
        return present(value, Animation);
    }

    // Transforms
    if let Some(value) = utility.strip_prefix("scale-x-") {
        return present(value, ScaleX);
    }
    if let Some(value) = utility.strip_prefix("scale-y-") {
        return present(value, ScaleY);
    }
    if let Some(value) = utility.strip_prefix("scale-") {
        return present(value, Scale);
    }
    if let Some(value) = utility.strip_prefix("rotate-") {
        return present(value, Rotate);
    }
    if let Some(value) = utility.strip_prefix("translate-x-") {
        return present(value, TranslateX);
    }
    if let Some(value) = utility.strip_prefix("translate-y-") {
        return present(value, TranslateY);
    }

    None
}

/// A prefix rule only matches when something follows the dash; a bare
/// `top-` or `gap-` is not a utility.
fn present(value: &str, group: ClassGroup) -> Option<ClassGroup> {
    if value.is_empty() {
        None
    } else {
        Some(group)
    }
}
