//! Button variant axes and their class fragments
//!
//! Four closed axes describe a button: [`Tone`] picks the color family,
//! [`Impact`] the visual weight, [`Shape`] the corner treatment, and
//! [`Size`] the box scale. Each resolves to a fixed fragment of utility
//! classes; tone and impact resolve jointly because a danger button that
//! is bordered shares nothing with a danger button that is filled.
//!
//! The fragments are plain `&'static str` tables. Composition order and
//! conflict resolution live in the button itself.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failed to parse a variant axis from text.
///
/// Carries the axis name and the accepted values so the message is
/// self-contained when it bubbles out of config loading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {axis} `{value}`, expected one of: {expected}")]
pub struct ParseVariantError {
    axis: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseVariantError {
    fn new(axis: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            axis,
            value: value.to_owned(),
            expected,
        }
    }
}

/// Color family of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tone {
    /// Neutral brand color for ordinary actions.
    #[default]
    Default,
    /// Destructive or irreversible actions.
    Danger,
    /// Actions that deserve a second look.
    Warning,
    /// Confirmations and positive outcomes.
    Success,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Default, Tone::Danger, Tone::Warning, Tone::Success];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Default => "default",
            Tone::Danger => "danger",
            Tone::Warning => "warning",
            Tone::Success => "success",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Tone::Default),
            "danger" => Ok(Tone::Danger),
            "warning" => Ok(Tone::Warning),
            "success" => Ok(Tone::Success),
            _ => Err(ParseVariantError::new(
                "tone",
                s,
                "default, danger, warning, success",
            )),
        }
    }
}

/// Visual weight of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Impact {
    /// Filled with the tone color. The primary action in a view.
    #[default]
    Bold,
    /// Tinted surface, tone-colored text. Secondary actions.
    Light,
    /// Transparent surface with a tone-colored border. Tertiary actions.
    Bordered,
}

impl Impact {
    pub const ALL: [Impact; 3] = [Impact::Bold, Impact::Light, Impact::Bordered];

    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Bold => "bold",
            Impact::Light => "light",
            Impact::Bordered => "bordered",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Impact {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(Impact::Bold),
            "light" => Ok(Impact::Light),
            "bordered" => Ok(Impact::Bordered),
            _ => Err(ParseVariantError::new(
                "impact",
                s,
                "bold, light, bordered",
            )),
        }
    }
}

/// Corner treatment of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    /// Slightly rounded corners.
    #[default]
    Rounded,
    /// Fully rounded ends.
    Pill,
    /// No rounding.
    Square,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Rounded, Shape::Pill, Shape::Square];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Rounded => "rounded",
            Shape::Pill => "pill",
            Shape::Square => "square",
        }
    }

    /// Corner radius classes for this shape.
    pub fn classes(self) -> &'static str {
        match self {
            Shape::Rounded => "rounded-md",
            Shape::Pill => "rounded-full",
            Shape::Square => "rounded-none",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rounded" => Ok(Shape::Rounded),
            "pill" => Ok(Shape::Pill),
            "square" => Ok(Shape::Square),
            _ => Err(ParseVariantError::new(
                "shape",
                s,
                "rounded, pill, square",
            )),
        }
    }
}

/// Box scale of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Size {
    /// Compact, for dense toolbars.
    Sm,
    /// Comfortable default.
    #[default]
    Md,
    /// Prominent, for page-level calls to action.
    Lg,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    /// Padding and font scale classes for this size.
    pub fn classes(self) -> &'static str {
        match self {
            Size::Sm => "px-3 py-1.5 text-sm",
            Size::Md => "px-4 py-2 text-base",
            Size::Lg => "px-6 py-3 text-lg",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            "lg" => Ok(Size::Lg),
            _ => Err(ParseVariantError::new("size", s, "sm, md, lg")),
        }
    }
}

/// Classes shared by every button regardless of variant.
pub const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 font-semibold \
     transition-colors focus-visible:outline-none focus-visible:ring-2 \
     focus-visible:ring-offset-2";

/// Classes layered on while a button is disabled.
pub const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed";

/// Classes layered on while a button is loading.
pub const LOADING_CLASSES: &str = "cursor-wait";

/// Color classes for a tone and impact pair.
///
/// The two axes resolve jointly: impact decides which surfaces the tone
/// color lands on (fill, tint, or border), so there is one entry per
/// pair rather than independent fragments that would fight over the
/// same slots.
pub fn tone_impact_classes(tone: Tone, impact: Impact) -> &'static str {
    match (tone, impact) {
        (Tone::Default, Impact::Bold) => {
            "bg-indigo-600 text-white hover:bg-indigo-500 focus-visible:ring-indigo-500"
        }
        (Tone::Default, Impact::Light) => {
            "bg-indigo-50 text-indigo-700 hover:bg-indigo-100 focus-visible:ring-indigo-500"
        }
        (Tone::Default, Impact::Bordered) => {
            "border border-indigo-600 text-indigo-700 hover:bg-indigo-50 \
             focus-visible:ring-indigo-500"
        }
        (Tone::Danger, Impact::Bold) => {
            "bg-red-600 text-white hover:bg-red-500 focus-visible:ring-red-500"
        }
        (Tone::Danger, Impact::Light) => {
            "bg-red-50 text-red-700 hover:bg-red-100 focus-visible:ring-red-500"
        }
        (Tone::Danger, Impact::Bordered) => {
            "border border-red-600 text-red-700 hover:bg-red-50 focus-visible:ring-red-500"
        }
        (Tone::Warning, Impact::Bold) => {
            "bg-amber-500 text-white hover:bg-amber-400 focus-visible:ring-amber-400"
        }
        (Tone::Warning, Impact::Light) => {
            "bg-amber-50 text-amber-800 hover:bg-amber-100 focus-visible:ring-amber-400"
        }
        (Tone::Warning, Impact::Bordered) => {
            "border border-amber-500 text-amber-800 hover:bg-amber-50 \
             focus-visible:ring-amber-400"
        }
        (Tone::Success, Impact::Bold) => {
            "bg-emerald-600 text-white hover:bg-emerald-500 focus-visible:ring-emerald-500"
        }
        (Tone::Success, Impact::Light) => {
            "bg-emerald-50 text-emerald-700 hover:bg-emerald-100 focus-visible:ring-emerald-500"
        }
        (Tone::Success, Impact::Bordered) => {
            "border border-emerald-600 text-emerald-700 hover:bg-emerald-50 \
             focus-visible:ring-emerald-500"
        }
    }
}
