//! Input shapes — what untrusted data looks like before and after sanitizing.
//!
//! Form fields, CLI arguments, and JSON payloads all reach the checker as
//! one of these. [`RawValue`] is deliberately loose (a number, some text,
//! or nothing at all) so that validators can stay total over malformed
//! data instead of pushing the problem into a type error at the caller.
//!
//! All untrusted shapes deserialize untagged:
//!
//! | JSON                          | Shape                           |
//! |-------------------------------|---------------------------------|
//! | `"#1e40af"`                   | `ColorInput::Hex`               |
//! | `{"r": 30, "g": 64, "b": 175}`| `ColorInput::Rgb`               |
//! | `{"r": "30", "g": null}`      | `ColorInput::Rgb` (text, nulls) |
//! | `123`, `true`                 | `ColorInput::Other`             |
//!
//! Every JSON value deserializes into some shape. Whatever doesn't fit
//! lands in an `Other` variant, which validators reject and sanitizers
//! turn into `None`.

use std::convert::Infallible;
use std::str::FromStr;

use ev_color::Rgb;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── RawValue ───────────────────────────────────────────────────────────────

/// One untrusted scalar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Absent or `null`.
    #[default]
    Missing,
    /// A boolean, array, or object.
    Other(Value),
}

impl RawValue {
    /// The value if it is already a number. Text is not coerced.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) | Self::Missing | Self::Other(_) => None,
        }
    }

    /// The value if it is text. Numbers are not stringified.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) | Self::Missing | Self::Other(_) => None,
        }
    }

    /// Coerce to a number.
    ///
    /// Numbers pass through. Text is trimmed and parsed as a decimal
    /// float. Anything that doesn't parse, and a missing value, becomes
    /// `NaN`, which every range check downstream rejects.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            Self::Missing | Self::Other(_) => f64::NAN,
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u8> for RawValue {
    fn from(n: u8) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

// ─── RawRgb ─────────────────────────────────────────────────────────────────

/// An untrusted RGB triple. Missing fields deserialize as [`RawValue::Missing`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRgb {
    #[serde(default)]
    pub r: RawValue,
    #[serde(default)]
    pub g: RawValue,
    #[serde(default)]
    pub b: RawValue,
}

impl RawRgb {
    #[must_use]
    pub fn new(r: impl Into<RawValue>, g: impl Into<RawValue>, b: impl Into<RawValue>) -> Self {
        Self {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }

    /// The channels in `r, g, b` order.
    #[must_use]
    pub const fn channels(&self) -> [&RawValue; 3] {
        [&self.r, &self.g, &self.b]
    }
}

impl From<Rgb> for RawRgb {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

// ─── ColorInput ─────────────────────────────────────────────────────────────

/// An untrusted color: hex text, an RGB triple, or something else entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hex(String),
    Rgb(RawRgb),
    /// Any JSON value that fits neither form, such as a number or a boolean.
    Other(Value),
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl From<RawRgb> for ColorInput {
    fn from(rgb: RawRgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb.into())
    }
}

/// Command-line form: `118,118,118` is a triple, anything else is hex.
///
/// Never fails. A malformed triple is still a triple (with text or
/// missing channels) and is left for the sanitizer to reject.
impl FromStr for ColorInput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(',') {
            return Ok(Self::Hex(s.to_owned()));
        }
        let mut parts = s.split(',').map(|part| RawValue::Text(part.to_owned()));
        let r = parts.next().unwrap_or_default();
        let g = parts.next().unwrap_or_default();
        let b = parts.next().unwrap_or_default();
        // A fourth component makes the triple malformed.
        if parts.next().is_some() {
            return Ok(Self::Rgb(RawRgb::new(RawValue::Missing, g, b)));
        }
        Ok(Self::Rgb(RawRgb { r, g, b }))
    }
}

// ─── Canonical values ───────────────────────────────────────────────────────

/// A sanitized color, keeping the form it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CanonicalColor {
    /// Uppercase `#RRGGBB` and the color it denotes.
    Hex {
        hex: String,
        #[serde(skip)]
        rgb: Rgb,
    },
    Rgb(Rgb),
}

impl CanonicalColor {
    #[must_use]
    pub const fn to_rgb(&self) -> Rgb {
        match self {
            Self::Hex { rgb, .. } | Self::Rgb(rgb) => *rgb,
        }
    }

    /// Uppercase `#RRGGBB`, whichever form the color arrived in.
    #[must_use]
    pub fn to_hex(&self) -> String {
        match self {
            Self::Hex { hex, .. } => hex.clone(),
            Self::Rgb(rgb) => rgb.to_hex().to_uppercase(),
        }
    }
}

/// A sanitized font descriptor: whole pixels in 8–96, plus weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
    pub bold: bool,
}

impl Font {
    /// WCAG "large text": at least 24 px, or at least 18.66 px when bold.
    #[must_use]
    pub fn is_large_text(self) -> bool {
        let size = f64::from(self.size);
        size >= 24.0 || (self.bold && size >= 18.66)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
