// SPDX-License-Identifier: MIT
//
// ev-color color types — 8-bit sRGB, linear light, and HSL.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science. Renaming them would make
// the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   hex ↔ Rgb (u8) ↔ LinearRgb (f64, 0.0–1.0)
//           │
//           └──→ Hsl (presentation only)
//
// The transfer curve here uses the 0.03928 breakpoint from the WCAG 2.x
// text, not the 0.04045 of IEC 61966-2-1. The two agree on every 8-bit
// input, and the inverse breakpoint (0.00304) is chosen so that every
// byte survives a decode/encode round trip exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::rgb_to_hex;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
///
/// Channels are `u8`, so a value of this type always satisfies the
/// [0, 255] channel invariant. Untrusted triples (floats, text, missing
/// channels) are represented by `ev_guard::RawRgb` and only become an
/// `Rgb` after sanitization.
///
/// # Examples
///
/// ```
/// use ev_color::Rgb;
///
/// let slate: Rgb = "#1e293b".parse().unwrap();
/// assert_eq!(slate, Rgb::new(0x1e, 0x29, 0x3b));
/// assert_eq!(slate.to_hex(), "#1e293b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as `[r, g, b]`.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.into())
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    #[must_use]
    pub fn to_linear(self) -> LinearRgb {
        srgb_to_linear(self)
    }
}

impl From<Rgb> for (f64, f64, f64) {
    fn from(rgb: Rgb) -> Self {
        (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── LinearRgb ───────────────────────────────────────────────────────────────

/// Linear-light RGB, each channel in [0.0, 1.0].
///
/// Produced by [`srgb_to_linear`]. Not clamped: values come straight out
/// of the transfer curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue/saturation/lightness, rounded to whole units.
///
/// Derived for display only; no metric reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, 0–359.
    pub h: u16,
    /// Saturation percentage, 0–100.
    pub s: u8,
    /// Lightness percentage, 0–100.
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Rounding ────────────────────────────────────────────────────────────────

/// Round to the nearest integer, ties toward positive infinity.
///
/// `f64::round` sends ties away from zero, which disagrees on negative
/// halves (`-0.5` → `-1.0`). Every rounding step in the checker uses this
/// instead so that `-0.4`…`-0.5` sanitize to `0` rather than being
/// rejected, and one-decimal APCA values round the same way for both
/// polarities.
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Round and clamp a float channel into a byte. NaN becomes 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    round_half_up(v).clamp(0.0, 255.0) as u8
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// Convert 8-bit sRGB to HSL.
///
/// Greyscale inputs (max == min) have hue and saturation exactly 0. A hue
/// that rounds up to 360° wraps to 0°.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let max_c = rgb.r.max(rgb.g).max(rgb.b);
    let min_c = rgb.r.min(rgb.g).min(rgb.b);

    let (r, g, b) = (
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    );
    let max = f64::from(max_c) / 255.0;
    let min = f64::from(min_c) / 255.0;
    let l = max.midpoint(min);

    if max_c == min_c {
        return Hsl { h: 0, s: 0, l: to_percent(l) };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max_c == rgb.r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max_c == rgb.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // sector is in [0, 6); one sixth of the wheel per unit.
    let degrees = round_half_up(sector / 6.0 * 360.0) as u16 % 360;

    Hsl {
        h: degrees,
        s: to_percent(s),
        l: to_percent(l),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(v: f64) -> u8 {
    round_half_up(v * 100.0).clamp(0.0, 100.0) as u8
}

// ─── sRGB ↔ Linear (Gamma) ───────────────────────────────────────────────────

/// sRGB decode breakpoint, in normalized (0–1) units.
const DECODE_THRESHOLD: f64 = 0.039_28;

/// Linear encode breakpoint. `DECODE_THRESHOLD / 12.92`, truncated.
const ENCODE_THRESHOLD: f64 = 0.003_04;

/// Decode one 8-bit sRGB channel into linear light.
#[inline]
fn decode_channel(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= DECODE_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light channel back into an 8-bit sRGB channel.
#[inline]
fn encode_channel(c: f64) -> u8 {
    let v = if c <= ENCODE_THRESHOLD {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    };
    to_u8(v * 255.0)
}

/// Convert 8-bit sRGB to linear light (remove gamma).
#[must_use]
pub fn srgb_to_linear(rgb: Rgb) -> LinearRgb {
    LinearRgb {
        r: decode_channel(rgb.r),
        g: decode_channel(rgb.g),
        b: decode_channel(rgb.b),
    }
}

/// Convert linear light back to 8-bit sRGB (apply gamma).
///
/// Exact inverse of [`srgb_to_linear`] at byte granularity: for every
/// `x: Rgb`, `linear_to_srgb(srgb_to_linear(x)) == x`.
#[must_use]
pub fn linear_to_srgb(linear: LinearRgb) -> Rgb {
    Rgb {
        r: encode_channel(linear.r),
        g: encode_channel(linear.g),
        b: encode_channel(linear.b),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
