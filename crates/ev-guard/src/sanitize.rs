//! Sanitizers — normalize untrusted input, or reject it with `None`.
//!
//! Each sanitizer first applies every normalization that can't change
//! the meaning of the input (trimming, case folding, shorthand expansion,
//! numeric coercion, rounding) and then hands the result to the matching
//! validator. Whatever survives is canonical:
//!
//! | Input                 | Canonical form            |
//! |-----------------------|---------------------------|
//! | hex color             | uppercase `#RRGGBB`       |
//! | RGB triple            | [`Rgb`] (three `u8`)      |
//! | font size             | whole pixels, 8–96        |
//! | level                 | [`Level::AA`] / [`Level::AAA`] |

use ev_color::{Rgb, hex_to_rgb, round_half_up};

use crate::input::{CanonicalColor, ColorInput, Font, RawRgb, RawValue};
use crate::level::Level;
use crate::validate::{is_valid_font_size, is_valid_hex_color, is_valid_rgb};

/// Normalize a hex color to uppercase `#RRGGBB`.
///
/// Trims whitespace, upper-cases, adds a missing `#`, and expands 3-digit
/// shorthand by doubling each digit (`123` → `#112233`).
///
/// ```
/// use ev_guard::sanitize_hex_color;
///
/// assert_eq!(sanitize_hex_color("  #123abc  ").as_deref(), Some("#123ABC"));
/// assert_eq!(sanitize_hex_color("123").as_deref(), Some("#112233"));
/// assert_eq!(sanitize_hex_color("#12345"), None);
/// ```
#[must_use]
pub fn sanitize_hex_color(hex: &str) -> Option<String> {
    let normalized = hex.trim().to_uppercase();
    if normalized.is_empty() {
        return None;
    }

    let with_hash = if normalized.starts_with('#') {
        normalized
    } else {
        format!("#{normalized}")
    };

    if !is_valid_hex_color(&with_hash) {
        return None;
    }

    let digits = &with_hash[1..];
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        return Some(format!("#{expanded}"));
    }

    Some(with_hash)
}

/// Coerce and round each channel, then accept only a valid byte triple.
///
/// Numeric text is parsed; non-numeric text or a missing channel rejects
/// the whole triple.
#[must_use]
pub fn sanitize_rgb(rgb: &RawRgb) -> Option<Rgb> {
    let [r, g, b] = rgb.channels().map(|channel| round_half_up(channel.to_number()));

    if !is_valid_rgb(&RawRgb::new(r, g, b)) {
        return None;
    }
    Some(Rgb::new(to_byte(r), to_byte(g), to_byte(b)))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(v: f64) -> u8 {
    // Only called after is_valid_rgb has confirmed a whole number in 0–255.
    v as u8
}

/// Coerce and round a font size, accepting only 8–96 px.
///
/// ```
/// use ev_guard::sanitize_font_size;
///
/// assert_eq!(sanitize_font_size(16.7), Some(17));
/// assert_eq!(sanitize_font_size("24"), Some(24));
/// assert_eq!(sanitize_font_size(7), None);
/// assert_eq!(sanitize_font_size(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sanitize_font_size(size: impl Into<RawValue>) -> Option<u32> {
    let rounded = round_half_up(size.into().to_number());
    // Safe: the range check bounds the value to 8.0..=96.0 before truncation.
    is_valid_font_size(rounded).then_some(rounded as u32)
}

/// Sanitize a font size and pair it with a weight.
#[must_use]
pub fn sanitize_font(size: impl Into<RawValue>, bold: bool) -> Option<Font> {
    sanitize_font_size(size).map(|size| Font { size, bold })
}

/// Trim and upper-case a level name, accepting only `AA` or `AAA`.
#[must_use]
pub fn sanitize_accessibility_level(level: &str) -> Option<Level> {
    level.trim().to_uppercase().parse().ok()
}

/// Sanitize a color by shape: hex text or an RGB triple.
#[must_use]
pub fn sanitize_color(color: &ColorInput) -> Option<CanonicalColor> {
    match color {
        ColorInput::Hex(text) => {
            let hex = sanitize_hex_color(text)?;
            let rgb = hex_to_rgb(&hex).ok()?;
            Some(CanonicalColor::Hex { hex, rgb })
        }
        ColorInput::Rgb(raw) => sanitize_rgb(raw).map(CanonicalColor::Rgb),
        ColorInput::Other(_) => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
