// SPDX-License-Identifier: MIT
//
// Hex notation — strict decoding, lenient encoding.
//
// Decoding accepts `#RGB` and `#RRGGBB` (the `#` is optional, case is
// ignored) and nothing else. Shorthand expands by digit duplication:
// `#1AB` → `#11AABB`. Whitespace is not trimmed here; that is a
// sanitizer's job.
//
// Encoding never fails. Float channels are rounded and clamped to a
// byte, then written as lowercase `#rrggbb`.

use std::str::FromStr;

use crate::color::{Rgb, to_u8};
use crate::error::ColorError;

// ─── Decoding ────────────────────────────────────────────────────────────────

/// Decode a hex color string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if, after stripping one leading
/// `#`, the input is not exactly 3 or 6 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use ev_color::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#F00").unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(hex_to_rgb("1e40af").unwrap(), Rgb::new(30, 64, 175));
/// assert!(hex_to_rgb("#12").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    let invalid = || ColorError::invalid_format(hex);

    match digits.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(digits[0]).ok_or_else(invalid)?;
            let g = parse_hex_digit(digits[1]).ok_or_else(invalid)?;
            let b = parse_hex_digit(digits[2]).ok_or_else(invalid)?;
            Ok(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&digits[0..2]).ok_or_else(invalid)?;
            let g = parse_hex_byte(&digits[2..4]).ok_or_else(invalid)?;
            let b = parse_hex_byte(&digits[4..6]).ok_or_else(invalid)?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Encode float channels as lowercase `#rrggbb`.
///
/// Each channel is rounded to the nearest integer and clamped to 0–255
/// first, so out-of-range or fractional input is accepted silently.
///
/// ```
/// use ev_color::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex((255.4, 128.6, 0.1)), "#ff8100");
/// assert_eq!(rgb_to_hex((300.0, -50.0, 128.0)), "#ff0080");
/// ```
#[must_use]
pub fn rgb_to_hex((r, g, b): (f64, f64, f64)) -> String {
    format!("#{:02x}{:02x}{:02x}", to_u8(r), to_u8(g), to_u8(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Decoding ────────────────────────────────────────────────────

    #[test]
    fn decode_six_digits() {
        assert_eq!(hex_to_rgb("#FFFFFF"), Ok(Rgb::WHITE));
        assert_eq!(hex_to_rgb("#000000"), Ok(Rgb::BLACK));
        assert_eq!(hex_to_rgb("#FF0000"), Ok(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn decode_three_digits_duplicates_each_digit() {
        assert_eq!(hex_to_rgb("#FFF"), Ok(Rgb::WHITE));
        assert_eq!(hex_to_rgb("#000"), Ok(Rgb::BLACK));
        assert_eq!(hex_to_rgb("#F00"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("#1AB"), Ok(Rgb::new(0x11, 0xAA, 0xBB)));
    }

    #[test]
    fn decode_without_hash_and_mixed_case() {
        assert_eq!(hex_to_rgb("FFFFFF"), Ok(Rgb::WHITE));
        assert_eq!(hex_to_rgb("#1e40AF"), Ok(Rgb::new(30, 64, 175)));
    }

    #[test]
    fn decode_rejects_bad_digits() {
        assert_eq!(
            hex_to_rgb("#XYZ"),
            Err(ColorError::InvalidFormat {
                input: "#XYZ".to_owned()
            })
        );
        assert!(hex_to_rgb("#GGGGGG").is_err());
    }

    #[test]
    fn decode_rejects_bad_lengths() {
        for input in ["", "#", "#12", "#1234", "#12345", "#1234567", "##123"] {
            assert!(hex_to_rgb(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn decode_does_not_trim() {
        assert!(hex_to_rgb(" #FFF").is_err());
        assert!(hex_to_rgb("#FFF ").is_err());
    }

    #[test]
    fn from_str_matches_hex_to_rgb() {
        let parsed: Rgb = "#767676".parse().unwrap();
        assert_eq!(parsed, Rgb::new(118, 118, 118));
        assert!("nope".parse::<Rgb>().is_err());
    }

    #[test]
    fn error_message_names_input() {
        let err = hex_to_rgb("#12").unwrap_err();
        assert!(err.to_string().contains("\"#12\""), "message: {err}");
    }

    // ── Encoding ────────────────────────────────────────────────────

    #[test]
    fn encode_lowercase_zero_padded() {
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn encode_rounds_fractions() {
        assert_eq!(rgb_to_hex((255.4, 128.6, 0.1)), "#ff8100");
    }

    #[test]
    fn encode_clamps_out_of_range() {
        assert_eq!(rgb_to_hex((300.0, -50.0, 128.0)), "#ff0080");
    }

    // ── Round trip ──────────────────────────────────────────────────

    #[test]
    fn hex_roundtrip_is_case_insensitive_identity() {
        let samples = ["#000000", "#FFFFFF", "#767676", "#1E40AF", "#c86432", "#0A0b0C", "#FEFEFE"];
        for hex in samples {
            let back = rgb_to_hex(hex_to_rgb(hex).unwrap().into());
            assert_eq!(back.to_uppercase(), hex.to_uppercase());
        }
    }
}
