//! Validators — total predicates over untrusted input.
//!
//! Every function here answers `bool` for any input, including empty
//! strings, NaN, infinities, text where a number was expected, and missing
//! channels. None of them normalize: `"aa"` is not a level and `12.5` is
//! not a channel. Normalization happens in [`crate::sanitize`].

use std::sync::LazyLock;

use regex::Regex;

use crate::input::{ColorInput, RawRgb, RawValue};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern compiles")
});

/// Smallest accepted font size, in pixels.
pub const MIN_FONT_SIZE: f64 = 8.0;

/// Largest accepted font size, in pixels.
pub const MAX_FONT_SIZE: f64 = 96.0;

/// `true` iff `hex` is 3 or 6 hex digits, with or without a leading `#`.
#[must_use]
pub fn is_valid_hex_color(hex: &str) -> bool {
    if hex.is_empty() {
        return false;
    }
    if hex.starts_with('#') {
        HEX_COLOR.is_match(hex)
    } else {
        HEX_COLOR.is_match(&format!("#{hex}"))
    }
}

/// `true` iff every channel is a number, integral, and within 0–255.
///
/// Text channels are rejected even when they would parse (`"12"`).
#[must_use]
pub fn is_valid_rgb(rgb: &RawRgb) -> bool {
    rgb.channels()
        .into_iter()
        .all(|channel| channel.as_number().is_some_and(is_byte))
}

fn is_byte(v: f64) -> bool {
    v.fract() == 0.0 && (0.0..=255.0).contains(&v)
}

/// `true` iff `size` is finite and within 8–96 px inclusive.
#[must_use]
pub fn is_valid_font_size(size: f64) -> bool {
    size.is_finite() && (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size)
}

/// `true` iff `level` is exactly `"AA"` or `"AAA"`. Case-sensitive.
#[must_use]
pub fn is_valid_accessibility_level(level: &str) -> bool {
    matches!(level, "AA" | "AAA")
}

/// Dispatch to the hex or RGB validator by shape. Any other shape is invalid.
#[must_use]
pub fn is_valid_color(color: &ColorInput) -> bool {
    match color {
        ColorInput::Hex(hex) => is_valid_hex_color(hex),
        ColorInput::Rgb(rgb) => is_valid_rgb(rgb),
        ColorInput::Other(_) => false,
    }
}

/// `true` iff both colors, the font size, and the level are all valid.
///
/// The font size must already be a number; numeric text does not count.
#[must_use]
pub fn validate_contrast_parameters(
    foreground: &ColorInput,
    background: &ColorInput,
    font_size: impl Into<RawValue>,
    level: &str,
) -> bool {
    is_valid_color(foreground)
        && is_valid_color(background)
        && font_size.into().as_number().is_some_and(is_valid_font_size)
        && is_valid_accessibility_level(level)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ev_color::Rgb;

    // ── Hex ─────────────────────────────────────────────────────────

    #[test]
    fn hex_accepts_three_and_six_digits() {
        assert!(is_valid_hex_color("#000000"));
        assert!(is_valid_hex_color("#FFFFFF"));
        assert!(is_valid_hex_color("#123ABC"));
        assert!(is_valid_hex_color("#FFF"));
        assert!(is_valid_hex_color("000000"));
        assert!(is_valid_hex_color("abc"));
    }

    #[test]
    fn hex_rejects_malformed() {
        assert!(!is_valid_hex_color(""));
        assert!(!is_valid_hex_color("#"));
        assert!(!is_valid_hex_color("#12345"));
        assert!(!is_valid_hex_color("#GHIJKL"));
        assert!(!is_valid_hex_color("not-a-color"));
        assert!(!is_valid_hex_color("##FFF"));
        assert!(!is_valid_hex_color(" #FFF"));
        assert!(!is_valid_hex_color("#FFF\n"));
    }

    // ── RGB ─────────────────────────────────────────────────────────

    #[test]
    fn rgb_accepts_byte_triples() {
        assert!(is_valid_rgb(&RawRgb::new(0, 0, 0)));
        assert!(is_valid_rgb(&RawRgb::new(255, 255, 255)));
        assert!(is_valid_rgb(&RawRgb::new(123, 45, 67)));
        assert!(is_valid_rgb(&Rgb::new(1, 2, 3).into()));
    }

    #[test]
    fn rgb_rejects_out_of_range_and_fractions() {
        assert!(!is_valid_rgb(&RawRgb::new(-1, 0, 0)));
        assert!(!is_valid_rgb(&RawRgb::new(256, 0, 0)));
        assert!(!is_valid_rgb(&RawRgb::new(12.5, 0.0, 0.0)));
        assert!(!is_valid_rgb(&RawRgb::new(f64::NAN, 0.0, 0.0)));
        assert!(!is_valid_rgb(&RawRgb::new(f64::INFINITY, 0.0, 0.0)));
    }

    #[test]
    fn rgb_rejects_text_and_missing() {
        assert!(!is_valid_rgb(&RawRgb::new(0, "invalid", 0)));
        assert!(!is_valid_rgb(&RawRgb::new(0, "12", 0)));
        assert!(!is_valid_rgb(&RawRgb::default()));
    }

    // ── Font size ───────────────────────────────────────────────────

    #[test]
    fn font_size_bounds_are_inclusive() {
        assert!(is_valid_font_size(8.0));
        assert!(is_valid_font_size(16.0));
        assert!(is_valid_font_size(96.0));
        assert!(is_valid_font_size(12.5));
        assert!(!is_valid_font_size(7.0));
        assert!(!is_valid_font_size(97.0));
    }

    #[test]
    fn font_size_rejects_non_finite() {
        assert!(!is_valid_font_size(f64::NAN));
        assert!(!is_valid_font_size(f64::INFINITY));
        assert!(!is_valid_font_size(f64::NEG_INFINITY));
    }

    // ── Level ───────────────────────────────────────────────────────

    #[test]
    fn level_is_case_sensitive() {
        assert!(is_valid_accessibility_level("AA"));
        assert!(is_valid_accessibility_level("AAA"));
        assert!(!is_valid_accessibility_level("aa"));
        assert!(!is_valid_accessibility_level("A"));
        assert!(!is_valid_accessibility_level(""));
        assert!(!is_valid_accessibility_level("AA "));
    }

    // ── All parameters ──────────────────────────────────────────────

    #[test]
    fn contrast_parameters_all_valid() {
        assert!(validate_contrast_parameters(
            &"#000000".into(),
            &"#FFFFFF".into(),
            16,
            "AA"
        ));
        assert!(validate_contrast_parameters(
            &RawRgb::new(0, 0, 0).into(),
            &"#FFF".into(),
            96,
            "AAA"
        ));
    }

    #[test]
    fn other_json_is_never_valid() {
        assert!(!is_valid_color(&ColorInput::Other(serde_json::Value::from(123_u64))));
        assert!(!is_valid_rgb(&RawRgb::new(RawValue::Other(true.into()), 0, 0)));
    }

    #[test]
    fn contrast_parameters_reject_any_bad_field() {
        let black = ColorInput::from("#000000");
        let white = ColorInput::from("#FFFFFF");
        assert!(!validate_contrast_parameters(&black, &white, 7, "AA"));
        assert!(!validate_contrast_parameters(&black, &white, 16, "INVALID"));
        assert!(!validate_contrast_parameters(&"#12345".into(), &white, 16, "AA"));
        assert!(!validate_contrast_parameters(
            &black,
            &RawRgb::new(256, 0, 0).into(),
            16,
            "AA"
        ));
        assert!(!validate_contrast_parameters(&black, &white, "16", "AA"));
        assert!(!validate_contrast_parameters(&black, &white, RawValue::Missing, "AA"));
    }
}
