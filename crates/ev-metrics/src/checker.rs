//! The contrast facade: untrusted request in, both metrics out.
//!
//! [`check_contrast`] never fails. Every field of a [`ContrastRequest`] is
//! sanitized, and anything the sanitizers reject is replaced by its
//! documented default before the engines run:
//!
//! | Field       | Default     |
//! |-------------|-------------|
//! | foreground  | `#000000`   |
//! | background  | `#FFFFFF`   |
//! | font size   | 16 px       |
//! | level       | `AA`        |
//!
//! Each substitution is reported as a `debug` event so that a caller who
//! sees a surprising result can find out which field was dropped.

use ev_color::Rgb;
use ev_guard::{
    CanonicalColor, ColorInput, Font, Level, RawValue, sanitize_accessibility_level,
    sanitize_color, sanitize_font,
};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::apca::{ApcaResult, apca_contrast_rgb};
use crate::wcag::{WcagResult, contrast_ratio_rgb};

pub const DEFAULT_FOREGROUND: Rgb = Rgb::BLACK;
pub const DEFAULT_BACKGROUND: Rgb = Rgb::WHITE;
pub const DEFAULT_FONT_SIZE: u32 = 16;
pub const DEFAULT_LEVEL: Level = Level::AA;

// ─── Request ────────────────────────────────────────────────────────────────

/// Everything a caller might send, unvalidated.
///
/// Any JSON object deserializes: absent fields take their defaults, and
/// fields of the wrong type are kept as-is for [`check_contrast`] to reject.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContrastRequest {
    pub foreground: ColorInput,
    pub background: ColorInput,
    pub font_size: RawValue,
    /// Anything but `true` counts as regular weight.
    #[serde(deserialize_with = "lenient_bool")]
    pub bold: bool,
    pub level: RawValue,
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Other(IgnoredAny),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(bold) => bold,
        Flag::Other(IgnoredAny) => false,
    })
}

impl Default for ContrastRequest {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND.into(),
            background: DEFAULT_BACKGROUND.into(),
            font_size: DEFAULT_FONT_SIZE.into(),
            bold: false,
            level: DEFAULT_LEVEL.as_str().into(),
        }
    }
}

impl ContrastRequest {
    /// A request for `foreground` on `background` with default font and level.
    #[must_use]
    pub fn new(foreground: impl Into<ColorInput>, background: impl Into<ColorInput>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_font(mut self, size: impl Into<RawValue>, bold: bool) -> Self {
        self.font_size = size.into();
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<RawValue>) -> Self {
        self.level = level.into();
        self
    }
}

// ─── Result ─────────────────────────────────────────────────────────────────

/// Both metrics for one sanitized color pair, plus the inputs actually used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Canonical uppercase `#RRGGBB`.
    pub foreground: String,
    pub background: String,
    pub font: Font,
    /// The level requested (after sanitizing), not necessarily the one met.
    pub level: Level,
    pub wcag: WcagResult,
    pub apca: ApcaResult,
}

impl ContrastResult {
    /// Whether both metrics meet `level` for this result's font.
    ///
    /// WCAG is judged at the large-text threshold when
    /// [`Font::is_large_text`] holds, and at the normal one otherwise.
    #[must_use]
    pub fn passes(&self, level: Level) -> bool {
        self.wcag.passes(level, self.font.is_large_text()) && self.apca.passes(level)
    }

    /// [`passes`](Self::passes) at the requested level.
    #[must_use]
    pub fn meets_required(&self) -> bool {
        self.passes(self.level)
    }
}

// ─── Facade ─────────────────────────────────────────────────────────────────

/// Sanitize `request`, substitute defaults, and run both engines.
#[must_use]
pub fn check_contrast(request: &ContrastRequest) -> ContrastResult {
    let foreground = sanitize_color(&request.foreground).unwrap_or_else(|| {
        debug!(input = ?request.foreground, "foreground rejected, using {DEFAULT_FOREGROUND}");
        CanonicalColor::Rgb(DEFAULT_FOREGROUND)
    });

    let background = sanitize_color(&request.background).unwrap_or_else(|| {
        debug!(input = ?request.background, "background rejected, using {DEFAULT_BACKGROUND}");
        CanonicalColor::Rgb(DEFAULT_BACKGROUND)
    });

    let font = sanitize_font(request.font_size.clone(), request.bold).unwrap_or_else(|| {
        debug!(input = ?request.font_size, "font size rejected, using {DEFAULT_FONT_SIZE}px");
        Font {
            size: DEFAULT_FONT_SIZE,
            bold: request.bold,
        }
    });

    let level = request
        .level
        .as_text()
        .and_then(sanitize_accessibility_level)
        .unwrap_or_else(|| {
            debug!(input = ?request.level, "level rejected, using {DEFAULT_LEVEL}");
            DEFAULT_LEVEL
        });

    let fg = foreground.to_rgb();
    let bg = background.to_rgb();
    let wcag = WcagResult::from_ratio(contrast_ratio_rgb(fg, bg));
    let apca = ApcaResult::evaluate(apca_contrast_rgb(fg, bg), font);

    trace!(
        ratio = wcag.ratio,
        lc = apca.contrast,
        size = font.size,
        bold = font.bold,
        "contrast computed"
    );

    ContrastResult {
        foreground: foreground.to_hex(),
        background: background.to_hex(),
        font,
        level,
        wcag,
        apca,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ev_guard::RawRgb;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Defaults ────────────────────────────────────────────────────

    #[test]
    fn default_request_is_black_on_white() {
        let result = check_contrast(&ContrastRequest::default());
        assert_eq!(result.foreground, "#000000");
        assert_eq!(result.background, "#FFFFFF");
        assert_eq!(result.font, Font { size: 16, bold: false });
        assert_eq!(result.level, Level::AA);
        assert!(approx_eq(result.wcag.ratio, 21.0, 1e-6));
        assert!(approx_eq(result.apca.contrast, -114.0, 0.5));
        assert!(result.passes(Level::AAA));
    }

    #[test]
    fn invalid_colors_fall_back_to_defaults() {
        let bad = check_contrast(&ContrastRequest::new("invalid", RawRgb::new(300, 0, 0)));
        let good = check_contrast(&ContrastRequest::default());
        assert_eq!(bad, good);
    }

    #[test]
    fn only_the_rejected_color_is_replaced() {
        let result = check_contrast(&ContrastRequest::new("#1e40af", "#12345"));
        assert_eq!(result.foreground, "#1E40AF");
        assert_eq!(result.background, "#FFFFFF");
    }

    #[test]
    fn invalid_font_size_falls_back_to_16() {
        let result = check_contrast(&ContrastRequest::default().with_font(200, true));
        assert_eq!(result.font, Font { size: 16, bold: true });

        let result = check_contrast(&ContrastRequest::default().with_font("big", false));
        assert_eq!(result.font.size, 16);
    }

    #[test]
    fn invalid_level_falls_back_to_aa() {
        let result = check_contrast(&ContrastRequest::default().with_level("AAAA"));
        assert_eq!(result.level, Level::AA);

        let result = check_contrast(&ContrastRequest::default().with_level(" aaa "));
        assert_eq!(result.level, Level::AAA);
    }

    // ── Inputs ──────────────────────────────────────────────────────

    #[test]
    fn rgb_and_hex_inputs_agree() {
        let from_rgb = check_contrast(&ContrastRequest::new(
            RawRgb::new(118, 118, 118),
            RawRgb::new(255, 255, 255),
        ));
        let from_hex = check_contrast(&ContrastRequest::new("#767676", "fff"));
        assert_eq!(from_rgb, from_hex);
    }

    #[test]
    fn request_from_json() {
        let request: ContrastRequest = serde_json::from_str(
            r##"{"foreground": {"r": 30, "g": 64, "b": 175}, "font_size": "24"}"##,
        )
        .unwrap();
        let result = check_contrast(&request);
        assert_eq!(result.foreground, "#1E40AF");
        assert_eq!(result.background, "#FFFFFF");
        assert_eq!(result.font.size, 24);
    }

    #[test]
    fn malformed_json_fields_fall_back_to_defaults() {
        let defaults = check_contrast(&ContrastRequest::default());
        let bodies = [
            r#"{"foreground": 123}"#,
            r#"{"foreground": true, "background": [255, 255]}"#,
            r#"{"foreground": {"r": true, "g": 0, "b": 0}}"#,
            r#"{"font_size": true}"#,
            r#"{"font_size": {"px": 16}}"#,
            r#"{"level": null}"#,
            r#"{"level": 3}"#,
            r#"{"bold": "yes"}"#,
            r#"{"bold": null, "level": ["AAA"]}"#,
            "{}",
        ];
        for body in bodies {
            let request: ContrastRequest = serde_json::from_str(body).unwrap();
            assert_eq!(check_contrast(&request), defaults, "{body}");
        }
    }

    #[test]
    fn json_bold_and_level_are_read() {
        let request: ContrastRequest =
            serde_json::from_str(r#"{"bold": true, "level": "aaa", "font_size": 19}"#).unwrap();
        let result = check_contrast(&request);
        assert_eq!(result.font, Font { size: 19, bold: true });
        assert_eq!(result.level, Level::AAA);
    }

    // ── Metrics ─────────────────────────────────────────────────────

    #[test]
    fn mid_gray_passes_wcag_but_not_apca_for_body_text() {
        let result = check_contrast(&ContrastRequest::new("#767676", "#FFFFFF"));
        assert!(result.wcag.normal_aa);
        assert!(!result.wcag.normal_aaa);
        assert!(approx_eq(result.apca.contrast, -71.0, 0.5), "{}", result.apca.contrast);
        assert!(!result.apca.meets_aa);
        assert!(!result.meets_required());
    }

    #[test]
    fn mid_gray_passes_both_for_large_text() {
        let request = ContrastRequest::new("#767676", "#FFFFFF").with_font(24, false);
        let result = check_contrast(&request);
        assert!(result.apca.meets_aa);
        assert!(result.meets_required());
        // 4.54:1 clears large-text AAA and Lc 71 clears the 24 px AAA band.
        assert!(result.passes(Level::AAA));
    }

    #[test]
    fn result_serializes() {
        let result = check_contrast(&ContrastRequest::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["foreground"], "#000000");
        assert_eq!(json["level"], "AA");
        assert_eq!(json["font"]["size"], 16);
        assert_eq!(json["wcag"]["normal_aaa"], true);
    }
}
