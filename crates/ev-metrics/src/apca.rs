//! APCA lightness contrast (Lc), version 0.0.98G-4g, sRGB input only.
//!
//! Unlike the WCAG ratio, APCA is polarity-aware: dark text on a light
//! background uses different exponents than light text on a dark one.
//! The sign of Lc records which case applied.
//!
//! | Polarity                    | Formula                          | Sign |
//! |-----------------------------|----------------------------------|------|
//! | dark text, light background | `Ybg^0.56 − Ytxt^0.57`           | −    |
//! | light text, dark background | `Ytxt^0.65 − Ybg^0.62`           | +    |
//!
//! Conformance is judged on |Lc| against a table banded by effective font
//! size, where bold text counts as 1.25× its pixel size.

use ev_color::{ColorError, Rgb, hex_to_rgb, round_half_up};
use ev_guard::{Font, Level};
use serde::Serialize;

// ─── Algorithm constants (0.0.98G-4g) ───────────────────────────────────────

const MAIN_TRC: f64 = 2.4;
const TRC_BREAKPOINT: f64 = 0.039_28;

const S_RCO: f64 = 0.212_672_9;
const S_GCO: f64 = 0.715_152_2;
const S_BCO: f64 = 0.072_175_0;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_BG: f64 = 0.62;
const REV_TXT: f64 = 0.65;

const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_CLIP: f64 = 0.1;
const DELTA_Y_MIN: f64 = 0.0005;

/// Bold text is looked up as if it were this much larger.
const BOLD_SIZE_FACTOR: f64 = 1.25;

// ─── Luminance ──────────────────────────────────────────────────────────────

/// APCA screen luminance Y of an sRGB color.
///
/// Same transfer curve as WCAG, different channel weights. Kept separate
/// from `wcag::relative_luminance` on purpose.
#[must_use]
pub fn apca_y(rgb: Rgb) -> f64 {
    let linearize = |c: u8| -> f64 {
        let c = f64::from(c) / 255.0;
        if c > TRC_BREAKPOINT {
            ((c + 0.055) / 1.055).powf(MAIN_TRC)
        } else {
            c / 12.92
        }
    };

    S_RCO.mul_add(
        linearize(rgb.r),
        S_GCO.mul_add(linearize(rgb.g), S_BCO * linearize(rgb.b)),
    )
}

// ─── Contrast ───────────────────────────────────────────────────────────────

/// APCA Lc of `text` over `background`, rounded to one decimal.
///
/// Negative for dark-on-light, positive for light-on-dark, and exactly
/// `0.0` when the luminances are within 0.0005 of each other or the
/// scaled difference falls below the low clip.
#[must_use]
pub fn apca_contrast_rgb(text: Rgb, background: Rgb) -> f64 {
    let y_txt = apca_y(text);
    let y_bg = apca_y(background);

    if (y_bg - y_txt).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let lc = if y_bg > y_txt {
        // Dark text on light background.
        let sapc = y_bg.powf(NORM_BG) - y_txt.powf(NORM_TXT);
        if sapc < LO_CLIP {
            return 0.0;
        }
        -(sapc * SCALE_BOW * 100.0)
    } else {
        // Light text on dark background.
        let sapc = y_txt.powf(REV_TXT) - y_bg.powf(REV_BG);
        if sapc < LO_CLIP {
            return 0.0;
        }
        sapc * SCALE_WOB * 100.0
    };

    round_half_up(lc * 10.0) / 10.0
}

/// APCA Lc between two hex colors.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if either string is not a 3- or
/// 6-digit hex color.
pub fn apca_contrast(text: &str, background: &str) -> Result<f64, ColorError> {
    Ok(apca_contrast_rgb(hex_to_rgb(text)?, hex_to_rgb(background)?))
}

// ─── Conformance ────────────────────────────────────────────────────────────

/// Minimum |Lc| per size band, largest band first: ≥24, ≥18, ≥14, <14 px.
const AA_THRESHOLDS: [f64; 4] = [45.0, 60.0, 75.0, 90.0];
const AAA_THRESHOLDS: [f64; 4] = [60.0, 75.0, 90.0, 98.0];

fn size_band(font_size: f64, is_bold: bool) -> usize {
    let effective = if is_bold {
        font_size * BOLD_SIZE_FACTOR
    } else {
        font_size
    };

    if effective >= 24.0 {
        0
    } else if effective >= 18.0 {
        1
    } else if effective >= 14.0 {
        2
    } else {
        3
    }
}

/// Minimum |Lc| for text of this size and weight at `level`.
#[must_use]
pub fn required_apca_contrast(font_size: f64, is_bold: bool, level: Level) -> f64 {
    let table = match level {
        Level::AA => &AA_THRESHOLDS,
        Level::AAA => &AAA_THRESHOLDS,
    };
    table[size_band(font_size, is_bold)]
}

/// Whether |`contrast`| meets `level` for text of this size and weight.
///
/// Both polarities are judged the same way.
#[must_use]
pub fn meets_apca_criteria(contrast: f64, font_size: f64, is_bold: bool, level: Level) -> bool {
    contrast.abs() >= required_apca_contrast(font_size, is_bold, level)
}

/// An APCA Lc with its pass/fail flags for one font.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApcaResult {
    pub contrast: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
}

impl ApcaResult {
    #[must_use]
    pub fn evaluate(contrast: f64, font: Font) -> Self {
        let size = f64::from(font.size);
        Self {
            contrast,
            meets_aa: meets_apca_criteria(contrast, size, font.bold, Level::AA),
            meets_aaa: meets_apca_criteria(contrast, size, font.bold, Level::AAA),
        }
    }

    #[must_use]
    pub const fn passes(&self, level: Level) -> bool {
        match level {
            Level::AA => self.meets_aa,
            Level::AAA => self.meets_aaa,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
