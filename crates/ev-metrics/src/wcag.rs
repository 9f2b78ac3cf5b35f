//! WCAG 2.x contrast ratio.
//!
//! - Normal text: AA ≥ 4.5:1, AAA ≥ 7:1
//! - Large text:  AA ≥ 3:1,   AAA ≥ 4.5:1
//!
//! "Large" is the caller's judgment (conventionally ≥ 24 px, or ≥ 18.66 px
//! bold). Nothing in this module looks at font sizes.

use ev_color::{ColorError, Rgb, hex_to_rgb, srgb_to_linear};
use ev_guard::Level;
use serde::Serialize;

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = srgb_to_linear(rgb);
    0.2126f64.mul_add(linear.r, 0.7152f64.mul_add(linear.g, 0.0722 * linear.b))
}

/// WCAG contrast ratio between two decoded colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG contrast ratio between two hex colors.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if either string is not a 3- or
/// 6-digit hex color.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio_rgb(hex_to_rgb(a)?, hex_to_rgb(b)?))
}

/// Minimum ratio for `level`, for display next to a measured ratio.
#[must_use]
pub const fn required_contrast_ratio(level: Level, is_large_text: bool) -> f64 {
    match (level, is_large_text) {
        (Level::AA, true) => 3.0,
        (Level::AA, false) | (Level::AAA, true) => 4.5,
        (Level::AAA, false) => 7.0,
    }
}

/// Whether `ratio` meets `level` for normal or large text.
#[must_use]
pub fn meets_wcag_criteria(ratio: f64, level: Level, is_large_text: bool) -> bool {
    ratio >= required_contrast_ratio(level, is_large_text)
}

/// A WCAG ratio with its pass/fail flags at both levels and both sizes.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WcagResult {
    pub ratio: f64,
    pub normal_aa: bool,
    pub normal_aaa: bool,
    pub large_aa: bool,
    pub large_aaa: bool,
}

impl WcagResult {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            normal_aa: meets_wcag_criteria(ratio, Level::AA, false),
            normal_aaa: meets_wcag_criteria(ratio, Level::AAA, false),
            large_aa: meets_wcag_criteria(ratio, Level::AA, true),
            large_aaa: meets_wcag_criteria(ratio, Level::AAA, true),
        }
    }

    /// The flag for `level` at the given text size.
    #[must_use]
    pub const fn passes(&self, level: Level, is_large_text: bool) -> bool {
        match (level, is_large_text) {
            (Level::AA, false) => self.normal_aa,
            (Level::AAA, false) => self.normal_aaa,
            (Level::AA, true) => self.large_aa,
            (Level::AAA, true) => self.large_aaa,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
