//! # ev-guard — Input validation and sanitization for ev-contrast
//!
//! The only boundary between arbitrary external data and the contrast
//! engines. Nothing in here fails: validators answer `bool`, sanitizers
//! answer `Option`, and it is up to the caller to substitute a default.
//!
//! # Architecture
//!
//! ```text
//! ColorInput / RawValue / &str   (untrusted: text, floats, nulls)
//!     │
//!     ▼
//! sanitize.rs:  trim, case-fold, expand shorthand, coerce, round
//!     │
//!     ▼
//! validate.rs:  accept or reject the normalized value
//!     │
//!     ▼
//! CanonicalColor / Font / Level   (trusted: ready for ev-metrics)
//! ```
//!
//! Validators are strict about form (`"aa"` is not a level, `12.5` is not
//! a channel). Sanitizers are lenient about form and strict about range:
//! they fix what can be fixed by normalization and reject the rest.

pub mod input;
pub mod level;
pub mod sanitize;
pub mod validate;

pub use input::{CanonicalColor, ColorInput, Font, RawRgb, RawValue};
pub use level::{Level, LevelError};
pub use sanitize::{
    sanitize_accessibility_level, sanitize_color, sanitize_font, sanitize_font_size,
    sanitize_hex_color, sanitize_rgb,
};
pub use validate::{
    is_valid_accessibility_level, is_valid_color, is_valid_font_size, is_valid_hex_color,
    is_valid_rgb, validate_contrast_parameters,
};
