//! # ev-metrics — Contrast engines for ev-contrast
//!
//! Two independent answers to "can this text be read on that background",
//! plus the facade that asks both at once.
//!
//! # Architecture
//!
//! ```text
//! ContrastRequest (untrusted colors, size, level)
//!     │
//!     ▼
//! ev-guard:     sanitize, fall back to documented defaults
//!     │
//!     ├──────────────────────┐
//!     ▼                      ▼
//! wcag.rs:  luminance    apca.rs:  polarity-aware Lc
//!           ratio 1–21             signed, font-banded
//!     │                      │
//!     └──────────┬───────────┘
//!                ▼
//! checker.rs:   ContrastResult (immutable, serializable)
//! ```
//!
//! # Two luminance paths
//!
//! WCAG and APCA both linearize sRGB with the same curve, but weight the
//! channels with different precision and then diverge completely. Each
//! engine keeps its own luminance function so that neither algorithm's
//! evolution can leak into the other.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Threshold tables compare against exact published constants.
#![allow(clippy::float_cmp)]

pub mod apca;
pub mod checker;
pub mod wcag;

pub use apca::{
    ApcaResult, apca_contrast, apca_contrast_rgb, apca_y, meets_apca_criteria,
    required_apca_contrast,
};
pub use checker::{ContrastRequest, ContrastResult, check_contrast};
pub use wcag::{
    WcagResult, contrast_ratio, contrast_ratio_rgb, meets_wcag_criteria, relative_luminance,
    required_contrast_ratio,
};
