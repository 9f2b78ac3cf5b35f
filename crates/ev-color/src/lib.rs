// SPDX-License-Identifier: MIT
//
// ev-color — Color representations for ev-contrast.
//
// The foundation layer every contrast metric starts from: 8-bit sRGB
// triples, their linear-light decoding, HSL for presentation, and the
// hex notation users actually type. Everything here is a pure function
// over `Copy` values.
//
// Two error philosophies meet at this crate's edge. Decoding hex is
// strict (`hex_to_rgb` returns `Err` on anything that isn't 3 or 6 hex
// digits). Encoding is lenient (`rgb_to_hex` rounds and clamps whatever
// it is given). Callers that need to tell good input from bad do so in
// `ev-guard`, before reaching for either.

pub mod color;
pub mod error;
pub mod hex;

pub use color::{Hsl, LinearRgb, Rgb, linear_to_srgb, rgb_to_hsl, round_half_up, srgb_to_linear};
pub use error::ColorError;
pub use hex::{hex_to_rgb, rgb_to_hex};
