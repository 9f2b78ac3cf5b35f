// SPDX-License-Identifier: MIT
//
// Errors from the strict decoding path.

use thiserror::Error;

/// Failure to decode a color string.
///
/// Only the strict conversions return this. The sanitizers in `ev-guard`
/// never do; they report rejection as `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not 3 or 6 hexadecimal digits (with or without `#`).
    #[error("invalid hex color format: {input:?} (expected #RGB or #RRGGBB)")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }
}
