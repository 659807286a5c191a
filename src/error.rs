//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
///
/// All of these are local and recoverable. Arithmetic never produces an
/// error: overflow past the 24-hour day and underflow past zero are defined
/// as wraparound and reported through a boolean flag instead.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// No frame rate in the closed set matches the given table row.
    #[error(
        "no frame rate matches {frames_per_second} fps / {divisor_millis}\u{2030} \
         (drop frame: {drop_frame})"
    )]
    InvalidRateId {
        /// Nominal integer frames per second.
        frames_per_second: u32,
        /// Divisor scaled by 1000 (1000 for integer rates, 1001 for NTSC).
        divisor_millis: u32,
        /// Whether drop-frame encoding was requested.
        drop_frame: bool,
    },

    /// Text does not match any canonical frame rate identifier.
    #[error("cannot parse {text:?} as a frame rate identifier")]
    UnparseableRate {
        /// The text that failed to parse.
        text: String,
    },

    /// Display text does not split into exactly four numeric segments.
    #[error("malformed time code: {message}")]
    MalformedTimeCode {
        /// Description of the format error.
        message: String,
    },

    /// Canonical time code string lacks the `/<RateId>` suffix.
    #[error("time code string is missing the /<rate identifier> suffix")]
    MissingRateSuffix,
}

impl TimecodeError {
    /// Create an invalid rate id error from a table row.
    pub fn invalid_rate_id(frames_per_second: u32, divisor: f64, drop_frame: bool) -> Self {
        Self::InvalidRateId {
            frames_per_second,
            divisor_millis: (divisor * 1000.0).round() as u32,
            drop_frame,
        }
    }

    /// Create an unparseable rate error.
    pub fn unparseable_rate(text: impl Into<String>) -> Self {
        Self::UnparseableRate { text: text.into() }
    }

    /// Create a malformed time code error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTimeCode {
            message: message.into(),
        }
    }
}
