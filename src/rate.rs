//! Frame rates for SMPTE ST 12 time code.
//!
//! The ten standard rates form a closed set: each variant carries its fixed
//! table row (nominal fps, divisor, drop-frame flag, maximum frame count).
//! Non-integer rates are expressed as an integer base divided by 1.001, so
//! 29.97 fps is 30 fps with a 1.001 divisor.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A standard frame rate, as used by SMPTE ST 12 time code.
///
/// The `Ndf`/`Df` suffix distinguishes non-drop-frame from drop-frame
/// encoding. Only rates whose integer base is a multiple of 30 have a
/// drop-frame variant (29.97 and 59.94).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    /// 23.976 fps (24/1.001, NTSC film), non-drop-frame.
    #[serde(rename = "FPS_23_976_NDF")]
    Fps23_976Ndf,
    /// 24 fps (film), non-drop-frame.
    #[serde(rename = "FPS_24_NDF")]
    Fps24Ndf,
    /// 25 fps (PAL), non-drop-frame.
    #[serde(rename = "FPS_25_NDF")]
    Fps25Ndf,
    /// 29.97 fps (30/1.001, NTSC), drop-frame.
    #[serde(rename = "FPS_29_97_DF")]
    Fps29_97Df,
    /// 29.97 fps (30/1.001, NTSC), non-drop-frame.
    #[serde(rename = "FPS_29_97_NDF")]
    Fps29_97Ndf,
    /// 30 fps, non-drop-frame.
    #[serde(rename = "FPS_30_NDF")]
    Fps30Ndf,
    /// 50 fps (PAL high rate), non-drop-frame.
    #[serde(rename = "FPS_50_NDF")]
    Fps50Ndf,
    /// 59.94 fps (60/1.001, NTSC high rate), drop-frame.
    #[serde(rename = "FPS_59_94_DF")]
    Fps59_94Df,
    /// 59.94 fps (60/1.001, NTSC high rate), non-drop-frame.
    #[serde(rename = "FPS_59_94_NDF")]
    Fps59_94Ndf,
    /// 60 fps, non-drop-frame.
    #[serde(rename = "FPS_60_NDF")]
    Fps60Ndf,
}

impl FrameRate {
    /// All ten standard frame rates.
    pub const ALL: [FrameRate; 10] = [
        Self::Fps23_976Ndf,
        Self::Fps24Ndf,
        Self::Fps25Ndf,
        Self::Fps29_97Df,
        Self::Fps29_97Ndf,
        Self::Fps30Ndf,
        Self::Fps50Ndf,
        Self::Fps59_94Df,
        Self::Fps59_94Ndf,
        Self::Fps60Ndf,
    ];

    /// The nominal integer frame rate, not considering the divisor.
    ///
    /// For example, 59.94 fps is defined as 60 frames per second with a
    /// 1.001 divisor.
    #[must_use]
    pub const fn frames_per_second(&self) -> u32 {
        match self {
            Self::Fps23_976Ndf | Self::Fps24Ndf => 24,
            Self::Fps25Ndf => 25,
            Self::Fps29_97Df | Self::Fps29_97Ndf | Self::Fps30Ndf => 30,
            Self::Fps50Ndf => 50,
            Self::Fps59_94Df | Self::Fps59_94Ndf | Self::Fps60Ndf => 60,
        }
    }

    /// The number to divide [`frames_per_second`](Self::frames_per_second)
    /// by to produce the true frame rate.
    ///
    /// 1.0 for integer rates, 1.001 for NTSC-derived rates.
    #[must_use]
    pub const fn divisor(&self) -> f64 {
        match self {
            Self::Fps23_976Ndf
            | Self::Fps29_97Df
            | Self::Fps29_97Ndf
            | Self::Fps59_94Df
            | Self::Fps59_94Ndf => 1.001,
            Self::Fps24Ndf | Self::Fps25Ndf | Self::Fps30Ndf | Self::Fps50Ndf | Self::Fps60Ndf => {
                1.0
            }
        }
    }

    /// Whether this rate drops frame numbers to keep the displayed time code
    /// aligned with wall-clock time, as defined in SMPTE ST 12-1.
    #[must_use]
    pub const fn is_drop_frame(&self) -> bool {
        matches!(self, Self::Fps29_97Df | Self::Fps59_94Df)
    }

    /// The highest frame index representable within a 24-hour day at this
    /// rate, inclusive.
    #[must_use]
    pub const fn maximum_frames(&self) -> u64 {
        match self {
            Self::Fps23_976Ndf | Self::Fps24Ndf => 2_073_599,
            Self::Fps25Ndf => 2_159_999,
            Self::Fps29_97Df => 2_589_407,
            Self::Fps29_97Ndf | Self::Fps30Ndf => 2_591_999,
            Self::Fps50Ndf => 4_319_999,
            Self::Fps59_94Df => 5_178_815,
            Self::Fps59_94Ndf | Self::Fps60Ndf => 5_183_999,
        }
    }

    /// The wraparound modulus: `maximum_frames() + 1`.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.maximum_frames() + 1
    }

    /// The true frame rate as a floating point value.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.frames_per_second() as f64 / self.divisor()
    }

    /// Reconstruct a frame rate from its table row.
    ///
    /// Returns [`TimecodeError::InvalidRateId`] when the
    /// (fps, divisor, drop-frame) triple matches none of the ten standard
    /// rates.
    pub fn from_parts(frames_per_second: u32, divisor: f64, drop_frame: bool) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| {
                rate.frames_per_second() == frames_per_second
                    && (rate.divisor() - divisor).abs() < 1e-9
                    && rate.is_drop_frame() == drop_frame
            })
            .ok_or_else(|| TimecodeError::invalid_rate_id(frames_per_second, divisor, drop_frame))
    }

    /// The canonical identifier string, as consumed by [`FrameRate::from_str`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fps23_976Ndf => "FPS_23_976_NDF",
            Self::Fps24Ndf => "FPS_24_NDF",
            Self::Fps25Ndf => "FPS_25_NDF",
            Self::Fps29_97Df => "FPS_29_97_DF",
            Self::Fps29_97Ndf => "FPS_29_97_NDF",
            Self::Fps30Ndf => "FPS_30_NDF",
            Self::Fps50Ndf => "FPS_50_NDF",
            Self::Fps59_94Df => "FPS_59_94_DF",
            Self::Fps59_94Ndf => "FPS_59_94_NDF",
            Self::Fps60Ndf => "FPS_60_NDF",
        }
    }

    /// The true rate rendered for humans, e.g. `"29.97 fps"`.
    ///
    /// Three fractional digits for 23.976, two for the other non-integer
    /// rates, none for integer rates. Not round-trippable; see
    /// [`as_str`](Self::as_str) for the canonical form.
    #[must_use]
    pub fn friendly(&self) -> String {
        let rate = self.as_f64();
        if self.frames_per_second() == 24 && self.divisor() != 1.0 {
            format!("{rate:.3} fps")
        } else if self.divisor() != 1.0 {
            format!("{rate:.2} fps")
        } else {
            format!("{rate:.0} fps")
        }
    }

    /// Like [`friendly`](Self::friendly), with the drop-frame mode appended.
    #[must_use]
    pub fn friendly_full(&self) -> String {
        let mode = if self.is_drop_frame() {
            "drop frame"
        } else {
            "non-drop frame"
        };
        format!("{} {mode}", self.friendly())
    }

    /// Parse a canonical identifier, returning `None` instead of an error.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::Fps30Ndf
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameRate {
    type Err = TimecodeError;

    /// Case-sensitive match against the ten canonical identifiers.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.as_str() == s)
            .ok_or_else(|| TimecodeError::unparseable_rate(s))
    }
}
