//! Drop-frame encoding for 29.97 and 59.94 fps.
//!
//! Drop-frame time code compensates for the gap between the nominal rate
//! (30 or 60 fps) and the true NTSC rate (divided by 1.001) by skipping
//! frame *numbers* at the start of every minute, except minutes divisible
//! by 10. No actual frames are dropped; the numbering jumps so the displayed
//! time code tracks wall-clock time.
//!
//! A stored frame count is always the *coded* count, with the skipped
//! numbers already removed. [`encode_frame_count`] turns a naive linear
//! count into a coded one; [`expand_frame_count`] is the inverse, used when
//! deriving display segments.

use crate::rate::FrameRate;
use serde::{Deserialize, Serialize};

/// Derived drop-frame constants for one nominal rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameParams {
    /// Frame numbers skipped per dropping minute (2 at 30 fps, 4 at 60 fps).
    pub frames_dropped_per_minute: u64,
    /// Nominal integer frame rate.
    pub nominal_fps: u64,
    /// Coded frames per non-tenth minute: `fps * 60 - dropped`.
    pub frames_per_minute: u64,
    /// Coded frames per 10-minute block: `fps * 600 - 9 * dropped`.
    pub frames_per_10_minutes: u64,
}

impl DropFrameParams {
    /// Derive the constants for a nominal rate.
    ///
    /// Only rates that are a multiple of 30 can drop frames: two frame
    /// numbers per 30 frames of nominal rate.
    #[must_use]
    pub const fn for_nominal_fps(fps: u64) -> Self {
        let dropped = (fps / 30) * 2;
        Self {
            frames_dropped_per_minute: dropped,
            nominal_fps: fps,
            frames_per_minute: fps * 60 - dropped,
            frames_per_10_minutes: fps * 600 - 9 * dropped,
        }
    }

    /// The constants for a frame rate, or `None` for non-drop-frame rates.
    #[must_use]
    pub fn for_rate(rate: FrameRate) -> Option<Self> {
        if rate.is_drop_frame() && rate.frames_per_second() % 30 == 0 {
            Some(Self::for_nominal_fps(rate.frames_per_second() as u64))
        } else {
            None
        }
    }
}

/// Convert a naive linear frame count into a coded drop-frame count.
///
/// Every elapsed minute except each tenth minute removes one group of
/// dropped frame numbers. Returns the count unchanged for non-drop-frame
/// rates.
#[must_use]
pub fn encode_frame_count(naive: u64, rate: FrameRate) -> u64 {
    let Some(params) = DropFrameParams::for_rate(rate) else {
        return naive;
    };

    let total_minutes = naive / (params.nominal_fps * 60);
    let drop_minutes = total_minutes - total_minutes / 10;
    naive - params.frames_dropped_per_minute * drop_minutes
}

/// Re-expand a coded drop-frame count to the naive linear count.
///
/// The expanded count is what the display segments are derived from: each
/// complete 10-minute block restores nine groups of dropped numbers, plus
/// one group per complete dropping minute inside the final partial block.
/// Returns the count unchanged for non-drop-frame rates.
#[must_use]
pub fn expand_frame_count(coded: u64, rate: FrameRate) -> u64 {
    let Some(params) = DropFrameParams::for_rate(rate) else {
        return coded;
    };

    let dropped = params.frames_dropped_per_minute;
    let blocks = coded / params.frames_per_10_minutes;
    let mut within_block = coded % params.frames_per_10_minutes;

    // The first minute of each block drops nothing; shifting by one group
    // keeps the division below from counting it.
    if within_block < dropped {
        within_block += dropped;
    }

    coded + 9 * dropped * blocks + dropped * ((within_block - dropped) / params.frames_per_minute)
}

/// Whether the (minutes, seconds, frames) triple names a skipped frame
/// number at this rate.
///
/// Always false for non-drop-frame rates.
#[must_use]
pub fn is_dropped_frame(minutes: u32, seconds: u32, frames: u32, rate: FrameRate) -> bool {
    let Some(params) = DropFrameParams::for_rate(rate) else {
        return false;
    };

    seconds == 0 && minutes % 10 != 0 && (frames as u64) < params.frames_dropped_per_minute
}
