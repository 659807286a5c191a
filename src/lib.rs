//! SMPTE ST 12 time code.
//!
//! This crate provides frame-accurate SMPTE ST 12 time code support:
//!
//! - **Ten standard frame rates** from 23.976 to 60 fps, modeled as a closed
//!   set with their exact constant table
//! - **Drop-frame compensation** for 29.97 and 59.94 fps, so displayed time
//!   code tracks wall-clock time
//! - **Arithmetic with 24-hour wraparound**: overflow and underflow wrap and
//!   report a flag instead of failing
//! - **Canonical strings** of the form `HH:MM:SS{:|;}FF/<RateId>` that round
//!   trip through parsing
//!
//! # Quick Start
//!
//! ```rust
//! use smpte_timecode::{FrameRate, Timecode};
//!
//! // Build from display components
//! let tc = Timecode::new(1, 30, 45, 12, FrameRate::Fps24Ndf);
//! assert_eq!(tc.to_string(), "01:30:45:12");
//!
//! // Round trip through the canonical form
//! let tc2 = Timecode::parse(&tc.canonical()).unwrap();
//! assert!(tc.strict_eq(&tc2));
//!
//! // Arithmetic wraps at the 24-hour day and says so
//! let max = Timecode::from_frames(FrameRate::Fps24Ndf.maximum_frames(), FrameRate::Fps24Ndf);
//! let (sum, exceeded) = max.add(Timecode::from_frames(1, FrameRate::Fps24Ndf));
//! assert_eq!(sum.frame_count(), 0);
//! assert!(exceeded);
//! ```
//!
//! # Drop-Frame Time Code
//!
//! Drop-frame rates skip frame *numbers* (never actual frames) at the start
//! of every minute except each tenth minute, and render with a `;` before
//! the frames segment:
//!
//! ```rust
//! use smpte_timecode::{FrameRate, Timecode};
//!
//! let tc = Timecode::new(0, 1, 0, 2, FrameRate::Fps29_97Df);
//! assert_eq!(tc.to_string(), "00:01:00;02");
//! assert_eq!(tc.frame_count(), 1800); // two numbers already skipped
//! ```
//!
//! # Mixing frame rates
//!
//! Equality, ordering, and arithmetic compare raw frame counts and do not
//! require equal rates; mixing rates is numerically defined but semantically
//! meaningless, and left to the caller. [`Timecode::strict_eq`] is the
//! rate-checking comparison.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod rate;
pub mod smpte;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use rate::FrameRate;
pub use smpte::Timecode;

// Re-export drop-frame utilities
pub use dropframe::{encode_frame_count, expand_frame_count, is_dropped_frame, DropFrameParams};

/// Create a time code from hours, minutes, seconds, and frames.
///
/// Convenience wrapper over [`Timecode::new`].
///
/// # Example
/// ```rust
/// use smpte_timecode::{timecode, FrameRate};
///
/// let tc = timecode(1, 30, 45, 12, FrameRate::Fps24Ndf);
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
#[must_use]
pub fn timecode(hours: u32, minutes: u32, seconds: u32, frames: u32, rate: FrameRate) -> Timecode {
    Timecode::new(hours, minutes, seconds, frames, rate)
}

/// The signed frame distance from `start` to `end`.
///
/// Only meaningful when both values share a rate; raw coded counts are
/// compared either way.
#[must_use]
pub fn duration_frames(start: &Timecode, end: &Timecode) -> i64 {
    end.frame_count() as i64 - start.frame_count() as i64
}

/// The signed wall-clock distance from `start` to `end`, in seconds.
#[must_use]
pub fn duration_seconds(start: &Timecode, end: &Timecode) -> f64 {
    end.total_seconds() - start.total_seconds()
}
