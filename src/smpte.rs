//! The SMPTE ST 12 time code value type.
//!
//! A [`Timecode`] pairs a flat frame count with its [`FrameRate`]. The count
//! is *coded*: for drop-frame rates the skipped frame numbers have already
//! been removed, so arithmetic is plain integer arithmetic and the drop-frame
//! expansion only happens when segments are derived for display.

use crate::dropframe::{encode_frame_count, expand_frame_count};
use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::time::Duration;

/// A SMPTE ST 12 time code: a coded frame count at a frame rate.
///
/// `Timecode` is an immutable value; every operation returns a new instance.
///
/// # Equality and ordering
///
/// Equality and ordering compare the frame count **only** — the rate is
/// ignored, so `00:00:01:00` at 24 fps equals `00:00:00:24` expressed as the
/// same raw count at 25 fps. This keeps comparisons total and cheap, but it
/// is a trap when mixing rates; use [`strict_eq`](Self::strict_eq) when the
/// rates must match too.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timecode {
    /// Coded frame count from the 00:00:00:00 origin.
    frame_count: u64,
    /// The rate defining this value's modulus and decoding rules.
    rate: FrameRate,
}

impl Timecode {
    /// Create a time code from hours, minutes, seconds, and frames.
    ///
    /// The components are collapsed to a naive linear count and, for
    /// drop-frame rates, encoded by removing one group of skipped frame
    /// numbers per elapsed non-tenth minute. Components are not range
    /// checked; out-of-range values simply carry into the next segment.
    ///
    /// # Example
    /// ```rust
    /// use smpte_timecode::{FrameRate, Timecode};
    ///
    /// let tc = Timecode::new(1, 30, 45, 12, FrameRate::Fps24Ndf);
    /// assert_eq!(tc.to_string(), "01:30:45:12");
    /// ```
    #[must_use]
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32, rate: FrameRate) -> Self {
        let fps = rate.frames_per_second() as u64;
        let total_seconds = hours as u64 * 3600 + minutes as u64 * 60 + seconds as u64;
        let naive = total_seconds * fps + frames as u64;

        Self {
            frame_count: encode_frame_count(naive, rate),
            rate,
        }
    }

    /// Create a time code from a raw coded frame count.
    ///
    /// The count is stored as-is; it must already have drop-frame gaps
    /// removed when the rate is drop-frame.
    #[must_use]
    pub const fn from_frames(frame_count: u64, rate: FrameRate) -> Self {
        Self { frame_count, rate }
    }

    /// Create a time code from a wall-clock duration, rounded to the
    /// nearest whole frame.
    #[must_use]
    pub fn from_duration(duration: Duration, rate: FrameRate) -> Self {
        let frames = (duration.as_secs_f64() * rate.frames_per_second() as f64 / rate.divisor())
            .round() as u64;
        Self::from_frames(frames, rate)
    }

    /// Parse the display form `HH:MM:SS:FF` (or `HH:MM:SS;FF`) at a known
    /// rate.
    ///
    /// The text must split on `:`/`;` into exactly four numeric fields;
    /// anything else is a [`TimecodeError::MalformedTimeCode`].
    pub fn from_string(text: &str, rate: FrameRate) -> Result<Self> {
        let fields: Vec<&str> = text.split([':', ';']).collect();
        let &[hours, minutes, seconds, frames] = fields.as_slice() else {
            return Err(TimecodeError::malformed(format!(
                "expected four segments, got {}",
                fields.len()
            )));
        };

        let parse_segment = |name: &str, segment: &str| -> Result<u32> {
            segment
                .parse()
                .map_err(|_| TimecodeError::malformed(format!("invalid {name}: {segment:?}")))
        };

        Ok(Self::new(
            parse_segment("hours", hours)?,
            parse_segment("minutes", minutes)?,
            parse_segment("seconds", seconds)?,
            parse_segment("frames", frames)?,
            rate,
        ))
    }

    /// Parse the canonical form `HH:MM:SS{:|;}FF/<RateId>`.
    ///
    /// Fails with [`TimecodeError::MissingRateSuffix`] when no `/` is
    /// present; rate and segment errors propagate from
    /// [`FrameRate::from_str`] and [`from_string`](Self::from_string).
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split('/').collect();
        let &[display, rate_id] = fields.as_slice() else {
            if fields.len() < 2 {
                return Err(TimecodeError::MissingRateSuffix);
            }
            return Err(TimecodeError::malformed(
                "expected a single /<rate identifier> suffix",
            ));
        };

        Self::from_string(display, rate_id.parse()?)
    }

    /// Parse the canonical form, returning `None` instead of an error.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// The stored coded frame count.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The frame rate this value is coded at.
    #[must_use]
    pub const fn rate(&self) -> FrameRate {
        self.rate
    }

    /// Reinterpret the same coded count at another rate.
    ///
    /// No conversion is performed; this is the explicit escape hatch for
    /// callers who need a different result rate after
    /// [`add`](Self::add)/[`subtract`](Self::subtract).
    #[must_use]
    pub const fn with_rate(self, rate: FrameRate) -> Self {
        Self {
            frame_count: self.frame_count,
            rate,
        }
    }

    /// The naive linear count the display segments derive from.
    fn expanded_frame_count(&self) -> u64 {
        expand_frame_count(self.frame_count, self.rate)
    }

    /// Display segments as (hours, minutes, seconds, frames).
    #[must_use]
    pub fn segments(&self) -> (u32, u32, u32, u32) {
        let expanded = self.expanded_frame_count();
        let fps = self.rate.frames_per_second() as u64;

        let hours = (expanded / (fps * 3600)) % 24;
        let minutes = (expanded / (fps * 60)) % 60;
        let seconds = (expanded / fps) % 60;
        let frames = expanded % fps;

        (hours as u32, minutes as u32, seconds as u32, frames as u32)
    }

    /// The hours segment of the display form.
    #[must_use]
    pub fn hours(&self) -> u32 {
        self.segments().0
    }

    /// The minutes segment of the display form.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.segments().1
    }

    /// The seconds segment of the display form.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.segments().2
    }

    /// The frames segment of the display form.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.segments().3
    }

    /// The separator written between seconds and frames: `;` for
    /// drop-frame rates, `:` otherwise.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.rate.is_drop_frame() {
            ';'
        } else {
            ':'
        }
    }

    /// Add another time code, wrapping at the 24-hour day.
    ///
    /// Returns the sum and whether it exceeded
    /// [`FrameRate::maximum_frames`] and wrapped past `00:00:00:00`.
    /// Wraparound is defined behavior, not an error.
    ///
    /// The operands' raw counts are summed without requiring equal rates;
    /// mixing rates is numerically defined but semantically meaningless and
    /// is the caller's responsibility. The result takes the **right-hand**
    /// operand's rate while the wrap modulus comes from the left-hand rate
    /// (kept for compatibility with the reference behavior; use
    /// [`with_rate`](Self::with_rate) to pick explicitly).
    #[must_use]
    pub fn add(self, other: Self) -> (Self, bool) {
        let mut sum = self.frame_count + other.frame_count;
        let exceeded = sum > self.rate.maximum_frames();
        if exceeded {
            sum -= self.rate.modulus();
        }

        (Self::from_frames(sum, other.rate), exceeded)
    }

    /// Subtract another time code, wrapping below `00:00:00:00`.
    ///
    /// Returns the difference and whether it subceeded zero and wrapped to
    /// the end of the day. Rate handling matches [`add`](Self::add).
    #[must_use]
    pub fn subtract(self, other: Self) -> (Self, bool) {
        let subceeded = other.frame_count > self.frame_count;
        let diff = if subceeded {
            self.frame_count + self.rate.modulus() - other.frame_count
        } else {
            self.frame_count - other.frame_count
        };

        (Self::from_frames(diff, other.rate), subceeded)
    }

    /// [`add`](Self::add), discarding the wrap flag.
    #[must_use]
    pub fn wrapping_add(self, other: Self) -> Self {
        self.add(other).0
    }

    /// [`subtract`](Self::subtract), discarding the wrap flag.
    #[must_use]
    pub fn wrapping_sub(self, other: Self) -> Self {
        self.subtract(other).0
    }

    /// Equality that also requires matching rates.
    ///
    /// `PartialEq` intentionally ignores the rate; this is the stricter
    /// check for callers comparing values across rates.
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        self.frame_count == other.frame_count && self.rate == other.rate
    }

    /// The wall-clock duration of this many frames at the true rate.
    ///
    /// Exact for integer-divisor rates, floating-point approximate for
    /// NTSC rates.
    #[must_use]
    pub fn to_duration(&self) -> Duration {
        Duration::from_secs_f64(self.total_seconds())
    }

    /// The wall-clock duration in seconds.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.frame_count as f64 * self.rate.divisor() / self.rate.frames_per_second() as f64
    }

    /// The canonical round-trippable form: the display form plus the rate
    /// identifier, e.g. `"00:08:00;16/FPS_29_97_DF"`.
    ///
    /// This is the only form accepted by [`parse`](Self::parse).
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{self}/{}", self.rate)
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::from_frames(0, FrameRate::default())
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds, frames) = self.segments();
        write!(
            f,
            "{hours:02}:{minutes:02}:{seconds:02}{}{frames:02}",
            self.separator()
        )
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.frame_count == other.frame_count
    }
}

impl Eq for Timecode {}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.frame_count.hash(state);
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frame_count.cmp(&other.frame_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_components_roundtrip_through_display() {
        let tc = Timecode::new(1, 30, 45, 12, FrameRate::Fps24Ndf);
        assert_eq!(tc.segments(), (1, 30, 45, 12));
        assert_eq!(tc.to_string(), "01:30:45:12");
        assert_eq!(tc.frame_count(), 3600 * 24 + 30 * 60 * 24 + 45 * 24 + 12);
    }

    #[test]
    fn test_drop_frame_encoding_on_construction() {
        // One minute in: two frame numbers have been removed.
        let tc = Timecode::new(0, 1, 0, 2, FrameRate::Fps29_97Df);
        assert_eq!(tc.frame_count(), 1800);
        assert_eq!(tc.to_string(), "00:01:00;02");

        // Tenth minutes drop nothing.
        let tc = Timecode::new(0, 10, 0, 0, FrameRate::Fps29_97Df);
        assert_eq!(tc.frame_count(), 17982);
        assert_eq!(tc.to_string(), "00:10:00;00");

        // 59.94 drops groups of four.
        let tc = Timecode::new(0, 1, 0, 4, FrameRate::Fps59_94Df);
        assert_eq!(tc.frame_count(), 3600);
        assert_eq!(tc.to_string(), "00:01:00;04");
    }

    #[test]
    fn test_separator_follows_drop_frame_flag() {
        assert_eq!(
            Timecode::from_frames(0, FrameRate::Fps29_97Df).separator(),
            ';'
        );
        assert_eq!(
            Timecode::from_frames(0, FrameRate::Fps29_97Ndf).separator(),
            ':'
        );
    }

    #[test]
    fn test_add_wraps_at_day_boundary() {
        let rate = FrameRate::Fps60Ndf;
        let (sum, exceeded) =
            Timecode::from_frames(rate.maximum_frames(), rate).add(Timecode::from_frames(1, rate));
        assert_eq!(sum.frame_count(), 0);
        assert!(exceeded);

        let (sum, exceeded) =
            Timecode::from_frames(10, rate).add(Timecode::from_frames(20, rate));
        assert_eq!(sum.frame_count(), 30);
        assert!(!exceeded);
    }

    #[test]
    fn test_subtract_wraps_below_zero() {
        let rate = FrameRate::Fps25Ndf;
        let (diff, subceeded) =
            Timecode::from_frames(0, rate).subtract(Timecode::from_frames(1, rate));
        assert_eq!(diff.frame_count(), rate.maximum_frames());
        assert!(subceeded);

        let (diff, subceeded) =
            Timecode::from_frames(30, rate).subtract(Timecode::from_frames(10, rate));
        assert_eq!(diff.frame_count(), 20);
        assert!(!subceeded);
    }

    #[test]
    fn test_result_takes_right_operand_rate() {
        // Kept for compatibility with the reference behavior: the sum is
        // wrapped by the left operand's modulus but carries the right
        // operand's rate.
        let left = Timecode::from_frames(100, FrameRate::Fps24Ndf);
        let right = Timecode::from_frames(50, FrameRate::Fps50Ndf);

        let (sum, _) = left.add(right);
        assert_eq!(sum.rate(), FrameRate::Fps50Ndf);

        let (diff, _) = left.subtract(right);
        assert_eq!(diff.rate(), FrameRate::Fps50Ndf);

        // with_rate is the explicit correction seam.
        assert_eq!(sum.with_rate(FrameRate::Fps24Ndf).rate(), FrameRate::Fps24Ndf);
    }

    #[test]
    fn test_wrapping_variants_match_flagged_ops() {
        let rate = FrameRate::Fps30Ndf;
        let a = Timecode::from_frames(rate.maximum_frames(), rate);
        let b = Timecode::from_frames(5, rate);

        assert_eq!(a.wrapping_add(b), a.add(b).0);
        assert_eq!(b.wrapping_sub(a), b.subtract(a).0);
    }

    #[test]
    fn test_equality_ignores_rate() {
        let a = Timecode::from_frames(1000, FrameRate::Fps24Ndf);
        let b = Timecode::from_frames(1000, FrameRate::Fps50Ndf);

        assert_eq!(a, b);
        assert!(!a.strict_eq(&b));
        assert!(a.strict_eq(&Timecode::from_frames(1000, FrameRate::Fps24Ndf)));
    }

    #[test]
    fn test_ordering_by_frame_count() {
        let a = Timecode::new(0, 0, 0, 0, FrameRate::Fps24Ndf);
        let b = Timecode::new(0, 0, 0, 1, FrameRate::Fps24Ndf);
        let c = Timecode::new(0, 0, 1, 0, FrameRate::Fps24Ndf);

        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_from_string() {
        let tc = Timecode::from_string("01:30:45:12", FrameRate::Fps25Ndf).unwrap();
        assert_eq!(tc.segments(), (1, 30, 45, 12));

        let tc = Timecode::from_string("00:01:00;02", FrameRate::Fps29_97Df).unwrap();
        assert_eq!(tc.frame_count(), 1800);
    }

    #[test]
    fn test_from_string_rejects_malformed() {
        let rate = FrameRate::Fps25Ndf;
        assert!(Timecode::from_string("01:30:45", rate).is_err());
        assert!(Timecode::from_string("01:30:45:12:00", rate).is_err());
        assert!(Timecode::from_string("01:30:45:xx", rate).is_err());
        assert!(Timecode::from_string("", rate).is_err());
        assert!(Timecode::from_string("::::", rate).is_err());
    }

    #[test]
    fn test_parse_canonical() {
        let tc = Timecode::parse("00:08:00;16/FPS_29_97_DF").unwrap();
        assert_eq!(tc.rate(), FrameRate::Fps29_97Df);
        assert_eq!(tc.frame_count(), 14400);
        assert_eq!(tc.canonical(), "00:08:00;16/FPS_29_97_DF");
    }

    #[test]
    fn test_parse_requires_rate_suffix() {
        assert_eq!(
            Timecode::parse("01:00:00:00").unwrap_err(),
            TimecodeError::MissingRateSuffix
        );
        assert!(matches!(
            Timecode::parse("01:00:00:00/FPS_24_NDF/extra").unwrap_err(),
            TimecodeError::MalformedTimeCode { .. }
        ));
        assert!(matches!(
            Timecode::parse("01:00:00:00/FPS_26_NDF").unwrap_err(),
            TimecodeError::UnparseableRate { .. }
        ));

        assert_eq!(Timecode::try_parse("01:00:00:00"), None);
        assert!(Timecode::try_parse("01:00:00:00/FPS_24_NDF").is_some());
    }

    #[test]
    fn test_from_str_delegates_to_parse() {
        let tc: Timecode = "23:59:59:23/FPS_24_NDF".parse().unwrap();
        assert_eq!(tc.frame_count(), FrameRate::Fps24Ndf.maximum_frames());
    }

    #[test]
    fn test_duration_conversions() {
        // 25 fps is exact: the full day lasts 23:59:59.960.
        let tc = Timecode::from_frames(2_159_999, FrameRate::Fps25Ndf);
        assert!((tc.total_seconds() - 86_399.96).abs() < 1e-6);

        // NTSC rates run slow by the 1.001 divisor.
        let tc = Timecode::from_frames(2_589_407, FrameRate::Fps29_97Df);
        assert!((tc.total_seconds() - 86_399.880_233).abs() < 1e-3);

        // Round trip through a Duration.
        let rate = FrameRate::Fps59_94Ndf;
        let tc = Timecode::from_frames(123_456, rate);
        let back = Timecode::from_duration(tc.to_duration(), rate);
        assert_eq!(back.frame_count(), 123_456);
        assert_eq!(back.rate(), rate);
    }

    #[test]
    fn test_from_duration_rounds_to_nearest_frame() {
        let rate = FrameRate::Fps24Ndf;
        let tc = Timecode::from_duration(Duration::from_secs_f64(1.0), rate);
        assert_eq!(tc.frame_count(), 24);

        // 1.02 s is 24.48 frames, 1.03 s is 24.72.
        let tc = Timecode::from_duration(Duration::from_secs_f64(1.02), rate);
        assert_eq!(tc.frame_count(), 24);
        let tc = Timecode::from_duration(Duration::from_secs_f64(1.03), rate);
        assert_eq!(tc.frame_count(), 25);
    }

    #[test]
    fn test_default_is_day_origin() {
        let tc = Timecode::default();
        assert_eq!(tc.frame_count(), 0);
        assert_eq!(tc.rate(), FrameRate::Fps30Ndf);
        assert_eq!(tc.to_string(), "00:00:00:00");
    }

    #[test]
    fn test_segment_accessors() {
        let tc = Timecode::new(19, 12, 21, 4, FrameRate::Fps30Ndf);
        assert_eq!(tc.hours(), 19);
        assert_eq!(tc.minutes(), 12);
        assert_eq!(tc.seconds(), 21);
        assert_eq!(tc.frames(), 4);
    }

    #[test]
    fn test_serde_roundtrip() {
        let tc = Timecode::new(1, 2, 3, 4, FrameRate::Fps59_94Df);
        let json = serde_json::to_string(&tc).unwrap();
        let decoded: Timecode = serde_json::from_str(&json).unwrap();
        assert!(tc.strict_eq(&decoded));
    }
}
