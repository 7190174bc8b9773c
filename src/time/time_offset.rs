use core::fmt;
use std::ops::Neg;

/// A signed time shift in whole milliseconds, applied uniformly to every
/// timestamp of a subtitle file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOffset(i64);

impl TimeOffset {
    /// Create a `TimeOffset` from milliseconds.
    #[must_use]
    pub const fn from_msecs(offset: i64) -> Self {
        Self(offset)
    }

    /// Create a `TimeOffset` from user supplied seconds.
    ///
    /// The fractional millisecond remainder is truncated toward zero,
    /// not rounded: `-1.0015 s` becomes `-1001 ms`.
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Self {
        Self((seconds * 1000.) as i64)
    }

    /// Offset in milliseconds.
    #[must_use]
    pub const fn msecs(self) -> i64 {
        self.0
    }

    /// A zero offset shifts nothing; callers may skip the rewrite and
    /// copy the file byte for byte.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Neg for TimeOffset {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Clock form `[-]HH:MM:SS.ss` consumed by FFmpeg's `-itsoffset`.
/// The sign prefix appears only for negative offsets.
impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.unsigned_abs() as f64 / 1000.;
        let hours = (total / 3600.) as u64;
        let minutes = (total % 3600. / 60.) as u64;
        let seconds = total % 60.;
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:05.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::TimeOffset;

    #[test]
    fn seconds_truncate_toward_zero() {
        assert_eq!(TimeOffset::from_seconds(2.5).msecs(), 2500);
        assert_eq!(TimeOffset::from_seconds(1.0015).msecs(), 1001);
        assert_eq!(TimeOffset::from_seconds(-1.0015).msecs(), -1001);
        assert_eq!(TimeOffset::from_seconds(0.0567).msecs(), 56);
        assert_eq!(TimeOffset::from_seconds(0.).msecs(), 0);
    }

    #[test]
    fn clock_display() {
        assert_eq!(TimeOffset::from_seconds(0.).to_string(), "00:00:00.00");
        assert_eq!(TimeOffset::from_seconds(-1.5).to_string(), "-00:00:01.50");
        assert_eq!(TimeOffset::from_seconds(3661.25).to_string(), "01:01:01.25");
        assert_eq!(TimeOffset::from_msecs(500).to_string(), "00:00:00.50");
    }

    #[test]
    fn neg_is_inverse() {
        let offset = TimeOffset::from_msecs(1234);
        assert_eq!((-offset).msecs(), -1234);
    }
}
