use super::TimeOffset;

/// Define a time in milliseconds on the subtitle timeline.
///
/// Points parsed from a subtitle file are non-negative; [`Self::shift`]
/// keeps them so by clamping at the start of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(i64);

impl TimePoint {
    /// Create a `TimePoint` from milliseconds.
    #[must_use]
    pub const fn from_msecs(time: i64) -> Self {
        Self(time)
    }

    /// Total milliseconds since the start of the timeline.
    #[must_use]
    pub const fn msecs(self) -> i64 {
        self.0
    }

    /// Shift the point by `offset`, clamping at the start of the
    /// timeline: a point moved before `00:00:00.000` lands on it.
    #[must_use]
    pub const fn shift(self, offset: TimeOffset) -> Self {
        let shifted = self.0 + offset.msecs();
        if shifted < 0 {
            Self(0)
        } else {
            Self(shifted)
        }
    }

    const fn secs(self) -> i64 {
        self.0 / 1000
    }

    pub(crate) const fn hours(self) -> i64 {
        self.0 / (60 * 60 * 1000)
    }

    pub(crate) const fn mins_comp(self) -> i64 {
        (self.0 / (60 * 1000)) % 60
    }

    pub(crate) const fn secs_comp(self) -> i64 {
        self.secs() % 60
    }

    pub(crate) const fn msecs_comp(self) -> i64 {
        self.0 % 1000
    }

    pub(crate) const fn centis_comp(self) -> i64 {
        self.msecs_comp() / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_forward_and_back() {
        let point = TimePoint::from_msecs(90_000);
        assert_eq!(point.shift(TimeOffset::from_msecs(500)).msecs(), 90_500);
        assert_eq!(point.shift(TimeOffset::from_msecs(-500)).msecs(), 89_500);
    }

    #[test]
    fn shift_clamps_at_timeline_start() {
        let point = TimePoint::from_msecs(1000);
        assert_eq!(point.shift(TimeOffset::from_msecs(-1000)).msecs(), 0);
        assert_eq!(point.shift(TimeOffset::from_msecs(-1001)).msecs(), 0);
        assert_eq!(point.shift(TimeOffset::from_msecs(-999)).msecs(), 1);
    }
}
