//! SubRip/Srt functionality.
//!
//! A time-range line carries two timestamps separated by the `-->`
//! token, each formatted `HH:MM:SS,mmm`. Hours are not bounded to 24 and
//! grow past two digits for long videos.

use std::{borrow::Cow, fmt, sync::LazyLock};

use regex::{Captures, Regex};

use crate::time::{TimeOffset, TimePoint};

/// Extend `TimePoint` to implement Srt specific `Display`.
#[repr(transparent)]
pub struct TimePointSrt(TimePoint);

impl From<TimePoint> for TimePointSrt {
    fn from(value: TimePoint) -> Self {
        Self(value)
    }
}

impl fmt::Display for TimePointSrt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.0.hours(),
            self.0.mins_comp(),
            self.0.secs_comp(),
            self.0.msecs_comp()
        )
    }
}

/// Token separating the start and end timestamps of a time-range line.
const RANGE_SEPARATOR: &str = "-->";

/// Shift every timestamp of an Srt time-range line by `offset`.
///
/// Lines without the `-->` separator are returned borrowed, unchanged.
/// Each `HH:MM:SS,mmm` occurrence is rewritten in place, clamped at
/// `00:00:00,000`; all other bytes of the line are untouched.
#[must_use]
pub fn shift_line<'a>(line: &'a str, offset: TimeOffset) -> Cow<'a, str> {
    static TIMESTAMP: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap());

    if !line.contains(RANGE_SEPARATOR) {
        return Cow::Borrowed(line);
    }
    TIMESTAMP.replace_all(line, |caps: &Captures<'_>| {
        TimePointSrt::from(parse_timestamp(caps).shift(offset)).to_string()
    })
}

/// Rebuild a `TimePoint` from the four captured timestamp fields.
/// The pattern only matches decimal digits, so the field parses are
/// infallible.
fn parse_timestamp(caps: &Captures<'_>) -> TimePoint {
    let field = |idx: usize| caps.get(idx).unwrap().as_str().parse::<i64>().unwrap();
    let (hours, mins, secs, msecs) = (field(1), field(2), field(3), field(4));
    TimePoint::from_msecs((hours * 3600 + mins * 60 + secs) * 1000 + msecs)
}
