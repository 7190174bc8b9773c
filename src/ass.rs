//! Advanced SubStation Alpha functionality.
//!
//! Timestamps live in the 2nd and 3rd comma separated fields of
//! `Dialogue:` lines, formatted `H:MM:SS.cc` with unpadded hours and
//! centisecond precision. The last field is free dialogue text and can
//! itself contain commas, so a line is never split into more than ten
//! parts.

use std::{borrow::Cow, fmt};

use crate::time::{TimeOffset, TimePoint};

/// Extend `TimePoint` to implement Ass specific `Display`.
#[repr(transparent)]
pub struct TimePointAss(TimePoint);

impl From<TimePoint> for TimePointAss {
    fn from(value: TimePoint) -> Self {
        Self(value)
    }
}

impl fmt::Display for TimePointAss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}.{:02}",
            self.0.hours(),
            self.0.mins_comp(),
            self.0.secs_comp(),
            self.0.centis_comp()
        )
    }
}

/// Prefix of the event lines carrying timestamps.
const DIALOGUE_PREFIX: &str = "Dialogue:";

/// Maximum number of comma separated fields of a `Dialogue:` line. The
/// last field absorbs the rest of the line, embedded commas included.
const DIALOGUE_FIELDS: usize = 10;

/// Shift the start and end timestamps of an Ass `Dialogue:` line by
/// `offset`, clamped at `0:00:00.00`.
///
/// Lines without the `Dialogue:` prefix, and `Dialogue:` lines too short
/// to carry both timestamp fields, are returned borrowed, unchanged.
#[must_use]
pub fn shift_line<'a>(line: &'a str, offset: TimeOffset) -> Cow<'a, str> {
    if !line.starts_with(DIALOGUE_PREFIX) {
        return Cow::Borrowed(line);
    }
    shift_dialogue(line, offset).map_or_else(|| Cow::Borrowed(line), Cow::Owned)
}

/// Rewrite the two timestamp fields of a `Dialogue:` line, or `None` if
/// the line does not carry them.
fn shift_dialogue(line: &str, offset: TimeOffset) -> Option<String> {
    let parts: Vec<&str> = line.splitn(DIALOGUE_FIELDS, ',').collect();
    if parts.len() < 3 {
        return None;
    }
    let start = TimePointAss::from(parse_timestamp(parts[1]).shift(offset));
    let end = TimePointAss::from(parse_timestamp(parts[2]).shift(offset));

    let mut shifted = String::with_capacity(line.len());
    shifted.push_str(parts[0]);
    shifted.push_str(&format!(",{start},{end}"));
    // The split consumed the separators: re-insert exactly one per field.
    for part in &parts[3..] {
        shifted.push(',');
        shifted.push_str(part);
    }
    Some(shifted)
}

/// Parse an `H:MM:SS.cc` timestamp field.
///
/// Recovery is local: a field without exactly three `:` separated
/// components counts as zero entirely, and each numeric component that
/// fails to parse counts as zero on its own.
fn parse_timestamp(field: &str) -> TimePoint {
    let components: Vec<&str> = field.split(':').collect();
    let [hours, mins, secs] = components.as_slice() else {
        return TimePoint::from_msecs(0);
    };
    let hours: i64 = hours.parse().unwrap_or(0);
    let mins: i64 = mins.parse().unwrap_or(0);
    let mut secs_parts = secs.split('.');
    let whole: i64 = secs_parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let centis: i64 = secs_parts.next().and_then(|c| c.parse().ok()).unwrap_or(0);

    TimePoint::from_msecs((hours * 3600 + mins * 60 + whole) * 1000 + centis * 10)
}

#[cfg(test)]
mod tests {
    use super::shift_line;
    use crate::time::TimeOffset;

    #[test]
    fn shift_dialogue_line() {
        let shifted = shift_line(
            "Dialogue: 0,0:00:01.00,0:00:02.00,Style,Name,0,0,0,,Hello world",
            TimeOffset::from_msecs(500),
        );
        assert_eq!(
            shifted,
            "Dialogue: 0,0:00:01.50,0:00:02.50,Style,Name,0,0,0,,Hello world"
        );
    }

    #[test]
    fn commas_of_the_text_field_survive() {
        let shifted = shift_line(
            "Dialogue: 0,0:00:01.00,0:00:02.00,Style,Name,0,0,0,,Hello, world",
            TimeOffset::from_msecs(500),
        );
        assert_eq!(
            shifted,
            "Dialogue: 0,0:00:01.50,0:00:02.50,Style,Name,0,0,0,,Hello, world"
        );
    }

    #[test]
    fn other_lines_pass_through() {
        let offset = TimeOffset::from_msecs(1000);
        for line in [
            "[Script Info]",
            "Style: Default,Arial,20,&H00FFFFFF",
            "Format: Layer, Start, End, Style, Text",
            "",
        ] {
            assert_eq!(shift_line(line, offset), line);
        }
    }

    #[test]
    fn short_dialogue_lines_are_kept() {
        let offset = TimeOffset::from_msecs(1000);
        for line in ["Dialogue: 0", "Dialogue: 0,0:00:01.00"] {
            assert_eq!(shift_line(line, offset), line);
        }
    }

    #[test]
    fn timestamps_clamp_at_timeline_start() {
        let shifted = shift_line(
            "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,text",
            TimeOffset::from_msecs(-5000),
        );
        assert_eq!(shifted, "Dialogue: 0,0:00:00.00,0:00:00.00,Default,,0,0,0,,text");
    }

    #[test]
    fn unparseable_timestamps_count_as_zero() {
        let shifted = shift_line(
            "Dialogue: 0,xx,0:00:zz.99,Default,,0,0,0,,text",
            TimeOffset::from_msecs(1000),
        );
        assert_eq!(shifted, "Dialogue: 0,0:00:01.00,0:00:01.99,Default,,0,0,0,,text");
    }

    #[test]
    fn hours_stay_unpadded() {
        let shifted = shift_line(
            "Dialogue: 0,9:59:59.99,9:59:59.99,Default,,0,0,0,,text",
            TimeOffset::from_seconds(3600.),
        );
        assert_eq!(shifted, "Dialogue: 0,10:59:59.99,10:59:59.99,Default,,0,0,0,,text");
    }

    #[test]
    fn round_trip_without_clamping() {
        let line = "Dialogue: 0,0:01:02.03,0:01:05.99,Style,Name,0,0,0,,So, it begins";
        let offset = TimeOffset::from_msecs(4570);
        let there = shift_line(line, offset).into_owned();
        assert_eq!(shift_line(&there, -offset), line);
    }
}
