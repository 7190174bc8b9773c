//! Subtitle format selection and line dispatch.

use std::{borrow::Cow, iter::FusedIterator, path::Path};

use crate::{ass, srt, time::TimeOffset};

/// Subtitle formats supported by the shift engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// SubRip (`.srt`)
    Srt,
    /// Advanced SubStation Alpha (`.ass`)
    Ass,
}

impl SubtitleFormat {
    /// Detect the format from the file extension, case-insensitively.
    ///
    /// Returns `None` for any extension other than `srt` and `ass`;
    /// callers reject such files before invoking the engine.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "srt" => Some(Self::Srt),
            "ass" => Some(Self::Ass),
            _ => None,
        }
    }

    /// Typical file extension of the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Ass => "ass",
        }
    }
}

/// Shift the timestamps of a single line of a `format` file by `offset`.
///
/// Lines without timestamp fields are returned borrowed, unchanged.
#[must_use]
pub fn shift_line(format: SubtitleFormat, line: &str, offset: TimeOffset) -> Cow<'_, str> {
    match format {
        SubtitleFormat::Srt => srt::shift_line(line, offset),
        SubtitleFormat::Ass => ass::shift_line(line, offset),
    }
}

/// Iterator adapter shifting the lines of a subtitle file one by one.
///
/// Produces exactly one output line per input line, in input order,
/// without ever buffering the whole file.
pub struct ShiftLines<I> {
    lines: I,
    format: SubtitleFormat,
    offset: TimeOffset,
}

impl<I> ShiftLines<I> {
    /// Wrap `lines` of a `format` file for shifting by `offset`.
    #[must_use]
    pub fn new(lines: I, format: SubtitleFormat, offset: TimeOffset) -> Self {
        Self {
            lines,
            format,
            offset,
        }
    }
}

impl<I, S> Iterator for ShiftLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = self.lines.next()?;
        Some(shift_line(self.format, line.as_ref(), self.offset).into_owned())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl<I, S> FusedIterator for ShiftLines<I>
where
    I: FusedIterator<Item = S>,
    S: AsRef<str>,
{
}
