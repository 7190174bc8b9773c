//! This crate shifts every timestamp of a subtitle file by a fixed,
//! signed offset with sub-second precision, and produces a corrected
//! copy. It supports the SubRip (`.srt`) and Advanced SubStation Alpha
//! (`.ass`) formats.
//!
//! The transformation core is pure and streaming: each line goes through
//! a format specific transformer that rewrites only the timestamp
//! fields, byte for byte otherwise. Malformed lines are emitted
//! unchanged rather than aborting the file.
//!
//! ## Example code
//!
//! ```
//! use subshift::format::{shift_line, ShiftLines, SubtitleFormat};
//! use subshift::time::TimeOffset;
//!
//! let offset = TimeOffset::from_seconds(-1.5);
//! let shifted = shift_line(SubtitleFormat::Srt, "00:00:03,000 --> 00:00:05,000", offset);
//! assert_eq!(shifted, "00:00:01,500 --> 00:00:03,500");
//!
//! // Or stream a whole file, one line at a time:
//! let lines = ["1", "00:00:03,000 --> 00:00:05,000", "Hello there."];
//! let shifted: Vec<String> =
//!     ShiftLines::new(lines.iter(), SubtitleFormat::Srt, offset).collect();
//! assert_eq!(shifted[1], "00:00:01,500 --> 00:00:03,500");
//! ```
//!
//! File level shifting, including the optional delegation to an external
//! FFmpeg binary with unconditional fallback to the native
//! transformation, lives in the [`engine`] module.

pub mod ass;
pub mod engine;
mod errors;
pub mod format;
pub mod srt;
pub mod time;

pub use errors::SubshiftError;
