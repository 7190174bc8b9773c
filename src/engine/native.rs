//! Direct, line by line shifting of a subtitle file.

use std::{
    fs,
    io::{BufRead as _, BufReader, BufWriter, Write as _},
    path::Path,
};

use log::{debug, trace};

use super::{EngineError, ShiftEngine};
use crate::{
    format::{self, SubtitleFormat},
    time::TimeOffset,
};

/// Shift a subtitle file by rewriting its timestamp fields in place,
/// streaming one line at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEngine;

impl ShiftEngine for NativeEngine {
    fn name(&self) -> &str {
        "native"
    }

    #[profiling::function]
    fn shift_file(
        &self,
        input: &Path,
        output: &Path,
        offset: TimeOffset,
    ) -> Result<(), EngineError> {
        let subtitle_format =
            SubtitleFormat::from_path(input).ok_or_else(|| EngineError::UnsupportedFormat {
                extension: input
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or_default()
                    .to_lowercase(),
            })?;
        debug!(
            "shifting '{}' ({subtitle_format:?}) by {}ms",
            input.display(),
            offset.msecs()
        );

        let mkerr_in = |source| EngineError::Io {
            source,
            path: input.into(),
        };
        let mkerr_out = |source| EngineError::Io {
            source,
            path: output.into(),
        };

        // A zero offset must be a guaranteed no-op: copy the bytes
        // untouched instead of re-serializing them.
        if offset.is_zero() {
            trace!("zero offset, copying '{}' unchanged", input.display());
            fs::copy(input, output).map_err(mkerr_in)?;
            return Ok(());
        }

        let reader = BufReader::new(fs::File::open(input).map_err(mkerr_in)?);
        let mut writer = BufWriter::new(fs::File::create(output).map_err(mkerr_out)?);
        let mut lines = 0u64;
        for line in reader.lines() {
            let line = line.map_err(mkerr_in)?;
            let shifted = format::shift_line(subtitle_format, &line, offset);
            writeln!(writer, "{shifted}").map_err(mkerr_out)?;
            lines += 1;
        }
        writer.flush().map_err(mkerr_out)?;
        trace!("shifted {lines} lines of '{}'", input.display());
        Ok(())
    }
}
