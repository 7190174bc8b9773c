//! File level shifting: format detection, streaming rewrite, and the
//! optional delegation to an external FFmpeg binary.
//!
//! The delegated path is never authoritative: callers go through
//! [`shift_file_with_fallback`], which runs the native transformation
//! whenever the tool reports non success by any means. The native engine
//! behaves identically whether invoked as primary or fallback path.

mod ffmpeg;
mod native;

pub use ffmpeg::{FfmpegEngine, ToolError};
pub use native::NativeEngine;

use std::{
    io,
    path::{Path, PathBuf},
};

use log::warn;
use thiserror::Error;

use crate::time::TimeOffset;

/// Error for file shifting.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Io error on a path.
    #[error("Io error on '{path}'")]
    Io {
        /// Source error
        source: io::Error,
        /// Path of the file we tried to read or write
        path: PathBuf,
    },

    /// The input file extension names no supported subtitle format.
    #[error("Unsupported subtitle format '{extension}', expected 'srt' or 'ass'")]
    UnsupportedFormat {
        /// Extension of the rejected file
        extension: String,
    },

    /// The delegated external tool did not produce the corrected copy.
    #[error("Delegated tool failed")]
    Tool(#[from] ToolError),
}

/// A strategy able to shift every timestamp of a subtitle file.
pub trait ShiftEngine {
    /// Name of the engine, for logs.
    fn name(&self) -> &str;

    /// Shift `input` by `offset` and write the corrected copy to
    /// `output`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the input cannot be read or recognized, or
    /// if the corrected copy cannot be produced.
    fn shift_file(
        &self,
        input: &Path,
        output: &Path,
        offset: TimeOffset,
    ) -> Result<(), EngineError>;
}

/// Shift `input` into `output`, trying `delegated` first and falling
/// back to [`NativeEngine`] on any failure of the delegated run.
///
/// # Errors
///
/// Will return `Err` only if the native fallback itself fails; a
/// delegated failure alone is logged and recovered.
pub fn shift_file_with_fallback<E: ShiftEngine>(
    delegated: &E,
    input: &Path,
    output: &Path,
    offset: TimeOffset,
) -> Result<(), EngineError> {
    match delegated.shift_file(input, output, offset) {
        Ok(()) => Ok(()),
        Err(error) => {
            warn!(
                "engine '{}' failed, falling back to direct transformation: {error}",
                delegated.name()
            );
            NativeEngine.shift_file(input, output, offset)
        }
    }
}

/// Name of the corrected copy of `name`: the offset in seconds with one
/// decimal, an underscore, then the original name.
#[must_use]
pub fn output_file_name(name: &str, offset_seconds: f64) -> String {
    format!("{offset_seconds:.1}_{name}")
}
