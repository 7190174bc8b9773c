//! Delegation of the shift to an external FFmpeg binary.
//!
//! FFmpeg applies the same transformation through `-itsoffset` with
//! subtitle stream copy. The run is considered non successful on a spawn
//! failure, a non zero exit status, or a missing/empty output file; the
//! caller then falls back to [`NativeEngine`](super::NativeEngine).

use std::{ffi::OsString, fs, path::Path, process::Command};

use log::debug;
use thiserror::Error;

use super::{EngineError, ShiftEngine};
use crate::time::TimeOffset;

/// Error for a delegated tool run.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool could not be spawned.
    #[error("Failed to run '{tool}'")]
    Launch {
        /// Source error
        source: std::io::Error,
        /// Binary we tried to run
        tool: String,
    },

    /// The tool exited with a non zero status.
    #[error("'{tool}' exited with status {code}: {stderr}")]
    Failed {
        /// Binary that failed
        tool: String,
        /// Exit code, `-1` when killed by a signal
        code: i32,
        /// Captured standard error output
        stderr: String,
    },

    /// The tool reported success but wrote no usable output file.
    #[error("'{tool}' produced no output")]
    MissingOutput {
        /// Binary that reported success
        tool: String,
    },
}

/// Shift a subtitle file by delegating to the `ffmpeg` binary.
#[derive(Debug, Clone)]
pub struct FfmpegEngine {
    binary: String,
}

impl Default for FfmpegEngine {
    fn default() -> Self {
        Self {
            binary: "ffmpeg".into(),
        }
    }
}

impl FfmpegEngine {
    /// Use `binary` instead of the `ffmpeg` found on the `PATH`.
    #[must_use]
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

/// Argument list of the delegated run. The offset rides on `-itsoffset`
/// in clock form; a zero offset degrades to a plain stream copy.
fn shift_args(input: &Path, output: &Path, offset: TimeOffset) -> Vec<OsString> {
    let mut args = Vec::with_capacity(8);
    if !offset.is_zero() {
        args.push("-itsoffset".into());
        args.push(offset.to_string().into());
    }
    args.push("-i".into());
    args.push(input.into());
    args.push("-c:s".into());
    args.push("copy".into());
    args.push("-y".into());
    args.push(output.into());
    args
}

impl ShiftEngine for FfmpegEngine {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    #[profiling::function]
    fn shift_file(
        &self,
        input: &Path,
        output: &Path,
        offset: TimeOffset,
    ) -> Result<(), EngineError> {
        let args = shift_args(input, output, offset);
        debug!("running '{}' with {args:?}", self.binary);

        let run = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| ToolError::Launch {
                source,
                tool: self.binary.clone(),
            })?;
        if !run.status.success() {
            return Err(ToolError::Failed {
                tool: self.binary.clone(),
                code: run.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&run.stderr).into_owned(),
            }
            .into());
        }

        // FFmpeg can report success while writing nothing usable.
        let written = fs::metadata(output).map(|meta| meta.len()).unwrap_or(0);
        if written == 0 {
            return Err(ToolError::MissingOutput {
                tool: self.binary.clone(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{shift_args, FfmpegEngine};
    use crate::{
        engine::{EngineError, ShiftEngine as _, ToolError},
        time::TimeOffset,
    };
    use std::path::Path;

    #[test]
    fn args_carry_the_clock_offset() {
        let args = shift_args(
            Path::new("in.srt"),
            Path::new("out.srt"),
            TimeOffset::from_seconds(-1.5),
        );
        assert_eq!(
            args,
            [
                "-itsoffset",
                "-00:00:01.50",
                "-i",
                "in.srt",
                "-c:s",
                "copy",
                "-y",
                "out.srt"
            ]
            .map(std::ffi::OsString::from)
        );
    }

    #[test]
    fn zero_offset_degrades_to_stream_copy() {
        let args = shift_args(
            Path::new("in.ass"),
            Path::new("out.ass"),
            TimeOffset::from_seconds(0.),
        );
        assert_eq!(
            args,
            ["-i", "in.ass", "-c:s", "copy", "-y", "out.ass"].map(std::ffi::OsString::from)
        );
    }

    #[test]
    fn missing_binary_is_a_launch_failure() {
        let engine = FfmpegEngine::with_binary("ffmpeg-binary-that-does-not-exist");
        let result = engine.shift_file(
            Path::new("in.srt"),
            Path::new("out.srt"),
            TimeOffset::from_msecs(100),
        );
        assert!(matches!(
            result,
            Err(EngineError::Tool(ToolError::Launch { .. }))
        ));
    }
}
