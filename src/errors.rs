//! Custom error types.

use thiserror::Error;

/// A type representing errors that are specific to `subshift`. Note that
/// the line transformers themselves never fail: a malformed line is
/// emitted unchanged, so errors only arise at the file and tool level.
#[derive(Debug, Error)]
pub enum SubshiftError {
    /// Error from the file shift engine.
    #[error("Shift engine failed")]
    Engine(#[from] crate::engine::EngineError),

    /// Error from a delegated tool run.
    #[error("Delegated tool run failed")]
    Tool(#[from] crate::engine::ToolError),
}
