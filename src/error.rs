//! Errors of the public breaking API.

use kbreak_layout::LayoutError;
use kbreak_traits::ExecutorError;
use kbreak_types::SequenceError;
use thiserror::Error;

/// Anything that keeps a breaking request from running. An infeasible
/// breaking is not an error; it yields no lines.
#[derive(Error, Debug)]
pub enum BreakError {
    #[error("Invalid element sequence: {0}")]
    Sequence(#[from] SequenceError),
    #[error("Invalid breaking request: {0}")]
    Layout(#[from] LayoutError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}
