//! Error types for trajectory decoding and selection

use thiserror::Error;

/// Result type for trajectory operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors surfaced to the caller.
///
/// Malformed lines are deliberately absent: those are recovered locally by
/// skipping the line with a diagnostic, and never abort the stream.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// No well-formed data line was ever decoded. Rendering cannot proceed
    /// with zero histories, so this is terminal for the caller.
    #[error("no trajectory data found in input")]
    EmptyInput,

    /// A requested body name does not appear in the decoded histories.
    /// Raised before any rendering work, with every unmatched name.
    #[error("bodies not found in trajectory data: {}", .0.join(", "))]
    UnknownBodies(Vec<String>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
