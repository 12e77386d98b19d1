//! Error types for pr-autopilot

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that terminate a run
///
/// Per-pull-request conditions (unauthorized author, failing checks, and so
/// on) are not errors; they are reported as decisions and the batch loop
/// continues. Only upstream failures land here.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the octocrab client
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// GitHub API error outside octocrab (raw HTTP endpoints)
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Configuration file missing or malformed
    #[error("configuration error: {0}")]
    Config(String),
}
