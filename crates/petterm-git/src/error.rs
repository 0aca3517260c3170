//! Error types for reading the commit log.

/// Errors that can occur while talking to `git`.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// The `git` executable could not be run.
    #[error("Git is not installed or not available in PATH")]
    Unavailable,

    /// No `.git` directory above the working directory.
    #[error("Not a Git repository. Initialize a repo with: git init")]
    NotARepository,

    /// The reward marker is not a commit hash.
    #[error("invalid commit marker: {0:?}")]
    InvalidMarker(String),

    /// `git` ran but exited unsuccessfully.
    #[error("git {command} failed: {stderr}")]
    CommandFailed {
        /// Arguments passed to `git`.
        command: String,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// A log line did not have the expected shape.
    #[error("malformed git log line: {line:?}")]
    MalformedOutput {
        /// The offending line.
        line: String,
    },

    /// Spawning the process failed.
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
}
