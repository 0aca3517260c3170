//! Commit log trait, the `git` CLI implementation and a scripted stub.
//!
//! The reconciler never shells out directly. It asks a [`CommitLog`] for
//! commits, which may be the real repository ([`GitCli`]) or a fixed list
//! ([`ScriptedCommitLog`]) in tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::DateTime;
use tracing::debug;

use petterm_types::{ChangeStats, CommitInfo};

use crate::error::GitError;

/// Field separator in the log format (ASCII unit separator).
const FIELD_SEPARATOR: char = '\u{1f}';

/// `git log` pretty format matching [`FIELD_SEPARATOR`].
const LOG_FORMAT: &str = "--pretty=format:%H%x1f%s%x1f%an%x1f%ad";

/// Length of an abbreviated hash.
pub const SHORT_HASH_LEN: usize = 7;

/// A source of commits.
pub trait CommitLog {
    /// Whether the version-control tool can be run at all.
    fn is_available(&self) -> bool;

    /// Whether the working directory is inside a repository.
    fn is_inside_repository(&self) -> bool;

    /// Commits reachable from `HEAD` but not from `marker`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GitError`] if the log cannot be read or parsed.
    fn commits_since(&self, marker: &str) -> Result<Vec<CommitInfo>, GitError>;

    /// The newest `limit` commits, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GitError`] if the log cannot be read or parsed.
    fn all_commits(&self, limit: usize) -> Result<Vec<CommitInfo>, GitError>;

    /// Diff size of one commit, if it can be determined.
    fn change_stats(&self, hash: &str) -> Option<ChangeStats>;
}

// ---------------------------------------------------------------------------
// git CLI
// ---------------------------------------------------------------------------

/// [`CommitLog`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: Option<PathBuf>,
}

impl GitCli {
    /// Look for a repository at or above `start`.
    pub fn discover(start: &Path) -> Self {
        let repo_root = start
            .ancestors()
            .find(|dir| dir.join(".git").exists())
            .map(Path::to_path_buf);
        debug!(start = %start.display(), found = repo_root.is_some(), "repository lookup");
        Self { repo_root }
    }

    /// Look for a repository at or above the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Io`] if the working directory cannot be read.
    pub fn from_current_dir() -> Result<Self, GitError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::discover(&cwd))
    }

    /// Root of the repository, if one was found.
    pub fn repo_root(&self) -> Option<&Path> {
        self.repo_root.as_deref()
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let root = self.repo_root.as_deref().ok_or(GitError::NotARepository)?;
        let output = Command::new("git").args(args).current_dir(root).output()?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Whether the repository exists but has no commits yet, as right
    /// after `git init`. `git log` fails there instead of printing nothing.
    fn is_unborn(&self) -> bool {
        self.repo_root.is_some() && self.run(&["rev-parse", "--verify", "--quiet", "HEAD"]).is_err()
    }
}

impl CommitLog for GitCli {
    fn is_available(&self) -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    fn is_inside_repository(&self) -> bool {
        self.repo_root.is_some()
    }

    fn commits_since(&self, marker: &str) -> Result<Vec<CommitInfo>, GitError> {
        if marker.is_empty() || !marker.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GitError::InvalidMarker(marker.to_owned()));
        }
        if self.is_unborn() {
            return Ok(Vec::new());
        }
        let range = format!("{marker}..HEAD");
        let stdout = self.run(&["log", &range, LOG_FORMAT, "--date=iso-strict"])?;
        parse_log(&stdout)
    }

    fn all_commits(&self, limit: usize) -> Result<Vec<CommitInfo>, GitError> {
        if self.is_unborn() {
            debug!("repository has no commits yet");
            return Ok(Vec::new());
        }
        let count = limit.to_string();
        let stdout = self.run(&["log", "-n", &count, LOG_FORMAT, "--date=iso-strict"])?;
        parse_log(&stdout)
    }

    fn change_stats(&self, hash: &str) -> Option<ChangeStats> {
        self.run(&["show", hash, "--shortstat", "--format="])
            .ok()
            .map(|stdout| parse_shortstat(&stdout))
    }
}

/// Parse `git log` output produced with [`LOG_FORMAT`].
///
/// # Errors
///
/// Returns [`GitError::MalformedOutput`] for a line with fewer than four
/// fields or an unparsable date.
pub fn parse_log(output: &str) -> Result<Vec<CommitInfo>, GitError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_log_line)
        .collect()
}

fn parse_log_line(line: &str) -> Result<CommitInfo, GitError> {
    let malformed = || GitError::MalformedOutput {
        line: line.to_owned(),
    };
    let mut fields = line.splitn(4, FIELD_SEPARATOR);
    let hash = fields.next().map(str::trim).filter(|h| !h.is_empty()).ok_or_else(malformed)?;
    let message = fields.next().ok_or_else(malformed)?;
    let author = fields.next().ok_or_else(malformed)?;
    let date_text = fields.next().ok_or_else(malformed)?;
    let date = DateTime::parse_from_rfc3339(date_text.trim())
        .ok()
        .ok_or_else(malformed)?;

    Ok(CommitInfo {
        hash: hash.to_owned(),
        short_hash: short_hash(hash),
        message: message.to_owned(),
        author: author.to_owned(),
        date,
        files_changed: None,
        lines_added: None,
        lines_deleted: None,
    })
}

/// First [`SHORT_HASH_LEN`] characters of a hash.
pub fn short_hash(hash: &str) -> String {
    hash.chars().take(SHORT_HASH_LEN).collect()
}

/// Parse `--shortstat` output such as
/// `" 3 files changed, 45 insertions(+), 12 deletions(-)"`.
///
/// Missing parts count as zero.
pub fn parse_shortstat(output: &str) -> ChangeStats {
    let mut stats = ChangeStats::default();
    for part in output.split(',') {
        let mut words = part.split_whitespace();
        let (Some(number), Some(label)) = (words.next(), words.next()) else {
            continue;
        };
        let Ok(value) = number.parse::<u32>() else {
            continue;
        };
        if label.starts_with("file") {
            stats.files_changed = value;
        } else if label.starts_with("insertion") {
            stats.lines_added = value;
        } else if label.starts_with("deletion") {
            stats.lines_deleted = value;
        }
    }
    stats
}

// ---------------------------------------------------------------------------
// Scripted log
// ---------------------------------------------------------------------------

/// A [`CommitLog`] that serves a fixed history, newest first.
///
/// Used to exercise the reconciler without a repository. `commits_since`
/// returns the commits listed before the marker, mirroring `marker..HEAD`
/// on a linear history.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommitLog {
    commits: Vec<CommitInfo>,
    available: bool,
    repository: bool,
    fail_reads: bool,
}

impl ScriptedCommitLog {
    /// A healthy repository containing `commits` (newest first).
    pub const fn new(commits: Vec<CommitInfo>) -> Self {
        Self {
            commits,
            available: true,
            repository: true,
            fail_reads: false,
        }
    }

    /// A machine without `git`.
    pub const fn unavailable() -> Self {
        Self {
            commits: Vec::new(),
            available: false,
            repository: false,
            fail_reads: false,
        }
    }

    /// `git` is installed but the directory is not a repository.
    pub const fn outside_repository() -> Self {
        Self {
            commits: Vec::new(),
            available: true,
            repository: false,
            fail_reads: false,
        }
    }

    /// Make every log read fail.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Add a commit on top of the history.
    pub fn push(&mut self, commit: CommitInfo) {
        self.commits.insert(0, commit);
    }

    fn read_error(&self) -> Result<(), GitError> {
        if self.fail_reads {
            return Err(GitError::CommandFailed {
                command: String::from("log"),
                stderr: String::from("scripted failure"),
            });
        }
        Ok(())
    }
}

impl CommitLog for ScriptedCommitLog {
    fn is_available(&self) -> bool {
        self.available
    }

    fn is_inside_repository(&self) -> bool {
        self.repository
    }

    fn commits_since(&self, marker: &str) -> Result<Vec<CommitInfo>, GitError> {
        self.read_error()?;
        Ok(self
            .commits
            .iter()
            .take_while(|c| c.hash != marker && c.short_hash != marker)
            .cloned()
            .collect())
    }

    fn all_commits(&self, limit: usize) -> Result<Vec<CommitInfo>, GitError> {
        self.read_error()?;
        Ok(self.commits.iter().take(limit).cloned().collect())
    }

    fn change_stats(&self, hash: &str) -> Option<ChangeStats> {
        let commit = self.commits.iter().find(|c| c.hash == hash)?;
        Some(ChangeStats {
            files_changed: commit.files_changed?,
            lines_added: commit.lines_added.unwrap_or(0),
            lines_deleted: commit.lines_deleted.unwrap_or(0),
        })
    }
}
