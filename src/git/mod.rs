//! # Git Log Fetching
//!
//! The async side of the app: runs `git log` outside the event loop and
//! reports the outcome as a single value. One invocation attempt per
//! request, no retries — retrying is the caller's decision (a refresh key
//! press). Failures become data here; they never cross into the loop as
//! panics.

use std::fmt;
use std::process::Stdio;

use tokio::process::Command;

/// Fixed argument list after `log`: graph lines, compact one-line entries,
/// all branches, forced color so the output matches what a terminal shows.
pub const LOG_ARGS: [&str; 4] = ["--graph", "--oneline", "--all", "--color=always"];

/// Errors from a single `git log` invocation.
/// Variants separate "could not run at all" from "ran and refused".
#[derive(Debug)]
pub enum GitError {
    /// The process could not be launched (git missing, spawn failure).
    Spawn(std::io::Error),
    /// git ran but exited non-zero.
    Exited { code: i32, detail: String },
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitError::Spawn(e) => write!(f, "failed to run git: {e}"),
            GitError::Exited { code, detail } => {
                if detail.is_empty() {
                    write!(f, "git log exited with status {code}")
                } else {
                    write!(f, "git log exited with status {code}: {detail}")
                }
            }
        }
    }
}

impl std::error::Error for GitError {}

/// Run `git log` for the current directory and return its combined output.
pub async fn fetch_log() -> Result<String, GitError> {
    let mut args = vec!["log"];
    args.extend(LOG_ARGS);
    run("git", &args).await
}

/// Spawn a process, wait for it, and return its combined stdout/stderr text.
async fn run(program: &str, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // Superseded and quit-abandoned fetches are aborted; take the child
        // down with the dropped future.
        .kill_on_drop(true)
        .output()
        .await
        .map_err(GitError::Spawn)?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        let mut detail = stderr.trim().to_string();
        if detail.is_empty() {
            detail = stdout.trim().to_string();
        }
        return Err(GitError::Exited {
            code: output.status.code().unwrap_or(-1),
            detail,
        });
    }

    // stdout carries the log; append anything written to stderr so no
    // diagnostics are lost. Downstream treats the payload as one opaque unit.
    let mut text = stdout.into_owned();
    text.push_str(&stderr);
    Ok(text)
}
