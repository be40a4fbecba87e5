//! Domain entities: core data structures

use std::process::Output;

use serde::{Deserialize, Serialize};

/// Request to publish a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub message: String,
    /// Visibility passed through verbatim, e.g. "public"
    pub visibility: Option<String>,
}

impl PostRequest {
    /// Any message is forwarded as given, including an empty one.
    pub fn new(message: impl Into<String>, visibility: Option<String>) -> Self {
        Self {
            message: message.into(),
            visibility,
        }
    }

    /// Visibility if supplied and non-empty.
    pub fn visibility(&self) -> Option<&str> {
        self.visibility.as_deref().filter(|v| !v.is_empty())
    }
}

/// Request to fetch posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadRequest {
    pub limit: Option<u32>,
    pub time_range: Option<String>,
}

impl ReadRequest {
    pub fn new(limit: Option<u32>, time_range: Option<String>) -> Self {
        Self { limit, time_range }
    }

    /// Limit if supplied and non-zero. Zero means "let the backend decide".
    pub fn limit(&self) -> Option<u32> {
        self.limit.filter(|l| *l > 0)
    }

    /// Time range if supplied and non-empty.
    pub fn time_range(&self) -> Option<&str> {
        self.time_range.as_deref().filter(|t| !t.is_empty())
    }
}

/// How the external binary is launched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    /// Join tokens into one command line and run it through `<shell> -c`.
    /// The message is wrapped in double quotes without escaping.
    #[default]
    Shell,
    /// Pass tokens as a discrete argv array, no shell involved.
    Direct,
}

impl std::fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationMode::Shell => write!(f, "shell"),
            InvocationMode::Direct => write!(f, "direct"),
        }
    }
}

/// Outcome of one external process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// None when terminated by a signal
    pub exit_code: Option<i32>,
}

impl From<Output> for ProcessResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }
}

/// Filter for the users listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Substring a line must contain
    pub filter: Option<String>,
    pub limit: usize,
}

impl UserQuery {
    /// Keep lines containing the filter, then take at most `limit`.
    pub fn apply(&self, users: Vec<String>) -> Vec<String> {
        let filtered: Vec<String> = match self.filter.as_deref() {
            Some(f) => users.into_iter().filter(|u| u.contains(f)).collect(),
            None => users,
        };
        filtered.into_iter().take(self.limit).collect()
    }
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
