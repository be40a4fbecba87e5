//! Command construction for the external binary
//!
//! Every invocation has the shape `<path> <subcommand> [--flag value]*`.
//! Construction is pure: identical inputs always yield identical tokens.

use crate::domain::{InvocationMode, PostRequest, ReadRequest};

/// Ordered tokens for one external process call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a bare token.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append `flag value` only when a value is present.
    pub fn opt_flag(mut self, flag: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.args.push(flag.to_string());
            self.args.push(value.into());
        }
        self
    }

    /// Program followed by its arguments.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Tokens joined with single spaces.
    pub fn command_line(&self) -> String {
        self.tokens().join(" ")
    }
}

/// Wrap a message in literal double quotes.
///
/// Embedded quotes and shell metacharacters are NOT escaped.
pub fn quote_message(message: &str) -> String {
    format!("\"{}\"", message)
}

/// Build the `post` invocation.
pub fn post_invocation(cli_path: &str, req: &PostRequest, mode: InvocationMode) -> Invocation {
    let message = match mode {
        InvocationMode::Shell => quote_message(&req.message),
        InvocationMode::Direct => req.message.clone(),
    };
    Invocation::new(cli_path)
        .arg("post")
        .arg("--message")
        .arg(message)
        .opt_flag("--visibility", req.visibility())
}

/// Build the `read` invocation.
pub fn read_invocation(cli_path: &str, req: &ReadRequest) -> Invocation {
    Invocation::new(cli_path)
        .arg("read")
        .opt_flag("--limit", req.limit().map(|l| l.to_string()))
        .opt_flag("--time-range", req.time_range())
}
