//! Process invocation wrapper around the external `bluesky-cli` binary
//!
//! Translates post/read requests into one external process call each and
//! maps the outcome to either console output or a `PostFailed`/`ReadFailed`
//! error carrying the child's stderr.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{
    post_invocation, read_invocation, Invocation, InvocationMode, PostRequest, ProcessResult,
    ReadRequest,
};
use crate::infrastructure::traits::{CommandRunner, Console};

/// Wrapper service for posting and reading through the external binary.
pub struct BlueskyService {
    cmd: Arc<dyn CommandRunner>,
    console: Arc<dyn Console>,
    settings: Arc<Settings>,
}

impl BlueskyService {
    /// Create a new wrapper service.
    pub fn new(
        cmd: Arc<dyn CommandRunner>,
        console: Arc<dyn Console>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            cmd,
            console,
            settings,
        }
    }

    fn cli_path(&self) -> String {
        self.settings.cli_path.to_string_lossy().into_owned()
    }

    /// Build the invocation for a post without running it.
    pub fn post_invocation(&self, req: &PostRequest) -> Invocation {
        post_invocation(&self.cli_path(), req, self.settings.invocation)
    }

    /// Build the invocation for a read without running it.
    pub fn read_invocation(&self, req: &ReadRequest) -> Invocation {
        read_invocation(&self.cli_path(), req)
    }

    /// Publish a message.
    ///
    /// On success the child's stdout is written to the console verbatim.
    ///
    /// # Errors
    /// `PostFailed` with the child's stderr when it exits unsuccessfully,
    /// or with the spawn error text when it cannot be started.
    #[instrument(skip(self))]
    pub fn post(&self, req: &PostRequest) -> ApplicationResult<()> {
        let invocation = self.post_invocation(req);
        let result = self
            .execute(&invocation)
            .map_err(|e| ApplicationError::PostFailed(e.to_string()))?;

        if !result.success {
            warn!("post: exit_code={:?}", result.exit_code);
            return Err(ApplicationError::PostFailed(result.stderr));
        }

        self.emit(&result.stdout)
    }

    /// Fetch posts.
    ///
    /// Same contract as [`BlueskyService::post`], failing with `ReadFailed`.
    #[instrument(skip(self))]
    pub fn read(&self, req: &ReadRequest) -> ApplicationResult<()> {
        let invocation = self.read_invocation(req);
        let result = self
            .execute(&invocation)
            .map_err(|e| ApplicationError::ReadFailed(e.to_string()))?;

        if !result.success {
            warn!("read: exit_code={:?}", result.exit_code);
            return Err(ApplicationError::ReadFailed(result.stderr));
        }

        self.emit(&result.stdout)
    }

    /// Run the invocation according to the configured mode.
    fn execute(&self, invocation: &Invocation) -> std::io::Result<ProcessResult> {
        let output = match self.settings.invocation {
            InvocationMode::Shell => {
                let line = invocation.command_line();
                debug!("execute: {} -c {}", self.settings.shell, line);
                self.cmd.run(&self.settings.shell, &["-c", line.as_str()])?
            }
            InvocationMode::Direct => {
                let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
                debug!("execute: {} {:?}", invocation.program, args);
                self.cmd.run(&invocation.program, &args)?
            }
        };
        let result = ProcessResult::from(output);
        debug!(
            "execute: success={}, exit_code={:?}",
            result.success, result.exit_code
        );
        Ok(result)
    }

    fn emit(&self, stdout: &str) -> ApplicationResult<()> {
        self.console
            .write_out(stdout)
            .map_err(|e| ApplicationError::OperationFailed {
                context: "write to console".into(),
                source: Box::new(e),
            })
    }
}
