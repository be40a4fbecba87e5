//! Test doubles for the I/O boundary traits

#![cfg(unix)]
#![allow(dead_code)]

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use bluesky_cli::infrastructure::traits::{CommandRunner, Console};

/// One recorded `CommandRunner::run` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub cmd: String,
    pub args: Vec<String>,
}

/// Command runner returning a canned result and recording every call.
pub struct FakeRunner {
    exit_code: i32,
    stdout: String,
    stderr: String,
    spawn_error: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeRunner {
    pub fn success(stdout: &str) -> Self {
        Self::new(0, stdout, "", false)
    }

    pub fn failure(exit_code: i32, stderr: &str) -> Self {
        Self::new(exit_code, "", stderr, false)
    }

    /// Simulates a child that cannot be started at all.
    pub fn unspawnable() -> Self {
        Self::new(0, "", "", true)
    }

    fn new(exit_code: i32, stdout: &str, stderr: &str, spawn_error: bool) -> Self {
        Self {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            spawn_error,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        self.calls.lock().unwrap().push(Call {
            cmd: cmd.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        if self.spawn_error {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }
        Ok(Output {
            // wait(2) status: exit code lives in the second byte
            status: ExitStatus::from_raw(self.exit_code << 8),
            stdout: self.stdout.clone().into_bytes(),
            stderr: self.stderr.clone().into_bytes(),
        })
    }
}

/// Console collecting everything written to it.
#[derive(Default)]
pub struct BufferConsole {
    buf: Mutex<String>,
}

impl BufferConsole {
    pub fn contents(&self) -> String {
        self.buf.lock().unwrap().clone()
    }
}

impl Console for BufferConsole {
    fn write_out(&self, text: &str) -> io::Result<()> {
        self.buf.lock().unwrap().push_str(text);
        Ok(())
    }
}
