//! End-to-end tests against real child processes.
//!
//! `echo` stands in for the external binary so the forwarded arguments show
//! up on stdout.
#![cfg(unix)]

mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use bluesky_cli::application::services::BlueskyService;
use bluesky_cli::application::ApplicationError;
use bluesky_cli::config::Settings;
use bluesky_cli::domain::{InvocationMode, PostRequest, ReadRequest};
use bluesky_cli::infrastructure::traits::RealCommandRunner;

use common::BufferConsole;

fn service(cli_path: &str, mode: InvocationMode, console: &Arc<BufferConsole>) -> BlueskyService {
    let settings = Settings {
        cli_path: PathBuf::from(cli_path),
        invocation: mode,
        ..Settings::default()
    };
    BlueskyService::new(
        Arc::new(RealCommandRunner),
        console.clone(),
        Arc::new(settings),
    )
}

#[test]
fn given_shell_mode_when_post_then_shell_strips_quotes() {
    let console = Arc::new(BufferConsole::default());
    let svc = service("echo", InvocationMode::Shell, &console);

    svc.post(&PostRequest::new("hello world", Some("public".into())))
        .unwrap();

    assert_eq!(
        console.contents(),
        "post --message hello world --visibility public\n"
    );
}

#[test]
fn given_direct_mode_when_read_then_arguments_forwarded() {
    let console = Arc::new(BufferConsole::default());
    let svc = service("echo", InvocationMode::Direct, &console);

    svc.read(&ReadRequest::new(Some(20), Some("24h".into())))
        .unwrap();

    assert_eq!(console.contents(), "read --limit 20 --time-range 24h\n");
}

#[test]
fn given_script_writing_stderr_when_read_fails_then_error_carries_it() {
    // Arrange: the script is read by sh, never exec'd directly
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("fail.sh");
    fs::write(&script, "echo 'network unreachable' >&2\nexit 1\n").unwrap();
    let cli_path = format!("sh {}", script.display());
    let console = Arc::new(BufferConsole::default());
    let svc = service(&cli_path, InvocationMode::Shell, &console);

    // Act
    let err = svc.read(&ReadRequest::default()).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::ReadFailed(_)));
    assert_eq!(err.to_string(), "Read failed: network unreachable\n");
    assert_eq!(console.contents(), "");
}

#[test]
fn given_missing_binary_in_shell_mode_when_post_then_post_failed() {
    let console = Arc::new(BufferConsole::default());
    let svc = service(
        "./no-such-bluesky-cli-binary",
        InvocationMode::Shell,
        &console,
    );

    let err = svc
        .post(&PostRequest::new("hello", None))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::PostFailed(_)));
    assert_eq!(console.contents(), "");
}

#[test]
fn given_missing_binary_in_direct_mode_when_post_then_post_failed() {
    let console = Arc::new(BufferConsole::default());
    let svc = service(
        "./no-such-bluesky-cli-binary",
        InvocationMode::Direct,
        &console,
    );

    let err = svc
        .post(&PostRequest::new("hello", None))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::PostFailed(_)));
}
