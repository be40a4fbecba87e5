//! Front-end tests: parsed arguments flow through to the external command.
#![cfg(unix)]

mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tempfile::TempDir;

use bluesky_cli::cli::commands::{apply_overrides, dispatch};
use bluesky_cli::cli::Cli;
use bluesky_cli::config::Settings;
use bluesky_cli::domain::{InvocationMode, PostRequest};
use bluesky_cli::exitcode;
use bluesky_cli::infrastructure::di::ServiceContainer;
use bluesky_cli::infrastructure::traits::RealFileSystem;

use common::{BufferConsole, FakeRunner};

fn run(args: &[&str], runner: &Arc<FakeRunner>, console: &Arc<BufferConsole>) -> Result<(), i32> {
    run_with(Settings::default(), args, runner, console)
}

fn run_with(
    settings: Settings,
    args: &[&str],
    runner: &Arc<FakeRunner>,
    console: &Arc<BufferConsole>,
) -> Result<(), i32> {
    let cli = Cli::try_parse_from(args).unwrap();
    let settings = apply_overrides(&cli, settings);
    let container = ServiceContainer::with_deps(
        settings,
        Arc::new(RealFileSystem),
        runner.clone(),
        console.clone(),
    );
    dispatch(&cli, &container).map_err(|e| e.exit_code())
}

#[test]
fn given_read_without_flags_when_dispatched_then_limit_defaults_to_twenty() {
    let runner = Arc::new(FakeRunner::success("feed"));
    let console = Arc::new(BufferConsole::default());

    run(&["bluesky-cli", "read"], &runner, &console).unwrap();

    assert_eq!(
        runner.calls()[0].args,
        vec!["-c", "./bluesky-cli read --limit 20"]
    );
    assert_eq!(console.contents(), "feed");
}

#[test]
fn given_post_when_dispatched_then_message_quoted() {
    let runner = Arc::new(FakeRunner::success("posted"));
    let console = Arc::new(BufferConsole::default());

    run(
        &["bluesky-cli", "post", "--message", "hello world"],
        &runner,
        &console,
    )
    .unwrap();

    assert_eq!(
        runner.calls()[0].args,
        vec!["-c", "./bluesky-cli post --message \"hello world\""]
    );
    assert_eq!(console.contents(), "posted");
}

#[test]
fn given_empty_message_when_dispatched_then_forwarded_as_empty_quotes() {
    let runner = Arc::new(FakeRunner::success("posted"));
    let console = Arc::new(BufferConsole::default());

    run(&["bluesky-cli", "post", "-m", ""], &runner, &console).unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].cmd, "sh");
    assert_eq!(calls[0].args, vec!["-c", "./bluesky-cli post --message \"\""]);
    assert_eq!(console.contents(), "posted");
}

#[test]
fn given_empty_message_when_building_invocation_then_tokens_keep_empty_quotes() {
    let cli = Cli::try_parse_from(["bluesky-cli", "post", "-m", ""]).unwrap();
    let container = ServiceContainer::with_deps(
        apply_overrides(&cli, Settings::default()),
        Arc::new(RealFileSystem),
        Arc::new(FakeRunner::success("")),
        Arc::new(BufferConsole::default()),
    );

    let invocation = container
        .bluesky_service()
        .post_invocation(&PostRequest::new("", None));

    assert_eq!(
        invocation.tokens(),
        vec!["./bluesky-cli", "post", "--message", "\"\""]
    );
}

#[test]
fn given_users_file_when_list_users_dispatched_then_lines_written_to_console() {
    let temp = TempDir::new().unwrap();
    let users_file = temp.path().join("users.txt");
    fs::write(&users_file, "alice.bsky.social\nbob.example.com\ncarol.bsky.social\n").unwrap();
    let settings = Settings {
        users_file,
        ..Settings::default()
    };
    let runner = Arc::new(FakeRunner::success(""));
    let console = Arc::new(BufferConsole::default());

    run_with(
        settings,
        &["bluesky-cli", "list-users", "-f", "bsky"],
        &runner,
        &console,
    )
    .unwrap();

    assert_eq!(console.contents(), "alice.bsky.social\ncarol.bsky.social\n");
    assert!(runner.calls().is_empty());
}

#[test]
fn given_config_init_when_dispatched_then_template_written_to_console() {
    let runner = Arc::new(FakeRunner::success(""));
    let console = Arc::new(BufferConsole::default());

    run(&["bluesky-cli", "config", "init"], &runner, &console).unwrap();

    assert_eq!(console.contents(), Settings::template());
}

#[test]
fn given_failing_binary_when_dispatched_then_software_exit_code() {
    let runner = Arc::new(FakeRunner::failure(1, "network unreachable"));
    let console = Arc::new(BufferConsole::default());

    let code = run(&["bluesky-cli", "read", "-l", "5"], &runner, &console).unwrap_err();

    assert_eq!(code, exitcode::SOFTWARE);
    assert_eq!(console.contents(), "");
}

#[test]
fn given_override_flags_when_applied_then_win_over_settings() {
    let cli = Cli::try_parse_from([
        "bluesky-cli",
        "--direct",
        "--cli-path",
        "/opt/bluesky-cli",
        "read",
    ])
    .unwrap();

    let settings = apply_overrides(&cli, Settings::default());

    assert_eq!(settings.cli_path, PathBuf::from("/opt/bluesky-cli"));
    assert_eq!(settings.invocation, InvocationMode::Direct);
}
