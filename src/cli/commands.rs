//! Command dispatch: one handler per subcommand

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::{output, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{InvocationMode, PostRequest, ReadRequest, UserQuery};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{Console, StdoutConsole};
use crate::infrastructure::InfraError;

/// Load settings, wire real services and run the parsed command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Completion { shell } => cmd_completion(&StdoutConsole, *shell),
        Commands::Config { command } => cmd_config(&StdoutConsole, cli, command),
        _ => {
            let settings = apply_overrides(cli, Settings::load()?);
            let container = ServiceContainer::new(settings);
            dispatch(cli, &container)
        }
    }
}

/// Command line flags win over every other settings layer.
pub fn apply_overrides(cli: &Cli, mut settings: Settings) -> Settings {
    if let Some(path) = &cli.cli_path {
        settings.cli_path = path.clone();
    }
    if cli.direct {
        settings.invocation = InvocationMode::Direct;
    }
    settings
}

/// Run a post, read or list-users command against the given container.
pub fn dispatch(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Commands::Post {
            message,
            visibility,
        } => cmd_post(container, message, visibility.clone()),
        Commands::Read { limit, time_range } => cmd_read(container, *limit, time_range.clone()),
        Commands::ListUsers { limit, filter } => cmd_list_users(container, *limit, filter.clone()),
        Commands::Config { command } => cmd_config(container.console.as_ref(), cli, command),
        Commands::Completion { shell } => cmd_completion(container.console.as_ref(), *shell),
    }
}

#[instrument(skip(container))]
fn cmd_post(
    container: &ServiceContainer,
    message: &str,
    visibility: Option<String>,
) -> CliResult<()> {
    let req = PostRequest::new(message, visibility);
    container.bluesky_service().post(&req)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_read(container: &ServiceContainer, limit: u32, time_range: Option<String>) -> CliResult<()> {
    let req = ReadRequest::new(Some(limit), time_range);
    container.bluesky_service().read(&req)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_list_users(
    container: &ServiceContainer,
    limit: usize,
    filter: Option<String>,
) -> CliResult<()> {
    let query = UserQuery { filter, limit };
    let users = container.users_service().list(&query)?;
    if users.is_empty() {
        output::warning("no users matched");
    }
    for user in users {
        write_line(container.console.as_ref(), &user)?;
    }
    Ok(())
}

fn cmd_config(console: &dyn Console, cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = apply_overrides(cli, Settings::load()?);
            // to_toml already ends with a newline
            console
                .write_out(&settings.to_toml()?)
                .map_err(|e| InfraError::io("write config", e))?;
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => write_line(console, &path.display().to_string())?,
            None => output::warning("no home directory; global config unavailable"),
        },
        ConfigCommands::Init => console
            .write_out(&Settings::template())
            .map_err(|e| InfraError::io("write config template", e))?,
    }
    Ok(())
}

fn cmd_completion(console: &dyn Console, shell: Shell) -> CliResult<()> {
    debug!("cmd_completion: shell={:?}", shell);
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, name, &mut buf);
    console
        .write_out(&String::from_utf8_lossy(&buf))
        .map_err(|e| InfraError::io("write completions", e))?;
    Ok(())
}

/// Write one line of data to the console.
fn write_line(console: &dyn Console, line: &str) -> CliResult<()> {
    console
        .write_out(&format!("{line}\n"))
        .map_err(|e| InfraError::io("write output", e))?;
    Ok(())
}
