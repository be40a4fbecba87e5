//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bluesky-cli/bluesky-cli.toml`
//! 3. Environment variables: `BLUESKY_CLI_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, InvocationMode};

/// Default location of the external binary.
pub const DEFAULT_CLI_PATH: &str = "./bluesky-cli";

/// Default number of posts requested by `read`.
pub const DEFAULT_READ_LIMIT: u32 = 20;

/// Default number of users printed by `list-users`.
pub const DEFAULT_USERS_LIMIT: usize = 10;

/// Unified configuration for bluesky-cli.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Path of the external binary (default: ./bluesky-cli)
    pub cli_path: PathBuf,
    /// How the binary is launched (default: shell)
    pub invocation: InvocationMode,
    /// Shell used in `shell` mode (default: sh)
    pub shell: String,
    /// File read by `list-users` (default: users.txt)
    pub users_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cli_path: PathBuf::from(DEFAULT_CLI_PATH),
            invocation: InvocationMode::default(),
            shell: "sh".into(),
            users_file: PathBuf::from("users.txt"),
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub cli_path: Option<PathBuf>,
    pub invocation: Option<InvocationMode>,
    pub shell: Option<String>,
    pub users_file: Option<PathBuf>,
}

/// Get the XDG config directory for bluesky-cli.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bluesky-cli").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bluesky-cli.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_mode(value: &str) -> Result<InvocationMode, ApplicationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "shell" => Ok(InvocationMode::Shell),
        "direct" => Ok(InvocationMode::Direct),
        other => Err(ApplicationError::Config {
            message: format!("invalid invocation mode '{other}' (expected shell or direct)"),
        }),
    }
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.cli_path.to_string_lossy().as_ref());
        self.cli_path = PathBuf::from(expanded);

        let expanded = expand_env_vars(self.users_file.to_string_lossy().as_ref());
        self.users_file = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            cli_path: overlay
                .cli_path
                .clone()
                .unwrap_or_else(|| self.cli_path.clone()),
            invocation: overlay.invocation.unwrap_or(self.invocation),
            shell: overlay.shell.clone().unwrap_or_else(|| self.shell.clone()),
            users_file: overlay
                .users_file
                .clone()
                .unwrap_or_else(|| self.users_file.clone()),
        }
    }

    /// Load settings with layered precedence from the global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using an explicit config file instead of the global one.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply BLUESKY_CLI_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("BLUESKY_CLI")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("cli_path") {
            settings.cli_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("invocation") {
            settings.invocation = parse_mode(&val)?;
        }
        if let Ok(val) = config.get_string("shell") {
            settings.shell = val;
        }
        if let Ok(val) = config.get_string("users_file") {
            settings.users_file = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bluesky-cli configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bluesky-cli/bluesky-cli.toml
#   Env:    BLUESKY_CLI_* environment variables (e.g. BLUESKY_CLI_CLI_PATH)
#   Flags:  --cli-path, --direct

# Path of the external bluesky-cli binary
# cli_path = "./bluesky-cli"

# How to launch it: "shell" joins arguments into one command line for `sh -c`,
# "direct" passes them as an argument array without a shell
# invocation = "shell"

# Shell used in "shell" mode
# shell = "sh"

# File read by `list-users`, one handle per line
# users_file = "users.txt"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
