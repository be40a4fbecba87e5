//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::{DEFAULT_READ_LIMIT, DEFAULT_USERS_LIMIT};

/// BlueSky CLI Wrapper
#[derive(Parser, Debug)]
#[command(name = "bluesky-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Path of the external bluesky-cli binary
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub cli_path: Option<PathBuf>,

    /// Pass arguments to the binary directly instead of through a shell
    #[arg(long, global = true)]
    pub direct: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a message to BlueSky
    Post {
        /// Message to post
        #[arg(short, long)]
        message: String,

        /// Post visibility
        #[arg(short, long)]
        visibility: Option<String>,
    },

    /// Read posts from BlueSky
    Read {
        /// Number of posts to read
        #[arg(short, long, default_value_t = DEFAULT_READ_LIMIT)]
        limit: u32,

        /// Time range for posts
        #[arg(short, long)]
        time_range: Option<String>,
    },

    /// List users from the users file
    ListUsers {
        /// Maximum number of users to print
        #[arg(short, long, default_value_t = DEFAULT_USERS_LIMIT)]
        limit: usize,

        /// Only users containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Show config path
    Path,

    /// Print config template
    Init,
}
