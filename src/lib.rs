//! BlueSky CLI wrapper
//!
//! Posts and reads messages by shelling out to an external `bluesky-cli`
//! binary, forwarding options as arguments and passing its output through.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
