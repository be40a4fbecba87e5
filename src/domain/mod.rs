//! Domain layer: entities and command construction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod invocation;

pub use entities::*;
pub use invocation::{post_invocation, quote_message, read_invocation, Invocation};
