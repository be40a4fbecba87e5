//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (CommandRunner, Console, FileSystem)
//! but are themselves concrete structs, not traits.

mod bluesky;
mod users;

pub use bluesky::BlueskyService;
pub use users::UsersService;
