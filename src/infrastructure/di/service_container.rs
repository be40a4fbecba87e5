//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{BlueskyService, UsersService};
use crate::config::Settings;
use crate::infrastructure::traits::{
    CommandRunner, Console, FileSystem, RealCommandRunner, RealFileSystem, StdoutConsole,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Console abstraction
    pub console: Arc<dyn Console>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
            Arc::new(StdoutConsole),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        console: Arc<dyn Console>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            console,
        }
    }

    pub fn bluesky_service(&self) -> BlueskyService {
        BlueskyService::new(
            Arc::clone(&self.cmd),
            Arc::clone(&self.console),
            Arc::clone(&self.settings),
        )
    }

    pub fn users_service(&self) -> UsersService {
        UsersService::new(Arc::clone(&self.fs), Arc::clone(&self.settings))
    }
}
