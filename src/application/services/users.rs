//! Users listing from a plain text file, one handle per line

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::UserQuery;
use crate::infrastructure::traits::FileSystem;

/// Reads, filters and limits the configured users file.
pub struct UsersService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl UsersService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Load all lines of the users file.
    pub fn load(&self) -> ApplicationResult<Vec<String>> {
        let path = &self.settings.users_file;
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read users file", path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Users matching the query, in file order.
    pub fn list(&self, query: &UserQuery) -> ApplicationResult<Vec<String>> {
        let users = self.load()?;
        debug!(
            "list: total={}, filter={:?}, limit={}",
            users.len(),
            query.filter,
            query.limit
        );
        Ok(query.apply(users))
    }
}
