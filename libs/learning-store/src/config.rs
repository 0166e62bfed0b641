//! Store configuration from the environment.

use crate::blob::SqliteBlobStore;
use crate::error::{Result, StoreError};
use crate::history::DEFAULT_HISTORY_LIMIT;
use std::path::PathBuf;

/// Overrides the database location.
pub const DB_PATH_VAR: &str = "LEARNING_DB_PATH";

/// Overrides the number of history entries kept.
pub const HISTORY_LIMIT_VAR: &str = "LEARNING_HISTORY_LIMIT";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub history_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

fn default_db_path() -> PathBuf {
    // Working directory when the platform has no data dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("english-buddy")
        .join("learning.db")
}

impl StoreConfig {
    /// Load configuration from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup(DB_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let history_limit = match lookup(HISTORY_LIMIT_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                StoreError::Config(format!("{HISTORY_LIMIT_VAR} must be a whole number, got {raw:?}"))
            })?,
            None => DEFAULT_HISTORY_LIMIT,
        };

        Ok(Self {
            db_path,
            history_limit,
        })
    }

    /// Open the SQLite store, creating its directory if needed.
    pub fn open_store(&self) -> Result<SqliteBlobStore> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                StoreError::Config(format!("cannot create {}: {err}", parent.display()))
            })?;
        }

        tracing::info!(path = %self.db_path.display(), "opening learning store");
        SqliteBlobStore::open(&self.db_path)
    }
}
