//! Application state shared across all request handlers.

use std::sync::Arc;

use hedgehog_core::{RecordStore, SqliteStore};

use crate::config::Config;
use crate::flash::FlashStore;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store; the only shared mutable resource.
    pub store: Arc<dyn RecordStore>,

    /// Pending flash messages keyed by session id.
    pub flash: FlashStore,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state around an already opened store.
    pub fn new(config: Config, store: Arc<dyn RecordStore>) -> Self {
        let flash = FlashStore::new(config.session_ttl);

        tracing::info!(
            session_ttl_secs = config.session_ttl.as_secs(),
            "application state initialized"
        );

        Self {
            store,
            flash,
            config: Arc::new(config),
        }
    }

    /// Open the configured SQLite store and build state around it.
    ///
    /// Failing to open the store is fatal at startup.
    pub fn open(config: Config) -> anyhow::Result<Self> {
        let store = SqliteStore::open(&config.database_path, config.db_timeout)?;
        Ok(Self::new(config, Arc::new(store)))
    }
}
