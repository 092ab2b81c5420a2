//! Application state shared by the CLI commands and the health server.
//!
//! AppState resolves the data directory and global configuration once. The
//! username store is opened per command since core operations are synchronous
//! and every write goes straight to disk.

use std::path::PathBuf;

use anyhow::Context;

use gctchat_core::identity::UsernamePersistence;
use gctchat_infra::config::{apply_env_overrides, load_global_config};
use gctchat_infra::filesystem::resolve_data_dir;
use gctchat_infra::kv::FileKvStore;
use gctchat_types::config::GlobalConfig;

/// Username persistence pinned to the on-disk store.
pub type FileUsernamePersistence = UsernamePersistence<FileKvStore>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: GlobalConfig,
}

impl AppState {
    /// Resolve the data directory, create it, and load configuration.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let config = apply_env_overrides(load_global_config(&data_dir).await);
        tracing::debug!(
            data_dir = %data_dir.display(),
            port = config.server.port,
            "application state initialized"
        );

        Ok(Self { data_dir, config })
    }

    pub fn username_store(&self) -> FileKvStore {
        FileKvStore::in_data_dir(&self.data_dir)
    }

    pub fn username_persistence(&self) -> FileUsernamePersistence {
        UsernamePersistence::new(self.username_store())
    }
}
