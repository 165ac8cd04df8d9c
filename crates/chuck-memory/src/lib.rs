//! # chuck-memory
//!
//! Per-user session storage: SQLite-backed [`Store`] or in-process [`MemorySessions`].

pub mod memory;
pub mod store;

pub use memory::MemorySessions;
pub use store::Store;

use chuck_core::{config::MemoryConfig, error::ChuckError, traits::SessionStore};
use std::sync::Arc;

/// Build the session store selected by `config.backend`.
pub async fn open(config: &MemoryConfig) -> Result<Arc<dyn SessionStore>, ChuckError> {
    match config.backend.as_str() {
        "sqlite" => Ok(Arc::new(Store::new(config).await?)),
        "memory" => Ok(Arc::new(MemorySessions::new())),
        other => Err(ChuckError::Config(format!(
            "unsupported memory backend: {other}"
        ))),
    }
}
