//! Ordered, externally 1-indexed joke collection, filled exactly once.

use chuck_core::error::ChuckError;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a joke lookup produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Population has not completed, or it failed.
    #[error("joke catalog is not loaded")]
    NotLoaded,

    /// The ordinal is outside `1..=size`.
    #[error("joke {ordinal} is out of range (1..={size})")]
    OutOfRange { ordinal: i64, size: usize },
}

/// Catalog lifecycle as seen by operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Loaded(usize),
    Failed(String),
}

/// The joke catalog.
#[derive(Debug, Default)]
pub struct JokeCatalog {
    jokes: OnceLock<Vec<String>>,
    failure: OnceLock<String>,
}

impl JokeCatalog {
    /// An empty catalog awaiting population.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog that is already loaded.
    pub fn from_jokes(jokes: Vec<String>) -> Result<Self, ChuckError> {
        let catalog = Self::new();
        catalog.populate(jokes)?;
        Ok(catalog)
    }

    /// Fill the catalog. Succeeds once; an empty list is rejected.
    pub fn populate(&self, jokes: Vec<String>) -> Result<(), ChuckError> {
        if jokes.is_empty() {
            return Err(ChuckError::Catalog("no jokes to load".into()));
        }
        self.jokes
            .set(jokes)
            .map_err(|_| ChuckError::Catalog("catalog already populated".into()))
    }

    /// Record why population failed. Only the first reason is kept.
    pub fn mark_failed(&self, reason: &str) {
        let _ = self.failure.set(reason.to_string());
    }

    pub fn is_loaded(&self) -> bool {
        self.jokes.get().is_some()
    }

    /// Number of jokes; 0 while not loaded.
    pub fn size(&self) -> usize {
        self.jokes.get().map_or(0, Vec::len)
    }

    /// Joke at a 1-based ordinal.
    pub fn get(&self, ordinal: i64) -> Result<&str, CatalogError> {
        let jokes = self.jokes.get().ok_or(CatalogError::NotLoaded)?;
        let size = jokes.len();
        usize::try_from(ordinal)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| jokes.get(idx))
            .map(String::as_str)
            .ok_or(CatalogError::OutOfRange { ordinal, size })
    }

    pub fn status(&self) -> CatalogStatus {
        if let Some(jokes) = self.jokes.get() {
            return CatalogStatus::Loaded(jokes.len());
        }
        match self.failure.get() {
            Some(reason) => CatalogStatus::Failed(reason.clone()),
            None => CatalogStatus::Loading,
        }
    }
}
