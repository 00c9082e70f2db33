use std::sync::Arc;

use learn_core::model::Language;
use storage::repository::{PreferencesRepository, StorageError};

/// Remembers the display language across restarts.
#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>) -> Self {
        Self { repo }
    }

    /// Stored language, or English when none was chosen yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    pub async fn language(&self) -> Result<Language, StorageError> {
        Ok(self.repo.get_language().await?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    pub async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        self.repo.set_language(language).await
    }
}
