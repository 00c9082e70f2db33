use async_trait::async_trait;
use chrono::{DateTime, Utc};
use learn_core::model::{AuthSession, AuthToken, Language, UserId, UserInfo, UserRole};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the signed-in session.
///
/// Mirrors `AuthSession` with plain fields so adapters can store it without
/// leaking storage concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSessionRecord {
    pub token: String,
    pub user_id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub saved_at: DateTime<Utc>,
}

impl AuthSessionRecord {
    #[must_use]
    pub fn from_session(session: &AuthSession, saved_at: DateTime<Utc>) -> Self {
        Self {
            token: session.token.expose().to_string(),
            user_id: session.user.id.value(),
            username: session.user.username.clone(),
            first_name: session.user.first_name.clone(),
            last_name: session.user.last_name.clone(),
            role: session.role.as_str().to_string(),
            saved_at,
        }
    }

    /// Convert the record back into a domain `AuthSession`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the token or role are invalid.
    pub fn into_session(self) -> Result<AuthSession, StorageError> {
        let token =
            AuthToken::new(self.token).map_err(|e| StorageError::Serialization(e.to_string()))?;
        let role =
            UserRole::parse(&self.role).map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(AuthSession {
            token,
            user: UserInfo {
                id: UserId::new(self.user_id),
                username: self.username,
                first_name: self.first_name,
                last_name: self.last_name,
            },
            role,
        })
    }
}

/// Storage for the single signed-in session on this device.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the record is corrupt.
    async fn load_session(&self) -> Result<Option<AuthSession>, StorageError>;

    /// Replace the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn save_session(
        &self,
        session: &AuthSession,
        saved_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Remove the persisted session. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn clear_session(&self) -> Result<(), StorageError>;
}

/// Device-level user preferences.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn get_language(&self) -> Result<Option<Language>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn set_language(&self, language: Language) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    session: Arc<Mutex<Option<AuthSessionRecord>>>,
    language: Arc<Mutex<Option<Language>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemoryRepository {
    async fn load_session(&self) -> Result<Option<AuthSession>, StorageError> {
        let guard = self
            .session
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clone().map(AuthSessionRecord::into_session).transpose()
    }

    async fn save_session(
        &self,
        session: &AuthSession,
        saved_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(AuthSessionRecord::from_session(session, saved_at));
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn get_language(&self) -> Result<Option<Language>, StorageError> {
        let guard = self
            .language
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        let mut guard = self
            .language
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(language);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionStore>,
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let sessions: Arc<dyn SessionStore> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(repo);
        Self {
            sessions,
            preferences,
        }
    }
}
