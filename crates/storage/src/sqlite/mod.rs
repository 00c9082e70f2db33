//! `SQLite` home for the little state the client keeps between runs: the
//! signed-in session and the chosen display language.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use thiserror::Error;

use crate::repository::{PreferencesRepository, SessionStore, Storage};

mod mapping;
mod migrate;
mod preferences_repo;
mod session_repo;

/// Writes are a handful per run: sign-in, sign-out, language switch.
const MAX_CONNECTIONS: u32 = 2;
const BUSY_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error("client state database: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl SqliteRepository {
    /// Open the client state database at `database_url`, creating the file
    /// and the schema when missing.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` for a malformed URL, an unreachable file or
    /// a failed migration.
    pub async fn open(database_url: &str) -> Result<Self, SqliteInitError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(BUSY_TIMEOUT)
            .connect_with(options)
            .await?;
        let repo = Self { pool };
        repo.migrate().await?;
        tracing::debug!(database_url, "client state database ready");
        Ok(repo)
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply pending schema versions. Already applied versions are skipped.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if a migration statement fails.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }
}

impl Storage {
    /// Session and preferences persisted in the `SQLite` file at `database_url`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        let repo = SqliteRepository::open(database_url).await?;
        let sessions: Arc<dyn SessionStore> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(repo);
        Ok(Self {
            sessions,
            preferences,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_can_back_shared_stores() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteRepository>();
    }

    #[tokio::test]
    async fn unknown_open_mode_is_rejected() {
        let err = SqliteRepository::open("sqlite:file:state?mode=sideways").await.err();
        assert!(matches!(err, Some(SqliteInitError::Sqlx(_))));
    }
}
