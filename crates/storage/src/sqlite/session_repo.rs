use async_trait::async_trait;
use chrono::{DateTime, Utc};
use learn_core::model::AuthSession;

use crate::repository::{AuthSessionRecord, SessionStore, StorageError};

use super::SqliteRepository;
use super::mapping::{conn, map_session_row, user_id_to_i64};

#[async_trait]
impl SessionStore for SqliteRepository {
    async fn load_session(&self) -> Result<Option<AuthSession>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT token, user_id, username, first_name, last_name, role, saved_at
            FROM auth_session
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };
        map_session_row(&row)?.into_session().map(Some)
    }

    async fn save_session(
        &self,
        session: &AuthSession,
        saved_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let record = AuthSessionRecord::from_session(session, saved_at);
        sqlx::query(
            r"
            INSERT INTO auth_session (
                id, token, user_id, username, first_name, last_name, role, saved_at
            )
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                token = excluded.token,
                user_id = excluded.user_id,
                username = excluded.username,
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                role = excluded.role,
                saved_at = excluded.saved_at
            ",
        )
        .bind(&record.token)
        .bind(user_id_to_i64(record.user_id)?)
        .bind(&record.username)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.role)
        .bind(record.saved_at)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM auth_session WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        Ok(())
    }
}
