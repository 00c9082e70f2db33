use async_trait::async_trait;
use learn_core::model::Language;
use sqlx::Row;

use crate::repository::{PreferencesRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{conn, parse_language, ser};

#[async_trait]
impl PreferencesRepository for SqliteRepository {
    async fn get_language(&self) -> Result<Option<Language>, StorageError> {
        let row = sqlx::query("SELECT language FROM preferences WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let code: String = row.try_get("language").map_err(ser)?;
        parse_language(&code).map(Some)
    }

    async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (id, language)
            VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET language = excluded.language
            ",
        )
        .bind(language.code())
        .execute(&self.pool)
        .await
        .map_err(conn)?;
        Ok(())
    }
}
