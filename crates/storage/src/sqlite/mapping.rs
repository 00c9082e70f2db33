use learn_core::model::Language;
use sqlx::Row;

use crate::repository::{AuthSessionRecord, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

pub(crate) fn user_id_to_i64(v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization("user_id overflow".into()))
}

pub(crate) fn map_session_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<AuthSessionRecord, StorageError> {
    let user_id: i64 = row.try_get("user_id").map_err(ser)?;
    Ok(AuthSessionRecord {
        token: row.try_get("token").map_err(ser)?,
        user_id: u64::try_from(user_id)
            .map_err(|_| StorageError::Serialization("user_id sign overflow".into()))?,
        username: row.try_get("username").map_err(ser)?,
        first_name: row.try_get("first_name").map_err(ser)?,
        last_name: row.try_get("last_name").map_err(ser)?,
        role: row.try_get("role").map_err(ser)?,
        saved_at: row.try_get("saved_at").map_err(ser)?,
    })
}

pub(crate) fn parse_language(s: &str) -> Result<Language, StorageError> {
    s.parse::<Language>().map_err(ser)
}
