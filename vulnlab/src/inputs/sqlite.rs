use crate::inputs::{errors::InputError, types::InputRecord};
use crate::storage::DB_TABLE_USER_INPUTS;
use chrono::Utc;
use sqlx::{Pool, Sqlite};

// SQLite implementations
pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), InputError> {
    let table_name = DB_TABLE_USER_INPUTS.as_str();

    // The autoincrement id preserves append order for listing
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
        table_name
    ))
    .execute(pool)
    .await
    .map_err(|e| InputError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn append_input_sqlite(
    pool: &Pool<Sqlite>,
    content: &str,
) -> Result<(), InputError> {
    let table_name = DB_TABLE_USER_INPUTS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (content, created_at) VALUES (?, ?)
        "#,
        table_name
    ))
    .bind(content)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| InputError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn list_inputs_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<InputRecord>, InputError> {
    let table_name = DB_TABLE_USER_INPUTS.as_str();

    sqlx::query_as::<_, InputRecord>(&format!(
        r#"
        SELECT content FROM {} ORDER BY id
        "#,
        table_name
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| InputError::Storage(e.to_string()))
}

pub(super) async fn clear_inputs_sqlite(pool: &Pool<Sqlite>) -> Result<(), InputError> {
    let table_name = DB_TABLE_USER_INPUTS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {}
        "#,
        table_name
    ))
    .execute(pool)
    .await
    .map_err(|e| InputError::Storage(e.to_string()))?;

    Ok(())
}
