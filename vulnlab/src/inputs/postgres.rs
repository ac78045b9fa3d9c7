use crate::inputs::{errors::InputError, types::InputRecord};
use crate::storage::DB_TABLE_USER_INPUTS;
use chrono::Utc;
use sqlx::{Pool, Postgres};

// Postgres implementations
pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), InputError> {
    let table_name = DB_TABLE_USER_INPUTS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
        table_name
    ))
    .execute(pool)
    .await
    .map_err(|e| InputError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn append_input_postgres(
    pool: &Pool<Postgres>,
    content: &str,
) -> Result<(), InputError> {
    let table_name = DB_TABLE_USER_INPUTS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (content, created_at) VALUES ($1, $2)
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

pub(super) async fn list_inputs_postgres(
    pool: &Pool<Postgres>,
) -> Result<Vec<InputRecord>, InputError> {
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

pub(super) async fn clear_inputs_postgres(pool: &Pool<Postgres>) -> Result<(), InputError> {
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
