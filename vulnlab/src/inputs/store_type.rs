use crate::inputs::{errors::InputError, types::InputRecord};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

/// Facade over the configured backend for the append-only input store
pub struct InputStore;

impl InputStore {
    /// Initialize the input table
    pub async fn init() -> Result<(), InputError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(InputError::Storage("Unsupported database type".to_string())),
        }
    }

    /// Append one record
    ///
    /// Accepts any string, including empty; each append is a single
    /// statement, so concurrent appends interleave in arrival order but
    /// never corrupt or drop records.
    pub async fn append(content: &str) -> Result<(), InputError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            append_input_sqlite(pool, content).await
        } else if let Some(pool) = store.as_postgres() {
            append_input_postgres(pool, content).await
        } else {
            Err(InputError::Storage("Unsupported database type".to_string()))
        }
    }

    /// List every record in insertion order (may be empty)
    pub async fn list() -> Result<Vec<InputRecord>, InputError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            list_inputs_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            list_inputs_postgres(pool).await
        } else {
            Err(InputError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Remove every record; clearing an empty store succeeds
    pub async fn clear() -> Result<(), InputError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            clear_inputs_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            clear_inputs_postgres(pool).await
        } else {
            Err(InputError::Storage("Unsupported database type".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use serial_test::serial;

    /// Test that listing returns records in append order
    #[tokio::test]
    #[serial]
    async fn test_append_preserves_order() {
        init_test_environment().await;
        InputStore::clear().await.expect("clear should succeed");

        InputStore::append("first").await.expect("append should succeed");
        InputStore::append("second").await.expect("append should succeed");
        InputStore::append("third").await.expect("append should succeed");

        let records = InputStore::list().await.expect("list should succeed");
        let contents: Vec<_> = records.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    /// Test that clear empties the store and is idempotent
    #[tokio::test]
    #[serial]
    async fn test_clear_is_idempotent() {
        init_test_environment().await;

        InputStore::append("doomed").await.expect("append should succeed");
        InputStore::clear().await.expect("clear should succeed");

        let records = InputStore::list().await.expect("list should succeed");
        assert!(records.is_empty());

        // Clearing an already-empty store also succeeds
        InputStore::clear().await.expect("second clear should succeed");
    }

    /// Test that the empty string is storable content
    #[tokio::test]
    #[serial]
    async fn test_empty_string_is_valid_content() {
        init_test_environment().await;
        InputStore::clear().await.expect("clear should succeed");

        InputStore::append("").await.expect("append should succeed");

        let records = InputStore::list().await.expect("list should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "");
    }
}
