use crate::inputs::{InputRecord, InputStore};
use crate::sanitize::sanitize;
use crate::toggles::FlagSnapshot;

use super::errors::CoordinationError;

/// Store submitted content, escaping it first when sanitization is on
///
/// The sanitization decision uses the snapshot taken at request entry, so
/// a toggle racing this call cannot produce a half-escaped record.
pub async fn submit_input(
    content: &str,
    flags: &FlagSnapshot,
) -> Result<(), CoordinationError> {
    let stored = sanitize(content, flags.sanitization_enabled);
    tracing::debug!(
        "Storing input ({} chars, sanitization_enabled={})",
        stored.len(),
        flags.sanitization_enabled
    );
    InputStore::append(&stored).await?;
    Ok(())
}

/// List every stored input in submission order
pub async fn list_inputs() -> Result<Vec<InputRecord>, CoordinationError> {
    Ok(InputStore::list().await?)
}

/// Remove every stored input
pub async fn clear_inputs() -> Result<(), CoordinationError> {
    InputStore::clear().await?;
    tracing::debug!("Cleared all stored inputs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use serial_test::serial;

    fn snapshot(sanitization_enabled: bool) -> FlagSnapshot {
        FlagSnapshot {
            protection_enabled: false,
            admin_active: false,
            sanitization_enabled,
        }
    }

    /// Scenario: submit `<script>` with sanitization enabled, stored escaped
    #[tokio::test]
    #[serial]
    async fn test_submit_sanitized() {
        init_test_environment().await;
        clear_inputs().await.expect("clear should succeed");

        submit_input("<script>", &snapshot(true))
            .await
            .expect("submit should succeed");

        let records = list_inputs().await.expect("list should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "&lt;script&gt;");
    }

    /// Scenario: submit `<script>` with sanitization disabled, stored verbatim
    #[tokio::test]
    #[serial]
    async fn test_submit_unsanitized() {
        init_test_environment().await;
        clear_inputs().await.expect("clear should succeed");

        submit_input("<script>", &snapshot(false))
            .await
            .expect("submit should succeed");

        let records = list_inputs().await.expect("list should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "<script>");
    }

    /// Submissions are listed back in the order they arrived
    #[tokio::test]
    #[serial]
    async fn test_submissions_keep_order() {
        init_test_environment().await;
        clear_inputs().await.expect("clear should succeed");

        submit_input("one", &snapshot(true)).await.expect("submit should succeed");
        submit_input("two", &snapshot(false)).await.expect("submit should succeed");
        submit_input("<three>", &snapshot(true)).await.expect("submit should succeed");

        let records = list_inputs().await.expect("list should succeed");
        let contents: Vec<_> = records.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "&lt;three&gt;"]);
    }

    /// Clearing leaves an empty listing
    #[tokio::test]
    #[serial]
    async fn test_clear_then_list_is_empty() {
        init_test_environment().await;

        submit_input("anything", &snapshot(true))
            .await
            .expect("submit should succeed");
        clear_inputs().await.expect("clear should succeed");

        let records = list_inputs().await.expect("list should succeed");
        assert!(records.is_empty());
    }
}
