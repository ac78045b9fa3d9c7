use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored piece of submitted content
///
/// Created by a submit operation after the sanitization gate has run,
/// never mutated afterwards, destroyed only by a bulk clear. The store
/// lists records in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct InputRecord {
    /// The content exactly as it was stored (sanitized or raw)
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_content_only() {
        let record = InputRecord {
            content: "&lt;script&gt;".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"content":"&lt;script&gt;"}"#
        );
    }
}
