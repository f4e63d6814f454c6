use serde::{Deserialize, Serialize};

/// Server-side conversation context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_thread_ignores_unknown_fields() {
        let thread: Thread = serde_json::from_value(json!({
            "id": "thread_abc",
            "object": "thread",
            "created_at": 1_700_000_000,
            "metadata": {},
            "tool_resources": {}
        }))
        .unwrap();

        assert_eq!(thread.id, "thread_abc");
        assert_eq!(thread.created_at, Some(1_700_000_000));
    }
}
