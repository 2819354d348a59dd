//! Action-item request payload and validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments accepted by the `create_action_item` tool.
///
/// Lives for the duration of one request; nothing is persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItemRequest {
    pub title: String,
    pub status: String,
}

impl ActionItemRequest {
    /// Validate raw tool arguments into a request.
    ///
    /// Both fields must be present and string-typed. Unknown fields are
    /// ignored. Returns `None` on any shape mismatch.
    pub fn from_args(args: &Value) -> Option<Self> {
        let obj = args.as_object()?;
        let title = obj.get("title")?.as_str()?;
        let status = obj.get("status")?.as_str()?;
        Some(Self {
            title: title.to_string(),
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_args_accepts_both_strings() {
        let req = ActionItemRequest::from_args(&json!({
            "title": "Follow up with client",
            "status": "open"
        }))
        .unwrap();
        assert_eq!(req.title, "Follow up with client");
        assert_eq!(req.status, "open");
    }

    #[test]
    fn from_args_ignores_extra_fields() {
        let req = ActionItemRequest::from_args(&json!({
            "title": "T",
            "status": "open",
            "priority": 3
        }))
        .unwrap();
        assert_eq!(req.title, "T");
    }

    #[test]
    fn from_args_rejects_missing_title() {
        assert!(ActionItemRequest::from_args(&json!({"status": "open"})).is_none());
    }

    #[test]
    fn from_args_rejects_missing_status() {
        assert!(ActionItemRequest::from_args(&json!({"title": "T"})).is_none());
    }

    #[test]
    fn from_args_rejects_non_string_title() {
        assert!(ActionItemRequest::from_args(&json!({"title": 1, "status": "open"})).is_none());
    }

    #[test]
    fn from_args_rejects_non_string_status() {
        assert!(ActionItemRequest::from_args(&json!({"title": "T", "status": 2})).is_none());
    }

    #[test]
    fn from_args_rejects_non_object() {
        assert!(ActionItemRequest::from_args(&json!("just a string")).is_none());
        assert!(ActionItemRequest::from_args(&json!(null)).is_none());
        assert!(ActionItemRequest::from_args(&json!(["title", "status"])).is_none());
    }
}
