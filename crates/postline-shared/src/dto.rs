//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post. `title` is optional here so that a missing
/// title is reported by the service rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response to a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_response_uses_camel_case_keys() {
        let now = Utc::now();
        let value = serde_json::to_value(PostResponse {
            id: 1,
            title: "T".to_string(),
            body: String::new(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let req: CreatePostRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.title.is_none());
        assert!(req.body.is_none());

        let req: CreatePostRequest =
            serde_json::from_value(json!({ "title": "Post without body" })).unwrap();
        assert_eq!(req.title.as_deref(), Some("Post without body"));
        assert!(req.body.is_none());
    }
}
