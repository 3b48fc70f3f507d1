/// Data models for blog-service
///
/// A post is whatever the client submitted. The well-known fields are
/// typed; every other field travels through the `extra` map untouched.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// A blog post record.
///
/// Optional fields are skipped on serialization, so a record echoes back
/// exactly the fields it was submitted with. `id` is caller-supplied and
/// never checked for uniqueness; lookups match the first record in
/// collection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Comment list; present on seed records but never mutated (there is
    /// no comment endpoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Value>>,
    /// Unrecognized submitted fields, stored verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// A fully-populated post with an empty comment list, as used for the
    /// startup seed data.
    pub fn seed(id: i64, title: &str, content: &str) -> Self {
        Self {
            id: Some(id),
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            comments: Some(Vec::new()),
            extra: Map::new(),
        }
    }

    /// Shallow merge: every key in `patch` overwrites or extends this
    /// record; fields the patch does not mention survive unchanged.
    ///
    /// Fails with `BadRequest` if the patch puts a value of the wrong JSON
    /// type into one of the typed fields.
    pub fn merged(&self, patch: &Map<String, Value>) -> Result<Post> {
        let Value::Object(mut fields) = serde_json::to_value(self)? else {
            return Err(AppError::Internal(
                "post did not serialize to a JSON object".to_string(),
            ));
        };

        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }

        serde_json::from_value(Value::Object(fields))
            .map_err(|e| AppError::BadRequest(format!("merge produced an invalid post: {}", e)))
    }
}
