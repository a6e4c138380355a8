//! Post entity and the write payloads accepted by the API.
//!
//! Both `subject` and `content` must be present and non-blank on every write.
//! A field that is missing from a create payload, or explicitly `null` in any
//! write, deserializes to an empty string so that it is reported as a
//! validation failure rather than a parse failure.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub subject: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a fresh post with a new id and both timestamps set to now.
    pub fn new(input: CreatePost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject: input.subject,
            content: input.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `input` and refresh `updated_at`.
    pub fn apply(&mut self, input: UpdatePost) {
        if let Some(subject) = input.subject {
            self.subject = subject;
        }
        if let Some(content) = input.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePost {
    #[serde(default, deserialize_with = "null_as_blank")]
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_blank")]
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

/// Used for both PATCH and PUT. Omitted fields are left as they are, but a
/// field that is present must still be non-blank, and `null` counts as blank.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePost {
    #[serde(default, deserialize_with = "present_null_as_blank")]
    #[validate(custom(function = "not_blank"))]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "present_null_as_blank")]
    #[validate(custom(function = "not_blank"))]
    pub content: Option<String>,
}

fn null_as_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Only called for keys that are present; absent keys fall back to `None`.
fn present_null_as_blank<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    null_as_blank(deserializer).map(Some)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("can't be blank")));
    }
    Ok(())
}
