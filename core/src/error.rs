//! Error types for the posts API client.
//!
//! `NotFound` and `Validation` get dedicated variants because callers act on
//! them directly. Any other unexpected status lands in `Http` with the raw
//! status code and body. Transport failures keep the underlying
//! `reqwest::Error` as their source.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422; maps each failing field to its messages.
    #[error("validation failed: {}", describe_fields(.0))]
    Validation(BTreeMap<String, Vec<String>>),

    /// The server returned a status other than the expected one, 404 or 422.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

fn describe_fields(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{field} {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
