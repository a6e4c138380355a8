//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! caller executes the actual HTTP round-trip.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePost, Post, UpdatePost};

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

/// Shape of a 422 body: `{"error": "...", "errors": {"field": ["msg"]}}`.
#[derive(Deserialize)]
struct ValidationBody {
    errors: BTreeMap<String, Vec<String>>,
}

impl PostsClient {
    /// `base_url` is the API namespace root, e.g. `http://localhost:3000/api/v1`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{}/posts", self.base_url), None)
    }

    pub fn build_get_post(&self, id: Uuid) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{}/posts/{id}", self.base_url), None)
    }

    pub fn build_create_post(&self, input: &CreatePost) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(self.request(HttpMethod::Post, format!("{}/posts", self.base_url), Some(body)))
    }

    pub fn build_update_post(&self, id: Uuid, input: &UpdatePost) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(self.request(
            HttpMethod::Patch,
            format!("{}/posts/{id}", self.base_url),
            Some(body),
        ))
    }

    pub fn build_delete_post(&self, id: Uuid) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("{}/posts/{id}", self.base_url), None)
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, 201)?;
        parse_body(&response)
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response)
    }

    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    // Every request advertises JSON both ways, bodies or not.
    fn request(&self, method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body,
        }
    }
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        422 => match serde_json::from_str::<ValidationBody>(&response.body) {
            Ok(body) => Err(ApiError::Validation(body.errors)),
            Err(_) => Err(http_error(response)),
        },
        _ => Err(http_error(response)),
    }
}

fn http_error(response: &HttpResponse) -> ApiError {
    ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PostsClient {
        PostsClient::new("http://localhost:3000/api/v1")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    const POST_JSON: &str = r#"{"id":"00000000-0000-0000-0000-000000000001","subject":"Test","content":"Body","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-02T00:00:00Z"}"#;

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = client().build_list_posts();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/api/v1/posts");
        assert!(req.body.is_none());
        assert!(req
            .headers
            .contains(&("accept".to_string(), "application/json".to_string())));
    }

    #[test]
    fn build_get_post_produces_correct_request() {
        let req = client().build_get_post(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "http://localhost:3000/api/v1/posts/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_post_produces_correct_request() {
        let input = CreatePost {
            subject: "Hello".to_string(),
            content: "World".to_string(),
        };
        let req = client().build_create_post(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/api/v1/posts");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["subject"], "Hello");
        assert_eq!(body["content"], "World");
    }

    #[test]
    fn build_update_post_omits_absent_fields() {
        let input = UpdatePost {
            subject: Some("Updated".to_string()),
            content: None,
        };
        let req = client().build_update_post(Uuid::nil(), &input).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["subject"], "Updated");
        assert!(body.get("content").is_none());
    }

    #[test]
    fn build_delete_post_produces_correct_request() {
        let req = client().build_delete_post(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PostsClient::new("http://localhost:3000/api/v1/");
        assert_eq!(client.build_list_posts().url, "http://localhost:3000/api/v1/posts");
    }

    #[test]
    fn parse_list_posts_success() {
        let posts = client()
            .parse_list_posts(response(200, &format!("[{POST_JSON}]")))
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].subject, "Test");
    }

    #[test]
    fn parse_list_posts_empty() {
        let posts = client().parse_list_posts(response(200, "[]")).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_list_posts_rejects_object() {
        let err = client().parse_list_posts(response(200, POST_JSON)).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_get_post_not_found() {
        let err = client().parse_get_post(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_post_success() {
        let post = client().parse_create_post(response(201, POST_JSON)).unwrap();
        assert_eq!(post.content, "Body");
    }

    #[test]
    fn parse_create_post_validation_failure() {
        let body = r#"{"error":"validation failed","errors":{"subject":["can't be blank"]}}"#;
        let err = client().parse_create_post(response(422, body)).unwrap_err();
        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields["subject"], vec!["can't be blank".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_create_post_unstructured_422() {
        let err = client()
            .parse_create_post(response(422, "Failed to deserialize"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 422, .. }));
    }

    #[test]
    fn parse_create_post_wrong_status() {
        let err = client()
            .parse_create_post(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_post_success() {
        let post = client().parse_update_post(response(200, POST_JSON)).unwrap();
        assert!(post.updated_at > post.created_at);
    }

    #[test]
    fn parse_delete_post_success() {
        assert!(client().parse_delete_post(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_post_not_found() {
        let err = client().parse_delete_post(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
