//! Async executor over `reqwest`.
//!
//! `PostsFetcher` pairs a `PostsClient` with a `reqwest::Client` and performs
//! exactly one outbound request per call. Nothing is cached, retried, or
//! timed out; a transport failure or an unparsable body is returned to the
//! caller as-is.

use reqwest::Method;
use tracing::debug;
use uuid::Uuid;

use crate::client::PostsClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePost, Post, UpdatePost};

#[derive(Debug, Clone)]
pub struct PostsFetcher {
    client: PostsClient,
    http: reqwest::Client,
}

impl PostsFetcher {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: &ClientConfig, http: reqwest::Client) -> Self {
        Self {
            client: PostsClient::new(&config.base_url),
            http,
        }
    }

    pub fn client(&self) -> &PostsClient {
        &self.client
    }

    /// The full collection, in the order the server lists it.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.execute(self.client.build_list_posts()).await?;
        self.client.parse_list_posts(response)
    }

    pub async fn fetch_post(&self, id: Uuid) -> Result<Post, ApiError> {
        let response = self.execute(self.client.build_get_post(id)).await?;
        self.client.parse_get_post(response)
    }

    pub async fn create_post(&self, input: &CreatePost) -> Result<Post, ApiError> {
        let response = self.execute(self.client.build_create_post(input)?).await?;
        self.client.parse_create_post(response)
    }

    pub async fn update_post(&self, id: Uuid, input: &UpdatePost) -> Result<Post, ApiError> {
        let response = self.execute(self.client.build_update_post(id, input)?).await?;
        self.client.parse_update_post(response)
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self.execute(self.client.build_delete_post(id)).await?;
        self.client.parse_delete_post(response)
    }

    /// Perform one round-trip. Non-2xx statuses come back as data; only
    /// transport failures are errors here.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut builder = self.http.request(method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}
