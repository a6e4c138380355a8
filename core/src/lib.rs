//! Client for the posts API.
//!
//! # Overview
//! `PostsClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `PostsFetcher` is the
//! async host: it runs each request over `reqwest` and hands the response back
//! to the client for parsing.
//!
//! # Design
//! - The base URL is passed in explicitly through `ClientConfig`.
//! - Each operation is a `build_*`/`parse_*` pair, so the I/O boundary is
//!   explicit and the parsing logic is testable without a server.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod types;

pub use client::PostsClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use fetch::PostsFetcher;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreatePost, Post, UpdatePost};
