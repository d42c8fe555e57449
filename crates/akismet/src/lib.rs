// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Akismet spam-classification API
//!
//! This crate describes user-generated content through a declarative builder,
//! asks Akismet for a spam/ham verdict, reports misclassifications back, and
//! verifies API keys.
//!
//! # Architecture
//!
//! - [`builder`]: groups of optional attributes flattened into a [`ParameterSet`]
//! - [`params`]: the API field vocabulary and tagged field values
//! - [`service`]: authenticated, form-encoded requests and endpoint addressing
//! - [`result`]: validation of `comment-check` responses
//! - [`comment`]: a parameter set bound to a service
//! - [`client`]: construction from configuration
//! - [`blocking`]: synchronous wrappers for callers without an async runtime
//! - [`config`]: configuration loading and validation
//! - [`error`]: error taxonomy
//!
//! # Features
//!
//! - **One request per call**: no retries, caching or rate limiting; failures
//!   are classified and returned immediately
//! - **Time normalization**: timestamps in any zone are sent as UTC with a `Z` suffix
//! - **Secret hygiene**: the API key never appears in `Debug` output or logs
//! - **Observability**: each request runs in a `tracing` span with a request ID
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use akismet::{AkismetConfig, Author, Blog, Client, RequestInfo};
//!
//! # async fn example() -> Result<(), akismet::AkismetError> {
//! let client = Client::new(&AkismetConfig::new("your-api-key", "MyBlog/1.0 | akismet-rs"))?;
//!
//! if !client.verify_key_for("https://example.com").await? {
//!     return Ok(());
//! }
//!
//! let comment = client.comment(|c| {
//!     c.blog(Blog::new("https://example.com").language("en"))
//!         .request(RequestInfo::new().ip_address("24.29.18.175"))
//!         .author(Author::new().name("Jane Smith").email_address("jane@example.com"))
//!         .kind("comment")
//!         .content("Nice post!")
//! });
//!
//! let result = comment.check().await?;
//! println!("spam: {}, discard: {}", result.is_spam(), result.should_discard());
//!
//! // Later, a moderator disagrees with the verdict
//! comment.update(!result.is_spam()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api_key;
pub mod blocking;
pub mod builder;
pub mod client;
pub mod comment;
pub mod config;
pub mod error;
pub mod params;
pub mod result;
pub mod service;

pub use api_key::ApiKey;
pub use builder::{Author, Blog, CommentBuilder, Post, RequestInfo};
pub use client::Client;
pub use comment::Comment;
pub use config::AkismetConfig;
pub use error::{AkismetError, AkismetResult, TimeoutStage};
pub use params::{Field, FieldValue, ParameterSet};
pub use result::{CheckResult, RawResponse};
pub use service::{Endpoint, Service};
pub use shared_types::{CommentKind, UserRole};
