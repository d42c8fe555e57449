// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point for applications
//!
//! [`Client`] builds a [`Service`] from configuration and hands out
//! [`Comment`]s defined through a [`CommentBuilder`] closure.
//!
//! ```rust,no_run
//! use akismet::{AkismetConfig, Author, Client};
//!
//! # async fn example() -> Result<(), akismet::AkismetError> {
//! let client = Client::new(&AkismetConfig::new("your-api-key", "MyBlog/1.0"))?;
//!
//! let comment = client.comment(|c| {
//!     c.author(Author::new().name("Jane Smith"))
//!         .content("Nice post!")
//! });
//!
//! let result = comment.check().await?;
//! if result.should_discard() {
//!     // drop it silently
//! } else if result.is_spam() {
//!     // queue for review
//! }
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use crate::{
    builder::CommentBuilder, comment::Comment, config::AkismetConfig, error::AkismetResult,
    service::Service,
};

/// Akismet client
#[derive(Debug, Clone)]
pub struct Client {
    service: Service,
}

impl Client {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Configuration`](crate::AkismetError::Configuration)
    /// if the configuration is invalid.
    pub fn new(config: &AkismetConfig) -> AkismetResult<Self> {
        Service::new(config).map(Self::from_service)
    }

    /// Create a client from the optional config file and `AKISMET_*` variables
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Configuration`](crate::AkismetError::Configuration)
    /// if loading fails or the loaded configuration is invalid.
    pub fn from_env() -> AkismetResult<Self> {
        let config = AkismetConfig::from_env()?;
        debug!(?config, "Loaded Akismet configuration");
        Self::new(&config)
    }

    /// Create a client that issues requests through the given HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Configuration`](crate::AkismetError::Configuration)
    /// if the key, user agent or base URL is invalid.
    pub fn with_http_client(config: &AkismetConfig, http: reqwest::Client) -> AkismetResult<Self> {
        Service::with_client(config, http).map(Self::from_service)
    }

    /// Wrap an existing service
    pub fn from_service(service: Service) -> Self {
        Self { service }
    }

    /// The underlying service
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Define a comment
    pub fn comment(&self, define: impl FnOnce(CommentBuilder) -> CommentBuilder) -> Comment<'_> {
        Comment::define(&self.service, define)
    }

    /// Check whether the configured key is valid for the given site
    ///
    /// # Errors
    ///
    /// See [`Service::verify_key_for`].
    pub async fn verify_key_for(&self, blog: &str) -> AkismetResult<bool> {
        self.service.verify_key_for(blog).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Field, FieldValue};

    fn client() -> Client {
        Client::new(&AkismetConfig::new("secret", "Akismet Tests")).unwrap()
    }

    #[test]
    fn comment_runs_builder_closure() {
        let client = client();
        let comment = client.comment(|c| c.content("Hello, world!"));

        assert_eq!(comment.parameters().len(), 1);
        assert_eq!(
            comment.parameters().get(Field::CommentContent),
            Some(&FieldValue::from("Hello, world!"))
        );
    }

    #[test]
    fn comments_share_one_service() {
        let client = client();
        let first = client.comment(|c| c.content("one"));
        let second = client.comment(|c| c.content("two").test());

        assert_eq!(first.parameters().len(), 1);
        assert_eq!(second.parameters().len(), 2);
    }

    #[test]
    fn injected_http_client_does_not_skip_validation() {
        let config = AkismetConfig::new("secret", "Akismet Tests").with_connect_timeout(0);
        let error = Client::with_http_client(&config, reqwest::Client::new()).unwrap_err();
        assert!(error.is_configuration());
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let error = Client::new(&AkismetConfig::new("  ", "Akismet Tests")).unwrap_err();
        assert!(error.is_configuration());
    }
}
