// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Synchronous API
//!
//! Mirrors [`crate::Client`] and [`crate::Comment`] for callers without an
//! async runtime. Each client owns a current-thread tokio runtime and every
//! call blocks on exactly one request. These types must not be used from
//! inside an async runtime.
//!
//! ```rust,no_run
//! use akismet::{AkismetConfig, blocking::Client};
//!
//! # fn example() -> Result<(), akismet::AkismetError> {
//! let client = Client::new(&AkismetConfig::new("your-api-key", "MyBlog/1.0"))?;
//! let comment = client.comment(|c| c.content("Nice post!"));
//!
//! if comment.check()?.is_spam() {
//!     comment.update(false)?;
//! }
//! # Ok(())
//! # }
//! ```

use tokio::runtime::{Builder, Runtime};

use crate::{
    builder::CommentBuilder,
    config::AkismetConfig,
    error::{AkismetError, AkismetResult},
    params::ParameterSet,
    result::CheckResult,
    service::Service,
};

/// Blocking Akismet client
#[derive(Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Configuration`] if the configuration is invalid,
    /// or [`AkismetError::Internal`] if the runtime cannot be started.
    pub fn new(config: &AkismetConfig) -> AkismetResult<Self> {
        Self::build(|| crate::Client::new(config))
    }

    /// Create a client from the optional config file and `AKISMET_*` variables
    ///
    /// # Errors
    ///
    /// See [`crate::Client::from_env`].
    pub fn from_env() -> AkismetResult<Self> {
        Self::build(crate::Client::from_env)
    }

    /// Create a client that issues requests through the given HTTP client
    ///
    /// # Errors
    ///
    /// See [`crate::Client::with_http_client`].
    pub fn with_http_client(config: &AkismetConfig, http: reqwest::Client) -> AkismetResult<Self> {
        Self::build(|| crate::Client::with_http_client(config, http))
    }

    fn build(make: impl FnOnce() -> AkismetResult<crate::Client>) -> AkismetResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AkismetError::internal(format!("Failed to start runtime: {e}")))?;

        let inner = {
            let _guard = runtime.enter();
            make()?
        };

        Ok(Self { inner, runtime })
    }

    /// The underlying service
    pub fn service(&self) -> &Service {
        self.inner.service()
    }

    /// Define a comment
    pub fn comment(&self, define: impl FnOnce(CommentBuilder) -> CommentBuilder) -> Comment<'_> {
        Comment {
            inner: self.inner.comment(define),
            runtime: &self.runtime,
        }
    }

    /// Check whether the configured key is valid for the given site
    ///
    /// # Errors
    ///
    /// See [`Service::verify_key_for`].
    pub fn verify_key_for(&self, blog: &str) -> AkismetResult<bool> {
        self.runtime.block_on(self.inner.verify_key_for(blog))
    }
}

/// Blocking counterpart of [`crate::Comment`]
#[derive(Debug)]
pub struct Comment<'a> {
    inner: crate::Comment<'a>,
    runtime: &'a Runtime,
}

impl Comment<'_> {
    /// The parameters sent with every request for this comment
    pub fn parameters(&self) -> &ParameterSet {
        self.inner.parameters()
    }

    /// Ask Akismet whether the comment is spam
    ///
    /// # Errors
    ///
    /// See [`Service::check`].
    pub fn check(&self) -> AkismetResult<CheckResult> {
        self.runtime.block_on(self.inner.check())
    }

    /// Tell Akismet the comment should have been marked spam
    ///
    /// # Errors
    ///
    /// See [`Service::submit_spam`].
    pub fn submit_spam(&self) -> AkismetResult<()> {
        self.runtime.block_on(self.inner.submit_spam())
    }

    /// Tell Akismet the comment should have been marked ham
    ///
    /// # Errors
    ///
    /// See [`Service::submit_ham`].
    pub fn submit_ham(&self) -> AkismetResult<()> {
        self.runtime.block_on(self.inner.submit_ham())
    }

    /// Report as spam if `is_spam`, otherwise as ham
    ///
    /// # Errors
    ///
    /// See [`Service::submit_spam`].
    pub fn update(&self, is_spam: bool) -> AkismetResult<()> {
        self.runtime.block_on(self.inner.update(is_spam))
    }
}
