// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Authenticated transport to the Akismet REST API
//!
//! [`Service`] owns the API key and the outbound identity, and turns a
//! [`ParameterSet`] into a form-encoded POST. Three endpoints are scoped to
//! the key, which is carried as a subdomain of the API host
//! (`https://{key}.rest.akismet.com/1.1/comment-check`). Key verification is
//! the exception: it targets the bare host and carries the key in the body.

use std::{fmt, time::Instant};

use reqwest::{
    Client,
    header::{HeaderValue, USER_AGENT},
};
use serde::Serialize;
use tracing::{Span, debug, info, instrument};
use url::Url;
use uuid::Uuid;

use crate::{
    api_key::ApiKey,
    config::AkismetConfig,
    error::{AkismetError, AkismetResult},
    params::ParameterSet,
    result::{CheckResult, RawResponse},
};

/// REST API version segment
pub const API_VERSION: &str = "1.1";

/// Body of a `verify-key` response for a valid key
const VALID_KEY_BODY: &str = "valid";

/// Akismet REST endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Classify a comment
    CommentCheck,
    /// Report a missed spam
    SubmitSpam,
    /// Report a false positive
    SubmitHam,
    /// Check a key against a site
    VerifyKey,
}

impl Endpoint {
    /// Path segment of the endpoint
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommentCheck => "comment-check",
            Self::SubmitSpam => "submit-spam",
            Self::SubmitHam => "submit-ham",
            Self::VerifyKey => "verify-key",
        }
    }

    /// Whether the endpoint is addressed through the key subdomain
    pub const fn is_key_scoped(self) -> bool {
        !matches!(self, Self::VerifyKey)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Akismet API service bound to one key and one user agent
///
/// Holds no per-request state; clones share the underlying connection pool
/// and the service can be used from many tasks at once.
#[derive(Clone)]
pub struct Service {
    client: Client,
    api_key: ApiKey,
    user_agent: HeaderValue,
    scoped_base: Url,
    unscoped_base: Url,
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("api_key", &self.api_key)
            .field("user_agent", &self.user_agent)
            .field("host", &self.unscoped_base.host_str())
            .finish_non_exhaustive()
    }
}

impl Service {
    /// Create a service with its own HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Configuration`] if the configuration is invalid,
    /// the key is blank or cannot be used as a host label, or the HTTP client
    /// cannot be built.
    pub fn new(config: &AkismetConfig) -> AkismetResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| AkismetError::config(format!("Failed to create HTTP client: {e}")))?;

        Self::with_client(config, client)
    }

    /// Create a service on top of a caller-supplied HTTP client
    ///
    /// The client's own timeouts apply; the configured user agent is still
    /// attached to every request.
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Configuration`] if the configuration is invalid,
    /// or the key is blank or cannot be used as a host label.
    pub fn with_client(config: &AkismetConfig, client: Client) -> AkismetResult<Self> {
        config.validate()?;
        let api_key = ApiKey::new(config.api_key.as_str())?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| AkismetError::config(format!("Invalid user agent: {e}")))?;

        let mut unscoped_base = config.base_url.clone();
        unscoped_base.set_path(&format!("/{API_VERSION}/"));
        unscoped_base.set_query(None);
        unscoped_base.set_fragment(None);

        let Some(host) = config.base_url.domain().map(str::to_owned) else {
            return Err(AkismetError::config("Base URL must name a domain"));
        };

        let mut scoped_base = unscoped_base.clone();
        scoped_base
            .set_host(Some(&format!("{}.{host}", api_key.expose())))
            .map_err(|e| {
                AkismetError::config(format!("API key cannot be used as a host name: {e}"))
            })?;

        info!(host = %host, "Created Akismet service");

        Ok(Self {
            client,
            api_key,
            user_agent,
            scoped_base,
            unscoped_base,
        })
    }

    /// Classify a comment as spam or ham
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Timeout`] on timeout,
    /// [`AkismetError::UnexpectedResponse`] if the response is not a 2xx with
    /// a boolean body, and [`AkismetError::Http`] for other transport failures.
    pub async fn check(&self, params: &ParameterSet) -> AkismetResult<CheckResult> {
        let response = self.post(Endpoint::CommentCheck, params).await?;
        CheckResult::new(response).validated()
    }

    /// Report a comment that should have been classified as spam
    ///
    /// The response body is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Timeout`] or [`AkismetError::Http`] on transport failure.
    pub async fn submit_spam(&self, params: &ParameterSet) -> AkismetResult<()> {
        self.post(Endpoint::SubmitSpam, params).await.map(drop)
    }

    /// Report a comment that should have been classified as ham
    ///
    /// The response body is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Timeout`] or [`AkismetError::Http`] on transport failure.
    pub async fn submit_ham(&self, params: &ParameterSet) -> AkismetResult<()> {
        self.post(Endpoint::SubmitHam, params).await.map(drop)
    }

    /// Check whether the key is valid for the given site
    ///
    /// Any body other than `valid` means the key is not valid; that is a
    /// normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Timeout`] or [`AkismetError::Http`] on transport failure.
    pub async fn verify_key_for(&self, blog: &str) -> AkismetResult<bool> {
        let body = [("key", self.api_key.expose()), ("blog", blog)];
        let response = self.post(Endpoint::VerifyKey, &body).await?;
        Ok(response.body() == VALID_KEY_BODY)
    }

    /// Full URL of an endpoint
    ///
    /// Contains the API key for scoped endpoints; do not log it.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Url {
        let mut url = if endpoint.is_key_scoped() {
            self.scoped_base.clone()
        } else {
            self.unscoped_base.clone()
        };
        url.set_path(&format!("/{API_VERSION}/{endpoint}"));
        url
    }

    /// Issue a single form-encoded POST
    #[instrument(skip(self, body), fields(endpoint = %endpoint, request_id))]
    async fn post<B>(&self, endpoint: Endpoint, body: &B) -> AkismetResult<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let request_id = Uuid::new_v4();
        Span::current().record("request_id", request_id.to_string());

        debug!(request_id = %request_id, "Sending Akismet request");

        let start_time = Instant::now();
        let response = self
            .client
            .post(self.endpoint_url(endpoint))
            .header(USER_AGENT, self.user_agent.clone())
            .form(body)
            .send()
            .await
            .map_err(AkismetError::from_transport)?;
        let response = RawResponse::read(response).await?;

        debug!(
            request_id = %request_id,
            status = response.status().as_u16(),
            duration_ms = start_time.elapsed().as_millis(),
            "Akismet request completed"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(key: &str) -> AkismetResult<Service> {
        Service::new(&AkismetConfig::new(key, "Akismet Tests"))
    }

    #[test]
    fn scoped_endpoints_embed_key_in_host() {
        let service = service("secret").unwrap();

        assert_eq!(
            service.endpoint_url(Endpoint::CommentCheck).as_str(),
            "https://secret.rest.akismet.com/1.1/comment-check"
        );
        assert_eq!(
            service.endpoint_url(Endpoint::SubmitSpam).as_str(),
            "https://secret.rest.akismet.com/1.1/submit-spam"
        );
        assert_eq!(
            service.endpoint_url(Endpoint::SubmitHam).as_str(),
            "https://secret.rest.akismet.com/1.1/submit-ham"
        );
    }

    #[test]
    fn verify_key_targets_bare_host() {
        let service = service("secret").unwrap();
        let url = service.endpoint_url(Endpoint::VerifyKey);

        assert_eq!(url.as_str(), "https://rest.akismet.com/1.1/verify-key");
        assert!(!url.as_str().contains("secret"));
    }

    #[test]
    fn custom_base_url_keeps_scheme_and_port() {
        let config = AkismetConfig::new("secret", "Akismet Tests")
            .with_base_url(Url::parse("http://akismet.internal:8080/ignored?x=1").unwrap());
        let service = Service::new(&config).unwrap();

        assert_eq!(
            service.endpoint_url(Endpoint::CommentCheck).as_str(),
            "http://secret.akismet.internal:8080/1.1/comment-check"
        );
        assert_eq!(
            service.endpoint_url(Endpoint::VerifyKey).as_str(),
            "http://akismet.internal:8080/1.1/verify-key"
        );
    }

    #[test]
    fn ip_literal_base_url_is_blamed_on_the_url() {
        let base_url = Url::parse("http://127.0.0.1:9").unwrap();
        let config = AkismetConfig::new("secret", "Akismet Tests").with_base_url(base_url);
        let error = Service::new(&config).unwrap_err();
        let message = error.to_string();

        assert!(error.is_configuration());
        assert!(message.contains("base URL host"), "{message}");
        assert!(!message.contains("API key"), "{message}");
    }

    #[test]
    fn caller_supplied_client_still_validates_configuration() {
        let ftp = AkismetConfig::new("secret", "Akismet Tests")
            .with_base_url(Url::parse("ftp://rest.akismet.com").unwrap());
        let error = Service::with_client(&ftp, Client::new()).unwrap_err();
        assert!(error.is_configuration());

        let zero_timeout = AkismetConfig::new("secret", "Akismet Tests").with_timeout(0);
        let error = Service::with_client(&zero_timeout, Client::new()).unwrap_err();
        assert!(error.is_configuration());
    }

    #[test]
    fn blank_keys_are_rejected() {
        for key in ["", "   ", "\t\n"] {
            let error = service(key).unwrap_err();
            assert!(error.is_configuration(), "{key:?} should be rejected");
        }
    }

    #[test]
    fn keys_unusable_as_host_labels_are_rejected() {
        let error = service("sec ret").unwrap_err();
        assert!(error.is_configuration());
        assert!(error.to_string().contains("host name"));
    }

    #[test]
    fn invalid_user_agent_is_rejected() {
        let blank = Service::new(&AkismetConfig::new("secret", " "));
        assert!(blank.unwrap_err().is_configuration());

        let control = Service::new(&AkismetConfig::new("secret", "agent\nwith newline"));
        assert!(control.unwrap_err().is_configuration());
    }

    #[test]
    fn debug_output_hides_key() {
        let service = service("supersecret123").unwrap();
        let debug = format!("{service:?}");

        assert!(!debug.contains("supersecret123"));
        assert!(debug.contains("rest.akismet.com"));
        assert!(debug.contains("Akismet Tests"));
    }

    #[test]
    fn endpoint_scoping() {
        assert!(Endpoint::CommentCheck.is_key_scoped());
        assert!(Endpoint::SubmitSpam.is_key_scoped());
        assert!(Endpoint::SubmitHam.is_key_scoped());
        assert!(!Endpoint::VerifyKey.is_key_scoped());
        assert_eq!(Endpoint::VerifyKey.to_string(), "verify-key");
    }

    #[test]
    fn service_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Service>();
    }
}
