// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Comment check results
//!
//! The `comment-check` endpoint answers with a bare `true` (spam) or `false`
//! (ham) body. Anything else, including HTML error pages and empty bodies,
//! means the request was malformed or the service misbehaved, and is turned
//! into an [`AkismetError::UnexpectedResponse`] that quotes the body and any
//! debug hint the service attached.

use reqwest::{StatusCode, header::HeaderMap};
use tracing::warn;

use crate::error::{AkismetError, AkismetResult};

/// Header carrying Akismet's advisory tip
pub const PRO_TIP_HEADER: &str = "X-Akismet-Pro-Tip";

/// Header carrying a human-readable hint when a request is malformed
pub const DEBUG_HELP_HEADER: &str = "X-Akismet-Debug-Help";

/// Pro-tip value marking spam that can be dropped without review
pub const DISCARD_TIP: &str = "discard";

const MAX_BODY_EXCERPT_CHARS: usize = 200;

/// Status, headers and body of a single HTTP response
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl RawResponse {
    /// Create a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Read a `reqwest` response to completion
    pub(crate) async fn read(response: reqwest::Response) -> AkismetResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(AkismetError::from_transport)?;

        Ok(Self::new(status, headers, body))
    }

    /// HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Response body as text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Value of a header, if present and valid ASCII text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Outcome of a `comment-check` request
#[derive(Debug, Clone)]
pub struct CheckResult {
    response: RawResponse,
}

impl CheckResult {
    /// Wrap a raw `comment-check` response without validating it
    pub fn new(response: RawResponse) -> Self {
        Self { response }
    }

    /// Enforce the boolean-response protocol
    ///
    /// The status must be 2xx and the body exactly `true` or `false`.
    /// Returns the result unchanged when both hold.
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::UnexpectedResponse`] describing the first
    /// violated rule.
    pub fn validated(self) -> AkismetResult<Self> {
        self.require_successful_response()?;
        self.require_boolean_response_body()?;

        // Reported as-is; a tip on a ham verdict is not corrected here.
        if self.should_discard() && !self.is_spam() {
            warn!(
                header = PRO_TIP_HEADER,
                "Akismet sent a discard tip for a comment it did not classify as spam"
            );
        }

        Ok(self)
    }

    /// Whether Akismet classified the comment as spam
    pub fn is_spam(&self) -> bool {
        self.response.body() == "true"
    }

    /// Whether Akismet flagged the comment as blatant spam that can be discarded
    ///
    /// This reflects the `X-Akismet-Pro-Tip` header verbatim and is not
    /// cross-checked against [`is_spam`](Self::is_spam).
    pub fn should_discard(&self) -> bool {
        self.response.header(PRO_TIP_HEADER) == Some(DISCARD_TIP)
    }

    /// The debug hint Akismet attached, if any
    pub fn debug_help(&self) -> Option<&str> {
        self.response.header(DEBUG_HELP_HEADER)
    }

    /// The underlying response
    pub fn response(&self) -> &RawResponse {
        &self.response
    }

    fn require_successful_response(&self) -> AkismetResult<()> {
        let status = self.response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AkismetError::unexpected_response(format!(
                "Expected successful response, got {}",
                status.as_u16()
            )))
        }
    }

    fn require_boolean_response_body(&self) -> AkismetResult<()> {
        match self.response.body() {
            "true" | "false" => Ok(()),
            body => Err(self.unexpected_body(body)),
        }
    }

    fn unexpected_body(&self, body: &str) -> AkismetError {
        let excerpt = quote_excerpt(body);
        let message = format!("Expected boolean response body, got {excerpt}");
        match self.debug_help() {
            Some(help) => AkismetError::unexpected_response(format!("{message} ({help})")),
            None => AkismetError::unexpected_response(message),
        }
    }
}

/// Quote a body for an error message, truncating long bodies
fn quote_excerpt(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{:?}...", &body[..cut]),
        None => format!("{body:?}"),
    }
}
