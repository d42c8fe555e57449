// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for Akismet operations
//!
//! Failures fall into a small taxonomy: configuration problems detected before
//! any request is made, timeouts, responses that break the API contract, and
//! every other transport failure, which is passed through unclassified.

use std::fmt;

use thiserror::Error;

/// Result type alias for Akismet operations
pub type AkismetResult<T> = Result<T, AkismetError>;

/// Phase of a request in which a timeout occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutStage {
    /// The connection to Akismet could not be opened in time
    Connect,
    /// The response (headers or body) did not arrive in time
    Read,
}

impl fmt::Display for TimeoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => f.write_str("opening connection to"),
            Self::Read => f.write_str("reading response from"),
        }
    }
}

/// Errors returned by the Akismet client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AkismetError {
    /// Missing or malformed configuration (API key, user agent, base URL)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Connection or read timeout
    #[error("Timed out {stage} Akismet")]
    Timeout { stage: TimeoutStage },

    /// Error status code, or a body outside the expected protocol
    #[error("{message}")]
    UnexpectedResponse { message: String },

    /// Any other transport failure (DNS, TLS, connection reset, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AkismetError {
    /// Create a configuration error
    pub fn config<T: ToString>(message: T) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    /// Create a timeout error
    pub fn timeout(stage: TimeoutStage) -> Self {
        Self::Timeout { stage }
    }

    /// Create an unexpected response error
    pub fn unexpected_response<T: ToString>(message: T) -> Self {
        Self::UnexpectedResponse {
            message: message.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal<T: ToString>(message: T) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Classify a transport failure reported by `reqwest`
    ///
    /// Connect and read timeouts become [`AkismetError::Timeout`]; anything
    /// else is kept as [`AkismetError::Http`].
    pub fn from_transport(error: reqwest::Error) -> Self {
        if !error.is_timeout() {
            return Self::Http(error);
        }

        if error.is_connect() {
            Self::timeout(TimeoutStage::Connect)
        } else {
            Self::timeout(TimeoutStage::Read)
        }
    }

    /// Check if this error is a timeout, whichever stage it occurred in
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Check if this error is an unexpected response
    pub fn is_unexpected_response(&self) -> bool {
        matches!(self, Self::UnexpectedResponse { .. })
    }
}
