// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Validated Akismet API key
//!
//! [`ApiKey`] makes a blank credential unrepresentable: once constructed it is
//! guaranteed to contain at least one non-whitespace character. The key is a
//! secret, so its `Debug` output is redacted and it has no `Display` impl;
//! [`ApiKey::expose`] is the only way to read it back.

use core::fmt;
use std::str::FromStr;

use crate::error::{AkismetError, AkismetResult};

/// A non-blank Akismet API key
///
/// # Examples
///
/// ```rust
/// use akismet::ApiKey;
///
/// let key = ApiKey::new("abc123def456").unwrap();
/// assert_eq!(key.expose(), "abc123def456");
///
/// assert!(ApiKey::new("").is_err());
/// assert!(ApiKey::new("  \t\n ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Box<str>);

impl ApiKey {
    /// Create a new `ApiKey`, rejecting empty and whitespace-only strings
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Configuration`] when the key is blank.
    pub fn new(key: impl Into<String>) -> AkismetResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AkismetError::config(format!(
                "Expected Akismet API key, got {key:?}"
            )));
        }
        Ok(Self(key.into_boxed_str()))
    }

    /// Get the raw key for use in a request
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl FromStr for ApiKey {
    type Err = AkismetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
