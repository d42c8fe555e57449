// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Author role vocabulary
//!
//! Akismet accepts a `user_role` describing the site role of the person who
//! wrote a comment. The value travels as a symbolic token rather than free
//! text; `administrator` is the only role Akismet gives special meaning
//! (comments from administrators are never classified as spam).

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Site role of a comment author, sent as `user_role`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Site administrator
    Administrator,
    /// Any other role token defined by the host application
    Other(String),
}

impl UserRole {
    /// Token used for administrators
    pub const ADMINISTRATOR: &'static str = "administrator";

    /// Returns the token sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => Self::ADMINISTRATOR,
            Self::Other(token) => token,
        }
    }

    /// Check if the role is the administrator role
    pub fn is_administrator(&self) -> bool {
        matches!(self, Self::Administrator)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for UserRole {
    fn from(token: &str) -> Self {
        if token == Self::ADMINISTRATOR {
            Self::Administrator
        } else {
            Self::Other(token.to_string())
        }
    }
}

impl From<String> for UserRole {
    fn from(token: String) -> Self {
        if token == Self::ADMINISTRATOR {
            Self::Administrator
        } else {
            Self::Other(token)
        }
    }
}

impl FromStr for UserRole {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}
