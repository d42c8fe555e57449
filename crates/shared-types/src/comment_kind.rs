// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Comment type vocabulary

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of content being classified, sent as `comment_type`
///
/// The documented Akismet values have dedicated variants. Anything else is
/// passed through unchanged, since the API accepts arbitrary strings here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// A blog comment
    Comment,
    /// A top-level forum post
    ForumPost,
    /// A reply to a forum post or comment
    Reply,
    /// A blog post
    BlogPost,
    /// A contact form submission
    ContactForm,
    /// A new user account
    Signup,
    /// A message sent between users
    Message,
    /// A trackback
    Trackback,
    /// A pingback
    Pingback,
    /// Any value not covered above
    Other(String),
}

impl CommentKind {
    /// Returns the literal value sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::Comment => "comment",
            Self::ForumPost => "forum-post",
            Self::Reply => "reply",
            Self::BlogPost => "blog-post",
            Self::ContactForm => "contact-form",
            Self::Signup => "signup",
            Self::Message => "message",
            Self::Trackback => "trackback",
            Self::Pingback => "pingback",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CommentKind {
    fn from(value: &str) -> Self {
        match value {
            "comment" => Self::Comment,
            "forum-post" => Self::ForumPost,
            "reply" => Self::Reply,
            "blog-post" => Self::BlogPost,
            "contact-form" => Self::ContactForm,
            "signup" => Self::Signup,
            "message" => Self::Message,
            "trackback" => Self::Trackback,
            "pingback" => Self::Pingback,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for CommentKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for CommentKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for CommentKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CommentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}
