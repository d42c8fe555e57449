// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Comment parameters sent to the API
//!
//! A [`ParameterSet`] maps a fixed vocabulary of API field names ([`Field`])
//! to tagged values ([`FieldValue`]). Only fields that were explicitly set are
//! present, and iteration (and therefore the form-encoded body) follows the
//! declaration order of [`Field`].

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Serialize, Serializer};
use shared_types::UserRole;

/// API field names understood by the comment endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// `blog`: front page of the site
    Blog,
    /// `blog_lang`: site language(s)
    BlogLang,
    /// `blog_charset`: site character encoding
    BlogCharset,
    /// `permalink`: URL of the post being commented on
    Permalink,
    /// `comment_post_modified_gmt`: last modification time of the post
    CommentPostModifiedGmt,
    /// `user_ip`: IP address of the commenter
    UserIp,
    /// `user_agent`: browser user agent of the commenter
    UserAgent,
    /// `referrer`: HTTP referrer of the comment request
    Referrer,
    /// `comment_author`: name given by the commenter
    CommentAuthor,
    /// `comment_author_email`: email given by the commenter
    CommentAuthorEmail,
    /// `comment_author_url`: URL given by the commenter
    CommentAuthorUrl,
    /// `user_role`: site role of the commenter
    UserRole,
    /// `comment_type`: kind of content
    CommentType,
    /// `comment_content`: the content itself
    CommentContent,
    /// `comment_date_gmt`: creation time of the content
    CommentDateGmt,
    /// `is_test`: marks the request as a test
    IsTest,
}

impl Field {
    /// Returns the field name used on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::BlogLang => "blog_lang",
            Self::BlogCharset => "blog_charset",
            Self::Permalink => "permalink",
            Self::CommentPostModifiedGmt => "comment_post_modified_gmt",
            Self::UserIp => "user_ip",
            Self::UserAgent => "user_agent",
            Self::Referrer => "referrer",
            Self::CommentAuthor => "comment_author",
            Self::CommentAuthorEmail => "comment_author_email",
            Self::CommentAuthorUrl => "comment_author_url",
            Self::UserRole => "user_role",
            Self::CommentType => "comment_type",
            Self::CommentContent => "comment_content",
            Self::CommentDateGmt => "comment_date_gmt",
            Self::IsTest => "is_test",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text, sent verbatim
    Text(String),
    /// Boolean flag, sent as `true` or `false`
    Flag(bool),
    /// Symbolic role token
    Role(UserRole),
}

impl FieldValue {
    /// Returns the text if this is a [`FieldValue::Text`]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Flag(flag) => serializer.serialize_bool(*flag),
            Self::Role(role) => role.serialize(serializer),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<UserRole> for FieldValue {
    fn from(role: UserRole) -> Self {
        Self::Role(role)
    }
}

/// Immutable set of comment parameters
///
/// Produced by [`CommentBuilder::build`](crate::CommentBuilder::build). It has
/// no public mutators; serializing it yields the form body of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<Field, FieldValue>);

impl ParameterSet {
    /// Get the value of a field, if set
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.0.get(&field)
    }

    /// Check whether a field is set
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of fields set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no field is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in wire order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.0.iter().map(|(field, value)| (*field, value))
    }

    pub(crate) fn insert(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.0.insert(field, value.into());
    }

    pub(crate) fn insert_opt(&mut self, field: Field, value: Option<&String>) {
        if let Some(value) = value {
            self.insert(field, value.as_str());
        }
    }
}

impl<V: Into<FieldValue>> FromIterator<(Field, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (Field, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field, value.into()))
                .collect(),
        )
    }
}

impl Serialize for ParameterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(field, value)| (field.as_str(), value)))
    }
}

/// Format a timestamp the way the API expects: UTC, whole seconds, `Z` suffix
pub fn format_gmt<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    time.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
