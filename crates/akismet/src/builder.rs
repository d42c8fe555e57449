// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Declarative comment definition
//!
//! [`CommentBuilder`] collects what the caller knows about a comment in
//! logical groups ([`Blog`], [`Post`], [`RequestInfo`], [`Author`]) plus a
//! few scalar fields, then flattens them into a [`ParameterSet`]. Every group
//! is optional and may be given in any order; giving a group again replaces
//! the earlier one entirely. Optional values that were never supplied are
//! left out of the parameter set rather than sent empty.
//!
//! # Examples
//!
//! ```rust
//! use akismet::{Author, Blog, CommentBuilder, Field, Post, RequestInfo};
//! use chrono::{FixedOffset, TimeZone};
//!
//! let edt = FixedOffset::west_opt(4 * 3600).unwrap();
//! let params = CommentBuilder::new()
//!     .blog(Blog::new("https://example.com").language("en"))
//!     .post(
//!         Post::new("https://example.com/posts/hello-world")
//!             .updated_at(edt.with_ymd_and_hms(2017, 9, 24, 12, 0, 0).unwrap()),
//!     )
//!     .request(RequestInfo::new().ip_address("24.29.18.175"))
//!     .author(Author::new().name("Jane Smith"))
//!     .content("Nice post!")
//!     .build();
//!
//! assert_eq!(params.len(), 7);
//! assert!(!params.contains(Field::BlogCharset));
//! ```

use chrono::{DateTime, TimeZone, Utc};
use shared_types::{CommentKind, UserRole};

use crate::params::{Field, ParameterSet, format_gmt};

/// The site the comment was posted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    url: String,
    language: Option<String>,
    charset: Option<String>,
}

impl Blog {
    /// Create a blog group from the site's front page URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            language: None,
            charset: None,
        }
    }

    /// Set the site language(s), e.g. `en` or `en, fr_ca`
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the site character encoding, e.g. `UTF-8`
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    fn write_into(&self, params: &mut ParameterSet) {
        params.insert(Field::Blog, self.url.as_str());
        params.insert_opt(Field::BlogLang, self.language.as_ref());
        params.insert_opt(Field::BlogCharset, self.charset.as_ref());
    }
}

/// The post or page the comment belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    url: String,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a post group from the post's permalink
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            updated_at: None,
        }
    }

    /// Set when the post was last modified, in any time zone
    pub fn updated_at<Tz: TimeZone>(mut self, updated_at: DateTime<Tz>) -> Self {
        self.updated_at = Some(updated_at.with_timezone(&Utc));
        self
    }

    fn write_into(&self, params: &mut ParameterSet) {
        params.insert(Field::Permalink, self.url.as_str());
        if let Some(updated_at) = &self.updated_at {
            params.insert(Field::CommentPostModifiedGmt, format_gmt(updated_at));
        }
    }
}

/// The HTTP request that submitted the comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    ip_address: Option<String>,
    user_agent: Option<String>,
    referrer: Option<String>,
}

impl RequestInfo {
    /// Create an empty request group
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the commenter's IP address
    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Set the commenter's browser user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the `Referer` header of the comment request
    pub fn referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    fn write_into(&self, params: &mut ParameterSet) {
        params.insert_opt(Field::UserIp, self.ip_address.as_ref());
        params.insert_opt(Field::UserAgent, self.user_agent.as_ref());
        params.insert_opt(Field::Referrer, self.referrer.as_ref());
    }
}

/// The person who wrote the comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    name: Option<String>,
    email_address: Option<String>,
    url: Option<String>,
    role: Option<UserRole>,
}

impl Author {
    /// Create an empty author group
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name the author gave
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email address the author gave
    pub fn email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    /// Set the URL the author gave
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the author's role on the site
    pub fn role(mut self, role: impl Into<UserRole>) -> Self {
        self.role = Some(role.into());
        self
    }

    fn write_into(&self, params: &mut ParameterSet) {
        params.insert_opt(Field::CommentAuthor, self.name.as_ref());
        params.insert_opt(Field::CommentAuthorEmail, self.email_address.as_ref());
        params.insert_opt(Field::CommentAuthorUrl, self.url.as_ref());
        if let Some(role) = &self.role {
            params.insert(Field::UserRole, role.clone());
        }
    }
}

/// Builder for the parameters describing a comment
#[derive(Debug, Clone, Default)]
pub struct CommentBuilder {
    blog: Option<Blog>,
    post: Option<Post>,
    request: Option<RequestInfo>,
    author: Option<Author>,
    kind: Option<CommentKind>,
    content: Option<String>,
    created_at: Option<DateTime<Utc>>,
    is_test: bool,
}

impl CommentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe the site (`blog`, `blog_lang`, `blog_charset`)
    pub fn blog(mut self, blog: Blog) -> Self {
        self.blog = Some(blog);
        self
    }

    /// Describe the post (`permalink`, `comment_post_modified_gmt`)
    pub fn post(mut self, post: Post) -> Self {
        self.post = Some(post);
        self
    }

    /// Describe the submitting request (`user_ip`, `user_agent`, `referrer`)
    pub fn request(mut self, request: RequestInfo) -> Self {
        self.request = Some(request);
        self
    }

    /// Describe the author (`comment_author*`, `user_role`)
    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Set `comment_type`
    pub fn kind(mut self, kind: impl Into<CommentKind>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set `comment_content`
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set `comment_date_gmt` from a timestamp in any time zone
    pub fn created_at<Tz: TimeZone>(mut self, created_at: DateTime<Tz>) -> Self {
        self.created_at = Some(created_at.with_timezone(&Utc));
        self
    }

    /// Mark the comment as a test so Akismet does not learn from it
    pub fn test(mut self) -> Self {
        self.is_test = true;
        self
    }

    /// Flatten the groups into a parameter set
    pub fn build(self) -> ParameterSet {
        let mut params = ParameterSet::default();

        if let Some(blog) = &self.blog {
            blog.write_into(&mut params);
        }
        if let Some(post) = &self.post {
            post.write_into(&mut params);
        }
        if let Some(request) = &self.request {
            request.write_into(&mut params);
        }
        if let Some(author) = &self.author {
            author.write_into(&mut params);
        }
        if let Some(kind) = self.kind {
            params.insert(Field::CommentType, kind.as_str());
        }
        if let Some(content) = self.content {
            params.insert(Field::CommentContent, content);
        }
        if let Some(created_at) = &self.created_at {
            params.insert(Field::CommentDateGmt, format_gmt(created_at));
        }
        if self.is_test {
            params.insert(Field::IsTest, true);
        }

        params
    }
}
