// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Comment definition tests
//!
//! Each group of the builder must produce exactly the fields it was given,
//! with timestamps normalized to UTC.

use akismet::{
    AkismetConfig, Author, Blog, Client, Field, FieldValue, ParameterSet, Post, RequestInfo,
    UserRole,
};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::America::New_York;

const PERMALINK: &str = "https://example.com/posts/hello-world";

fn client() -> Client {
    Client::new(&AkismetConfig::new("secret", "Akismet Tests")).unwrap()
}

/// 2017-09-24 12:00:00 EDT
fn edt_noon() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(4 * 3600)
        .unwrap()
        .with_ymd_and_hms(2017, 9, 24, 12, 0, 0)
        .unwrap()
}

fn params<const N: usize>(fields: [(Field, FieldValue); N]) -> ParameterSet {
    fields.into_iter().collect()
}

fn text(value: &str) -> FieldValue {
    FieldValue::from(value)
}

#[test]
fn define_blog() {
    let client = client();
    let blog = Blog::new("https://example.com")
        .language("en")
        .charset("UTF-8");
    let comment = client.comment(|c| c.blog(blog));

    assert_eq!(
        comment.parameters(),
        &params([
            (Field::Blog, text("https://example.com")),
            (Field::BlogLang, text("en")),
            (Field::BlogCharset, text("UTF-8")),
        ])
    );
}

#[test]
fn define_blog_without_optional_fields() {
    let client = client();
    let comment = client.comment(|c| c.blog(Blog::new("https://example.com")));

    assert_eq!(
        comment.parameters(),
        &params([(Field::Blog, text("https://example.com"))])
    );
}

#[test]
fn define_post_with_timestamp() {
    let client = client();
    let comment = client.comment(|c| c.post(Post::new(PERMALINK).updated_at(edt_noon())));

    assert_eq!(
        comment.parameters(),
        &params([
            (Field::Permalink, text(PERMALINK)),
            (Field::CommentPostModifiedGmt, text("2017-09-24T16:00:00Z")),
        ])
    );
}

#[test]
fn define_post_without_timestamp() {
    let client = client();
    let comment = client.comment(|c| c.post(Post::new(PERMALINK)));

    assert_eq!(
        comment.parameters(),
        &params([(Field::Permalink, text(PERMALINK))])
    );
}

#[test]
fn define_request() {
    let client = client();
    let comment = client.comment(|c| {
        c.request(
            RequestInfo::new()
                .ip_address("24.29.18.175")
                .user_agent("Google Chrome")
                .referrer("https://example.com"),
        )
    });

    assert_eq!(
        comment.parameters(),
        &params([
            (Field::UserIp, text("24.29.18.175")),
            (Field::UserAgent, text("Google Chrome")),
            (Field::Referrer, text("https://example.com")),
        ])
    );
}

#[test]
fn define_partial_request() {
    let client = client();
    let comment = client.comment(|c| c.request(RequestInfo::new().ip_address("24.29.18.175")));

    assert_eq!(
        comment.parameters(),
        &params([(Field::UserIp, text("24.29.18.175"))])
    );
}

#[test]
fn define_author_without_role() {
    let client = client();
    let comment = client.comment(|c| {
        c.author(
            Author::new()
                .name("Jane Smith")
                .email_address("jane@example.com")
                .url("https://example.com"),
        )
    });

    assert_eq!(
        comment.parameters(),
        &params([
            (Field::CommentAuthor, text("Jane Smith")),
            (Field::CommentAuthorEmail, text("jane@example.com")),
            (Field::CommentAuthorUrl, text("https://example.com")),
        ])
    );
}

#[test]
fn define_author_with_role() {
    let client = client();
    let comment = client.comment(|c| {
        c.author(
            Author::new()
                .name("Jane Smith")
                .email_address("jane@example.com")
                .url("https://example.com")
                .role(UserRole::Administrator),
        )
    });

    assert_eq!(
        comment.parameters(),
        &params([
            (Field::CommentAuthor, text("Jane Smith")),
            (Field::CommentAuthorEmail, text("jane@example.com")),
            (Field::CommentAuthorUrl, text("https://example.com")),
            (Field::UserRole, FieldValue::Role(UserRole::Administrator)),
        ])
    );
}

#[test]
fn define_type() {
    let client = client();
    let comment = client.comment(|c| c.kind("comment"));
    assert_eq!(
        comment.parameters(),
        &params([(Field::CommentType, text("comment"))])
    );
}

#[test]
fn define_content() {
    let client = client();
    let comment = client.comment(|c| c.content("Nice post!"));
    assert_eq!(
        comment.parameters(),
        &params([(Field::CommentContent, text("Nice post!"))])
    );
}

#[test]
fn define_creation_time() {
    let client = client();
    let comment = client.comment(|c| c.created_at(edt_noon()));
    assert_eq!(
        comment.parameters(),
        &params([(Field::CommentDateGmt, text("2017-09-24T16:00:00Z"))])
    );
}

#[test]
fn define_creation_time_in_named_zone() {
    let client = client();
    let created_at = New_York.with_ymd_and_hms(2017, 9, 24, 12, 0, 0).unwrap();
    let comment = client.comment(|c| c.created_at(created_at));
    assert_eq!(
        comment.parameters(),
        &params([(Field::CommentDateGmt, text("2017-09-24T16:00:00Z"))])
    );
}

#[test]
fn define_creation_time_in_utc() {
    let client = client();
    let created_at: DateTime<Utc> = "2017-09-24T16:00:00.750Z".parse().unwrap();
    let comment = client.comment(|c| c.created_at(created_at));
    assert_eq!(
        comment.parameters(),
        &params([(Field::CommentDateGmt, text("2017-09-24T16:00:00Z"))])
    );
}

#[test]
fn define_test() {
    let client = client();
    let comment = client.comment(|c| c.test());
    assert_eq!(
        comment.parameters(),
        &params([(Field::IsTest, FieldValue::Flag(true))])
    );
}

#[test]
fn define_nothing() {
    let client = client();
    let comment = client.comment(|c| c);
    assert!(comment.parameters().is_empty());
}

#[test]
fn define_everything() {
    let client = client();
    let blog = Blog::new("https://example.com")
        .language("en")
        .charset("UTF-8");
    let comment = client.comment(|c| {
        c.blog(blog)
            .post(Post::new(PERMALINK).updated_at(edt_noon()))
            .request(
                RequestInfo::new()
                    .ip_address("24.29.18.175")
                    .user_agent("Google Chrome")
                    .referrer("https://example.com"),
            )
            .author(
                Author::new()
                    .name("Jane Smith")
                    .email_address("jane@example.com")
                    .url("https://example.com")
                    .role(UserRole::Administrator),
            )
            .kind("comment")
            .content("Nice post!")
            .created_at(edt_noon())
            .test()
    });

    assert_eq!(
        comment.parameters(),
        &params([
            (Field::Blog, text("https://example.com")),
            (Field::BlogLang, text("en")),
            (Field::BlogCharset, text("UTF-8")),
            (Field::Permalink, text(PERMALINK)),
            (Field::CommentPostModifiedGmt, text("2017-09-24T16:00:00Z")),
            (Field::UserIp, text("24.29.18.175")),
            (Field::UserAgent, text("Google Chrome")),
            (Field::Referrer, text("https://example.com")),
            (Field::CommentAuthor, text("Jane Smith")),
            (Field::CommentAuthorEmail, text("jane@example.com")),
            (Field::CommentAuthorUrl, text("https://example.com")),
            (Field::UserRole, FieldValue::Role(UserRole::Administrator)),
            (Field::CommentType, text("comment")),
            (Field::CommentContent, text("Nice post!")),
            (Field::CommentDateGmt, text("2017-09-24T16:00:00Z")),
            (Field::IsTest, FieldValue::Flag(true)),
        ])
    );

    let fields: Vec<&str> = comment
        .parameters()
        .iter()
        .map(|(field, _)| field.as_str())
        .collect();
    assert_eq!(fields.first(), Some(&"blog"));
    assert_eq!(fields.last(), Some(&"is_test"));
}
