// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Akismet client workspace
//!
//! This crate holds the symbolic vocabularies the Akismet API accepts, kept
//! apart from the HTTP client so host applications can store and pass them
//! around without pulling in the transport stack.

pub mod comment_kind;
pub mod role;

pub use comment_kind::CommentKind;
pub use role::UserRole;
