// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! A defined comment bound to a service

use crate::{
    builder::CommentBuilder, error::AkismetResult, params::ParameterSet, result::CheckResult,
    service::Service,
};

/// A comment ready to be checked or reported
///
/// Owns its frozen [`ParameterSet`] and borrows the [`Service`] that issues
/// requests, so one service can back any number of comments.
#[derive(Debug, Clone)]
pub struct Comment<'a> {
    service: &'a Service,
    parameters: ParameterSet,
}

impl<'a> Comment<'a> {
    /// Bind an existing parameter set to a service
    pub fn new(service: &'a Service, parameters: ParameterSet) -> Self {
        Self {
            service,
            parameters,
        }
    }

    /// Define a comment with a builder closure
    pub fn define(
        service: &'a Service,
        define: impl FnOnce(CommentBuilder) -> CommentBuilder,
    ) -> Self {
        Self::new(service, define(CommentBuilder::new()).build())
    }

    /// The parameters sent with every request for this comment
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Ask Akismet whether the comment is spam
    ///
    /// # Errors
    ///
    /// See [`Service::check`].
    pub async fn check(&self) -> AkismetResult<CheckResult> {
        self.service.check(&self.parameters).await
    }

    /// Tell Akismet the comment should have been marked spam
    ///
    /// # Errors
    ///
    /// See [`Service::submit_spam`].
    pub async fn submit_spam(&self) -> AkismetResult<()> {
        self.service.submit_spam(&self.parameters).await
    }

    /// Tell Akismet the comment should have been marked ham
    ///
    /// # Errors
    ///
    /// See [`Service::submit_ham`].
    pub async fn submit_ham(&self) -> AkismetResult<()> {
        self.service.submit_ham(&self.parameters).await
    }

    /// Correct a classification: report as spam if `is_spam`, otherwise as ham
    ///
    /// # Errors
    ///
    /// See [`Service::submit_spam`].
    pub async fn update(&self, is_spam: bool) -> AkismetResult<()> {
        if is_spam {
            self.submit_spam().await
        } else {
            self.submit_ham().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AkismetConfig, params::Field};

    fn service() -> Service {
        Service::new(&AkismetConfig::new("secret", "Akismet Tests")).unwrap()
    }

    #[test]
    fn define_freezes_builder_output() {
        let service = service();
        let comment = Comment::define(&service, |c| c.content("Nice post!").test());

        assert_eq!(comment.parameters().len(), 2);
        assert_eq!(
            comment
                .parameters()
                .get(Field::CommentContent)
                .and_then(|value| value.as_text()),
            Some("Nice post!")
        );
        assert!(comment.parameters().contains(Field::IsTest));
    }

    #[test]
    fn new_binds_existing_parameters() {
        let service = service();
        let parameters: ParameterSet = [(Field::CommentAuthor, "Jane Smith")].into_iter().collect();
        let comment = Comment::new(&service, parameters.clone());

        assert_eq!(comment.parameters(), &parameters);
    }
}
