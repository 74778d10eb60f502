//! Domain error types for the StoryWeave application.
//!
//! These errors represent failures at the two collaborator boundaries the
//! application talks to: the host credential capability and the remote
//! story-generation service.

use thiserror::Error;

/// Errors from the host credential capability.
#[derive(Debug, Error)]
pub enum CredentialHostError {
    /// The surrounding environment does not provide the capability at all.
    #[error("Credential host capability is not available")]
    Unavailable,

    #[error("Credential host call failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Errors from the story-generation service.
///
/// `Service` carries the remote service's own message verbatim; the request
/// controller classifies it by substring to decide whether the stored
/// credential has to be invalidated.
#[derive(Debug, Error)]
pub enum StoryServiceError {
    #[error("{0}")]
    Service(String),

    #[error("The service returned an empty story")]
    EmptyStory,

    #[error("Story generation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}
