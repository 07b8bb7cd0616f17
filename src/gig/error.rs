//! Error taxonomy for the generation pipeline.
//!
//! Everything below the orchestrator surfaces as one of these variants;
//! the orchestrator collapses them into one of three fixed user-facing
//! messages and never lets the underlying detail escape.

use thiserror::Error;

/// Message returned when the request fails minimum-length validation
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";

/// Message returned when keyword extraction succeeds but yields nothing
pub const EMPTY_KEYWORDS_MESSAGE: &str =
    "Could not extract any keywords. Please try a different search query.";

/// Message returned for any model, transport, or schema failure
pub const GENERIC_ERROR_MESSAGE: &str =
    "An unexpected error occurred while generating content. Please try again.";

/// Failure modes of a single generation run
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Input failed minimum-length constraints
    #[error("invalid input: {0}")]
    Validation(String),

    /// Keyword extraction returned a structurally valid but empty list
    #[error("keyword extraction returned no keywords")]
    EmptyKeywords,

    /// A model response did not conform to the expected output shape
    #[error("model response did not match the expected schema: {0}")]
    SchemaValidation(String),

    /// The outbound call to the model service failed (network, timeout, quota)
    #[error("model call failed: {0}")]
    Transport(String),
}

impl GenerationError {
    /// The fixed, user-facing message for this error.
    ///
    /// Schema and transport failures intentionally collapse into the
    /// same generic message; the detail is logged, never surfaced.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => INVALID_INPUT_MESSAGE,
            Self::EmptyKeywords => EMPTY_KEYWORDS_MESSAGE,
            Self::SchemaValidation(_) | Self::Transport(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}
