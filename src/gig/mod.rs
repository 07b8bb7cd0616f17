//! Gig content generation.
//!
//! The pipeline behind one request: validate, extract keywords (with the
//! trending-gig tool available to the model), then generate a title and
//! a markdown description concurrently.

pub mod cli;
pub mod error;
pub mod model;
pub mod prompt;
pub mod service;
pub mod trending;
pub mod types;

pub use cli::handle_generate_command;
pub use error::GenerationError;
pub use model::{ContentModel, RigContentModel};
pub use service::GigService;
pub use types::{GenerationRequest, GigContent, format_gig_content};

use crate::config::Config;
use crate::log_error;

/// Single entry point for one generation run.
///
/// Accepts a request and always returns a `GigContent`: on any failure
/// the result carries a fixed user-facing message instead of an error.
pub async fn generate_optimized_gig(config: &Config, request: &GenerationRequest) -> GigContent {
    match RigContentModel::from_config(config) {
        Ok(model) => GigService::new(model).generate(request).await,
        Err(e) => {
            log_error!("Could not construct content model: {}", e);
            GigContent::failure(e.user_message())
        }
    }
}
