use crate::{log_debug, log_error};

use super::error::GenerationError;
use super::model::ContentModel;
use super::types::{GenerationRequest, GigContent, dedup_keywords};

/// Service orchestrating one gig content generation run.
///
/// Validates the request, extracts keywords, then fans out title and
/// description generation concurrently with an all-or-nothing join.
/// Every failure below this boundary is converted into a `GigContent`
/// carrying one of three fixed messages; nothing propagates as an error
/// to the caller.
pub struct GigService<M: ContentModel> {
    model: M,
}

impl<M: ContentModel> GigService<M> {
    /// Create a new `GigService` over the given content model
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Run one generation cycle to completion.
    ///
    /// Never returns an error: failures come back as a `GigContent`
    /// with `error` set and all content fields empty.
    pub async fn generate(&self, request: &GenerationRequest) -> GigContent {
        if let Err(e) = request.validate() {
            log_debug!("Request rejected: {}", e);
            return GigContent::failure(e.user_message());
        }

        match self.run(request).await {
            Ok(content) => content,
            Err(e) => {
                // Detail stays in the log; the caller gets the fixed message
                log_error!("Generation failed: {}", e);
                GigContent::failure(e.user_message())
            }
        }
    }

    async fn run(&self, request: &GenerationRequest) -> Result<GigContent, GenerationError> {
        let keywords = self.model.extract_keywords(&request.search_query).await?;
        let keywords = dedup_keywords(keywords);

        if keywords.is_empty() {
            return Err(GenerationError::EmptyKeywords);
        }

        log_debug!("Generating content from {} keywords", keywords.len());

        // Title and description are independent; run them concurrently
        // and use neither result unless both succeed.
        let (title, description) = tokio::try_join!(
            self.model
                .generate_title(&request.search_query, &keywords, &request.user_plan),
            self.model
                .generate_description(&request.search_query, &keywords, &request.user_plan),
        )?;

        Ok(GigContent::success(keywords, title, description))
    }
}
