//! Model seam for the generation pipeline.
//!
//! The orchestrator talks to a [`ContentModel`] so the control flow can
//! be exercised without a live provider; [`RigContentModel`] is the
//! production implementation on top of rig.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::GenerationError;
use super::prompt;
use super::trending::TrendingGigs;
use super::types::{ExtractedKeywords, GeneratedDescription, GeneratedTitle};
use crate::config::Config;
use crate::llm::{DEFAULT_MAX_TOKENS, ModelBackend, extract_json_from_response, schema_preamble};
use crate::log_debug;

/// The three model operations behind the orchestration
#[async_trait]
pub trait ContentModel: Send + Sync {
    /// Extract relevant keywords for a search query
    async fn extract_keywords(&self, search_query: &str) -> Result<Vec<String>, GenerationError>;

    /// Generate one concise, keyword-optimized title
    async fn generate_title(
        &self,
        category: &str,
        keywords: &[String],
        user_plan: &str,
    ) -> Result<String, GenerationError>;

    /// Generate a markdown-formatted gig description
    async fn generate_description(
        &self,
        category: &str,
        keywords: &[String],
        user_plan: &str,
    ) -> Result<String, GenerationError>;
}

/// Production `ContentModel` backed by a rig provider client
pub struct RigContentModel {
    backend: ModelBackend,
}

impl RigContentModel {
    pub fn new(backend: ModelBackend) -> Self {
        Self { backend }
    }

    /// Build the model from the configured default provider
    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let backend = ModelBackend::from_config(config)
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self { backend })
    }

    /// Prompt the model and parse its response against the schema of `T`
    async fn prompt_structured<T>(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        with_trending_tool: bool,
    ) -> Result<T, GenerationError>
    where
        T: schemars::JsonSchema + DeserializeOwned,
    {
        let preamble = schema_preamble::<T>(system_prompt);
        let response = self
            .prompt_model(&preamble, user_prompt, with_trending_tool)
            .await?;

        let cleaned = extract_json_from_response(&response).map_err(|e| {
            log_debug!("Schema extraction failed, raw response: {}", response);
            GenerationError::SchemaValidation(e.to_string())
        })?;

        serde_json::from_str(&cleaned)
            .map_err(|e| GenerationError::SchemaValidation(e.to_string()))
    }

    async fn prompt_model(
        &self,
        preamble: &str,
        user_prompt: &str,
        with_trending_tool: bool,
    ) -> Result<String, GenerationError> {
        use rig::client::CompletionClient;
        use rig::completion::Prompt;

        tracing::debug!(
            target: "gig_spark::llm",
            model = self.backend.model(),
            with_tool = with_trending_tool,
            "dispatching model call"
        );

        match &self.backend {
            ModelBackend::OpenAI { client, model } => {
                if with_trending_tool {
                    let agent = client
                        .agent(model)
                        .preamble(preamble)
                        .max_tokens(DEFAULT_MAX_TOKENS)
                        .tool(TrendingGigs)
                        .build();
                    agent
                        .prompt(user_prompt)
                        .await
                        .map_err(|e| GenerationError::Transport(e.to_string()))
                } else {
                    let agent = client
                        .agent(model)
                        .preamble(preamble)
                        .max_tokens(DEFAULT_MAX_TOKENS)
                        .build();
                    agent
                        .prompt(user_prompt)
                        .await
                        .map_err(|e| GenerationError::Transport(e.to_string()))
                }
            }
            ModelBackend::Anthropic { client, model } => {
                if with_trending_tool {
                    let agent = client
                        .agent(model)
                        .preamble(preamble)
                        .max_tokens(DEFAULT_MAX_TOKENS)
                        .tool(TrendingGigs)
                        .build();
                    agent
                        .prompt(user_prompt)
                        .await
                        .map_err(|e| GenerationError::Transport(e.to_string()))
                } else {
                    let agent = client
                        .agent(model)
                        .preamble(preamble)
                        .max_tokens(DEFAULT_MAX_TOKENS)
                        .build();
                    agent
                        .prompt(user_prompt)
                        .await
                        .map_err(|e| GenerationError::Transport(e.to_string()))
                }
            }
        }
    }
}

#[async_trait]
impl ContentModel for RigContentModel {
    async fn extract_keywords(&self, search_query: &str) -> Result<Vec<String>, GenerationError> {
        let system_prompt = prompt::create_keyword_system_prompt();
        let user_prompt = prompt::create_keyword_user_prompt(search_query);

        let extracted: ExtractedKeywords = self
            .prompt_structured(&system_prompt, &user_prompt, true)
            .await?;

        log_debug!(
            "Extracted {} keywords for query '{}'",
            extracted.keywords.len(),
            search_query
        );
        Ok(extracted.keywords)
    }

    async fn generate_title(
        &self,
        category: &str,
        keywords: &[String],
        user_plan: &str,
    ) -> Result<String, GenerationError> {
        let system_prompt = prompt::create_title_system_prompt();
        let user_prompt = prompt::create_title_user_prompt(category, keywords, user_plan);

        let generated: GeneratedTitle = self
            .prompt_structured(&system_prompt, &user_prompt, false)
            .await?;
        Ok(generated.title)
    }

    async fn generate_description(
        &self,
        category: &str,
        keywords: &[String],
        user_plan: &str,
    ) -> Result<String, GenerationError> {
        let system_prompt = prompt::create_description_system_prompt();
        let user_prompt = prompt::create_description_user_prompt(category, keywords, user_plan);

        let generated: GeneratedDescription = self
            .prompt_structured(&system_prompt, &user_prompt, false)
            .await?;
        Ok(generated.description)
    }
}
