use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use textwrap::wrap;

use super::error::GenerationError;

/// Minimum length for the category / search query field
pub const MIN_QUERY_LEN: usize = 3;
/// Minimum length for the free-text gig plan field
pub const MIN_PLAN_LEN: usize = 10;

/// A user-submitted request for gig content generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The gig category or marketplace search term
    pub search_query: String,
    /// The user's plan for their gig, including skills and technologies
    pub user_plan: String,
}

impl GenerationRequest {
    pub fn new(search_query: impl Into<String>, user_plan: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            user_plan: user_plan.into(),
        }
    }

    /// Check the minimum-length constraints on both fields
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.search_query.len() < MIN_QUERY_LEN {
            return Err(GenerationError::Validation(format!(
                "search query must be at least {MIN_QUERY_LEN} characters"
            )));
        }
        if self.user_plan.len() < MIN_PLAN_LEN {
            return Err(GenerationError::Validation(format!(
                "gig plan must be at least {MIN_PLAN_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Model for keyword extraction results
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct ExtractedKeywords {
    /// An array of the most relevant keywords
    pub keywords: Vec<String>,
}

/// Model for title generation results
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct GeneratedTitle {
    /// The generated keyword-optimized gig title
    pub title: String,
}

/// Model for description generation results
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct GeneratedDescription {
    /// The generated keyword-optimized gig description, in markdown
    pub description: String,
}

/// Terminal result of one generation run.
///
/// Either `error` is set and every content field is empty, or `error`
/// is `None` and keywords, title, and description are all populated.
/// Partial success is not a modeled state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GigContent {
    pub keywords: Vec<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GigContent {
    /// Build a fully populated success result
    pub fn success(keywords: Vec<String>, title: String, description: String) -> Self {
        Self {
            keywords,
            title,
            description,
            error: None,
        }
    }

    /// Build a failure result carrying only the user-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            keywords: Vec::new(),
            title: String::new(),
            description: String::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Drop duplicate keywords while preserving first-seen order
pub fn dedup_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keywords
        .into_iter()
        .filter(|k| seen.insert(k.to_lowercase()))
        .collect()
}

/// Formats a `GigContent` as plain text for terminal or scripted output
pub fn format_gig_content(content: &GigContent) -> String {
    if let Some(error) = &content.error {
        return error.clone();
    }

    let mut output = String::new();

    output.push_str(&content.title);
    output.push_str("\n\n");
    output.push_str(&format!("Keywords: {}\n\n", content.keywords.join(", ")));

    // Wrap line by line so markdown headings and blank lines survive
    for line in content.description.lines() {
        if line.is_empty() {
            output.push('\n');
            continue;
        }
        for wrapped in wrap(line, 78) {
            output.push_str(&wrapped);
            output.push('\n');
        }
    }

    output
}
