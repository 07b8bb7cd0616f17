//! Shared LLM plumbing.
//!
//! Provider-backed client construction, schema-constrained prompting
//! helpers, and JSON extraction from raw model responses.

use crate::config::Config;
use crate::log_debug;
use crate::providers::{Provider, ProviderError};
use anyhow::Result;
use rig::providers::{anthropic, openai};
use serde_json::{Map, Value};

/// Anthropic API settings used when constructing the provider client
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Default max tokens for a single generation call.
/// Required for Anthropic and a good default for other providers.
pub const DEFAULT_MAX_TOKENS: u64 = 8192;

/// Provider-specific rig client plus the model it will drive
#[derive(Clone)]
pub enum ModelBackend {
    OpenAI { client: openai::Client, model: String },
    Anthropic { client: anthropic::Client, model: String },
}

impl ModelBackend {
    /// Build a backend from the configured default provider.
    ///
    /// The API key comes from the config file, falling back to the
    /// provider's conventional environment variable.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let provider: Provider = config.default_provider.parse()?;
        let provider_config = config.get_provider_config(provider.name());

        let api_key = provider_config
            .filter(|c| c.has_api_key())
            .map(|c| c.api_key.clone())
            .or_else(|| std::env::var(provider.api_key_env()).ok())
            .ok_or_else(|| ProviderError::MissingApiKey(provider.name().to_string()))?;

        let model = provider_config
            .map_or_else(|| provider.default_model().to_string(), |c| {
                c.effective_model(provider).to_string()
            });

        log_debug!("Using provider '{}' with model '{}'", provider, model);

        match provider {
            Provider::OpenAI => Ok(Self::OpenAI {
                client: openai::Client::new(&api_key),
                model,
            }),
            Provider::Anthropic => Ok(Self::Anthropic {
                client: anthropic::ClientBuilder::new(&api_key)
                    .base_url(ANTHROPIC_BASE_URL)
                    .anthropic_version(ANTHROPIC_API_VERSION)
                    .build()
                    .expect("Anthropic client should build"),
                model,
            }),
        }
    }

    /// The model name this backend will prompt
    pub fn model(&self) -> &str {
        match self {
            Self::OpenAI { model, .. } | Self::Anthropic { model, .. } => model,
        }
    }
}

/// Validates that the configured provider has an API key available
pub fn validate_provider_config(config: &Config) -> Result<(), ProviderError> {
    let provider: Provider = config.default_provider.parse()?;

    let has_config_key = config
        .get_provider_config(provider.name())
        .is_some_and(crate::providers::ProviderConfig::has_api_key);

    if has_config_key || std::env::var(provider.api_key_env()).is_ok() {
        Ok(())
    } else {
        Err(ProviderError::MissingApiKey(provider.name().to_string()))
    }
}

/// Generate a JSON schema for tool parameters that's `OpenAI`-compatible.
/// `OpenAI` tool schemas require the `required` array to list every property.
pub fn parameters_schema<T: schemars::JsonSchema>() -> Value {
    use schemars::schema_for;

    let schema = schema_for!(T);
    let mut value = serde_json::to_value(schema).expect("tool schema should serialize");
    enforce_required_properties(&mut value);
    value
}

/// Ensure all properties are listed in the `required` array.
/// This is needed for `OpenAI` tool compatibility.
fn enforce_required_properties(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };

    let props_entry = obj
        .entry("properties")
        .or_insert_with(|| Value::Object(Map::new()));
    let props_obj = props_entry.as_object().expect("properties must be object");
    let required_keys: Vec<Value> = props_obj.keys().cloned().map(Value::String).collect();

    obj.insert("required".to_string(), Value::Array(required_keys));
}

/// Append a JSON-only output contract for `T` to a system prompt.
///
/// The model is told to emit nothing but a JSON object matching the
/// schema; the response is still run through [`extract_json_from_response`]
/// before parsing, since models occasionally wrap output in prose or
/// code fences anyway.
pub fn schema_preamble<T: schemars::JsonSchema>(system_prompt: &str) -> String {
    use schemars::schema_for;

    let schema = schema_for!(T);
    let schema_json =
        serde_json::to_string_pretty(&schema).expect("output schema should serialize");

    format!(
        "{system_prompt}\n\n=== OUTPUT FORMAT ===\nYou must respond with ONLY a valid JSON object \
         that matches this exact schema:\n\n{schema_json}\n\nReturn ONLY the raw JSON object. \
         No explanations, no additional text, no markdown formatting - just the pure JSON response."
    )
}

/// Extract JSON from a potentially verbose response that might contain explanations
pub fn extract_json_from_response(response: &str) -> Result<String> {
    // First try to find JSON within markdown code blocks
    if let Some(start) = response.find("```json")
        && let Some(json_end) = response[start + 7..].find("```")
    {
        let json_content = &response[start + 7..start + 7 + json_end];
        return Ok(json_content.trim().to_string());
    }

    // Look for JSON objects by finding { and matching }
    let mut brace_count = 0;
    let mut json_start = None;
    let mut json_end = None;

    for (i, ch) in response.char_indices() {
        match ch {
            '{' => {
                if brace_count == 0 {
                    json_start = Some(i);
                }
                brace_count += 1;
            }
            '}' => {
                brace_count -= 1;
                if brace_count == 0 && json_start.is_some() {
                    json_end = Some(i + 1);
                    break;
                }
            }
            _ => {}
        }
    }

    if let (Some(start), Some(end)) = (json_start, json_end) {
        let json_content = &response[start..end];
        // Validate it's actually JSON by attempting to parse it
        let _: Value = serde_json::from_str(json_content)
            .map_err(|_| anyhow::anyhow!("Found JSON-like content but it's not valid JSON"))?;
        return Ok(json_content.to_string());
    }

    Err(anyhow::anyhow!("No valid JSON found in response"))
}

/// Macro to define a tool error type with standard From implementations.
///
/// This creates a newtype wrapper around String that implements:
/// - `Debug`, `Display`, `std::error::Error`
/// - `From<anyhow::Error>`
/// - `From<std::io::Error>`
#[macro_export]
macro_rules! define_tool_error {
    ($name:ident) => {
        #[derive(Debug)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::error::Error for $name {}

        impl From<anyhow::Error> for $name {
            fn from(err: anyhow::Error) -> Self {
                $name(err.to_string())
            }
        }

        impl From<std::io::Error> for $name {
            fn from(err: std::io::Error) -> Self {
                $name(err.to_string())
            }
        }
    };
}
