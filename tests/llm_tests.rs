use anyhow::Result;
use gig_spark::config::Config;
use gig_spark::gig::types::ExtractedKeywords;
use gig_spark::llm::{extract_json_from_response, parameters_schema, schema_preamble,
    validate_provider_config};
use gig_spark::providers::ProviderConfig;

#[test]
fn test_extract_json_from_plain_response() -> Result<()> {
    let response = r#"{"keywords": ["logo", "branding"]}"#;
    let extracted = extract_json_from_response(response)?;
    let parsed: ExtractedKeywords = serde_json::from_str(&extracted)?;
    assert_eq!(parsed.keywords, vec!["logo", "branding"]);
    Ok(())
}

#[test]
fn test_extract_json_from_code_fence() -> Result<()> {
    let response = "Here you go:\n```json\n{\"title\": \"I will design a logo\"}\n```";
    let extracted = extract_json_from_response(response)?;
    assert_eq!(extracted, "{\"title\": \"I will design a logo\"}");
    Ok(())
}

#[test]
fn test_extract_json_from_prose_wrapped_response() -> Result<()> {
    let response = "Sure! The result is {\"title\": \"I will build a website\"} - hope it helps.";
    let extracted = extract_json_from_response(response)?;
    assert_eq!(extracted, "{\"title\": \"I will build a website\"}");
    Ok(())
}

#[test]
fn test_extract_json_rejects_non_json_responses() {
    assert!(extract_json_from_response("no structured content here").is_err());
    assert!(extract_json_from_response("{not valid json}").is_err());
}

#[test]
fn test_parameters_schema_requires_every_property() {
    let schema = parameters_schema::<gig_spark::gig::trending::TrendingGigsArgs>();

    let required = schema["required"]
        .as_array()
        .expect("required should be an array");
    assert!(required.iter().any(|v| v == "query"));
}

#[test]
fn test_schema_preamble_embeds_output_contract() {
    let preamble = schema_preamble::<ExtractedKeywords>("You are an expert.");

    assert!(preamble.starts_with("You are an expert."));
    assert!(preamble.contains("OUTPUT FORMAT"));
    assert!(preamble.contains("keywords"));
}

#[test]
fn test_validate_provider_config() {
    let mut config = Config::default();
    config.default_provider = "openai".to_string();
    config.providers.insert(
        "openai".to_string(),
        ProviderConfig {
            api_key: "dummy-api-key".to_string(),
            model: "gpt-4o".to_string(),
            ..Default::default()
        },
    );

    // Validation should pass with API key set
    assert!(validate_provider_config(&config).is_ok());

    // An unknown default provider is rejected
    let mut invalid_config = config.clone();
    invalid_config.default_provider = "bogus".to_string();
    assert!(validate_provider_config(&invalid_config).is_err());
}
