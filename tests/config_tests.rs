use gig_spark::common::CommonParams;
use gig_spark::config::Config;
use gig_spark::providers::{Provider, ProviderConfig};

#[test]
fn test_default_config_covers_all_providers() {
    let config = Config::default();

    assert_eq!(config.default_provider, "openai");
    for provider in Provider::ALL {
        let provider_config = config
            .get_provider_config(provider.name())
            .expect("default config should cover every provider");
        assert_eq!(provider_config.model, provider.default_model());
    }
}

#[test]
fn test_claude_alias_resolves_to_anthropic() {
    let config = Config::default();
    assert!(config.get_provider_config("claude").is_some());
    assert!(config.get_provider_config("Anthropic").is_some());
    assert!(config.get_provider_config("mistral").is_none());
}

#[test]
fn test_update_switches_provider_and_sets_key() {
    let mut config = Config::default();

    config
        .update(
            Some("anthropic".to_string()),
            Some("test-key".to_string()),
            Some("claude-sonnet-4-5-20250929".to_string()),
            None,
        )
        .expect("update should succeed");

    assert_eq!(config.default_provider, "anthropic");
    let provider_config = config
        .get_provider_config("anthropic")
        .expect("anthropic config present");
    assert_eq!(provider_config.api_key, "test-key");
    assert!(provider_config.has_api_key());
}

#[test]
fn test_update_rejects_unknown_provider() {
    let mut config = Config::default();
    let result = config.update(Some("mistral".to_string()), None, None, None);
    assert!(result.is_err());
}

#[test]
fn test_config_toml_round_trip() {
    let mut config = Config::default();
    config
        .update(
            Some("openai".to_string()),
            Some("sk-test".to_string()),
            None,
            Some(
                [("temperature".to_string(), "0.7".to_string())]
                    .into_iter()
                    .collect(),
            ),
        )
        .expect("update should succeed");

    let serialized = toml::to_string_pretty(&config).expect("config should serialize");
    let restored: Config = toml::from_str(&serialized).expect("config should deserialize");

    assert_eq!(restored.default_provider, "openai");
    let provider_config = restored
        .get_provider_config("openai")
        .expect("openai config present");
    assert_eq!(provider_config.api_key, "sk-test");
    assert_eq!(
        provider_config.additional_params.get("temperature"),
        Some(&"0.7".to_string())
    );
}

#[test]
fn test_empty_api_key_is_not_serialized() {
    let config = ProviderConfig::with_defaults(Provider::OpenAI);
    let serialized = toml::to_string(&config).expect("provider config should serialize");
    assert!(!serialized.contains("api_key"));
}

#[test]
fn test_common_params_apply_provider_and_model() {
    let mut config = Config::default();
    let params = CommonParams {
        provider: Some("anthropic".to_string()),
        model: Some("claude-haiku-4-5-20251001".to_string()),
    };

    let changed = params
        .apply_to_config(&mut config)
        .expect("apply should succeed");

    assert!(changed);
    assert_eq!(config.default_provider, "anthropic");
    assert_eq!(
        config
            .get_provider_config("anthropic")
            .expect("anthropic config present")
            .model,
        "claude-haiku-4-5-20251001"
    );
}
