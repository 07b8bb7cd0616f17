use crate::common::CommonParams;
use crate::config::Config;
use crate::log_debug;
use crate::ui;
use anyhow::Result;
use std::collections::HashMap;

/// Handle the 'config' command
pub fn handle_config_command(
    common: &CommonParams,
    api_key: Option<String>,
    param: Option<Vec<String>>,
) -> Result<()> {
    log_debug!(
        "Starting 'config' command with common: {:?}, api_key: {:?}, param: {:?}",
        common,
        api_key.as_ref().map(|_| "<redacted>"),
        param
    );

    let mut config = Config::load()?;

    let additional_params = param.map(parse_additional_params);

    let no_changes = common.provider.is_none()
        && common.model.is_none()
        && api_key.is_none()
        && additional_params.is_none();

    if no_changes {
        print_current_config(&config);
        return Ok(());
    }

    config.update(
        common.provider.clone(),
        api_key,
        common.model.clone(),
        additional_params,
    )?;
    config.save()?;

    ui::print_success("Configuration updated successfully.");
    print_current_config(&config);
    Ok(())
}

/// Parse additional parameters from the command line
fn parse_additional_params(params: Vec<String>) -> HashMap<String, String> {
    params
        .iter()
        .filter_map(|param| {
            param
                .split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}

fn print_current_config(config: &Config) {
    ui::print_info(&format!("Default provider: {}", config.default_provider));

    for (name, provider_config) in &config.providers {
        ui::print_newline();
        ui::print_info(&format!("Provider: {name}"));
        ui::print_message(&format!(
            "  API key: {}",
            mask_api_key(&provider_config.api_key)
        ));
        ui::print_message(&format!("  Model: {}", provider_config.model));
        if !provider_config.additional_params.is_empty() {
            ui::print_message(&format!(
                "  Additional params: {:?}",
                provider_config.additional_params
            ));
        }
    }
}

/// Mask an API key for display, keeping only the last four characters
fn mask_api_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return "<not set>".to_string();
    }
    if api_key.len() <= 4 {
        return "*".repeat(api_key.len());
    }
    let visible = &api_key[api_key.len() - 4..];
    format!("{}{visible}", "*".repeat(api_key.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_additional_params() {
        let params = vec!["temperature=0.7".to_string(), "bogus".to_string()];
        let parsed = parse_additional_params(params);
        assert_eq!(parsed.get("temperature").map(String::as_str), Some("0.7"));
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key(""), "<not set>");
        assert_eq!(mask_api_key("abcd"), "****");
        assert_eq!(mask_api_key("sk-test-12345678"), "************5678");
    }
}
