use super::model::RigContentModel;
use super::service::GigService;
use super::types::{GenerationRequest, GigContent, MIN_PLAN_LEN, MIN_QUERY_LEN, format_gig_content};
use crate::common::CommonParams;
use crate::config::Config;
use crate::llm::validate_provider_config;
use crate::messages;
use crate::ui;
use anyhow::Result;
use colored::Colorize;

/// Which generated field to place on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CopyTarget {
    Title,
    Description,
}

pub async fn handle_generate_command(
    common: CommonParams,
    query: String,
    plan: String,
    print: bool,
    copy: Option<CopyTarget>,
) -> Result<()> {
    // Field-level validation up front, with the detail the core result
    // intentionally leaves out
    if query.len() < MIN_QUERY_LEN {
        ui::print_warning(&format!(
            "Please enter a category with at least {MIN_QUERY_LEN} characters."
        ));
        return Ok(());
    }
    if plan.len() < MIN_PLAN_LEN {
        ui::print_warning(&format!(
            "Please describe your plan with at least {MIN_PLAN_LEN} characters."
        ));
        return Ok(());
    }

    let mut config = Config::load()?;
    common.apply_to_config(&mut config)?;

    if let Err(e) = validate_provider_config(&config) {
        ui::print_error(&format!("Error: {e}"));
        ui::print_info("\nPlease ensure the following:");
        ui::print_info(
            "1. You have configured a provider with 'gig-spark config --provider <name> --api-key <key>'.",
        );
        ui::print_info("2. Or the provider's API key environment variable is set.");
        return Err(e.into());
    }

    let model = RigContentModel::from_config(&config)?;
    let service = GigService::new(model);
    let request = GenerationRequest::new(query, plan);

    // Create and start the spinner
    let spinner = ui::create_spinner("");
    let random_message = messages::get_waiting_message();
    let (r, g, b) = random_message.color;
    spinner.set_message(random_message.text.truecolor(r, g, b).to_string());

    let content = service.generate(&request).await;

    spinner.finish_and_clear();

    if let Some(error) = &content.error {
        ui::print_error(error);
        return Ok(());
    }

    if print {
        println!("{}", format_gig_content(&content));
        return Ok(());
    }

    ui::print_success("✨ Your optimized gig content is ready!");
    ui::print_newline();
    ui::print_info("Title");
    ui::print_bordered_content(&content.title);
    ui::print_newline();
    ui::print_info("Keywords");
    ui::print_bordered_content(&content.keywords.join(", "));
    ui::print_newline();
    ui::print_info("Description");
    ui::print_bordered_content(&content.description);

    if let Some(target) = copy {
        copy_to_clipboard(&content, target)?;
    }

    Ok(())
}

fn copy_to_clipboard(content: &GigContent, target: CopyTarget) -> Result<()> {
    let (label, text) = match target {
        CopyTarget::Title => ("Title", &content.title),
        CopyTarget::Description => ("Description", &content.description),
    };

    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.clone())?;
    ui::print_success(&format!("{label} copied to clipboard."));
    Ok(())
}
