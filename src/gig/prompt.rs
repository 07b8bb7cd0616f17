//! Prompt construction for the three generation tasks.
//!
//! System prompts carry the role and directives; user prompts carry the
//! per-request data. The JSON output contract is appended by the model
//! layer via `llm::schema_preamble`.

use crate::log_debug;

pub fn create_keyword_system_prompt() -> String {
    String::from(
        "You are an expert in freelance-marketplace gig optimization.\n\n\
         Analyze trending gig data and extract the most relevant keywords related to the \
         gig category or search term the user provides. You have access to a tool that \
         fetches trending gig data for a query; use it when you need sample listings to \
         ground your analysis.\n\n\
         Return the keywords as an array of strings, most relevant first.",
    )
}

pub fn create_keyword_user_prompt(search_query: &str) -> String {
    format!(
        "Analyze the trending gig data for the following search query and extract the \
         most relevant keywords.\n\n\
         Search Query: {search_query}"
    )
}

pub fn create_title_system_prompt() -> String {
    String::from(
        "You are an expert gig optimization specialist for freelance marketplaces. \
         Your goal is to generate a highly compelling and keyword-optimized gig title \
         based on the provided category, keywords, and user plan.\n\n\
         Instructions:\n\
         - The title should be concise, catchy, and directly address search intent.\n\
         - It MUST incorporate the provided keywords and the user's technologies naturally and strategically.\n\
         - Aim for a length that is optimized for marketplace search (typically under 80 characters).\n\
         - Focus on highlighting the core value proposition of the gig based on the user's plan.\n\
         - Your final output should be ONLY the title.\n\n\
         Example: I will design a modern minimalist logo and brand identity for your business",
    )
}

pub fn create_title_user_prompt(category: &str, keywords: &[String], user_plan: &str) -> String {
    let prompt = format!(
        "Generate an optimized gig title from the following:\n\n\
         Category: {category}\n\
         Keywords: {}\n\
         User's Plan: {user_plan}",
        keywords.join(", ")
    );

    log_debug!(
        "Generated title prompt for category '{}' with {} keywords",
        category,
        keywords.len()
    );

    prompt
}

pub fn create_description_system_prompt() -> String {
    String::from(
        "You are an expert gig optimization specialist for freelance marketplaces. \
         Your goal is to create a compelling and keyword-optimized gig description that \
         attracts potential buyers.\n\n\
         The gig description should include:\n\
         - A strong hook/introduction.\n\
         - A clear articulation of what the gig offers, leveraging the user's plan.\n\
         - Key benefits for the buyer.\n\
         - A strong call to action.\n\
         - Natural and strategic integration of the identified keywords and technologies \
         from the user's plan throughout the text.\n\
         - Sections like \"Why Choose Me?\", \"What You'll Get\", or \"My Tech Stack\".\n\n\
         Ensure the description is persuasive, well-structured, and optimized for search.\n\
         The description should be in markdown format.",
    )
}

pub fn create_description_user_prompt(
    category: &str,
    keywords: &[String],
    user_plan: &str,
) -> String {
    let prompt = format!(
        "Generate a persuasive, structured gig description from the following:\n\n\
         Category: {category}\n\
         Keywords: {}\n\
         User's Plan: {user_plan}",
        keywords.join(", ")
    );

    log_debug!(
        "Generated description prompt for category '{}' with {} keywords",
        category,
        keywords.len()
    );

    prompt
}
