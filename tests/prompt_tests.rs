use gig_spark::gig::prompt::{
    create_description_system_prompt, create_description_user_prompt, create_keyword_system_prompt,
    create_keyword_user_prompt, create_title_system_prompt, create_title_user_prompt,
};

fn sample_keywords() -> Vec<String> {
    vec![
        "logo".to_string(),
        "minimalist".to_string(),
        "brand identity".to_string(),
    ]
}

#[test]
fn test_keyword_user_prompt_contains_query() {
    let prompt = create_keyword_user_prompt("Logo Design");

    assert!(prompt.contains("Search Query: Logo Design"));
    assert!(prompt.contains("trending gig data"));
}

#[test]
fn test_keyword_system_prompt_mentions_tool() {
    let prompt = create_keyword_system_prompt();

    assert!(prompt.contains("trending gig data"));
    assert!(prompt.contains("array of strings"));
}

#[test]
fn test_title_user_prompt_joins_keywords_with_commas() {
    let prompt = create_title_user_prompt("Logo Design", &sample_keywords(), "Figma and Illustrator");

    assert!(prompt.contains("Category: Logo Design"));
    assert!(prompt.contains("logo, minimalist, brand identity"));
    assert!(prompt.contains("User's Plan: Figma and Illustrator"));
}

#[test]
fn test_title_system_prompt_directives() {
    let prompt = create_title_system_prompt();

    assert!(prompt.contains("under 80 characters"));
    assert!(prompt.contains("ONLY the title"));
}

#[test]
fn test_description_user_prompt_contains_inputs() {
    let prompt =
        create_description_user_prompt("Web Development", &sample_keywords(), "React and Node.js");

    assert!(prompt.contains("Category: Web Development"));
    assert!(prompt.contains("logo, minimalist, brand identity"));
    assert!(prompt.contains("User's Plan: React and Node.js"));
}

#[test]
fn test_description_system_prompt_structure() {
    let prompt = create_description_system_prompt();

    assert!(prompt.contains("Why Choose Me?"));
    assert!(prompt.contains("What You'll Get"));
    assert!(prompt.contains("My Tech Stack"));
    assert!(prompt.contains("call to action"));
    assert!(prompt.contains("markdown format"));
}
