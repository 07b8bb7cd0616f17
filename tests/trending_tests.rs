use gig_spark::gig::trending::{TrendingGigs, TrendingGigsArgs, trending_samples};
use rig::tool::Tool;

#[test]
fn test_logo_design_query_returns_logo_samples() {
    let samples = trending_samples("Logo Design");
    assert!(samples.contains("minimalist business logo"));
    assert!(!samples.contains("React"));
}

#[test]
fn test_logo_design_match_is_case_insensitive_substring() {
    let samples = trending_samples("best LOGO DESIGN gigs");
    assert!(samples.contains("minimalist business logo"));
}

#[test]
fn test_other_queries_return_web_development_samples() {
    for query in ["web development", "video editing", "seo"] {
        let samples = trending_samples(query);
        assert!(samples.contains("React"), "query '{query}' should fall back");
        assert!(!samples.contains("minimalist business logo"));
    }
}

#[tokio::test]
async fn test_tool_call_returns_samples_for_query() {
    let output = TrendingGigs
        .call(TrendingGigsArgs {
            query: "logo design".to_string(),
        })
        .await
        .expect("tool call should succeed");

    assert!(output.contains("Top-rated seller"));
}

#[tokio::test]
async fn test_tool_definition_shape() {
    let definition = TrendingGigs.definition(String::new()).await;

    assert_eq!(definition.name, "get_trending_gigs");
    assert!(definition.description.contains("trending gig data"));

    let required = definition.parameters["required"]
        .as_array()
        .expect("required should be an array");
    assert!(required.iter().any(|v| v == "query"));
}
