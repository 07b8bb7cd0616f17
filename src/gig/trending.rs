//! Trending gig lookup tool for the keyword extraction agent.
//!
//! This is a placeholder for a real data source: instead of scraping a
//! marketplace, it returns canned sample listings keyed off the query.
//! The model decides on its own whether to call it.

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};

use crate::llm::parameters_schema;

crate::define_tool_error!(TrendingGigsError);

const LOGO_DESIGN_SAMPLES: &str = r#"
"I will design a modern minimalist business logo design" - 5-star rated, 1k+ reviews. Services include multiple concepts, high-resolution files, and vector files.
"I will do 3 modern minimalist logo design" - Top-rated seller. Offers brand style guides and social media kits.
"I will create a unique minimalist logo for your business" - Pro seller. Focus on luxury and modern aesthetics.
"#;

const WEB_DEVELOPMENT_SAMPLES: &str = r#"
"I will build a professional website for your business" - Includes responsive design, e-commerce functionality, and SEO optimization.
"I will develop a custom web application with React and Node.js" - Fast delivery, clean code, and includes deployment.
"I will be your front end web developer in react js, next js" - Specializes in converting Figma/XD designs to pixel-perfect websites.
"#;

/// Sample listings for a query: logo-design queries get the logo-seller
/// set, everything else gets the web-development set.
pub fn trending_samples(query: &str) -> &'static str {
    if query.to_lowercase().contains("logo design") {
        LOGO_DESIGN_SAMPLES
    } else {
        WEB_DEVELOPMENT_SAMPLES
    }
}

/// Tool exposing trending gig data to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingGigs;

#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TrendingGigsArgs {
    /// Category or search term to look up
    pub query: String,
}

impl Tool for TrendingGigs {
    const NAME: &'static str = "get_trending_gigs";
    type Error = TrendingGigsError;
    type Args = TrendingGigsArgs;
    type Output = String;

    async fn definition(&self, _: String) -> ToolDefinition {
        ToolDefinition {
            name: "get_trending_gigs".to_string(),
            description: "Get trending gig data for a given category/search query.".to_string(),
            parameters: parameters_schema::<TrendingGigsArgs>(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(trending_samples(&args.query).to_string())
    }
}
