//! gig-spark - AI-powered gig listing optimizer
//!
//! This library turns a gig category and a free-text plan into
//! keyword-optimized marketing copy (keywords, a title, and a markdown
//! description) for freelance-marketplace listings.

// Allow certain clippy warnings that are either stylistic or from external dependencies
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic
#![allow(clippy::future_not_send)] // From Rig framework internals, can't fix
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod gig;
pub mod llm;
pub mod logger;
pub mod messages;
pub mod providers;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use providers::{Provider, ProviderConfig};

// Re-exports from the gig module
pub use gig::{
    ContentModel, GenerationRequest, GigContent, GigService, generate_optimized_gig,
    format_gig_content,
};
