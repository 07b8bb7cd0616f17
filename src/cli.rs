use crate::commands;
use crate::common::CommonParams;
use crate::gig;
use crate::gig::cli::CopyTarget;
use crate::logger;
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};

const LOG_FILE: &str = "gig-spark-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "gig-spark: AI-powered gig listing optimizer",
    long_about = "gig-spark turns a gig category and your plan into keyword-optimized titles and descriptions for freelance marketplaces.",
    disable_version_flag = true,
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, waiting messages, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate optimized gig content from a category and plan
    #[command(about = "Generate keywords, a title, and a description for a gig")]
    Generate {
        #[command(flatten)]
        common: CommonParams,

        /// Gig category or marketplace search term
        #[arg(long, help = "Gig category or search term (at least 3 characters)")]
        query: String,

        /// Your plan for the gig, including skills and technologies
        #[arg(long, help = "Your plan for the gig (at least 10 characters)")]
        plan: String,

        /// Print plain text suitable for piping
        #[arg(short, long, help = "Print plain text output")]
        print: bool,

        /// Copy a generated field to the clipboard
        #[arg(long, value_enum, help = "Copy the title or description to the clipboard")]
        copy: Option<CopyTarget>,
    },

    /// View or update configuration
    #[command(about = "Manage the gig-spark configuration")]
    Config {
        #[command(flatten)]
        common: CommonParams,

        /// API key for the selected provider
        #[arg(long, help = "Set the API key for the selected provider")]
        api_key: Option<String>,

        /// Additional provider parameters as key=value pairs
        #[arg(long, help = "Set additional parameters (key=value)")]
        param: Option<Vec<String>>,
    },
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Entry point for command dispatch
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        logger::set_log_file(log_file)?;
    } else {
        logger::disable_logging();
    }

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command).await
    } else {
        // No subcommand - show help
        let mut cmd = <Cli as clap::CommandFactory>::command();
        cmd.print_help()?;
        Ok(())
    }
}

/// Handle the command and run the appropriate subcommand
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            common,
            query,
            plan,
            print,
            copy,
        } => gig::handle_generate_command(common, query, plan, print, copy).await,
        Commands::Config {
            common,
            api_key,
            param,
        } => commands::handle_config_command(&common, api_key, param),
    }
}
