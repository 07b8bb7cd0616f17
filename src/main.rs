use gig_spark::cli;
use gig_spark::logger;

#[tokio::main]
async fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = cli::main().await {
        gig_spark::ui::print_error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
