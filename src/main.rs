use std::process;
use wincleangen::{
    cli::{Cli, CliHandler},
    error::WinCleanError,
};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ Argument parsing failed: {}", e);
            process::exit(2);
        }
    };

    // Create and run the CLI handler
    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            match e {
                WinCleanError::UnknownOption { .. } => 2,
                WinCleanError::InvalidArguments(_) => 2,
                WinCleanError::CatalogError(_) => 2,
                WinCleanError::AnalysisTimeout { .. } => 4,
                WinCleanError::LlmClientError(_) | WinCleanError::NetworkError(_) => 5,
                WinCleanError::MissingApiKey { .. } => 6,
                _ => 1, // General error
            }
        }
    };

    process::exit(exit_code);
}
