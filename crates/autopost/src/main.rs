//! Autopost command-line entry point.

use autopost::cli::{
    Cli, Commands, handle_preview_command, handle_publish_command, handle_validate_command,
};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    autopost::init_tracing(cli.log_json);

    let result = match cli.command {
        Commands::Publish {
            content,
            config,
            force,
            format,
        } => handle_publish_command(&content, config, force, format).await,
        Commands::Validate { config, format } => handle_validate_command(config, format),
        Commands::Preview { content, config } => handle_preview_command(&content, config),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
