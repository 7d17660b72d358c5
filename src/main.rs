use std::process::ExitCode;

use clap::Parser;

use ticketboard::cli::Cli;
use ticketboard::logging::{LogTarget, init_tracing};
use ticketboard::paths;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.is_interactive() {
        init_tracing(LogTarget::File(&paths::log_path()));
    } else {
        init_tracing(LogTarget::Stderr);
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
