//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout, loading the address
//! book before the first command and saving it on exit.

use anyhow::Result;
use contact_assistant::{Config, JsonFileRepository, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the conversation on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(book_path = %config.book_path.display(), "Starting contact assistant");

    let repository = JsonFileRepository::new(&config.book_path);
    let session = Session::new(repository, config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = session.run(stdin.lock(), &mut stdout) {
        error!("Session ended with error: {}", e);
        return Err(e.into());
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
