//! abook - Main entry point
//!
//! Runs the interactive address-book menu over stdin/stdout. Logging goes
//! to stderr so it never interleaves with the menu itself.

use abook::{AddressBook, Config};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(book_path = %config.book_path.display(), "starting address book");

    let book = AddressBook::new();
    match abook::cli::run_interactive(book, &config.book_path) {
        Ok(book) => {
            info!(records = book.len(), "session ended");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "session aborted");
            Err(e.into())
        }
    }
}
