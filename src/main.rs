//! watcher_freeze - single-file packaging for the STAT file watcher.
//!
//! This binary freezes the watcher application into one executable with
//! PyInstaller and reports the artifact size.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match watcher_freeze::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
