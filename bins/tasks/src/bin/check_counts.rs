//! Prints row counts for the main tables.
//!
//! Usage: cargo run --bin check_counts

use std::process::ExitCode;

use estratosfera_ops::{inspect, task};
use estratosfera_shared::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = task::run(&config.database.url, |db| async move {
        inspect::table_counts(&db).await
    })
    .await;

    match result {
        Ok(counts) => {
            println!("{counts}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Count check failed: {e}");
            ExitCode::FAILURE
        }
    }
}
