//! Dumps a bounded sample of client phone numbers.
//!
//! Usage: cargo run --bin dump_phones

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

    let limit = config.tasks.phone_limit;
    let result = task::run(&config.database.url, |db| async move {
        inspect::dump_phones(&db, limit).await
    })
    .await;

    match result {
        Ok(dump) => {
            println!("{dump}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Phone dump failed: {e}");
            ExitCode::FAILURE
        }
    }
}
