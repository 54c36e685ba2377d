//! Lists renewable inventory accounts ordered by billing cut-day.
//!
//! Usage: cargo run --bin list_renewable

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
        inspect::renewable_accounts(&db).await
    })
    .await;

    match result {
        Ok(listing) => {
            println!("{listing}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Renewable listing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
