//! Lists every user account with a truncated password hash.
//!
//! Usage: cargo run --bin list_users

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
        inspect::list_users(&db).await
    })
    .await;

    match result {
        Ok(listing) => {
            println!("{listing}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("User listing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
