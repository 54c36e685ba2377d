//! Deletes one transaction by id, printing its prior values.
//!
//! Usage: cargo run --bin delete_transaction [id]

use std::process::ExitCode;

use estratosfera_ops::{maintenance, task};
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

    // A positional argument overrides the configured id.
    let id = match std::env::args().nth(1) {
        Some(raw) => match raw.parse::<i32>() {
            Ok(id) => id,
            Err(_) => {
                eprintln!("Invalid transaction id: {raw}");
                return ExitCode::FAILURE;
            }
        },
        None => config.tasks.transaction_id,
    };

    let result = task::run(&config.database.url, |db| async move {
        maintenance::delete_transaction(&db, id).await
    })
    .await;

    match result {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Transaction delete failed: {e}");
            ExitCode::FAILURE
        }
    }
}
