//! Deletes a provider by name, unlinking its accounts first.
//!
//! Usage: cargo run --bin delete_provider [nombre]

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

    // A positional argument overrides the configured name.
    let nombre = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.tasks.provider_nombre.clone());

    let result = task::run(&config.database.url, |db| async move {
        maintenance::delete_provider(&db, &nombre).await
    })
    .await;

    match result {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Provider delete failed: {e}");
            ExitCode::FAILURE
        }
    }
}
