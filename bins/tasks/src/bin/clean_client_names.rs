//! Normalizes client display names through the cleaner.
//!
//! Usage: cargo run --bin clean_client_names

use std::process::ExitCode;

use estratosfera_ops::{repair, task};
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

    println!("Iniciando limpieza de nombres...");
    let result = task::run(&config.database.url, |db| async move {
        repair::clean_client_names(&db).await
    })
    .await;

    match result {
        Ok(report) => {
            println!("{report}");
            if report.failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Name cleanup failed: {e}");
            ExitCode::FAILURE
        }
    }
}
