//! Counts clients whose name contains the configured substring.
//!
//! Usage: cargo run --bin count_matches [needle]

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

    // A positional argument overrides the configured needle.
    let needle = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.tasks.name_needle.clone());

    let result = task::run(&config.database.url, |db| async move {
        inspect::name_match_report(&db, &needle).await
    })
    .await;

    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Match count failed: {e}");
            ExitCode::FAILURE
        }
    }
}
