//! Admin account seeder for Estratosfera.
//!
//! Upserts the configured administrative account and exits. Safe to run
//! repeatedly: an existing admin row is never overwritten.
//!
//! Usage: cargo run --bin seeder

use std::process::ExitCode;

use estratosfera_ops::{seed::seed_admin, task};
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

    println!("Connecting to database...");
    let seed_cfg = config.seed.clone();
    let result = task::run(&config.database.url, |db| async move {
        seed_admin(&db, &seed_cfg).await
    })
    .await;

    match result {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Seeding failed: {e}");
            ExitCode::FAILURE
        }
    }
}
