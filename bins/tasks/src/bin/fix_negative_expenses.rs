//! Flips negative expense amounts to their absolute value.
//!
//! Usage: cargo run --bin fix_negative_expenses

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

    println!("Buscando gastos con monto negativo...");
    let result = task::run(&config.database.url, |db| async move {
        repair::fix_negative_expenses(&db).await
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
            eprintln!("Expense repair failed: {e}");
            ExitCode::FAILURE
        }
    }
}
