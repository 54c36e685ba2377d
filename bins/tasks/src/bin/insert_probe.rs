//! Inserts the fixed probe transaction and echoes the stored row.
//!
//! Usage: cargo run --bin insert_probe

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

    println!(
        "Insertando transacción de prueba (id {})...",
        maintenance::PROBE_TRANSACTION_ID
    );
    let result = task::run(&config.database.url, |db| async move {
        maintenance::insert_probe_transaction(&db).await
    })
    .await;

    match result {
        Ok(tx) => {
            println!(
                "Insertada: id {} | cliente {} | perfil {} | monto {} | estado {}",
                tx.id, tx.cliente_id, tx.perfil_id, tx.monto, tx.estado_pago
            );
            println!("  inicio {} | vencimiento {}", tx.fecha_inicio, tx.fecha_vencimiento);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Probe insert failed: {e}");
            ExitCode::FAILURE
        }
    }
}
