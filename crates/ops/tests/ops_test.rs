//! Integration tests for the one-shot operations.

mod common;

use chrono::Utc;
use estratosfera_core::auth::verify_password;
use estratosfera_db::{
    ClientRepository, ExpenseRepository, InventoryRepository, ProviderRepository,
    TransactionRepository,
};
use estratosfera_ops::{inspect, maintenance, repair, seed};
use estratosfera_shared::config::SeedConfig;

#[tokio::test]
async fn seed_admin_is_idempotent_and_non_destructive() {
    let db = common::setup().await;
    let cfg = SeedConfig::default();

    let first = seed::seed_admin(&db, &cfg).await.unwrap();
    assert!(first.created);
    assert_eq!(first.user.email, "admin@estratosfera.net");
    assert!(
        verify_password("admin123", &first.user.password_hash).unwrap(),
        "stored hash must match the configured password"
    );

    // Second run: same row, nothing overwritten
    let second = seed::seed_admin(&db, &cfg).await.unwrap();
    assert!(!second.created);
    assert_eq!(second.user.id, first.user.id);
    assert_eq!(second.user.password_hash, first.user.password_hash);

    let listing = inspect::list_users(&db).await.unwrap();
    assert_eq!(listing.0.len(), 1);
}

#[tokio::test]
async fn fix_negative_expenses_is_idempotent() {
    let db = common::setup().await;
    let expenses = ExpenseRepository::new(db.clone());

    expenses.create("Servidores", -35000, Utc::now()).await.unwrap();
    expenses.create("Publicidad", 20000, Utc::now()).await.unwrap();
    expenses.create("Cuentas", -1500, Utc::now()).await.unwrap();

    let report = repair::fix_negative_expenses(&db).await.unwrap();
    assert_eq!(report.examined, 2);
    assert_eq!(report.fixed, 2);
    assert!(report.failures.is_empty());

    // Every amount is now the absolute value of its prior amount
    assert!(expenses.find_negative().await.unwrap().is_empty());

    // Second run selects zero rows
    let again = repair::fix_negative_expenses(&db).await.unwrap();
    assert_eq!(again.examined, 0);
    assert_eq!(again.fixed, 0);
}

#[tokio::test]
async fn fix_negative_transactions_flips_signs_in_place() {
    let db = common::setup().await;
    let repo = TransactionRepository::new(db.clone());

    maintenance::insert_probe_transaction(&db).await.unwrap();
    let mut refund = estratosfera_db::repositories::NewTransaction {
        id: 100_000,
        cliente_id: "c1".to_string(),
        perfil_id: 1,
        monto: -25000,
        estado_pago: "PAGADO".to_string(),
        fecha_inicio: Utc::now(),
        fecha_vencimiento: Utc::now(),
    };
    repo.create(refund.clone()).await.unwrap();
    refund.id = 100_001;
    refund.monto = -800;
    repo.create(refund).await.unwrap();

    let report = repair::fix_negative_transactions(&db).await.unwrap();
    assert_eq!(report.examined, 2);
    assert_eq!(report.fixed, 2);
    assert!(report.failures.is_empty());

    // The positive row is untouched, the negatives became absolute values
    assert_eq!(repo.find_by_id(100_000).await.unwrap().unwrap().monto, 25000);
    assert_eq!(repo.find_by_id(100_001).await.unwrap().unwrap().monto, 800);
    assert_eq!(
        repo.find_by_id(maintenance::PROBE_TRANSACTION_ID)
            .await
            .unwrap()
            .unwrap()
            .monto,
        12345
    );

    // Second run selects zero rows
    let again = repair::fix_negative_transactions(&db).await.unwrap();
    assert_eq!(again.examined, 0);
}

#[tokio::test]
async fn clean_client_names_repairs_only_dirty_rows() {
    let db = common::setup().await;
    let clients = ClientRepository::new(db.clone());

    clients
        .create("c1", "Netflix Juan Perez", "3001111111")
        .await
        .unwrap();
    clients
        .create("c2", "123 Maria Lopez Nequi 20000", "3002222222")
        .await
        .unwrap();
    clients.create("c3", "Ana Maria", "3003333333").await.unwrap();

    let report = repair::clean_client_names(&db).await.unwrap();
    assert_eq!(report.examined, 3);
    assert_eq!(report.fixed, 2);

    let all = clients.find_all().await.unwrap();
    let nombre = |id: &str| {
        all.iter()
            .find(|c| c.id == id)
            .map(|c| c.nombre.clone())
            .unwrap()
    };
    assert_eq!(nombre("c1"), "Juan Perez");
    assert_eq!(nombre("c2"), "Maria Lopez");
    assert_eq!(nombre("c3"), "Ana Maria");

    // Cleaned names are fixed points: the next pass writes nothing
    let again = repair::clean_client_names(&db).await.unwrap();
    assert_eq!(again.fixed, 0);
}

#[tokio::test]
async fn delete_transaction_reports_both_outcomes() {
    let db = common::setup().await;

    let probe = maintenance::insert_probe_transaction(&db).await.unwrap();
    assert_eq!(probe.id, maintenance::PROBE_TRANSACTION_ID);
    assert_eq!(probe.monto, 12345);

    let deleted = maintenance::delete_transaction(&db, probe.id).await.unwrap();
    match deleted {
        maintenance::TransactionDeletion::Deleted(tx) => {
            assert_eq!(tx.cliente_id, "TEST_CLIENT");
            assert_eq!(tx.monto, 12345);
        }
        maintenance::TransactionDeletion::NotFound(_) => panic!("row existed"),
    }

    // Deleting again is a distinct no-op
    let missing = maintenance::delete_transaction(&db, probe.id).await.unwrap();
    assert!(matches!(
        missing,
        maintenance::TransactionDeletion::NotFound(99999)
    ));
    assert_eq!(
        TransactionRepository::new(db.clone()).count().await.unwrap(),
        0
    );
}

#[tokio::test]
async fn delete_provider_unlinks_accounts_first() {
    let db = common::setup().await;
    let providers = ProviderRepository::new(db.clone());
    let inventory = InventoryRepository::new(db.clone());

    let p = providers.create("Prueba proveedor ").await.unwrap();
    inventory
        .create("Netflix", "a@mail.com", Some(5), false, Some(p.id))
        .await
        .unwrap();

    let outcome = maintenance::delete_provider(&db, "Prueba proveedor ")
        .await
        .unwrap();
    match outcome {
        maintenance::ProviderDeletion::Deleted {
            nombre,
            unlinked_accounts,
        } => {
            assert_eq!(nombre, "Prueba proveedor ");
            assert_eq!(unlinked_accounts, 1);
        }
        maintenance::ProviderDeletion::NotFound(_) => panic!("provider existed"),
    }

    // The account survives, unlinked
    assert_eq!(inventory.count().await.unwrap(), 1);

    let missing = maintenance::delete_provider(&db, "Prueba proveedor ")
        .await
        .unwrap();
    assert!(matches!(missing, maintenance::ProviderDeletion::NotFound(_)));
}

#[tokio::test]
async fn inspection_reports_reflect_inserted_rows() {
    let db = common::setup().await;
    let clients = ClientRepository::new(db.clone());
    let inventory = InventoryRepository::new(db.clone());

    clients
        .create("c1", "Juan Nfx Perez", "3001111111")
        .await
        .unwrap();
    clients.create("c2", "Ana Maria", "3002222222").await.unwrap();
    maintenance::insert_probe_transaction(&db).await.unwrap();
    inventory
        .create("Netflix", "shared@mail.com", Some(10), false, None)
        .await
        .unwrap();

    let counts = inspect::table_counts(&db).await.unwrap();
    assert_eq!(counts.clients, 2);
    assert_eq!(counts.transactions, 1);
    assert_eq!(counts.expenses, 0);
    assert_eq!(counts.inventory_accounts, 1);

    // Count symmetry against the unbounded fetch
    let report = inspect::name_match_report(&db, "nfx").await.unwrap();
    let fetched = clients.find_name_containing("nfx").await.unwrap();
    assert_eq!(report.matching, fetched.len() as u64);
    assert_eq!(report.matching, 1);
    assert_eq!(report.total, 2);

    let phones = inspect::dump_phones(&db, 1).await.unwrap();
    assert_eq!(phones.0.len(), 1);

    let renewables = inspect::renewable_accounts(&db).await.unwrap();
    assert_eq!(renewables.0.len(), 1);
    assert_eq!(renewables.0[0].provider, None);
    let rendered = renewables.to_string();
    assert!(rendered.contains("[Día 10] Netflix - shared@mail.com (Sin Proveedor)"));
}

#[tokio::test]
async fn renewable_listing_reports_empty_inventory() {
    let db = common::setup().await;

    let listing = inspect::renewable_accounts(&db).await.unwrap();
    assert!(
        listing
            .to_string()
            .contains("No hay cuentas renovables configuradas.")
    );
}
