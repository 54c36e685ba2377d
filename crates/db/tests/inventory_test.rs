//! Integration tests for the provider and inventory repositories.

mod common;

use estratosfera_db::{InventoryRepository, ProviderRepository};

#[tokio::test]
async fn renewables_join_provider_and_order_by_cut_day() {
    let db = common::setup().await;
    let providers = ProviderRepository::new(db.clone());
    let inventory = InventoryRepository::new(db);

    let acme = providers.create("Acme Streaming").await.unwrap();
    inventory
        .create("Netflix", "shared1@mail.com", Some(15), false, Some(acme.id))
        .await
        .unwrap();
    inventory
        .create("Disney", "shared2@mail.com", Some(3), false, None)
        .await
        .unwrap();
    // Disposable accounts never show up in the renewable listing
    inventory
        .create("Netflix", "burner@mail.com", None, true, None)
        .await
        .unwrap();

    let rows = inventory.renewables().await.unwrap();
    assert_eq!(rows.len(), 2);

    let cut_days: Vec<Option<i32>> = rows.iter().map(|(acc, _)| acc.dia_corte).collect();
    assert_eq!(cut_days, vec![Some(3), Some(15)]);

    let (_, provider) = rows.iter().find(|(acc, _)| acc.dia_corte == Some(15)).unwrap();
    assert_eq!(provider.as_ref().unwrap().nombre, "Acme Streaming");
}

#[tokio::test]
async fn unlink_then_delete_provider() {
    let db = common::setup().await;
    let providers = ProviderRepository::new(db.clone());
    let inventory = InventoryRepository::new(db);

    let p = providers.create("Prueba proveedor ").await.unwrap();
    inventory
        .create("Netflix", "a@mail.com", Some(1), false, Some(p.id))
        .await
        .unwrap();
    inventory
        .create("Disney", "b@mail.com", Some(2), false, Some(p.id))
        .await
        .unwrap();

    assert_eq!(inventory.count_by_provider(p.id).await.unwrap(), 2);

    let unlinked = inventory.unlink_provider(p.id).await.unwrap();
    assert_eq!(unlinked, 2);
    assert_eq!(inventory.count_by_provider(p.id).await.unwrap(), 0);

    providers.delete(p.clone()).await.unwrap();
    assert!(
        providers
            .find_by_nombre("Prueba proveedor ")
            .await
            .unwrap()
            .is_none()
    );

    // Accounts survive with no provider
    assert_eq!(inventory.count().await.unwrap(), 2);
}

#[tokio::test]
async fn find_provider_by_nombre_misses_unknown() {
    let db = common::setup().await;
    let providers = ProviderRepository::new(db);

    assert!(providers.find_by_nombre("No Existe").await.unwrap().is_none());
}
