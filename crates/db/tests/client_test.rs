//! Integration tests for the client repository.

mod common;

use estratosfera_db::ClientRepository;

async fn seed_clients(repo: &ClientRepository) {
    repo.create("c1", "Netflix Juan Perez", "3001111111")
        .await
        .unwrap();
    repo.create("c2", "Maria nfx Lopez", "3002222222")
        .await
        .unwrap();
    repo.create("c3", "Ana Maria", "3003333333").await.unwrap();
}

#[tokio::test]
async fn count_matches_fetched_list_length() {
    let db = common::setup().await;
    let repo = ClientRepository::new(db);
    seed_clients(&repo).await;

    // Count symmetry: the filter count equals the unbounded fetch length
    let count = repo.count_name_containing("Nfx").await.unwrap();
    let rows = repo.find_name_containing("Nfx").await.unwrap();
    assert_eq!(count, rows.len() as u64);
    assert_eq!(count, 1);
}

#[tokio::test]
async fn name_filter_is_case_insensitive() {
    let db = common::setup().await;
    let repo = ClientRepository::new(db);
    seed_clients(&repo).await;

    assert_eq!(repo.count_name_containing("nfx").await.unwrap(), 1);
    assert_eq!(repo.count_name_containing("NFX").await.unwrap(), 1);
    assert_eq!(repo.count_name_containing("maria").await.unwrap(), 2);
}

#[tokio::test]
async fn phones_respects_limit() {
    let db = common::setup().await;
    let repo = ClientRepository::new(db);
    seed_clients(&repo).await;

    let rows = repo.phones(2).await.unwrap();
    assert_eq!(rows.len(), 2);

    let all = repo.phones(20).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|(celular, _)| celular == "3003333333"));
}

#[tokio::test]
async fn update_name_rewrites_only_target_row() {
    let db = common::setup().await;
    let repo = ClientRepository::new(db);
    seed_clients(&repo).await;

    repo.update_name("c1", "Juan Perez").await.unwrap();

    let all = repo.find_all().await.unwrap();
    let c1 = all.iter().find(|c| c.id == "c1").unwrap();
    let c3 = all.iter().find(|c| c.id == "c3").unwrap();
    assert_eq!(c1.nombre, "Juan Perez");
    assert_eq!(c1.celular, "3001111111");
    assert_eq!(c3.nombre, "Ana Maria");
}
