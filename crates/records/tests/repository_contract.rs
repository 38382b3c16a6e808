//! Both adapters must honor the same repository contract: seed on first
//! load, verbatim reads afterwards, wholesale store.

use records::{JsonFileStore, MemoryStore, Record, RecordRepository, seed_records};
use tempfile::tempdir;

async fn check_contract(repo: &dyn RecordRepository) {
    // First load seeds with the fixed dataset.
    let first = repo.load().await.unwrap();
    assert_eq!(first, seed_records());

    // The seed was persisted: a second load returns it verbatim.
    let second = repo.load().await.unwrap();
    assert_eq!(first, second);

    // Store replaces wholesale; no re-seeding of an emptied store.
    repo.store(&[Record::draft("x")]).await.unwrap();
    let after = repo.load().await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, "x");

    repo.store(&[]).await.unwrap();
    assert!(repo.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_store_honors_contract() {
    let repo = MemoryStore::new();
    check_contract(&repo).await;
}

#[tokio::test]
async fn json_file_store_honors_contract() {
    let dir = tempdir().unwrap();
    let repo = JsonFileStore::new(dir.path().join("data.json"));
    check_contract(&repo).await;
}

#[tokio::test]
async fn json_file_store_reads_back_what_memory_wrote() {
    // The persisted layout is adapter-independent JSON.
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let file = JsonFileStore::new(&path);
    file.store(&seed_records()).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Record> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, seed_records());
}
