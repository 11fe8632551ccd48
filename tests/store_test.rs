mod common;

use anyhow::Result;
use common::form_with;
use poll_intake::domain::ports::{ConfigProvider, NormalizerOptions, PollStore, StoreKind};
use poll_intake::{open_store, FileStore, FormNormalizer, IntakeConfig, IntakeService};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_file_store_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::open(temp_dir.path().join("polls")).await?;

    let record = FormNormalizer::default().normalize(&form_with(&[
        ("polltime_start_1", "2024-01-01T09:00"),
        ("polltime_end_1", "2024-01-01T21:00"),
        ("area_name_1", "Haeundae"),
        ("area_orig_1", "300"),
        ("area_weight_1", "310"),
    ]))?;

    let stored = store.insert(record.clone()).await?;
    assert_eq!(stored.record, record);

    let path = temp_dir.path().join("polls").join("poll_1024.json");
    assert!(path.exists());

    let loaded = store.get(1024).await?.expect("document should exist");
    assert_eq!(loaded, stored);
    assert_eq!(loaded.record.basic.poll_duration, 12);

    assert!(store.get(1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_file_store_replaces_by_reg_idx() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::open(temp_dir.path()).await?;
    let normalizer = FormNormalizer::default();

    let first = store.insert(normalizer.normalize(&form_with(&[]))?).await?;
    let second = store
        .insert(normalizer.normalize(&form_with(&[("elect_name", "Busan Mayor (by-election)")]))?)
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);

    let polls = store.list().await?;
    assert_eq!(polls.len(), 1);
    assert_eq!(polls[0].record.basic.elect_name, "Busan Mayor (by-election)");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_resubmissions_share_one_document() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::open(temp_dir.path()).await?;
    let record = FormNormalizer::default().normalize(&form_with(&[]))?;

    for _ in 0..20 {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                let record = record.clone();
                tokio::spawn(async move { store.insert(record).await })
            })
            .collect();

        for handle in handles {
            let stored = handle.await??;
            let current = store.get(1024).await?.expect("document should exist");
            assert_eq!(stored.id, current.id);
        }
    }

    let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("poll_1024.json")]);
    assert_eq!(store.list().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_file_store_lists_in_reg_idx_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::open(temp_dir.path()).await?;
    let normalizer = FormNormalizer::default();

    for reg_idx in ["30", "4", "12"] {
        let record = normalizer.normalize(&form_with(&[("reg_idx", reg_idx)]))?;
        store.insert(record).await?;
    }
    // unrelated files are ignored
    std::fs::write(temp_dir.path().join("notes.txt"), "not a poll")?;

    let ids: Vec<i64> = store
        .list()
        .await?
        .iter()
        .map(|p| p.record.reg_idx())
        .collect();
    assert_eq!(ids, vec![4, 12, 30]);
    Ok(())
}

#[tokio::test]
async fn test_list_on_missing_directory_is_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path().join("never-created"));

    assert!(store.list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_open_store_from_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_dir = temp_dir.path().join("data");
    let config = IntakeConfig::from_toml_str(&format!(
        "[store]\nkind = \"file\"\npath = \"{}\"\n",
        store_dir.to_str().unwrap().replace('\\', "/")
    ))?;
    assert_eq!(config.store_kind(), StoreKind::File);

    let store = open_store(&config).await?;
    assert!(store_dir.is_dir());

    let service = IntakeService::new(Arc::clone(&store), NormalizerOptions::default());
    service.submit(&form_with(&[])).await?;
    assert_eq!(store.list().await?.len(), 1);
    Ok(())
}
