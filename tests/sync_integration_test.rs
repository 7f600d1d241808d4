use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use remsync::storage::JsonStore;
use remsync::store::TaskStore;
use remsync::sync::sync_file;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn store_at(dir: &TempDir) -> JsonStore {
    JsonStore::at_dir(dir.path().join("data"), "Reminders")
}

const SAMPLE: &str = "\
url,task,status,priority,duedate
http://x/1,Buy milk,open,3,1/05/2025
http://x/2,Call bank,done,1,12/31/2025
http://x/1,Buy milk and eggs,open,2,1/06/2025
";

#[tokio::test]
async fn test_end_to_end_later_row_wins() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "tasks.csv", SAMPLE);
    let mut store = store_at(&dir);

    let report = sync_file(&mut store, &csv, None).await?;
    assert_eq!(report.unique_urls, 2);
    assert_eq!(report.created, 2);
    assert_eq!(report.updated, 0);
    assert_eq!(report.save_failures, 0);

    let records = store.all_records().await?;
    assert_eq!(records.len(), 2);

    let milk = records
        .iter()
        .find(|r| r.notes.as_deref().unwrap().contains("URL: http://x/1"))
        .expect("record for http://x/1");
    assert_eq!(milk.title, "Buy milk and eggs");
    assert_eq!(milk.priority, Some(2));
    assert_eq!(milk.due_date, NaiveDate::from_ymd_opt(2025, 1, 6));
    assert_eq!(milk.notes.as_deref(), Some("Status: open\nURL: http://x/1"));

    let bank = records
        .iter()
        .find(|r| r.notes.as_deref().unwrap().contains("URL: http://x/2"))
        .expect("record for http://x/2");
    assert_eq!(bank.title, "Call bank");
    assert_eq!(bank.priority, Some(1));
    assert_eq!(bank.due_date, NaiveDate::from_ymd_opt(2025, 12, 31));
    Ok(())
}

#[tokio::test]
async fn test_second_run_is_idempotent() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "tasks.csv", SAMPLE);

    let mut store = store_at(&dir);
    sync_file(&mut store, &csv, None).await?;

    let mut store = store_at(&dir);
    let report = sync_file(&mut store, &csv, None).await?;
    assert_eq!(report.created, 0);
    assert_eq!(report.updated, 2);

    // No duplicates: the matcher found the first run's output.
    assert_eq!(store.all_records().await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_dedup_counts_unique_urls() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "tasks.csv",
        "url,task\n\
         http://a,first a\n\
         http://b,only b\n\
         http://a,second a\n\
         http://c,only c\n",
    );
    let mut store = store_at(&dir);

    let report = sync_file(&mut store, &csv, None).await?;
    assert_eq!(report.unique_urls, 3);

    let records = store.all_records().await?;
    assert_eq!(records.len(), 3);
    let a = records
        .iter()
        .find(|r| r.notes.as_deref().unwrap().contains("URL: http://a"))
        .unwrap();
    assert_eq!(a.title, "second a");
    Ok(())
}

#[tokio::test]
async fn test_missing_priority_column_keeps_existing_priority() -> Result<()> {
    let dir = TempDir::new()?;
    let mut store = store_at(&dir);

    let with_priority = write_csv(
        &dir,
        "first.csv",
        "url,task,priority\nhttp://x/1,Buy milk,4\n",
    );
    sync_file(&mut store, &with_priority, None).await?;

    let without_priority = write_csv(&dir, "second.csv", "url,task\nhttp://x/1,Buy milk again\n");
    let mut store = store_at(&dir);
    sync_file(&mut store, &without_priority, None).await?;

    let records = store.all_records().await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Buy milk again");
    assert_eq!(records[0].priority, Some(4));
    Ok(())
}

#[tokio::test]
async fn test_quoted_fields_with_commas() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "tasks.csv",
        "\"url\",\"task\",\"status\"\n\
         http://x/1,\"Buy milk, eggs, and bread\",open\n",
    );
    let mut store = store_at(&dir);

    let report = sync_file(&mut store, &csv, None).await?;
    assert_eq!(report.created, 1);

    let records = store.all_records().await?;
    assert_eq!(records[0].title, "Buy milk, eggs, and bread");
    Ok(())
}

#[tokio::test]
async fn test_named_list_resolution_is_case_insensitive() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "tasks.csv", "url,task\nhttp://x/1,Buy milk\n");

    let mut store = JsonStore::at_dir(dir.path().join("data"), "Groceries");
    let report = sync_file(&mut store, &csv, Some("gROCERIES")).await?;
    assert_eq!(report.created, 1);

    let list = store.find_list_by_title("Groceries").await?.unwrap();
    let records = store.all_records().await?;
    assert_eq!(records[0].list_id, list.id);
    Ok(())
}

#[tokio::test]
async fn test_unknown_list_falls_back_to_default() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "tasks.csv", "url,task\nhttp://x/1,Buy milk\n");
    let mut store = store_at(&dir);

    let report = sync_file(&mut store, &csv, Some("Nonexistent")).await?;
    assert_eq!(report.created, 1);

    let default = store.default_list().await?.unwrap();
    let records = store.all_records().await?;
    assert_eq!(records[0].list_id, default.id);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_fails_before_touching_store() -> Result<()> {
    let dir = TempDir::new()?;
    let mut store = store_at(&dir);

    let result = sync_file(&mut store, &dir.path().join("missing.csv"), None).await;
    assert!(result.is_err());
    // Setup failure: the store was never even asked for access.
    assert!(store.all_records().await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_header_only_file_is_empty_data_set() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "tasks.csv", "url,task,status,priority,duedate\n\n");
    let mut store = store_at(&dir);

    let err = sync_file(&mut store, &csv, None).await.unwrap_err();
    assert!(err.to_string().contains("No task data found"));
    Ok(())
}

#[tokio::test]
async fn test_rows_without_url_column_sync_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "tasks.csv", "task,status\nBuy milk,open\n");
    let mut store = store_at(&dir);

    let report = sync_file(&mut store, &csv, None).await?;
    assert_eq!(report.unique_urls, 0);
    assert!(store.all_records().await?.is_empty());
    Ok(())
}
