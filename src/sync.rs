//! Orchestrates one reconciliation run: read the file, resolve the
//! header, deduplicate, then match-or-create and persist row by row.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::columns::ColumnIndex;
use crate::csv::{data_lines, parse_line};
use crate::dedup::latest_unique_rows;
use crate::fields::apply_fields;
use crate::matcher::find_existing;
use crate::store::TaskStore;

/// Outcome counts for one run. Survivor rows that fail to save are
/// counted in `save_failures` and in `unique_urls`, but not in
/// `created`/`updated`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub save_failures: usize,
    pub unique_urls: usize,
}

/// Reconcile the CSV file at `csv_path` against the store.
///
/// Setup failures (unreadable file, no data rows, denied access, no
/// usable target list) abort before any record is touched. Once the row
/// loop starts, a failed save is reported and the loop moves on; store
/// query failures still abort the run.
pub async fn sync_file<S: TaskStore + Send + Sync>(
    store: &mut S,
    csv_path: &Path,
    list_name: Option<&str>,
) -> Result<SyncReport> {
    let content = std::fs::read_to_string(csv_path)
        .with_context(|| format!("Error: {} not found or not readable", csv_path.display()))?;

    let lines = data_lines(&content);
    if lines.len() < 2 {
        return Err(anyhow!("No task data found in {}", csv_path.display()));
    }

    store
        .request_access()
        .await
        .context("Unable to request access to the reminder store")?;

    let target_list = resolve_target_list(store, list_name).await?;

    let header_fields = parse_line(&lines[0]);
    let index = ColumnIndex::resolve(&header_fields);
    println!("{}", index.summary());

    let rows: Vec<Vec<String>> = lines[1..].iter().map(|l| parse_line(l)).collect();
    let survivors = latest_unique_rows(rows, index.url);

    let mut report = SyncReport { unique_urls: survivors.len(), ..Default::default() };

    for row in &survivors {
        // Fetch-all then save-one, strictly sequential; a query failure
        // here is a collaborator failure and aborts the run.
        let records = store.all_records().await?;

        let (mut record, existing) = match find_existing(&records, &row.url) {
            Some(i) => {
                println!("Found existing reminder with URL: {}", row.url);
                (records[i].clone(), true)
            }
            None => {
                println!("Creating new reminder for URL: {}", row.url);
                (store.new_record(&target_list), false)
            }
        };

        apply_fields(&mut record, &row.fields, &index, &row.url);

        match store.save(&record).await {
            Ok(()) => {
                let verb = if existing { "updated" } else { "created" };
                println!("Successfully {} reminder: {}", verb, display_title(&record.title));
                if existing {
                    report.updated += 1;
                } else {
                    report.created += 1;
                }
            }
            Err(e) => {
                println!("Could not save reminder: {}", e);
                report.save_failures += 1;
            }
        }
    }

    println!("\nProcessing complete. Processed {} unique URLs.", report.unique_urls);
    Ok(report)
}

async fn resolve_target_list<S: TaskStore + Send + Sync>(
    store: &S,
    list_name: Option<&str>,
) -> Result<crate::record::ReminderList> {
    if let Some(name) = list_name {
        if let Some(list) = store.find_list_by_title(name).await? {
            println!("Using specified list: {}", name);
            return Ok(list);
        }
        debug!("List '{}' not found, falling back to the default list", name);
    }

    match store.default_list().await? {
        Some(list) => {
            println!("Using default list: {}", list.title);
            Ok(list)
        }
        None => Err(anyhow!("No reminders list available.")),
    }
}

fn display_title(title: &str) -> &str {
    if title.is_empty() {
        "Untitled"
    } else {
        title
    }
}
