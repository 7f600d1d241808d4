//! The task-store collaborator boundary.
//
// The sync core only ever talks to the reminder backend through this
// trait, one awaited call at a time. The JSON-file implementation in
// `storage` is the default backend for the binary; tests supply their
// own.

use async_trait::async_trait;
use thiserror::Error;

use crate::record::{Reminder, ReminderList};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("access to the reminder store was denied: {0}")]
    AccessDenied(String),
    #[error("failed to query the reminder store: {0}")]
    Query(String),
    #[error("failed to save reminder: {0}")]
    Save(String),
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store data is corrupt: {0}")]
    Corrupt(String),
}

/// Backend holding reminder lists and their records.
///
/// Calls are awaited strictly one at a time by the sync driver; an
/// implementation never sees two operations in flight.
#[async_trait]
pub trait TaskStore {
    /// Authorization step; may be denied, which aborts the run.
    async fn request_access(&mut self) -> Result<(), StoreError>;

    /// Every record visible to the store, across all lists.
    async fn all_records(&self) -> Result<Vec<Reminder>, StoreError>;

    /// All reminder lists.
    async fn lists(&self) -> Result<Vec<ReminderList>, StoreError>;

    /// The designated list for new entries, when one exists.
    async fn default_list(&self) -> Result<Option<ReminderList>, StoreError>;

    /// Instantiate a fresh record attached to a list. The record is not
    /// persisted until `save` is called.
    fn new_record(&self, list: &ReminderList) -> Reminder;

    /// Persist one record, inserting or replacing by id.
    async fn save(&mut self, record: &Reminder) -> Result<(), StoreError>;

    /// Case-insensitive list lookup by title.
    async fn find_list_by_title(&self, name: &str) -> Result<Option<ReminderList>, StoreError> {
        let wanted = name.to_lowercase();
        Ok(self
            .lists()
            .await?
            .into_iter()
            .find(|l| l.title.to_lowercase() == wanted))
    }
}
