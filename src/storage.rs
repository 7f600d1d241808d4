//! JSON-file backend for the task store.
//
// Records and lists live as pretty-printed JSON under a data directory
// (`~/.remsync` unless overridden). Loads are guarded against oversized
// or absurdly large files before deserializing.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::record::{Reminder, ReminderList};
use crate::store::{StoreError, TaskStore};

const DATA_DIR: &str = ".remsync";
const REMINDERS_FILE: &str = "reminders.json";
const LISTS_FILE: &str = "lists.json";
// Size and item guards applied before deserializing store files (10MB).
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const MAX_ITEMS: usize = 10_000;

pub struct JsonStore {
    data_dir: PathBuf,
    default_list_title: String,
    access_granted: bool,
}

impl JsonStore {
    /// Store rooted in the user's home directory.
    pub fn open(default_list_title: &str) -> Result<Self, StoreError> {
        let home = dirs::home_dir()
            .ok_or_else(|| StoreError::AccessDenied("could not find home directory".into()))?;
        Ok(Self::at_dir(home.join(DATA_DIR), default_list_title))
    }

    /// Store rooted at an explicit directory (config override, tests).
    pub fn at_dir(data_dir: impl Into<PathBuf>, default_list_title: &str) -> Self {
        Self {
            data_dir: data_dir.into(),
            default_list_title: default_list_title.to_string(),
            access_granted: false,
        }
    }

    fn load_items<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>, StoreError> {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let metadata = std::fs::metadata(&path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(StoreError::Corrupt(format!(
                "{} exceeds the size limit",
                filename
            )));
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| StoreError::Corrupt(format!("failed to parse {}: {}", filename, e)))?;

        if let Some(array) = json_value.as_array() {
            if array.len() > MAX_ITEMS {
                return Err(StoreError::Corrupt(format!(
                    "too many items in {} (maximum {})",
                    filename, MAX_ITEMS
                )));
            }
        }

        serde_json::from_value(json_value)
            .map_err(|e| StoreError::Corrupt(format!("failed to deserialize {}: {}", filename, e)))
    }

    fn save_items<T: Serialize>(&self, filename: &str, items: &[T]) -> Result<(), StoreError> {
        let path = self.data_dir.join(filename);
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, items)
            .map_err(|e| StoreError::Save(e.to_string()))?;
        Ok(())
    }

    fn ensure_access(&self) -> Result<(), StoreError> {
        if self.access_granted {
            Ok(())
        } else {
            Err(StoreError::AccessDenied("access was not requested".into()))
        }
    }
}

#[async_trait]
impl TaskStore for JsonStore {
    async fn request_access(&mut self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| {
            StoreError::AccessDenied(format!(
                "cannot create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        // A store with no lists yet gets its default list seeded so the
        // first run has somewhere to put new reminders.
        let lists: Vec<ReminderList> = self.load_items(LISTS_FILE)?;
        if lists.is_empty() {
            info!("Seeding default list '{}'", self.default_list_title);
            let seeded = vec![ReminderList::new(&self.default_list_title, true)];
            self.save_items(LISTS_FILE, &seeded)?;
        }

        self.access_granted = true;
        debug!("Store access granted at {}", self.data_dir.display());
        Ok(())
    }

    async fn all_records(&self) -> Result<Vec<Reminder>, StoreError> {
        self.ensure_access()?;
        self.load_items(REMINDERS_FILE)
    }

    async fn lists(&self) -> Result<Vec<ReminderList>, StoreError> {
        self.ensure_access()?;
        self.load_items(LISTS_FILE)
    }

    async fn default_list(&self) -> Result<Option<ReminderList>, StoreError> {
        let lists = self.lists().await?;
        Ok(lists
            .iter()
            .find(|l| l.default)
            .or_else(|| lists.first())
            .cloned())
    }

    fn new_record(&self, list: &ReminderList) -> Reminder {
        Reminder::new(&list.id)
    }

    async fn save(&mut self, record: &Reminder) -> Result<(), StoreError> {
        self.ensure_access()?;
        let mut records: Vec<Reminder> = self.load_items(REMINDERS_FILE)?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.save_items(REMINDERS_FILE, &records)
    }
}
