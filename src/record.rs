use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item in the task store.
///
/// The notes field doubles as the sync key: once a record has been
/// synced from a CSV row its notes end with a `URL: <value>` line,
/// which later runs use to find it again.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reminder {
    pub id: String,
    pub list_id: String,
    pub title: String,
    pub notes: Option<String>,
    pub priority: Option<i64>,
    pub due_date: Option<NaiveDate>,
}

impl Reminder {
    /// Fresh, empty record attached to a list. Not persisted until saved.
    pub fn new(list_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            list_id: list_id.to_string(),
            title: String::new(),
            notes: None,
            priority: None,
            due_date: None,
        }
    }
}

/// A named collection of reminders, analogous to a folder.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReminderList {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub default: bool,
}

impl ReminderList {
    pub fn new(title: &str, default: bool) -> Self {
        Self { id: Uuid::new_v4().to_string(), title: title.to_string(), default }
    }
}
