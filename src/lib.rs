pub mod columns;
pub mod config;
pub mod csv;
pub mod dedup;
pub mod fields;
pub mod matcher;
pub mod record;
pub mod storage;
pub mod store;
pub mod sync;

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::storage::JsonStore;

/// Run one sync against the JSON-file store, configured from the user's
/// config file.
pub async fn run(csv_path: &Path, list_name: Option<&str>) -> Result<sync::SyncReport> {
    let config = config::Config::load()?;
    info!("Syncing {} into the reminder store", csv_path.display());

    let mut store = match &config.storage.data_dir {
        Some(dir) => JsonStore::at_dir(dir, config.default_list_title()),
        None => JsonStore::open(config.default_list_title())?,
    };

    sync::sync_file(&mut store, csv_path, list_name).await
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use columns::ColumnIndex;
pub use config::Config;
pub use record::{Reminder, ReminderList};
pub use store::{StoreError, TaskStore};
pub use sync::SyncReport;
