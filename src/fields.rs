//! Maps a CSV row onto a reminder's attributes.
//
// Every rule is independently optional: a column that is absent, or an
// index past the row's end, simply leaves that attribute alone. Bad
// priority or date values are ignored silently; the attribute keeps
// whatever it already held.

use chrono::NaiveDate;
use log::debug;

use crate::columns::ColumnIndex;
use crate::csv::strip_quotes;
use crate::record::Reminder;

const DUE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Apply the row's values onto the record in place.
///
/// The notes are rebuilt from scratch: an optional `Status:` line
/// followed by the mandatory `URL:` line, which is both payload and
/// the matching key for future runs.
pub fn apply_fields(record: &mut Reminder, fields: &[String], index: &ColumnIndex, url: &str) {
    if let Some(value) = column_value(fields, index.task) {
        record.title = value;
    }

    let mut notes = String::new();
    if let Some(status) = column_value(fields, index.status) {
        notes.push_str(&format!("Status: {}\n", status));
    }
    notes.push_str(&format!("URL: {}", url));
    record.notes = Some(notes);

    if let Some(value) = column_value(fields, index.priority) {
        match value.parse::<i64>() {
            Ok(priority) => record.priority = Some(priority),
            Err(_) => debug!("Ignoring non-numeric priority value: {:?}", value),
        }
    }

    if let Some(value) = column_value(fields, index.due_date) {
        match NaiveDate::parse_from_str(&value, DUE_DATE_FORMAT) {
            Ok(date) => record.due_date = Some(date),
            Err(_) => debug!("Ignoring unparseable due date: {:?}", value),
        }
    }
}

fn column_value(fields: &[String], index: Option<usize>) -> Option<String> {
    let i = index?;
    fields.get(i).map(|v| strip_quotes(v))
}
