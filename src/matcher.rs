//! Finds the store record already tracking a URL.

use crate::record::Reminder;

/// First record whose notes contain the `URL: <value>` marker, if any.
///
/// Deliberately a linear scan over the fetched records: reminder lists
/// are human-scale and a secondary index would be overkill.
pub fn find_existing(records: &[Reminder], url: &str) -> Option<usize> {
    let marker = format!("URL: {}", url);
    records
        .iter()
        .position(|r| r.notes.as_deref().is_some_and(|n| n.contains(&marker)))
}
