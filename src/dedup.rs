//! Last-write-wins deduplication over the data rows.
//
// The CSV is treated as append-only, so the row closest to the end of
// the file is the authoritative version of a URL. Scanning in reverse
// with a seen-set keeps exactly that row.

use std::collections::HashSet;

use crate::csv::strip_quotes;

/// A data row that survived deduplication, paired with its extracted
/// (quote-stripped) URL key.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncRow {
    pub url: String,
    pub fields: Vec<String>,
}

/// Reduce the data rows to the most recent occurrence of each URL.
///
/// Rows are visited in reverse file order; the first sighting of a URL
/// wins and earlier (older) rows with the same URL are skipped. Rows
/// where the URL column is absent or out of range are dropped entirely,
/// with a progress line, and count as neither processed nor an error.
/// Output order is the visit order (reverse of the file).
pub fn latest_unique_rows(rows: Vec<Vec<String>>, url_index: Option<usize>) -> Vec<SyncRow> {
    let mut processed_urls: HashSet<String> = HashSet::new();
    let mut survivors = Vec::new();

    for fields in rows.into_iter().rev() {
        let url = match url_index {
            Some(i) if i < fields.len() => strip_quotes(&fields[i]),
            _ => {
                println!("Error: URL column not found or invalid");
                continue;
            }
        };

        if processed_urls.contains(&url) {
            println!("Skipping older entry for URL: {}", url);
            continue;
        }
        processed_urls.insert(url.clone());
        survivors.push(SyncRow { url, fields });
    }
    survivors
}
