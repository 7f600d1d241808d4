//! Maps the logical CSV columns onto positions in the header row.

/// Positions of the recognized columns in a header row.
///
/// `None` means the column is absent; downstream mapping skips that
/// attribute rather than failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnIndex {
    pub url: Option<usize>,
    pub task: Option<usize>,
    pub status: Option<usize>,
    pub priority: Option<usize>,
    pub due_date: Option<usize>,
}

impl ColumnIndex {
    /// Resolve the recognized column names against parsed header fields.
    ///
    /// Matching is case-insensitive and accepts both the quoted form
    /// (`"url"`) and the bare form (`url`), because the line parser may
    /// or may not have consumed surrounding quotes as toggle delimiters.
    pub fn resolve(header_fields: &[String]) -> Self {
        let lowered: Vec<String> = header_fields.iter().map(|f| f.to_lowercase()).collect();
        Self {
            url: find_column(&lowered, "url"),
            task: find_column(&lowered, "task"),
            status: find_column(&lowered, "status"),
            priority: find_column(&lowered, "priority"),
            due_date: find_column(&lowered, "duedate"),
        }
    }

    /// One-line summary in the shape users see on every run, rendering
    /// absent columns as -1.
    pub fn summary(&self) -> String {
        format!(
            "Found columns - URL: {}, Task: {}, Status: {}, Priority: {}, Due Date: {}",
            display_index(self.url),
            display_index(self.task),
            display_index(self.status),
            display_index(self.priority),
            display_index(self.due_date)
        )
    }
}

fn find_column(lowered: &[String], name: &str) -> Option<usize> {
    let quoted = format!("\"{}\"", name);
    lowered
        .iter()
        .position(|f| f == &quoted)
        .or_else(|| lowered.iter().position(|f| f == name))
}

fn display_index(index: Option<usize>) -> i64 {
    index.map_or(-1, |i| i as i64)
}
