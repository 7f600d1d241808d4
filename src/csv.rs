//! Minimal CSV tokenization for task exports.
//
// Comma-separated with double-quote toggling only; no escaped-quote
// handling. Malformed quoting (odd quote count) leaves the toggle
// inconsistent for the rest of the line, which is accepted behavior.

/// Split one line into fields, honoring commas inside quoted sections.
///
/// A double quote flips the in-quotes flag, a comma outside quotes ends
/// the current field, everything else is content. The final field is
/// always emitted, even when empty.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    for c in line.chars() {
        match c {
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Split file content into trimmed, non-blank lines. The first entry
/// (if any) is the header row.
pub fn data_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove every double-quote character from a value, wherever it sits.
/// Intentionally not limited to a surrounding pair; this matches the
/// values the toggling parser leaves behind.
pub fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}
