//! Raw text → ordered record sequence.
//!
//! Parsing is total: no input is rejected. Lines that don't look like
//! entries are classified as comments and preserved verbatim, and malformed
//! entry lines (a single token) are accepted with `to` absent.

use crate::model::{Record, RecordKind};

/// Parse mapping-file text into records, one per line, indexed in file order.
pub fn parse(text: &str) -> Vec<Record> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| Record {
            index,
            kind: classify(line),
        })
        .collect()
}

fn classify(line: &str) -> RecordKind {
    // Empty and whitespace-only lines are comments too; `all` on an empty
    // iterator is true, which covers the empty string.
    if line.starts_with('#') || line.chars().all(char::is_whitespace) {
        return RecordKind::Comment(line.to_string());
    }

    let mut tokens = line.split_whitespace();
    let from = tokens.next().unwrap_or_default().to_string();
    let to = tokens.next().map(str::to_string);

    // Whatever trails the two address tokens is free text. Rejoining with
    // single spaces makes entry-line round-trips lossy for irregular
    // spacing, which the format accepts.
    let rest: Vec<&str> = tokens.collect();
    let comment = (!rest.is_empty()).then(|| rest.join(" "));

    RecordKind::Entry { from, to, comment }
}
