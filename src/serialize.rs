//! Ordered record sequence → raw text, the structural inverse of
//! [`crate::parse`].
//!
//! Comment records reproduce their stored line byte-for-byte, so text made
//! only of comments and blanks round-trips exactly. Entry lines are emitted
//! single-spaced regardless of how the original was spaced.

use crate::model::{Record, RecordKind};

/// Render records back to file text, joined with `\n` and no trailing
/// newline beyond the join.
pub fn serialize(records: &[Record]) -> String {
    records
        .iter()
        .map(render_line)
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_line(record: &Record) -> String {
    match &record.kind {
        RecordKind::Comment(raw) => raw.clone(),
        RecordKind::Entry { from, to, comment } => {
            let mut line = from.clone();
            if let Some(to) = to {
                line.push(' ');
                line.push_str(to);
            }
            if let Some(comment) = comment {
                line.push(' ');
                line.push_str(comment);
            }
            line
        }
    }
}
