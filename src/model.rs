use serde::{Deserialize, Serialize};

/// What a single line of the mapping file means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    /// A preserved line: `#`-prefixed, empty, or whitespace-only.
    /// The raw text is kept exactly as read.
    Comment(String),
    /// A `from → to` mapping entry.
    Entry {
        from: String,
        /// Absent only for the degenerate one-token line, which the format
        /// accepts as-is rather than rejecting.
        #[serde(skip_serializing_if = "Option::is_none")]
        to: Option<String>,
        /// Trailing free text after the two address tokens.
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

/// One line of the mapping file, in original file order.
///
/// `index` always equals the record's current position in the sequence;
/// it is recomputed whenever a delete shifts later records down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub index: usize,
    pub kind: RecordKind,
}

impl Record {
    pub fn comment(index: usize, raw: impl Into<String>) -> Self {
        Self {
            index,
            kind: RecordKind::Comment(raw.into()),
        }
    }

    pub fn entry(index: usize, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            index,
            kind: RecordKind::Entry {
                from: from.into(),
                to: Some(to.into()),
                comment: None,
            },
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self.kind, RecordKind::Entry { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_json_omits_absent_fields() {
        let record = Record::entry(6, "why", "not");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "index": 6,
                "kind": { "Entry": { "from": "why", "to": "not" } }
            })
        );
    }

    #[test]
    fn comment_json_keeps_raw_text() {
        let record = Record::comment(0, "# /etc/postfix/virtual");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "index": 0,
                "kind": { "Comment": "# /etc/postfix/virtual" }
            })
        );
    }
}
