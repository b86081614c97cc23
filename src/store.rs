//! The mutation engine: an owned, ordered record sequence with positional
//! addressing.
//!
//! All operations are plain state transitions, no I/O. Validation precedes
//! mutation, so a failed `update` or `delete` leaves the sequence exactly as
//! it was.

use crate::error::{Result, VirtmapError};
use crate::model::{Record, RecordKind};

/// Owns the ordered sequence of records for one mapping file.
///
/// Records are addressed by 0-based position. `delete` renumbers everything
/// after the removed record, so indices held across a structural mutation
/// are stale; re-fetch instead of reusing them.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Wholesale replacement of the sequence; only the load path uses this.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Append a new entry at the tail. Always succeeds; the new record's
    /// index is the prior length.
    pub fn append(&mut self, from: impl Into<String>, to: impl Into<String>) -> &Record {
        let index = self.records.len();
        self.records.push(Record::entry(index, from, to));
        &self.records[index]
    }

    /// Replace `from`/`to` of the record at `index`, leaving its trailing
    /// comment untouched. Updating a comment line turns it into an entry;
    /// the raw line text is kept as the entry's trailing comment.
    pub fn update(
        &mut self,
        index: usize,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<&Record> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(VirtmapError::IndexOutOfBounds { index, len })?;

        let comment = match &record.kind {
            RecordKind::Entry { comment, .. } => comment.clone(),
            RecordKind::Comment(raw) => (!raw.is_empty()).then(|| raw.clone()),
        };
        record.kind = RecordKind::Entry {
            from: from.into(),
            to: Some(to.into()),
            comment,
        };

        Ok(&self.records[index])
    }

    /// Remove the record at `index` and renumber everything after it so
    /// indices stay contiguous.
    pub fn delete(&mut self, index: usize) -> Result<&[Record]> {
        if index >= self.records.len() {
            return Err(VirtmapError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            });
        }

        self.records.remove(index);
        for (i, record) in self.records.iter_mut().enumerate() {
            record.index = i;
        }

        Ok(&self.records)
    }
}
