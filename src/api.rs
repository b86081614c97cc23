//! # The VirtualFile Facade
//!
//! [`VirtualFile`] is the entry point for all operations: one handle per
//! mapping file, owning its own record sequence. There is no process-wide
//! state; two handles on the same path are independent, and if both save,
//! the last writer wins.
//!
//! ## Generic Over FileGateway
//!
//! `VirtualFile<G: FileGateway>` is generic over the file-access backend:
//! - Production: `VirtualFile<FsGateway>` via [`VirtualFile::open`]
//! - Testing: `VirtualFile<InMemoryGateway>` via [`VirtualFile::with_gateway`]
//!
//! ## Sequencing
//!
//! All calls return synchronously; observe each result before issuing a
//! causally dependent call. A successful mutation followed by a failed
//! `save` leaves memory and disk diverged — the error is surfaced and the
//! caller decides whether to retry the save or discard by reloading.

use crate::error::Result;
use crate::gateway::fs::FsGateway;
use crate::gateway::FileGateway;
use crate::model::Record;
use crate::parse::parse;
use crate::serialize::serialize;
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

/// A handle on one mapping file and its in-memory record sequence.
pub struct VirtualFile<G: FileGateway> {
    path: PathBuf,
    gateway: G,
    store: RecordStore,
}

impl VirtualFile<FsGateway> {
    /// Open a handle on a mapping file on disk. No I/O happens until
    /// [`load`](Self::load) or [`save`](Self::save).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_gateway(path, FsGateway::new())
    }
}

impl<G: FileGateway> VirtualFile<G> {
    pub fn with_gateway(path: impl Into<PathBuf>, gateway: G) -> Self {
        Self {
            path: path.into(),
            gateway,
            store: RecordStore::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// Read the file, parse it, and wholesale-replace the in-memory
    /// sequence. On an I/O failure the prior sequence is left untouched.
    pub fn load(&mut self) -> Result<&[Record]> {
        let text = self.gateway.read(&self.path)?;
        self.store.replace(parse(&text));
        Ok(self.store.records())
    }

    /// Serialize the current sequence and overwrite the file in one write,
    /// creating it if absent. Not atomic; see [`crate::gateway`].
    pub fn save(&mut self) -> Result<()> {
        let text = serialize(self.store.records());
        self.gateway.write(&self.path, &text)
    }

    /// Append a new entry in memory only. Pair with [`save`](Self::save),
    /// or use [`append_and_save`](Self::append_and_save).
    pub fn append(&mut self, from: impl Into<String>, to: impl Into<String>) -> &Record {
        self.store.append(from, to)
    }

    /// Update `from`/`to` of the record at `index` in memory only.
    pub fn update(
        &mut self,
        index: usize,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<&Record> {
        self.store.update(index, from, to)
    }

    /// Delete the record at `index` in memory only; trailing records are
    /// renumbered.
    pub fn delete(&mut self, index: usize) -> Result<&[Record]> {
        self.store.delete(index)
    }

    /// Append an entry and persist the whole sequence.
    pub fn append_and_save(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Record> {
        let record = self.store.append(from, to).clone();
        self.save()?;
        Ok(record)
    }

    /// Update an entry and persist the whole sequence. The sequence is not
    /// mutated when `index` is out of bounds.
    pub fn update_and_save(
        &mut self,
        index: usize,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Record> {
        let record = self.store.update(index, from, to)?.clone();
        self.save()?;
        Ok(record)
    }

    /// Delete a record and persist the whole sequence. The sequence is not
    /// mutated when `index` is out of bounds.
    pub fn delete_and_save(&mut self, index: usize) -> Result<()> {
        self.store.delete(index)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VirtmapError;
    use crate::gateway::memory::{fixtures, InMemoryGateway};
    use crate::model::RecordKind;
    use std::io;

    const PATH: &str = "/etc/postfix/virtual";

    fn canonical_file() -> VirtualFile<InMemoryGateway> {
        VirtualFile::with_gateway(PATH, fixtures::canonical_gateway(PATH))
    }

    fn file_contents(file: &VirtualFile<InMemoryGateway>) -> Option<String> {
        // Peek through the gateway the handle owns.
        file.gateway.contents(file.path()).map(str::to_string)
    }

    #[test]
    fn load_parses_the_canonical_sample() {
        let mut file = canonical_file();
        let records = file.load().unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].kind, RecordKind::Comment("# /etc/postfix/virtual".into()));
        assert_eq!(records[3].kind, RecordKind::Comment(" ".into()));
        assert_eq!(
            records[4].kind,
            RecordKind::Entry {
                from: "test@anotherdomain.com".into(),
                to: Some("someone@gmail.com".into()),
                comment: Some("# Forward one address to one address".into()),
            }
        );
        assert_eq!(
            records[5].kind,
            RecordKind::Entry {
                from: "@domain.com".into(),
                to: Some("another@me.com".into()),
                comment: Some("# Forward whole domain to one address".into()),
            }
        );
    }

    #[test]
    fn append_save_and_reload_extends_the_sequence() {
        let mut file = canonical_file();
        file.load().unwrap();
        let appended = file.append_and_save("why", "not").unwrap();
        assert_eq!(appended, Record::entry(6, "why", "not"));

        let records = file.load().unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[6], Record::entry(6, "why", "not"));

        // The first six records are untouched by the append.
        let again = fixtures::canonical_gateway(PATH);
        let mut pristine = VirtualFile::with_gateway(PATH, again);
        assert_eq!(&file.records()[..6], pristine.load().unwrap());
    }

    #[test]
    fn append_then_delete_restores_the_original_bytes() {
        let mut file = canonical_file();
        file.load().unwrap();
        file.append_and_save("why", "not").unwrap();
        file.delete_and_save(6).unwrap();

        assert_eq!(file_contents(&file).unwrap(), fixtures::canonical_text());
    }

    #[test]
    fn load_failure_leaves_prior_records_untouched() {
        let mut file = canonical_file();
        file.load().unwrap();
        let before = file.records().to_vec();

        file.path = PathBuf::from("/no/such/file");
        let err = file.load().unwrap_err();
        match err {
            VirtmapError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotFound),
            other => panic!("expected io error, got {:?}", other),
        }
        assert_eq!(file.records(), before.as_slice());
    }

    #[test]
    fn update_and_save_preserves_untouched_records() {
        let mut file = canonical_file();
        file.load().unwrap();
        let header = file.records()[0].clone();

        let updated = file.update_and_save(5, "dag@x.com", "man@y.com").unwrap();
        assert_eq!(
            updated.kind,
            RecordKind::Entry {
                from: "dag@x.com".into(),
                to: Some("man@y.com".into()),
                comment: Some("# Forward whole domain to one address".into()),
            }
        );

        let records = file.load().unwrap();
        assert_eq!(records[0], header);
        assert!(matches!(&records[5].kind, RecordKind::Entry { from, .. } if from == "dag@x.com"));
    }

    #[test]
    fn out_of_bounds_mutations_do_not_touch_disk() {
        let mut file = canonical_file();
        file.load().unwrap();
        file.save().unwrap();
        let on_disk = file_contents(&file).unwrap();

        assert!(file.update_and_save(1337, "a", "b").is_err());
        assert!(file.delete_and_save(1337).is_err());
        assert_eq!(file_contents(&file).unwrap(), on_disk);
        assert_eq!(file.records().len(), 6);
    }

    #[test]
    fn save_to_fresh_path_creates_the_file() {
        let mut file = VirtualFile::with_gateway("/fresh", InMemoryGateway::new());
        file.append_and_save("trie", "to").unwrap();
        assert_eq!(file_contents(&file).unwrap(), "trie to");
    }
}
