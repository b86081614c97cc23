//! # File Gateway
//!
//! This module defines the file-access abstraction. The [`FileGateway`]
//! trait is the only seam through which the crate touches a filesystem.
//!
//! ## Design Rationale
//!
//! File access is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryGateway` (no filesystem needed)
//! - Keep the parse/mutate/serialize engine **decoupled** from I/O details
//!
//! ## Implementations
//!
//! - [`fs::FsGateway`]: Production gateway over `std::fs`. Whole-file reads
//!   and whole-file overwriting writes, nothing else.
//! - [`memory::InMemoryGateway`]: A `HashMap` of path → contents for fast,
//!   isolated tests, plus canonical fixtures behind the `test_utils`
//!   feature.
//!
//! ## Consistency Model
//!
//! A write replaces the target file's entire content in one call and is
//! **not atomic**: a mid-write failure can leave the file partially written.
//! There is no temp-file/rename step, no fsync discipline, and no advisory
//! locking between handles; when two handles race on one path the last
//! writer wins. Callers needing stronger guarantees must layer them above
//! this trait.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for reading and writing one mapping file.
pub trait FileGateway {
    /// Read the full file content as UTF-8 text.
    fn read(&self, path: &Path) -> Result<String>;

    /// Overwrite the full file content in a single write, creating the file
    /// if it does not exist.
    fn write(&mut self, path: &Path, text: &str) -> Result<()>;
}
