use super::FileGateway;
use crate::error::Result;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory gateway for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    files: HashMap<PathBuf, String>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file before handing the gateway to a `VirtualFile`.
    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }

    /// Inspect what a save wrote, without going through a load.
    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl FileGateway for InMemoryGateway {
    fn read(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
            .into()
        })
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The canonical `/etc/postfix/virtual` sample: three `#` headers, one
    /// whitespace-only line, and two commented entries. No trailing newline.
    pub fn canonical_text() -> String {
        [
            "# /etc/postfix/virtual",
            "# You have to run postmap virtual after changing this file",
            "# It'll write out /etc/postfix/virtual.db",
            " ",
            "test@anotherdomain.com someone@gmail.com # Forward one address to one address",
            "@domain.com another@me.com # Forward whole domain to one address",
        ]
        .join("\n")
    }

    /// A gateway pre-seeded with the canonical sample at `path`.
    pub fn canonical_gateway(path: impl Into<PathBuf>) -> InMemoryGateway {
        InMemoryGateway::new().with_file(path, canonical_text())
    }
}
