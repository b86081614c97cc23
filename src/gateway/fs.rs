use super::FileGateway;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Production gateway backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsGateway;

impl FsGateway {
    pub fn new() -> Self {
        Self
    }
}

impl FileGateway for FsGateway {
    fn read(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text)?;
        Ok(())
    }
}
