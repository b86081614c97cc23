use thiserror::Error;

#[derive(Error, Debug)]
pub enum VirtmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, VirtmapError>;
