//! Where configuration bytes come from

use std::fs;
use std::io;
use std::path::PathBuf;

/// The configuration source could not be read at all
#[derive(thiserror::Error, Debug)]
#[error("configuration source {} unavailable: {source}", .path.display())]
pub struct SourceUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Anything that can hand over the raw configuration text
pub trait ByteSource {
    fn read_bytes(&self) -> Result<Vec<u8>, SourceUnavailable>;
}

/// Reads the whole configuration file in one go
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ByteSource for FileSource {
    fn read_bytes(&self) -> Result<Vec<u8>, SourceUnavailable> {
        fs::read(&self.path).map_err(|source| SourceUnavailable {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory text, handy for tests and embedded defaults
impl ByteSource for &str {
    fn read_bytes(&self) -> Result<Vec<u8>, SourceUnavailable> {
        Ok(self.as_bytes().to_vec())
    }
}
