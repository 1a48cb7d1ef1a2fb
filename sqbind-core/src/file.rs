use std::path::{Path, PathBuf};

use eyre::Result;

/// A validated generated file waiting to be persisted.
///
/// The engine hands the CLI a `File` only after the content passed
/// validation; writing is the last step of a run and never partial.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the target path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Generated files are always overwritten; they carry a `DO NOT EDIT`
    /// marker and are owned by the generator.
    pub fn write(&self) -> Result<WriteResult> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
}
