//! Whole-file load and save for the rewrite pipeline.
//!
//! Files are read completely into memory and, when persisted, overwritten in
//! one write. There is no backup and no atomic rename.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::errors::{Result, RethemeError};

/// Text file access used by the pipeline
pub struct FileStore;

impl FileStore {
    /// Read a source file as text with newlines normalised to `\n`.
    ///
    /// Invalid UTF-8 is an error that aborts the run.
    pub fn load(path: &Path) -> Result<String> {
        let raw = fs::read_to_string(path).map_err(|e| RethemeError::io_at("read", path, e))?;
        Ok(normalize_newlines(raw))
    }

    /// Overwrite a source file with `content`.
    pub fn save(path: &Path, content: &str) -> Result<()> {
        debug!("Writing {} bytes to {}", content.len(), path.display());
        fs::write(path, content).map_err(|e| RethemeError::io_at("write", path, e))
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
