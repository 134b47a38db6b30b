use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use shortlist_logging::shortlist_info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::DownloadArtifact;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes `{dir}/{filename}` through a temp file in the same directory, then
/// renames it into place. A failed write leaves no partial file behind.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

/// Where finished downloads go.
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, artifact: &DownloadArtifact) -> Result<PathBuf, PersistError>;
}

/// Saves downloads as files in one directory, replacing same-named files.
#[derive(Debug, Clone)]
pub struct DirectoryDownloadSink {
    writer: AtomicFileWriter,
}

impl DirectoryDownloadSink {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }
}

impl DownloadSink for DirectoryDownloadSink {
    fn deliver(&self, artifact: &DownloadArtifact) -> Result<PathBuf, PersistError> {
        let path = self
            .writer
            .write(&artifact.filename, artifact.body.as_bytes())?;
        shortlist_info!(
            "delivered {} ({}, {} bytes) to {:?}",
            artifact.filename,
            artifact.content_type,
            artifact.body.len(),
            path
        );
        Ok(path)
    }
}
