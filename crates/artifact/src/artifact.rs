//! The served artifact and its opened form.
//!
//! [`ArtifactFile`] is resolved once at startup and shared by every request. Each download calls
//! [`ArtifactFile::open`], which yields an [`OpenedArtifact`] holding the file handle together
//! with the metadata read from that same handle, so the length advertised to the client always
//! matches the bytes that will be streamed.

use crate::{ArtifactError, ArtifactResult, DEFAULT_ARTIFACT_PATH, DOWNLOAD_NAME};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs::File;

/// The artifact file offered for download
///
/// Holds the on-disk location and the friendly name the client is told to save it under.
/// Both are fixed for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactFile {
    path: PathBuf,
    download_name: String,
}

impl ArtifactFile {
    /// Creates an artifact served from `path` under the given download name.
    pub fn new(path: impl Into<PathBuf>, download_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            download_name: download_name.into(),
        }
    }

    /// Creates an artifact served from `path` under the standard download name.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DOWNLOAD_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn download_name(&self) -> &str {
        &self.download_name
    }

    /// Value for the `Content-Disposition` header.
    ///
    /// Always an attachment named after [`Self::download_name`], never the on-disk filename.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.download_name)
    }

    /// MIME type guessed from the download name, falling back to `application/octet-stream`.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.download_name)
            .first_or_octet_stream()
            .to_string()
    }

    /// Opens the artifact for a single download.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError` if:
    /// - nothing exists at the path (`NotFound`)
    /// - the path is a directory or other non-regular file (`NotAFile`)
    /// - the file cannot be opened or its metadata read (`Io`)
    pub async fn open(&self) -> ArtifactResult<OpenedArtifact> {
        let file = File::open(&self.path).await.map_err(|e| self.io_error(e))?;
        let metadata = file.metadata().await.map_err(|e| self.io_error(e))?;

        if !metadata.is_file() {
            return Err(ArtifactError::NotAFile(self.path.clone()));
        }

        Ok(OpenedArtifact {
            file,
            len: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }

    fn io_error(&self, source: std::io::Error) -> ArtifactError {
        match source.kind() {
            ErrorKind::NotFound => ArtifactError::NotFound(self.path.clone()),
            _ => ArtifactError::Io {
                path: self.path.clone(),
                source,
            },
        }
    }
}

impl Default for ArtifactFile {
    fn default() -> Self {
        Self::at(DEFAULT_ARTIFACT_PATH)
    }
}

/// An artifact opened and ready to stream
#[derive(Debug)]
pub struct OpenedArtifact {
    file: File,
    len: u64,
    modified: Option<SystemTime>,
}

impl OpenedArtifact {
    /// Size of the file in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last modification time, if the platform reports one.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    pub fn into_file(self) -> File {
        self.file
    }
}
