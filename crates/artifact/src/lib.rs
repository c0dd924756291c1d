//! # APK Artifact
//!
//! Read-only access to the release APK that the download server hands out.
//!
//! The artifact is produced by an external mobile build and lives at a fixed path relative to
//! the working directory. This crate never writes, moves or deletes it; it only opens the file
//! for a single download and reports why that failed when it does.
//!
//! ## Example Usage
//!
//! ```no_run
//! use apk_artifact::ArtifactFile;
//!
//! # async fn run() -> Result<(), apk_artifact::ArtifactError> {
//! let artifact = ArtifactFile::default();
//! let opened = artifact.open().await?;
//! println!("{} bytes ready as {}", opened.len(), artifact.download_name());
//! # Ok(())
//! # }
//! ```

mod artifact;
mod constants;

pub use artifact::{ArtifactFile, OpenedArtifact};
pub use constants::{DEFAULT_ARTIFACT_PATH, DOWNLOAD_NAME};

use std::path::PathBuf;

/// Errors that can occur while opening the artifact
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Nothing exists at the artifact path
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Something exists at the artifact path but it is not a regular file
    #[error("artifact is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The artifact exists but could not be opened or inspected
    #[error("failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArtifactError {
    /// Whether the failure means the artifact is absent rather than unreadable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NotAFile(_))
    }
}

/// Result type for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;
