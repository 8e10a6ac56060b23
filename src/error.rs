use std::path::PathBuf;
use thiserror::Error;

/// Failures that own a dedicated process exit code.
///
/// Everything else propagates as a plain `anyhow` error and exits 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid file: {}", .0.display())]
    InvalidFile(PathBuf),

    #[error("invalid archive directory: {}", .0.display())]
    InvalidArchiveDir(PathBuf),

    #[error("cannot archive inside the archive itself: {}", .0.display())]
    InsideArchive(PathBuf),

    #[error("archived file not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    #[error("neither curl nor wget is available")]
    NoTransferTool,

    #[error("download failed: {0}")]
    TransferFailed(String),

    #[error("install failed: {0}")]
    InstallFailed(String),

    #[error("nothing to uninstall")]
    UninstallTargetMissing,
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UninstallTargetMissing => 1,
            Error::NoTransferTool | Error::TransferFailed(_) | Error::InstallFailed(_) => 2,
            Error::InvalidFile(_) => 3,
            Error::InvalidArchiveDir(_) => 4,
            Error::InsideArchive(_) => 5,
            Error::EntryNotFound(_) => 6,
        }
    }
}
