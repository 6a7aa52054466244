use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgNormError {
    // Setup
    #[error("invalid root: {0}")]
    InvalidRoot(PathBuf),

    // Traversal
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("symlink loop: {0}")]
    SymlinkLoop(PathBuf),

    #[error("IO error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(String),

    // Mutation
    #[error("failed to rename {from} to {to}")]
    Rename {
        from: PathBuf,
        to:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImgNormError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidRoot(p)
            | Self::PermissionDenied(p)
            | Self::SymlinkLoop(p)
            | Self::Io { path: p, .. }
            | Self::Rename { from: p, .. } => Some(p),
            Self::Walk(_) => None,
        }
    }

    /// Whether the run can continue after this error.
    ///
    /// Traversal errors are collected into [`Summary::errors`](crate::Summary::errors)
    /// and the walk keeps going. A bad root or a failed rename ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_) | Self::SymlinkLoop(_) | Self::Io { .. } | Self::Walk(_)
        )
    }
}

/// Why a single file could not be converted to JPEG.
///
/// Never fatal. The engine logs it, leaves the source file in place and moves on.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("could not remove source after conversion: {0}")]
    RemoveSource(#[source] std::io::Error),
}
