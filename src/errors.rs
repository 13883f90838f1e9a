use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    /// Classify a read failure. Missing files get their own variant.
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            RewriteError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RewriteError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn from_write(path: &Path, source: io::Error) -> Self {
        RewriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the failed operation was targeting.
    pub fn path(&self) -> &Path {
        match self {
            RewriteError::FileNotFound { path } | RewriteError::Io { path, .. } => path,
        }
    }
}
