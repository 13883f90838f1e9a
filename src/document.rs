use crate::errors::RewriteError;
use crate::exec::{find_exec_calls, wrap_exec_params};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// File content loaded into memory, not yet rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

/// A document after the substitution ran; can only be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Transformed does nothing until write() is called"]
pub struct Transformed {
    path: PathBuf,
    text: String,
    calls_rewritten: usize,
    changed: bool,
}

/// Outcome of a successful [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// File that was rewritten in place
    pub file: PathBuf,
    /// Number of `tx.exec` sites that were wrapped
    pub calls_rewritten: usize,
    /// Whether the written bytes differ from what was read
    pub changed: bool,
}

impl Document {
    /// Read the whole file as text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RewriteError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RewriteError::from_read(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply the exec-params substitution across the whole buffer.
    pub fn transform(self) -> Transformed {
        let calls_rewritten = find_exec_calls(&self.text).len();
        let rewritten = match wrap_exec_params(&self.text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        let (text, changed) = match rewritten {
            Some(rewritten) => {
                let changed = rewritten != self.text;
                (rewritten, changed)
            }
            None => (self.text, false),
        };

        Transformed {
            path: self.path,
            text,
            calls_rewritten,
            changed,
        }
    }
}

impl Transformed {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn calls_rewritten(&self) -> usize {
        self.calls_rewritten
    }

    /// Truncate the original file and write the rewritten text into it.
    ///
    /// Writes even when nothing matched, so an unwritable target still fails.
    pub fn write(self) -> Result<RewriteReport, RewriteError> {
        fs::write(&self.path, self.text.as_bytes())
            .map_err(|e| RewriteError::from_write(&self.path, e))?;

        Ok(RewriteReport {
            file: self.path,
            calls_rewritten: self.calls_rewritten,
            changed: self.changed,
        })
    }
}

/// Read `path`, wrap every `tx.exec` argument list in `pqxx::params`, and
/// write the result back to the same file.
pub fn rewrite(path: impl AsRef<Path>) -> Result<RewriteReport, RewriteError> {
    Document::load(path)?.transform().write()
}
