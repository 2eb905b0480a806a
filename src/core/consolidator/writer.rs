//! Record writer for the consolidated artifact.
//!
//! Each eligible file becomes one record:
//!
//! ```text
//! >>> relative/path.rs
//! <minified content>
//! ```
//!
//! Records are appended to a single stream in the order files are
//! handed in. Nothing is escaped, so a content line that starts with
//! `>>> ` looks exactly like a header.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use crate::core::consolidator::minifier::minify;
use crate::core::error::{ConsolidateError, Result};

/// Prefix of every record header line
pub const RECORD_HEADER_PREFIX: &str = ">>> ";

/// Appends minified file records to a shared output stream
pub struct ConsolidationWriter<W: Write> {
    root: PathBuf,
    out: W,
    bytes_written: u64,
}

impl<W: Write> ConsolidationWriter<W> {
    /// Create a writer whose headers are relative to `root`
    pub fn new(root: impl Into<PathBuf>, out: W) -> Self {
        Self {
            root: root.into(),
            out,
            bytes_written: 0,
        }
    }

    /// Read, minify and append one file.
    ///
    /// Returns the number of bytes appended. A file that cannot be
    /// read or is not valid UTF-8 yields `ReadFailed` and leaves the
    /// stream untouched; a failure writing the stream is an `IoError`.
    pub fn write_file(&mut self, path: &Path) -> Result<u64> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::InvalidData {
                tracing::debug!("Non-UTF-8 file: {:?}", path);
            }
            ConsolidateError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let minified = minify(&contents);
        let record = format!(
            "{RECORD_HEADER_PREFIX}{}\n{minified}\n",
            self.relative_path(path)
        );

        self.out.write_all(record.as_bytes())?;

        let len = record.len() as u64;
        self.bytes_written += len;
        Ok(len)
    }

    /// Path of `path` relative to the root, always with `/` separators
    pub fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);

        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush the stream and hand it back
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
