//! Size-bounded splitting of the finished artifact.
//!
//! An artifact larger than the unified-size threshold is replaced by
//! numbered part files, each at most the chunk-size threshold in
//! bytes. Cuts are moved back to the nearest UTF-8 character
//! boundary (same approach as char-indexed chunking), so every part
//! is valid text on its own and concatenating the parts in order
//! gives back the original bytes.
//!
//! Splitting is best effort: a failure halfway through can leave
//! some parts written and the original still in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::SplitConfig;
use crate::core::error::{ConsolidateError, Result};
use crate::core::types::{PartFile, SplitOutcome};

/// Splits an oversized artifact into numbered parts
#[derive(Debug, Clone)]
pub struct Splitter {
    /// Artifacts at or below this size are left alone
    max_unified_size: u64,

    /// Upper bound for each part, in bytes
    max_chunk_size: usize,
}

impl Splitter {
    /// Create a splitter.
    ///
    /// # Panics
    ///
    /// Panics if `max_chunk_size` is 0.
    pub fn new(max_unified_size: u64, max_chunk_size: usize) -> Self {
        assert!(max_chunk_size > 0, "max_chunk_size must be > 0");

        Self {
            max_unified_size,
            max_chunk_size,
        }
    }

    pub fn from_config(config: &SplitConfig) -> Self {
        Self::new(
            config.max_unified_size_bytes,
            usize::try_from(config.max_chunk_size_bytes).unwrap_or(usize::MAX),
        )
    }

    /// Split `artifact` if it is larger than the unified threshold.
    ///
    /// On a split, parts are written next to the artifact and the
    /// artifact is deleted once every part exists.
    pub fn split_if_needed(&self, artifact: &Path) -> Result<SplitOutcome> {
        let size_bytes = fs::metadata(artifact)
            .map_err(|e| ConsolidateError::Split(format!("Cannot stat {artifact:?}: {e}")))?
            .len();

        if size_bytes <= self.max_unified_size {
            tracing::info!("No split needed for {:?} ({} bytes)", artifact, size_bytes);
            return Ok(SplitOutcome::Unsplit { size_bytes });
        }

        tracing::info!(
            "Artifact {:?} is {} bytes (> {}), splitting",
            artifact,
            size_bytes,
            self.max_unified_size
        );

        let text = fs::read_to_string(artifact)
            .map_err(|e| ConsolidateError::Split(format!("Cannot read {artifact:?}: {e}")))?;

        let mut parts = Vec::new();
        for (idx, chunk) in split_text(&text, self.max_chunk_size).into_iter().enumerate() {
            let path = part_path(artifact, idx + 1);
            fs::write(&path, chunk).map_err(|e| {
                ConsolidateError::Split(format!("Cannot write part {path:?}: {e}"))
            })?;

            tracing::info!("Created {:?} ({} bytes)", path, chunk.len());
            parts.push(PartFile {
                path,
                size_bytes: chunk.len() as u64,
            });
        }

        fs::remove_file(artifact).map_err(|e| {
            ConsolidateError::Split(format!("Cannot remove original {artifact:?}: {e}"))
        })?;
        tracing::info!("Removed original {:?} after split", artifact);

        Ok(SplitOutcome::Split { size_bytes, parts })
    }

    /// Delete part files left over from an earlier run.
    ///
    /// Removes `part0001`, `part0002`, ... until the first gap, and
    /// returns how many were removed.
    pub fn remove_stale_parts(&self, artifact: &Path) -> Result<usize> {
        let mut removed = 0;
        loop {
            let path = part_path(artifact, removed + 1);
            if !path.is_file() {
                break;
            }
            fs::remove_file(&path)?;
            tracing::debug!("Removed stale part {:?}", path);
            removed += 1;
        }
        Ok(removed)
    }
}

/// Slice `text` into pieces of at most `max_bytes` bytes.
///
/// Each cut is moved back to a character boundary. A single
/// character wider than `max_bytes` is emitted whole rather than
/// split.
pub fn split_text(text: &str, max_bytes: usize) -> Vec<&str> {
    let max_bytes = max_bytes.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + max_bytes).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            // Character wider than the limit, advance past it
            end = start + 1;
            while !text.is_char_boundary(end) {
                end += 1;
            }
        }

        chunks.push(&text[start..end]);
        start = end;
    }

    chunks
}

/// Path of the `part`-th (1-based) part for `artifact`.
///
/// A trailing `.txt` is dropped from the artifact name before
/// `.partNNNN.txt` is appended, so `code.min.txt` becomes
/// `code.min.part0001.txt`.
pub fn part_path(artifact: &Path, part: usize) -> PathBuf {
    let name = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(".txt").unwrap_or(&name);

    artifact.with_file_name(format!("{base}.part{part:04}.txt"))
}
