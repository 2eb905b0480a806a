//! Core data types for codepack.
//!
//! Outcome records returned by the walker, splitter and pipeline. They
//! are plain data so callers (the CLI, tests) can assert on what
//! happened instead of scraping console output.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Statistics from a walk over one root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkStats {
    /// Files minified and appended to the artifact
    pub files_written: usize,

    /// Eligible files that could not be read or decoded
    pub files_skipped: usize,

    /// Entries walkdir could not resolve: unlistable directories,
    /// broken symlinks and symlink loops (subtree abandoned)
    pub dirs_failed: usize,

    /// Entries pruned by the exclusion set
    pub entries_excluded: usize,

    /// Bytes appended to the artifact
    pub bytes_written: u64,
}

/// One part file produced by the splitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartFile {
    /// Location of the part on disk
    pub path: PathBuf,

    /// Part size in bytes
    pub size_bytes: u64,
}

/// What the splitter did with the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SplitOutcome {
    /// Artifact was within the threshold and left as is
    Unsplit { size_bytes: u64 },

    /// Artifact was replaced by numbered parts
    Split { size_bytes: u64, parts: Vec<PartFile> },
}

impl SplitOutcome {
    /// Size of the artifact before any split
    pub fn size_bytes(&self) -> u64 {
        match self {
            SplitOutcome::Unsplit { size_bytes } | SplitOutcome::Split { size_bytes, .. } => {
                *size_bytes
            }
        }
    }

    /// Part files, empty when no split happened
    pub fn parts(&self) -> &[PartFile] {
        match self {
            SplitOutcome::Unsplit { .. } => &[],
            SplitOutcome::Split { parts, .. } => parts,
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, SplitOutcome::Split { .. })
    }
}

/// Result of a complete consolidate-then-split run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationReport {
    /// Walk root
    pub root: PathBuf,

    /// Artifact path (may no longer exist if split)
    pub output_path: PathBuf,

    pub walk: WalkStats,

    pub split: SplitOutcome,

    /// Total run duration in milliseconds
    pub duration_ms: u64,
}
