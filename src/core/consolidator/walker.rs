//! Directory tree walker with literal-name pruning.
//!
//! Traverses directory trees iteratively (walkdir keeps an explicit
//! stack of open directories), prunes excluded entries before
//! descending, and hands eligible files to the writer. Symlinks are
//! followed; a link back to an ancestor is reported by walkdir as a
//! loop error. Errors listing a directory or reading a file are logged
//! and counted without stopping the walk.

use std::io::Write;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::config::ConsolidationConfig;
use crate::core::consolidator::filter::{ExclusionMatcher, ExtensionFilter};
use crate::core::consolidator::writer::ConsolidationWriter;
use crate::core::error::{ConsolidateError, Result};
use crate::core::types::WalkStats;

/// Walks a root and feeds eligible files to a `ConsolidationWriter`
#[derive(Debug, Clone)]
pub struct TreeWalker {
    filter: ExtensionFilter,
    matcher: ExclusionMatcher,

    /// Visit siblings in file-name order
    sort_entries: bool,

    /// Maximum depth below the root
    max_depth: Option<usize>,
}

impl TreeWalker {
    /// Create a walker with listing order and unbounded depth
    pub fn new(filter: ExtensionFilter, matcher: ExclusionMatcher) -> Self {
        Self {
            filter,
            matcher,
            sort_entries: false,
            max_depth: None,
        }
    }

    /// Build a walker from the consolidation settings
    pub fn from_config(config: &ConsolidationConfig) -> Self {
        Self::new(
            ExtensionFilter::new(config.allowed_extensions.clone()),
            ExclusionMatcher::new(config.excluded_names.iter().cloned()),
        )
        .with_sort_entries(config.sort_entries)
        .with_max_depth(config.max_depth)
    }

    pub fn with_sort_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walk `root`, appending a record per eligible file.
    ///
    /// Only a failure writing the output stream aborts the walk; an
    /// unreadable directory or file is counted in the returned stats.
    pub fn walk<W: Write>(
        &self,
        root: &Path,
        writer: &mut ConsolidationWriter<W>,
    ) -> Result<WalkStats> {
        let mut stats = WalkStats::default();
        let mut excluded = 0usize;

        let mut walk = WalkDir::new(root).follow_links(true);
        if self.sort_entries {
            walk = walk.sort_by_file_name();
        }
        if let Some(depth) = self.max_depth {
            walk = walk.max_depth(depth);
        }

        let entries = walk.into_iter().filter_entry(|e| {
            let keep = self.should_process_entry(e);
            if !keep {
                excluded += 1;
            }
            keep
        });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let err = ConsolidateError::DirectoryAccess {
                        path: e.path().unwrap_or(root).to_path_buf(),
                        message: e.to_string(),
                    };
                    tracing::warn!("{}", err);
                    stats.dirs_failed += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.filter.accepts(&name) {
                continue;
            }

            match writer.write_file(entry.path()) {
                Ok(bytes) => {
                    stats.files_written += 1;
                    stats.bytes_written += bytes;
                    tracing::debug!("Consolidated {:?} ({} bytes)", entry.path(), bytes);
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("{}", e);
                    stats.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        stats.entries_excluded = excluded;
        Ok(stats)
    }

    /// Determine if a directory entry should be processed
    ///
    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }

        let name = entry.file_name().to_string_lossy();
        if self.matcher.is_excluded(&name, entry.path()) {
            tracing::debug!("Skipping excluded entry: {:?}", entry.path());
            return false;
        }

        true
    }
}
