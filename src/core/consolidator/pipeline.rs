//! Consolidation pipeline orchestration.
//!
//! Coordinates one run end to end:
//! 1. Create the artifact in the root
//! 2. Walk the tree, appending a record per eligible file
//! 3. Split the artifact if it is over the size threshold

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::consolidator::{ConsolidationWriter, Splitter, TreeWalker};
use crate::core::error::{ConsolidateError, Result};
use crate::core::types::ConsolidationReport;

/// Orchestrates the consolidate-then-split run
pub struct ConsolidationPipeline {
    config: Config,
    walker: TreeWalker,
    splitter: Splitter,
}

impl ConsolidationPipeline {
    /// Create a pipeline from a validated configuration.
    ///
    /// The artifact's own name is always added to the exclusion set
    /// so a run never reads the file it is writing.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut consolidation = config.consolidation.clone();
        if !consolidation
            .excluded_names
            .contains(&consolidation.output_file)
        {
            consolidation
                .excluded_names
                .push(consolidation.output_file.clone());
        }

        let walker = TreeWalker::from_config(&consolidation);
        let splitter = Splitter::from_config(&config.split);

        Ok(Self {
            config,
            walker,
            splitter,
        })
    }

    /// Consolidate `root` into its artifact and split it if needed.
    ///
    /// Unreadable files and directories are counted in the report.
    /// An invalid root, failure to create or write the artifact, or
    /// a split failure aborts the run.
    pub fn run(&self, root: &Path) -> Result<ConsolidationReport> {
        let start = Instant::now();

        if !root.is_dir() {
            return Err(ConsolidateError::InvalidPath(format!(
                "Root directory not found: {}",
                root.display()
            )));
        }

        let output_path = self.config.output_path(root);
        tracing::info!("Starting consolidation from {:?}", root);

        let stale = self.splitter.remove_stale_parts(&output_path)?;
        if stale > 0 {
            tracing::info!("Removed {} part files from a previous run", stale);
        }

        let file = File::create(&output_path).map_err(|source| ConsolidateError::OutputCreate {
            path: output_path.clone(),
            source,
        })?;

        let mut writer = ConsolidationWriter::new(root, BufWriter::new(file));
        let walk = self.walker.walk(root, &mut writer)?;
        writer.finish()?;

        tracing::info!(
            "Consolidation complete: {} files written, {} skipped, {} directories failed, \
             {} entries excluded",
            walk.files_written,
            walk.files_skipped,
            walk.dirs_failed,
            walk.entries_excluded
        );

        let split = self.splitter.split_if_needed(&output_path)?;

        Ok(ConsolidationReport {
            root: root.to_path_buf(),
            output_path,
            walk,
            split,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
