// Test helper functions

use codepack::core::config::Config;
use codepack::core::consolidator::ConsolidationPipeline;
use codepack::core::types::ConsolidationReport;
use std::path::{Path, PathBuf};

/// Path of the default artifact inside `root`
#[allow(dead_code)]
pub fn artifact_path(root: &Path) -> PathBuf {
    root.join("consolidated_code.min.txt")
}

/// Default config with sorted traversal for deterministic output
#[allow(dead_code)]
pub fn sorted_config() -> Config {
    let mut config = Config::default();
    config.consolidation.sort_entries = true;
    config
}

/// Sorted config with custom split thresholds
#[allow(dead_code)]
pub fn config_with_thresholds(max_unified: u64, max_chunk: u64) -> Config {
    let mut config = sorted_config();
    config.split.max_unified_size_bytes = max_unified;
    config.split.max_chunk_size_bytes = max_chunk;
    config
}

/// Run the pipeline over `root` with sorted default settings
#[allow(dead_code)]
pub fn run_default(root: &Path) -> ConsolidationReport {
    ConsolidationPipeline::new(sorted_config())
        .expect("default config is valid")
        .run(root)
        .expect("consolidation failed")
}

/// Split an artifact into (relative path, body) records
#[allow(dead_code)]
pub fn parse_records(artifact: &str) -> Vec<(String, String)> {
    let mut records: Vec<(String, String)> = Vec::new();
    for line in artifact.lines() {
        if let Some(path) = line.strip_prefix(">>> ") {
            records.push((path.to_string(), String::new()));
        } else if let Some((_, body)) = records.last_mut() {
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(line);
        }
    }
    records
}
