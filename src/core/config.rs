//! Configuration management for codepack.
//!
//! This module handles loading configuration from TOML files and
//! environment variables. Every setting has a default, and the
//! defaults reproduce the stock behaviour: the same extension list,
//! exclusion list and size thresholds used when no config exists.

use crate::core::error::{ConsolidateError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project config file looked up in the root
pub const PROJECT_CONFIG_FILE: &str = "codepack.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub consolidation: ConsolidationConfig,
    #[serde(default)]
    pub split: SplitConfig,
}

/// What gets walked and where the artifact goes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsolidationConfig {
    /// Literal filename suffixes that make a file eligible
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Literal file/directory names never traversed or included
    #[serde(default = "default_excluded_names")]
    pub excluded_names: Vec<String>,

    /// Artifact file name, created in the walk root
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Visit siblings in file-name order instead of listing order
    #[serde(default)]
    pub sort_entries: bool,

    /// Maximum descent below the root (unbounded when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Size thresholds for the splitter
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitConfig {
    /// Artifacts at or below this size are left alone
    #[serde(default = "default_max_unified_size")]
    pub max_unified_size_bytes: u64,

    /// Upper bound for each part file
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size_bytes: u64,
}

// Default value functions
fn default_allowed_extensions() -> Vec<String> {
    vec![
        ".rs".to_string(),
        ".config".to_string(),
        ".ts".to_string(),
        ".tsx".to_string(),
        ".json".to_string(),
        ".mjs".to_string(),
        ".js".to_string(),
    ]
}

fn default_excluded_names() -> Vec<String> {
    vec![
        // Dependencies and build output
        "node_modules".to_string(),
        ".git".to_string(),
        ".next".to_string(),
        "dist".to_string(),
        "build".to_string(),
        ".cache".to_string(),
        "coverage".to_string(),
        "public".to_string(),
        "Libraries".to_string(),
        "packages".to_string(),
        "bin".to_string(),
        "target".to_string(),
        // Editor state
        ".vscode".to_string(),
        ".idea".to_string(),
        // Our own output and the legacy consolidation scripts
        "consolidated_code.txt".to_string(),
        "consolidated_code.min.txt".to_string(),
        "consolidate.js".to_string(),
        "consolidate.py".to_string(),
        // Secrets
        ".env".to_string(),
        ".env.local".to_string(),
        ".env.production".to_string(),
        ".env.development".to_string(),
        // Lockfiles and tooling metadata
        "package-lock.json".to_string(),
        "yarn.lock".to_string(),
        "pnpm-lock.yaml".to_string(),
        "pnpm-workspace.yaml".to_string(),
        ".dockerignore".to_string(),
        ".gitignore".to_string(),
        "TODO.md".to_string(),
    ]
}

fn default_output_file() -> String {
    "consolidated_code.min.txt".to_string()
}

fn default_max_unified_size() -> u64 {
    1024 * 1024
}

fn default_max_chunk_size() -> u64 {
    512 * 1024
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            excluded_names: default_excluded_names(),
            output_file: default_output_file(),
            sort_entries: false,
            max_depth: None,
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_unified_size_bytes: default_max_unified_size(),
            max_chunk_size_bytes: default_max_chunk_size(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ConsolidateError::ConfigError(format!("Failed to read config file {path:?}: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config for a walk root with priority: env vars > TOML > defaults
    pub fn load(root: &Path) -> Result<Self> {
        let xdg = XdgDirs::new();
        xdg.log_paths();
        Self::load_with_xdg(root, &xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// TOML lookup order:
    /// 1. CODEPACK_CONFIG env var
    /// 2. `<root>/codepack.toml`
    /// 3. XDG config file (~/.config/codepack/config.toml)
    /// 4. Defaults
    pub fn load_with_xdg(root: &Path, xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CODEPACK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            let xdg_config = xdg.config_file();
            if project_config.is_file() {
                Self::from_file(project_config)?
            } else if xdg_config.is_file() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(output) = env::var("CODEPACK_OUTPUT_FILE") {
            if !output.is_empty() {
                self.consolidation.output_file = output;
            }
        }
        if let Ok(sort) = env::var("CODEPACK_SORT_ENTRIES") {
            if let Ok(s) = sort.parse() {
                self.consolidation.sort_entries = s;
            }
        }

        if let Ok(max_unified) = env::var("CODEPACK_MAX_UNIFIED_SIZE") {
            if let Ok(size) = max_unified.parse() {
                self.split.max_unified_size_bytes = size;
            }
        }
        if let Ok(max_chunk) = env::var("CODEPACK_MAX_CHUNK_SIZE") {
            if let Ok(size) = max_chunk.parse() {
                self.split.max_chunk_size_bytes = size;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.consolidation.allowed_extensions.is_empty() {
            return Err(ConsolidateError::ConfigError(
                "At least one allowed extension is required".to_string(),
            ));
        }

        if self
            .consolidation
            .allowed_extensions
            .iter()
            .any(|ext| ext.is_empty())
        {
            return Err(ConsolidateError::ConfigError(
                "Allowed extensions cannot be empty strings".to_string(),
            ));
        }

        let output = &self.consolidation.output_file;
        if output.is_empty() {
            return Err(ConsolidateError::ConfigError(
                "Output file name cannot be empty".to_string(),
            ));
        }

        if output.contains('/') || output.contains(std::path::MAIN_SEPARATOR) {
            return Err(ConsolidateError::ConfigError(format!(
                "Output file '{output}' must be a bare file name"
            )));
        }

        if self.split.max_chunk_size_bytes == 0 {
            return Err(ConsolidateError::ConfigError(
                "Max chunk size must be non-zero".to_string(),
            ));
        }

        if self.split.max_unified_size_bytes == 0 {
            return Err(ConsolidateError::ConfigError(
                "Max unified size must be non-zero".to_string(),
            ));
        }

        if self.split.max_chunk_size_bytes > self.split.max_unified_size_bytes {
            return Err(ConsolidateError::ConfigError(
                "Max chunk size cannot exceed max unified size".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the artifact for a given walk root
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.consolidation.output_file)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Allowed extensions: {:?}",
            self.consolidation.allowed_extensions
        );
        tracing::info!(
            "  Excluded names: {} names",
            self.consolidation.excluded_names.len()
        );
        tracing::info!("  Output file: {}", self.consolidation.output_file);
        tracing::info!("  Sort entries: {}", self.consolidation.sort_entries);
        tracing::info!("  Max depth: {:?}", self.consolidation.max_depth);
        tracing::info!(
            "  Max unified size: {} bytes",
            self.split.max_unified_size_bytes
        );
        tracing::info!("  Max chunk size: {} bytes", self.split.max_chunk_size_bytes);
    }
}
