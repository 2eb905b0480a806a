//! CLI adapter for codepack
//!
//! Parses arguments, resolves the effective configuration and runs
//! the consolidation pipeline. With no arguments it consolidates the
//! current directory using the stock settings.

pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::core::config::Config;
use crate::core::consolidator::ConsolidationPipeline;

/// codepack - consolidate a source tree into one minified text file
///
/// Walks ROOT, keeps files with an allowed extension, strips blank
/// lines and surrounding whitespace, and writes them into a single
/// artifact with a `>>> path` header per file. Artifacts over the
/// size threshold are split into numbered parts.
#[derive(Parser, Debug)]
#[command(name = "codepack")]
#[command(version)]
#[command(about = "Consolidate a source tree into one minified text file", long_about = None)]
pub struct Cli {
    /// Directory to consolidate (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Explicit TOML config file
    #[arg(long, short = 'c', env = "CODEPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Artifact file name, created inside ROOT
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Visit entries in file-name order for reproducible output
    #[arg(long)]
    pub sort: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

impl Cli {
    /// Walk root: the positional argument or the current directory
    pub fn root_dir(&self) -> std::io::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir(),
        }
    }
}

/// Resolve the effective configuration for `root`.
///
/// Priority: command-line flags > env vars > TOML > defaults.
pub fn resolve_config(cli: &Cli, root: &Path) -> crate::core::error::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.merge_env();
            config
        }
        None => Config::load(root)?,
    };

    if let Some(output) = &cli.output {
        config.consolidation.output_file = output.clone();
    }
    if cli.sort {
        config.consolidation.sort_entries = true;
    }

    config.validate()?;
    Ok(config)
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let root = cli.root_dir()?;
    let root = root.canonicalize().map_err(|e| {
        format!(
            "Root directory not found: '{}': {}. Make sure the path exists and is accessible.",
            root.display(),
            e
        )
    })?;

    let config = resolve_config(&cli, &root)?;
    config.log_config();

    if cli.print_config {
        match cli.format {
            OutputFormat::Human => println!("{}", toml::to_string_pretty(&config)?),
            OutputFormat::Json => output::print_json(&config)?,
        }
        return Ok(());
    }

    let show_progress = !cli.quiet && cli.format == OutputFormat::Human;
    if show_progress {
        println!(
            "Starting minified consolidation from {}",
            output::colors::file_path(&root.display().to_string())
        );
    }

    let pipeline = ConsolidationPipeline::new(config)?;
    let report = pipeline.run(&root)?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                output::print_report(&report);
            }
        }
        OutputFormat::Json => output::print_json(&report)?,
    }

    let walk = &report.walk;
    if !cli.quiet && (walk.files_skipped > 0 || walk.dirs_failed > 0) {
        output::print_warning(&format!(
            "skipped {} unreadable files and {} unreadable directories",
            walk.files_skipped, walk.dirs_failed
        ));
    }

    Ok(())
}
