//! codepack entry point
//!
//! Consolidates the current directory (or the given root) into a
//! single minified text artifact.
//!
//! # Examples
//!
//! ```bash
//! # Consolidate the current directory with stock settings
//! codepack
//!
//! # Consolidate another tree in reproducible order, JSON summary
//! codepack ~/src/project --sort --format json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codepack::cli::{output, run, Cli};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "codepack=debug"
    } else {
        "codepack=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
