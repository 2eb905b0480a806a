//! codepack - consolidate a source tree into one minified text file
//!
//! Walks a directory, keeps files whose names end in one of the
//! allowed suffixes, strips blank lines and surrounding whitespace,
//! and writes everything into a single artifact with a `>>> path`
//! header per file. Oversized artifacts are split into numbered
//! parts.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - consolidator (filter, minifier, walker, writer, splitter,
//!     pipeline)
//!
//! - **cli**: clap adapter (depends on core)
//!   - argument parsing, console output

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::consolidator::ConsolidationPipeline;
pub use crate::core::error::{ConsolidateError, Result};
pub use crate::core::types::*;
