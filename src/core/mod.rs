//! Core domain logic
//!
//! Everything here is independent of the command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Walk/split outcome records
//! - **xdg**: XDG config directory handling
//! - **consolidator**: Walk, minify, write and split

pub mod config;
pub mod consolidator;
pub mod error;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{ConsolidateError, Result};
