//! Source tree consolidation.
//!
//! Walks a directory tree, minifies every eligible source file and
//! appends it to a single artifact, then splits the artifact if it
//! grows past the configured size. Key pieces:
//!
//! - Literal suffix and exclusion-name matching (no globbing)
//! - Iterative traversal with per-entry error accounting
//! - Lossy whitespace minification
//! - UTF-8 safe, byte-bounded splitting

pub mod filter;
pub mod minifier;
pub mod pipeline;
pub mod splitter;
pub mod walker;
pub mod writer;

pub use filter::{ExclusionMatcher, ExtensionFilter};
pub use minifier::minify;
pub use pipeline::ConsolidationPipeline;
pub use splitter::Splitter;
pub use walker::TreeWalker;
pub use writer::ConsolidationWriter;
