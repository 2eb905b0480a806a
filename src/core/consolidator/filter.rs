//! Entry selection: which files are eligible, which entries are pruned.
//!
//! Both checks are literal string comparisons. There is no glob or
//! pattern syntax, so `node_modules2` is never caught by a
//! `node_modules` exclusion.

use std::collections::HashSet;
use std::path::Path;

/// Suffix-based eligibility check for file names
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    /// Suffixes in configured order (e.g. ".rs", ".ts")
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// True iff `file_name` ends with one of the configured suffixes.
    ///
    /// Case-sensitive, and there is no dot-boundary check beyond the
    /// suffix string itself.
    pub fn accepts(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}

/// Literal-name exclusion set
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    names: HashSet<String>,
}

impl ExclusionMatcher {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// True if `name` or any component of `full_path` is in the set.
    pub fn is_excluded(&self, name: &str, full_path: &Path) -> bool {
        if self.names.contains(name) {
            return true;
        }

        full_path
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .any(|segment| self.names.contains(segment))
    }
}
