//! Search text derived from a folder name.

use std::fmt;
use std::path::Path;

/// Free-text release search query.
///
/// Built from a folder's base name: underscores and hyphens become spaces and
/// the result is trimmed. No other normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Build a query from a folder base name.
    pub fn new(name: &str) -> Self {
        let replaced: String = name
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();
        Self(replaced.trim().to_string())
    }

    /// Build a query from the last component of `folder`.
    pub fn from_folder(folder: &Path) -> Self {
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        Self::new(&name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
