// src/core/ignore.rs
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::Path;

/// `*` and `?` may cross `/` here: the ignore lists these tools consume
/// were written for fnmatch-style matching, where `*.log` hides a log
/// file at any depth.
const fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}

/// An ordered list of glob patterns matched against posix-style relative
/// paths. Used for both the read-ignore list and the allowlist.
#[derive(Debug, Default)]
pub struct GlobList {
    patterns: Vec<Pattern>,
}

impl GlobList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds one pattern line. Blank lines and `#` comments are skipped so
    /// a raw ignore-file line can be fed straight in.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid glob syntax.
    pub fn add(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }
        let compiled = Pattern::new(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?;
        self.patterns.push(compiled);
        Ok(())
    }

    /// Builds a list from pattern strings.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is invalid glob syntax.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut list = Self::new();
        for pattern in patterns {
            list.add(pattern.as_ref())?;
        }
        Ok(list)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(path, match_options()))
    }
}

/// Loads the default ignore list from a glob-list file. A missing file
/// means no default ignores, not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or contains
/// invalid glob syntax.
pub fn load_default_ignores(path: &Path) -> Result<GlobList> {
    if !path.exists() {
        return Ok(GlobList::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read ignore list: {}", path.display()))?;
    let mut list = GlobList::new();
    for line in content.lines() {
        list.add(line)?;
    }
    Ok(list)
}
