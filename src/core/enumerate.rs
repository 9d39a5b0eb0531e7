// src/core/enumerate.rs
use crate::core::ignore::{GlobList, load_default_ignores};
use crate::models::CandidateFile;
use crate::utils::{install_root, to_posix_relpath};
use anyhow::{Context as _, Result};
use std::env;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions skipped outright; the listing targets text-ish docs and
/// these are never worth surfacing.
const BINARY_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".pdf", ".ico"];

#[derive(Debug, Default)]
pub struct EnumerateOptions {
    pub ignore_globs: Vec<String>,
    pub allowlist_globs: Vec<String>,
    pub max_bytes: u64,
    pub ignores_file: Option<PathBuf>,
}

/// Everything the enumeration pass produced, ready to render.
#[derive(Debug)]
pub struct EnumerateReport {
    pub repo_root: PathBuf,
    pub max_bytes: u64,
    pub allowlist_globs: Vec<String>,
    pub user_ignore_globs: Vec<String>,
    pub candidates: Vec<CandidateFile>,
}

/// Location of the bundled default ignore list, resolved against the
/// tool installation.
#[must_use]
pub fn default_ignores_file() -> PathBuf {
    install_root()
        .join("references")
        .join("default_read_ignores.txt")
}

/// Walks `repo_root` and produces the ranked candidate listing.
///
/// Directories whose relative path (with a trailing `/`) matches an
/// ignore glob are pruned before descending. A surviving file must not
/// match any ignore glob, must match the allowlist when one was given,
/// must be at or under the size cap, and must not carry a binary-ish
/// extension. Entries whose metadata cannot be read are skipped
/// silently.
///
/// # Errors
///
/// Returns an error if the root cannot be resolved or a glob pattern is
/// invalid; filesystem anomalies during the walk are not errors.
pub fn enumerate(repo_root: &Path, options: &EnumerateOptions) -> Result<EnumerateReport> {
    let repo_root = if repo_root.is_absolute() {
        repo_root.to_path_buf()
    } else {
        env::current_dir()
            .context("failed to resolve current directory")?
            .join(repo_root)
    };

    let ignores_file = options
        .ignores_file
        .clone()
        .unwrap_or_else(default_ignores_file);
    let mut ignores = load_default_ignores(&ignores_file)?;
    for pattern in &options.ignore_globs {
        ignores.add(pattern)?;
    }
    let allowlist = GlobList::from_patterns(&options.allowlist_globs)?;

    let mut candidates = Vec::new();

    let walker = WalkDir::new(&repo_root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            // Prune ignored directories before descending.
            match to_posix_relpath(entry.path(), &repo_root) {
                Some(rel) => !ignores.matches(&format!("{rel}/")),
                None => true,
            }
        });

    for entry in walker {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let Some(rel) = to_posix_relpath(entry.path(), &repo_root) else {
            continue;
        };

        if ignores.matches(&rel) {
            continue;
        }
        if !allowlist.is_empty() && !allowlist.matches(&rel) {
            continue;
        }
        if metadata.len() > options.max_bytes {
            continue;
        }
        let lower = rel.to_lowercase();
        if BINARY_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            continue;
        }

        candidates.push(CandidateFile {
            rel_path: rel,
            size_bytes: metadata.len(),
        });
    }

    candidates.sort_by(|a, b| a.rank_key().cmp(&b.rank_key()));

    Ok(EnumerateReport {
        repo_root,
        max_bytes: options.max_bytes,
        allowlist_globs: options.allowlist_globs.clone(),
        user_ignore_globs: options.ignore_globs.clone(),
        candidates,
    })
}

impl EnumerateReport {
    /// Renders the plain-text listing.
    #[must_use]
    pub fn render(&self) -> String {
        fn join_or_dash(globs: &[String]) -> String {
            if globs.is_empty() {
                String::from("—")
            } else {
                globs.join(", ")
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "repo_root: {}", self.repo_root.display());
        let _ = writeln!(out, "max_bytes: {}", self.max_bytes);
        let _ = writeln!(out, "allowlist_globs: {}", join_or_dash(&self.allowlist_globs));
        let _ = writeln!(
            out,
            "user_ignore_globs: {}",
            join_or_dash(&self.user_ignore_globs)
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Candidates (prioritized):");
        for candidate in &self.candidates {
            let _ = writeln!(
                out,
                "- {} ({} bytes)",
                candidate.rel_path, candidate.size_bytes
            );
        }
        out
    }
}
