// src/utils.rs
use std::env;
use std::path::{Path, PathBuf};

/// Converts a path to a posix-style string relative to `root`.
///
/// Returns `None` when the path does not live under `root`; glob filters
/// and rank keys only ever see forward-slash relative paths.
#[must_use]
pub fn to_posix_relpath(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Root of the tool installation, one level above the directory holding
/// the executable. Bundled resources (default ignore list, the doc-folder
/// template) resolve against this when no explicit path is given.
#[must_use]
pub fn install_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
