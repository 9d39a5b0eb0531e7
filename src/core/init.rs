// src/core/init.rs
use crate::utils::install_root;
use anyhow::{Context as _, Result, bail};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const TEXT_EXTENSIONS: [&str; 4] = ["md", "json", "txt", "schema"];

#[derive(Debug)]
pub struct InitOptions {
    pub component_key: String,
    pub dest: PathBuf,
    pub force: bool,
    pub template: Option<PathBuf>,
}

/// Validates and normalizes a component key.
///
/// # Errors
///
/// Returns an error if the key is empty or not kebab-case
/// (`[a-z0-9]+(-[a-z0-9]+)*`).
pub fn validate_component_key(component_key: &str) -> Result<String> {
    let component_key = component_key.trim();
    if component_key.is_empty() {
        bail!("component key is empty");
    }
    let key_re = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").context("invalid key regex")?;
    if !key_re.is_match(component_key) {
        bail!(
            "component key must match: [a-z0-9]+(-[a-z0-9]+)* (example: worker-chart-export)"
        );
    }
    Ok(component_key.to_owned())
}

/// Location of the bundled doc-folder template, resolved against the
/// tool installation.
#[must_use]
pub fn default_template_dir() -> PathBuf {
    install_root().join("assets").join("docs-component-template")
}

/// Copies the template to `<dest>/docs-<key>` and rewrites the
/// `{{component_key}}` and `{{docs_root}}` tokens in text-like files.
///
/// Returns the initialized directory.
///
/// # Errors
///
/// Returns an error if the key is invalid, the template directory is
/// missing, or the destination already exists without `force`.
pub fn init(options: &InitOptions) -> Result<PathBuf> {
    let component_key = validate_component_key(&options.component_key)?;

    let template_dir = options
        .template
        .clone()
        .unwrap_or_else(default_template_dir);
    if !template_dir.is_dir() {
        bail!("template directory not found: {}", template_dir.display());
    }

    let docs_root = format!("docs-{component_key}");
    let dest_dir = options.dest.join(&docs_root);

    if dest_dir.exists() {
        if !options.force {
            bail!(
                "destination already exists: {} (use --force to overwrite)",
                dest_dir.display()
            );
        }
        fs::remove_dir_all(&dest_dir)
            .with_context(|| format!("failed to remove {}", dest_dir.display()))?;
    }

    copy_tree(&template_dir, &dest_dir)?;

    let replacements = [
        ("{{component_key}}", component_key.as_str()),
        ("{{docs_root}}", docs_root.as_str()),
    ];
    for entry in WalkDir::new(&dest_dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            replace_tokens_in_file(entry.path(), &replacements)?;
        }
    }

    Ok(dest_dir)
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .context("walked outside the template directory")?;
        let target = to.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}

fn is_text_like(path: &Path) -> bool {
    if path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".schema.json"))
    {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_lowercase();
            TEXT_EXTENSIONS.contains(&lower.as_str())
        })
}

fn replace_tokens_in_file(path: &Path, replacements: &[(&str, &str)]) -> Result<()> {
    if !is_text_like(path) {
        return Ok(());
    }
    // Non-UTF-8 content is left alone.
    let Ok(text) = fs::read_to_string(path) else {
        return Ok(());
    };
    let mut updated = text.clone();
    for (needle, value) in replacements {
        updated = updated.replace(needle, value);
    }
    if updated != text {
        fs::write(path, updated)
            .with_context(|| format!("failed to rewrite {}", path.display()))?;
    }
    Ok(())
}
