// src/core/lint.rs
use crate::models::{Finding, Level};
use crate::utils::install_root;
use anyhow::{Context as _, Result, bail};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys the frontmatter block must carry, exactly.
const REQUIRED_FRONTMATTER_KEYS: [&str; 2] = ["name", "description"];

/// Placeholder markers that must not survive into a published doc.
const PLACEHOLDER_MARKERS: [&str; 3] = ["TODO", "[TODO", "TODO:"];

/// Companion resources every conforming doc folder ships.
const EXPECTED_RESOURCES: [&str; 3] = [
    "references/component_docs_checklist.md",
    "references/docs_reference_structure.md",
    "assets/docs-component-template",
];

#[derive(Debug)]
pub struct LintReport {
    pub findings: Vec<Finding>,
    pub exit_code: u8,
}

/// Default lint target, derived from the tool installation.
#[must_use]
pub fn default_skill_dir() -> PathBuf {
    install_root()
}

/// Splits a document into its frontmatter map and body.
///
/// The text must start with a `---` line and carry a closing `---` line;
/// between them only flat `key: value` lines, blank lines, and `#`
/// comments are allowed. Matching single or double quotes around a value
/// are stripped.
///
/// # Errors
///
/// Returns an error if the delimiters are missing or a line has no
/// colon. Callers treat this as a hard lint error that aborts further
/// checks for the file.
pub fn parse_frontmatter(text: &str) -> Result<(BTreeMap<String, String>, String)> {
    let fence_re =
        Regex::new(r"(?s)\A---\n(?P<fm>.*?\n)---\n").context("invalid frontmatter regex")?;
    let Some(caps) = fence_re.captures(text) else {
        bail!("SKILL.md must start with YAML frontmatter delimited by ---");
    };

    let fm_match = caps.get(0).context("missing frontmatter match")?;
    let body = text[fm_match.end()..].to_owned();

    let mut data = BTreeMap::new();
    for raw_line in caps["fm"].lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            bail!("invalid YAML line in frontmatter: {raw_line:?}");
        };
        let key = key.trim();
        let value = unquote(value.trim());
        data.insert(key.to_owned(), value.to_owned());
    }

    Ok((data, body))
}

fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn is_external_link(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://") || target.starts_with("mailto:")
}

/// Lints a doc folder against the documentation-folder convention.
///
/// Frontmatter schema problems and placeholder markers are errors;
/// missing companion resources, discouraged path references, and broken
/// relative links are warnings. See `LintReport::exit_code` for the
/// status policy: 1 on any error, 2 on warnings under strict mode, 0
/// otherwise.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures; structural
/// problems in the documents come back as findings.
pub fn lint(skill_dir: &Path, strict: bool) -> Result<LintReport> {
    let mut findings = Vec::new();

    let skill_md = skill_dir.join("SKILL.md");
    if !skill_md.is_file() {
        return Ok(finish(
            vec![Finding::error(format!("missing {}", skill_md.display()))],
            strict,
        ));
    }

    let text = fs::read_to_string(&skill_md)
        .with_context(|| format!("failed to read {}", skill_md.display()))?;

    let (frontmatter, body) = match parse_frontmatter(&text) {
        Ok(parsed) => parsed,
        Err(err) => {
            return Ok(finish(vec![Finding::error(err.to_string())], strict));
        }
    };

    check_frontmatter_keys(&frontmatter, &mut findings);

    if PLACEHOLDER_MARKERS.iter().any(|m| body.contains(m)) {
        findings.push(Finding::error(
            "SKILL.md contains placeholder markers; remove them before publishing",
        ));
    }

    if text.contains("skills/public/") {
        findings.push(Finding::warn(
            "SKILL.md references 'skills/public/...'; prefer '~/.codex/skills/<skill-name>/' for installed usage",
        ));
    }

    for rel in EXPECTED_RESOURCES {
        if !skill_dir.join(rel).exists() {
            findings.push(Finding::warn(format!("expected resource missing: {rel}")));
        }
    }

    check_links(skill_dir, &text, &mut findings)?;
    check_code_tick_paths(skill_dir, &text, &mut findings)?;

    Ok(finish(findings, strict))
}

fn check_frontmatter_keys(frontmatter: &BTreeMap<String, String>, findings: &mut Vec<Finding>) {
    let extra: Vec<&str> = frontmatter
        .keys()
        .map(String::as_str)
        .filter(|k| !REQUIRED_FRONTMATTER_KEYS.contains(k))
        .collect();
    let missing: Vec<&str> = REQUIRED_FRONTMATTER_KEYS
        .iter()
        .copied()
        .filter(|k| !frontmatter.contains_key(*k))
        .collect();

    if !extra.is_empty() {
        findings.push(Finding::error(format!(
            "frontmatter has extra keys: {}",
            extra.join(", ")
        )));
    }
    if !missing.is_empty() {
        findings.push(Finding::error(format!(
            "frontmatter missing keys: {}",
            missing.join(", ")
        )));
    }

    for key in REQUIRED_FRONTMATTER_KEYS {
        if frontmatter.get(key).is_some_and(|v| v.trim().is_empty()) {
            findings.push(Finding::error(format!(
                "frontmatter field '{key}' is empty"
            )));
        }
    }
}

fn check_links(skill_dir: &Path, text: &str, findings: &mut Vec<Finding>) -> Result<()> {
    let link_re =
        Regex::new(r"\[[^\]]+\]\((?P<target>[^)]+)\)").context("invalid link regex")?;

    for caps in link_re.captures_iter(text) {
        let target = caps["target"].trim();
        if target.is_empty() || is_external_link(target) || target.starts_with('#') {
            continue;
        }
        // Anchor suffixes are stripped before the existence check.
        let target = target.split('#').next().unwrap_or(target);
        if target.is_empty()
            || target.starts_with('~')
            || target.starts_with('$')
            || target.starts_with('/')
        {
            continue;
        }
        if !skill_dir.join(target).exists() {
            findings.push(Finding::warn(format!(
                "broken link target in SKILL.md: {target}"
            )));
        }
    }
    Ok(())
}

fn check_code_tick_paths(skill_dir: &Path, text: &str, findings: &mut Vec<Finding>) -> Result<()> {
    let tick_re = Regex::new(r"`(?P<path>(?:assets|references|scripts)/[A-Za-z0-9._/\-]+)`")
        .context("invalid code-tick regex")?;

    for caps in tick_re.captures_iter(text) {
        let rel = &caps["path"];
        if !skill_dir.join(rel).exists() {
            findings.push(Finding::warn(format!(
                "missing referenced path in SKILL.md: {rel}"
            )));
        }
    }
    Ok(())
}

fn finish(findings: Vec<Finding>, strict: bool) -> LintReport {
    let has_errors = findings.iter().any(Finding::is_error);
    let has_warns = findings.iter().any(|f| f.level == Level::Warn);

    let exit_code = if has_errors {
        1
    } else if strict && has_warns {
        2
    } else {
        0
    };

    LintReport {
        findings,
        exit_code,
    }
}

impl LintReport {
    /// Renders findings for the terminal.
    #[must_use]
    pub fn render(&self) -> String {
        if self.findings.is_empty() {
            return String::from("[OK] No issues found");
        }
        let mut out = String::new();
        for finding in &self.findings {
            let prefix = match finding.level {
                Level::Error => "ERROR",
                Level::Warn => "WARN",
            };
            let _ = writeln!(out, "{prefix}: {}", finding.message);
        }
        if self.exit_code == 0 {
            let _ = writeln!(out, "[OK] Lint passed with warnings");
        }
        out.trim_end().to_owned()
    }
}
