// src/core/checklist.rs
use crate::models::{ChecklistItem, Section, SectionSummary, Summary};
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use regex::Regex;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// Extracts checkbox items from markdown text.
///
/// A line matching one of the `## 1.` / `## 2.` / `## 3.` header
/// prefixes moves the section cursor; checkbox lines attach to whatever
/// section is current. Checkboxes before the first recognized header are
/// dropped silently.
///
/// # Errors
///
/// Returns an error only if the fixed grammar regexes fail to compile.
pub fn parse_items(text: &str) -> Result<Vec<ChecklistItem>> {
    let section_map: [(Regex, Section); 3] = [
        (header_regex(1)?, Section::Critical),
        (header_regex(2)?, Section::Needed),
        (header_regex(3)?, Section::Desirable),
    ];
    let checkbox_re = Regex::new(r"^\s*-\s*\[(?P<mark>[ xX])\]\s*(?P<body>.+?)\s*$")
        .context("invalid checkbox regex")?;
    let title_re = Regex::new(r"\*\*(?P<title>[^*]+)\*\*").context("invalid title regex")?;

    let mut items = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if let Some((_, section)) = section_map.iter().find(|(re, _)| re.is_match(line)) {
            current = Some(*section);
        }

        let Some(caps) = checkbox_re.captures(line) else {
            continue;
        };
        let Some(section) = current else {
            continue;
        };

        let body = &caps["body"];
        let title = title_re
            .captures(body)
            .map_or_else(|| body.trim().to_owned(), |t| t["title"].trim().to_owned());

        items.push(ChecklistItem {
            section,
            title,
            checked: caps["mark"].trim().eq_ignore_ascii_case("x"),
        });
    }

    Ok(items)
}

fn header_regex(number: u8) -> Result<Regex> {
    Regex::new(&format!(r"(?i)^##\s+{number}\.\s+"))
        .with_context(|| format!("invalid header regex for section {number}"))
}

/// Aggregates parsed items into per-section and total counts.
#[must_use]
pub fn summarize(items: &[ChecklistItem]) -> Summary {
    let mut summary = Summary::default();

    for section in Section::ALL {
        let slot: &mut SectionSummary = summary.sections.get_mut(section);
        for item in items.iter().filter(|i| i.section == section) {
            slot.total += 1;
            if item.checked {
                slot.done += 1;
            } else {
                slot.missing += 1;
                slot.missing_titles.push(item.title.clone());
            }
        }
        summary.totals.done += slot.done;
        summary.totals.total += slot.total;
    }
    summary.totals.missing = summary.totals.total - summary.totals.done;

    summary
}

/// Renders the plain-text report.
#[must_use]
pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total: {}/{} done; {} missing",
        summary.totals.done, summary.totals.total, summary.totals.missing
    );
    for section in Section::ALL {
        let sec = summary.sections.get(section);
        let _ = writeln!(
            out,
            "{}: {}/{} done; {} missing",
            section.label(),
            sec.done,
            sec.total,
            sec.missing
        );
        for title in &sec.missing_titles {
            let _ = writeln!(out, "  - {title}");
        }
    }
    out.trim_end().to_owned()
}

/// Renders the markdown report.
#[must_use]
pub fn render_markdown(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "- Total: **{} / {}** done; **{}** missing",
        summary.totals.done, summary.totals.total, summary.totals.missing
    );
    for section in Section::ALL {
        let sec = summary.sections.get(section);
        let _ = writeln!(
            out,
            "- {}: **{} / {}** done; **{}** missing",
            section.label(),
            sec.done,
            sec.total,
            sec.missing
        );
        if !sec.missing_titles.is_empty() {
            let _ = writeln!(out, "  - Missing:");
            for title in &sec.missing_titles {
                let _ = writeln!(out, "    - {title}");
            }
        }
    }
    out.trim_end().to_owned()
}

/// Renders the JSON report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("failed to serialize summary")
}

/// Parses, summarizes, and renders in one pass for the CLI.
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or rendered.
pub fn report(text: &str, format: OutputFormat) -> Result<String> {
    let items = parse_items(text)?;
    let summary = summarize(&items);
    match format {
        OutputFormat::Text => Ok(render_text(&summary)),
        OutputFormat::Json => render_json(&summary),
        OutputFormat::Markdown => Ok(render_markdown(&summary)),
    }
}
