// tests/integration_tests/checklist_test.rs
use anyhow::Result;
use docprep::{parse_items, render_json, render_markdown, render_text, summarize};

const CHECKLIST: &str = "\
# Readiness

- [ ] orphan item before any section

## 1. Critical work
- [x] **Overview** drafted
- [ ] **Contract** agreed

## 2. Needed soon
- [x] Deploy notes

## 3. Desirable
";

#[test]
fn test_spec_example_counts() -> Result<()> {
    let summary = summarize(&parse_items(CHECKLIST)?);
    assert_eq!(summary.totals.done, 2);
    assert_eq!(summary.totals.total, 3);
    assert_eq!(summary.totals.missing, 1);
    assert_eq!(summary.sections.critical.done, 1);
    assert_eq!(summary.sections.critical.missing, 1);
    assert_eq!(summary.sections.critical.total, 2);
    assert_eq!(summary.sections.needed.done, 1);
    Ok(())
}

#[test]
fn test_orphan_items_are_dropped() -> Result<()> {
    let items = parse_items(CHECKLIST)?;
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.title != "orphan item before any section"));
    Ok(())
}

#[test]
fn test_renderings_are_mutually_consistent() -> Result<()> {
    let summary = summarize(&parse_items(CHECKLIST)?);

    let text = render_text(&summary);
    let json: serde_json::Value = serde_json::from_str(&render_json(&summary)?)?;
    let markdown = render_markdown(&summary);

    // The text "missing" figure equals totals.missing in JSON.
    assert!(text.contains("1 missing"));
    assert_eq!(json["totals"]["missing"], 1);
    assert!(markdown.contains("**1** missing"));

    // The one missing title shows up in text and markdown and JSON alike.
    assert!(text.contains("  - Contract"));
    assert!(markdown.contains("    - Contract"));
    assert_eq!(json["sections"]["critical"]["missing_titles"][0], "Contract");
    Ok(())
}

#[test]
fn test_empty_document_is_all_zero() -> Result<()> {
    let summary = summarize(&parse_items("just prose, no checklist\n")?);
    assert_eq!(summary.totals.total, 0);
    assert_eq!(summary.sections.critical.total, 0);
    assert_eq!(summary.sections.desirable.total, 0);
    Ok(())
}

#[test]
fn test_bundled_template_checklist_parses() -> Result<()> {
    let text = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/docs-component-template/checklists/component_docs_checklist.md"
    ))?;
    let summary = summarize(&parse_items(&text)?);
    assert_eq!(summary.sections.critical.total, 3);
    assert_eq!(summary.sections.needed.total, 2);
    assert_eq!(summary.sections.desirable.total, 1);
    assert_eq!(summary.totals.done, 0);
    Ok(())
}
