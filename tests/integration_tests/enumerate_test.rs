// tests/integration_tests/enumerate_test.rs
use super::common::setup_repo;
use anyhow::Result;
use docprep::{EnumerateOptions, enumerate};
use std::path::PathBuf;

fn options() -> EnumerateOptions {
    EnumerateOptions {
        max_bytes: 1_048_576,
        ignores_file: Some(PathBuf::from("/nonexistent/ignores.txt")),
        ..EnumerateOptions::default()
    }
}

fn listed_paths(report: &docprep::EnumerateReport) -> Vec<String> {
    report
        .candidates
        .iter()
        .map(|c| c.rel_path.clone())
        .collect()
}

#[test]
fn test_full_tier_ordering() -> Result<()> {
    let repo = setup_repo()?;
    let report = enumerate(repo.path(), &options())?;
    let paths = listed_paths(&report);

    assert_eq!(
        paths,
        vec![
            "README.md",
            "spec/architecture_overview.md",
            "spec/implementation_contract.md",
            "spec/notes.md",
            "contracts/events.schema.json",
            "contracts/README.md",
            "contracts/events.md",
            "model/static_model.md",
            "fixtures/sample.json",
            "debug.log",
            "src/main.py",
        ]
    );
    Ok(())
}

#[test]
fn test_binary_extensions_never_listed() -> Result<()> {
    let repo = setup_repo()?;
    let report = enumerate(repo.path(), &options())?;
    assert!(!listed_paths(&report).iter().any(|p| p.ends_with(".png")));
    Ok(())
}

#[test]
fn test_user_ignores_combine_with_defaults() -> Result<()> {
    let repo = setup_repo()?;
    let mut opts = options();
    opts.ignore_globs = vec![String::from("*.log"), String::from("src/")];
    let report = enumerate(repo.path(), &opts)?;

    let paths = listed_paths(&report);
    assert!(!paths.contains(&String::from("debug.log")));
    assert!(!paths.contains(&String::from("src/main.py")));
    assert!(paths.contains(&String::from("README.md")));
    Ok(())
}

#[test]
fn test_allowlist_only_lists_matches() -> Result<()> {
    let repo = setup_repo()?;
    let mut opts = options();
    opts.allowlist_globs = vec![String::from("spec/*")];
    let report = enumerate(repo.path(), &opts)?;

    let paths = listed_paths(&report);
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.starts_with("spec/")));
    Ok(())
}

#[test]
fn test_size_cap_excludes_large_files() -> Result<()> {
    let repo = setup_repo()?;
    let mut opts = options();
    opts.max_bytes = 4;
    let report = enumerate(repo.path(), &opts)?;

    // Only contracts/events.schema.json and fixtures/sample.json ("{}")
    // fit under a 4-byte cap.
    assert!(
        listed_paths(&report)
            .iter()
            .all(|p| p.ends_with(".json"))
    );
    Ok(())
}

#[test]
fn test_render_shape() -> Result<()> {
    let repo = setup_repo()?;
    let report = enumerate(repo.path(), &options())?;
    let rendered = report.render();

    assert!(rendered.contains("max_bytes: 1048576"));
    assert!(rendered.contains("Candidates (prioritized):"));
    assert!(rendered.contains("- README.md ("));
    Ok(())
}
