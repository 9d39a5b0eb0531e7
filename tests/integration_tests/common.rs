// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// A small repository tree exercising every enumeration tier.
pub fn setup_repo() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(root, "README.md", "# Demo repo")?;
    create_test_file(root, "spec/architecture_overview.md", "overview")?;
    create_test_file(root, "spec/implementation_contract.md", "contract")?;
    create_test_file(root, "spec/notes.md", "unordered spec doc")?;
    create_test_file(root, "contracts/README.md", "contracts index")?;
    create_test_file(root, "contracts/events.schema.json", "{}")?;
    create_test_file(root, "contracts/events.md", "events prose")?;
    create_test_file(root, "model/static_model.md", "static model")?;
    create_test_file(root, "fixtures/sample.json", "{}")?;
    create_test_file(root, "src/main.py", "print('hi')")?;
    create_test_file(root, "logo.png", "binary-ish")?;
    create_test_file(root, "debug.log", "noise")?;

    Ok(temp_dir)
}

/// A doc folder satisfying the lint convention.
pub fn setup_skill_dir() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(
        root,
        "SKILL.md",
        "---\n\
         name: chart-export\n\
         description: Docs preparation for the chart export worker\n\
         ---\n\
         \n\
         Use `references/component_docs_checklist.md` to track progress,\n\
         then read [the structure guide](references/docs_reference_structure.md).\n",
    )?;
    create_test_file(root, "references/component_docs_checklist.md", "checklist")?;
    create_test_file(root, "references/docs_reference_structure.md", "structure")?;
    fs::create_dir_all(root.join("assets/docs-component-template"))?;

    Ok(temp_dir)
}
