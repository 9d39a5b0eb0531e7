// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, Command, run};
pub use crate::core::checklist::{
    OutputFormat, parse_items, render_json, render_markdown, render_text, summarize,
};
pub use crate::core::enumerate::{EnumerateOptions, EnumerateReport, enumerate};
pub use crate::core::init::{InitOptions, init, validate_component_key};
pub use crate::core::lint::{LintReport, lint, parse_frontmatter};
pub use models::{CandidateFile, ChecklistItem, Finding, Level, Section, Summary};
