// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::core::checklist::{self, OutputFormat};
use crate::core::enumerate::{EnumerateOptions, enumerate};
use crate::core::init::{self, InitOptions};
use crate::core::lint::{default_skill_dir, lint};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enumerate repo files applying ignore/allowlist globs and size limits
    Enumerate {
        /// Path to repository root to scan
        #[arg(long)]
        repo_root: PathBuf,

        /// Additional read-ignore glob (repeatable)
        #[arg(long = "ignore-glob")]
        ignore_globs: Vec<String>,

        /// Allowlist glob; when given, only matching files are listed (repeatable)
        #[arg(long = "allowlist-glob")]
        allowlist_globs: Vec<String>,

        /// Max size of a single file to include
        #[arg(long, default_value_t = 1_048_576)]
        max_bytes: u64,

        /// Glob list file supplying the default ignores
        #[arg(long)]
        ignores_file: Option<PathBuf>,
    },

    /// Summarize checklist readiness by section (critical/needed/desirable)
    Checklist {
        /// Path to a markdown checklist file with - [ ] items
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize a docs-<component-key>/ folder from the bundled template
    Init {
        /// Kebab-case component key
        #[arg(long)]
        component_key: String,

        /// Destination parent directory
        #[arg(long, default_value = ".")]
        dest: PathBuf,

        /// Overwrite the destination directory if it already exists
        #[arg(long)]
        force: bool,

        /// Template directory (default: bundled template)
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Lint a doc folder for basic consistency
    Lint {
        /// Path to the doc folder (default: derived from the install location)
        #[arg(long)]
        skill_dir: Option<PathBuf>,

        /// Treat warnings as failures (exit code 2)
        #[arg(long)]
        strict: bool,
    },
}

/// Dispatches a parsed command line, returning the process exit code.
/// Only the linter uses a nonzero code on a successful run (its status
/// policy distinguishes errors from strict-mode warnings); every other
/// command exits 0 unless it errors.
///
/// # Errors
///
/// Returns an error on invalid user input or I/O failure; `main` prints
/// it and exits non-zero.
pub fn run(args: Args) -> Result<u8> {
    match args.command {
        Command::Enumerate {
            repo_root,
            ignore_globs,
            allowlist_globs,
            max_bytes,
            ignores_file,
        } => {
            let options = EnumerateOptions {
                ignore_globs,
                allowlist_globs,
                max_bytes,
                ignores_file,
            };
            let report = enumerate(&repo_root, &options)
                .with_context(|| format!("failed to enumerate {}", repo_root.display()))?;
            print!("{}", report.render());
            Ok(0)
        }
        Command::Checklist { path, format } => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read checklist: {}", path.display()))?;
            println!("{}", checklist::report(&text, format)?);
            Ok(0)
        }
        Command::Init {
            component_key,
            dest,
            force,
            template,
        } => {
            let options = InitOptions {
                component_key,
                dest,
                force,
                template,
            };
            let created = init::init(&options)?;
            println!("[OK] Initialized: {}", created.display());
            println!(
                "[Next] Fill in the checklists under {}/checklists/ and run `docprep checklist`",
                created.display()
            );
            Ok(0)
        }
        Command::Lint { skill_dir, strict } => {
            let skill_dir = skill_dir.unwrap_or_else(default_skill_dir);
            let report = lint(&skill_dir, strict)
                .with_context(|| format!("failed to lint {}", skill_dir.display()))?;
            println!("{}", report.render());
            Ok(report.exit_code)
        }
    }
}
