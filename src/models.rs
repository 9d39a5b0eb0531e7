// src/models.rs
pub mod candidate;
pub mod checklist;
pub mod finding;

pub use candidate::CandidateFile;
pub use checklist::{ChecklistItem, Section, SectionSummary, Sections, Summary, Totals};
pub use finding::{Finding, Level};
