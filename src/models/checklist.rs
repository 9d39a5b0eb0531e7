// src/models/checklist.rs
use serde::Serialize;

/// Checklist sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Critical,
    Needed,
    Desirable,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Critical, Self::Needed, Self::Desirable];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Needed => "Needed",
            Self::Desirable => "Desirable",
        }
    }
}

/// A single checkbox line attributed to a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub section: Section,
    pub title: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub done: usize,
    pub missing: usize,
    pub total: usize,
    pub missing_titles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sections {
    pub critical: SectionSummary,
    pub needed: SectionSummary,
    pub desirable: SectionSummary,
}

impl Sections {
    #[must_use]
    pub const fn get(&self, section: Section) -> &SectionSummary {
        match section {
            Section::Critical => &self.critical,
            Section::Needed => &self.needed,
            Section::Desirable => &self.desirable,
        }
    }

    pub const fn get_mut(&mut self, section: Section) -> &mut SectionSummary {
        match section {
            Section::Critical => &mut self.critical,
            Section::Needed => &mut self.needed,
            Section::Desirable => &mut self.desirable,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub done: usize,
    pub total: usize,
    pub missing: usize,
}

/// Aggregated checklist readiness. Derived once from the parsed items;
/// every output format renders from this without re-parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub sections: Sections,
    pub totals: Totals,
}
