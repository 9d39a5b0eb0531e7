// src/models/candidate.rs

/// Preferred ordering for spec documents. Files not in this list rank
/// after the listed ones within the same tier.
const SPEC_ORDER: [&str; 8] = [
    "architecture_overview.md",
    "implementation_contract.md",
    "system_integration.md",
    "deploy_and_envs.md",
    "error_and_retry_model.md",
    "observability.md",
    "prompt_storage_and_context.md",
    "handoff_checklist.md",
];

/// A file that survived the enumeration filters.
///
/// Identity is the posix-style path relative to the repository root;
/// nothing persists beyond a single enumeration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub rel_path: String,
    pub size_bytes: u64,
}

impl CandidateFile {
    /// Computes the sort key for this candidate. Lower sorts first.
    ///
    /// The tiers form a fixed priority table: the repository README, then
    /// spec documents in their conventional order, then contract files by
    /// sub-type, then the static model, then fixtures and test vectors,
    /// with a catch-all lowest tier for everything else. Ties within a
    /// tier break lexicographically by path.
    #[must_use]
    pub fn rank_key(&self) -> (u8, u32, &str) {
        let p = self.rel_path.as_str();
        let slashed = format!("/{p}");

        if p == "README.md" {
            return (0, 0, p);
        }

        if p.ends_with(".md") && slashed.contains("/spec/") {
            let base = p.rsplit('/').next().unwrap_or(p);
            let sub = SPEC_ORDER
                .iter()
                .position(|name| *name == base)
                .map_or(999, |i| u32::try_from(i).unwrap_or(999));
            return (1, sub, p);
        }

        if slashed.contains("/contracts/") {
            if p.ends_with("/contracts/README.md") {
                return (2, 0, p);
            }
            if p.ends_with(".schema.json") {
                return (2, 1, p);
            }
            if p.ends_with(".md") {
                return (2, 2, p);
            }
            return (2, 999, p);
        }

        if p.ends_with("static_model.md") {
            return (3, 0, p);
        }

        if slashed.contains("/fixtures/") || slashed.contains("/test_vectors/") {
            if p.ends_with("README.md") {
                return (4, 0, p);
            }
            return (4, 1, p);
        }

        (9, 999, p)
    }
}
