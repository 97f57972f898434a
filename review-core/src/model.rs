//! Public data model: the value types that cross every component boundary.
//!
//! All of these are plain immutable values — no entity owns another by
//! reference, and nothing here is mutated once constructed (see spec §5).

use serde::{Deserialize, Serialize};

/// Optional document coordinates for a [`Clause`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClauseLocation {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// 1-based paragraph number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<u32>,
    /// Section label, e.g. `"3.2"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Clause number as it appears in the contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_number: Option<String>,
}

/// A contiguous run of contract text tagged with a stable identifier.
///
/// `clause_id` is unique within a contract and slug-compatible (lowercase,
/// `[a-z0-9-]`, <= 64 chars) — callers are responsible for suffixing
/// duplicate headings (`-2`, `-3`, ...) before handing clauses to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    #[serde(rename = "clauseId")]
    pub clause_id: String,
    pub title: String,
    #[serde(rename = "originalText")]
    pub original_text: String,
    #[serde(rename = "normalizedText")]
    pub normalized_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ClauseLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Clause {
    /// Title, falling back to the clause id when the title is empty.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.clause_id
        } else {
            &self.title
        }
    }
}

/// Closed severity enum, serialized exactly as the lowercase wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Ordinal rank used by dedup tie-breaking (`critical > high > medium > low`).
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 3,
            Severity::High => 2,
            Severity::Medium => 1,
            Severity::Low => 0,
        }
    }
}

/// Closed checklist-criterion status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionStatus {
    Met,
    Attention,
    Missing,
}

/// Closed proposed-edit intent enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditIntent {
    Replace,
    Insert,
}

/// Where an issue's evidence was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseReference {
    #[serde(rename = "clauseId")]
    pub clause_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub excerpt: String,
    #[serde(rename = "locationHint", default, skip_serializing_if = "Option::is_none")]
    pub location_hint: Option<String>,
}

/// A finding bound to a clause and an in-document excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub recommendation: String,
    pub rationale: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "clauseReference")]
    pub clause_reference: ClauseReference,
}

/// A proposed textual edit pinned to a verifiable anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedEdit {
    pub id: String,
    #[serde(rename = "clauseId")]
    pub clause_id: String,
    #[serde(rename = "anchorText")]
    pub anchor_text: String,
    #[serde(rename = "proposedText")]
    pub proposed_text: String,
    pub intent: EditIntent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Set when [`crate::align::assess_edit_semantic_drift`] found the
    /// proposed text too dissimilar from the clause it replaces. Never
    /// fatal — attached for the caller's attention (spec §7, "drift").
    #[serde(rename = "driftAlert", default, skip_serializing_if = "Option::is_none")]
    pub drift_alert: Option<String>,
}

/// A single checklist criterion as computed by the checklist compiler
/// (component D) and enriched by the alignment pipeline (component E).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistCriterion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CriterionStatus,
    pub met: bool,
    pub evidence: String,
    #[serde(rename = "clauseId", default, skip_serializing_if = "Option::is_none")]
    pub clause_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(rename = "locationHint", default, skip_serializing_if = "Option::is_none")]
    pub location_hint: Option<String>,
    #[serde(rename = "requiredSignals")]
    pub required_signals: Vec<String>,
    #[serde(rename = "matchedSignals")]
    pub matched_signals: Vec<String>,
    #[serde(rename = "missingSignals")]
    pub missing_signals: Vec<String>,
    #[serde(rename = "insertionPolicyKey")]
    pub insertion_policy_key: String,
    /// Diagnostic attached when a synthesized edit had no resolvable anchor
    /// after every fallback (spec §7, "anchor-resolution" kind). `None` in
    /// the common case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_diagnostic: Option<String>,
}
