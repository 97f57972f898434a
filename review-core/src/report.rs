//! Wire-level request/response types (spec.md §6). These are the only
//! types in the crate concerned with the HTTP contract; [`crate::review`]
//! builds an [`AnalysisReport`] purely from the domain types in
//! [`crate::model`].

use serde::{Deserialize, Serialize};

use crate::model::{ChecklistCriterion, Clause, Issue, ProposedEdit};

/// `POST /api/contract-review` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub content: String,
    #[serde(default)]
    pub clauses: Vec<Clause>,
    #[serde(rename = "playbookKey")]
    pub playbook_key: String,
    #[serde(rename = "candidateIssues", default)]
    pub candidate_issues: Vec<Issue>,
    #[serde(rename = "candidateEdits", default)]
    pub candidate_edits: Vec<ProposedEdit>,
    /// Legacy request version tag. A `"v2"` request is upgraded to the
    /// current report shape by leaving `playbookInsights` empty.
    #[serde(default)]
    pub version: Option<String>,
    /// Optional caller-supplied expiry, normalized by
    /// [`crate::report::normalise_report_expiry`].
    #[serde(rename = "reportExpiry", default)]
    pub report_expiry: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneralInformation {
    #[serde(rename = "complianceScore")]
    pub compliance_score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractSummary {
    pub parties: Vec<String>,
    #[serde(rename = "governingLaw")]
    pub governing_law: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClauseFinding {
    #[serde(rename = "clauseId")]
    pub clause_id: String,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "hasIssue")]
    pub has_issue: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaybookInsight {
    #[serde(rename = "criterionId")]
    pub criterion_id: String,
    pub title: String,
    pub status: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarityAnalysisEntry {
    pub requirement: String,
    #[serde(rename = "matchedClauseTitle")]
    pub matched_clause_title: Option<String>,
    pub met: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviationInsight {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionItem {
    pub id: String,
    pub description: String,
    pub severity: crate::model::Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftMetadata {
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    #[serde(rename = "clauseCount")]
    pub clause_count: usize,
    #[serde(rename = "checklistItemCount")]
    pub checklist_item_count: usize,
    #[serde(rename = "reportExpiry")]
    pub report_expiry: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    #[serde(rename = "playbookKey")]
    pub playbook_key: String,
    pub classification: String,
}

/// The response body of `POST /api/contract-review`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub version: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    #[serde(rename = "generalInformation")]
    pub general_information: GeneralInformation,
    #[serde(rename = "contractSummary")]
    pub contract_summary: ContractSummary,
    #[serde(rename = "issuesToAddress")]
    pub issues_to_address: Vec<Issue>,
    #[serde(rename = "criteriaMet")]
    pub criteria_met: Vec<ChecklistCriterion>,
    #[serde(rename = "clauseFindings")]
    pub clause_findings: Vec<ClauseFinding>,
    #[serde(rename = "proposedEdits")]
    pub proposed_edits: Vec<ProposedEdit>,
    #[serde(rename = "playbookInsights")]
    pub playbook_insights: Vec<PlaybookInsight>,
    #[serde(rename = "similarityAnalysis")]
    pub similarity_analysis: Vec<SimilarityAnalysisEntry>,
    #[serde(rename = "deviationInsights")]
    pub deviation_insights: Vec<DeviationInsight>,
    #[serde(rename = "actionItems")]
    pub action_items: Vec<ActionItem>,
    #[serde(rename = "draftMetadata")]
    pub draft_metadata: DraftMetadata,
    pub metadata: ReportMetadata,
}

/// Classify a 0-100 compliance score into the coarse bucket surfaced in
/// `metadata.classification`.
pub fn classify_compliance_score(score: i32) -> &'static str {
    if score >= 90 {
        "compliant"
    } else if score >= 70 {
        "needs-attention"
    } else {
        "review-recommended"
    }
}

/// Normalize a caller-supplied `reportExpiry`: if it parses as RFC 3339,
/// keep it; otherwise (including when absent) replace it with `now + 24h`
/// in RFC 3339. `now` is injected by the caller since the core itself
/// never reads the clock (spec §5 purity).
pub fn normalise_report_expiry(raw: Option<&str>, now: chrono::DateTime<chrono::Utc>) -> String {
    if let Some(raw) = raw {
        if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
            return parsed.with_timezone(&chrono::Utc).to_rfc3339();
        }
    }
    (now + chrono::Duration::hours(24)).to_rfc3339()
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_expiry_falls_back_to_now_plus_24h() {
        let now = chrono::DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let normalized = normalise_report_expiry(Some("not-a-date"), now);
        assert_eq!(normalized, "2026-01-02T00:00:00+00:00");
    }

    #[test]
    fn parseable_expiry_is_kept() {
        let now = chrono::Utc::now();
        let normalized = normalise_report_expiry(Some("2030-06-01T00:00:00Z"), now);
        assert!(normalized.starts_with("2030-06-01"));
    }

    #[test]
    fn classification_buckets() {
        assert_eq!(classify_compliance_score(95), "compliant");
        assert_eq!(classify_compliance_score(75), "needs-attention");
        assert_eq!(classify_compliance_score(40), "review-recommended");
    }
}
