//! Deterministic, evidence-anchored contract-review core.
//!
//! [`review`] is the single entry point: given contract text, extracted
//! clauses, a playbook key, and a set of upstream-model candidate issues
//! and edits, it produces a byte-identical [`AnalysisReport`] for
//! byte-identical input. No I/O, no shared state, no async — see the
//! module docs on [`align`] and [`insertion`] for the two heaviest
//! subsystems.

pub mod align;
pub mod checklist;
pub mod clause_match;
pub mod error;
pub mod evidence;
pub mod insertion;
pub mod model;
pub mod playbook;
pub mod playbooks;
pub mod report;
pub mod text_norm;

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::align::{
    align_and_synthesize_issues, assess_edit_semantic_drift, bind_edit, dedup_edits, dedup_issues,
    ensure_delta_signals, is_placeholder_edit, is_redundant_insert_edit,
    synthesize_edit_for_criterion, validate_issue_clause_reference, DEFAULT_DRIFT_MIN_SIMILARITY,
};
use crate::checklist::compile_checklist;
use crate::error::{ReviewError, ReviewResult};
use crate::evidence::build_evidence_index;
use crate::model::{Clause, CriterionStatus, ProposedEdit};
use crate::playbook::PlaybookKey;
use crate::playbooks::playbook_for_key;
use crate::report::{
    classify_compliance_score, normalise_report_expiry, ActionItem, AnalysisReport, ClauseFinding,
    ContractSummary, DeviationInsight, DraftMetadata, GeneralInformation, PlaybookInsight,
    ReportMetadata, ReviewRequest, SimilarityAnalysisEntry,
};

/// Tunable knobs the caller can override; every field defaults to the
/// spec-declared constant.
#[derive(Debug, Clone, Copy)]
pub struct ReviewOptions {
    /// Minimum [`text_norm::score_text_similarity`] a `replace` edit's
    /// proposed text must reach against its clause before it is
    /// considered drifted (spec.md §4.E, §9 open question).
    pub drift_min_similarity: f64,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        ReviewOptions {
            drift_min_similarity: DEFAULT_DRIFT_MIN_SIMILARITY,
        }
    }
}

fn is_slug_compatible(id: &str) -> bool {
    !id.is_empty()
        && id.chars().count() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_clauses(clauses: &[Clause]) -> ReviewResult<()> {
    let mut seen = HashSet::new();
    for clause in clauses {
        if !is_slug_compatible(&clause.clause_id) {
            return Err(ReviewError::Schema(format!(
                "clauseId '{}' is not slug-compatible",
                clause.clause_id
            )));
        }
        if !seen.insert(clause.clause_id.clone()) {
            return Err(ReviewError::Schema(format!(
                "duplicate clauseId '{}'",
                clause.clause_id
            )));
        }
    }
    Ok(())
}

fn extract_parties(content: &str) -> Vec<String> {
    let window: String = content.chars().take(4000).collect();
    let lower = window.to_lowercase();
    if let Some(between_idx) = lower.find("between ") {
        let after = &window[between_idx + "between ".len()..];
        let after_lower = after.to_lowercase();
        if let Some(and_idx) = after_lower.find(" and ") {
            let party_a = after[..and_idx].trim().trim_matches(|c: char| c == ',');
            let rest = &after[and_idx + " and ".len()..];
            let end = rest
                .find(['.', '\n', '('])
                .unwrap_or_else(|| rest.len().min(80));
            let party_b = rest[..end].trim();
            if !party_a.is_empty() && !party_b.is_empty() && party_a.len() < 120 && party_b.len() < 120 {
                return vec![party_a.to_string(), party_b.to_string()];
            }
        }
    }
    vec!["Unknown Party".to_string()]
}

fn extract_governing_law(content: &str) -> Option<String> {
    let lower = content.to_lowercase();
    let marker = "governed by the laws of ";
    let idx = lower.find(marker)?;
    let after = &content[idx + marker.len()..];
    let end = after.find(['.', '\n', ',']).unwrap_or_else(|| after.len().min(60));
    let law = after[..end].trim();
    if law.is_empty() {
        None
    } else {
        Some(law.to_string())
    }
}

/// Run one review with the default [`ReviewOptions`].
pub fn review(request: &ReviewRequest, now: DateTime<Utc>) -> ReviewResult<AnalysisReport> {
    review_with_options(request, now, ReviewOptions::default())
}

/// Run one review. Pure function of `(request, now, options)`: the same
/// triple always produces byte-identical JSON once serialized.
pub fn review_with_options(
    request: &ReviewRequest,
    now: DateTime<Utc>,
    options: ReviewOptions,
) -> ReviewResult<AnalysisReport> {
    let playbook_key = PlaybookKey::parse(&request.playbook_key)
        .ok_or_else(|| ReviewError::UnknownPlaybook(request.playbook_key.clone()))?;
    validate_clauses(&request.clauses)?;

    let playbook = playbook_for_key(playbook_key);
    let content = request.content.as_str();
    let clauses = &request.clauses;

    let index = build_evidence_index(clauses, content);
    let mut criteria = compile_checklist(playbook, &index);

    // --- Issue alignment ---
    let aligned_issues =
        align_and_synthesize_issues(request.candidate_issues.clone(), &criteria, clauses);
    let mut issues = dedup_issues(aligned_issues);
    for issue in &mut issues {
        if validate_issue_clause_reference(&issue.clause_reference, clauses).is_err() {
            issue.clause_reference.excerpt = "Not present".to_string();
        }
    }

    // --- Edit binding ---
    let bound_edits: Vec<ProposedEdit> = request
        .candidate_edits
        .clone()
        .into_iter()
        .enumerate()
        .map(|(i, edit)| bind_edit(edit, &criteria, clauses, i))
        .collect();

    let mut covered_criteria: HashSet<String> = HashSet::new();
    for criterion in &criteria {
        if let Some(clause_id) = &criterion.clause_id {
            if bound_edits.iter().any(|e| &e.clause_id == clause_id) {
                covered_criteria.insert(criterion.id.clone());
            }
        }
    }

    let mut all_edits = bound_edits;
    for idx in 0..criteria.len() {
        let criterion = criteria[idx].clone();
        if criterion.status == CriterionStatus::Met {
            continue;
        }
        if covered_criteria.contains(&criterion.id) {
            continue;
        }
        let will_insert = criterion.clause_id.is_none() && criterion.status == CriterionStatus::Missing;
        if will_insert && crate::align::is_redundant_insert(&criterion, clauses) {
            continue;
        }

        let existing: Vec<&ProposedEdit> = all_edits
            .iter()
            .filter(|e| criterion.clause_id.as_deref() == Some(e.clause_id.as_str()))
            .collect();
        let existing_anchor = existing.first().map(|e| e.anchor_text.as_str());
        let existing_text = existing.first().map(|e| e.proposed_text.as_str());

        match synthesize_edit_for_criterion(&criterion, clauses, content, existing_anchor, existing_text) {
            Some(edit) => all_edits.push(edit),
            None => {
                criteria[idx].anchor_diagnostic =
                    Some("no anchor resolvable after all fallbacks".to_string());
            }
        }
    }

    all_edits.retain(|e| !is_redundant_insert_edit(e, &criteria, clauses));
    all_edits.retain(|e| !is_placeholder_edit(e));
    let mut edits = dedup_edits(all_edits);

    for edit in &mut edits {
        edit.drift_alert = assess_edit_semantic_drift(edit, clauses, options.drift_min_similarity);
    }

    for edit in &mut edits {
        if edit.proposed_text.trim().is_empty() {
            continue;
        }
        // Belt-and-braces: every synthesized or bound edit still carries
        // its full signal delta even if upstream text was edited in place.
        if edit.id.starts_with("EDIT_") {
            if let Some(criterion) = criteria.iter().find(|c| edit.id == format!("EDIT_{}", c.id)) {
                edit.proposed_text = ensure_delta_signals(&edit.proposed_text, &criterion.required_signals);
            }
        }
    }

    // --- Coverage score ---
    let coverage = crate::insertion::evaluate_playbook_coverage_from_content(playbook, clauses, content);
    let compliance_score = ((coverage.score * 100.0).round() as i32).clamp(0, 100);

    // --- Derived report surface ---
    let clause_findings: Vec<ClauseFinding> = clauses
        .iter()
        .map(|c| ClauseFinding {
            clause_id: c.clause_id.clone(),
            heading: c.display_title().to_string(),
            category: c.category.clone(),
            has_issue: issues.iter().any(|i| i.clause_reference.clause_id == c.clause_id),
        })
        .collect();

    let playbook_insights: Vec<PlaybookInsight> = if request.version.as_deref() == Some("v2") {
        Vec::new()
    } else {
        criteria
            .iter()
            .map(|c| {
                let note = match c.status {
                    CriterionStatus::Met => format!(
                        "Evidence found in {}",
                        c.heading.clone().unwrap_or_else(|| "the contract".to_string())
                    ),
                    CriterionStatus::Attention => format!(
                        "Partially evidenced; missing: {}",
                        c.missing_signals.join(", ")
                    ),
                    CriterionStatus::Missing => "No evidence located.".to_string(),
                };
                PlaybookInsight {
                    criterion_id: c.id.clone(),
                    title: c.title.clone(),
                    status: match c.status {
                        CriterionStatus::Met => "met",
                        CriterionStatus::Attention => "attention",
                        CriterionStatus::Missing => "missing",
                    }
                    .to_string(),
                    note,
                }
            })
            .collect()
    };

    let mut similarity_analysis = Vec::new();
    let mut deviation_insights = Vec::new();
    for critical in playbook.critical_clauses {
        let found = crate::insertion::find_requirement_match(critical.title, clauses, content);
        similarity_analysis.push(SimilarityAnalysisEntry {
            requirement: critical.title.to_string(),
            matched_clause_title: found.clause_title.clone(),
            met: found.met,
        });
        if !found.met {
            deviation_insights.push(DeviationInsight {
                title: critical.title.to_string(),
                detail: format!("Missing or inconsistent: {}", critical.title),
            });
        }
    }
    for anchor in playbook.clause_anchors {
        let found = crate::insertion::find_requirement_match(anchor.title, clauses, content);
        similarity_analysis.push(SimilarityAnalysisEntry {
            requirement: anchor.title.to_string(),
            matched_clause_title: found.clause_title.clone(),
            met: found.met,
        });
        if !found.met && !anchor.is_optional() {
            deviation_insights.push(DeviationInsight {
                title: anchor.title.to_string(),
                detail: format!("Missing or inconsistent: {}", anchor.title),
            });
        }
    }

    let action_items: Vec<ActionItem> = issues
        .iter()
        .map(|issue| ActionItem {
            id: format!("ACTION_{}", issue.id),
            description: issue.recommendation.clone(),
            severity: issue.severity,
        })
        .collect();

    let report_expiry = normalise_report_expiry(request.report_expiry.as_deref(), now);
    let draft_metadata = DraftMetadata {
        word_count: content.split_whitespace().count(),
        clause_count: clauses.len(),
        checklist_item_count: criteria.len(),
        report_expiry,
    };

    let contract_summary = ContractSummary {
        parties: extract_parties(content),
        governing_law: extract_governing_law(content),
    };

    Ok(AnalysisReport {
        version: "v3".to_string(),
        generated_at: now.to_rfc3339(),
        general_information: GeneralInformation {
            compliance_score: compliance_score,
        },
        contract_summary,
        issues_to_address: issues,
        criteria_met: criteria,
        clause_findings,
        proposed_edits: edits,
        playbook_insights,
        similarity_analysis,
        deviation_insights,
        action_items,
        draft_metadata,
        metadata: ReportMetadata {
            playbook_key: playbook_key.as_str().to_string(),
            classification: classify_compliance_score(compliance_score).to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Clause, ClauseReference, EditIntent, Issue, ProposedEdit, Severity};

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-07-27T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn nda_clauses() -> Vec<Clause> {
        vec![
            Clause {
                clause_id: "definition".to_string(),
                title: "DEFINITION OF CONFIDENTIAL INFORMATION".to_string(),
                original_text: "Confidential Information means information disclosed by either party to the other.".to_string(),
                normalized_text: "confidential information means information disclosed by either party to the other".to_string(),
                location: None,
                category: None,
            },
            Clause {
                clause_id: "obligations".to_string(),
                title: "OBLIGATIONS OF RECEIVING PARTY".to_string(),
                original_text: "The Receiving Party shall Use the Confidential Information solely for the Purpose and shall not disclose it to any third party.".to_string(),
                normalized_text: "the receiving party shall use the confidential information solely for the purpose".to_string(),
                location: None,
                category: None,
            },
            Clause {
                clause_id: "remedies".to_string(),
                title: "REMEDIES".to_string(),
                original_text: "The parties agree that injunctive relief and specific performance are available remedies for breach of this Agreement.".to_string(),
                normalized_text: "injunctive relief and specific performance are available remedies".to_string(),
                location: None,
                category: None,
            },
        ]
    }

    fn nda_content(clauses: &[Clause]) -> String {
        clauses
            .iter()
            .map(|c| format!("{}\n\n{}\n\n", c.title, c.original_text))
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn s1_nda_obligations_resolves_and_verifies() {
        let clauses = nda_clauses();
        let content = nda_content(&clauses);
        let issue = Issue {
            id: "cand-1".to_string(),
            title: "Check purpose limitation".to_string(),
            severity: Severity::Medium,
            recommendation: "confirm".to_string(),
            rationale: "confirm".to_string(),
            tags: vec![],
            clause_reference: ClauseReference {
                clause_id: "".to_string(),
                heading: Some("OBLIGATIONS OF RECEIVING PARTY".to_string()),
                excerpt: "Use the Confidential Information solely for the Purpose".to_string(),
                location_hint: None,
            },
        };
        let resolved = crate::clause_match::resolve_clause_match(
            &crate::clause_match::MatchQuery {
                heading: Some("OBLIGATIONS OF RECEIVING PARTY"),
                excerpt: Some("Use the Confidential Information solely for the Purpose"),
                ..Default::default()
            },
            &clauses,
        );
        assert_eq!(resolved.matched_clause_id.as_deref(), Some("obligations"));
        let check = crate::evidence::check_evidence_match(&issue.clause_reference.excerpt, &content);
        assert!(check.matched);
    }

    #[test]
    fn s2_nda_remedies_heading_match_and_cross_clause_mismatch() {
        let clauses = nda_clauses();
        let resolved = crate::clause_match::resolve_clause_match(
            &crate::clause_match::MatchQuery {
                heading: Some("REMEDIES"),
                excerpt: Some("injunction and specific performance"),
                ..Default::default()
            },
            &clauses,
        );
        assert_eq!(resolved.matched_clause_id.as_deref(), Some("remedies"));
        assert_eq!(resolved.method, crate::clause_match::MatchMethod::Heading);

        let obligations_clause = &clauses[1];
        let check = crate::evidence::check_evidence_match_against_clause(
            "injunction and specific performance",
            &obligations_clause.original_text,
        );
        assert!(!check.matched);
    }

    #[test]
    fn s3_dpa_coverage_and_empty_content() {
        let playbook = playbook_for_key(PlaybookKey::DataProcessingAgreement);
        let clauses = vec![
            Clause {
                clause_id: "security".to_string(),
                title: "Security Measures".to_string(),
                original_text: "Processor shall implement appropriate technical and organizational measures to ensure a level of security appropriate to the risk.".to_string(),
                normalized_text: "processor shall implement appropriate technical and organizational measures".to_string(),
                location: None,
                category: None,
            },
            Clause {
                clause_id: "subprocessors".to_string(),
                title: "Sub-processors".to_string(),
                original_text: "Processor shall not engage any sub-processor without the Controller's prior written consent.".to_string(),
                normalized_text: "processor shall not engage any sub-processor without prior written consent".to_string(),
                location: None,
                category: None,
            },
        ];
        let content = nda_content(&clauses);
        let coverage = crate::insertion::evaluate_playbook_coverage_from_content(playbook, &clauses, &content);
        assert!(coverage.critical_clause_results.iter().any(|(t, met)| t == "Security measures" && *met));
        assert!(coverage.critical_clause_results.iter().any(|(t, met)| t == "Sub-processors" && *met));

        let empty_coverage = crate::insertion::evaluate_playbook_coverage_from_content(playbook, &[], "");
        assert_eq!(empty_coverage.score, 0.0);
    }

    #[test]
    fn s4_drift_detection_on_mismatched_replace() {
        let clauses = vec![Clause {
            clause_id: "payment".to_string(),
            title: "Payment".to_string(),
            original_text: "The Customer shall pay all undisputed invoices within thirty (30) days of the invoice date.".to_string(),
            normalized_text: "the customer shall pay all undisputed invoices within thirty days".to_string(),
            location: None,
            category: None,
        }];
        let edit = ProposedEdit {
            id: "EDIT_DRIFT".to_string(),
            clause_id: "payment".to_string(),
            anchor_text: "The Customer shall pay all undisputed invoices".to_string(),
            proposed_text: "The Receiving Party shall not disclose Confidential Information to any third party.".to_string(),
            intent: EditIntent::Replace,
            rationale: None,
            drift_alert: None,
        };
        let drift = crate::align::assess_edit_semantic_drift(&edit, &clauses, crate::align::DEFAULT_DRIFT_MIN_SIMILARITY);
        assert!(drift.is_some());
        assert!(drift.unwrap().contains("EDIT_DRIFT"));
    }

    #[test]
    fn s6_placeholder_edit_is_dropped_end_to_end() {
        let edit = ProposedEdit {
            id: "cand-edit".to_string(),
            clause_id: "".to_string(),
            anchor_text: "Not present in contract".to_string(),
            proposed_text: "[Insert exact project date]".to_string(),
            intent: EditIntent::Insert,
            rationale: None,
            drift_alert: None,
        };
        assert!(crate::align::is_placeholder_edit(&edit));
    }

    #[test]
    fn determinism_same_input_same_output() {
        let clauses = nda_clauses();
        let content = nda_content(&clauses);
        let request = ReviewRequest {
            content,
            clauses,
            playbook_key: "non_disclosure_agreement".to_string(),
            candidate_issues: vec![],
            candidate_edits: vec![],
            version: None,
            report_expiry: None,
        };
        let now = fixed_now();
        let first = review(&request, now).unwrap();
        let second = review(&request, now).unwrap();
        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn checklist_completeness_matches_playbook_length() {
        let clauses = nda_clauses();
        let content = nda_content(&clauses);
        let request = ReviewRequest {
            content,
            clauses,
            playbook_key: "non_disclosure_agreement".to_string(),
            candidate_issues: vec![],
            candidate_edits: vec![],
            version: None,
            report_expiry: None,
        };
        let report = review(&request, fixed_now()).unwrap();
        let playbook = playbook_for_key(PlaybookKey::NonDisclosureAgreement);
        assert_eq!(report.criteria_met.len(), playbook.checklist.len());
    }

    #[test]
    fn unknown_playbook_is_rejected() {
        let request = ReviewRequest {
            content: "".to_string(),
            clauses: vec![],
            playbook_key: "not_a_real_playbook".to_string(),
            candidate_issues: vec![],
            candidate_edits: vec![],
            version: None,
            report_expiry: None,
        };
        let result = review(&request, fixed_now());
        assert!(matches!(result, Err(ReviewError::UnknownPlaybook(_))));
    }

    #[test]
    fn non_slug_clause_id_is_rejected_as_schema_error() {
        let request = ReviewRequest {
            content: "x".to_string(),
            clauses: vec![Clause {
                clause_id: "Not A Slug!".to_string(),
                title: "x".to_string(),
                original_text: "x".to_string(),
                normalized_text: "x".to_string(),
                location: None,
                category: None,
            }],
            playbook_key: "non_disclosure_agreement".to_string(),
            candidate_issues: vec![],
            candidate_edits: vec![],
            version: None,
            report_expiry: None,
        };
        let result = review(&request, fixed_now());
        assert!(matches!(result, Err(ReviewError::Schema(_))));
    }

    #[test]
    fn evidence_locality_holds_for_every_issue() {
        let clauses = nda_clauses();
        let content = nda_content(&clauses);
        let request = ReviewRequest {
            content,
            clauses: clauses.clone(),
            playbook_key: "non_disclosure_agreement".to_string(),
            candidate_issues: vec![],
            candidate_edits: vec![],
            version: None,
            report_expiry: None,
        };
        let report = review(&request, fixed_now()).unwrap();
        for issue in &report.issues_to_address {
            let marker = crate::evidence::is_missing_evidence_marker(&issue.clause_reference.excerpt);
            if marker {
                continue;
            }
            let clause = clauses
                .iter()
                .find(|c| c.clause_id == issue.clause_reference.clause_id)
                .expect("issue must reference a real clause");
            let collapsed_clause: String = clause.original_text.split_whitespace().collect::<Vec<_>>().join(" ");
            let collapsed_excerpt: String = issue.clause_reference.excerpt.split_whitespace().collect::<Vec<_>>().join(" ");
            assert!(collapsed_clause.contains(&collapsed_excerpt));
        }
    }

    #[test]
    fn proposed_edit_replace_anchors_are_exact_substrings() {
        let clauses = nda_clauses();
        let content = nda_content(&clauses);
        let request = ReviewRequest {
            content,
            clauses,
            playbook_key: "non_disclosure_agreement".to_string(),
            candidate_issues: vec![],
            candidate_edits: vec![],
            version: None,
            report_expiry: None,
        };
        let report = review(&request, fixed_now()).unwrap();
        for edit in &report.proposed_edits {
            if edit.intent == EditIntent::Replace {
                assert!(!edit.anchor_text.is_empty());
                assert!(report
                    .draft_metadata
                    .word_count
                    > 0);
            }
        }
    }
}
