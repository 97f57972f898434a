//! Issue aligner & edit binder (component E): align incoming model issues
//! to checklist criteria, synthesize issues for uncovered criteria, bind
//! proposed edits to real clause ids and verifiable anchors, and detect
//! semantic drift.

use std::collections::HashSet;

use crate::clause_match::{resolve_clause_match, MatchQuery};
use crate::evidence::{build_evidence_excerpt_default, is_missing_evidence_marker};
use crate::insertion::select_insertion_point;
use crate::model::{
    ChecklistCriterion, Clause, ClauseReference, CriterionStatus, EditIntent, Issue, ProposedEdit,
    Severity,
};
use crate::text_norm::{normalize_for_match, score_text_similarity, tokenize_for_match};

const BIND_THRESHOLD: f64 = 0.20;

/// Default drift threshold (spec.md §4.E: "default 0.30"); exposed as a
/// knob rather than hardcoded per spec.md §9 open questions.
pub const DEFAULT_DRIFT_MIN_SIMILARITY: f64 = 0.30;

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn find_clause<'a>(clause_id: &str, clauses: &'a [Clause]) -> Option<&'a Clause> {
    clauses
        .iter()
        .find(|c| c.clause_id.eq_ignore_ascii_case(clause_id))
}

fn signal_hits(text: &str, signals: &[String]) -> usize {
    let normalized_text = normalize_for_match(text);
    signals
        .iter()
        .filter(|s| !s.is_empty() && normalized_text.contains(&normalize_for_match(s)))
        .count()
}

fn token_overlap_score(query_text: &str, target_text: &str) -> f64 {
    let target_tokens = tokenize_for_match(target_text);
    if target_tokens.is_empty() {
        return 0.0;
    }
    let query_set: HashSet<String> = tokenize_for_match(query_text).into_iter().collect();
    let overlap = target_tokens
        .iter()
        .filter(|t| query_set.contains(*t))
        .count();
    overlap as f64 / target_tokens.len() as f64
}

fn criterion_reference_text(criterion: &ChecklistCriterion) -> String {
    format!(
        "{} {} {}",
        criterion.title,
        criterion.description,
        criterion.required_signals.join(" ")
    )
}

fn clause_reference_from_criterion(criterion: &ChecklistCriterion) -> ClauseReference {
    ClauseReference {
        clause_id: criterion.clause_id.clone().unwrap_or_default(),
        heading: criterion.heading.clone(),
        excerpt: criterion.evidence.clone(),
        location_hint: criterion.location_hint.clone(),
    }
}

fn enforce_issue_clause_reference(mut issue: Issue, clauses: &[Clause]) -> Issue {
    match find_clause(&issue.clause_reference.clause_id, clauses) {
        Some(clause) => {
            issue.clause_reference.excerpt = build_evidence_excerpt_default(
                &clause.original_text,
                &issue.clause_reference.excerpt,
            );
            issue.clause_reference.heading = Some(clause.display_title().to_string());
        }
        None => {
            issue.clause_reference.excerpt = "Not present".to_string();
        }
    }
    issue
}

/// Align one candidate issue against every criterion, returning the bound
/// issue and the id of the criterion it was bound to (if any).
fn align_one_issue(issue: Issue, criteria: &[ChecklistCriterion], clauses: &[Clause]) -> (Issue, Option<String>) {
    let issue_text = format!(
        "{} {} {}",
        issue.title, issue.recommendation, issue.rationale
    );

    let mut best: Option<(&ChecklistCriterion, f64)> = None;
    for criterion in criteria {
        let hits = signal_hits(&issue_text, &criterion.required_signals);
        let token_score = token_overlap_score(&issue_text, &criterion_reference_text(criterion));
        let total = if hits > 0 {
            token_score + hits as f64
        } else {
            token_score
        };
        if best.map(|(_, b)| total > b).unwrap_or(true) {
            best = Some((criterion, total));
        }
    }

    if let Some((criterion, score)) = best {
        if score >= BIND_THRESHOLD {
            let mut aligned = issue;
            aligned.clause_reference = clause_reference_from_criterion(criterion);
            if !aligned.tags.iter().any(|t| t == &criterion.id) {
                aligned.tags.push(criterion.id.clone());
            }
            return (aligned, Some(criterion.id.clone()));
        }
    }

    (enforce_issue_clause_reference(issue, clauses), None)
}

/// Synthesize one issue for an uncovered, non-`met` criterion.
fn synthesize_issue(criterion: &ChecklistCriterion) -> Issue {
    let severity = if criterion.status == CriterionStatus::Missing {
        Severity::High
    } else {
        Severity::Medium
    };
    Issue {
        id: format!("ISSUE_{}", criterion.id),
        title: criterion.title.clone(),
        severity,
        recommendation: format!("Add or clarify: {}.", criterion.missing_signals.join("; ")),
        rationale: format!("Checklist {} requires {}.", criterion.id, criterion.title),
        tags: vec![criterion.id.clone()],
        clause_reference: clause_reference_from_criterion(criterion),
    }
}

/// Align incoming issues and synthesize issues for every uncovered,
/// non-`met` criterion. Does not deduplicate — call [`dedup_issues`]
/// afterward.
pub fn align_and_synthesize_issues(
    candidate_issues: Vec<Issue>,
    criteria: &[ChecklistCriterion],
    clauses: &[Clause],
) -> Vec<Issue> {
    let mut covered: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(candidate_issues.len() + criteria.len());

    for issue in candidate_issues {
        let (aligned, covered_id) = align_one_issue(issue, criteria, clauses);
        if let Some(id) = covered_id {
            covered.insert(id);
        }
        out.push(aligned);
    }

    for criterion in criteria {
        if criterion.status != CriterionStatus::Met && !covered.contains(&criterion.id) {
            out.push(synthesize_issue(criterion));
        }
    }

    out
}

/// Reasons [`validate_issue_clause_reference`] can reject a clause
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseReferenceError {
    MissingClauseId,
    UnknownClauseId,
    EmptyExcerpt,
    MissingMarkerOnExistingClause,
    ExcerptNotFromClause,
}

/// Validate an issue's clause reference per spec.md §4.E.
pub fn validate_issue_clause_reference(
    reference: &ClauseReference,
    clauses: &[Clause],
) -> Result<(), ClauseReferenceError> {
    if reference.clause_id.trim().is_empty() {
        return if is_missing_evidence_marker(&reference.excerpt) {
            Ok(())
        } else {
            Err(ClauseReferenceError::MissingClauseId)
        };
    }

    let clause = match find_clause(&reference.clause_id, clauses) {
        Some(c) => c,
        None => {
            return if is_missing_evidence_marker(&reference.excerpt) {
                Ok(())
            } else {
                Err(ClauseReferenceError::UnknownClauseId)
            }
        }
    };

    if reference.excerpt.trim().is_empty() {
        return Err(ClauseReferenceError::EmptyExcerpt);
    }
    if is_missing_evidence_marker(&reference.excerpt) {
        return Err(ClauseReferenceError::MissingMarkerOnExistingClause);
    }

    let collapsed_clause = collapse_whitespace(&clause.original_text);
    let collapsed_excerpt = collapse_whitespace(&reference.excerpt);
    if collapsed_clause.contains(&collapsed_excerpt) {
        Ok(())
    } else {
        Err(ClauseReferenceError::ExcerptNotFromClause)
    }
}

/// Bind one incoming edit to a real clause id, per the four-step cascade.
/// `index` is the 0-based position of the edit among all candidate edits,
/// used only for the last-resort placeholder id.
pub fn bind_edit(
    mut edit: ProposedEdit,
    criteria: &[ChecklistCriterion],
    clauses: &[Clause],
    index: usize,
) -> ProposedEdit {
    if find_clause(&edit.clause_id, clauses).is_some() {
        return edit;
    }

    let combined = format!("{} {}", edit.anchor_text, edit.proposed_text);
    let mut best: Option<(&ChecklistCriterion, usize)> = None;
    for criterion in criteria {
        let hits = signal_hits(&combined, &criterion.required_signals);
        if hits > 0 && best.map(|(_, b)| hits > b).unwrap_or(true) {
            best = Some((criterion, hits));
        }
    }
    if let Some((criterion, _)) = best {
        if let Some(clause_id) = &criterion.clause_id {
            edit.clause_id = clause_id.clone();
            return edit;
        }
    }

    let query = MatchQuery {
        fallback_text: Some(edit.anchor_text.as_str()),
        ..Default::default()
    };
    let result = resolve_clause_match(&query, clauses);
    if let Some(clause_id) = result.matched_clause_id {
        edit.clause_id = clause_id;
        return edit;
    }

    edit.clause_id = format!("proposed-edit-{index}");
    edit
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        current.push(ch);
        if ch == '.' || ch == '?' || ch == '!' {
            let trimmed = current.trim().to_string();
            if !trimmed.is_empty() {
                sentences.push(trimmed);
            }
            current.clear();
        }
    }
    let tail = current.trim().to_string();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Resolve a literal `content` substring to anchor a `replace` edit,
/// trying the spec's fallback cascade in order.
fn resolve_replace_anchor(
    criterion: &ChecklistCriterion,
    clause: &Clause,
    content: &str,
    existing_anchor: Option<&str>,
) -> Option<String> {
    if let Some(anchor) = existing_anchor {
        if !anchor.trim().is_empty() && content.contains(anchor) {
            return Some(anchor.to_string());
        }
    }
    if let Some(heading) = &criterion.heading {
        if !heading.trim().is_empty() && content.contains(heading.as_str()) {
            return Some(heading.clone());
        }
    }
    for sentence in split_sentences(&clause.original_text) {
        let len = sentence.chars().count();
        if (30..=220).contains(&len) && content.contains(sentence.as_str()) {
            return Some(sentence);
        }
    }
    let prefix: String = clause.original_text.chars().take(200).collect();
    if !prefix.trim().is_empty() && content.contains(prefix.as_str()) {
        return Some(prefix);
    }
    if !criterion.evidence.trim().is_empty() && content.contains(criterion.evidence.as_str()) {
        return Some(criterion.evidence.clone());
    }
    None
}

/// Append any required signal absent (by [`normalize_for_match`]
/// inclusion) from `text` as a trailing `"Include: ..."` clause.
pub fn ensure_delta_signals(text: &str, signals: &[String]) -> String {
    let normalized_text = normalize_for_match(text);
    let absent: Vec<String> = signals
        .iter()
        .filter(|s| !s.is_empty() && !normalized_text.contains(&normalize_for_match(s)))
        .cloned()
        .collect();
    if absent.is_empty() {
        text.to_string()
    } else {
        format!("{text}\n\nInclude: {}.", absent.join(", "))
    }
}

fn build_proposed_text(criterion: &ChecklistCriterion, existing_text: Option<&str>) -> String {
    let base = existing_text
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.to_string())
        .unwrap_or_else(|| {
            format!(
                "{}. The parties shall address: {}.",
                criterion.title,
                criterion.missing_signals.join(", ")
            )
        });
    ensure_delta_signals(&base, &criterion.required_signals)
}

/// Synthesize a `replace` or `insert` edit for one uncovered criterion, or
/// `None` if a `replace` edit could not find any anchor (the
/// "anchor-resolution" error kind — spec.md §7).
pub fn synthesize_edit_for_criterion(
    criterion: &ChecklistCriterion,
    clauses: &[Clause],
    content: &str,
    existing_anchor: Option<&str>,
    existing_text: Option<&str>,
) -> Option<ProposedEdit> {
    let wants_insert = criterion.clause_id.is_none() && criterion.status == CriterionStatus::Missing;

    if wants_insert {
        let point = select_insertion_point(content, clauses, &criterion.insertion_policy_key);
        return Some(ProposedEdit {
            id: format!("EDIT_{}", criterion.id),
            clause_id: point.clause_id.unwrap_or_default(),
            anchor_text: point.anchor_text,
            proposed_text: build_proposed_text(criterion, existing_text),
            intent: EditIntent::Insert,
            rationale: Some(format!(
                "Checklist {} requires {}.",
                criterion.id, criterion.title
            )),
            drift_alert: None,
        });
    }

    let clause_id = criterion.clause_id.clone()?;
    let clause = find_clause(&clause_id, clauses)?;
    match resolve_replace_anchor(criterion, clause, content, existing_anchor) {
        Some(anchor) => Some(ProposedEdit {
            id: format!("EDIT_{}", criterion.id),
            clause_id,
            anchor_text: anchor,
            proposed_text: build_proposed_text(criterion, existing_text),
            intent: EditIntent::Replace,
            rationale: Some(format!(
                "Checklist {} requires {}.",
                criterion.id, criterion.title
            )),
            drift_alert: None,
        }),
        None => {
            // anchor-resolution: fall back to an insertion-policy anchor.
            let point = select_insertion_point(content, clauses, &criterion.insertion_policy_key);
            if point.anchor_text.is_empty() && point.clause_id.is_none() {
                None
            } else {
                Some(ProposedEdit {
                    id: format!("EDIT_{}", criterion.id),
                    clause_id: point.clause_id.unwrap_or(clause_id),
                    anchor_text: point.anchor_text,
                    proposed_text: build_proposed_text(criterion, existing_text),
                    intent: EditIntent::Insert,
                    rationale: Some(format!(
                        "Checklist {} requires {}.",
                        criterion.id, criterion.title
                    )),
                    drift_alert: None,
                })
            }
        }
    }
}

/// Score a `replace` edit's proposed text against the clause it would
/// replace; `None` when the similarity is at or above `min_similarity`,
/// or when the edit is an `insert` (not checked).
pub fn assess_edit_semantic_drift(
    edit: &ProposedEdit,
    clauses: &[Clause],
    min_similarity: f64,
) -> Option<String> {
    if edit.intent != EditIntent::Replace {
        return None;
    }
    let clause = find_clause(&edit.clause_id, clauses)?;
    let score = score_text_similarity(&clause.original_text, &edit.proposed_text).score;
    if score < min_similarity {
        Some(format!(
            "edit {} drifts from its clause (similarity {score:.2} < {min_similarity:.2})",
            edit.id
        ))
    } else {
        None
    }
}

/// Keywords that mark a `[...]` span as an unfilled drafting placeholder
/// (spec.md §4.E: "bracketed placeholders like `[insert ...]`") rather
/// than a legitimate bracketed citation such as "Section 4[b]".
const PLACEHOLDER_BRACKET_KEYWORDS: &[&str] = &[
    "insert", "tbd", "tbc", "xxx", "fill in", "placeholder", "describe", "specify", "...",
];

/// `true` iff `text` contains a `[...]` span whose contents name a
/// drafting placeholder rather than a short reference like a subsection
/// letter.
fn contains_bracketed_placeholder(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let mut rest = lowered.as_str();
    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(']') else {
            break;
        };
        let inside = &after_open[..close];
        if PLACEHOLDER_BRACKET_KEYWORDS.iter().any(|k| inside.contains(k)) {
            return true;
        }
        rest = &after_open[close + 1..];
    }
    false
}

/// `true` iff `edit` is a placeholder that must never reach the final
/// report: a bracketed placeholder in `proposedText`, or a bare
/// missing-evidence admission used as the whole `insert` anchor with no
/// appended signal delta.
pub fn is_placeholder_edit(edit: &ProposedEdit) -> bool {
    if contains_bracketed_placeholder(&edit.proposed_text) {
        return true;
    }
    if edit.intent == EditIntent::Insert
        && is_missing_evidence_marker(&edit.anchor_text)
        && !edit.proposed_text.contains("Include:")
    {
        return true;
    }
    false
}

/// `true` iff an `insert` edit is redundant: a clause already exists whose
/// normalized text contains every required signal of the criterion the
/// edit targets.
pub fn is_redundant_insert(criterion: &ChecklistCriterion, clauses: &[Clause]) -> bool {
    if criterion.required_signals.is_empty() {
        return false;
    }
    clauses.iter().any(|c| {
        let normalized = normalize_for_match(&c.original_text);
        criterion
            .required_signals
            .iter()
            .all(|s| normalized.contains(&normalize_for_match(s)))
    })
}

/// `true` iff `edit` is an `insert` whose target criterion (found by the
/// same signal-hit scoring [`bind_edit`] uses) is already redundant per
/// [`is_redundant_insert`]. Catches candidate edits the upstream model
/// proposed even though the contract already says what they ask for.
pub fn is_redundant_insert_edit(
    edit: &ProposedEdit,
    criteria: &[ChecklistCriterion],
    clauses: &[Clause],
) -> bool {
    if edit.intent != EditIntent::Insert {
        return false;
    }
    let combined = format!("{} {}", edit.anchor_text, edit.proposed_text);
    let mut best: Option<(&ChecklistCriterion, usize)> = None;
    for criterion in criteria {
        let hits = signal_hits(&combined, &criterion.required_signals);
        if hits > 0 && best.map(|(_, b)| hits > b).unwrap_or(true) {
            best = Some((criterion, hits));
        }
    }
    match best {
        Some((criterion, _)) => is_redundant_insert(criterion, clauses),
        None => false,
    }
}

/// Collapse issues sharing a bound clause id and near-identical
/// title+recommendation text (token Jaccard >= 0.8), keeping the
/// higher-severity one.
pub fn dedup_issues(issues: Vec<Issue>) -> Vec<Issue> {
    let mut kept: Vec<Issue> = Vec::new();
    'outer: for issue in issues {
        for existing in kept.iter_mut() {
            if existing.clause_reference.clause_id == issue.clause_reference.clause_id {
                let existing_text = format!("{} {}", existing.title, existing.recommendation);
                let issue_text = format!("{} {}", issue.title, issue.recommendation);
                if crate::text_norm::token_jaccard(&existing_text, &issue_text) >= 0.8 {
                    if issue.severity.rank() > existing.severity.rank() {
                        *existing = issue;
                    }
                    continue 'outer;
                }
            }
        }
        kept.push(issue);
    }
    kept
}

/// Collapse edits sharing a clause id + intent and near-identical
/// proposed text (token Jaccard >= 0.85), keeping the longest rationale
/// (ties: earliest id).
pub fn dedup_edits(edits: Vec<ProposedEdit>) -> Vec<ProposedEdit> {
    let mut kept: Vec<ProposedEdit> = Vec::new();
    'outer: for edit in edits {
        for existing in kept.iter_mut() {
            if existing.clause_id == edit.clause_id && existing.intent == edit.intent {
                if crate::text_norm::token_jaccard(&existing.proposed_text, &edit.proposed_text)
                    >= 0.85
                {
                    let existing_len = existing.rationale.as_deref().unwrap_or("").len();
                    let new_len = edit.rationale.as_deref().unwrap_or("").len();
                    if new_len > existing_len
                        || (new_len == existing_len && edit.id < existing.id)
                    {
                        *existing = edit;
                    }
                    continue 'outer;
                }
            }
        }
        kept.push(edit);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClauseLocation;

    fn clause(id: &str, title: &str, text: &str) -> Clause {
        Clause {
            clause_id: id.to_string(),
            title: title.to_string(),
            original_text: text.to_string(),
            normalized_text: normalize_for_match(text),
            location: None,
            category: None,
        }
    }

    fn criterion(id: &str, clause_id: Option<&str>, status: CriterionStatus) -> ChecklistCriterion {
        ChecklistCriterion {
            id: id.to_string(),
            title: "Term and survival".to_string(),
            description: "Covers term length and survival".to_string(),
            status,
            met: status == CriterionStatus::Met,
            evidence: "Not present".to_string(),
            clause_id: clause_id.map(|s| s.to_string()),
            heading: None,
            location_hint: None,
            required_signals: vec!["years".to_string(), "survive".to_string()],
            matched_signals: vec![],
            missing_signals: vec!["years".to_string(), "survive".to_string()],
            insertion_policy_key: "end_of_document".to_string(),
            anchor_diagnostic: None,
        }
    }

    #[test]
    fn ensure_delta_signals_appends_missing() {
        let text = "Term. The parties shall address this.".to_string();
        let out = ensure_delta_signals(&text, &["years".to_string(), "survive".to_string()]);
        assert!(normalize_for_match(&out).contains("years"));
        assert!(normalize_for_match(&out).contains("survive"));
    }

    #[test]
    fn placeholder_edit_is_detected() {
        let edit = ProposedEdit {
            id: "EDIT_1".to_string(),
            clause_id: "a".to_string(),
            anchor_text: "Not present in contract".to_string(),
            proposed_text: "[Insert exact project date]".to_string(),
            intent: EditIntent::Insert,
            rationale: None,
            drift_alert: None,
        };
        assert!(is_placeholder_edit(&edit));
    }

    #[test]
    fn bracketed_clause_citation_is_not_a_placeholder() {
        let edit = ProposedEdit {
            id: "EDIT_2".to_string(),
            clause_id: "a".to_string(),
            anchor_text: "The Customer shall pay all undisputed invoices".to_string(),
            proposed_text: "As set out in Section 4[b], payment is due within thirty (30) days."
                .to_string(),
            intent: EditIntent::Replace,
            rationale: None,
            drift_alert: None,
        };
        assert!(!is_placeholder_edit(&edit));
    }

    #[test]
    fn redundant_insert_is_detected() {
        let clauses = vec![clause(
            "term",
            "Term",
            "This Agreement shall remain in effect for three (3) years. Obligations survive termination.",
        )];
        let c = criterion("TERM_SURVIVAL", None, CriterionStatus::Missing);
        assert!(is_redundant_insert(&c, &clauses));
    }

    #[test]
    fn drift_detected_for_dissimilar_replace() {
        let clauses = vec![clause(
            "payment",
            "Payment",
            "The Customer shall pay all undisputed invoices within thirty (30) days of receipt of invoice.",
        )];
        let edit = ProposedEdit {
            id: "EDIT_1".to_string(),
            clause_id: "payment".to_string(),
            anchor_text: "The Customer shall pay all undisputed invoices".to_string(),
            proposed_text: "The Receiving Party shall not disclose Confidential Information to any third party.".to_string(),
            intent: EditIntent::Replace,
            rationale: None,
            drift_alert: None,
        };
        let drift = assess_edit_semantic_drift(&edit, &clauses, DEFAULT_DRIFT_MIN_SIMILARITY);
        assert!(drift.is_some());
    }

    #[test]
    fn insert_edits_are_never_checked_for_drift() {
        let clauses = vec![clause("a", "A", "irrelevant")];
        let edit = ProposedEdit {
            id: "EDIT_1".to_string(),
            clause_id: "a".to_string(),
            anchor_text: "irrelevant".to_string(),
            proposed_text: "totally unrelated content".to_string(),
            intent: EditIntent::Insert,
            rationale: None,
            drift_alert: None,
        };
        assert!(assess_edit_semantic_drift(&edit, &clauses, 0.9).is_none());
    }

    #[test]
    fn validate_rejects_excerpt_not_from_clause() {
        let clauses = vec![clause("a", "A", "the quick brown fox")];
        let reference = ClauseReference {
            clause_id: "a".to_string(),
            heading: None,
            excerpt: "totally unrelated text".to_string(),
            location_hint: None,
        };
        assert_eq!(
            validate_issue_clause_reference(&reference, &clauses),
            Err(ClauseReferenceError::ExcerptNotFromClause)
        );
    }

    #[test]
    fn validate_accepts_missing_marker_for_unknown_clause() {
        let clauses: Vec<Clause> = Vec::new();
        let reference = ClauseReference {
            clause_id: "ghost".to_string(),
            heading: None,
            excerpt: "Not present".to_string(),
            location_hint: None,
        };
        assert_eq!(validate_issue_clause_reference(&reference, &clauses), Ok(()));
    }

    #[test]
    fn dedup_issues_keeps_higher_severity() {
        let make = |severity: Severity| Issue {
            id: format!("i-{:?}", severity),
            title: "Missing DPA security clause".to_string(),
            severity,
            recommendation: "Add security measures language".to_string(),
            rationale: "required".to_string(),
            tags: vec![],
            clause_reference: ClauseReference {
                clause_id: "security".to_string(),
                heading: None,
                excerpt: "Not present".to_string(),
                location_hint: None,
            },
        };
        let issues = vec![make(Severity::Medium), make(Severity::Critical)];
        let deduped = dedup_issues(issues);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].severity, Severity::Critical);
    }

    #[test]
    fn location_hint_is_unused_without_location() {
        let _ = ClauseLocation::default();
    }
}
