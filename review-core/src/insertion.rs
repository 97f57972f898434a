//! Insertion-anchor selector & coverage scorer (component F).

use crate::model::Clause;
use crate::playbook::{ClauseAnchor, CriticalClause, Playbook};
use crate::text_norm::{normalize_for_match, score_text_similarity};

/// Parsed form of an `insertionPolicyKey` directive.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertionMode {
    After,
    Before,
    End,
}

#[derive(Debug, Clone)]
pub struct InsertionPolicy {
    pub mode: InsertionMode,
    pub headings: Vec<String>,
}

/// Parse `after_heading:A|B|C`, `before_heading:A|B|C`, or
/// `end_of_document` into a structured policy.
pub fn parse_insertion_policy(key: &str) -> InsertionPolicy {
    if let Some(rest) = key.strip_prefix("after_heading:") {
        return InsertionPolicy {
            mode: InsertionMode::After,
            headings: rest.split('|').map(|s| s.trim().to_string()).collect(),
        };
    }
    if let Some(rest) = key.strip_prefix("before_heading:") {
        return InsertionPolicy {
            mode: InsertionMode::Before,
            headings: rest.split('|').map(|s| s.trim().to_string()).collect(),
        };
    }
    InsertionPolicy {
        mode: InsertionMode::End,
        headings: Vec::new(),
    }
}

/// Result of [`select_insertion_point`].
#[derive(Debug, Clone)]
pub struct InsertionPoint {
    /// Empty string means no anchor could be resolved; the edit becomes an
    /// append-at-end directive.
    pub anchor_text: String,
    pub clause_id: Option<String>,
}

fn heading_matches(clause_title_norm: &str, wanted_norm: &str) -> bool {
    !clause_title_norm.is_empty()
        && !wanted_norm.is_empty()
        && (clause_title_norm.contains(wanted_norm) || wanted_norm.contains(clause_title_norm))
}

/// Resolve an insertion policy into an exact anchor string present in
/// `content`, falling back across heading alternatives and finally to an
/// empty anchor.
pub fn select_insertion_point(
    content: &str,
    clauses: &[Clause],
    policy_key: &str,
) -> InsertionPoint {
    let policy = parse_insertion_policy(policy_key);

    if policy.mode == InsertionMode::End {
        return match clauses.last() {
            Some(c) if content.contains(c.original_text.as_str()) => InsertionPoint {
                anchor_text: c.original_text.clone(),
                clause_id: Some(c.clause_id.clone()),
            },
            Some(c) => InsertionPoint {
                anchor_text: String::new(),
                clause_id: Some(c.clause_id.clone()),
            },
            None => InsertionPoint {
                anchor_text: String::new(),
                clause_id: None,
            },
        };
    }

    for wanted in &policy.headings {
        let wanted_norm = normalize_for_match(wanted);
        if let Some(c) = clauses
            .iter()
            .find(|c| heading_matches(&normalize_for_match(&c.title), &wanted_norm))
        {
            if content.contains(c.original_text.as_str()) {
                return InsertionPoint {
                    anchor_text: c.original_text.clone(),
                    clause_id: Some(c.clause_id.clone()),
                };
            }
        }
    }

    InsertionPoint {
        anchor_text: String::new(),
        clause_id: None,
    }
}

/// A single evaluated requirement (a critical-clause title or a clause
/// anchor) with its evidence.
#[derive(Debug, Clone)]
pub struct RequirementMatch {
    pub met: bool,
    pub evidence: String,
    pub clause_title: Option<String>,
}

/// Score `requirement` against every clause, returning a met/unmet verdict
/// with supporting evidence.
pub fn find_requirement_match(
    requirement: &str,
    clauses: &[Clause],
    content: &str,
) -> RequirementMatch {
    let req_lower = requirement.to_lowercase();

    if req_lower.starts_with("definition of") {
        if let Some(c) = clauses
            .iter()
            .find(|c| normalize_for_match(&c.title).contains("definition"))
        {
            return RequirementMatch {
                met: true,
                evidence: c.title.clone(),
                clause_title: Some(c.title.clone()),
            };
        }
    }
    if req_lower.contains("compelled disclosure") {
        if let Some(c) = clauses.iter().find(|c| {
            let t = normalize_for_match(&c.original_text);
            t.contains("required by law") || t.contains("court order") || t.contains("protective order")
        }) {
            return RequirementMatch {
                met: true,
                evidence: c.title.clone(),
                clause_title: Some(c.title.clone()),
            };
        }
    }
    if req_lower.contains("no transfer of ip ownership") || req_lower.contains("no implied license")
    {
        if let Some(c) = clauses.iter().find(|c| {
            let t = normalize_for_match(&c.original_text);
            t.contains("no license") || t.contains("not granted or implied")
        }) {
            return RequirementMatch {
                met: true,
                evidence: c.title.clone(),
                clause_title: Some(c.title.clone()),
            };
        }
    }

    let mut best: Option<(f64, &Clause)> = None;
    for c in clauses {
        let combined = format!("{} {} {}", c.title, c.original_text, c.normalized_text);
        let score = score_text_similarity(requirement, &combined).score;
        if best.map(|(b, _)| score > b).unwrap_or(true) {
            best = Some((score, c));
        }
    }
    if let Some((score, c)) = best {
        if score >= 0.18 {
            return RequirementMatch {
                met: true,
                evidence: c.title.clone(),
                clause_title: Some(c.title.clone()),
            };
        }
    }

    if !content.trim().is_empty()
        && normalize_for_match(content).contains(&normalize_for_match(requirement))
    {
        return RequirementMatch {
            met: true,
            evidence: "Contract text".to_string(),
            clause_title: None,
        };
    }

    RequirementMatch {
        met: false,
        evidence: String::new(),
        clause_title: None,
    }
}

fn critical_clause_met(critical: &CriticalClause, clauses: &[Clause], content: &str) -> bool {
    let title_match = find_requirement_match(critical.title, clauses, content);
    if !title_match.met {
        return false;
    }
    critical
        .must_include
        .iter()
        .all(|phrase| {
            find_requirement_match(phrase, clauses, content).met
                || normalize_for_match(content).contains(&normalize_for_match(phrase))
        })
}

fn anchor_met(anchor: &ClauseAnchor, clauses: &[Clause], content: &str) -> bool {
    find_requirement_match(anchor.title, clauses, content).met
}

/// Result of [`evaluate_playbook_coverage_from_content`].
#[derive(Debug, Clone)]
pub struct CoverageResult {
    pub score: f64,
    pub met_checks: usize,
    pub total_checks: usize,
    pub critical_clause_results: Vec<(String, bool)>,
    pub anchor_results: Vec<(String, bool, bool)>, // title, met, optional
}

/// Evaluate a playbook's critical clauses and clause anchors against the
/// contract, producing the final coverage score (0.0-1.0, two decimals).
pub fn evaluate_playbook_coverage_from_content(
    playbook: &Playbook,
    clauses: &[Clause],
    content: &str,
) -> CoverageResult {
    if content.trim().is_empty() {
        return CoverageResult {
            score: 0.0,
            met_checks: 0,
            total_checks: 0,
            critical_clause_results: playbook
                .critical_clauses
                .iter()
                .map(|c| (c.title.to_string(), false))
                .collect(),
            anchor_results: playbook
                .clause_anchors
                .iter()
                .map(|a| (a.title.to_string(), false, a.is_optional()))
                .collect(),
        };
    }

    let mut met_checks = 0usize;
    let mut total_checks = 0usize;

    let critical_clause_results: Vec<(String, bool)> = playbook
        .critical_clauses
        .iter()
        .map(|c| {
            let met = critical_clause_met(c, clauses, content);
            total_checks += 1;
            if met {
                met_checks += 1;
            }
            (c.title.to_string(), met)
        })
        .collect();

    let anchor_results: Vec<(String, bool, bool)> = playbook
        .clause_anchors
        .iter()
        .map(|a| {
            let met = anchor_met(a, clauses, content);
            let optional = a.is_optional();
            if !optional {
                total_checks += 1;
                if met {
                    met_checks += 1;
                }
            }
            (a.title.to_string(), met, optional)
        })
        .collect();

    let score = if total_checks == 0 {
        0.0
    } else {
        ((met_checks as f64 / total_checks as f64) * 100.0).round() / 100.0
    };

    CoverageResult {
        score: score.max(0.0),
        met_checks,
        total_checks,
        critical_clause_results,
        anchor_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playbooks::playbook_for_key;
    use crate::playbook::PlaybookKey;

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

    #[test]
    fn empty_content_yields_zero_coverage() {
        let playbook = playbook_for_key(PlaybookKey::DataProcessingAgreement);
        let result = evaluate_playbook_coverage_from_content(playbook, &[], "");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn end_of_document_anchors_last_clause() {
        let clauses = vec![
            clause("a", "First", "First clause text."),
            clause("b", "Last", "Last clause text."),
        ];
        let content = "First clause text. Last clause text.";
        let point = select_insertion_point(content, &clauses, "end_of_document");
        assert_eq!(point.anchor_text, "Last clause text.");
        assert_eq!(point.clause_id.as_deref(), Some("b"));
    }

    #[test]
    fn insertion_point_is_deterministic() {
        let clauses = vec![clause(
            "remedies",
            "REMEDIES",
            "Injunctive relief is available.",
        )];
        let content = "Injunctive relief is available.";
        let first = select_insertion_point(content, &clauses, "after_heading:REMEDIES");
        let second = select_insertion_point(content, &clauses, "after_heading:REMEDIES");
        assert_eq!(first.anchor_text, second.anchor_text);
        assert_eq!(first.clause_id, second.clause_id);
    }

    #[test]
    fn heading_not_present_falls_back_to_empty_anchor() {
        let clauses = vec![clause("a", "Something Else", "irrelevant text")];
        let point = select_insertion_point("irrelevant text", &clauses, "after_heading:NOPE");
        assert_eq!(point.anchor_text, "");
        assert_eq!(point.clause_id, None);
    }
}
