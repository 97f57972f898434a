//! Clause-match resolver (component B): map a loose reference — a clause
//! id, a heading, an excerpt, or free text — to the best clause in the
//! extracted list.

use crate::model::Clause;
use crate::text_norm::score_text_similarity;

/// Which signal produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    Id,
    Heading,
    Text,
    Ngram,
    None,
}

impl MatchMethod {
    /// Lower number = preferred in ties, per spec tie-break order
    /// `id > heading > text > ngram`.
    fn priority(self) -> u8 {
        match self {
            MatchMethod::Id => 0,
            MatchMethod::Heading => 1,
            MatchMethod::Text => 2,
            MatchMethod::Ngram => 3,
            MatchMethod::None => 4,
        }
    }
}

/// A scored candidate clause, used both as the resolved match and in the
/// up-to-three diagnostic candidates.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    pub clause_id: String,
    pub score: f64,
    pub method: MatchMethod,
}

/// Result of [`resolve_clause_match`].
#[derive(Debug, Clone)]
pub struct ClauseMatchResult {
    pub matched_clause_id: Option<String>,
    pub confidence: f64,
    pub method: MatchMethod,
    pub candidates: Vec<MatchCandidate>,
}

/// Loose reference to resolve against a clause list.
#[derive(Debug, Clone, Default)]
pub struct MatchQuery<'a> {
    pub clause_id: Option<&'a str>,
    pub heading: Option<&'a str>,
    pub excerpt: Option<&'a str>,
    pub fallback_text: Option<&'a str>,
}

fn normalize_id(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Resolve `query` against `clauses`, returning the best match (if any)
/// plus up to three diagnostic candidates.
pub fn resolve_clause_match(query: &MatchQuery<'_>, clauses: &[Clause]) -> ClauseMatchResult {
    if let Some(id) = query.clause_id {
        if !id.trim().is_empty() {
            let normalized = normalize_id(id);
            if let Some(clause) = clauses
                .iter()
                .find(|c| normalize_id(&c.clause_id) == normalized)
            {
                return ClauseMatchResult {
                    matched_clause_id: Some(clause.clause_id.clone()),
                    confidence: 1.0,
                    method: MatchMethod::Id,
                    candidates: vec![MatchCandidate {
                        clause_id: clause.clause_id.clone(),
                        score: 1.0,
                        method: MatchMethod::Id,
                    }],
                };
            }
        }
    }

    let mut heading_scores: Vec<(usize, f64)> = Vec::new();
    if let Some(heading) = query.heading {
        if !heading.trim().is_empty() {
            for (idx, clause) in clauses.iter().enumerate() {
                let score = score_text_similarity(heading, clause.title.as_str()).score;
                heading_scores.push((idx, score));
            }
        }
    }

    let mut text_scores: Vec<(usize, f64, MatchMethod)> = Vec::new();
    let query_text = query.excerpt.filter(|s| !s.trim().is_empty()).or_else(|| query.fallback_text.filter(|s| !s.trim().is_empty()));
    if let Some(text) = query_text {
        for (idx, clause) in clauses.iter().enumerate() {
            let combined = format!(
                "{} {} {}",
                clause.title, clause.original_text, clause.normalized_text
            );
            let similarity = score_text_similarity(text, combined.as_str());
            let method = match similarity.method {
                crate::text_norm::SimilarityMethod::Text => MatchMethod::Text,
                crate::text_norm::SimilarityMethod::Ngram => MatchMethod::Ngram,
            };
            text_scores.push((idx, similarity.score, method));
        }
    }

    // Merge by clause index, keeping the higher score; heading wins ties
    // per the method-priority rule.
    let mut merged: Vec<(usize, f64, MatchMethod)> = Vec::new();
    let mut by_idx: std::collections::HashMap<usize, (f64, MatchMethod)> = std::collections::HashMap::new();
    for (idx, score) in &heading_scores {
        by_idx.insert(*idx, (*score, MatchMethod::Heading));
    }
    for (idx, score, method) in &text_scores {
        let entry = by_idx.entry(*idx).or_insert((0.0, MatchMethod::None));
        if *score > entry.0 {
            *entry = (*score, *method);
        }
    }
    for (idx, (score, method)) in by_idx {
        merged.push((idx, score, method));
    }

    merged.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap()
            .then_with(|| a.2.priority().cmp(&b.2.priority()))
            .then_with(|| a.0.cmp(&b.0))
    });

    if merged.is_empty() {
        return ClauseMatchResult {
            matched_clause_id: None,
            confidence: 0.0,
            method: MatchMethod::None,
            candidates: Vec::new(),
        };
    }

    let top = &merged[0];
    let heading_reaches_threshold = heading_scores.iter().any(|(_, s)| *s >= 0.30);
    let threshold = if top.2 == MatchMethod::Heading { 0.30 } else { 0.18 };

    let candidates: Vec<MatchCandidate> = merged
        .iter()
        .take(3)
        .map(|(idx, score, method)| MatchCandidate {
            clause_id: clauses[*idx].clause_id.clone(),
            score: *score,
            method: *method,
        })
        .collect();

    if top.1 < threshold && !heading_reaches_threshold {
        return ClauseMatchResult {
            matched_clause_id: None,
            confidence: top.1,
            method: MatchMethod::None,
            candidates,
        };
    }

    ClauseMatchResult {
        matched_clause_id: Some(clauses[top.0].clause_id.clone()),
        confidence: top.1,
        method: top.2,
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Clause;

    fn clause(id: &str, title: &str, text: &str) -> Clause {
        Clause {
            clause_id: id.to_string(),
            title: title.to_string(),
            original_text: text.to_string(),
            normalized_text: text.to_lowercase(),
            location: None,
            category: None,
        }
    }

    #[test]
    fn exact_id_match_wins() {
        let clauses = vec![clause("obligations", "Obligations", "text one")];
        let result = resolve_clause_match(
            &MatchQuery {
                clause_id: Some("obligations"),
                ..Default::default()
            },
            &clauses,
        );
        assert_eq!(result.matched_clause_id.as_deref(), Some("obligations"));
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.method, MatchMethod::Id);
    }

    #[test]
    fn heading_match_by_title() {
        let clauses = vec![
            clause("remedies", "REMEDIES", "injunction and specific performance are available"),
            clause("obligations", "OBLIGATIONS OF RECEIVING PARTY", "Use the Confidential Information solely for the Purpose"),
        ];
        let result = resolve_clause_match(
            &MatchQuery {
                heading: Some("REMEDIES"),
                excerpt: Some("injunction and specific performance"),
                ..Default::default()
            },
            &clauses,
        );
        assert_eq!(result.matched_clause_id.as_deref(), Some("remedies"));
        assert_eq!(result.method, MatchMethod::Heading);
    }

    #[test]
    fn no_match_below_threshold() {
        let clauses = vec![clause("a", "Confidentiality", "keep it secret")];
        let result = resolve_clause_match(
            &MatchQuery {
                fallback_text: Some("zzz unrelated qqq"),
                ..Default::default()
            },
            &clauses,
        );
        assert!(result.matched_clause_id.is_none());
    }
}
