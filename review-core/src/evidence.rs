//! Evidence index & resolver (component C): build an index over clauses
//! and, for a checklist item, locate clauses that satisfy its required
//! signals and produce a literal excerpt.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap as RegexCache;
use std::sync::Mutex;

use crate::model::{Clause, ClauseLocation, CriterionStatus};
use crate::playbook::PlaybookChecklistItem;
use crate::text_norm::{char_fourgrams, normalize_for_match};

/// Default excerpt length used by [`build_evidence_excerpt`].
pub const DEFAULT_EXCERPT_LENGTH: usize = 320;

/// Missing-evidence admissions the pipeline accepts without trying to
/// verify them against the contract text.
const MISSING_EVIDENCE_MARKERS: &[&str] =
    &["not present", "missing", "not found", "evidence not found"];

/// `true` iff `s`, trimmed and lowercased, contains one of the fixed
/// missing-evidence admission phrases.
pub fn is_missing_evidence_marker(s: &str) -> bool {
    let lowered = s.trim().to_lowercase();
    MISSING_EVIDENCE_MARKERS.iter().any(|m| lowered.contains(m))
}

/// An index over a contract's clauses, built once per review.
///
/// `byClauseId`/`byHeading` per spec.md §3/§4.C: a normalized-id lookup
/// straight to the `Clause`, plus the heading bucket candidate selection
/// reads instead of renormalizing every clause's title on every call. A
/// third inverted index keyed by heading *token* was dropped: several
/// playbook topics (`subprocessor`, `datasubject`, `statementofwork`) are
/// compound words meant to substring-match a multi-word normalized
/// heading or clause body, which a token-exact index cannot serve without
/// silently missing those matches — so topic candidates still walk
/// `clauses` directly (see `candidate_clauses`).
pub struct EvidenceIndex<'a> {
    pub content: &'a str,
    pub clauses: &'a [Clause],
    /// normalized clauseId -> Clause (two keys per clause: hyphenated and
    /// plain-lowercase forms, matching how callers spell a `clauseId`)
    pub by_clause_id: HashMap<String, &'a Clause>,
    /// normalized heading -> clauses sharing that heading
    pub by_heading: HashMap<String, Vec<&'a Clause>>,
}

/// Build the evidence index over `clauses`, retaining `content` for later
/// excerpt verification.
pub fn build_evidence_index<'a>(clauses: &'a [Clause], content: &'a str) -> EvidenceIndex<'a> {
    let mut by_clause_id = HashMap::new();
    let mut by_heading: HashMap<String, Vec<&'a Clause>> = HashMap::new();

    for clause in clauses {
        by_clause_id.insert(
            normalize_for_match(&clause.clause_id).replace(' ', "-"),
            clause,
        );
        by_clause_id.insert(clause.clause_id.to_lowercase(), clause);

        let heading_key = normalize_for_match(&clause.title);
        by_heading.entry(heading_key).or_default().push(clause);
    }

    EvidenceIndex {
        content,
        clauses,
        by_clause_id,
        by_heading,
    }
}

/// Format a clause's `location` into a short human hint string, or `None`
/// when no coordinates are present.
pub fn location_hint(location: &Option<ClauseLocation>) -> Option<String> {
    let loc = location.as_ref()?;
    let mut parts = Vec::new();
    if let Some(page) = loc.page {
        parts.push(format!("p.{page}"));
    }
    if let Some(paragraph) = loc.paragraph {
        parts.push(format!("para.{paragraph}"));
    }
    if let Some(section) = &loc.section {
        parts.push(format!("sec.{section}"));
    }
    if let Some(number) = &loc.clause_number {
        parts.push(format!("cl.{number}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Build an evidence excerpt from `clause_text`, windowed around
/// `anchor_text` when the clause is longer than `max_length`.
pub fn build_evidence_excerpt(clause_text: &str, anchor_text: &str, max_length: usize) -> String {
    let chars: Vec<char> = clause_text.chars().collect();
    if chars.len() <= max_length {
        return clause_text.to_string();
    }

    let anchor_prefix: String = anchor_text.chars().take(64).collect();
    if !anchor_prefix.trim().is_empty() {
        let haystack_lower = clause_text.to_lowercase();
        let needle_lower = anchor_prefix.to_lowercase();
        if let Some(byte_idx) = haystack_lower.find(&needle_lower) {
            let char_idx = haystack_lower[..byte_idx].chars().count();
            let back_off = ((max_length as f64) * 0.4).round() as usize;
            let start = char_idx.saturating_sub(back_off);
            let end = (start + max_length).min(chars.len());
            let start = end.saturating_sub(max_length);
            return chars[start..end].iter().collect();
        }
    }

    chars[..max_length].iter().collect()
}

/// Excerpt with the spec's default 320-character window.
pub fn build_evidence_excerpt_default(clause_text: &str, anchor_text: &str) -> String {
    build_evidence_excerpt(clause_text, anchor_text, DEFAULT_EXCERPT_LENGTH)
}

static SIGNAL_REGEX_CACHE: Lazy<Mutex<RegexCache<String, Option<Regex>>>> =
    Lazy::new(|| Mutex::new(RegexCache::new()));

enum SignalMatcher {
    Regex(Regex),
    Literal(String),
    /// An invalid pattern: never matches, never propagates an error.
    Never,
}

fn compile_signal(signal: &str) -> SignalMatcher {
    let pattern = if let Some(rest) = signal.strip_prefix("re:") {
        Some(rest.to_string())
    } else if signal.len() > 2 && signal.starts_with('/') && signal.ends_with('/') {
        Some(signal[1..signal.len() - 1].to_string())
    } else {
        None
    };

    match pattern {
        Some(p) => {
            let mut cache = SIGNAL_REGEX_CACHE.lock().unwrap();
            let compiled = cache
                .entry(p.clone())
                .or_insert_with(|| Regex::new(&format!("(?i){p}")).ok())
                .clone();
            match compiled {
                Some(re) => SignalMatcher::Regex(re),
                None => SignalMatcher::Never,
            }
        }
        None => SignalMatcher::Literal(signal.to_string()),
    }
}

fn signal_matches(signal: &str, clause_text: &str) -> bool {
    match compile_signal(signal) {
        SignalMatcher::Regex(re) => re.is_match(clause_text),
        SignalMatcher::Literal(lit) => {
            normalize_for_match(clause_text).contains(&normalize_for_match(&lit))
        }
        SignalMatcher::Never => false,
    }
}

fn signals_for_text(signals: &[&str], clause_text: &str) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for signal in signals {
        if signal_matches(signal, clause_text) {
            matched.push((*signal).to_string());
        } else {
            missing.push((*signal).to_string());
        }
    }
    (matched, missing)
}

/// One clause that evidenced (some of) a checklist item's required
/// signals, with the excerpt that will be surfaced if it is the primary.
#[derive(Debug, Clone)]
pub struct EvidenceRef {
    pub clause_id: String,
    pub heading: String,
    pub location_hint: Option<String>,
    pub matched_signals: Vec<String>,
    pub excerpt: String,
}

/// Result of [`resolve_evidence`] for one checklist item.
#[derive(Debug, Clone)]
pub struct EvidenceResolution {
    pub status: CriterionStatus,
    pub evidence: String,
    pub clause_id: Option<String>,
    pub heading: Option<String>,
    pub location_hint: Option<String>,
    pub matched_signals: Vec<String>,
    pub missing_signals: Vec<String>,
}

/// Candidate selection per spec.md §4.C, sourced entirely from `index`'s
/// own maps rather than a separately threaded clause slice: explicit
/// `clauseIds` resolve through `by_clause_id`, heading matches walk the
/// `by_heading` buckets instead of renormalizing every clause's title per
/// call, and topic matches walk `index.clauses` (the heading-token index
/// alone cannot serve the text side of a topic match, since `byTopic` is
/// built from heading tokens only — spec.md §4.C).
fn candidate_clauses<'a>(
    item: &PlaybookChecklistItem,
    index: &EvidenceIndex<'a>,
) -> Vec<&'a Clause> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    let mut push = |clauses_found: &mut Vec<&'a Clause>, c: &'a Clause| {
        if seen.insert(c.clause_id.clone()) {
            clauses_found.push(c);
        }
    };

    for wanted_id in item.evidence_mapping.clause_ids {
        let normalized_wanted = wanted_id.trim().to_lowercase();
        if let Some(c) = index.by_clause_id.get(&normalized_wanted) {
            push(&mut out, c);
        }
    }

    for heading in item.evidence_mapping.headings {
        let mapping_heading = normalize_for_match(heading);
        for (clause_heading, clauses_in_bucket) in &index.by_heading {
            if !clause_heading.is_empty()
                && (mapping_heading.contains(clause_heading)
                    || clause_heading.contains(&mapping_heading))
            {
                for c in clauses_in_bucket {
                    push(&mut out, c);
                }
            }
        }
    }

    for topic in item.evidence_mapping.topics {
        let mapping_topic = normalize_for_match(topic);
        if mapping_topic.is_empty() {
            continue;
        }
        for c in index.clauses {
            let heading_norm = normalize_for_match(&c.title);
            let text_norm = normalize_for_match(&c.original_text);
            if heading_norm.contains(&mapping_topic) || text_norm.contains(&mapping_topic) {
                push(&mut out, c);
            }
        }
    }

    out
}

/// Resolve the evidence for one checklist item against `index`.
pub fn resolve_evidence(
    item: &PlaybookChecklistItem,
    index: &EvidenceIndex<'_>,
) -> EvidenceResolution {
    let has_signals = !item.required_signals.is_empty();
    let candidates = candidate_clauses(item, index);

    let build_ref = |c: &Clause, matched: Vec<String>| -> EvidenceRef {
        let anchor = matched.first().cloned().unwrap_or_default();
        EvidenceRef {
            clause_id: c.clause_id.clone(),
            heading: c.display_title().to_string(),
            location_hint: location_hint(&c.location),
            matched_signals: matched,
            excerpt: build_evidence_excerpt_default(&c.original_text, &anchor),
        }
    };

    let mut refs: Vec<EvidenceRef> = Vec::new();

    if has_signals {
        for c in &candidates {
            let (matched, _missing) = signals_for_text(item.required_signals, &c.original_text);
            if !matched.is_empty() {
                refs.push(build_ref(c, matched));
            }
        }
        if refs.is_empty() {
            for c in index.clauses {
                let (matched, _missing) =
                    signals_for_text(item.required_signals, &c.original_text);
                if !matched.is_empty() {
                    refs.push(build_ref(c, matched));
                }
            }
        }
    } else {
        for c in &candidates {
            refs.push(build_ref(c, Vec::new()));
        }
    }

    let mut matched_union: Vec<String> = Vec::new();
    for r in &refs {
        for s in &r.matched_signals {
            if !matched_union.contains(s) {
                matched_union.push(s.clone());
            }
        }
    }
    let missing_signals: Vec<String> = item
        .required_signals
        .iter()
        .filter(|s| !matched_union.contains(&s.to_string()))
        .map(|s| s.to_string())
        .collect();

    let status = if !has_signals {
        if refs.is_empty() {
            CriterionStatus::Missing
        } else {
            CriterionStatus::Met
        }
    } else if matched_union.is_empty() {
        CriterionStatus::Missing
    } else if missing_signals.is_empty() {
        CriterionStatus::Met
    } else {
        CriterionStatus::Attention
    };

    let primary = refs
        .iter()
        .enumerate()
        .max_by_key(|(i, r)| (r.matched_signals.len(), std::cmp::Reverse(*i)))
        .map(|(_, r)| r);

    match primary {
        Some(r) if status != CriterionStatus::Missing => EvidenceResolution {
            status,
            evidence: r.excerpt.clone(),
            clause_id: Some(r.clause_id.clone()),
            heading: Some(r.heading.clone()),
            location_hint: r.location_hint.clone(),
            matched_signals: matched_union,
            missing_signals,
        },
        _ => EvidenceResolution {
            status: CriterionStatus::Missing,
            evidence: "Not present".to_string(),
            clause_id: None,
            heading: None,
            location_hint: None,
            matched_signals: matched_union,
            missing_signals,
        },
    }
}

/// Reason [`check_evidence_match`] judged an excerpt present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceMatchReason {
    EmptyContent,
    EmptyExcerpt,
    MissingMarker,
    Exact,
    Prefix,
    Ngram,
    NoMatch,
}

/// Result of verifying an excerpt against a body of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvidenceMatch {
    pub matched: bool,
    pub reason: EvidenceMatchReason,
    pub ratio: Option<f64>,
}

const NGRAM_MATCH_THRESHOLD: f64 = 0.45;
const PREFIX_MATCH_LENGTH: usize = 220;
const PREFIX_MIN_EXCERPT_LENGTH: usize = 40;

fn evidence_match_against(excerpt: &str, haystack: &str) -> EvidenceMatch {
    if haystack.trim().is_empty() {
        return EvidenceMatch {
            matched: true,
            reason: EvidenceMatchReason::EmptyContent,
            ratio: None,
        };
    }
    if excerpt.trim().is_empty() {
        return EvidenceMatch {
            matched: false,
            reason: EvidenceMatchReason::EmptyExcerpt,
            ratio: None,
        };
    }
    if is_missing_evidence_marker(excerpt) {
        return EvidenceMatch {
            matched: true,
            reason: EvidenceMatchReason::MissingMarker,
            ratio: None,
        };
    }

    let normalized_haystack = normalize_for_match(haystack);
    let normalized_excerpt = normalize_for_match(excerpt);
    if normalized_haystack.contains(&normalized_excerpt) {
        return EvidenceMatch {
            matched: true,
            reason: EvidenceMatchReason::Exact,
            ratio: None,
        };
    }

    let excerpt_chars: Vec<char> = excerpt.chars().collect();
    if excerpt_chars.len() > PREFIX_MIN_EXCERPT_LENGTH {
        let prefix_len = PREFIX_MATCH_LENGTH.min(excerpt_chars.len());
        let prefix: String = excerpt_chars[..prefix_len].iter().collect();
        let normalized_prefix = normalize_for_match(&prefix);
        if !normalized_prefix.is_empty() && normalized_haystack.contains(&normalized_prefix) {
            return EvidenceMatch {
                matched: true,
                reason: EvidenceMatchReason::Prefix,
                ratio: None,
            };
        }
    }

    let excerpt_grams = char_fourgrams(excerpt);
    if excerpt_grams.is_empty() {
        return EvidenceMatch {
            matched: false,
            reason: EvidenceMatchReason::NoMatch,
            ratio: Some(0.0),
        };
    }
    let haystack_grams = char_fourgrams(haystack);
    let hits = excerpt_grams.intersection(&haystack_grams).count();
    let ratio = hits as f64 / excerpt_grams.len() as f64;
    if ratio >= NGRAM_MATCH_THRESHOLD {
        EvidenceMatch {
            matched: true,
            reason: EvidenceMatchReason::Ngram,
            ratio: Some(ratio),
        }
    } else {
        EvidenceMatch {
            matched: false,
            reason: EvidenceMatchReason::NoMatch,
            ratio: Some(ratio),
        }
    }
}

/// Verify an excerpt is actually present in the full contract `content`.
pub fn check_evidence_match(excerpt: &str, content: &str) -> EvidenceMatch {
    evidence_match_against(excerpt, content)
}

/// Verify an excerpt against one clause's text rather than the whole
/// contract (used for negative checks: an excerpt from clause A should not
/// "match" clause B's text).
pub fn check_evidence_match_against_clause(excerpt: &str, clause_text: &str) -> EvidenceMatch {
    evidence_match_against(excerpt, clause_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playbook::EvidenceMapping;

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
    fn missing_evidence_marker_detection() {
        assert!(is_missing_evidence_marker("Not present"));
        assert!(is_missing_evidence_marker("  NOT FOUND  "));
        assert!(!is_missing_evidence_marker("Use the Confidential Information"));
    }

    #[test]
    fn short_clause_excerpt_is_returned_whole() {
        let excerpt = build_evidence_excerpt_default("short clause text", "clause");
        assert_eq!(excerpt, "short clause text");
    }

    #[test]
    fn resolve_evidence_met_when_all_signals_present() {
        let clauses = vec![clause(
            "obligations",
            "OBLIGATIONS OF RECEIVING PARTY",
            "Use the Confidential Information solely for the Purpose and not disclose it.",
        )];
        let index = build_evidence_index(&clauses, "");
        let item = PlaybookChecklistItem {
            id: "CHECK_1",
            title: "Purpose limitation",
            description: "desc",
            required_signals: &["solely for the Purpose"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["OBLIGATIONS OF RECEIVING PARTY"],
                topics: &[],
            },
            insertion_policy_key: "end_of_document",
        };
        let resolution = resolve_evidence(&item, &index);
        assert_eq!(resolution.status, CriterionStatus::Met);
        assert_eq!(resolution.clause_id.as_deref(), Some("obligations"));
    }

    #[test]
    fn check_evidence_match_exact_and_prefix() {
        let content = "This Agreement contains the OBLIGATIONS OF RECEIVING PARTY clause: \
                        Use the Confidential Information solely for the Purpose.";
        let result = check_evidence_match("Use the Confidential Information solely for the Purpose", content);
        assert!(result.matched);
    }

    #[test]
    fn check_evidence_match_against_wrong_clause_fails() {
        let remedies = "injunction and specific performance are available as remedies";
        let result =
            check_evidence_match_against_clause("injunction and specific performance", "");
        assert!(result.matched); // empty haystack is permissive
        let result2 = check_evidence_match_against_clause(
            "Use the Confidential Information solely for the Purpose",
            remedies,
        );
        assert!(!result2.matched);
    }
}
