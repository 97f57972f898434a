//! Deterministic text canonicalization and similarity scoring.
//!
//! Every later component (clause matching, evidence resolution, coverage
//! scoring) sits on top of the two canonical forms here. Both are pure
//! functions of their input: same string in, same string out, forever.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Tokens dropped by [`tokenize_for_match`] unless the token is `"not"`
/// (negation is semantically significant and must survive tokenization —
/// see spec invariant on negation preservation).
const STOPWORDS: &[&str] = &[
    "the", "and", "or", "for", "to", "of", "in", "a", "an", "by", "with", "on", "at", "as", "is",
    "are", "be", "this", "that", "from", "any", "all", "each", "per", "shall", "may", "must",
    "will",
];

/// Short legal abbreviations kept even though they are below the normal
/// 2-character length floor... these are already length >= 2, the floor
/// that actually needs an allowlist is single-character tokens, but the
/// spec phrases it as "length >= 2 OR known abbreviation", so we keep the
/// list for any abbreviation that is exactly at the boundary or shorter.
const SHORT_ABBREVIATIONS: &[&str] = &["ip", "law", "term", "use", "nda", "dpa", "gdpr", "ci"];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());
static ABBREVIATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SHORT_ABBREVIATIONS.iter().copied().collect());

/// Canonicalize a string for matching purposes.
///
/// NFKD-decomposes, strips combining diacritics, maps `§` to `" section "`,
/// straightens curly quotes, collapses any run of non-alphanumeric
/// characters to a single space, lowercases, and trims.
pub fn normalize_for_match(s: &str) -> String {
    let section_expanded = s.replace('§', " section ");
    let quote_straightened: String = section_expanded
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect();

    let decomposed: String = quote_straightened
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut out = String::with_capacity(decomposed.len());
    let mut last_was_space = false;
    for c in decomposed.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }

    out.trim().to_string()
}

/// Tokenize a string for matching: normalize, split on whitespace, drop
/// stopwords (except `"not"`), keep purely numeric tokens unconditionally,
/// and otherwise require length >= 2 or membership in a short legal
/// abbreviation allowlist.
pub fn tokenize_for_match(s: &str) -> Vec<String> {
    normalize_for_match(s)
        .split(' ')
        .filter(|t| !t.is_empty())
        .filter(|t| *t == "not" || !STOPWORD_SET.contains(t))
        .filter(|t| {
            t.chars().all(|c| c.is_ascii_digit())
                || t.chars().count() >= 2
                || ABBREVIATION_SET.contains(t)
        })
        .map(|t| t.to_string())
        .collect()
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Token Jaccard similarity: `|A ∩ B| / |A ∪ B|` over [`tokenize_for_match`]
/// output.
pub fn token_jaccard(query: &str, candidate: &str) -> f64 {
    let a = tokenize_for_match(query);
    let b = tokenize_for_match(candidate);
    let a_set: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b_set: HashSet<&str> = b.iter().map(String::as_str).collect();
    jaccard(&a_set, &b_set)
}

/// Build the character 4-gram set of `normalize_for_match(s)` with spaces
/// removed.
pub fn char_fourgrams(s: &str) -> HashSet<String> {
    let normalized: String = normalize_for_match(s).chars().filter(|c| *c != ' ').collect();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() < 4 {
        if chars.is_empty() {
            return HashSet::new();
        }
        let mut set = HashSet::new();
        set.insert(chars.iter().collect());
        return set;
    }
    chars
        .windows(4)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

/// Character 4-gram Jaccard similarity.
pub fn ngram_jaccard(query: &str, candidate: &str) -> f64 {
    let a = char_fourgrams(query);
    let b = char_fourgrams(candidate);
    let a_refs: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b_refs: HashSet<&str> = b.iter().map(String::as_str).collect();
    jaccard(&a_refs, &b_refs)
}

/// Which of the two similarity primitives won a [`score_text_similarity`]
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityMethod {
    /// Token Jaccard was used (ties go here).
    Text,
    /// Character 4-gram Jaccard was used.
    Ngram,
}

/// Result of [`score_text_similarity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScore {
    /// The winning score (the larger of the two primitives).
    pub score: f64,
    /// Which primitive produced it.
    pub method: SimilarityMethod,
}

/// Score `query` against `candidate` using both primitives and keep the
/// larger. Ties favor [`SimilarityMethod::Text`].
pub fn score_text_similarity(query: &str, candidate: &str) -> SimilarityScore {
    let text = token_jaccard(query, candidate);
    let ngram = ngram_jaccard(query, candidate);
    if text >= ngram {
        SimilarityScore {
            score: text,
            method: SimilarityMethod::Text,
        }
    } else {
        SimilarityScore {
            score: ngram,
            method: SimilarityMethod::Ngram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_survives_tokenization() {
        let tokens = tokenize_for_match("may not disclose");
        assert!(tokens.iter().any(|t| t == "not"));
    }

    #[test]
    fn stopwords_are_dropped() {
        let tokens = tokenize_for_match("the contractor shall use the confidential information");
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"shall".to_string()));
        assert!(tokens.contains(&"contractor".to_string()));
    }

    #[test]
    fn numeric_tokens_are_kept_regardless_of_length() {
        let tokens = tokenize_for_match("within 30 days of the year 2026");
        assert!(tokens.contains(&"30".to_string()));
        assert!(tokens.contains(&"2026".to_string()));
    }

    #[test]
    fn short_legal_abbreviations_survive() {
        let tokens = tokenize_for_match("this nda covers ip and dpa matters under gdpr via ci");
        for abbrev in ["nda", "ip", "dpa", "gdpr", "ci"] {
            assert!(tokens.contains(&abbrev.to_string()), "missing {abbrev}");
        }
    }

    #[test]
    fn section_symbol_expands() {
        assert_eq!(normalize_for_match("§ 3.2"), "section 3 2");
    }

    #[test]
    fn curly_quotes_straighten() {
        let normalized = normalize_for_match("\u{201C}Confidential\u{201D} \u{2019}Information\u{2019}");
        assert!(normalized.contains("confidential"));
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize_for_match("café"), "cafe");
    }

    #[test]
    fn similarity_is_symmetric_enough_for_identical_strings() {
        let score = score_text_similarity("Confidential Information", "Confidential Information");
        assert!((score.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn short_query_matches_full_phrase() {
        let clause = "The Receiving Party shall not use any Confidential Information for any \
                       purpose other than the Project.";
        let score = score_text_similarity("Purpose/use limitation", clause);
        assert!(score.score >= 0.15, "score was {}", score.score);
    }
}
