//! Playbook types: the authored configuration a contract type is checked
//! against. Concrete playbook data lives in [`crate::playbooks`].

use serde::{Deserialize, Serialize};

/// Which of the seven contract-type playbooks to evaluate against.
///
/// Closed set; any other string is an [`crate::error::ReviewError::UnknownPlaybook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybookKey {
    DataProcessingAgreement,
    NonDisclosureAgreement,
    PrivacyPolicyDocument,
    ConsultancyAgreement,
    ResearchDevelopmentAgreement,
    EndUserLicenseAgreement,
    ProfessionalServicesAgreement,
}

impl PlaybookKey {
    /// All seven values, in the order the wire enum lists them.
    pub const ALL: [PlaybookKey; 7] = [
        PlaybookKey::DataProcessingAgreement,
        PlaybookKey::NonDisclosureAgreement,
        PlaybookKey::PrivacyPolicyDocument,
        PlaybookKey::ConsultancyAgreement,
        PlaybookKey::ResearchDevelopmentAgreement,
        PlaybookKey::EndUserLicenseAgreement,
        PlaybookKey::ProfessionalServicesAgreement,
    ];

    /// Parse the wire `playbookKey` string, returning `None` for anything
    /// outside the closed set (callers turn that into `UnknownPlaybook`).
    pub fn parse(s: &str) -> Option<PlaybookKey> {
        match s {
            "data_processing_agreement" => Some(PlaybookKey::DataProcessingAgreement),
            "non_disclosure_agreement" => Some(PlaybookKey::NonDisclosureAgreement),
            "privacy_policy_document" => Some(PlaybookKey::PrivacyPolicyDocument),
            "consultancy_agreement" => Some(PlaybookKey::ConsultancyAgreement),
            "research_development_agreement" => Some(PlaybookKey::ResearchDevelopmentAgreement),
            "end_user_license_agreement" => Some(PlaybookKey::EndUserLicenseAgreement),
            "professional_services_agreement" => Some(PlaybookKey::ProfessionalServicesAgreement),
            _ => None,
        }
    }

    /// The wire string for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybookKey::DataProcessingAgreement => "data_processing_agreement",
            PlaybookKey::NonDisclosureAgreement => "non_disclosure_agreement",
            PlaybookKey::PrivacyPolicyDocument => "privacy_policy_document",
            PlaybookKey::ConsultancyAgreement => "consultancy_agreement",
            PlaybookKey::ResearchDevelopmentAgreement => "research_development_agreement",
            PlaybookKey::EndUserLicenseAgreement => "end_user_license_agreement",
            PlaybookKey::ProfessionalServicesAgreement => "professional_services_agreement",
        }
    }
}

/// A playbook checklist item: the authoritative description of one
/// auditable requirement.
#[derive(Debug, Clone)]
pub struct PlaybookChecklistItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Literal phrases or regex-prefixed signals (`re:...`, `/.../`).
    pub required_signals: &'static [&'static str],
    pub evidence_mapping: EvidenceMapping,
    /// `after_heading:A|B`, `before_heading:A|B`, or `end_of_document`.
    pub insertion_policy_key: &'static str,
}

/// Narrows candidate clauses for a checklist item before signal matching.
#[derive(Debug, Clone, Default)]
pub struct EvidenceMapping {
    pub clause_ids: &'static [&'static str],
    pub headings: &'static [&'static str],
    pub topics: &'static [&'static str],
}

/// One critical clause a playbook's author flags explicitly, with phrases
/// that must also be present (`must_include`) and phrases that should not
/// be (`red_flags`, surfaced as diagnostics only — spec.md does not wire
/// red flags into the checklist/coverage computation beyond `must_include`).
#[derive(Debug, Clone)]
pub struct CriticalClause {
    pub title: &'static str,
    pub must_include: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

/// One entry in a playbook's `clauseAnchors` coverage list. Anchors whose
/// title contains `(if ...)`, or that match one of the two named optional
/// anchors, are excluded from the coverage denominator.
#[derive(Debug, Clone, Copy)]
pub struct ClauseAnchor {
    pub title: &'static str,
}

impl ClauseAnchor {
    /// Whether this anchor is excluded from the coverage-score denominator.
    pub fn is_optional(&self) -> bool {
        self.title.contains("(if")
            || self.title == "Remedies / injunctive relief"
            || self.title == "Export control / sanctions (if relevant)"
    }
}

/// A fixed, authored configuration per contract type.
#[derive(Debug, Clone)]
pub struct Playbook {
    pub key: PlaybookKey,
    pub display_name: &'static str,
    pub description: &'static str,
    pub clause_anchors: &'static [ClauseAnchor],
    pub critical_clauses: &'static [CriticalClause],
    pub checklist: &'static [PlaybookChecklistItem],
}
