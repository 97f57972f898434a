//! Checklist compiler (component D): turn a playbook into the ordered
//! list of [`ChecklistCriterion`] values the rest of the pipeline aligns
//! issues and edits against.

use crate::evidence::{resolve_evidence, EvidenceIndex};
use crate::model::ChecklistCriterion;
use crate::playbook::Playbook;

/// Compile every checklist item in `playbook`, in declared order. No item
/// is ever dropped — a criterion with no evidence still appears, status
/// `missing`.
pub fn compile_checklist(
    playbook: &Playbook,
    index: &EvidenceIndex<'_>,
) -> Vec<ChecklistCriterion> {
    playbook
        .checklist
        .iter()
        .map(|item| {
            let resolution = resolve_evidence(item, index);
            ChecklistCriterion {
                id: item.id.to_string(),
                title: item.title.to_string(),
                description: item.description.to_string(),
                status: resolution.status,
                met: resolution.status == crate::model::CriterionStatus::Met,
                evidence: resolution.evidence,
                clause_id: resolution.clause_id,
                heading: resolution.heading,
                location_hint: resolution.location_hint,
                required_signals: item.required_signals.iter().map(|s| s.to_string()).collect(),
                matched_signals: resolution.matched_signals,
                missing_signals: resolution.missing_signals,
                insertion_policy_key: item.insertion_policy_key.to_string(),
                anchor_diagnostic: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::build_evidence_index;
    use crate::model::Clause;
    use crate::playbooks::playbook_for_key;
    use crate::playbook::PlaybookKey;

    #[test]
    fn checklist_length_matches_playbook_declaration() {
        let playbook = playbook_for_key(PlaybookKey::NonDisclosureAgreement);
        let clauses: Vec<Clause> = Vec::new();
        let index = build_evidence_index(&clauses, "");
        let criteria = compile_checklist(playbook, &index);
        assert_eq!(criteria.len(), playbook.checklist.len());
    }

    #[test]
    fn empty_clause_list_yields_all_missing() {
        let playbook = playbook_for_key(PlaybookKey::NonDisclosureAgreement);
        let clauses: Vec<Clause> = Vec::new();
        let index = build_evidence_index(&clauses, "");
        let criteria = compile_checklist(playbook, &index);
        assert!(criteria.iter().all(|c| !c.met));
    }
}
