//! The seven compile-time playbook configurations. Authored data, not
//! derived from any input — this is the "fixed, authored configuration
//! per contract type" spec.md §3 describes.
//!
//! spec.md §9 flags that the repository carries two configurations for
//! the "professional services" slot ("Product Supply Agreement" vs a
//! consultancy variant); this implementation keeps the key stable as
//! `professional_services_agreement` and picks the services-agreement
//! framing (statement of work / acceptance / work product), recorded in
//! `DESIGN.md`.

use crate::playbook::{ClauseAnchor, CriticalClause, EvidenceMapping, Playbook, PlaybookChecklistItem, PlaybookKey};

static DATA_PROCESSING_AGREEMENT: Playbook = Playbook {
    key: PlaybookKey::DataProcessingAgreement,
    display_name: "Data Processing Agreement",
    description: "Checklist for a GDPR-style controller/processor data processing agreement.",
    clause_anchors: &[
        ClauseAnchor { title: "Subject matter and duration of processing" },
        ClauseAnchor { title: "Nature and purpose of processing" },
        ClauseAnchor { title: "Categories of data subjects" },
        ClauseAnchor { title: "Security measures" },
        ClauseAnchor { title: "Sub-processors" },
        ClauseAnchor { title: "International transfers (if relevant)" },
        ClauseAnchor { title: "Data subject rights assistance" },
        ClauseAnchor { title: "Data breach notification" },
        ClauseAnchor { title: "Audit rights" },
        ClauseAnchor { title: "Return or deletion of data" },
    ],
    critical_clauses: &[
        CriticalClause {
            title: "Security measures",
            must_include: &["technical and organizational measures"],
            red_flags: &["no security obligations"],
        },
        CriticalClause {
            title: "Sub-processors",
            must_include: &["prior written consent"],
            red_flags: &["unrestricted subcontracting"],
        },
        CriticalClause {
            title: "Data breach notification",
            must_include: &["without undue delay"],
            red_flags: &["no breach notification obligation"],
        },
    ],
    checklist: &[
        PlaybookChecklistItem {
            id: "CHECK_DPA_01",
            title: "Security measures",
            description: "The processor must implement appropriate technical and organizational measures.",
            required_signals: &["technical and organizational measures", "re:appropriate.*security"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Security Measures", "Data Security"],
                topics: &["security"],
            },
            insertion_policy_key: "after_heading:Confidentiality|Data Processing",
        },
        PlaybookChecklistItem {
            id: "CHECK_DPA_02",
            title: "Sub-processor authorization",
            description: "Sub-processors may only be engaged with prior written consent and equivalent flow-down obligations.",
            required_signals: &["prior written consent", "sub-processor"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Sub-processors", "Subcontractors"],
                topics: &["subprocessor", "subcontractor"],
            },
            insertion_policy_key: "after_heading:Security Measures|Data Processing",
        },
        PlaybookChecklistItem {
            id: "CHECK_DPA_03",
            title: "Data subject rights assistance",
            description: "The processor must assist the controller in responding to data subject rights requests.",
            required_signals: &["data subject rights", "assist the controller"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Data Subject Rights", "Assistance"],
                topics: &["datasubject"],
            },
            insertion_policy_key: "after_heading:Security Measures|Sub-processors",
        },
        PlaybookChecklistItem {
            id: "CHECK_DPA_04",
            title: "Breach notification timing",
            description: "The processor must notify the controller of a personal data breach without undue delay.",
            required_signals: &["without undue delay", "notify the controller"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Data Breach", "Security Incident", "Breach Notification"],
                topics: &["breach"],
            },
            insertion_policy_key: "after_heading:Security Measures",
        },
        PlaybookChecklistItem {
            id: "CHECK_DPA_05",
            title: "International transfer safeguards",
            description: "Transfers outside the permitted region require standard contractual clauses or an equivalent safeguard.",
            required_signals: &["standard contractual clauses", "adequate level of protection"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["International Transfers", "Cross-Border Transfers"],
                topics: &["transfer"],
            },
            insertion_policy_key: "after_heading:Sub-processors|Security Measures",
        },
        PlaybookChecklistItem {
            id: "CHECK_DPA_06",
            title: "Audit rights",
            description: "The controller must retain the right to audit or inspect the processor's compliance.",
            required_signals: &["right to audit", "inspect"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Audit", "Audit Rights"],
                topics: &["audit"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_DPA_07",
            title: "Return or deletion of data",
            description: "Upon termination, the processor must return or delete personal data at the controller's choice.",
            required_signals: &["return or delete", "upon termination"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Return or Deletion of Data", "Term and Termination"],
                topics: &["deletion"],
            },
            insertion_policy_key: "end_of_document",
        },
    ],
};

static NON_DISCLOSURE_AGREEMENT: Playbook = Playbook {
    key: PlaybookKey::NonDisclosureAgreement,
    display_name: "Non-Disclosure Agreement",
    description: "Checklist for a bilateral or one-way confidentiality agreement.",
    clause_anchors: &[
        ClauseAnchor { title: "Definition of Confidential Information" },
        ClauseAnchor { title: "Obligations of Receiving Party" },
        ClauseAnchor { title: "Exclusions from Confidential Information" },
        ClauseAnchor { title: "Compelled Disclosure" },
        ClauseAnchor { title: "Term and Survival" },
        ClauseAnchor { title: "Remedies / injunctive relief" },
        ClauseAnchor { title: "Return or Destruction of Information" },
        ClauseAnchor { title: "No License / No Transfer of IP Ownership" },
    ],
    critical_clauses: &[
        CriticalClause {
            title: "Definition of Confidential Information",
            must_include: &["disclosed by"],
            red_flags: &["undefined confidential information"],
        },
        CriticalClause {
            title: "No transfer of IP ownership",
            must_include: &[],
            red_flags: &["grants ownership"],
        },
    ],
    checklist: &[
        PlaybookChecklistItem {
            id: "CHECK_NDA_01",
            title: "Purpose/use limitation",
            description: "The receiving party may use Confidential Information solely for the stated Purpose.",
            required_signals: &["solely for the Purpose", "not use"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Obligations of Receiving Party"],
                topics: &["obligations"],
            },
            insertion_policy_key: "after_heading:Definition of Confidential Information",
        },
        PlaybookChecklistItem {
            id: "CHECK_NDA_02",
            title: "Non-disclosure obligation",
            description: "The receiving party must not disclose Confidential Information to third parties.",
            required_signals: &["not disclose", "Confidential Information"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Obligations of Receiving Party"],
                topics: &["obligations"],
            },
            insertion_policy_key: "after_heading:Definition of Confidential Information",
        },
        PlaybookChecklistItem {
            id: "CHECK_NDA_03",
            title: "Compelled disclosure carve-out",
            description: "Disclosure required by law or court order is excused, subject to notice.",
            required_signals: &["required by law", "court order"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Compelled Disclosure"],
                topics: &["compelled"],
            },
            insertion_policy_key: "after_heading:Obligations of Receiving Party",
        },
        PlaybookChecklistItem {
            id: "CHECK_NDA_04",
            title: "Remedies for breach",
            description: "The disclosing party is entitled to injunctive relief and specific performance.",
            required_signals: &["injunctive relief", "specific performance"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Remedies"],
                topics: &["remedies"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_NDA_05",
            title: "Term and survival",
            description: "Confidentiality obligations survive termination for a defined number of years.",
            required_signals: &["years", "survive"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Term and Survival", "Term"],
                topics: &["term", "survival"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_NDA_06",
            title: "No implied license",
            description: "Nothing in the agreement grants any license or transfers intellectual property ownership.",
            required_signals: &["no license", "not granted or implied"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["No License", "Intellectual Property"],
                topics: &["license"],
            },
            insertion_policy_key: "end_of_document",
        },
    ],
};

static PRIVACY_POLICY_DOCUMENT: Playbook = Playbook {
    key: PlaybookKey::PrivacyPolicyDocument,
    display_name: "Privacy Policy Document",
    description: "Checklist for a consumer-facing privacy policy.",
    clause_anchors: &[
        ClauseAnchor { title: "Categories of personal data collected" },
        ClauseAnchor { title: "Purposes of processing" },
        ClauseAnchor { title: "Legal basis for processing" },
        ClauseAnchor { title: "Data sharing and third parties" },
        ClauseAnchor { title: "International transfers (if relevant)" },
        ClauseAnchor { title: "Data subject rights" },
        ClauseAnchor { title: "Retention period" },
        ClauseAnchor { title: "Security measures" },
        ClauseAnchor { title: "Children's privacy (if relevant)" },
        ClauseAnchor { title: "Contact information / data protection officer" },
    ],
    critical_clauses: &[
        CriticalClause {
            title: "Data subject rights",
            must_include: &["right to access", "right to erasure"],
            red_flags: &["no rights mechanism"],
        },
        CriticalClause {
            title: "Retention period",
            must_include: &["retention period"],
            red_flags: &["indefinite retention"],
        },
    ],
    checklist: &[
        PlaybookChecklistItem {
            id: "CHECK_PRIV_01",
            title: "Categories of data collected disclosed",
            description: "The policy must list the categories of personal data collected.",
            required_signals: &["personal data", "categories"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Categories of Personal Data Collected", "Data We Collect"],
                topics: &["collect"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_PRIV_02",
            title: "Purposes of processing disclosed",
            description: "The policy must state the purposes for which personal data is processed.",
            required_signals: &["purposes of processing", "used to"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Purposes of Processing", "How We Use Your Data"],
                topics: &["purpose"],
            },
            insertion_policy_key: "after_heading:Categories of Personal Data Collected",
        },
        PlaybookChecklistItem {
            id: "CHECK_PRIV_03",
            title: "Legal basis identified",
            description: "The policy must identify a legal basis for each processing purpose.",
            required_signals: &["legal basis", "legitimate interest"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Legal Basis for Processing"],
                topics: &["legalbasis"],
            },
            insertion_policy_key: "after_heading:Purposes of Processing",
        },
        PlaybookChecklistItem {
            id: "CHECK_PRIV_04",
            title: "Third-party sharing disclosed",
            description: "The policy must disclose categories of third parties data is shared with.",
            required_signals: &["third parties", "share"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Data Sharing and Third Parties", "Sharing Your Information"],
                topics: &["sharing"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_PRIV_05",
            title: "Data subject rights described",
            description: "The policy must describe rights of access, correction, and erasure.",
            required_signals: &["right to access", "right to erasure"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Data Subject Rights", "Your Rights"],
                topics: &["rights"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_PRIV_06",
            title: "Retention period disclosed",
            description: "The policy must state how long personal data is retained.",
            required_signals: &["retention period", "how long"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Retention Period", "Data Retention"],
                topics: &["retention"],
            },
            insertion_policy_key: "end_of_document",
        },
    ],
};

static CONSULTANCY_AGREEMENT: Playbook = Playbook {
    key: PlaybookKey::ConsultancyAgreement,
    display_name: "Consultancy Agreement",
    description: "Checklist for an independent-contractor consultancy agreement.",
    clause_anchors: &[
        ClauseAnchor { title: "Scope of services" },
        ClauseAnchor { title: "Fees and payment terms" },
        ClauseAnchor { title: "Term and termination" },
        ClauseAnchor { title: "Intellectual property ownership" },
        ClauseAnchor { title: "Confidentiality" },
        ClauseAnchor { title: "Independent contractor status" },
        ClauseAnchor { title: "Limitation of liability" },
        ClauseAnchor { title: "Indemnification" },
        ClauseAnchor { title: "Non-solicitation (if relevant)" },
    ],
    critical_clauses: &[
        CriticalClause {
            title: "Independent contractor status",
            must_include: &["independent contractor"],
            red_flags: &["employee of the company"],
        },
        CriticalClause {
            title: "Limitation of liability",
            must_include: &["limitation of liability"],
            red_flags: &["unlimited liability"],
        },
    ],
    checklist: &[
        PlaybookChecklistItem {
            id: "CHECK_CONS_01",
            title: "Scope of services defined",
            description: "The agreement must define the services the consultant will perform.",
            required_signals: &["scope of services", "perform the services"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Scope of Services", "Services"],
                topics: &["scope"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_CONS_02",
            title: "Payment terms defined",
            description: "Fees, invoicing cadence, and payment terms must be set out.",
            required_signals: &["fees", "invoice"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Fees and Payment Terms", "Compensation"],
                topics: &["payment"],
            },
            insertion_policy_key: "after_heading:Scope of Services",
        },
        PlaybookChecklistItem {
            id: "CHECK_CONS_03",
            title: "Work product ownership assigned",
            description: "Intellectual property in the work product must vest in the client upon payment.",
            required_signals: &["work product", "assigns"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Intellectual Property Ownership", "Work Product"],
                topics: &["intellectualproperty"],
            },
            insertion_policy_key: "after_heading:Fees and Payment Terms",
        },
        PlaybookChecklistItem {
            id: "CHECK_CONS_04",
            title: "Independent contractor status stated",
            description: "The consultant must be designated an independent contractor, not an employee.",
            required_signals: &["independent contractor", "not an employee"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Independent Contractor Status"],
                topics: &["contractor"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_CONS_05",
            title: "Confidentiality obligation present",
            description: "The consultant must keep client information confidential.",
            required_signals: &["confidential", "not disclose"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Confidentiality"],
                topics: &["confidentiality"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_CONS_06",
            title: "Liability capped",
            description: "A limitation of liability clause must cap aggregate exposure.",
            required_signals: &["limitation of liability", "aggregate liability"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Limitation of Liability"],
                topics: &["liability"],
            },
            insertion_policy_key: "end_of_document",
        },
    ],
};

static RESEARCH_DEVELOPMENT_AGREEMENT: Playbook = Playbook {
    key: PlaybookKey::ResearchDevelopmentAgreement,
    display_name: "Research & Development Agreement",
    description: "Checklist for a collaborative research and development agreement.",
    clause_anchors: &[
        ClauseAnchor { title: "Scope of research" },
        ClauseAnchor { title: "Background IP" },
        ClauseAnchor { title: "Foreground IP ownership" },
        ClauseAnchor { title: "Publication rights" },
        ClauseAnchor { title: "Funding and milestones" },
        ClauseAnchor { title: "Confidentiality" },
        ClauseAnchor { title: "Term and termination" },
        ClauseAnchor { title: "Liability and indemnification" },
        ClauseAnchor { title: "Export control / sanctions (if relevant)" },
    ],
    critical_clauses: &[
        CriticalClause {
            title: "Foreground IP ownership",
            must_include: &["ownership of"],
            red_flags: &["no ownership allocation"],
        },
        CriticalClause {
            title: "Publication rights",
            must_include: &["publication"],
            red_flags: &["no publication rights"],
        },
    ],
    checklist: &[
        PlaybookChecklistItem {
            id: "CHECK_RD_01",
            title: "Scope of research defined",
            description: "The research program and deliverables must be defined.",
            required_signals: &["scope of research", "research program"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Scope of Research"],
                topics: &["research"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_RD_02",
            title: "Background IP preserved",
            description: "Each party retains ownership of its background intellectual property.",
            required_signals: &["background ip", "retains ownership"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Background IP"],
                topics: &["background"],
            },
            insertion_policy_key: "after_heading:Scope of Research",
        },
        PlaybookChecklistItem {
            id: "CHECK_RD_03",
            title: "Foreground IP ownership allocated",
            description: "Ownership of IP created during the collaboration must be allocated.",
            required_signals: &["foreground ip", "ownership of"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Foreground IP Ownership"],
                topics: &["foreground"],
            },
            insertion_policy_key: "after_heading:Background IP",
        },
        PlaybookChecklistItem {
            id: "CHECK_RD_04",
            title: "Publication rights addressed",
            description: "The agreement must address each party's right to publish research results.",
            required_signals: &["publication", "review period"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Publication Rights"],
                topics: &["publication"],
            },
            insertion_policy_key: "after_heading:Foreground IP Ownership",
        },
        PlaybookChecklistItem {
            id: "CHECK_RD_05",
            title: "Funding and milestones set",
            description: "Funding obligations and milestones must be defined.",
            required_signals: &["milestones", "funding"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Funding and Milestones"],
                topics: &["funding"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_RD_06",
            title: "Export control addressed",
            description: "Cross-border collaboration should address export control and sanctions compliance.",
            required_signals: &["export control", "sanctions"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Export Control", "Sanctions"],
                topics: &["export"],
            },
            insertion_policy_key: "end_of_document",
        },
    ],
};

static END_USER_LICENSE_AGREEMENT: Playbook = Playbook {
    key: PlaybookKey::EndUserLicenseAgreement,
    display_name: "End User License Agreement",
    description: "Checklist for a software end user license agreement.",
    clause_anchors: &[
        ClauseAnchor { title: "Grant of license" },
        ClauseAnchor { title: "License restrictions" },
        ClauseAnchor { title: "Intellectual property ownership" },
        ClauseAnchor { title: "Warranty disclaimer" },
        ClauseAnchor { title: "Limitation of liability" },
        ClauseAnchor { title: "Termination" },
        ClauseAnchor { title: "Governing law" },
        ClauseAnchor { title: "Export control / sanctions (if relevant)" },
    ],
    critical_clauses: &[
        CriticalClause {
            title: "Grant of license",
            must_include: &["non-exclusive"],
            red_flags: &["exclusive perpetual license"],
        },
        CriticalClause {
            title: "Warranty disclaimer",
            must_include: &["as is"],
            red_flags: &["full warranty"],
        },
    ],
    checklist: &[
        PlaybookChecklistItem {
            id: "CHECK_EULA_01",
            title: "License grant scoped",
            description: "The license grant must be a limited, non-exclusive, non-transferable right to use the software.",
            required_signals: &["non-exclusive", "license to use"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Grant of License", "License Grant"],
                topics: &["license"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_EULA_02",
            title: "License restrictions stated",
            description: "Reverse engineering, sublicensing, and redistribution must be prohibited.",
            required_signals: &["reverse engineer", "not sublicense"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["License Restrictions", "Restrictions"],
                topics: &["restrictions"],
            },
            insertion_policy_key: "after_heading:Grant of License",
        },
        PlaybookChecklistItem {
            id: "CHECK_EULA_03",
            title: "IP ownership retained by licensor",
            description: "The licensor must retain all ownership and intellectual property rights in the software.",
            required_signals: &["no license", "not granted or implied"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Intellectual Property Ownership"],
                topics: &["ownership"],
            },
            insertion_policy_key: "after_heading:License Restrictions",
        },
        PlaybookChecklistItem {
            id: "CHECK_EULA_04",
            title: "Warranty disclaimed",
            description: "The software must be provided \"as is\" without warranty of any kind.",
            required_signals: &["as is", "disclaims all warranties"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Warranty Disclaimer"],
                topics: &["warranty"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_EULA_05",
            title: "Liability limited",
            description: "Liability must be limited and consequential damages excluded.",
            required_signals: &["limitation of liability", "consequential damages"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Limitation of Liability"],
                topics: &["liability"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_EULA_06",
            title: "Termination rights stated",
            description: "The license must terminate automatically on breach and require the user to cease use.",
            required_signals: &["terminate", "cease use"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Termination"],
                topics: &["termination"],
            },
            insertion_policy_key: "end_of_document",
        },
    ],
};

static PROFESSIONAL_SERVICES_AGREEMENT: Playbook = Playbook {
    key: PlaybookKey::ProfessionalServicesAgreement,
    display_name: "Professional Services Agreement",
    description: "Checklist for a statement-of-work-driven professional services agreement.",
    clause_anchors: &[
        ClauseAnchor { title: "Statement of work" },
        ClauseAnchor { title: "Fees and invoicing" },
        ClauseAnchor { title: "Acceptance criteria" },
        ClauseAnchor { title: "Intellectual property / work product ownership" },
        ClauseAnchor { title: "Confidentiality" },
        ClauseAnchor { title: "Term and termination" },
        ClauseAnchor { title: "Limitation of liability" },
        ClauseAnchor { title: "Indemnification" },
        ClauseAnchor { title: "Insurance (if relevant)" },
    ],
    critical_clauses: &[
        CriticalClause {
            title: "Acceptance criteria",
            must_include: &["acceptance"],
            red_flags: &["no acceptance process"],
        },
        CriticalClause {
            title: "Limitation of liability",
            must_include: &["limitation of liability"],
            red_flags: &["unlimited liability"],
        },
    ],
    checklist: &[
        PlaybookChecklistItem {
            id: "CHECK_PSA_01",
            title: "Statement of work referenced",
            description: "Deliverables must be defined in a statement of work incorporated by reference.",
            required_signals: &["statement of work", "deliverables"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Statement of Work", "Scope of Work"],
                topics: &["statementofwork"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_PSA_02",
            title: "Invoicing and payment terms set",
            description: "Fees, invoicing cadence, and payment due dates must be specified.",
            required_signals: &["invoice", "due within"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Fees and Invoicing", "Compensation"],
                topics: &["fees"],
            },
            insertion_policy_key: "after_heading:Statement of Work",
        },
        PlaybookChecklistItem {
            id: "CHECK_PSA_03",
            title: "Acceptance process defined",
            description: "Deliverables must be subject to a defined acceptance or sign-off process.",
            required_signals: &["acceptance", "sign-off"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Acceptance Criteria", "Acceptance"],
                topics: &["acceptance"],
            },
            insertion_policy_key: "after_heading:Fees and Invoicing",
        },
        PlaybookChecklistItem {
            id: "CHECK_PSA_04",
            title: "Work product ownership assigned",
            description: "Ownership of work product must vest in the client upon full payment.",
            required_signals: &["work product", "assigns"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Intellectual Property", "Work Product Ownership"],
                topics: &["workproduct"],
            },
            insertion_policy_key: "after_heading:Acceptance Criteria",
        },
        PlaybookChecklistItem {
            id: "CHECK_PSA_05",
            title: "Liability capped",
            description: "A limitation of liability clause must cap aggregate exposure.",
            required_signals: &["limitation of liability", "aggregate liability"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Limitation of Liability"],
                topics: &["liability"],
            },
            insertion_policy_key: "end_of_document",
        },
        PlaybookChecklistItem {
            id: "CHECK_PSA_06",
            title: "Indemnification obligations set",
            description: "Each party's indemnification obligations must be specified.",
            required_signals: &["indemnify", "hold harmless"],
            evidence_mapping: EvidenceMapping {
                clause_ids: &[],
                headings: &["Indemnification"],
                topics: &["indemnification"],
            },
            insertion_policy_key: "end_of_document",
        },
    ],
};

/// Look up the static playbook for a given key.
pub fn playbook_for_key(key: PlaybookKey) -> &'static Playbook {
    match key {
        PlaybookKey::DataProcessingAgreement => &DATA_PROCESSING_AGREEMENT,
        PlaybookKey::NonDisclosureAgreement => &NON_DISCLOSURE_AGREEMENT,
        PlaybookKey::PrivacyPolicyDocument => &PRIVACY_POLICY_DOCUMENT,
        PlaybookKey::ConsultancyAgreement => &CONSULTANCY_AGREEMENT,
        PlaybookKey::ResearchDevelopmentAgreement => &RESEARCH_DEVELOPMENT_AGREEMENT,
        PlaybookKey::EndUserLicenseAgreement => &END_USER_LICENSE_AGREEMENT,
        PlaybookKey::ProfessionalServicesAgreement => &PROFESSIONAL_SERVICES_AGREEMENT,
    }
}

/// All seven playbooks, in `PlaybookKey::ALL` order.
pub fn all_playbooks() -> [&'static Playbook; 7] {
    PlaybookKey::ALL.map(playbook_for_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_playbooks_exist() {
        assert_eq!(all_playbooks().len(), 7);
    }

    #[test]
    fn every_playbook_has_a_non_empty_checklist() {
        for playbook in all_playbooks() {
            assert!(!playbook.checklist.is_empty(), "{} has no checklist", playbook.key.as_str());
        }
    }

    #[test]
    fn keys_round_trip_through_wire_strings() {
        for playbook in all_playbooks() {
            assert_eq!(PlaybookKey::parse(playbook.key.as_str()), Some(playbook.key));
        }
    }

    #[test]
    fn coverage_denominator_excludes_optional_anchors() {
        let dpa = playbook_for_key(PlaybookKey::DataProcessingAgreement);
        assert!(dpa.clause_anchors.iter().any(|a| a.is_optional()));
        assert!(dpa.clause_anchors.iter().any(|a| !a.is_optional()));
    }
}
