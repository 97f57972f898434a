//! Error kinds surfaced by the review core.
//!
//! The core is permissive on inputs and strict on outputs: most anomalies
//! (an issue whose clause reference doesn't resolve, an edit whose anchor
//! vanished after every fallback) are repaired in place rather than
//! propagated. Only the kinds below ever leave [`crate::review`] as an
//! `Err`.

use thiserror::Error;

/// Errors that can terminate a review before a report is produced.
///
/// `EvidenceValidation`, `AnchorResolution`, and drift are *not* represented
/// here — per spec they are recovered locally inside the alignment/binding
/// pipeline and folded into the report (a rewritten excerpt, a dropped
/// edit, a diagnostic field), never surfaced as an error.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The request JSON does not conform to the data model: an empty
    /// `parties` list, an unknown severity string, a clause with a
    /// non-slug `clauseId`, etc.
    #[error("schema violation: {0}")]
    Schema(String),

    /// `playbookKey` is not one of the seven closed values.
    #[error("unknown playbook key: {0}")]
    UnknownPlaybook(String),

    /// Anything else: a bug, not a caller mistake.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the core.
pub type ReviewResult<T> = Result<T, ReviewError>;
