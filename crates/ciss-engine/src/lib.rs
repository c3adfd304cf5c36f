//! ciss-engine
//!
//! Scoring rules for the Cognitive Impairment Scoring System (CISS): the
//! Basic Score point table, the risk-band thresholds, and the likelihood
//! lookup. Pure functions over a single patient record — no persistence,
//! no network, no shared state.

pub mod error;
pub mod probability;
pub mod risk;
pub mod scoring;
pub mod validate;

use ciss_core::models::patient::PatientAttributes;
use ciss_core::models::score::ScoreResult;

use crate::error::EngineError;

/// Score one patient record.
///
/// Validates the numeric attributes, computes the Basic Score, and derives
/// the risk band, clinical action, and likelihood label from it. A record
/// with any attribute outside its collected range is rejected whole; no
/// partial score is produced.
pub fn evaluate(attrs: &PatientAttributes) -> Result<ScoreResult, EngineError> {
    let errors = validate::validate(attrs);
    if !errors.is_empty() {
        return Err(EngineError::Validation(errors));
    }

    let basic_score = scoring::compute_basic_score(attrs);
    let classification = risk::classify(basic_score);

    tracing::debug!(basic_score, band = ?classification.band, "scored patient record");

    Ok(ScoreResult {
        basic_score,
        risk_band: classification.band,
        clinical_action: classification.clinical_action.to_string(),
        probability_label: probability::likelihood_label(basic_score).to_string(),
    })
}
