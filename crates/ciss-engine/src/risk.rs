//! Risk-band thresholds and the recommended clinical action for each band.

use ciss_core::models::score::RiskBand;

/// A band together with its follow-up recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskClassification {
    pub band: RiskBand,
    pub clinical_action: &'static str,
}

/// Classify a Basic Score. 35 and 50 both fall in the intermediate band.
pub fn classify(score: i32) -> RiskClassification {
    if score < 35 {
        RiskClassification {
            band: RiskBand::Low,
            clinical_action: "To follow-up in 12 months",
        }
    } else if score <= 50 {
        RiskClassification {
            band: RiskBand::Intermediate,
            clinical_action: "To encourage lifestyle modification and follow-up in 6 months",
        }
    } else {
        RiskClassification {
            band: RiskBand::High,
            clinical_action: "To be referred to specialist clinic",
        }
    }
}
