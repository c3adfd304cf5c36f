use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Everything the caller displays after one evaluation. Derived entirely
/// from the Basic Score; no other state feeds into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// The Basic Score point total. Informally tops out at 100; the engine
    /// does not clamp.
    pub basic_score: i32,
    pub risk_band: RiskBand,
    /// Recommended follow-up, one sentence.
    pub clinical_action: String,
    /// Likelihood of CIND as a display label, e.g. "13%" or "> 90%".
    pub probability_label: String,
}

/// Qualitative risk category derived from the Basic Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Intermediate,
    High,
}
