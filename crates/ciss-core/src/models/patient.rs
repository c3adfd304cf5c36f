use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The eleven patient attributes the Basic Score is computed from.
///
/// One record per evaluation; the engine never mutates or retains it.
/// Categorical fields are closed enums, so only the numeric fields (age,
/// BMI, GDS) can carry an out-of-domain value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientAttributes {
    pub sex: Sex,
    /// Years. The intake form collects 45–115.
    pub age: u32,
    pub ethnicity: Ethnicity,
    pub education: Education,
    /// kg/m². The intake form collects 10–60.
    pub bmi: f64,
    pub smoking: Smoking,
    pub systolic_bp: SystolicBp,
    pub diabetes: bool,
    pub high_cholesterol: bool,
    pub stroke_history: bool,
    /// Geriatric Depression Scale total, 0–20.
    pub gds_score: u32,
}

impl Default for PatientAttributes {
    /// The intake form's default selections.
    fn default() -> Self {
        Self {
            sex: Sex::Female,
            age: 65,
            ethnicity: Ethnicity::Chinese,
            education: Education::NoFormalEducation,
            bmi: 21.0,
            smoking: Smoking::Never,
            systolic_bp: SystolicBp::Under140,
            diabetes: false,
            high_cholesterol: false,
            stroke_history: false,
            gds_score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Ethnicity {
    Chinese,
    Malay,
    Indian,
    Other,
}

/// Years of formal education, in the bands the source study used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Education {
    NoFormalEducation,
    /// 1–6 years.
    Primary,
    /// 7–12 years.
    Secondary,
    /// More than 12 years.
    Tertiary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Smoking {
    /// Current or former smoker.
    CurrentOrFormer,
    Never,
}

/// Systolic blood pressure, banded as collected (mmHg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SystolicBp {
    Under140,
    From140To160,
    Over160,
}
