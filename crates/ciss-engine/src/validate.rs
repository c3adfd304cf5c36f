//! Range checks for the numeric attributes.
//!
//! The categorical fields are closed enums and cannot go out of domain;
//! age, BMI, and GDS arrive as numbers and are checked against the ranges
//! the intake form collects. A record that fails here is rejected whole —
//! an out-of-range value is never silently scored as zero points.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use ciss_core::models::patient::PatientAttributes;

/// The numeric attributes subject to range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NumericAttribute {
    Age,
    Bmi,
    GdsScore,
}

/// Closed range of accepted values for one numeric attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// Age in years, as collected by the intake form.
pub const AGE_RANGE: ValueRange = ValueRange {
    min: 45.0,
    max: 115.0,
    step: Some(1.0),
};

/// BMI in kg/m². Fractional values are accepted.
pub const BMI_RANGE: ValueRange = ValueRange {
    min: 10.0,
    max: 60.0,
    step: None,
};

/// Geriatric Depression Scale total.
pub const GDS_RANGE: ValueRange = ValueRange {
    min: 0.0,
    max: 20.0,
    step: Some(1.0),
};

/// One numeric attribute outside its accepted range.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AttributeError {
    pub attribute: NumericAttribute,
    pub value: f64,
    pub expected_range: ValueRange,
    pub message: String,
}

/// Check every numeric attribute, returning one error per violation.
pub fn validate(attrs: &PatientAttributes) -> Vec<AttributeError> {
    let checks = [
        (NumericAttribute::Age, "age", f64::from(attrs.age), AGE_RANGE),
        (NumericAttribute::Bmi, "BMI", attrs.bmi, BMI_RANGE),
        (
            NumericAttribute::GdsScore,
            "GDS score",
            f64::from(attrs.gds_score),
            GDS_RANGE,
        ),
    ];

    let mut errors = Vec::new();
    for (attribute, name, value, expected_range) in checks {
        if !expected_range.contains(value) {
            errors.push(AttributeError {
                attribute,
                value,
                expected_range,
                message: format!(
                    "{name} {value} is outside range [{}, {}]",
                    expected_range.min, expected_range.max,
                ),
            });
        }
    }
    errors
}
