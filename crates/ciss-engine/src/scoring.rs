//! The Basic Score point table.
//!
//! Eleven independent, additive contributions, one per attribute. No
//! interaction terms and no clamping.

use ciss_core::models::patient::{
    Education, Ethnicity, PatientAttributes, Sex, Smoking, SystolicBp,
};

/// Sum the per-factor contributions for one record.
///
/// Total over the collected domains: every value of every field matches
/// exactly one arm below, and evaluation order does not affect the result.
pub fn compute_basic_score(attrs: &PatientAttributes) -> i32 {
    age_points(attrs.age)
        + sex_points(attrs.sex)
        + ethnicity_points(attrs.ethnicity)
        + bmi_points(attrs.bmi)
        + education_points(attrs.education)
        + systolic_bp_points(attrs.systolic_bp)
        + smoking_points(attrs.smoking)
        + if attrs.diabetes { 8 } else { 0 }
        + if attrs.high_cholesterol { 7 } else { 0 }
        + if attrs.stroke_history { 9 } else { 0 }
        + gds_points(attrs.gds_score)
}

fn age_points(age: u32) -> i32 {
    match age {
        60..=75 => 9,
        76.. => 15,
        _ => 0,
    }
}

fn sex_points(sex: Sex) -> i32 {
    match sex {
        Sex::Female => 3,
        Sex::Male => 0,
    }
}

fn ethnicity_points(ethnicity: Ethnicity) -> i32 {
    match ethnicity {
        Ethnicity::Chinese => 0,
        Ethnicity::Malay | Ethnicity::Indian | Ethnicity::Other => 10,
    }
}

/// 18.5 and 30 both sit in the zero-point band.
fn bmi_points(bmi: f64) -> i32 {
    if bmi < 18.5 {
        11
    } else if bmi <= 30.0 {
        0
    } else {
        6
    }
}

fn education_points(education: Education) -> i32 {
    match education {
        Education::NoFormalEducation | Education::Primary => 12,
        Education::Secondary => 4,
        Education::Tertiary => 0,
    }
}

fn systolic_bp_points(sbp: SystolicBp) -> i32 {
    match sbp {
        SystolicBp::Under140 => 0,
        SystolicBp::From140To160 => 4,
        SystolicBp::Over160 => 11,
    }
}

fn smoking_points(smoking: Smoking) -> i32 {
    match smoking {
        Smoking::CurrentOrFormer => 5,
        Smoking::Never => 0,
    }
}

/// Any depressive symptoms at all (GDS above zero) carry the full 9 points.
fn gds_points(gds: u32) -> i32 {
    if gds > 0 { 9 } else { 0 }
}
