//! End-to-end tests for `evaluate`: risk classification, likelihood lookup,
//! and record validation.
//!
//! Run with: `cargo test -p ciss-engine --test evaluate`

use ciss_core::models::patient::{
    Education, Ethnicity, PatientAttributes, Sex, Smoking, SystolicBp,
};
use ciss_core::models::score::RiskBand;
use ciss_engine::error::EngineError;
use ciss_engine::evaluate;
use ciss_engine::probability::likelihood_label;
use ciss_engine::risk::classify;
use ciss_engine::validate::{NumericAttribute, validate};

#[test]
fn risk_band_thresholds() {
    assert_eq!(classify(0).band, RiskBand::Low);
    assert_eq!(classify(34).band, RiskBand::Low);
    assert_eq!(classify(35).band, RiskBand::Intermediate);
    assert_eq!(classify(50).band, RiskBand::Intermediate);
    assert_eq!(classify(51).band, RiskBand::High);

    assert_eq!(classify(34).clinical_action, "To follow-up in 12 months");
    assert_eq!(
        classify(35).clinical_action,
        "To encourage lifestyle modification and follow-up in 6 months"
    );
    assert_eq!(
        classify(51).clinical_action,
        "To be referred to specialist clinic"
    );
}

/// Both edges of every published likelihood bucket, including the literal
/// 10 → "8%" / 11 → "13%" split carried over from the source table.
#[test]
fn likelihood_buckets_cover_every_edge() {
    let cases = [
        (0, "6%"),
        (4, "6%"),
        (5, "8%"),
        (10, "8%"),
        (11, "13%"),
        (14, "13%"),
        (15, "19%"),
        (19, "19%"),
        (20, "28%"),
        (24, "28%"),
        (25, "38%"),
        (29, "38%"),
        (30, "50%"),
        (34, "50%"),
        (35, "61%"),
        (39, "61%"),
        (40, "72%"),
        (44, "72%"),
        (45, "80%"),
        (49, "80%"),
        (50, "87%"),
        (54, "87%"),
        (55, "> 90%"),
        (92, "> 90%"),
    ];
    for (score, label) in cases {
        assert_eq!(likelihood_label(score), label, "score {score}");
    }
}

#[test]
fn negative_score_falls_back_to_not_available() {
    assert_eq!(likelihood_label(-1), "N/A");
}

#[test]
fn low_risk_scenario_end_to_end() {
    let attrs = PatientAttributes {
        sex: Sex::Female,
        age: 65,
        ethnicity: Ethnicity::Chinese,
        education: Education::Tertiary,
        bmi: 22.0,
        smoking: Smoking::Never,
        systolic_bp: SystolicBp::Under140,
        diabetes: false,
        high_cholesterol: false,
        stroke_history: false,
        gds_score: 0,
    };

    let result = evaluate(&attrs).expect("record is in range");
    assert_eq!(result.basic_score, 12);
    assert_eq!(result.risk_band, RiskBand::Low);
    assert_eq!(result.clinical_action, "To follow-up in 12 months");
    assert_eq!(result.probability_label, "13%");
}

#[test]
fn high_risk_scenario_end_to_end() {
    let attrs = PatientAttributes {
        sex: Sex::Male,
        age: 80,
        ethnicity: Ethnicity::Malay,
        education: Education::NoFormalEducation,
        bmi: 32.0,
        smoking: Smoking::CurrentOrFormer,
        systolic_bp: SystolicBp::Over160,
        diabetes: true,
        high_cholesterol: true,
        stroke_history: true,
        gds_score: 5,
    };

    let result = evaluate(&attrs).expect("record is in range");
    assert_eq!(result.basic_score, 92);
    assert_eq!(result.risk_band, RiskBand::High);
    assert_eq!(result.clinical_action, "To be referred to specialist clinic");
    assert_eq!(result.probability_label, "> 90%");
}

/// The intake form's default selections: 9 (age 65) + 3 (female) + 12 (no
/// formal education) = 24.
#[test]
fn default_record_matches_intake_form() {
    let result = evaluate(&PatientAttributes::default()).expect("defaults are in range");
    assert_eq!(result.basic_score, 24);
    assert_eq!(result.risk_band, RiskBand::Low);
    assert_eq!(result.probability_label, "28%");
}

#[test]
fn evaluate_is_idempotent() {
    let attrs = PatientAttributes::default();
    let first = evaluate(&attrs).expect("defaults are in range");
    let second = evaluate(&attrs).expect("defaults are in range");
    assert_eq!(first, second);
}

#[test]
fn in_range_record_passes_validation() {
    assert!(validate(&PatientAttributes::default()).is_empty());

    let mut attrs = PatientAttributes::default();
    attrs.age = 45;
    attrs.bmi = 10.0;
    assert!(validate(&attrs).is_empty());
    attrs.age = 115;
    attrs.bmi = 60.0;
    attrs.gds_score = 20;
    assert!(validate(&attrs).is_empty());
}

#[test]
fn out_of_range_age_is_rejected() {
    let mut attrs = PatientAttributes::default();
    attrs.age = 44;

    let err = evaluate(&attrs).expect_err("age below collected range");
    match err {
        EngineError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].attribute, NumericAttribute::Age);
            assert_eq!(errors[0].value, 44.0);
        }
    }
}

/// Several bad fields are reported together, not first-error-only.
#[test]
fn out_of_range_bmi_and_gds_reported_together() {
    let mut attrs = PatientAttributes::default();
    attrs.bmi = 9.5;
    attrs.gds_score = 21;

    let errors = validate(&attrs);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].attribute, NumericAttribute::Bmi);
    assert_eq!(errors[1].attribute, NumericAttribute::GdsScore);

    assert!(evaluate(&attrs).is_err());
}

#[test]
fn validation_message_names_the_range() {
    let mut attrs = PatientAttributes::default();
    attrs.age = 120;

    let errors = validate(&attrs);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "age 120 is outside range [45, 115]");
}
