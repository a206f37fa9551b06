//! Shared patients for the integration tests.

use hfpef_type::{DiagnosticInput, Medications, TreatmentInput};

/// The worked example from the calculator's documentation: mean E/e′ 14.0,
/// PASP 42, ECV 28.5, strain −16.2, age 65, HF2PEF 6, BMI 28.5, diabetic and
/// hypertensive. Scores ≈ 68.83 (Moderate).
pub fn worked_example() -> DiagnosticInput {
    DiagnosticInput {
        age: Some(65.0),
        hf2pef_score: Some(6.0),
        e_e_medial: Some(15.2),
        e_e_lateral: Some(12.8),
        pasp: Some(42.0),
        mean_ecv: Some(28.5),
        lv_longitudinal_strain: Some(-16.2),
        bmi: Some(28.5),
        diabetes: true,
        hypertension: true,
        ..Default::default()
    }
}

pub const WORKED_EXAMPLE_SCORE: f64 = 7.5 + 6.0 / 9.0 * 20.0 + 8.0 + 5.0 + 10.0 + 10.0 + 10.0 + 5.0;

/// On every drug class, with unremarkable baseline findings.
pub fn stable_treated_patient() -> TreatmentInput {
    TreatmentInput {
        baseline_pasp: Some(20.0),
        baseline_ecv: Some(20.0),
        symptom_score: Some(10.0),
        exercise_capacity: Some(500.0),
        current_medications: Medications::all(),
        ..Default::default()
    }
}

/// On nothing, with every finding past its treatment threshold.
pub fn untreated_symptomatic_patient() -> TreatmentInput {
    TreatmentInput {
        baseline_pasp: Some(50.0),
        baseline_ecv: Some(35.0),
        symptom_score: Some(80.0),
        exercise_capacity: Some(200.0),
        current_medications: Medications::default(),
        ..Default::default()
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
