// Representative patients shared by the benchmarks.

use hfpef_type::{DiagnosticInput, Medications, PrognosticInput, TreatmentInput};

pub fn diagnostic_patient() -> DiagnosticInput {
    DiagnosticInput {
        age: Some(65.0),
        bmi: Some(28.5),
        hf2pef_score: Some(6.0),
        e_e_medial: Some(15.2),
        e_e_lateral: Some(12.8),
        pasp: Some(42.0),
        mean_ecv: Some(28.5),
        lv_longitudinal_strain: Some(-16.2),
        diabetes: true,
        hypertension: true,
        ..Default::default()
    }
}

pub fn prognostic_patient() -> PrognosticInput {
    PrognosticInput {
        age: Some(72.0),
        bmi: Some(32.0),
        mean_ecv: Some(29.0),
        lv_strain: Some(-14.0),
        e_e_ratio: Some(16.0),
        quality_of_life: Some(60.0),
        diabetes: true,
        pasp: None,
    }
}

pub fn treatment_patient() -> TreatmentInput {
    TreatmentInput {
        baseline_ecv: Some(35.0),
        baseline_pasp: Some(50.0),
        baseline_e_e: Some(14.0),
        symptom_score: Some(80.0),
        exercise_capacity: Some(200.0),
        current_medications: Medications {
            beta_blocker: true,
            ..Default::default()
        },
    }
}
