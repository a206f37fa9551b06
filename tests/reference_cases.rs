use hfpef_score::{
    advise_treatment, categorize, recommendations_for, score_diagnostic, score_prognostic,
    AssessmentKind, RiskCategory, TreatmentRule,
};
use hfpef_type::{DiagnosticInput, PrognosticInput, TreatmentInput};
use pretty_assertions::assert_eq;
use tests::{
    approx_eq, stable_treated_patient, untreated_symptomatic_patient, worked_example,
    WORKED_EXAMPLE_SCORE,
};

#[test]
fn empty_diagnostic_input_scores_zero() {
    assert_eq!(score_diagnostic(&DiagnosticInput::default()), 0.0);
    assert_eq!(score_prognostic(&PrognosticInput::default()), 0.0);
}

#[test]
fn worked_example_scores_moderate() {
    let score = score_diagnostic(&worked_example());
    assert!(approx_eq(score, WORKED_EXAMPLE_SCORE), "score was {score}");
    assert!(approx_eq(score, 68.833_333_333_333_33));
    assert_eq!(categorize(score), RiskCategory::Moderate);
}

#[test]
fn category_breakpoints_are_exact() {
    assert_eq!(categorize(29.9), RiskCategory::Low);
    assert_eq!(categorize(30.0), RiskCategory::Moderate);
    assert_eq!(categorize(69.9), RiskCategory::Moderate);
    assert_eq!(categorize(70.0), RiskCategory::High);
}

#[test]
fn stable_treated_patient_gets_no_advice() {
    assert!(advise_treatment(&stable_treated_patient()).is_empty());
}

#[test]
fn untreated_patient_gets_all_five_records_in_order() {
    let recs = advise_treatment(&untreated_symptomatic_patient());
    let categories: Vec<&str> = recs.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            "RAAS Inhibition",
            "Volume Management",
            "Anti-fibrotic Therapy",
            "Symptom Management",
            "Exercise Training",
        ]
    );
    assert_eq!(recs[0].rule, TreatmentRule::RaasInhibition);
}

#[test]
fn blank_treatment_fields_never_fire_their_rules() {
    // ACE/ARB unchecked still fires unconditionally.
    let recs = advise_treatment(&TreatmentInput::default());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].rule, TreatmentRule::RaasInhibition);
}

#[test]
fn repeated_calls_agree() {
    let input = worked_example();
    assert_eq!(
        score_diagnostic(&input).to_bits(),
        score_diagnostic(&input).to_bits()
    );
    let t = untreated_symptomatic_patient();
    assert_eq!(advise_treatment(&t), advise_treatment(&t));
}

#[test]
fn guidance_tables_are_fixed() {
    assert_eq!(
        recommendations_for(RiskCategory::Moderate, AssessmentKind::Diagnostic),
        &[
            "Cardiology consultation recommended",
            "Advanced cardiac imaging (cardiac MRI with ECV)",
            "Comprehensive echocardiography with strain",
            "Exercise testing for functional assessment",
            "Consider cardiac catheterization if high suspicion",
        ]
    );
    assert_eq!(
        recommendations_for(RiskCategory::High, AssessmentKind::Prognostic).len(),
        6
    );
}
