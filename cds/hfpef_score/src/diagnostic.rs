// Diagnostic calculator: how likely the presentation is HFpEF.
//
// Weighting: clinical factors roughly 40%, hemodynamics 35%, imaging 25%.

use hfpef_type::{present, DiagnosticInput};

use crate::bands::{points_above, points_below};
use crate::explain::{Factor, ScoreBreakdown, Tally};

const AGE_PIVOT: f64 = 50.0;
const AGE_SPAN: f64 = 30.0;
const AGE_MAX_POINTS: f64 = 15.0;

const HF2PEF_SCALE_MAX: f64 = 9.0;
const HF2PEF_WEIGHT: f64 = 20.0;

const OBESITY_BMI: f64 = 30.0;
const OBESITY_POINTS: f64 = 5.0;
const DIABETES_POINTS: f64 = 8.0;
const HYPERTENSION_POINTS: f64 = 5.0;

const MEAN_E_E_BANDS: &[(f64, f64)] = &[(15.0, 15.0), (10.0, 10.0), (8.0, 5.0)];
const PASP_BANDS: &[(f64, f64)] = &[(40.0, 10.0), (35.0, 5.0)];
const ECV_BANDS: &[(f64, f64)] = &[(30.0, 15.0), (27.0, 10.0), (25.0, 5.0)];
// Compared against the magnitude of the strain.
const STRAIN_BANDS: &[(f64, f64)] = &[(15.0, 10.0), (18.0, 5.0)];

/// Term-by-term diagnostic score.
pub fn diagnostic_breakdown(input: &DiagnosticInput) -> ScoreBreakdown {
    let mut tally = Tally::default();

    if let Some(age) = present(input.age) {
        let points = ((age - AGE_PIVOT) / AGE_SPAN * AGE_MAX_POINTS).min(AGE_MAX_POINTS);
        tally.add(Factor::Age, points);
    }
    if let Some(hf2pef) = present(input.hf2pef_score) {
        tally.add(Factor::Hf2pefScore, hf2pef / HF2PEF_SCALE_MAX * HF2PEF_WEIGHT);
    }
    if let Some(bmi) = present(input.bmi) {
        let points = if bmi > OBESITY_BMI { OBESITY_POINTS } else { 0.0 };
        tally.add(Factor::Bmi, points);
    }
    if input.diabetes {
        tally.add(Factor::Diabetes, DIABETES_POINTS);
    }
    if input.hypertension {
        tally.add(Factor::Hypertension, HYPERTENSION_POINTS);
    }

    if let Some(mean_e_e) = input.mean_e_e() {
        tally.add(Factor::MeanEe, points_above(mean_e_e, MEAN_E_E_BANDS));
    }
    if let Some(pasp) = present(input.pasp) {
        tally.add(Factor::Pasp, points_above(pasp, PASP_BANDS));
    }

    if let Some(ecv) = present(input.mean_ecv) {
        tally.add(Factor::Ecv, points_above(ecv, ECV_BANDS));
    }
    if let Some(strain) = present(input.lv_longitudinal_strain) {
        tally.add(Factor::LvStrain, points_below(strain.abs(), STRAIN_BANDS));
    }

    tally.finish()
}

/// Diagnostic score in `[0, 100]`. Absent fields contribute nothing.
pub fn score_diagnostic(input: &DiagnosticInput) -> f64 {
    diagnostic_breakdown(input).score
}
