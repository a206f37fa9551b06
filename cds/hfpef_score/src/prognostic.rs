// Prognostic assessment: risk of adverse outcome once HFpEF is established.
// Fibrosis burden carries the largest single weight.

use hfpef_type::{present, PrognosticInput};

use crate::bands::{points_above, points_below};
use crate::explain::{Factor, ScoreBreakdown, Tally};

const AGE_PIVOT: f64 = 60.0;
const AGE_SPAN: f64 = 20.0;
const AGE_MAX_POINTS: f64 = 20.0;

const ECV_BANDS: &[(f64, f64)] = &[(32.0, 25.0), (28.0, 15.0), (25.0, 8.0)];
const STRAIN_BANDS: &[(f64, f64)] = &[(12.0, 20.0), (15.0, 10.0)];
const E_E_BANDS: &[(f64, f64)] = &[(20.0, 15.0), (15.0, 8.0)];
const BMI_BANDS: &[(f64, f64)] = &[(35.0, 10.0), (30.0, 5.0)];
const DIABETES_POINTS: f64 = 10.0;
const QUALITY_OF_LIFE_BANDS: &[(f64, f64)] = &[(50.0, 10.0), (70.0, 5.0)];

pub fn prognostic_breakdown(input: &PrognosticInput) -> ScoreBreakdown {
    let mut tally = Tally::default();

    if let Some(age) = present(input.age) {
        let points = ((age - AGE_PIVOT) / AGE_SPAN * AGE_MAX_POINTS).min(AGE_MAX_POINTS);
        tally.add(Factor::Age, points);
    }
    if let Some(ecv) = present(input.mean_ecv) {
        tally.add(Factor::Ecv, points_above(ecv, ECV_BANDS));
    }
    if let Some(strain) = present(input.lv_strain) {
        tally.add(Factor::LvStrain, points_below(strain.abs(), STRAIN_BANDS));
    }
    if let Some(e_e) = present(input.e_e_ratio) {
        tally.add(Factor::EeRatio, points_above(e_e, E_E_BANDS));
    }
    if let Some(bmi) = present(input.bmi) {
        tally.add(Factor::Bmi, points_above(bmi, BMI_BANDS));
    }
    if input.diabetes {
        tally.add(Factor::Diabetes, DIABETES_POINTS);
    }
    if let Some(qol) = present(input.quality_of_life) {
        tally.add(Factor::QualityOfLife, points_below(qol, QUALITY_OF_LIFE_BANDS));
    }

    tally.finish()
}

/// Prognostic score in `[0, 100]`. Absent fields contribute nothing.
pub fn score_prognostic(input: &PrognosticInput) -> f64 {
    prognostic_breakdown(input).score
}
