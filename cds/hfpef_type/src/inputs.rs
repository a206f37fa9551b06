// Typed input records for the three assessment forms.
// Absent measurements are `None`; unchecked boxes are `false`.

use serde::{Deserialize, Serialize};

use crate::measurement;

/// Clinical, hemodynamic, and imaging findings for the diagnostic calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticInput {
    /// Years
    #[serde(deserialize_with = "measurement::deserialize")]
    pub age: Option<f64>,
    /// kg/m²
    #[serde(deserialize_with = "measurement::deserialize")]
    pub bmi: Option<f64>,
    /// H2FPEF points, 0 to 9
    #[serde(deserialize_with = "measurement::deserialize")]
    pub hf2pef_score: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub e_e_medial: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub e_e_lateral: Option<f64>,
    /// mmHg
    #[serde(deserialize_with = "measurement::deserialize")]
    pub pasp: Option<f64>,
    /// Recorded with the echo findings; not scored.
    #[serde(deserialize_with = "measurement::deserialize")]
    pub lv_mass: Option<f64>,
    /// Recorded with the echo findings; not scored.
    #[serde(deserialize_with = "measurement::deserialize")]
    pub lv_ef: Option<f64>,
    /// Percent
    #[serde(deserialize_with = "measurement::deserialize")]
    pub mean_ecv: Option<f64>,
    /// Percent, usually negative; only the magnitude is scored.
    #[serde(deserialize_with = "measurement::deserialize")]
    pub lv_longitudinal_strain: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize_flag")]
    pub diabetes: bool,
    #[serde(deserialize_with = "measurement::deserialize_flag")]
    pub hypertension: bool,
}

impl DiagnosticInput {
    /// Mean of the medial and lateral E/e′ ratios, only when both are entered.
    pub fn mean_e_e(&self) -> Option<f64> {
        let medial = measurement::present(self.e_e_medial)?;
        let lateral = measurement::present(self.e_e_lateral)?;
        Some((medial + lateral) / 2.0)
    }
}

/// Demographic, fibrosis, and functional findings for the prognostic assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrognosticInput {
    #[serde(deserialize_with = "measurement::deserialize")]
    pub age: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub bmi: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub mean_ecv: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub lv_strain: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub e_e_ratio: Option<f64>,
    /// 0 to 100, higher is better.
    #[serde(deserialize_with = "measurement::deserialize")]
    pub quality_of_life: Option<f64>,
    /// Recorded on the form; not scored.
    #[serde(deserialize_with = "measurement::deserialize")]
    pub pasp: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize_flag")]
    pub diabetes: bool,
}

/// Drug classes the patient is already taking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Medications {
    #[serde(deserialize_with = "measurement::deserialize_flag")]
    pub ace_arb: bool,
    #[serde(deserialize_with = "measurement::deserialize_flag")]
    pub beta_blocker: bool,
    #[serde(deserialize_with = "measurement::deserialize_flag")]
    pub diuretic: bool,
    #[serde(deserialize_with = "measurement::deserialize_flag")]
    pub mra: bool,
}

impl Medications {
    /// Every class checked.
    pub fn all() -> Self {
        Self {
            ace_arb: true,
            beta_blocker: true,
            diuretic: true,
            mra: true,
        }
    }
}

/// Baseline measurements, current therapy, and symptom burden for the treatment optimizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentInput {
    #[serde(deserialize_with = "measurement::deserialize")]
    pub baseline_ecv: Option<f64>,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub baseline_pasp: Option<f64>,
    /// Recorded for follow-up; no rule reads it.
    #[serde(deserialize_with = "measurement::deserialize")]
    pub baseline_e_e: Option<f64>,
    pub current_medications: Medications,
    #[serde(deserialize_with = "measurement::deserialize")]
    pub symptom_score: Option<f64>,
    /// Six-minute walk distance, metres.
    #[serde(deserialize_with = "measurement::deserialize")]
    pub exercise_capacity: Option<f64>,
}
