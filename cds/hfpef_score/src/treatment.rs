// Treatment optimizer: independent guard rules over baseline findings and current therapy.

use std::fmt;

use hfpef_type::TreatmentInput;
use log::debug;
use serde::Serialize;

const PASP_VOLUME_OVERLOAD: f64 = 40.0;
const ECV_FIBROSIS: f64 = 30.0;
const HIGH_SYMPTOM_BURDEN: f64 = 70.0;
// Six-minute walk distance, metres.
const LOW_EXERCISE_CAPACITY: f64 = 300.0;

/// The advisor's rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentRule {
    RaasInhibition,
    VolumeManagement,
    AntiFibrotic,
    SymptomManagement,
    ExerciseTraining,
}

impl TreatmentRule {
    pub const ALL: [TreatmentRule; 5] = [
        TreatmentRule::RaasInhibition,
        TreatmentRule::VolumeManagement,
        TreatmentRule::AntiFibrotic,
        TreatmentRule::SymptomManagement,
        TreatmentRule::ExerciseTraining,
    ];

    /// Whether the rule's guard holds. Missing measurements never satisfy a guard.
    pub fn applies(&self, input: &TreatmentInput) -> bool {
        let meds = &input.current_medications;
        match self {
            TreatmentRule::RaasInhibition => !meds.ace_arb,
            TreatmentRule::VolumeManagement => {
                exceeds(input.baseline_pasp, PASP_VOLUME_OVERLOAD) && !meds.diuretic
            }
            TreatmentRule::AntiFibrotic => exceeds(input.baseline_ecv, ECV_FIBROSIS) && !meds.mra,
            TreatmentRule::SymptomManagement => {
                exceeds(input.symptom_score, HIGH_SYMPTOM_BURDEN)
            }
            TreatmentRule::ExerciseTraining => {
                falls_below(input.exercise_capacity, LOW_EXERCISE_CAPACITY)
            }
        }
    }

    pub fn recommendation(&self) -> TreatmentRecommendation {
        let (category, recommendation, evidence, monitoring) = match self {
            TreatmentRule::RaasInhibition => (
                "RAAS Inhibition",
                "Initiate ACE inhibitor or ARB",
                "Class I recommendation for HFpEF",
                "Monitor renal function and potassium",
            ),
            TreatmentRule::VolumeManagement => (
                "Volume Management",
                "Consider loop diuretic therapy",
                "For symptomatic relief in volume overload",
                "Monitor electrolytes and renal function",
            ),
            TreatmentRule::AntiFibrotic => (
                "Anti-fibrotic Therapy",
                "Consider MRA (spironolactone/eplerenone)",
                "May benefit patients with elevated fibrosis burden",
                "Monitor potassium and renal function closely",
            ),
            TreatmentRule::SymptomManagement => (
                "Symptom Management",
                "Intensive symptom management program",
                "High symptom burden requires multimodal approach",
                "Regular symptom assessment and QOL evaluation",
            ),
            TreatmentRule::ExerciseTraining => (
                "Exercise Training",
                "Supervised cardiac rehabilitation",
                "Improves exercise capacity and quality of life",
                "Exercise tolerance and functional capacity",
            ),
        };
        TreatmentRecommendation {
            rule: *self,
            category,
            recommendation,
            evidence,
            monitoring,
        }
    }
}

impl fmt::Display for TreatmentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.recommendation().category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreatmentRecommendation {
    pub rule: TreatmentRule,
    pub category: &'static str,
    pub recommendation: &'static str,
    pub evidence: &'static str,
    pub monitoring: &'static str,
}

// `None` and NaN both fail the comparison.
fn exceeds(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v > threshold)
}

fn falls_below(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v < threshold)
}

/// Every recommendation whose guard holds, in fixed rule order.
pub fn advise_treatment(input: &TreatmentInput) -> Vec<TreatmentRecommendation> {
    TreatmentRule::ALL
        .iter()
        .filter(|rule| rule.applies(input))
        .map(|rule| {
            debug!("treatment rule fired: {rule}");
            rule.recommendation()
        })
        .collect()
}
