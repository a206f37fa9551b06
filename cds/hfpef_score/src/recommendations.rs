// Guidance text attached to each risk band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::{categorize, RiskCategory};

/// Which score a recommendation list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Diagnostic,
    Prognostic,
}

impl AssessmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::Diagnostic => "diagnostic",
            AssessmentKind::Prognostic => "prognostic",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown assessment type '{0}' (expected diagnostic or prognostic)")]
pub struct ParseKindError(pub String);

impl FromStr for AssessmentKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diagnostic" => Ok(AssessmentKind::Diagnostic),
            "prognostic" => Ok(AssessmentKind::Prognostic),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

const DIAGNOSTIC_LOW: &[&str] = &[
    "Consider alternative diagnoses",
    "Routine follow-up if symptoms persist",
    "Lifestyle counseling for cardiovascular health",
    "Annual assessment if risk factors present",
];

const DIAGNOSTIC_MODERATE: &[&str] = &[
    "Cardiology consultation recommended",
    "Advanced cardiac imaging (cardiac MRI with ECV)",
    "Comprehensive echocardiography with strain",
    "Exercise testing for functional assessment",
    "Consider cardiac catheterization if high suspicion",
];

const DIAGNOSTIC_HIGH: &[&str] = &[
    "Urgent cardiology referral",
    "Comprehensive HFpEF evaluation protocol",
    "Cardiac MRI with tissue characterization",
    "Invasive hemodynamic assessment if indicated",
    "Initiate evidence-based HFpEF therapies",
    "Enroll in heart failure management program",
];

const PROGNOSTIC_LOW: &[&str] = &[
    "Standard heart failure management",
    "Annual follow-up with echo",
    "Lifestyle optimization focus",
    "Monitor for symptom progression",
];

const PROGNOSTIC_MODERATE: &[&str] = &[
    "Enhanced surveillance (6-month follow-up)",
    "Optimize guideline-directed medical therapy",
    "Consider advanced therapies if symptoms progress",
    "Cardiac rehabilitation referral",
    "Monitor biomarkers and imaging parameters",
];

const PROGNOSTIC_HIGH: &[&str] = &[
    "Intensive heart failure management",
    "Frequent monitoring (3-month intervals)",
    "Consider advanced heart failure therapies",
    "Palliative care consultation if appropriate",
    "Clinical trial enrollment consideration",
    "Multidisciplinary team approach",
];

/// Fixed guidance for a band of the given assessment.
pub fn recommendations_for(category: RiskCategory, kind: AssessmentKind) -> &'static [&'static str] {
    match (kind, category) {
        (AssessmentKind::Diagnostic, RiskCategory::Low) => DIAGNOSTIC_LOW,
        (AssessmentKind::Diagnostic, RiskCategory::Moderate) => DIAGNOSTIC_MODERATE,
        (AssessmentKind::Diagnostic, RiskCategory::High) => DIAGNOSTIC_HIGH,
        (AssessmentKind::Prognostic, RiskCategory::Low) => PROGNOSTIC_LOW,
        (AssessmentKind::Prognostic, RiskCategory::Moderate) => PROGNOSTIC_MODERATE,
        (AssessmentKind::Prognostic, RiskCategory::High) => PROGNOSTIC_HIGH,
    }
}

pub fn recommendations_for_score(score: f64, kind: AssessmentKind) -> &'static [&'static str] {
    recommendations_for(categorize(score), kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [RiskCategory; 3] =
        [RiskCategory::Low, RiskCategory::Moderate, RiskCategory::High];
    const KINDS: [AssessmentKind; 2] = [AssessmentKind::Diagnostic, AssessmentKind::Prognostic];

    #[test]
    fn every_list_has_four_to_six_entries() {
        for kind in KINDS {
            for cat in CATEGORIES {
                let recs = recommendations_for(cat, kind);
                assert!(
                    (4..=6).contains(&recs.len()),
                    "{kind}/{cat} has {} entries",
                    recs.len()
                );
            }
        }
    }

    #[test]
    fn lists_open_with_their_headline_action() {
        assert_eq!(
            recommendations_for(RiskCategory::High, AssessmentKind::Diagnostic)[0],
            "Urgent cardiology referral"
        );
        assert_eq!(
            recommendations_for(RiskCategory::Moderate, AssessmentKind::Prognostic)[0],
            "Enhanced surveillance (6-month follow-up)"
        );
        assert_eq!(
            recommendations_for(RiskCategory::Low, AssessmentKind::Prognostic).last(),
            Some(&"Monitor for symptom progression")
        );
    }

    #[test]
    fn score_lookup_uses_the_band() {
        assert_eq!(
            recommendations_for_score(68.83, AssessmentKind::Diagnostic),
            recommendations_for(RiskCategory::Moderate, AssessmentKind::Diagnostic)
        );
        assert_eq!(
            recommendations_for_score(70.0, AssessmentKind::Prognostic),
            recommendations_for(RiskCategory::High, AssessmentKind::Prognostic)
        );
    }

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("Diagnostic".parse::<AssessmentKind>(), Ok(AssessmentKind::Diagnostic));
        assert_eq!("prognostic".parse::<AssessmentKind>(), Ok(AssessmentKind::Prognostic));
        assert_eq!(
            "treatment".parse::<AssessmentKind>(),
            Err(ParseKindError("treatment".into()))
        );
    }
}
