use hfpef_type::{DiagnosticInput, PrognosticInput};
use serde::Serialize;

use crate::category::RiskCategory;
use crate::diagnostic::diagnostic_breakdown;
use crate::explain::ScoreBreakdown;
use crate::prognostic::prognostic_breakdown;
use crate::recommendations::{recommendations_for, AssessmentKind};

/// Everything a results panel shows for one score: the number, its band,
/// the band's guidance, and the terms that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub kind: AssessmentKind,
    pub score: f64,
    pub category: RiskCategory,
    pub recommendations: &'static [&'static str],
    pub breakdown: ScoreBreakdown,
}

impl RiskAssessment {
    pub fn from_breakdown(kind: AssessmentKind, breakdown: ScoreBreakdown) -> Self {
        let score = breakdown.score;
        let category = RiskCategory::from_score(score);
        Self {
            kind,
            score,
            category,
            recommendations: recommendations_for(category, kind),
            breakdown,
        }
    }

    /// Score as shown on the form, rounded to a whole number out of 100.
    /// Halves round up, so 2.5 shows as 3.
    pub fn display_score(&self) -> String {
        format!("{}/100", self.score.round())
    }
}

pub fn assess_diagnostic(input: &DiagnosticInput) -> RiskAssessment {
    RiskAssessment::from_breakdown(AssessmentKind::Diagnostic, diagnostic_breakdown(input))
}

pub fn assess_prognostic(input: &PrognosticInput) -> RiskAssessment {
    RiskAssessment::from_breakdown(AssessmentKind::Prognostic, prognostic_breakdown(input))
}
