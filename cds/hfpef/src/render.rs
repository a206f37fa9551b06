// Text and JSON renderings of a report.

use std::fmt::Write;

use hfpef_score::{AssessmentKind, RiskAssessment, TreatmentRecommendation};

use crate::config::OutputMode;
use crate::error::CliError;
use crate::Report;

pub fn render(report: &Report, mode: OutputMode) -> Result<String, CliError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputMode::Text => Ok(match report {
            Report::Risk(assessment) => risk_text(assessment),
            Report::Treatment { recommendations } => treatment_text(recommendations),
        }),
    }
}

fn risk_text(a: &RiskAssessment) -> String {
    let title = match a.kind {
        AssessmentKind::Diagnostic => "Diagnostic Risk Assessment",
        AssessmentKind::Prognostic => "Prognostic Risk Assessment",
    };
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "Risk Score: {}", a.display_score());
    let _ = writeln!(out, "{} Risk", a.category);

    if !a.breakdown.contributions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Score contributions:");
        for c in &a.breakdown.contributions {
            let _ = writeln!(out, "  {:<16} {:+7.2}", c.factor.label(), c.points);
        }
        if a.breakdown.is_clamped() {
            let _ = writeln!(
                out,
                "  (raw total {:.2} limited to {:.0})",
                a.breakdown.raw_total, a.score
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Clinical Recommendations:");
    for rec in a.recommendations {
        let _ = writeln!(out, "  - {rec}");
    }
    out
}

fn treatment_text(recommendations: &[TreatmentRecommendation]) -> String {
    let mut out = String::from("Treatment Recommendations\n");
    if recommendations.is_empty() {
        out.push_str("  No changes suggested for the current regimen.\n");
        return out;
    }
    for (i, rec) in recommendations.iter().enumerate() {
        let _ = writeln!(out, "{}. {}: {}", i + 1, rec.category, rec.recommendation);
        let _ = writeln!(out, "   Evidence: {}", rec.evidence);
        let _ = writeln!(out, "   Monitoring: {}", rec.monitoring);
    }
    out
}
