use std::fmt;

use log::debug;
use serde::Serialize;

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 100.0;

/// A scored clinical factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Age,
    Hf2pefScore,
    Bmi,
    Diabetes,
    Hypertension,
    MeanEe,
    EeRatio,
    Pasp,
    Ecv,
    LvStrain,
    QualityOfLife,
}

impl Factor {
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Age => "Age",
            Factor::Hf2pefScore => "HF2PEF score",
            Factor::Bmi => "BMI",
            Factor::Diabetes => "Diabetes",
            Factor::Hypertension => "Hypertension",
            Factor::MeanEe => "Mean E/e'",
            Factor::EeRatio => "E/e'",
            Factor::Pasp => "PASP",
            Factor::Ecv => "ECV",
            Factor::LvStrain => "LV strain",
            Factor::QualityOfLife => "Quality of life",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub factor: Factor,
    pub points: f64,
}

/// The terms behind a score, in the order they were evaluated.
///
/// Only factors whose inputs were present appear. A threshold factor that
/// was evaluated but awarded nothing is still listed with `0` points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<Contribution>,
    /// Plain sum of the contributions.
    pub raw_total: f64,
    /// `raw_total` clamped to `[0, MAX_SCORE]`.
    pub score: f64,
}

impl ScoreBreakdown {
    pub fn from_contributions(contributions: Vec<Contribution>) -> Self {
        let raw_total: f64 = contributions.iter().map(|c| c.points).sum();
        let score = clamp_score(raw_total);
        debug!(
            "scored {} factor(s): raw {raw_total:.2}, final {score:.2}",
            contributions.len()
        );
        Self {
            contributions,
            raw_total,
            score,
        }
    }

    /// Points awarded for `factor`, if it was evaluated.
    pub fn points_for(&self, factor: Factor) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.factor == factor)
            .map(|c| c.points)
    }

    /// True when the clamp changed the raw sum.
    pub fn is_clamped(&self) -> bool {
        self.score != self.raw_total
    }
}

/// Collects contributions while a scorer walks its inputs.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    contributions: Vec<Contribution>,
}

impl Tally {
    pub(crate) fn add(&mut self, factor: Factor, points: f64) {
        debug!("{factor}: {points:+.2}");
        self.contributions.push(Contribution { factor, points });
    }

    pub(crate) fn finish(self) -> ScoreBreakdown {
        ScoreBreakdown::from_contributions(self.contributions)
    }
}

// NaN can only come from opposing infinite terms (absurd magnitudes); it scores as 0.
fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, MAX_SCORE)
    }
}
