use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score band shared by the diagnostic and prognostic scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

/// Breakpoints: below 30 is Low, below 70 is Moderate.
pub const LOW_BELOW: f64 = 30.0;
pub const MODERATE_BELOW: f64 = 70.0;

/// Maps a score to its band. Both breakpoints belong to the higher band.
pub fn categorize(score: f64) -> RiskCategory {
    RiskCategory::from_score(score)
}

/// CSS utility classes the web form used for each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub text: &'static str,
    pub background: &'static str,
    pub bar: &'static str,
}

impl RiskCategory {
    pub fn from_score(score: f64) -> Self {
        if score < LOW_BELOW {
            RiskCategory::Low
        } else if score < MODERATE_BELOW {
            RiskCategory::Moderate
        } else {
            RiskCategory::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::High => "High",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            RiskCategory::Low => Palette {
                text: "text-green-600",
                background: "bg-green-50",
                bar: "bg-green-500",
            },
            RiskCategory::Moderate => Palette {
                text: "text-yellow-600",
                background: "bg-yellow-50",
                bar: "bg-yellow-500",
            },
            RiskCategory::High => Palette {
                text: "text-red-600",
                background: "bg-red-50",
                bar: "bg-red-500",
            },
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk category '{0}' (expected low, moderate, or high)")]
pub struct ParseCategoryError(pub String);

impl FromStr for RiskCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskCategory::Low),
            "moderate" => Ok(RiskCategory::Moderate),
            "high" => Ok(RiskCategory::High),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_belong_to_the_higher_band() {
        assert_eq!(categorize(0.0), RiskCategory::Low);
        assert_eq!(categorize(29.9), RiskCategory::Low);
        assert_eq!(categorize(30.0), RiskCategory::Moderate);
        assert_eq!(categorize(69.9), RiskCategory::Moderate);
        assert_eq!(categorize(70.0), RiskCategory::High);
        assert_eq!(categorize(100.0), RiskCategory::High);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for cat in [RiskCategory::Low, RiskCategory::Moderate, RiskCategory::High] {
            assert_eq!(cat.to_string().parse::<RiskCategory>(), Ok(cat));
        }
        assert_eq!(" HIGH ".parse::<RiskCategory>(), Ok(RiskCategory::High));
        assert!("severe".parse::<RiskCategory>().is_err());
    }

    #[test]
    fn palette_follows_traffic_light_colors() {
        assert_eq!(RiskCategory::Low.palette().text, "text-green-600");
        assert_eq!(RiskCategory::Moderate.palette().background, "bg-yellow-50");
        assert_eq!(RiskCategory::High.palette().bar, "bg-red-500");
    }
}
