//! Heuristic HFpEF risk scoring.
//!
//! Three independent, side-effect-free computations over the input records
//! from `hfpef_type`:
//!
//! * [`score_diagnostic`]: likelihood-of-HFpEF score in `[0, 100]`
//! * [`score_prognostic`]: adverse-outcome score in `[0, 100]`
//! * [`advise_treatment`]: ordered list of therapy recommendations
//!
//! plus the shared [`categorize`] banding and the static
//! [`recommendations_for`] guidance tables. Absent measurements contribute
//! nothing; none of these functions can fail.

mod bands;

pub mod assessment;
pub mod category;
pub mod diagnostic;
pub mod explain;
pub mod prognostic;
pub mod recommendations;
pub mod treatment;

pub use assessment::{assess_diagnostic, assess_prognostic, RiskAssessment};
pub use category::{categorize, ParseCategoryError, Palette, RiskCategory};
pub use diagnostic::{diagnostic_breakdown, score_diagnostic};
pub use explain::{Contribution, Factor, ScoreBreakdown, MAX_SCORE};
pub use prognostic::{prognostic_breakdown, score_prognostic};
pub use recommendations::{
    recommendations_for, recommendations_for_score, AssessmentKind, ParseKindError,
};
pub use treatment::{advise_treatment, TreatmentRecommendation, TreatmentRule};
