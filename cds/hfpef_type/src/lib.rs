// Input records for the HFpEF decision-support tools.
// Raw form text is parsed here, once, so the scorers only ever see typed values.
pub mod error;
pub mod form;
pub mod inputs;
pub mod measurement;

pub use error::*;
pub use form::*;
pub use inputs::*;
pub use measurement::{parse_flag, parse_lenient, parse_strict, present};
