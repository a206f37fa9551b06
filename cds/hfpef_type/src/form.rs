// Form boundary: raw field text in, typed input records out.

use std::collections::BTreeMap;

use log::warn;

use crate::error::InputError;
use crate::inputs::{DiagnosticInput, PrognosticInput, TreatmentInput};
use crate::measurement::{parse_flag, parse_lenient, parse_strict};

/// How forgiving the boundary is about bad field text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Unparseable numbers count as blank and unknown fields are skipped,
    /// matching what a live form does while the user is still typing.
    #[default]
    Lenient,
    /// Any unparseable value or unknown field is an error.
    Strict,
}

/// Raw field values as collected by a presentation layer, keyed by field name.
/// Setting a field twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    fields: BTreeMap<String, String>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a form from `key=value` strings. Only the first `=` splits, and
    /// the key is trimmed; the value is kept as typed.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut form = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| InputError::MalformedPair(pair.to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(InputError::MalformedPair(pair.to_string()));
            }
            form.set(key, value);
        }
        Ok(form)
    }
}

/// An input record that can be filled from raw form text.
pub trait FormRecord: Default {
    /// Form name used in messages (`"diagnostic"`, ...).
    const FORM: &'static str;
    /// Field names accepted by [`FormRecord::assign`].
    const FIELDS: &'static [&'static str];

    /// Parses `raw` into the named field.
    fn assign(&mut self, field: &str, raw: &str, mode: ParseMode) -> Result<(), InputError>;

    /// Applies every field of `form` on top of the current values.
    fn apply_form(&mut self, form: &RawForm, mode: ParseMode) -> Result<(), InputError> {
        for (field, raw) in form.iter() {
            match self.assign(field, raw, mode) {
                Ok(()) => {}
                Err(err) if mode == ParseMode::Lenient => {
                    warn!("{}: {err}; ignoring", Self::FORM);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn from_form(form: &RawForm, mode: ParseMode) -> Result<Self, InputError> {
        let mut record = Self::default();
        record.apply_form(form, mode)?;
        Ok(record)
    }
}

fn number(field: &str, raw: &str, mode: ParseMode) -> Result<Option<f64>, InputError> {
    match mode {
        ParseMode::Strict => parse_strict(field, raw),
        ParseMode::Lenient => {
            let value = parse_lenient(raw);
            if value.is_none() && !raw.trim().is_empty() {
                warn!("field '{field}': '{raw}' is not a number; treating as blank");
            }
            Ok(value)
        }
    }
}

fn unknown<R: FormRecord>(field: &str) -> InputError {
    InputError::UnknownField {
        form: R::FORM,
        field: field.to_string(),
    }
}

impl FormRecord for DiagnosticInput {
    const FORM: &'static str = "diagnostic";
    const FIELDS: &'static [&'static str] = &[
        "age",
        "bmi",
        "hf2pef_score",
        "e_e_medial",
        "e_e_lateral",
        "pasp",
        "lv_mass",
        "lv_ef",
        "mean_ecv",
        "lv_longitudinal_strain",
        "diabetes",
        "hypertension",
    ];

    fn assign(&mut self, field: &str, raw: &str, mode: ParseMode) -> Result<(), InputError> {
        match field {
            "age" => self.age = number(field, raw, mode)?,
            "bmi" => self.bmi = number(field, raw, mode)?,
            "hf2pef_score" => self.hf2pef_score = number(field, raw, mode)?,
            "e_e_medial" => self.e_e_medial = number(field, raw, mode)?,
            "e_e_lateral" => self.e_e_lateral = number(field, raw, mode)?,
            "pasp" => self.pasp = number(field, raw, mode)?,
            "lv_mass" => self.lv_mass = number(field, raw, mode)?,
            "lv_ef" => self.lv_ef = number(field, raw, mode)?,
            "mean_ecv" => self.mean_ecv = number(field, raw, mode)?,
            "lv_longitudinal_strain" => self.lv_longitudinal_strain = number(field, raw, mode)?,
            "diabetes" => self.diabetes = parse_flag(field, raw)?,
            "hypertension" => self.hypertension = parse_flag(field, raw)?,
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl FormRecord for PrognosticInput {
    const FORM: &'static str = "prognostic";
    const FIELDS: &'static [&'static str] = &[
        "age",
        "bmi",
        "mean_ecv",
        "lv_strain",
        "e_e_ratio",
        "quality_of_life",
        "pasp",
        "diabetes",
    ];

    fn assign(&mut self, field: &str, raw: &str, mode: ParseMode) -> Result<(), InputError> {
        match field {
            "age" => self.age = number(field, raw, mode)?,
            "bmi" => self.bmi = number(field, raw, mode)?,
            "mean_ecv" => self.mean_ecv = number(field, raw, mode)?,
            "lv_strain" => self.lv_strain = number(field, raw, mode)?,
            "e_e_ratio" => self.e_e_ratio = number(field, raw, mode)?,
            "quality_of_life" => self.quality_of_life = number(field, raw, mode)?,
            "pasp" => self.pasp = number(field, raw, mode)?,
            "diabetes" => self.diabetes = parse_flag(field, raw)?,
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl FormRecord for TreatmentInput {
    const FORM: &'static str = "treatment";
    const FIELDS: &'static [&'static str] = &[
        "baseline_ecv",
        "baseline_pasp",
        "baseline_e_e",
        "symptom_score",
        "exercise_capacity",
        "ace_arb",
        "beta_blocker",
        "diuretic",
        "mra",
    ];

    fn assign(&mut self, field: &str, raw: &str, mode: ParseMode) -> Result<(), InputError> {
        match field {
            "baseline_ecv" => self.baseline_ecv = number(field, raw, mode)?,
            "baseline_pasp" => self.baseline_pasp = number(field, raw, mode)?,
            "baseline_e_e" => self.baseline_e_e = number(field, raw, mode)?,
            "symptom_score" => self.symptom_score = number(field, raw, mode)?,
            "exercise_capacity" => self.exercise_capacity = number(field, raw, mode)?,
            _ => {
                // Medication flags may also arrive nested under `current_medications`.
                let meds = &mut self.current_medications;
                let flag = match field.strip_prefix("current_medications.").unwrap_or(field) {
                    "ace_arb" => &mut meds.ace_arb,
                    "beta_blocker" => &mut meds.beta_blocker,
                    "diuretic" => &mut meds.diuretic,
                    "mra" => &mut meds.mra,
                    _ => return Err(unknown::<Self>(field)),
                };
                *flag = parse_flag(field, raw)?;
            }
        }
        Ok(())
    }
}
