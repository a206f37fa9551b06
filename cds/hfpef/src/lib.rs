//! Command-line front end for the HFpEF calculators.
//!
//! Plays the part of the web form: gathers field values (a JSON record and/or
//! `field=value` pairs), hands them through the input boundary to the
//! scorers, and renders the result.

pub mod config;
pub mod error;
pub mod render;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use hfpef_score::{
    advise_treatment, assess_diagnostic, assess_prognostic, RiskAssessment,
    TreatmentRecommendation,
};
use hfpef_type::{DiagnosticInput, FormRecord, ParseMode, PrognosticInput, RawForm, TreatmentInput};
use log::info;
use serde::Serialize;
use serde_json::Value as JsonValue;

pub use config::{Config, OutputMode, ParseOutputModeError};
pub use error::CliError;

/// The three calculator forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormKind {
    Diagnostic,
    Prognostic,
    Treatment,
}

impl FormKind {
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FormKind::Diagnostic => DiagnosticInput::FIELDS,
            FormKind::Prognostic => PrognosticInput::FIELDS,
            FormKind::Treatment => TreatmentInput::FIELDS,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Risk(RiskAssessment),
    Treatment {
        recommendations: Vec<TreatmentRecommendation>,
    },
}

/// One fully resolved run of a calculator.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub form: FormKind,
    /// JSON record to start from; `-` reads stdin.
    pub input: Option<PathBuf>,
    /// `field=value` pairs applied after the JSON record.
    pub set: Vec<String>,
    pub format: OutputMode,
    pub mode: ParseMode,
}

pub fn execute(invocation: &Invocation) -> Result<String, CliError> {
    let json = match &invocation.input {
        Some(path) => Some(read_input(path)?),
        None => None,
    };
    let report = evaluate(
        invocation.form,
        json.as_deref(),
        &invocation.set,
        invocation.mode,
    )?;
    render::render(&report, invocation.format)
}

/// Builds the form's input record and runs its calculator.
pub fn evaluate(
    form: FormKind,
    json: Option<&str>,
    pairs: &[String],
    mode: ParseMode,
) -> Result<Report, CliError> {
    let mut raw = match json {
        Some(text) if !text.trim().is_empty() => form_from_json(&serde_json::from_str(text)?)?,
        _ => RawForm::new(),
    };
    for (field, value) in RawForm::from_pairs(pairs)?.iter() {
        raw.set(field, value);
    }
    info!("evaluating {form:?} form with {} field(s)", raw.len());

    Ok(match form {
        FormKind::Diagnostic => {
            Report::Risk(assess_diagnostic(&DiagnosticInput::from_form(&raw, mode)?))
        }
        FormKind::Prognostic => {
            Report::Risk(assess_prognostic(&PrognosticInput::from_form(&raw, mode)?))
        }
        FormKind::Treatment => Report::Treatment {
            recommendations: advise_treatment(&TreatmentInput::from_form(&raw, mode)?),
        },
    })
}

/// Flattens a JSON record into raw form text so it goes through the same
/// boundary as `field=value` pairs. Nested objects become dotted names.
pub fn form_from_json(value: &JsonValue) -> Result<RawForm, CliError> {
    let object = value.as_object().ok_or(CliError::NotAnObject)?;
    let mut form = RawForm::new();
    flatten_into(&mut form, "", object)?;
    Ok(form)
}

fn flatten_into(
    form: &mut RawForm,
    prefix: &str,
    object: &serde_json::Map<String, JsonValue>,
) -> Result<(), CliError> {
    for (key, value) in object {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            JsonValue::Null => form.set(name, ""),
            JsonValue::Bool(b) => form.set(name, b.to_string()),
            JsonValue::Number(n) => form.set(name, n.to_string()),
            JsonValue::String(s) => form.set(name, s.as_str()),
            JsonValue::Object(inner) => flatten_into(form, &name, inner)?,
            JsonValue::Array(_) => return Err(CliError::UnsupportedValue(name)),
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(CliError::Stdin)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
