use std::io;
use std::path::PathBuf;

use hfpef_type::InputError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON input must be an object of field values")]
    NotAnObject,

    #[error("field '{0}' has a value that is not a number, string, flag, or null")]
    UnsupportedValue(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
