//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// Errors raised by the wizard library
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),

    /// A field on the active branch was never answered
    #[error("answer missing for '{0}'")]
    Incomplete(&'static str),

    #[error("unknown value '{value}' for '{field}'")]
    UnknownValue { field: &'static str, value: String },

    /// Scripted prompter ran out of replies or could not apply one
    #[error("script: {0}")]
    Script(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WizardError>;
