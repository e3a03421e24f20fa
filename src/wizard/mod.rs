//! @acp:module "Wizard"
//! @acp:summary "Runs the project questionnaire and finalizes the answers"
//! @acp:domain cli
//! @acp:layer service

pub mod choices;
pub mod engine;
pub mod steps;

use std::sync::LazyLock;

use regex::Regex;

pub use engine::{AnswerSink, AskContext, Section, Sequencer, Step, WizardObserver};
pub use steps::question_steps;

use crate::answers::{Answers, PartialAnswers};
use crate::error::Result;
use crate::prompt::Prompter;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid project name pattern"));

/// Letters, digits, hyphens and underscores only
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Inline validation for the project name prompt
pub fn validate_project_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("Project name is required".to_string());
    }
    if !is_valid_name(name) {
        return Err(
            "Project name can only contain letters, numbers, hyphens, and underscores".to_string(),
        );
    }
    Ok(())
}

/// Ask every question and return the finalized answers
///
/// `previous` holds answers from an earlier run in the same directory; they
/// become the defaults of each prompt.
pub fn ask_all_questions(
    prompter: &mut dyn Prompter,
    observer: &mut dyn WizardObserver,
    previous: Option<PartialAnswers>,
) -> Result<Answers> {
    let partial = Sequencer::new(question_steps())
        .with_previous(previous)
        .run(prompter, observer)?;
    partial.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_validation() {
        assert!(validate_project_name("my-app_2").is_ok());
        assert_eq!(
            validate_project_name("   "),
            Err("Project name is required".to_string())
        );
        assert!(validate_project_name("my app").is_err());
        assert!(validate_project_name("app/..").is_err());
    }
}
