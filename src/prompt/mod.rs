//! @acp:module "Prompt"
//! @acp:summary "Single-question asks with an injected go-back option"
//! @acp:domain cli
//! @acp:layer service
//!
//! A [`Prompter`] is the raw backend: it shows one prompt and returns the
//! picked index or typed text. The free functions in this module wrap it
//! with the go-back convention and hand the sequencer a [`Navigation`].
//!
//! On the very first question no back option is offered and the raw answer
//! is returned as-is, so typing `back` there is an ordinary value.

pub mod scripted;
pub mod terminal;

pub use scripted::{Reply, ScriptedPrompter, Shown};
pub use terminal::TerminalPrompter;

use crate::error::{Result, WizardError};

/// Label of the item that navigates to the previous question
pub const GO_BACK_LABEL: &str = "← Go back";

/// Inert line separating the real choices from the go-back item
pub const SEPARATOR_LABEL: &str = "──────────────";

/// Appended to text prompts that accept `back`
pub const BACK_HINT: &str = "(type \"back\" to go back)";

/// Validator for text prompts; `Err` carries the message shown inline
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive prompt backend
///
/// Implementations show exactly one prompt per call. Validation failures
/// are handled inside `input` by re-prompting until the validator passes.
pub trait Prompter {
    /// Single choice; returns the picked index into `items`
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize>;

    /// Multiple choice; returns the picked indices into `items`
    fn multi_select(&mut self, message: &str, items: &[String], checked: &[bool])
        -> Result<Vec<usize>>;

    /// Free text
    fn input(&mut self, message: &str, default: Option<&str>, validate: Validator<'_>)
        -> Result<String>;
}

/// Outcome of asking one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<T> {
    Answered(T),
    Back,
}

impl<T> Navigation<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Navigation<U> {
        match self {
            Navigation::Answered(value) => Navigation::Answered(f(value)),
            Navigation::Back => Navigation::Back,
        }
    }

    pub fn is_back(&self) -> bool {
        matches!(self, Navigation::Back)
    }
}

/// A labelled choice
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ask a single-choice question
pub fn select<T: Clone>(
    prompter: &mut dyn Prompter,
    message: &str,
    choices: &[Choice<T>],
    default: usize,
    is_first: bool,
) -> Result<Navigation<T>> {
    let mut items: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let separator = items.len();
    let back = separator + 1;
    if !is_first {
        items.push(SEPARATOR_LABEL.to_string());
        items.push(GO_BACK_LABEL.to_string());
    }
    let default = default.min(choices.len().saturating_sub(1));

    loop {
        let picked = prompter.select(message, &items, default)?;
        if !is_first && picked == separator {
            continue;
        }
        if !is_first && picked == back {
            return Ok(Navigation::Back);
        }
        return choices
            .get(picked)
            .map(|c| Navigation::Answered(c.value.clone()))
            .ok_or_else(|| WizardError::Other(format!("choice index {picked} out of range")));
    }
}

/// Ask a multiple-choice question; `checked` pre-selects matching values
pub fn multi_select<T: Clone>(
    prompter: &mut dyn Prompter,
    message: &str,
    choices: &[Choice<T>],
    checked: impl Fn(&T) -> bool,
    is_first: bool,
) -> Result<Navigation<Vec<T>>> {
    let mut items: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let mut flags: Vec<bool> = choices.iter().map(|c| checked(&c.value)).collect();
    let back = items.len();
    if !is_first {
        items.push(GO_BACK_LABEL.to_string());
        flags.push(false);
    }

    let picked = prompter.multi_select(message, &items, &flags)?;
    if !is_first && picked.contains(&back) {
        return Ok(Navigation::Back);
    }

    picked
        .into_iter()
        .map(|i| {
            choices
                .get(i)
                .map(|c| c.value.clone())
                .ok_or_else(|| WizardError::Other(format!("choice index {i} out of range")))
        })
        .collect::<Result<Vec<_>>>()
        .map(Navigation::Answered)
}

/// Ask for free text
pub fn text(
    prompter: &mut dyn Prompter,
    message: &str,
    default: Option<&str>,
    validate: Validator<'_>,
    is_first: bool,
) -> Result<Navigation<String>> {
    if is_first {
        return prompter
            .input(message, default, validate)
            .map(Navigation::Answered);
    }

    let message = format!("{message} {BACK_HINT}");
    let wrapped = |value: &str| {
        if is_back_text(value) {
            Ok(())
        } else {
            validate(value)
        }
    };
    let value = prompter.input(&message, default, &wrapped)?;
    if is_back_text(&value) {
        Ok(Navigation::Back)
    } else {
        Ok(Navigation::Answered(value))
    }
}

/// Ask a yes/no question, rendered as a two-item choice
pub fn confirm(
    prompter: &mut dyn Prompter,
    message: &str,
    default: bool,
    is_first: bool,
) -> Result<Navigation<bool>> {
    let choices = [Choice::new("Yes", true), Choice::new("No", false)];
    select(prompter, message, &choices, usize::from(!default), is_first)
}

fn is_back_text(value: &str) -> bool {
    value.eq_ignore_ascii_case("back")
}
