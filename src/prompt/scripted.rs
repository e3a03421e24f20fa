//! @acp:module "Scripted Prompter"
//! @acp:summary "Replays canned replies in place of a terminal"
//! @acp:domain cli
//! @acp:layer service
//!
//! Used by tests and by non-interactive runs. Every prompt shown is
//! recorded so callers can assert on what was asked and in which order.

use std::collections::VecDeque;

use super::{Prompter, Validator, GO_BACK_LABEL};
use crate::error::{Result, WizardError};

/// One scripted reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Pick the item with this label (exact, then case-insensitive prefix)
    Pick(String),
    /// Pick the go-back item, or type `back` into a text prompt
    Back,
    /// Accept the prompt's default
    Default,
    /// Type this text
    Text(String),
    /// Check exactly these labels in a multi-select
    Check(Vec<String>),
}

impl Reply {
    pub fn pick(label: impl Into<String>) -> Self {
        Reply::Pick(label.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Reply::Text(value.into())
    }

    pub fn check<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Reply::Check(labels.into_iter().map(Into::into).collect())
    }
}

/// A prompt as it was presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub message: String,
    pub items: Vec<String>,
}

/// Prompter driven by a queue of [`Reply`] values
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    /// Every prompt presented, in order
    pub shown: Vec<Shown>,
    /// Every inline validation message produced
    pub validation_errors: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    /// Messages of every prompt shown, in order
    pub fn messages(&self) -> Vec<&str> {
        self.shown.iter().map(|s| s.message.as_str()).collect()
    }

    fn next_reply(&mut self, message: &str) -> Result<Reply> {
        self.replies
            .pop_front()
            .ok_or_else(|| WizardError::Script(format!("no reply left for \"{message}\"")))
    }

    fn record(&mut self, message: &str, items: &[String]) {
        self.shown.push(Shown {
            message: message.to_string(),
            items: items.to_vec(),
        });
    }
}

fn find_label(items: &[String], label: &str) -> Result<usize> {
    if let Some(i) = items.iter().position(|item| item == label) {
        return Ok(i);
    }
    let wanted = label.to_lowercase();
    items
        .iter()
        .position(|item| item.to_lowercase().starts_with(&wanted))
        .ok_or_else(|| WizardError::Script(format!("no item matches \"{label}\" in {items:?}")))
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize> {
        self.record(message, items);
        match self.next_reply(message)? {
            Reply::Pick(label) => find_label(items, &label),
            Reply::Back => find_label(items, GO_BACK_LABEL),
            Reply::Default => Ok(default),
            other => Err(WizardError::Script(format!(
                "{other:?} cannot answer select \"{message}\""
            ))),
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Vec<usize>> {
        self.record(message, items);
        match self.next_reply(message)? {
            Reply::Check(labels) => labels.iter().map(|l| find_label(items, l)).collect(),
            Reply::Back => find_label(items, GO_BACK_LABEL).map(|i| vec![i]),
            Reply::Default => Ok(checked
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(|(i, _)| i)
                .collect()),
            other => Err(WizardError::Script(format!(
                "{other:?} cannot answer multi-select \"{message}\""
            ))),
        }
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String> {
        self.record(message, &[]);
        loop {
            let value = match self.next_reply(message)? {
                Reply::Text(value) => value,
                Reply::Back => "back".to_string(),
                Reply::Default => default.unwrap_or_default().to_string(),
                other => {
                    return Err(WizardError::Script(format!(
                        "{other:?} cannot answer input \"{message}\""
                    )))
                }
            };
            match validate(value.as_str()) {
                Ok(()) => return Ok(value),
                Err(msg) => self.validation_errors.push(msg),
            }
        }
    }
}
