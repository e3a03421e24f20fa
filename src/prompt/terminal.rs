//! @acp:module "Terminal Prompter"
//! @acp:summary "dialoguer-backed interactive prompts"
//! @acp:domain cli
//! @acp:layer handler

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use super::{Prompter, Validator};
use crate::error::Result;

/// Prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize> {
        let picked = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()?;
        Ok(picked)
    }

    fn multi_select(
        &mut self,
        message: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Vec<usize>> {
        let entries: Vec<(&str, bool)> = items
            .iter()
            .zip(checked.iter().copied())
            .map(|(item, on)| (item.as_str(), on))
            .collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items_checked(&entries)
            .interact()?;
        Ok(picked)
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        let value = input
            .validate_with(|value: &String| validate(value.as_str()))
            .interact_text()?;
        Ok(value)
    }
}
