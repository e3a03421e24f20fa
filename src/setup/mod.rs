//! @acp:module "Setup"
//! @acp:summary "Target directory selection and handling of files from an earlier setup"
//! @acp:domain cli
//! @acp:layer service

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};
use crate::prompt::{self, Choice, Navigation, Prompter};
use crate::wizard::is_valid_name;

/// Files and directories a setup writes at the target root
pub const CLAUDE_FILES: [&str; 4] = [".claude", ".claude.json", "CLAUDE.md", "CLAUDE_SETUP.md"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryMode {
    /// Use the working directory
    Existing,
    /// Create a fresh directory below the working directory
    New,
}

/// What to do with files from an earlier setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExistingFilesAction {
    /// Merge generated content into existing files
    Upsert,
    /// Remove existing files first
    Clean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupAnswers {
    pub mode: DirectoryMode,
    pub target_dir: PathBuf,
    /// Set only when earlier setup files were found
    pub existing_files_action: Option<ExistingFilesAction>,
}

impl SetupAnswers {
    /// Create the target directory, or clear old files when asked to
    pub fn prepare(&self) -> Result<Vec<&'static str>> {
        match (self.mode, self.existing_files_action) {
            (DirectoryMode::New, _) => {
                fs::create_dir_all(&self.target_dir)?;
                Ok(Vec::new())
            }
            (DirectoryMode::Existing, Some(ExistingFilesAction::Clean)) => {
                clean_existing_claude_files(&self.target_dir)
            }
            (DirectoryMode::Existing, _) => Ok(Vec::new()),
        }
    }

    pub fn is_upsert(&self) -> bool {
        self.existing_files_action == Some(ExistingFilesAction::Upsert)
    }
}

/// Setup entries present in `dir`, in [`CLAUDE_FILES`] order
pub fn existing_claude_files(dir: &Path) -> Vec<&'static str> {
    CLAUDE_FILES
        .iter()
        .copied()
        .filter(|name| dir.join(name).exists())
        .collect()
}

/// Remove every setup entry in `dir`, returning what was removed
pub fn clean_existing_claude_files(dir: &Path) -> Result<Vec<&'static str>> {
    let existing = existing_claude_files(dir);
    for name in &existing {
        let path = dir.join(name);
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        tracing::debug!(path = %path.display(), "removed");
    }
    Ok(existing)
}

/// Inline validation for a new directory name below `base`
pub fn validate_new_directory(base: &Path, name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("Directory name is required".to_string());
    }
    if !is_valid_name(name) {
        return Err(
            "Directory name can only contain letters, numbers, hyphens, and underscores"
                .to_string(),
        );
    }
    if base.join(name).exists() {
        return Err(format!("Directory \"{name}\" already exists"));
    }
    Ok(())
}

/// Ask where to set up and how to treat an earlier setup
pub fn ask_setup_questions(prompter: &mut dyn Prompter, base: &Path) -> Result<SetupAnswers> {
    let modes = [
        Choice::new("Use current directory", DirectoryMode::Existing),
        Choice::new("Create a new project directory", DirectoryMode::New),
    ];
    let mode = answered(prompt::select(
        prompter,
        "Where would you like to set up Claude Code?",
        &modes,
        0,
        true,
    )?)?;

    if mode == DirectoryMode::New {
        let validate = |name: &str| validate_new_directory(base, name);
        let name = prompter.input("Enter the name for the new directory:", None, &validate)?;
        return Ok(SetupAnswers {
            mode,
            target_dir: base.join(name),
            existing_files_action: None,
        });
    }

    let existing = existing_claude_files(base);
    let existing_files_action = if existing.is_empty() {
        None
    } else {
        let actions = [
            Choice::new("Merge with existing files (upsert)", ExistingFilesAction::Upsert),
            Choice::new("Remove existing and create fresh", ExistingFilesAction::Clean),
        ];
        let message = format!(
            "Found existing Claude files: {}\nHow would you like to proceed?",
            existing.join(", ")
        );
        Some(answered(prompt::select(prompter, &message, &actions, 0, true)?)?)
    };

    Ok(SetupAnswers {
        mode,
        target_dir: base.to_path_buf(),
        existing_files_action,
    })
}

// Setup prompts are asked as first questions, so they never offer go-back
fn answered<T>(nav: Navigation<T>) -> Result<T> {
    match nav {
        Navigation::Answered(value) => Ok(value),
        Navigation::Back => Err(WizardError::Other("setup questions cannot go back".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Reply, ScriptedPrompter};
    use tempfile::TempDir;

    #[test]
    fn test_back_on_setup_question_is_an_error() {
        let result = answered(Navigation::<DirectoryMode>::Back);
        assert!(matches!(result, Err(WizardError::Other(_))));

        let dir = TempDir::new().unwrap();
        let mut p = ScriptedPrompter::new([Reply::Back]);
        assert!(ask_setup_questions(&mut p, dir.path()).is_err());
    }

    #[test]
    fn test_existing_files_detected_in_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "# old").unwrap();
        fs::create_dir(dir.path().join(".claude")).unwrap();

        assert_eq!(existing_claude_files(dir.path()), vec![".claude", "CLAUDE.md"]);
    }

    #[test]
    fn test_clean_removes_files_and_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".claude/agents")).unwrap();
        fs::write(dir.path().join(".claude.json"), "{}").unwrap();
        fs::write(dir.path().join("README.md"), "keep").unwrap();

        let removed = clean_existing_claude_files(dir.path()).unwrap();
        assert_eq!(removed, vec![".claude", ".claude.json"]);
        assert!(existing_claude_files(dir.path()).is_empty());
        assert!(dir.path().join("README.md").exists());
    }

    #[test]
    fn test_new_directory_validation() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("taken")).unwrap();

        assert!(validate_new_directory(dir.path(), "fresh").is_ok());
        assert_eq!(
            validate_new_directory(dir.path(), "taken"),
            Err("Directory \"taken\" already exists".to_string())
        );
        assert!(validate_new_directory(dir.path(), "bad name").is_err());
    }

    #[test]
    fn test_setup_asks_action_when_files_exist() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "# old").unwrap();

        let mut p = ScriptedPrompter::new([Reply::pick("Use current"), Reply::pick("Remove")]);
        let setup = ask_setup_questions(&mut p, dir.path()).unwrap();
        assert_eq!(setup.existing_files_action, Some(ExistingFilesAction::Clean));
        assert!(p.shown[1].message.contains("CLAUDE.md"));

        setup.prepare().unwrap();
        assert!(!dir.path().join("CLAUDE.md").exists());
    }

    #[test]
    fn test_setup_new_directory_retries_invalid_name() {
        let dir = TempDir::new().unwrap();
        let mut p = ScriptedPrompter::new([
            Reply::pick("Create"),
            Reply::text("no spaces allowed"),
            Reply::text("app"),
        ]);
        let setup = ask_setup_questions(&mut p, dir.path()).unwrap();
        assert_eq!(setup.target_dir, dir.path().join("app"));
        assert_eq!(p.validation_errors.len(), 1);

        setup.prepare().unwrap();
        assert!(dir.path().join("app").is_dir());
    }
}
