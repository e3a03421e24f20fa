//! @acp:module "Init Command"
//! @acp:summary "Interactive setup of Claude Code configuration for a project"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `claude-setup init`: setup questions, the questionnaire,
//! component selection and materialization.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;

use crate::answers::{Answers, PartialAnswers};
use crate::catalog::Catalog;
use crate::config::{load_preset, SetupRecord};
use crate::generator::{GenerationSummary, Generator};
use crate::prompt::TerminalPrompter;
use crate::selection::{map_answers_to_components, SelectedComponents};
use crate::setup::{
    ask_setup_questions, existing_claude_files, validate_new_directory, DirectoryMode,
    ExistingFilesAction, SetupAnswers,
};
use crate::ui::Reporter;
use crate::wizard::ask_all_questions;

use super::resolve_template_dir;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Working directory the setup starts from
    pub dir: PathBuf,
    /// Create this directory below `dir` instead of using `dir`
    pub new: Option<String>,
    /// Template directory (flag or environment)
    pub templates: Option<PathBuf>,
    /// Preset answers file (JSON or YAML)
    pub answers: Option<PathBuf>,
    /// Skip interactive prompts
    pub yes: bool,
    /// How to treat files from an earlier setup
    pub mode: Option<ExistingFilesAction>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let reporter = Reporter::new();
    let mut prompter = TerminalPrompter::new();

    reporter.newline();
    reporter.boxed(&["Claude Code Setup", "Configure Claude Code for your project"]);

    let setup = resolve_setup(&options, &reporter, &mut prompter)?;
    let target = setup.target_dir.clone();

    if setup.existing_files_action == Some(ExistingFilesAction::Clean) {
        reporter.info("Removing existing Claude files...");
    }
    let removed = setup
        .prepare()
        .with_context(|| format!("Failed to prepare {}", target.display()))?;
    if !removed.is_empty() {
        reporter.success("Existing files removed");
    }

    let defaults = initial_answers(&target, options.answers.as_deref())?;
    let answers = if options.yes {
        defaults
            .finalize()
            .context("--yes needs a complete answers file or an earlier setup record")?
    } else {
        let mut observer = reporter;
        ask_all_questions(&mut prompter, &mut observer, Some(defaults))?
    };

    let components = map_answers_to_components(&answers);
    print_components(&reporter, &components);

    let catalog = match resolve_template_dir(options.templates) {
        Some(dir) => Some(
            Catalog::scan(&dir)
                .with_context(|| format!("Failed to read templates from {}", dir.display()))?,
        ),
        None => None,
    };

    reporter.newline();
    reporter.title("Generating Configuration...");
    reporter.newline();

    let mut generator = Generator::new(&target, reporter).upsert(setup.is_upsert());
    if let Some(catalog) = catalog.as_ref() {
        generator = generator.with_catalog(catalog);
    }
    let summary = generator.run(&answers, &components)?;

    if !summary.missing.is_empty() {
        reporter.newline();
        reporter.warn(&format!(
            "{} selected templates were not available:",
            summary.missing.len()
        ));
        reporter.list(&summary.missing);
    }

    reporter.newline();
    reporter.boxed(&completion_lines(&setup, &answers, &summary));
    reporter.newline();

    Ok(())
}

fn resolve_setup(
    options: &InitOptions,
    reporter: &Reporter,
    prompter: &mut TerminalPrompter,
) -> Result<SetupAnswers> {
    if let Some(name) = &options.new {
        if let Err(message) = validate_new_directory(&options.dir, name) {
            bail!(message);
        }
        return Ok(SetupAnswers {
            mode: DirectoryMode::New,
            target_dir: options.dir.join(name),
            existing_files_action: None,
        });
    }

    if options.yes || options.mode.is_some() {
        let existing = existing_claude_files(&options.dir);
        let action = (!existing.is_empty())
            .then(|| options.mode.unwrap_or(ExistingFilesAction::Upsert));
        if let Some(action) = action {
            tracing::debug!(?existing, ?action, "existing setup files");
        }
        return Ok(SetupAnswers {
            mode: DirectoryMode::Existing,
            target_dir: options.dir.clone(),
            existing_files_action: action,
        });
    }

    reporter.newline();
    reporter.title("Setup");
    reporter.newline();
    Ok(ask_setup_questions(prompter, &options.dir)?)
}

/// Defaults from an earlier setup record, overlaid by the preset file
fn initial_answers(target: &Path, preset: Option<&Path>) -> Result<PartialAnswers> {
    let mut defaults = match SetupRecord::load_from(target) {
        Some(record) => {
            tracing::info!(generated_at = %record.generated_at, "reusing earlier answers as defaults");
            PartialAnswers::from(&record.answers)
        }
        None => PartialAnswers::default(),
    };

    if let Some(path) = preset {
        let preset = load_preset(path)
            .with_context(|| format!("Failed to load answers from {}", path.display()))?;
        defaults = defaults.overlay(preset);
    }
    Ok(defaults)
}

fn print_components(reporter: &Reporter, components: &SelectedComponents) {
    reporter.newline();
    reporter.divider();
    reporter.newline();
    reporter.title("Selected Components:");
    reporter.newline();

    let groups: [(&str, Vec<&str>); 6] = [
        ("Agents", components.agents.iter().map(|c| c.name.as_str()).collect()),
        ("Commands", components.commands.iter().map(|c| c.name.as_str()).collect()),
        ("Skills", components.skills.iter().map(|c| c.name.as_str()).collect()),
        ("Rules", components.rules.iter().map(|r| r.name.as_str()).collect()),
        (
            "MCP Servers",
            components.integrations.iter().map(|i| i.name.as_str()).collect(),
        ),
        ("Hooks", components.hooks.iter().map(|h| h.name.as_str()).collect()),
    ];

    for (label, names) in groups {
        if !names.is_empty() {
            reporter.info(&format!("{}: {}", label, style(names.join(", ")).cyan()));
        }
    }
}

fn completion_lines(
    setup: &SetupAnswers,
    answers: &Answers,
    summary: &GenerationSummary,
) -> Vec<String> {
    let mut lines = vec![
        "Setup Complete!".to_string(),
        String::new(),
        format!("Target directory: {}", setup.target_dir.display()),
        String::new(),
        "Files created:".to_string(),
        "  .claude/".to_string(),
    ];
    lines.extend(
        summary
            .written
            .iter()
            .filter(|path| !path.starts_with(".claude/"))
            .map(|path| format!("  {path}")),
    );
    lines.push(String::new());
    lines.push("Next steps:".to_string());

    let mut steps = Vec::new();
    if setup.mode == DirectoryMode::New {
        let name = setup
            .target_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| answers.project_name.clone());
        steps.push(format!("cd {name}"));
    }
    steps.push("Review CLAUDE_SETUP.md".to_string());
    if !summary.missing.is_empty() {
        steps.push("Add the missing templates to .claude/".to_string());
    }
    steps.push("Add API keys to .claude.json".to_string());
    steps.push("Start using your configured commands".to_string());

    lines.extend(
        steps
            .into_iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {}", i + 1, step)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fixtures::baseline;
    use tempfile::TempDir;

    #[test]
    fn test_completion_lines_for_new_directory() {
        let setup = SetupAnswers {
            mode: DirectoryMode::New,
            target_dir: PathBuf::from("/work/shop"),
            existing_files_action: None,
        };
        let summary = GenerationSummary {
            written: vec![
                ".claude.json".into(),
                "CLAUDE.md".into(),
                "CLAUDE_SETUP.md".into(),
                ".claude/setup.json".into(),
            ],
            ..Default::default()
        };
        let lines = completion_lines(&setup, &baseline(), &summary);

        assert_eq!(lines[0], "Setup Complete!");
        assert!(lines.contains(&"  .claude.json".to_string()));
        assert!(!lines.iter().any(|l| l.contains("setup.json")));
        assert!(lines.contains(&"  1. cd shop".to_string()));
        assert_eq!(lines.last().unwrap(), "  4. Start using your configured commands");
    }

    #[test]
    fn test_initial_answers_overlay_preset_on_record() {
        let dir = TempDir::new().unwrap();
        let answers = baseline();
        SetupRecord::new(answers.clone(), map_answers_to_components(&answers))
            .save(SetupRecord::path_in(dir.path()))
            .unwrap();
        let preset = dir.path().join("preset.json");
        std::fs::write(&preset, r#"{"projectName": "renamed"}"#).unwrap();

        let defaults = initial_answers(dir.path(), Some(&preset)).unwrap();
        assert_eq!(defaults.project_name.as_deref(), Some("renamed"));
        assert_eq!(defaults.database, Some(answers.database));
    }

    #[test]
    fn test_yes_mode_defaults_to_upsert() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("CLAUDE.md"), "# mine").unwrap();
        let options = InitOptions {
            dir: dir.path().to_path_buf(),
            yes: true,
            ..Default::default()
        };

        let setup =
            resolve_setup(&options, &Reporter::quiet(), &mut TerminalPrompter::new()).unwrap();
        assert_eq!(setup.existing_files_action, Some(ExistingFilesAction::Upsert));
        assert!(setup.is_upsert());
    }
}
