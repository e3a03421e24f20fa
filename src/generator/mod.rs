//! @acp:module "Generator"
//! @acp:summary "Materializes the selected components into a target directory"
//! @acp:domain cli
//! @acp:layer service
//!
//! Steps run in a fixed order: artifact copy, `.claude.json`, hook settings,
//! CLAUDE.md, CLAUDE_SETUP.md, then the setup record. Each step runs under a
//! reporter spinner. With upsert enabled, JSON files are deep-merged and
//! CLAUDE.md is merged between generated-content markers.

pub mod merge;
pub mod render;
pub mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;
use walkdir::WalkDir;

use crate::answers::Answers;
use crate::catalog::{Catalog, Category};
use crate::config::SetupRecord;
use crate::error::Result;
use crate::selection::SelectedComponents;
use crate::ui::Reporter;

/// What a generation run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Paths written at the target, relative to it
    pub written: Vec<String>,
    /// Artifacts copied from the template catalog
    pub copied: usize,
    /// Selected artifacts the catalog did not have, as `category/file`
    pub missing: Vec<String>,
}

pub struct Generator<'a> {
    target: PathBuf,
    catalog: Option<&'a Catalog>,
    upsert: bool,
    reporter: Reporter,
}

impl<'a> Generator<'a> {
    pub fn new(target: impl Into<PathBuf>, reporter: Reporter) -> Self {
        Self {
            target: target.into(),
            catalog: None,
            upsert: false,
            reporter,
        }
    }

    /// Copy artifacts from this catalog; without one they are only listed
    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Merge into files from an earlier setup instead of replacing them
    pub fn upsert(mut self, upsert: bool) -> Self {
        self.upsert = upsert;
        self
    }

    pub fn run(
        &self,
        answers: &Answers,
        components: &SelectedComponents,
    ) -> Result<GenerationSummary> {
        let mut summary = GenerationSummary::default();
        let claude_dir = self.target.join(".claude");
        fs::create_dir_all(&claude_dir)?;
        tracing::info!(target_dir = %self.target.display(), upsert = self.upsert, "generating configuration");

        self.copy_artifacts(components, &mut summary)?;

        let spinner = self.reporter.spinner("Generating .claude.json...");
        let claude_json = settings::build_claude_json(&components.integrations)?;
        self.write_json(".claude.json", claude_json, &mut summary)?;
        spinner.succeed("Generated .claude.json");

        if answers.enable_hooks {
            if let Some(doc) = settings::build_settings(&components.hooks) {
                let spinner = self.reporter.spinner("Generating settings.local.json...");
                self.write_json(".claude/settings.local.json", doc, &mut summary)?;
                spinner.succeed("Generated settings.local.json");
            }
        }

        let spinner = self.reporter.spinner("Generating CLAUDE.md...");
        let body = render::render_claude_md(answers, components)?;
        let path = self.target.join("CLAUDE.md");
        let content = match self.existing_text(&path)? {
            Some(existing) => merge::merge_with_markers(&existing, &body),
            None => format!("{}\n", merge::wrap_with_markers(&body)),
        };
        fs::write(&path, content)?;
        summary.written.push("CLAUDE.md".to_string());
        spinner.succeed("Generated CLAUDE.md");

        let spinner = self.reporter.spinner("Generating CLAUDE_SETUP.md...");
        let today = Local::now().date_naive();
        let setup_md = render::render_setup_md(answers, components, today)?;
        fs::write(self.target.join("CLAUDE_SETUP.md"), setup_md)?;
        summary.written.push("CLAUDE_SETUP.md".to_string());
        spinner.succeed("Generated CLAUDE_SETUP.md");

        SetupRecord::new(answers.clone(), components.clone())
            .save(SetupRecord::path_in(&self.target))?;
        summary.written.push(crate::config::RECORD_PATH.to_string());

        tracing::info!(
            written = summary.written.len(),
            copied = summary.copied,
            missing = summary.missing.len(),
            "configuration generated"
        );
        Ok(summary)
    }

    fn copy_artifacts(
        &self,
        components: &SelectedComponents,
        summary: &mut GenerationSummary,
    ) -> Result<()> {
        let groups: [(Category, Vec<&str>); 4] = [
            (
                Category::Agents,
                components.agents.iter().map(|c| c.file.as_str()).collect(),
            ),
            (
                Category::Commands,
                components.commands.iter().map(|c| c.file.as_str()).collect(),
            ),
            (
                Category::Skills,
                components.skills.iter().map(|c| c.file.as_str()).collect(),
            ),
            (
                Category::Rules,
                components.rules.iter().map(|r| r.file.as_str()).collect(),
            ),
        ];

        let Some(catalog) = self.catalog else {
            for (category, files) in &groups {
                summary
                    .missing
                    .extend(files.iter().map(|f| format!("{category}/{f}")));
            }
            if !summary.missing.is_empty() {
                self.reporter
                    .warn("No template directory found; artifacts were selected but not copied");
            }
            return Ok(());
        };

        for (category, files) in &groups {
            if files.is_empty() {
                continue;
            }
            let spinner = self.reporter.spinner(format!("Copying {category}..."));
            let dest_dir = self.target.join(".claude").join(category.dir_name());
            fs::create_dir_all(&dest_dir)?;

            let mut copied = 0;
            for file in files {
                match catalog.source(*category, file) {
                    Some(source) => {
                        copy_path(&source, &dest_dir.join(file))?;
                        copied += 1;
                    }
                    None => {
                        tracing::warn!(%category, file, "template not found");
                        summary.missing.push(format!("{category}/{file}"));
                    }
                }
            }
            summary.copied += copied;

            if copied == files.len() {
                spinner.succeed(&format!("Copied {copied} {category}"));
            } else {
                spinner.warn(&format!(
                    "Copied {copied} of {} {category} ({} missing)",
                    files.len(),
                    files.len() - copied
                ));
            }
        }
        Ok(())
    }

    fn write_json(&self, relative: &str, doc: Value, summary: &mut GenerationSummary) -> Result<()> {
        let path = self.target.join(relative);
        let content = match self.existing_text(&path)? {
            Some(existing) => merge::merge_json(&existing, doc)?,
            None => serde_json::to_string_pretty(&doc)?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content + "\n")?;
        summary.written.push(relative.to_string());
        Ok(())
    }

    // Existing content to merge into; only consulted in upsert mode
    fn existing_text(&self, path: &Path) -> Result<Option<String>> {
        if self.upsert && path.is_file() {
            Ok(Some(fs::read_to_string(path)?))
        } else {
            Ok(None)
        }
    }
}

/// Copy a file, or a directory tree, to `dest`
fn copy_path(source: &Path, dest: &Path) -> Result<()> {
    if source.is_file() {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, dest)?;
        return Ok(());
    }

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| crate::error::WizardError::Other(e.to_string()))?;
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
