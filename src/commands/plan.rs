//! @acp:module "Plan Command"
//! @acp:summary "Show which components a set of answers would install"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::load_preset;
use crate::selection::map_answers_to_components;

/// Options for the plan command
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Answers file (JSON or YAML)
    pub answers: PathBuf,
    /// Print the selection as JSON
    pub json: bool,
}

/// Execute the plan command
pub fn execute_plan(options: PlanOptions) -> Result<()> {
    let answers = load_preset(&options.answers)
        .with_context(|| format!("Failed to load answers from {}", options.answers.display()))?
        .finalize()
        .context("Answers file is incomplete")?;
    let components = map_answers_to_components(&answers);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&components)?);
        return Ok(());
    }

    println!(
        "{} {} components for {}",
        style("✓").green(),
        components.len(),
        style(&answers.project_name).bold()
    );

    print_group(
        "Agents",
        components.agents.iter().map(|c| (c.name.as_str(), c.reason.as_str())).collect(),
    );
    print_group(
        "Commands",
        components.commands.iter().map(|c| (c.name.as_str(), c.reason.as_str())).collect(),
    );
    print_group(
        "Skills",
        components.skills.iter().map(|c| (c.name.as_str(), c.reason.as_str())).collect(),
    );
    print_group(
        "Rules",
        components.rules.iter().map(|r| (r.name.as_str(), r.reason.as_str())).collect(),
    );
    print_group(
        "Hooks",
        components.hooks.iter().map(|h| (h.name.as_str(), h.reason.as_str())).collect(),
    );
    print_group(
        "MCP Servers",
        components
            .integrations
            .iter()
            .map(|i| (i.name.as_str(), i.reason.as_str()))
            .collect(),
    );

    Ok(())
}

fn print_group(title: &str, rows: Vec<(&str, &str)>) {
    if rows.is_empty() {
        return;
    }
    println!("\n{}", style(title).bold().cyan());
    for (name, reason) in rows {
        println!("  {} {}", style(name).green(), style(reason).dim());
    }
}
