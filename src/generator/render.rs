//! @acp:module "Document Rendering"
//! @acp:summary "Renders CLAUDE.md and CLAUDE_SETUP.md from answers and selections"
//! @acp:domain cli
//! @acp:layer output

use chrono::NaiveDate;
use handlebars::Handlebars;
use serde_json::json;

use crate::answers::*;
use crate::error::Result;
use crate::selection::{ComponentSelection, SelectedComponents};

const CLAUDE_MD: &str = r#"# {{project_name}}

Claude Code configuration for this {{project_type}} project ({{project_goal}}).

## Tech Stack

{{#each tech_stack}}
- {{this}}
{{/each}}

## Available Commands

{{#each commands}}
- `{{this}}`
{{else}}
No slash commands installed.
{{/each}}

{{#if critical_rules}}
## Critical Rules

{{#each critical_rules}}
- **{{this}}** (required)
{{/each}}

{{/if}}
{{#if agents}}
## Agents

{{#each agents}}
- {{this}}
{{/each}}

{{/if}}
## Workflow

- Team size: {{team_size}}
- Git workflow: {{git_workflow}}
- Security level: {{security_level}}
{{#if require_code_review}}
- Code review is required before merging
{{/if}}
"#;

const SETUP_MD: &str = r#"# Claude Code Setup

Generated for **{{project_name}}** on {{date}}.

{{#each sections}}
## {{title}}

{{#each items}}
- **{{name}}**: {{reason}}
{{/each}}

{{/each}}
{{#if env_vars}}
## Environment Variables

Set these in `.claude.json` before using the matching MCP servers:

{{#each env_vars}}
- {{this}}
{{/each}}

{{/if}}
## Next Steps

1. Review the files under `.claude/`
2. Add API keys to `.claude.json`
3. Start using your configured commands
"#;

/// Human-readable tech stack lines, skipping unset parts
pub fn tech_stack_summary(answers: &Answers) -> Vec<String> {
    let mut stack = Vec::new();

    if answers.has_frontend {
        if answers.meta_framework != MetaFramework::None {
            stack.push(format!("Frontend: {}", answers.meta_framework));
        } else {
            stack.push(format!("Frontend: {}", answers.frontend_framework));
        }
        if answers.styling_approach != StylingApproach::VanillaCss {
            stack.push(format!("Styling: {}", answers.styling_approach));
        }
    }

    if answers.has_backend {
        stack.push(format!("Backend: {}", answers.backend_language));
        if answers.backend_framework != BackendFramework::None {
            stack.push(format!("Framework: {}", answers.backend_framework));
        }
        if answers.database != Database::None {
            stack.push(format!("Database: {}", answers.database));
        }
        if !matches!(
            answers.database_client,
            DatabaseClient::None | DatabaseClient::Raw
        ) {
            stack.push(format!("ORM/Client: {}", answers.database_client));
        }
    }

    if answers.test_framework != TestFramework::None {
        stack.push(format!("Testing: {}", answers.test_framework));
    }
    if answers.e2e_framework != E2eFramework::None {
        stack.push(format!("E2E: {}", answers.e2e_framework));
    }
    if answers.deployment_platform != DeploymentPlatform::None {
        stack.push(format!("Deployment: {}", answers.deployment_platform));
    }

    stack
}

/// `KEY - description` for every MCP variable still holding a placeholder
pub fn env_vars_needed(components: &SelectedComponents) -> Vec<String> {
    components
        .integrations
        .iter()
        .flat_map(|integration| {
            integration
                .config
                .placeholder_env()
                .map(move |key| format!("{} - {}", key, integration.config.description))
        })
        .collect()
}

fn engine() -> Handlebars<'static> {
    let mut hb = Handlebars::new();
    hb.register_escape_fn(handlebars::no_escape);
    hb
}

/// Generated CLAUDE.md body, without markers
pub fn render_claude_md(answers: &Answers, components: &SelectedComponents) -> Result<String> {
    let data = json!({
        "project_name": answers.project_name,
        "project_type": answers.project_type.to_string(),
        "project_goal": answers.project_goal.to_string(),
        "tech_stack": tech_stack_summary(answers),
        "commands": components.commands.iter().map(|c| &c.name).collect::<Vec<_>>(),
        "critical_rules": components
            .rules
            .iter()
            .filter(|r| r.required)
            .map(|r| &r.name)
            .collect::<Vec<_>>(),
        "agents": components.agents.iter().map(|a| &a.name).collect::<Vec<_>>(),
        "team_size": answers.team_size.to_string(),
        "git_workflow": answers.git_workflow.to_string(),
        "security_level": answers.security_level.to_string(),
        "require_code_review": answers.require_code_review,
    });

    let rendered = engine().render_template(CLAUDE_MD, &data)?;
    Ok(format!("{}\n", rendered.trim()))
}

fn section(title: &str, items: &[ComponentSelection]) -> serde_json::Value {
    json!({
        "title": title,
        "items": items
            .iter()
            .map(|c| json!({ "name": c.name, "reason": c.reason }))
            .collect::<Vec<_>>(),
    })
}

/// CLAUDE_SETUP.md listing every component with its reason
pub fn render_setup_md(
    answers: &Answers,
    components: &SelectedComponents,
    date: NaiveDate,
) -> Result<String> {
    let rules: Vec<_> = components
        .rules
        .iter()
        .map(|r| {
            let name = if r.required {
                format!("{} (required)", r.name)
            } else {
                r.name.clone()
            };
            json!({ "name": name, "reason": r.reason })
        })
        .collect();
    let hooks: Vec<_> = components
        .hooks
        .iter()
        .map(|h| json!({ "name": h.name, "reason": h.reason }))
        .collect();
    let servers: Vec<_> = components
        .integrations
        .iter()
        .map(|i| json!({ "name": i.name, "reason": i.reason }))
        .collect();

    let sections: Vec<_> = [
        section("Agents", &components.agents),
        section("Commands", &components.commands),
        section("Skills", &components.skills),
        json!({ "title": "Rules", "items": rules }),
        json!({ "title": "Hooks", "items": hooks }),
        json!({ "title": "MCP Servers", "items": servers }),
    ]
    .into_iter()
    .filter(|s| s["items"].as_array().is_some_and(|items| !items.is_empty()))
    .collect();

    let data = json!({
        "project_name": answers.project_name,
        "date": date.format("%Y-%m-%d").to_string(),
        "sections": sections,
        "env_vars": env_vars_needed(components),
    });

    let rendered = engine().render_template(SETUP_MD, &data)?;
    Ok(format!("{}\n", rendered.trim()))
}
