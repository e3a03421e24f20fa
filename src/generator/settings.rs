//! @acp:module "Settings Generation"
//! @acp:summary "Builds the local settings document wiring selected hooks"
//! @acp:domain cli
//! @acp:layer service

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::selection::{HookEvent, HookSelection, IntegrationSelection};

pub const SETTINGS_SCHEMA: &str = "https://json.schemastore.org/claude-code-settings.json";

/// `settings.local.json` content, or `None` when there is nothing to wire
///
/// Events without hooks are left out of the `hooks` object.
pub fn build_settings(hooks: &[HookSelection]) -> Option<Value> {
    if hooks.is_empty() {
        return None;
    }

    let mut by_event: BTreeMap<HookEvent, Vec<Value>> = BTreeMap::new();
    for selection in hooks {
        let kind = selection.hook;
        by_event.entry(kind.event()).or_default().push(json!({
            "matcher": kind.matcher(),
            "hooks": [{ "type": "command", "command": kind.command() }],
            "description": selection.description,
        }));
    }

    let mut grouped = Map::new();
    for (event, entries) in by_event {
        grouped.insert(event.as_str().to_string(), Value::Array(entries));
    }

    Some(json!({
        "$schema": SETTINGS_SCHEMA,
        "hooks": grouped,
    }))
}

/// `.claude.json` content listing every selected MCP server
pub fn build_claude_json(integrations: &[IntegrationSelection]) -> Result<Value, serde_json::Error> {
    let mut servers = Map::new();
    for integration in integrations {
        servers.insert(
            integration.name.clone(),
            serde_json::to_value(&integration.config)?,
        );
    }
    Ok(json!({ "mcpServers": servers }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::*;
    use crate::selection::fixtures::baseline;
    use crate::selection::{select_hooks, select_integrations, HookKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_hooks_no_settings() {
        assert_eq!(build_settings(&[]), None);
    }

    #[test]
    fn test_hooks_grouped_by_event() {
        let hooks: Vec<HookSelection> = [
            HookKind::PrHelper,
            HookKind::DevServerTmux,
            HookKind::TmuxReminder,
        ]
        .into_iter()
        .map(HookSelection::from)
        .collect();

        let settings = build_settings(&hooks).unwrap();
        assert_eq!(settings["$schema"], SETTINGS_SCHEMA);
        assert_eq!(settings["hooks"]["PreToolUse"].as_array().unwrap().len(), 2);
        assert_eq!(settings["hooks"]["PostToolUse"].as_array().unwrap().len(), 1);
        assert!(settings["hooks"].get("Stop").is_none());

        let entry = &settings["hooks"]["PostToolUse"][0];
        assert_eq!(entry["matcher"], r#"tool == "Bash""#);
        assert_eq!(entry["hooks"][0]["type"], "command");
        assert_eq!(entry["description"], HookKind::PrHelper.description());
    }

    #[test]
    fn test_go_backend_settings_skip_typescript_hooks() {
        let mut answers = baseline();
        answers.project_type = ProjectType::Backend;
        answers.has_frontend = false;
        answers.frontend_framework = FrontendFramework::None;
        answers.meta_framework = MetaFramework::None;
        answers.styling_approach = StylingApproach::VanillaCss;
        answers.backend_language = BackendLanguage::Go;
        answers.backend_framework = BackendFramework::Gin;
        answers.database_client = DatabaseClient::Raw;
        answers.enable_hooks = true;

        let settings = build_settings(&select_hooks(&answers)).unwrap();
        let text = settings.to_string();
        assert!(!text.contains("prettier"));
        assert!(!text.contains("tsc --noEmit"));
        assert!(!text.contains(HookKind::TypescriptCheck.description()));
        assert_eq!(settings["hooks"]["Stop"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_claude_json_keys_servers_by_name() {
        let mut answers = baseline();
        answers.integrations = vec!["github".into(), "vercel".into()];
        let doc = build_claude_json(&select_integrations(&answers)).unwrap();

        let servers = doc["mcpServers"].as_object().unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(doc["mcpServers"]["vercel"]["type"], "http");
        assert_eq!(doc["mcpServers"]["github"]["command"], "npx");
    }
}
