//! Generator integration tests
//!
//! Materializes selections into temporary directories.

use std::fs;
use std::path::Path;

use claude_setup::answers::{Answers, PartialAnswers};
use claude_setup::generator::merge::{END_MARKER, START_MARKER};
use claude_setup::setup::{DirectoryMode, ExistingFilesAction, SetupAnswers};
use claude_setup::{map_answers_to_components, Catalog, Generator, Reporter, SetupRecord};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

fn answers(enable_hooks: bool) -> Answers {
    let partial: PartialAnswers = serde_json::from_value(json!({
        "projectName": "shop",
        "projectType": "fullstack",
        "projectGoal": "production",
        "hasFrontend": true,
        "frontendFramework": "react",
        "metaFramework": "nextjs",
        "stylingApproach": "tailwind",
        "hasBackend": false,
        "testingApproach": "tdd",
        "testFramework": "vitest",
        "e2eFramework": "playwright",
        "coverageTarget": "80",
        "securityLevel": "medium",
        "authProvider": "clerk",
        "hasPayments": false,
        "hasBlockchain": false,
        "deploymentPlatform": "vercel",
        "cicdPlatform": "github-actions",
        "integrations": ["github", "vercel"],
        "teamSize": "small",
        "gitWorkflow": "feature-branches",
        "requireCodeReview": true,
        "enableHooks": enable_hooks
    }))
    .unwrap();
    partial.finalize().unwrap()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Template directory holding every agent, command and rule file but
/// only one skill
fn templates(answers: &Answers) -> TempDir {
    let dir = TempDir::new().unwrap();
    let components = map_answers_to_components(answers);
    for (category, files) in [
        ("agents", components.agents.iter().map(|c| c.file.clone()).collect::<Vec<_>>()),
        ("commands", components.commands.iter().map(|c| c.file.clone()).collect()),
        ("rules", components.rules.iter().map(|r| r.file.clone()).collect()),
    ] {
        fs::create_dir_all(dir.path().join(category)).unwrap();
        for file in files {
            fs::write(dir.path().join(category).join(file), "# template").unwrap();
        }
    }
    fs::create_dir_all(dir.path().join("skills/tdd-workflow")).unwrap();
    fs::write(dir.path().join("skills/tdd-workflow/SKILL.md"), "# tdd").unwrap();
    dir
}

mod fresh_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_generation_writes_every_file() {
        let answers = answers(true);
        let components = map_answers_to_components(&answers);
        let template_dir = templates(&answers);
        let catalog = Catalog::scan(template_dir.path()).unwrap();
        let target = TempDir::new().unwrap();

        let summary = Generator::new(target.path(), Reporter::quiet())
            .with_catalog(&catalog)
            .run(&answers, &components)
            .unwrap();

        let root = target.path();
        assert!(root.join(".claude/skills/tdd-workflow/SKILL.md").is_file());
        for agent in &components.agents {
            assert!(root.join(".claude/agents").join(&agent.file).is_file());
        }

        let skills_missing = components
            .skills
            .iter()
            .filter(|s| s.file != "tdd-workflow")
            .count();
        assert_eq!(summary.missing.len(), skills_missing);
        assert!(summary.missing.iter().all(|m| m.starts_with("skills/")));

        let claude_json = read_json(&root.join(".claude.json"));
        assert_eq!(
            claude_json["mcpServers"].as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["github", "vercel"]
        );

        let settings = read_json(&root.join(".claude/settings.local.json"));
        assert_eq!(settings["$schema"], "https://json.schemastore.org/claude-code-settings.json");
        assert!(settings["hooks"]["PreToolUse"].as_array().unwrap().len() >= 2);
        assert_eq!(settings["hooks"]["Stop"].as_array().unwrap().len(), 1);

        let claude_md = fs::read_to_string(root.join("CLAUDE.md")).unwrap();
        assert!(claude_md.starts_with(START_MARKER));
        assert!(claude_md.contains("# shop"));
        assert!(claude_md.contains("- E2E: playwright"));

        let setup_md = fs::read_to_string(root.join("CLAUDE_SETUP.md")).unwrap();
        assert!(setup_md.contains("GITHUB_PERSONAL_ACCESS_TOKEN - "));

        let record = SetupRecord::load_from(root).unwrap();
        assert_eq!(record.answers, answers);
        assert_eq!(record.components, components);
    }
}

mod upsert_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upsert_keeps_user_content() {
        let answers = answers(false);
        let components = map_answers_to_components(&answers);
        let target = TempDir::new().unwrap();
        let root = target.path();

        fs::write(
            root.join(".claude.json"),
            r#"{"theme": "dark", "mcpServers": {"custom": {"command": "mine"}}}"#,
        )
        .unwrap();
        fs::write(
            root.join("CLAUDE.md"),
            format!("# Notes\n\nKeep me.\n\n{START_MARKER}\nold generated\n{END_MARKER}\n"),
        )
        .unwrap();

        Generator::new(root, Reporter::quiet())
            .upsert(true)
            .run(&answers, &components)
            .unwrap();

        let claude_json = read_json(&root.join(".claude.json"));
        assert_eq!(claude_json["theme"], "dark");
        assert_eq!(claude_json["mcpServers"]["custom"]["command"], "mine");
        assert_eq!(claude_json["mcpServers"]["github"]["command"], "npx");

        let claude_md = fs::read_to_string(root.join("CLAUDE.md")).unwrap();
        assert!(claude_md.starts_with("# Notes\n\nKeep me."));
        assert!(!claude_md.contains("old generated"));
        assert_eq!(claude_md.matches(START_MARKER).count(), 1);
    }

    #[test]
    fn test_without_upsert_files_are_replaced() {
        let answers = answers(false);
        let components = map_answers_to_components(&answers);
        let target = TempDir::new().unwrap();
        let root = target.path();
        fs::write(root.join(".claude.json"), r#"{"theme": "dark"}"#).unwrap();

        Generator::new(root, Reporter::quiet())
            .run(&answers, &components)
            .unwrap();

        assert!(read_json(&root.join(".claude.json")).get("theme").is_none());
    }

    #[test]
    fn test_clean_setup_removes_earlier_files_before_generation() {
        let answers = answers(false);
        let components = map_answers_to_components(&answers);
        let target = TempDir::new().unwrap();
        let root = target.path();
        fs::create_dir_all(root.join(".claude/agents")).unwrap();
        fs::write(root.join(".claude/agents/stale.md"), "old").unwrap();

        let setup = SetupAnswers {
            mode: DirectoryMode::Existing,
            target_dir: root.to_path_buf(),
            existing_files_action: Some(ExistingFilesAction::Clean),
        };
        setup.prepare().unwrap();
        Generator::new(root, Reporter::quiet())
            .upsert(setup.is_upsert())
            .run(&answers, &components)
            .unwrap();

        assert!(!root.join(".claude/agents/stale.md").exists());
        assert!(root.join("CLAUDE.md").is_file());
    }
}
