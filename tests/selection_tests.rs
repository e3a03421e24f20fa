//! Selection integration tests
//!
//! Builds answers from preset documents and checks what gets picked.

use claude_setup::answers::{Answers, PartialAnswers};
use claude_setup::map_answers_to_components;
use claude_setup::selection::HookKind;
use pretty_assertions::assert_eq;
use serde_json::json;

fn answers(overrides: serde_json::Value) -> Answers {
    let mut base = json!({
        "projectName": "shop",
        "projectType": "fullstack",
        "projectGoal": "mvp",
        "hasFrontend": true,
        "frontendFramework": "react",
        "metaFramework": "nextjs",
        "stylingApproach": "tailwind",
        "hasBackend": true,
        "backendLanguage": "typescript",
        "backendFramework": "express",
        "database": "postgresql",
        "databaseClient": "prisma",
        "testingApproach": "standard",
        "testFramework": "vitest",
        "e2eFramework": "none",
        "coverageTarget": "60",
        "securityLevel": "low",
        "authProvider": "none",
        "hasPayments": false,
        "hasBlockchain": false,
        "deploymentPlatform": "vercel",
        "cicdPlatform": "github-actions",
        "integrations": ["github"],
        "teamSize": "solo",
        "gitWorkflow": "trunk-based",
        "requireCodeReview": false,
        "enableHooks": false
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
    let partial: PartialAnswers = serde_json::from_value(base).unwrap();
    partial.finalize().unwrap()
}

fn security_reason(answers: &Answers) -> Option<String> {
    map_answers_to_components(answers)
        .agents
        .into_iter()
        .find(|a| a.file == "security-reviewer.md")
        .map(|a| a.reason)
}

mod security_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_high_security_alone_cites_security_level() {
        let reason = security_reason(&answers(json!({"securityLevel": "high"}))).unwrap();
        assert!(reason.contains("High security level"));
        assert!(!reason.contains("Payment"));
        assert!(!reason.contains("Blockchain"));
    }

    #[test]
    fn test_payments_with_low_security_cites_payments() {
        let reason = security_reason(&answers(json!({"hasPayments": true}))).unwrap();
        assert!(reason.contains("Payment"));
        assert!(!reason.contains("security level"));
    }

    #[test]
    fn test_low_security_without_triggers_has_no_reviewer() {
        assert_eq!(security_reason(&answers(json!({}))), None);
    }
}

mod hook_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hooks_disabled_selects_none() {
        assert!(map_answers_to_components(&answers(json!({}))).hooks.is_empty());
    }

    #[test]
    fn test_team_project_gets_push_review() {
        let selected = map_answers_to_components(&answers(json!({
            "enableHooks": true,
            "teamSize": "small"
        })));
        let kinds: Vec<HookKind> = selected.hooks.iter().map(|h| h.hook).collect();
        assert!(kinds.contains(&HookKind::GitPushReview));
        assert!(kinds.contains(&HookKind::TypescriptCheck));
        assert!(!kinds.contains(&HookKind::DocFileBlock));
    }
}

mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_integrations_are_dropped() {
        let selected = map_answers_to_components(&answers(json!({
            "integrations": ["github", "not-a-server", "memory"]
        })));
        let names: Vec<&str> = selected.integrations.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["github", "memory"]);
    }
}

#[test]
fn test_selection_serializes_for_plan_output() {
    let selected = map_answers_to_components(&answers(json!({"testingApproach": "tdd"})));
    let value = serde_json::to_value(&selected).unwrap();
    assert!(value["commands"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["name"] == "/tdd"));
}
