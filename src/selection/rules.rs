//! @acp:module "Rule Selection"
//! @acp:summary "Picks always-on rules, flagging the ones that are mandatory"
//! @acp:domain cli
//! @acp:layer logic

use serde::{Deserialize, Serialize};

use crate::answers::*;

/// A rule picked for installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSelection {
    pub name: String,
    pub file: String,
    pub reason: String,
    /// Listed as non-negotiable in CLAUDE.md
    pub required: bool,
}

impl RuleSelection {
    fn new(name: &str, file: &str, reason: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            reason: reason.into(),
            required,
        }
    }
}

pub fn select_rules(answers: &Answers) -> Vec<RuleSelection> {
    let mut rules = Vec::new();
    let enterprise = answers.project_goal == ProjectGoal::Enterprise;

    if answers.project_goal != ProjectGoal::Learning {
        rules.push(RuleSelection::new(
            "Coding Style",
            "coding-style.md",
            "Maintains consistent code style",
            enterprise,
        ));
    }

    match answers.security_level {
        SecurityLevel::High => rules.push(RuleSelection::new(
            "Security",
            "security.md",
            "High security level requires strict security rules",
            true,
        )),
        SecurityLevel::Medium => rules.push(RuleSelection::new(
            "Security",
            "security.md",
            "Medium security level benefits from security guidelines",
            false,
        )),
        SecurityLevel::Low => {}
    }

    if answers.testing_approach != TestingApproach::None {
        rules.push(RuleSelection::new(
            "Testing",
            "testing.md",
            format!("Testing approach: {}", answers.testing_approach),
            answers.testing_approach == TestingApproach::Tdd,
        ));
    }

    if answers.has_team() {
        rules.push(RuleSelection::new(
            "Git Workflow",
            "git-workflow.md",
            format!("Team collaboration using {}", answers.git_workflow),
            answers.team_size == TeamSize::Large,
        ));
    }

    if answers.is_production_grade() {
        rules.push(RuleSelection::new(
            "Patterns",
            "patterns.md",
            "Production projects benefit from established patterns",
            false,
        ));
        rules.push(RuleSelection::new(
            "Performance",
            "performance.md",
            "Production projects need performance guidelines",
            enterprise,
        ));
    }

    if answers.enable_hooks {
        rules.push(RuleSelection::new(
            "Hooks",
            "hooks.md",
            "Hooks enabled for automated checks",
            false,
        ));
    }

    rules.push(RuleSelection::new(
        "Agents",
        "agents.md",
        "Provides guidance on using AI agents effectively",
        false,
    ));

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fixtures::baseline;

    #[test]
    fn test_agents_rule_is_always_present() {
        let mut answers = baseline();
        answers.project_goal = ProjectGoal::Learning;
        answers.testing_approach = TestingApproach::None;
        let rules = select_rules(&answers);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].file, "agents.md");
    }

    #[test]
    fn test_enterprise_marks_required_rules() {
        let mut answers = baseline();
        answers.project_goal = ProjectGoal::Enterprise;
        answers.security_level = SecurityLevel::High;
        answers.testing_approach = TestingApproach::Tdd;
        answers.team_size = TeamSize::Large;
        let required: Vec<String> = select_rules(&answers)
            .into_iter()
            .filter(|r| r.required)
            .map(|r| r.file)
            .collect();
        assert_eq!(
            required,
            vec![
                "coding-style.md",
                "security.md",
                "testing.md",
                "git-workflow.md",
                "performance.md",
            ]
        );
    }

    #[test]
    fn test_medium_security_rule_is_optional() {
        let mut answers = baseline();
        answers.security_level = SecurityLevel::Medium;
        let security = select_rules(&answers)
            .into_iter()
            .find(|r| r.file == "security.md")
            .unwrap();
        assert!(!security.required);
    }
}
