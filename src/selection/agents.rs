//! @acp:module "Agent Selection"
//! @acp:summary "Picks specialist agents for the project"
//! @acp:domain cli
//! @acp:layer logic

use super::ComponentSelection;
use crate::answers::*;

pub fn select_agents(answers: &Answers) -> Vec<ComponentSelection> {
    let mut agents = Vec::new();
    let production = answers.is_production_grade();

    if production {
        agents.push(ComponentSelection::new(
            "Planner",
            "planner.md",
            "Production/enterprise projects benefit from structured planning",
        ));
    }

    if production || answers.project_type == ProjectType::Monorepo {
        agents.push(ComponentSelection::new(
            "Architect",
            "architect.md",
            "Complex projects need architectural guidance",
        ));
    }

    if answers.testing_approach == TestingApproach::Tdd {
        agents.push(ComponentSelection::new(
            "TDD Guide",
            "tdd-guide.md",
            "TDD approach selected - provides test-first development guidance",
        ));
    }

    if answers.require_code_review || answers.has_team() {
        agents.push(ComponentSelection::new(
            "Code Reviewer",
            "code-reviewer.md",
            "Team collaboration requires code review processes",
        ));
    }

    // First trigger in priority order names the reason
    let security_reason = if answers.security_level == SecurityLevel::High {
        Some("High security level requires security reviews")
    } else if answers.has_payments {
        Some("Payment handling requires security reviews")
    } else if answers.has_blockchain {
        Some("Blockchain integration requires security reviews")
    } else {
        None
    };
    if let Some(reason) = security_reason {
        agents.push(ComponentSelection::new(
            "Security Reviewer",
            "security-reviewer.md",
            reason,
        ));
    }

    if answers.uses_typescript() {
        agents.push(ComponentSelection::new(
            "Build Error Resolver",
            "build-error-resolver.md",
            "TypeScript/frontend projects benefit from build error assistance",
        ));
    }

    if answers.e2e_framework != E2eFramework::None {
        agents.push(ComponentSelection::new(
            "E2E Runner",
            "e2e-runner.md",
            format!("E2E testing with {} enabled", answers.e2e_framework),
        ));
    }

    if production {
        agents.push(ComponentSelection::new(
            "Documentation Updater",
            "doc-updater.md",
            "Production projects need documentation maintenance",
        ));
        agents.push(ComponentSelection::new(
            "Refactor Cleaner",
            "refactor-cleaner.md",
            "Production projects benefit from code cleanup capabilities",
        ));
    }

    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fixtures::baseline;

    fn security_reason(answers: &Answers) -> Option<String> {
        select_agents(answers)
            .into_iter()
            .find(|a| a.file == "security-reviewer.md")
            .map(|a| a.reason)
    }

    #[test]
    fn test_security_reviewer_cites_high_security_first() {
        let mut answers = baseline();
        answers.security_level = SecurityLevel::High;
        answers.has_payments = true;
        let reason = security_reason(&answers).unwrap();
        assert!(reason.starts_with("High security level"));
    }

    #[test]
    fn test_security_reviewer_cites_payments() {
        let mut answers = baseline();
        answers.has_payments = true;
        answers.has_blockchain = true;
        assert_eq!(
            security_reason(&answers).as_deref(),
            Some("Payment handling requires security reviews")
        );
    }

    #[test]
    fn test_no_security_reviewer_without_trigger() {
        assert_eq!(security_reason(&baseline()), None);
    }

    #[test]
    fn test_monorepo_gets_architect_only() {
        let mut answers = baseline();
        answers.project_type = ProjectType::Monorepo;
        let files: Vec<String> = select_agents(&answers).into_iter().map(|a| a.file).collect();
        assert!(files.contains(&"architect.md".to_string()));
        assert!(!files.contains(&"planner.md".to_string()));
    }

    #[test]
    fn test_e2e_runner_names_framework() {
        let mut answers = baseline();
        answers.e2e_framework = E2eFramework::Playwright;
        let runner = select_agents(&answers)
            .into_iter()
            .find(|a| a.file == "e2e-runner.md")
            .unwrap();
        assert_eq!(runner.reason, "E2E testing with playwright enabled");
    }
}
