//! @acp:module "Skill Selection"
//! @acp:summary "Picks skills for the project"
//! @acp:domain cli
//! @acp:layer logic

use super::ComponentSelection;
use crate::answers::*;

/// Skills may be single files or whole directories
pub fn select_skills(answers: &Answers) -> Vec<ComponentSelection> {
    let mut skills = Vec::new();

    if answers.is_production_grade() {
        skills.push(ComponentSelection::new(
            "Coding Standards",
            "coding-standards.md",
            "Ensures consistent code quality",
        ));
    }

    if answers.has_backend {
        skills.push(ComponentSelection::new(
            "Backend Patterns",
            "backend-patterns.md",
            format!("Backend development with {}", answers.backend_language),
        ));
    }

    if answers.has_frontend {
        skills.push(ComponentSelection::new(
            "Frontend Patterns",
            "frontend-patterns.md",
            format!("Frontend development with {}", answers.frontend_framework),
        ));
    }

    if answers.security_level == SecurityLevel::High {
        skills.push(ComponentSelection::new(
            "Security Review",
            "security-review",
            "High security level requires security review workflows",
        ));
    }

    if answers.testing_approach == TestingApproach::Tdd {
        skills.push(ComponentSelection::new(
            "TDD Workflow",
            "tdd-workflow",
            "TDD approach selected",
        ));
    }

    if answers.integrations.iter().any(|id| id == "clickhouse") {
        skills.push(ComponentSelection::new(
            "ClickHouse",
            "clickhouse-io.md",
            "ClickHouse integration enabled",
        ));
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fixtures::baseline;

    #[test]
    fn test_stack_skills_follow_branches() {
        let skills = select_skills(&baseline());
        let reasons: Vec<&str> = skills.iter().map(|s| s.reason.as_str()).collect();
        assert_eq!(
            reasons,
            vec!["Backend development with typescript", "Frontend development with react"]
        );
    }

    #[test]
    fn test_clickhouse_skill_needs_integration() {
        let mut answers = baseline();
        answers.integrations.push("clickhouse".to_string());
        assert!(select_skills(&answers)
            .iter()
            .any(|s| s.file == "clickhouse-io.md"));
    }
}
