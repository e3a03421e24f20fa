//! @acp:module "Command Selection"
//! @acp:summary "Picks slash commands for the project"
//! @acp:domain cli
//! @acp:layer logic

use super::ComponentSelection;
use crate::answers::*;

pub fn select_commands(answers: &Answers) -> Vec<ComponentSelection> {
    let mut commands = Vec::new();
    let production = answers.is_production_grade();

    if production {
        commands.push(ComponentSelection::new(
            "/plan",
            "plan.md",
            "Structured planning for complex projects",
        ));
    }

    if answers.testing_approach == TestingApproach::Tdd {
        commands.push(ComponentSelection::new("/tdd", "tdd.md", "TDD approach selected"));
    }

    if answers.require_code_review || answers.has_team() {
        commands.push(ComponentSelection::new(
            "/code-review",
            "code-review.md",
            "Team workflow includes code reviews",
        ));
    }

    let compiled = matches!(
        answers.backend_language,
        BackendLanguage::TypeScript
            | BackendLanguage::Go
            | BackendLanguage::Rust
            | BackendLanguage::Java
    );
    if compiled || answers.has_frontend {
        commands.push(ComponentSelection::new(
            "/build-fix",
            "build-fix.md",
            "Compiled language projects benefit from build error resolution",
        ));
    }

    if answers.e2e_framework != E2eFramework::None {
        commands.push(ComponentSelection::new(
            "/e2e",
            "e2e.md",
            format!("E2E testing with {}", answers.e2e_framework),
        ));
    }

    if answers.testing_approach != TestingApproach::None
        && answers.coverage_target != CoverageTarget::None
    {
        commands.push(ComponentSelection::new(
            "/test-coverage",
            "test-coverage.md",
            format!("Coverage target of {}% set", answers.coverage_target),
        ));
    }

    if production {
        commands.push(ComponentSelection::new(
            "/refactor-clean",
            "refactor-clean.md",
            "Production projects need refactoring capabilities",
        ));
        commands.push(ComponentSelection::new(
            "/update-docs",
            "update-docs.md",
            "Production projects need documentation updates",
        ));
    }

    if answers.project_type == ProjectType::Monorepo
        || answers.project_goal == ProjectGoal::Enterprise
    {
        commands.push(ComponentSelection::new(
            "/update-codemaps",
            "update-codemaps.md",
            "Large projects benefit from code map maintenance",
        ));
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fixtures::baseline;

    fn names(answers: &Answers) -> Vec<String> {
        select_commands(answers).into_iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_baseline_commands() {
        assert_eq!(names(&baseline()), vec!["/build-fix", "/test-coverage"]);
    }

    #[test]
    fn test_python_backend_without_frontend_skips_build_fix() {
        let mut answers = baseline();
        answers.has_frontend = false;
        answers.backend_language = BackendLanguage::Python;
        assert!(!names(&answers).contains(&"/build-fix".to_string()));
    }

    #[test]
    fn test_coverage_reason_includes_target() {
        let coverage = select_commands(&baseline())
            .into_iter()
            .find(|c| c.name == "/test-coverage")
            .unwrap();
        assert_eq!(coverage.reason, "Coverage target of 60% set");
    }

    #[test]
    fn test_enterprise_gets_full_command_set() {
        let mut answers = baseline();
        answers.project_goal = ProjectGoal::Enterprise;
        answers.testing_approach = TestingApproach::Tdd;
        answers.team_size = TeamSize::Large;
        assert_eq!(
            names(&answers),
            vec![
                "/plan",
                "/tdd",
                "/code-review",
                "/build-fix",
                "/test-coverage",
                "/refactor-clean",
                "/update-docs",
                "/update-codemaps",
            ]
        );
    }
}
