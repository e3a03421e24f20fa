//! @acp:module "Selection"
//! @acp:summary "Maps finalized answers to the artifacts to install"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Every category has its own rule module exposing one pure function of
//! [`Answers`]. [`map_answers_to_components`] runs them all.

pub mod agents;
pub mod commands;
pub mod hooks;
pub mod integrations;
pub mod rules;
pub mod skills;

use serde::{Deserialize, Serialize};

use crate::answers::Answers;

pub use agents::select_agents;
pub use commands::select_commands;
pub use hooks::{select_hooks, HookEvent, HookKind, HookSelection};
pub use integrations::{
    integration_config, select_integrations, IntegrationConfig, IntegrationSelection,
    INTEGRATION_IDS,
};
pub use rules::{select_rules, RuleSelection};
pub use skills::select_skills;

/// An agent, command or skill picked for installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSelection {
    /// Display name
    pub name: String,
    /// File (or directory) name inside the category's template folder
    pub file: String,
    /// Why it was picked
    pub reason: String,
}

impl ComponentSelection {
    pub(crate) fn new(name: &str, file: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            reason: reason.into(),
        }
    }
}

/// Everything picked for one set of answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedComponents {
    pub agents: Vec<ComponentSelection>,
    pub commands: Vec<ComponentSelection>,
    pub skills: Vec<ComponentSelection>,
    pub rules: Vec<RuleSelection>,
    pub hooks: Vec<HookSelection>,
    pub integrations: Vec<IntegrationSelection>,
}

impl SelectedComponents {
    /// Total number of picked artifacts across categories
    pub fn len(&self) -> usize {
        self.agents.len()
            + self.commands.len()
            + self.skills.len()
            + self.rules.len()
            + self.hooks.len()
            + self.integrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run every selection rule against the answers
pub fn map_answers_to_components(answers: &Answers) -> SelectedComponents {
    SelectedComponents {
        agents: select_agents(answers),
        commands: select_commands(answers),
        skills: select_skills(answers),
        rules: select_rules(answers),
        hooks: select_hooks(answers),
        integrations: select_integrations(answers),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::answers::*;

    /// Solo MVP, full stack TypeScript, no extras
    pub fn baseline() -> Answers {
        Answers {
            project_name: "demo".to_string(),
            project_type: ProjectType::Fullstack,
            project_goal: ProjectGoal::Mvp,
            has_frontend: true,
            frontend_framework: FrontendFramework::React,
            meta_framework: MetaFramework::Nextjs,
            styling_approach: StylingApproach::Tailwind,
            has_backend: true,
            backend_language: BackendLanguage::TypeScript,
            backend_framework: BackendFramework::Express,
            database: Database::Postgresql,
            database_client: DatabaseClient::Prisma,
            testing_approach: TestingApproach::Standard,
            test_framework: TestFramework::Vitest,
            e2e_framework: E2eFramework::None,
            coverage_target: CoverageTarget::Sixty,
            security_level: SecurityLevel::Low,
            auth_provider: AuthProvider::None,
            has_payments: false,
            has_blockchain: false,
            deployment_platform: DeploymentPlatform::Vercel,
            cicd_platform: CicdPlatform::GithubActions,
            integrations: vec!["github".to_string()],
            team_size: TeamSize::Solo,
            git_workflow: GitWorkflow::TrunkBased,
            require_code_review: false,
            enable_hooks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_is_deterministic() {
        let answers = fixtures::baseline();
        assert_eq!(
            map_answers_to_components(&answers),
            map_answers_to_components(&answers)
        );
    }

    #[test]
    fn test_len_counts_every_category() {
        let components = map_answers_to_components(&fixtures::baseline());
        let expected = components.agents.len()
            + components.commands.len()
            + components.skills.len()
            + components.rules.len()
            + components.hooks.len()
            + components.integrations.len();
        assert_eq!(components.len(), expected);
        assert!(!components.is_empty());
    }
}
