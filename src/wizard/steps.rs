//! @acp:module "Question Steps"
//! @acp:summary "The ordered wizard question list with skip predicates and defaults"
//! @acp:domain cli
//! @acp:layer logic

use super::choices;
use super::engine::{AskContext, AskFn, Section, Step};
use super::validate_project_name;
use crate::answers::*;
use crate::error::Result;
use crate::prompt::{self, Choice, Navigation, Prompter};

pub const PROJECT: Section = Section {
    index: 1,
    title: "Project Configuration",
};
pub const FRONTEND: Section = Section {
    index: 2,
    title: "Frontend Stack",
};
pub const BACKEND: Section = Section {
    index: 3,
    title: "Backend Stack",
};
pub const TESTING: Section = Section {
    index: 4,
    title: "Testing Strategy",
};
pub const SECURITY: Section = Section {
    index: 5,
    title: "Security",
};
pub const DEVOPS: Section = Section {
    index: 6,
    title: "DevOps & Integrations",
};
pub const WORKFLOW: Section = Section {
    index: 7,
    title: "Workflow",
};

const DEFAULT_PROJECT_NAME: &str = "my-project";
const DEFAULT_INTEGRATIONS: [&str; 2] = ["github", "context7"];

type Ctx<'a> = AskContext<'a, PartialAnswers>;
type Asked = Result<Navigation<AnswerValue>>;

/// Every wizard question in dependency order
pub fn question_steps() -> Vec<Step<PartialAnswers>> {
    vec![
        // Project
        step("projectName", PROJECT, ask_project_name),
        step("projectType", PROJECT, |p, cx| {
            choose(
                p,
                cx,
                "What type of project is this?",
                &choices::project_types(),
                |a| a.project_type,
                None,
                AnswerValue::ProjectType,
            )
        }),
        step("projectGoal", PROJECT, |p, cx| {
            choose(
                p,
                cx,
                "What is the primary goal of this project?",
                &choices::project_goals(),
                |a| a.project_goal,
                None,
                AnswerValue::ProjectGoal,
            )
        }),
        // Frontend
        step("hasFrontend", FRONTEND, |p, cx| {
            yes_no(
                p,
                cx,
                "Does your project have a frontend?",
                |a| a.has_frontend,
                true,
                AnswerValue::HasFrontend,
            )
        })
        .skip_when(|a| a.project_type == Some(ProjectType::Backend)),
        step("frontendFramework", FRONTEND, |p, cx| {
            choose(
                p,
                cx,
                "Which frontend framework are you using?",
                &choices::frontend_frameworks(),
                |a| a.frontend_framework,
                None,
                AnswerValue::FrontendFramework,
            )
        })
        .skip_when(|a| !a.frontend_active()),
        step("metaFramework", FRONTEND, |p, cx| {
            choose(
                p,
                cx,
                "Are you using a meta-framework?",
                &choices::meta_frameworks(cx.answers),
                |a| a.meta_framework,
                None,
                AnswerValue::MetaFramework,
            )
        })
        .skip_when(|a| !a.frontend_active()),
        step("stylingApproach", FRONTEND, |p, cx| {
            choose(
                p,
                cx,
                "What styling approach are you using?",
                &choices::styling_approaches(),
                |a| a.styling_approach,
                None,
                AnswerValue::StylingApproach,
            )
        })
        .skip_when(|a| !a.frontend_active()),
        // Backend
        step("hasBackend", BACKEND, |p, cx| {
            yes_no(
                p,
                cx,
                "Does your project have a backend/API?",
                |a| a.has_backend,
                true,
                AnswerValue::HasBackend,
            )
        })
        .skip_when(|a| a.project_type == Some(ProjectType::Frontend)),
        step("backendLanguage", BACKEND, |p, cx| {
            choose(
                p,
                cx,
                "What is your primary backend language?",
                &choices::backend_languages(),
                |a| a.backend_language,
                None,
                AnswerValue::BackendLanguage,
            )
        })
        .skip_when(|a| !a.backend_active()),
        step("backendFramework", BACKEND, |p, cx| {
            choose(
                p,
                cx,
                "Which backend framework are you using?",
                &choices::backend_frameworks(cx.answers),
                |a| a.backend_framework,
                None,
                AnswerValue::BackendFramework,
            )
        })
        .skip_when(|a| !a.backend_active()),
        step("database", BACKEND, |p, cx| {
            choose(
                p,
                cx,
                "What database are you using?",
                &choices::databases(),
                |a| a.database,
                None,
                AnswerValue::Database,
            )
        })
        .skip_when(|a| !a.backend_active()),
        step("databaseClient", BACKEND, |p, cx| {
            choose(
                p,
                cx,
                "What database client/ORM are you using?",
                &choices::database_clients(cx.answers),
                |a| a.database_client,
                None,
                AnswerValue::DatabaseClient,
            )
        })
        .skip_when(|a| !a.database_active()),
        // Testing
        step("testingApproach", TESTING, |p, cx| {
            let computed = if cx.answers.project_goal == Some(ProjectGoal::Enterprise) {
                TestingApproach::Tdd
            } else {
                TestingApproach::Standard
            };
            choose(
                p,
                cx,
                "What is your testing approach?",
                &choices::testing_approaches(),
                |a| a.testing_approach,
                Some(computed),
                AnswerValue::TestingApproach,
            )
        }),
        step("testFramework", TESTING, |p, cx| {
            choose(
                p,
                cx,
                "Which test framework will you use?",
                &choices::test_frameworks(cx.answers),
                |a| a.test_framework,
                None,
                AnswerValue::TestFramework,
            )
        })
        .skip_when(|a| !a.testing_active()),
        step("e2eFramework", TESTING, |p, cx| {
            choose(
                p,
                cx,
                "Do you want E2E testing?",
                &choices::e2e_frameworks(),
                |a| a.e2e_framework,
                None,
                AnswerValue::E2eFramework,
            )
        })
        .skip_when(|a| !a.e2e_active()),
        step("coverageTarget", TESTING, |p, cx| {
            let computed = if cx.answers.project_goal == Some(ProjectGoal::Enterprise) {
                CoverageTarget::Eighty
            } else {
                CoverageTarget::Sixty
            };
            choose(
                p,
                cx,
                "What is your target code coverage?",
                &choices::coverage_targets(),
                |a| a.coverage_target,
                Some(computed),
                AnswerValue::CoverageTarget,
            )
        })
        .skip_when(|a| !a.testing_active()),
        // Security
        step("securityLevel", SECURITY, |p, cx| {
            let computed = match cx.answers.project_goal {
                Some(ProjectGoal::Enterprise) => SecurityLevel::High,
                Some(ProjectGoal::Production) => SecurityLevel::Medium,
                _ => SecurityLevel::Low,
            };
            choose(
                p,
                cx,
                "What security level does your project require?",
                &choices::security_levels(),
                |a| a.security_level,
                Some(computed),
                AnswerValue::SecurityLevel,
            )
        }),
        step("authProvider", SECURITY, |p, cx| {
            choose(
                p,
                cx,
                "What authentication provider are you using?",
                &choices::auth_providers(cx.answers),
                |a| a.auth_provider,
                None,
                AnswerValue::AuthProvider,
            )
        }),
        step("hasPayments", SECURITY, |p, cx| {
            yes_no(
                p,
                cx,
                "Will your app handle payments (Stripe, etc.)?",
                |a| a.has_payments,
                false,
                AnswerValue::HasPayments,
            )
        }),
        step("hasBlockchain", SECURITY, |p, cx| {
            yes_no(
                p,
                cx,
                "Will your app integrate with blockchain/Web3?",
                |a| a.has_blockchain,
                false,
                AnswerValue::HasBlockchain,
            )
        }),
        // DevOps
        step("deploymentPlatform", DEVOPS, |p, cx| {
            choose(
                p,
                cx,
                "Where will you deploy your application?",
                &choices::deployment_platforms(),
                |a| a.deployment_platform,
                None,
                AnswerValue::DeploymentPlatform,
            )
        }),
        step("cicdPlatform", DEVOPS, |p, cx| {
            choose(
                p,
                cx,
                "What CI/CD platform will you use?",
                &choices::cicd_platforms(),
                |a| a.cicd_platform,
                None,
                AnswerValue::CicdPlatform,
            )
        }),
        step("integrations", DEVOPS, ask_integrations),
        // Workflow
        step("teamSize", WORKFLOW, |p, cx| {
            choose(
                p,
                cx,
                "What is your team size?",
                &choices::team_sizes(),
                |a| a.team_size,
                None,
                AnswerValue::TeamSize,
            )
        }),
        step("gitWorkflow", WORKFLOW, |p, cx| {
            let computed = if cx.answers.team_size == Some(TeamSize::Solo) {
                GitWorkflow::TrunkBased
            } else {
                GitWorkflow::FeatureBranches
            };
            choose(
                p,
                cx,
                "What git workflow do you follow?",
                &choices::git_workflows(),
                |a| a.git_workflow,
                Some(computed),
                AnswerValue::GitWorkflow,
            )
        }),
        step("requireCodeReview", WORKFLOW, |p, cx| {
            yes_no(
                p,
                cx,
                "Do you want Claude to follow code review guidelines?",
                |a| a.require_code_review,
                cx.answers.team_size != Some(TeamSize::Solo),
                AnswerValue::RequireCodeReview,
            )
        }),
        step("enableHooks", WORKFLOW, |p, cx| {
            yes_no(
                p,
                cx,
                "Enable Claude Code hooks (auto-format, type-checking, git safeguards)?",
                |a| a.enable_hooks,
                cx.answers.project_goal != Some(ProjectGoal::Learning),
                AnswerValue::EnableHooks,
            )
        }),
    ]
}

fn step(key: &'static str, section: Section, ask: AskFn<PartialAnswers>) -> Step<PartialAnswers> {
    Step::new(key, section, ask)
}

fn ask_project_name(p: &mut dyn Prompter, cx: &Ctx<'_>) -> Asked {
    let default = cx
        .answers
        .project_name
        .as_deref()
        .or_else(|| cx.previous.and_then(|prev| prev.project_name.as_deref()))
        .unwrap_or(DEFAULT_PROJECT_NAME);

    Ok(prompt::text(
        p,
        "What is your project name?",
        Some(default),
        &validate_project_name,
        cx.is_first,
    )?
    .map(AnswerValue::ProjectName))
}

fn ask_integrations(p: &mut dyn Prompter, cx: &Ctx<'_>) -> Asked {
    let checked: Vec<String> = cx
        .answers
        .integrations
        .clone()
        .or_else(|| cx.previous.and_then(|prev| prev.integrations.clone()))
        .unwrap_or_else(|| DEFAULT_INTEGRATIONS.iter().map(|s| s.to_string()).collect());

    Ok(prompt::multi_select(
        p,
        "Which MCP integrations would you like to enable? (space to select)",
        &choices::integrations(cx.answers),
        |id: &String| checked.contains(id),
        cx.is_first,
    )?
    .map(AnswerValue::Integrations))
}

/// Single choice with the held > previous > computed default precedence
fn choose<T: Copy + PartialEq>(
    p: &mut dyn Prompter,
    cx: &Ctx<'_>,
    message: &str,
    choices: &[Choice<T>],
    field: fn(&PartialAnswers) -> Option<T>,
    computed: Option<T>,
    wrap: fn(T) -> AnswerValue,
) -> Asked {
    let candidates = [field(cx.answers), cx.previous.and_then(field), computed];
    let default = candidates
        .into_iter()
        .flatten()
        .find_map(|wanted| choices.iter().position(|c| c.value == wanted))
        .unwrap_or(0);

    Ok(prompt::select(p, message, choices, default, cx.is_first)?.map(wrap))
}

fn yes_no(
    p: &mut dyn Prompter,
    cx: &Ctx<'_>,
    message: &str,
    field: fn(&PartialAnswers) -> Option<bool>,
    computed: bool,
    wrap: fn(bool) -> AnswerValue,
) -> Asked {
    let default = field(cx.answers)
        .or_else(|| cx.previous.and_then(field))
        .unwrap_or(computed);

    Ok(prompt::confirm(p, message, default, cx.is_first)?.map(wrap))
}
