//! @acp:module "Question Choices"
//! @acp:summary "Choice lists for every question as pure functions of the answers so far"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Dependent lists read earlier answers only through the active-branch
//! accessors on [`PartialAnswers`], so a value left behind on an abandoned
//! branch never changes what is offered.

use crate::answers::*;
use crate::prompt::Choice;

pub fn project_types() -> Vec<Choice<ProjectType>> {
    vec![
        Choice::new("Full Stack Web Application", ProjectType::Fullstack),
        Choice::new("Frontend Only (SPA/Static)", ProjectType::Frontend),
        Choice::new("Backend/API Only", ProjectType::Backend),
        Choice::new("Mobile Application", ProjectType::Mobile),
        Choice::new("Library/Package", ProjectType::Library),
        Choice::new("Monorepo (Multiple packages)", ProjectType::Monorepo),
    ]
}

pub fn project_goals() -> Vec<Choice<ProjectGoal>> {
    vec![
        Choice::new("MVP / Prototype (move fast)", ProjectGoal::Mvp),
        Choice::new("Production Application (quality focus)", ProjectGoal::Production),
        Choice::new("Learning / Experimentation", ProjectGoal::Learning),
        Choice::new("Enterprise (compliance, scalability)", ProjectGoal::Enterprise),
    ]
}

pub fn frontend_frameworks() -> Vec<Choice<FrontendFramework>> {
    vec![
        Choice::new("React", FrontendFramework::React),
        Choice::new("Vue", FrontendFramework::Vue),
        Choice::new("Svelte", FrontendFramework::Svelte),
        Choice::new("Angular", FrontendFramework::Angular),
        Choice::new("Vanilla JavaScript/TypeScript", FrontendFramework::Vanilla),
    ]
}

/// Meta-frameworks that build on the chosen frontend framework
pub fn meta_frameworks(answers: &PartialAnswers) -> Vec<Choice<MetaFramework>> {
    let mut choices = match answers.active_frontend_framework() {
        Some(FrontendFramework::React) => vec![
            Choice::new("Next.js", MetaFramework::Nextjs),
            Choice::new("Remix", MetaFramework::Remix),
            Choice::new("Astro", MetaFramework::Astro),
        ],
        Some(FrontendFramework::Vue) => vec![
            Choice::new("Nuxt", MetaFramework::Nuxt),
            Choice::new("Astro", MetaFramework::Astro),
        ],
        Some(FrontendFramework::Svelte) => vec![
            Choice::new("SvelteKit", MetaFramework::Sveltekit),
            Choice::new("Astro", MetaFramework::Astro),
        ],
        _ => Vec::new(),
    };
    choices.push(Choice::new("None", MetaFramework::None));
    choices
}

pub fn styling_approaches() -> Vec<Choice<StylingApproach>> {
    vec![
        Choice::new("Tailwind CSS", StylingApproach::Tailwind),
        Choice::new("CSS Modules", StylingApproach::CssModules),
        Choice::new("styled-components / Emotion", StylingApproach::StyledComponents),
        Choice::new("SCSS/Sass", StylingApproach::Scss),
        Choice::new("Vanilla CSS", StylingApproach::VanillaCss),
    ]
}

pub fn backend_languages() -> Vec<Choice<BackendLanguage>> {
    vec![
        Choice::new("TypeScript/JavaScript (Node.js)", BackendLanguage::TypeScript),
        Choice::new("Go", BackendLanguage::Go),
        Choice::new("Rust", BackendLanguage::Rust),
        Choice::new("Java/Kotlin", BackendLanguage::Java),
        Choice::new("Python", BackendLanguage::Python),
    ]
}

pub fn backend_frameworks(answers: &PartialAnswers) -> Vec<Choice<BackendFramework>> {
    match answers.active_backend_language() {
        Some(BackendLanguage::TypeScript) => vec![
            Choice::new("Express", BackendFramework::Express),
            Choice::new("Fastify", BackendFramework::Fastify),
            Choice::new("NestJS", BackendFramework::Nestjs),
            Choice::new("Hono", BackendFramework::Hono),
            Choice::new("None (raw Node.js)", BackendFramework::None),
        ],
        Some(BackendLanguage::Go) => vec![
            Choice::new("Gin", BackendFramework::Gin),
            Choice::new("Standard library (net/http)", BackendFramework::None),
        ],
        Some(BackendLanguage::Rust) => vec![
            Choice::new("Axum", BackendFramework::Axum),
            Choice::new("None", BackendFramework::None),
        ],
        Some(BackendLanguage::Java) => vec![
            Choice::new("Spring Boot", BackendFramework::Spring),
            Choice::new("None", BackendFramework::None),
        ],
        Some(BackendLanguage::Python) => vec![
            Choice::new("FastAPI", BackendFramework::Fastapi),
            Choice::new("Django", BackendFramework::Django),
            Choice::new("None", BackendFramework::None),
        ],
        _ => vec![Choice::new("None", BackendFramework::None)],
    }
}

pub fn databases() -> Vec<Choice<Database>> {
    vec![
        Choice::new("PostgreSQL", Database::Postgresql),
        Choice::new("MySQL", Database::Mysql),
        Choice::new("MongoDB", Database::Mongodb),
        Choice::new("SQLite", Database::Sqlite),
        Choice::new("None / Not decided yet", Database::None),
    ]
}

/// Clients/ORMs that fit the chosen language and database
pub fn database_clients(answers: &PartialAnswers) -> Vec<Choice<DatabaseClient>> {
    let language = answers.active_backend_language();
    let database = answers.active_database();
    let mut choices = Vec::new();

    if database == Some(Database::Postgresql) {
        choices.push(Choice::new("Supabase", DatabaseClient::Supabase));
    }
    if language == Some(BackendLanguage::TypeScript) && database != Some(Database::Mongodb) {
        choices.push(Choice::new("Prisma", DatabaseClient::Prisma));
        choices.push(Choice::new("Drizzle", DatabaseClient::Drizzle));
        choices.push(Choice::new("TypeORM", DatabaseClient::Typeorm));
    }
    if language == Some(BackendLanguage::Python) {
        choices.push(Choice::new("SQLAlchemy", DatabaseClient::Sqlalchemy));
    }
    choices.push(Choice::new("Raw SQL / Native driver", DatabaseClient::Raw));
    choices
}

pub fn testing_approaches() -> Vec<Choice<TestingApproach>> {
    vec![
        Choice::new("TDD (Test-Driven Development)", TestingApproach::Tdd),
        Choice::new("Standard (write tests alongside code)", TestingApproach::Standard),
        Choice::new("Minimal (critical paths only)", TestingApproach::Minimal),
        Choice::new("None (skip testing setup)", TestingApproach::None),
    ]
}

/// Test runners for the backend language; JavaScript runners otherwise
pub fn test_frameworks(answers: &PartialAnswers) -> Vec<Choice<TestFramework>> {
    match answers.active_backend_language() {
        Some(BackendLanguage::Python) => vec![
            Choice::new("pytest", TestFramework::Pytest),
            Choice::new("Built-in unittest", TestFramework::Builtin),
        ],
        Some(BackendLanguage::Go) => vec![Choice::new("Go testing (built-in)", TestFramework::GoTest)],
        Some(BackendLanguage::Rust) => {
            vec![Choice::new("Cargo test (built-in)", TestFramework::CargoTest)]
        }
        Some(BackendLanguage::Java) => vec![
            Choice::new("JUnit", TestFramework::Junit),
            Choice::new("Built-in", TestFramework::Builtin),
        ],
        _ => vec![
            Choice::new("Vitest", TestFramework::Vitest),
            Choice::new("Jest", TestFramework::Jest),
        ],
    }
}

pub fn e2e_frameworks() -> Vec<Choice<E2eFramework>> {
    vec![
        Choice::new("Playwright", E2eFramework::Playwright),
        Choice::new("Cypress", E2eFramework::Cypress),
        Choice::new("None", E2eFramework::None),
    ]
}

pub fn coverage_targets() -> Vec<Choice<CoverageTarget>> {
    vec![
        Choice::new("80% (high quality)", CoverageTarget::Eighty),
        Choice::new("60% (balanced)", CoverageTarget::Sixty),
        Choice::new("40% (essential coverage)", CoverageTarget::Forty),
        Choice::new("No target", CoverageTarget::None),
    ]
}

pub fn security_levels() -> Vec<Choice<SecurityLevel>> {
    vec![
        Choice::new(
            "High (strict validation, security reviews required)",
            SecurityLevel::High,
        ),
        Choice::new("Medium (standard best practices)", SecurityLevel::Medium),
        Choice::new(
            "Low (learning/prototype, minimal restrictions)",
            SecurityLevel::Low,
        ),
    ]
}

/// Auth providers; Supabase Auth only alongside the Supabase client
pub fn auth_providers(answers: &PartialAnswers) -> Vec<Choice<AuthProvider>> {
    let mut choices = Vec::new();
    if answers.active_database_client() == Some(DatabaseClient::Supabase) {
        choices.push(Choice::new("Supabase Auth", AuthProvider::Supabase));
    }
    choices.extend([
        Choice::new("NextAuth.js", AuthProvider::Nextauth),
        Choice::new("Clerk", AuthProvider::Clerk),
        Choice::new("Auth0", AuthProvider::Auth0),
        Choice::new("Custom implementation", AuthProvider::Custom),
        Choice::new("None / Not needed", AuthProvider::None),
    ]);
    choices
}

pub fn deployment_platforms() -> Vec<Choice<DeploymentPlatform>> {
    vec![
        Choice::new("Vercel", DeploymentPlatform::Vercel),
        Choice::new("Railway", DeploymentPlatform::Railway),
        Choice::new("Cloudflare", DeploymentPlatform::Cloudflare),
        Choice::new("AWS", DeploymentPlatform::Aws),
        Choice::new("Docker / Self-hosted", DeploymentPlatform::Docker),
        Choice::new("Not decided yet", DeploymentPlatform::None),
    ]
}

pub fn cicd_platforms() -> Vec<Choice<CicdPlatform>> {
    vec![
        Choice::new("GitHub Actions", CicdPlatform::GithubActions),
        Choice::new("GitLab CI", CicdPlatform::GitlabCi),
        Choice::new("None / Not needed", CicdPlatform::None),
    ]
}

/// Integration identifiers offered for the current stack
pub fn integrations(answers: &PartialAnswers) -> Vec<Choice<String>> {
    let mut choices: Vec<Choice<String>> = [
        ("GitHub (PRs, issues, repos)", "github"),
        ("Context7 (live documentation)", "context7"),
        ("Sequential Thinking (reasoning)", "sequential-thinking"),
        ("Memory (persistent memory)", "memory"),
        ("Firecrawl (web scraping)", "firecrawl"),
        ("Magic UI (UI components)", "magic"),
    ]
    .into_iter()
    .map(|(label, id)| Choice::new(label, id.to_string()))
    .collect();

    if answers.active_database_client() == Some(DatabaseClient::Supabase) {
        choices.push(Choice::new("Supabase (database ops)", "supabase".to_string()));
    }
    match answers.deployment_platform {
        Some(DeploymentPlatform::Vercel) => {
            choices.push(Choice::new("Vercel (deployments)", "vercel".to_string()));
        }
        Some(DeploymentPlatform::Railway) => {
            choices.push(Choice::new("Railway (deployments)", "railway".to_string()));
        }
        Some(DeploymentPlatform::Cloudflare) => {
            choices.push(Choice::new("Cloudflare Docs", "cloudflare-docs".to_string()));
            choices.push(Choice::new(
                "Cloudflare Workers",
                "cloudflare-workers-builds".to_string(),
            ));
        }
        _ => {}
    }
    choices.push(Choice::new("ClickHouse (analytics)", "clickhouse".to_string()));
    choices
}

pub fn team_sizes() -> Vec<Choice<TeamSize>> {
    vec![
        Choice::new("Solo developer", TeamSize::Solo),
        Choice::new("Small team (2-5)", TeamSize::Small),
        Choice::new("Medium team (6-15)", TeamSize::Medium),
        Choice::new("Large team (15+)", TeamSize::Large),
    ]
}

pub fn git_workflows() -> Vec<Choice<GitWorkflow>> {
    vec![
        Choice::new(
            "Feature branches (branch per feature/fix)",
            GitWorkflow::FeatureBranches,
        ),
        Choice::new(
            "Trunk-based (small, frequent commits to main)",
            GitWorkflow::TrunkBased,
        ),
        Choice::new(
            "GitFlow (develop, release, hotfix branches)",
            GitWorkflow::Gitflow,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(choices: &[Choice<T>]) -> Vec<T> {
        choices.iter().map(|c| c.value).collect()
    }

    fn typescript_backend() -> PartialAnswers {
        PartialAnswers {
            project_type: Some(ProjectType::Fullstack),
            has_backend: Some(true),
            backend_language: Some(BackendLanguage::TypeScript),
            database: Some(Database::Postgresql),
            ..Default::default()
        }
    }

    #[test]
    fn test_meta_frameworks_follow_framework() {
        let mut answers = PartialAnswers {
            has_frontend: Some(true),
            frontend_framework: Some(FrontendFramework::Vue),
            ..Default::default()
        };
        assert_eq!(
            values(&meta_frameworks(&answers)),
            vec![MetaFramework::Nuxt, MetaFramework::Astro, MetaFramework::None]
        );

        answers.frontend_framework = Some(FrontendFramework::Angular);
        assert_eq!(values(&meta_frameworks(&answers)), vec![MetaFramework::None]);
    }

    #[test]
    fn test_database_clients_for_typescript_postgres() {
        assert_eq!(
            values(&database_clients(&typescript_backend())),
            vec![
                DatabaseClient::Supabase,
                DatabaseClient::Prisma,
                DatabaseClient::Drizzle,
                DatabaseClient::Typeorm,
                DatabaseClient::Raw,
            ]
        );
    }

    #[test]
    fn test_database_clients_without_orm_for_mongodb() {
        let mut answers = typescript_backend();
        answers.database = Some(Database::Mongodb);
        assert_eq!(values(&database_clients(&answers)), vec![DatabaseClient::Raw]);
    }

    #[test]
    fn test_test_frameworks_default_to_javascript_without_backend() {
        let mut answers = typescript_backend();
        answers.backend_language = Some(BackendLanguage::Go);
        answers.has_backend = Some(false);
        assert_eq!(
            values(&test_frameworks(&answers)),
            vec![TestFramework::Vitest, TestFramework::Jest]
        );
    }

    #[test]
    fn test_supabase_auth_requires_active_supabase_client() {
        let mut answers = typescript_backend();
        answers.database_client = Some(DatabaseClient::Supabase);
        assert_eq!(auth_providers(&answers)[0].value, AuthProvider::Supabase);

        answers.database = Some(Database::None);
        assert_eq!(auth_providers(&answers)[0].value, AuthProvider::Nextauth);
    }

    #[test]
    fn test_integrations_add_platform_entries() {
        let answers = PartialAnswers {
            deployment_platform: Some(DeploymentPlatform::Cloudflare),
            ..Default::default()
        };
        let ids: Vec<String> = integrations(&answers).into_iter().map(|c| c.value).collect();
        assert!(ids.contains(&"cloudflare-docs".to_string()));
        assert!(ids.contains(&"cloudflare-workers-builds".to_string()));
        assert!(!ids.contains(&"vercel".to_string()));
        assert_eq!(ids.last().map(String::as_str), Some("clickhouse"));
    }
}
