//! @acp:module "Answer Model"
//! @acp:summary "Accreted wizard answers and their finalization into a complete record"
//! @acp:domain cli
//! @acp:layer model
//!
//! [`PartialAnswers`] is what the question sequencer fills in one key at a
//! time; fields may be missing or stale while the user navigates back and
//! forth. [`PartialAnswers::finalize`] turns it into [`Answers`], where every
//! field is present and fields on inactive branches hold their canonical
//! "not applicable" value.

pub mod values;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};
pub use values::*;

/// Generates the question key, the answer value and the partial record from one field list
macro_rules! answer_model {
    ($($field:ident: $ty:ty => $variant:ident, $key:literal;)+) => {
        /// Identifies one wizard question
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum QuestionKey {
            $($variant,)+
        }

        impl QuestionKey {
            /// Serialized field name of the question
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(QuestionKey::$variant => $key,)+
                }
            }
        }

        /// A single answer, tagged with the question it belongs to
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnswerValue {
            $($variant($ty),)+
        }

        impl AnswerValue {
            pub fn key(&self) -> QuestionKey {
                match self {
                    $(AnswerValue::$variant(_) => QuestionKey::$variant,)+
                }
            }
        }

        /// Answers accreted so far; any field may still be missing
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct PartialAnswers {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl PartialAnswers {
            /// Store an answer under its key, replacing any earlier value
            pub fn apply(&mut self, value: AnswerValue) {
                match value {
                    $(AnswerValue::$variant(v) => self.$field = Some(v),)+
                }
            }

            /// Take every field `other` has set, keeping the rest
            pub fn overlay(mut self, other: PartialAnswers) -> Self {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )+
                self
            }
        }
    };
}

answer_model! {
    project_name: String => ProjectName, "projectName";
    project_type: ProjectType => ProjectType, "projectType";
    project_goal: ProjectGoal => ProjectGoal, "projectGoal";
    has_frontend: bool => HasFrontend, "hasFrontend";
    frontend_framework: FrontendFramework => FrontendFramework, "frontendFramework";
    meta_framework: MetaFramework => MetaFramework, "metaFramework";
    styling_approach: StylingApproach => StylingApproach, "stylingApproach";
    has_backend: bool => HasBackend, "hasBackend";
    backend_language: BackendLanguage => BackendLanguage, "backendLanguage";
    backend_framework: BackendFramework => BackendFramework, "backendFramework";
    database: Database => Database, "database";
    database_client: DatabaseClient => DatabaseClient, "databaseClient";
    testing_approach: TestingApproach => TestingApproach, "testingApproach";
    test_framework: TestFramework => TestFramework, "testFramework";
    e2e_framework: E2eFramework => E2eFramework, "e2eFramework";
    coverage_target: CoverageTarget => CoverageTarget, "coverageTarget";
    security_level: SecurityLevel => SecurityLevel, "securityLevel";
    auth_provider: AuthProvider => AuthProvider, "authProvider";
    has_payments: bool => HasPayments, "hasPayments";
    has_blockchain: bool => HasBlockchain, "hasBlockchain";
    deployment_platform: DeploymentPlatform => DeploymentPlatform, "deploymentPlatform";
    cicd_platform: CicdPlatform => CicdPlatform, "cicdPlatform";
    integrations: Vec<String> => Integrations, "integrations";
    team_size: TeamSize => TeamSize, "teamSize";
    git_workflow: GitWorkflow => GitWorkflow, "gitWorkflow";
    require_code_review: bool => RequireCodeReview, "requireCodeReview";
    enable_hooks: bool => EnableHooks, "enableHooks";
}

impl PartialAnswers {
    /// Frontend questions apply: not a backend-only project and the user said yes
    pub fn frontend_active(&self) -> bool {
        self.project_type != Some(ProjectType::Backend) && self.has_frontend == Some(true)
    }

    /// Backend questions apply: not a frontend-only project and the user said yes
    pub fn backend_active(&self) -> bool {
        self.project_type != Some(ProjectType::Frontend) && self.has_backend == Some(true)
    }

    pub fn active_frontend_framework(&self) -> Option<FrontendFramework> {
        self.frontend_framework.filter(|_| self.frontend_active())
    }

    pub fn active_backend_language(&self) -> Option<BackendLanguage> {
        self.backend_language.filter(|_| self.backend_active())
    }

    pub fn active_database(&self) -> Option<Database> {
        self.database.filter(|_| self.backend_active())
    }

    /// A database is chosen and it is not "none"
    pub fn database_active(&self) -> bool {
        matches!(self.active_database(), Some(db) if db != Database::None)
    }

    /// Database client, ignoring stale values left behind by go-back
    pub fn active_database_client(&self) -> Option<DatabaseClient> {
        self.database_client.filter(|_| self.database_active())
    }

    pub fn testing_active(&self) -> bool {
        matches!(self.testing_approach, Some(t) if t != TestingApproach::None)
    }

    /// E2E applies to tdd/standard testing of a project with a frontend
    pub fn e2e_active(&self) -> bool {
        matches!(
            self.testing_approach,
            Some(TestingApproach::Tdd) | Some(TestingApproach::Standard)
        ) && self.frontend_active()
    }

    /// Build the complete answer record, defaulting every inactive branch
    pub fn finalize(self) -> Result<Answers> {
        let frontend = self.frontend_active();
        let backend = self.backend_active();
        let database_active = self.database_active();
        let testing = self.testing_active();
        let e2e = self.e2e_active();

        let (frontend_framework, meta_framework, styling_approach) = if frontend {
            (
                require(self.frontend_framework, QuestionKey::FrontendFramework)?,
                require(self.meta_framework, QuestionKey::MetaFramework)?,
                require(self.styling_approach, QuestionKey::StylingApproach)?,
            )
        } else {
            (
                FrontendFramework::None,
                MetaFramework::None,
                StylingApproach::VanillaCss,
            )
        };

        let (backend_language, backend_framework, database) = if backend {
            (
                require(self.backend_language, QuestionKey::BackendLanguage)?,
                require(self.backend_framework, QuestionKey::BackendFramework)?,
                require(self.database, QuestionKey::Database)?,
            )
        } else {
            (BackendLanguage::None, BackendFramework::None, Database::None)
        };

        let database_client = if database_active {
            require(self.database_client, QuestionKey::DatabaseClient)?
        } else {
            DatabaseClient::None
        };

        let (test_framework, coverage_target) = if testing {
            (
                require(self.test_framework, QuestionKey::TestFramework)?,
                require(self.coverage_target, QuestionKey::CoverageTarget)?,
            )
        } else {
            (TestFramework::None, CoverageTarget::None)
        };

        let e2e_framework = if e2e {
            require(self.e2e_framework, QuestionKey::E2eFramework)?
        } else {
            E2eFramework::None
        };

        Ok(Answers {
            project_name: require(self.project_name, QuestionKey::ProjectName)?,
            project_type: require(self.project_type, QuestionKey::ProjectType)?,
            project_goal: require(self.project_goal, QuestionKey::ProjectGoal)?,
            has_frontend: frontend,
            frontend_framework,
            meta_framework,
            styling_approach,
            has_backend: backend,
            backend_language,
            backend_framework,
            database,
            database_client,
            testing_approach: require(self.testing_approach, QuestionKey::TestingApproach)?,
            test_framework,
            e2e_framework,
            coverage_target,
            security_level: require(self.security_level, QuestionKey::SecurityLevel)?,
            auth_provider: require(self.auth_provider, QuestionKey::AuthProvider)?,
            has_payments: require(self.has_payments, QuestionKey::HasPayments)?,
            has_blockchain: require(self.has_blockchain, QuestionKey::HasBlockchain)?,
            deployment_platform: require(
                self.deployment_platform,
                QuestionKey::DeploymentPlatform,
            )?,
            cicd_platform: require(self.cicd_platform, QuestionKey::CicdPlatform)?,
            integrations: require(self.integrations, QuestionKey::Integrations)?,
            team_size: require(self.team_size, QuestionKey::TeamSize)?,
            git_workflow: require(self.git_workflow, QuestionKey::GitWorkflow)?,
            require_code_review: require(
                self.require_code_review,
                QuestionKey::RequireCodeReview,
            )?,
            enable_hooks: require(self.enable_hooks, QuestionKey::EnableHooks)?,
        })
    }
}

fn require<T>(value: Option<T>, key: QuestionKey) -> Result<T> {
    value.ok_or(WizardError::Incomplete(key.as_str()))
}

/// Complete, finalized answers; read-only input of the selection rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    // Project
    pub project_name: String,
    pub project_type: ProjectType,
    pub project_goal: ProjectGoal,

    // Frontend
    pub has_frontend: bool,
    pub frontend_framework: FrontendFramework,
    pub meta_framework: MetaFramework,
    pub styling_approach: StylingApproach,

    // Backend
    pub has_backend: bool,
    pub backend_language: BackendLanguage,
    pub backend_framework: BackendFramework,
    pub database: Database,
    pub database_client: DatabaseClient,

    // Testing
    pub testing_approach: TestingApproach,
    pub test_framework: TestFramework,
    pub e2e_framework: E2eFramework,
    pub coverage_target: CoverageTarget,

    // Security
    pub security_level: SecurityLevel,
    pub auth_provider: AuthProvider,
    pub has_payments: bool,
    pub has_blockchain: bool,

    // DevOps
    pub deployment_platform: DeploymentPlatform,
    pub cicd_platform: CicdPlatform,
    pub integrations: Vec<String>,

    // Workflow
    pub team_size: TeamSize,
    pub git_workflow: GitWorkflow,
    pub require_code_review: bool,
    pub enable_hooks: bool,
}

impl Answers {
    /// Production or enterprise goal
    pub fn is_production_grade(&self) -> bool {
        matches!(
            self.project_goal,
            ProjectGoal::Production | ProjectGoal::Enterprise
        )
    }

    pub fn has_team(&self) -> bool {
        self.team_size != TeamSize::Solo
    }

    /// TypeScript backend or any frontend
    pub fn uses_typescript(&self) -> bool {
        self.backend_language == BackendLanguage::TypeScript || self.has_frontend
    }
}

impl From<&Answers> for PartialAnswers {
    fn from(a: &Answers) -> Self {
        Self {
            project_name: Some(a.project_name.clone()),
            project_type: Some(a.project_type),
            project_goal: Some(a.project_goal),
            has_frontend: Some(a.has_frontend),
            frontend_framework: Some(a.frontend_framework),
            meta_framework: Some(a.meta_framework),
            styling_approach: Some(a.styling_approach),
            has_backend: Some(a.has_backend),
            backend_language: Some(a.backend_language),
            backend_framework: Some(a.backend_framework),
            database: Some(a.database),
            database_client: Some(a.database_client),
            testing_approach: Some(a.testing_approach),
            test_framework: Some(a.test_framework),
            e2e_framework: Some(a.e2e_framework),
            coverage_target: Some(a.coverage_target),
            security_level: Some(a.security_level),
            auth_provider: Some(a.auth_provider),
            has_payments: Some(a.has_payments),
            has_blockchain: Some(a.has_blockchain),
            deployment_platform: Some(a.deployment_platform),
            cicd_platform: Some(a.cicd_platform),
            integrations: Some(a.integrations.clone()),
            team_size: Some(a.team_size),
            git_workflow: Some(a.git_workflow),
            require_code_review: Some(a.require_code_review),
            enable_hooks: Some(a.enable_hooks),
        }
    }
}
