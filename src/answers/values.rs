//! @acp:module "Answer Vocabularies"
//! @acp:summary "Closed value sets for every wizard question"
//! @acp:domain cli
//! @acp:layer model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a closed vocabulary enum serialized by its wire name
macro_rules! answer_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every legal value, in presentation order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name of the value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

answer_enum!(
    /// Overall shape of the project
    ProjectType {
        Fullstack => "fullstack",
        Frontend => "frontend",
        Backend => "backend",
        Mobile => "mobile",
        Library => "library",
        Monorepo => "monorepo",
    }
);

answer_enum!(
    ProjectGoal {
        Mvp => "mvp",
        Production => "production",
        Learning => "learning",
        Enterprise => "enterprise",
    }
);

answer_enum!(
    FrontendFramework {
        React => "react",
        Vue => "vue",
        Svelte => "svelte",
        Angular => "angular",
        Vanilla => "vanilla",
        None => "none",
    }
);

answer_enum!(
    MetaFramework {
        Nextjs => "nextjs",
        Remix => "remix",
        Nuxt => "nuxt",
        Sveltekit => "sveltekit",
        Astro => "astro",
        None => "none",
    }
);

answer_enum!(
    /// Styling approach; `vanilla-css` doubles as the "not applicable" value
    StylingApproach {
        Tailwind => "tailwind",
        CssModules => "css-modules",
        StyledComponents => "styled-components",
        Scss => "scss",
        VanillaCss => "vanilla-css",
    }
);

answer_enum!(
    BackendLanguage {
        TypeScript => "typescript",
        Go => "go",
        Rust => "rust",
        Java => "java",
        Python => "python",
        None => "none",
    }
);

answer_enum!(
    BackendFramework {
        Express => "express",
        Fastify => "fastify",
        Nestjs => "nestjs",
        Hono => "hono",
        Gin => "gin",
        Axum => "axum",
        Spring => "spring",
        Fastapi => "fastapi",
        Django => "django",
        None => "none",
    }
);

answer_enum!(
    Database {
        Postgresql => "postgresql",
        Mysql => "mysql",
        Mongodb => "mongodb",
        Sqlite => "sqlite",
        None => "none",
    }
);

answer_enum!(
    DatabaseClient {
        Supabase => "supabase",
        Prisma => "prisma",
        Drizzle => "drizzle",
        Typeorm => "typeorm",
        Sqlalchemy => "sqlalchemy",
        Raw => "raw",
        None => "none",
    }
);

answer_enum!(
    TestingApproach {
        Tdd => "tdd",
        Standard => "standard",
        Minimal => "minimal",
        None => "none",
    }
);

answer_enum!(
    TestFramework {
        Vitest => "vitest",
        Jest => "jest",
        Pytest => "pytest",
        GoTest => "go-test",
        CargoTest => "cargo-test",
        Junit => "junit",
        Builtin => "builtin",
        None => "none",
    }
);

answer_enum!(
    E2eFramework {
        Playwright => "playwright",
        Cypress => "cypress",
        None => "none",
    }
);

answer_enum!(
    /// Coverage percentage target
    CoverageTarget {
        Eighty => "80",
        Sixty => "60",
        Forty => "40",
        None => "none",
    }
);

answer_enum!(
    SecurityLevel {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
);

answer_enum!(
    AuthProvider {
        Supabase => "supabase",
        Nextauth => "nextauth",
        Clerk => "clerk",
        Auth0 => "auth0",
        Custom => "custom",
        None => "none",
    }
);

answer_enum!(
    DeploymentPlatform {
        Vercel => "vercel",
        Railway => "railway",
        Cloudflare => "cloudflare",
        Aws => "aws",
        Docker => "docker",
        None => "none",
    }
);

answer_enum!(
    CicdPlatform {
        GithubActions => "github-actions",
        GitlabCi => "gitlab-ci",
        None => "none",
    }
);

answer_enum!(
    TeamSize {
        Solo => "solo",
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
);

answer_enum!(
    GitWorkflow {
        FeatureBranches => "feature-branches",
        TrunkBased => "trunk-based",
        Gitflow => "gitflow",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_serde() {
        let json = serde_json::to_string(&CoverageTarget::Eighty).unwrap();
        assert_eq!(json, "\"80\"");

        let parsed: TestFramework = serde_json::from_str("\"go-test\"").unwrap();
        assert_eq!(parsed, TestFramework::GoTest);
    }

    #[test]
    fn test_unknown_wire_name_is_rejected() {
        assert!(serde_json::from_str::<Database>("\"oracle\"").is_err());
    }

    #[test]
    fn test_all_lists_every_variant_once() {
        assert_eq!(BackendFramework::ALL.len(), 10);
        assert_eq!(StylingApproach::ALL.last(), Some(&StylingApproach::VanillaCss));
        assert_eq!(GitWorkflow::TrunkBased.to_string(), "trunk-based");
    }
}
