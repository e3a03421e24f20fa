//! @acp:module "Integration Selection"
//! @acp:summary "Static MCP server catalog and lookup of user-chosen identifiers"
//! @acp:domain cli
//! @acp:layer logic

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::answers::Answers;

/// Every identifier the catalog knows
pub const INTEGRATION_IDS: &[&str] = &[
    "github",
    "firecrawl",
    "supabase",
    "memory",
    "sequential-thinking",
    "vercel",
    "railway",
    "cloudflare-docs",
    "cloudflare-workers-builds",
    "cloudflare-workers-bindings",
    "cloudflare-observability",
    "clickhouse",
    "context7",
    "magic",
    "filesystem",
];

/// MCP server descriptor, written verbatim into `.claude.json`
///
/// Stdio servers carry `command`/`args`/`env`; HTTP servers carry
/// `type = "http"` and `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
}

impl IntegrationConfig {
    fn npx(package: &[&str], description: &str) -> Self {
        let mut args = vec!["-y".to_string()];
        args.extend(package.iter().map(|s| s.to_string()));
        Self {
            command: Some("npx".to_string()),
            args,
            env: BTreeMap::new(),
            kind: None,
            url: None,
            description: description.to_string(),
        }
    }

    fn http(url: &str, description: &str) -> Self {
        Self {
            command: None,
            args: Vec::new(),
            env: BTreeMap::new(),
            kind: Some("http".to_string()),
            url: Some(url.to_string()),
            description: description.to_string(),
        }
    }

    fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Environment variables still holding a `YOUR_...` placeholder
    pub fn placeholder_env(&self) -> impl Iterator<Item = &str> {
        self.env
            .iter()
            .filter(|(_, value)| value.contains("YOUR_"))
            .map(|(key, _)| key.as_str())
    }
}

/// Look up the descriptor for an integration identifier
pub fn integration_config(id: &str) -> Option<IntegrationConfig> {
    let config = match id {
        "github" => IntegrationConfig::npx(
            &["@modelcontextprotocol/server-github"],
            "GitHub operations - PRs, issues, repos",
        )
        .with_env("GITHUB_PERSONAL_ACCESS_TOKEN", "YOUR_GITHUB_PAT_HERE"),
        "firecrawl" => IntegrationConfig::npx(&["firecrawl-mcp"], "Web scraping and crawling")
            .with_env("FIRECRAWL_API_KEY", "YOUR_FIRECRAWL_KEY_HERE"),
        "supabase" => IntegrationConfig::npx(
            &[
                "@supabase/mcp-server-supabase@latest",
                "--project-ref=YOUR_PROJECT_REF",
            ],
            "Supabase database operations",
        ),
        "memory" => IntegrationConfig::npx(
            &["@modelcontextprotocol/server-memory"],
            "Persistent memory across sessions",
        ),
        "sequential-thinking" => IntegrationConfig::npx(
            &["@modelcontextprotocol/server-sequential-thinking"],
            "Chain-of-thought reasoning",
        ),
        "vercel" => IntegrationConfig::http("https://mcp.vercel.com", "Vercel deployments and projects"),
        "railway" => IntegrationConfig::npx(&["@railway/mcp-server"], "Railway deployments"),
        "cloudflare-docs" => IntegrationConfig::http(
            "https://docs.mcp.cloudflare.com/mcp",
            "Cloudflare documentation search",
        ),
        "cloudflare-workers-builds" => IntegrationConfig::http(
            "https://builds.mcp.cloudflare.com/mcp",
            "Cloudflare Workers builds",
        ),
        "cloudflare-workers-bindings" => IntegrationConfig::http(
            "https://bindings.mcp.cloudflare.com/mcp",
            "Cloudflare Workers bindings",
        ),
        "cloudflare-observability" => IntegrationConfig::http(
            "https://observability.mcp.cloudflare.com/mcp",
            "Cloudflare observability/logs",
        ),
        "clickhouse" => IntegrationConfig::http(
            "https://mcp.clickhouse.cloud/mcp",
            "ClickHouse analytics queries",
        ),
        "context7" => IntegrationConfig::npx(&["@context7/mcp-server"], "Live documentation lookup"),
        "magic" => IntegrationConfig::npx(&["@magicuidesign/mcp@latest"], "Magic UI components"),
        "filesystem" => IntegrationConfig::npx(
            &[
                "@modelcontextprotocol/server-filesystem",
                "/path/to/your/projects",
            ],
            "Filesystem operations (set your path)",
        ),
        _ => return None,
    };
    Some(config)
}

/// An integration picked for installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSelection {
    pub name: String,
    pub config: IntegrationConfig,
    pub reason: String,
}

/// Resolve each chosen identifier against the catalog, dropping unknown ones
pub fn select_integrations(answers: &Answers) -> Vec<IntegrationSelection> {
    answers
        .integrations
        .iter()
        .filter_map(|id| match integration_config(id) {
            Some(config) => Some(IntegrationSelection {
                name: id.clone(),
                config,
                reason: reason_for(id).to_string(),
            }),
            None => {
                tracing::warn!(integration = %id, "unknown integration, skipping");
                None
            }
        })
        .collect()
}

fn reason_for(id: &str) -> &'static str {
    match id {
        "github" => "Git workflow and PR management",
        "context7" => "Live documentation for your tech stack",
        "sequential-thinking" => "Enhanced reasoning for complex problems",
        "memory" => "Persistent context across sessions",
        "firecrawl" => "Web scraping capabilities",
        "magic" => "UI component generation",
        "supabase" => "Database client is Supabase",
        "vercel" => "Deployment platform is Vercel",
        "railway" => "Deployment platform is Railway",
        "cloudflare-docs" | "cloudflare-workers-builds" => "Deployment platform is Cloudflare",
        "clickhouse" => "Analytics with ClickHouse",
        _ => "User selected",
    }
}
