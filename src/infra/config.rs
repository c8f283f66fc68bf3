// src/infra/config.rs — Configuration loading (TOML + environment)
//
// The controller never reads ambient global state; it receives a fully
// resolved `ResolvedProvider` built here once at startup. Precedence for
// each value: config file > environment variable > hardcoded placeholder.
// Missing values fall back to placeholders so the demo stays runnable in
// unconfigured environments; the fallback is logged at warn level.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::agents::AgentKind;

/// Placeholder values matching an unconfigured demo deployment. Each agent
/// keeps its own fallback caller number; a configured `from_phone` (file or
/// env) is shared across all three.
const PLACEHOLDER_API_KEY: &str = "dummy-token";
const PLACEHOLDER_FROM_PHONE_PRIYA: &str = "+919876543007";
const PLACEHOLDER_FROM_PHONE_TRIPTI: &str = "+919876543008";
const PLACEHOLDER_FROM_PHONE_ARUN: &str = "+919876543009";
const PLACEHOLDER_AGENT_PRIYA: &str = "priya-agent-uuid-001";
const PLACEHOLDER_AGENT_TRIPTI: &str = "tripti-agent-uuid-002";
const PLACEHOLDER_AGENT_ARUN: &str = "arun-agent-uuid-003";

const DEFAULT_BASE_URL: &str = "https://api.bolna.ai";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// `[provider]` section of config.toml. Every field is optional; resolution
/// fills the gaps from the environment and then from placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub from_phone: Option<String>,
    #[serde(default)]
    pub agents: AgentIdsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentIdsConfig {
    pub priya: Option<String>,
    pub tripti: Option<String>,
    pub arun: Option<String>,
}

/// Fully concrete provider settings handed to the controller.
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    pub api_key: String,
    pub base_url: String,
    from_phone_priya: String,
    from_phone_tripti: String,
    from_phone_arun: String,
    agent_priya: String,
    agent_tripti: String,
    agent_arun: String,
}

impl ResolvedProvider {
    pub fn agent_id(&self, agent: AgentKind) -> &str {
        match agent {
            AgentKind::Priya => &self.agent_priya,
            AgentKind::Tripti => &self.agent_tripti,
            AgentKind::Arun => &self.agent_arun,
        }
    }

    /// Outbound caller number for the given agent.
    pub fn from_phone(&self, agent: AgentKind) -> &str {
        match agent {
            AgentKind::Priya => &self.from_phone_priya,
            AgentKind::Tripti => &self.from_phone_tripti,
            AgentKind::Arun => &self.from_phone_arun,
        }
    }
}

impl Config {
    /// Load config from the default path, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Default config file location (`~/.config/voicedial/config.toml`).
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voicedial")
        .join("config.toml")
}

impl ProviderConfig {
    /// Resolve against the process environment.
    pub fn resolve(&self) -> ResolvedProvider {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup (testable without
    /// touching process globals).
    pub fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> ResolvedProvider {
        let pick = |file_value: &Option<String>, env_var: &str, placeholder: &str| -> String {
            if let Some(v) = file_value {
                return v.clone();
            }
            if let Some(v) = env(env_var) {
                return v;
            }
            tracing::warn!("{env_var} is not configured, using placeholder value");
            placeholder.to_string()
        };

        let shared_from_phone = self.from_phone.clone().or_else(|| env("BOLNA_FROM_PHONE"));
        if shared_from_phone.is_none() {
            tracing::warn!("BOLNA_FROM_PHONE is not configured, using placeholder caller numbers");
        }
        let from_phone = |placeholder: &str| -> String {
            shared_from_phone
                .clone()
                .unwrap_or_else(|| placeholder.to_string())
        };

        ResolvedProvider {
            api_key: pick(&self.api_key, "BOLNA_API_KEY", PLACEHOLDER_API_KEY),
            base_url: self
                .base_url
                .clone()
                .or_else(|| env("BOLNA_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            from_phone_priya: from_phone(PLACEHOLDER_FROM_PHONE_PRIYA),
            from_phone_tripti: from_phone(PLACEHOLDER_FROM_PHONE_TRIPTI),
            from_phone_arun: from_phone(PLACEHOLDER_FROM_PHONE_ARUN),
            agent_priya: pick(&self.agents.priya, "BOLNA_AGENT_PRIYA", PLACEHOLDER_AGENT_PRIYA),
            agent_tripti: pick(
                &self.agents.tripti,
                "BOLNA_AGENT_TRIPTI",
                PLACEHOLDER_AGENT_TRIPTI,
            ),
            agent_arun: pick(&self.agents.arun, "BOLNA_AGENT_ARUN", PLACEHOLDER_AGENT_ARUN),
        }
    }
}
