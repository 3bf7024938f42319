use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the workflow engine
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApolloWorkflowConfig {
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Authorization gate settings
    pub authorization: AuthorizationConfig,
    /// Audit trail settings
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Enable structured tracing output
    pub tracing_enabled: bool,
    /// Log level
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorizationConfig {
    /// Capability required for transition targets with no explicit entry.
    /// Conservative by default: moderation-level access.
    pub default_capability: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Category tag attached to every transition record
    pub category: String,
}

impl Default for ApolloWorkflowConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig {
                tracing_enabled: true,
                log_level: "info".to_string(),
            },
            authorization: AuthorizationConfig {
                default_capability: "apollo_moderate".to_string(),
            },
            audit: AuditConfig {
                category: "workflow".to_string(),
            },
        }
    }
}

impl ApolloWorkflowConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (apollo-workflow.toml, .apollo-workflow-rc)
    /// 3. Environment variables (prefixed with APOLLO_WORKFLOW_)
    pub fn load() -> Result<Self> {
        let defaults = ApolloWorkflowConfig::default();

        let mut builder = Config::builder()
            .set_default(
                "observability.tracing_enabled",
                defaults.observability.tracing_enabled,
            )?
            .set_default("observability.log_level", defaults.observability.log_level)?
            .set_default(
                "authorization.default_capability",
                defaults.authorization.default_capability,
            )?
            .set_default("audit.category", defaults.audit.category)?;

        if Path::new("apollo-workflow.toml").exists() {
            builder = builder.add_source(File::with_name("apollo-workflow"));
        }

        if Path::new(".apollo-workflow-rc").exists() {
            builder = builder.add_source(File::with_name(".apollo-workflow-rc"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APOLLO_WORKFLOW")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ApolloWorkflowConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = ApolloWorkflowConfig::load_env_file();
        ApolloWorkflowConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static ApolloWorkflowConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
