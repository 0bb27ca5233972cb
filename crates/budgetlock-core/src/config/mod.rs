//! Configuration with layered resolution: compiled defaults, an optional
//! TOML file, then `BUDGETLOCK_*` environment overrides.

pub mod compile_config;
pub mod defaults;
pub mod intake_config;
pub mod observability_config;
pub mod token_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use compile_config::CompileConfig;
pub use intake_config::IntakeConfig;
pub use observability_config::ObservabilityConfig;
pub use token_config::TokenConfig;

use crate::errors::ConfigError;
use crate::models::BudgetPreset;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetLockConfig {
    pub intake: IntakeConfig,
    pub tokens: TokenConfig,
    pub compile: CompileConfig,
    pub observability: ObservabilityConfig,
}

impl BudgetLockConfig {
    /// Load configuration.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`BUDGETLOCK_*`)
    /// 2. The TOML file at `path`, when given
    /// 3. Compiled defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `BUDGETLOCK_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BUDGETLOCK_MIN_LATENCY_MS").and_then(|v| v.parse().ok()) {
            self.intake.min_latency_ms = v;
        }
        if let Some(v) = lookup("BUDGETLOCK_CAPACITY").and_then(|v| v.parse().ok()) {
            self.intake.capacity = v;
        }
        if let Some(v) = lookup("BUDGETLOCK_BUDGET")
            .and_then(|v| v.parse().ok())
            .and_then(BudgetPreset::from_tokens)
        {
            self.compile.budget = v;
        }
        if let Some(v) = lookup("BUDGETLOCK_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intake.capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "intake.capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.observability.fallback_alert_ratio) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.fallback_alert_ratio".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(())
    }
}
