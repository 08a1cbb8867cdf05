//! Resource configuration
//!
//! Construction-time knobs for a bridge resource. Everything here is
//! immutable once the resource is built; invalid values are rejected up
//! front rather than at first use.

use crate::error::{BridgeError, BridgeResult};
use mb_engine::LoadRequest;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Target warehouse connection profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gateway {
    /// Postgres (default)
    #[default]
    Postgres,
    /// DuckDB
    DuckDb,
    /// Snowflake
    Snowflake,
}

impl std::fmt::Display for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gateway::Postgres => write!(f, "postgres"),
            Gateway::DuckDb => write!(f, "duckdb"),
            Gateway::Snowflake => write!(f, "snowflake"),
        }
    }
}

impl FromStr for Gateway {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(Gateway::Postgres),
            "duckdb" => Ok(Gateway::DuckDb),
            "snowflake" => Ok(Gateway::Snowflake),
            other => Err(BridgeError::Config {
                message: format!("unknown gateway '{}'", other),
            }),
        }
    }
}

/// Construction-time configuration for a [`crate::resource::BridgeResource`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Directory containing the project structure and config file
    pub project_dir: PathBuf,

    /// Target warehouse connection profile
    #[serde(default)]
    pub gateway: Gateway,

    /// Engine environment to run against
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Upper bound on concurrent model executions during one
    /// materialization pass; must be at least 1
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,

    /// Bypass model-level cadences when deriving the schedule
    #[serde(default)]
    pub ignore_cron: bool,
}

fn default_environment() -> String {
    "prod".to_string()
}

fn default_concurrency_limit() -> usize {
    1
}

impl ResourceConfig {
    /// Configuration with defaults for the given project directory.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            gateway: Gateway::default(),
            environment: default_environment(),
            concurrency_limit: default_concurrency_limit(),
            ignore_cron: false,
        }
    }

    /// Set the gateway
    pub fn with_gateway(mut self, gateway: Gateway) -> Self {
        self.gateway = gateway;
        self
    }

    /// Set the engine environment
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Set the concurrency limit
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = limit;
        self
    }

    /// Bypass model-level cadences
    pub fn with_ignore_cron(mut self, ignore: bool) -> Self {
        self.ignore_cron = ignore;
        self
    }

    /// Fail-fast validation, run at resource construction.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.concurrency_limit == 0 {
            return Err(BridgeError::Config {
                message: "concurrency_limit must be a positive integer".to_string(),
            });
        }
        if self.environment.is_empty() {
            return Err(BridgeError::Config {
                message: "environment must not be empty".to_string(),
            });
        }
        if self.project_dir.as_os_str().is_empty() {
            return Err(BridgeError::Config {
                message: "project_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The engine load request this configuration describes.
    pub fn load_request(&self) -> LoadRequest {
        LoadRequest {
            project_dir: self.project_dir.clone(),
            gateway: self.gateway.to_string(),
            environment: self.environment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResourceConfig::new("tests/project");
        assert_eq!(config.gateway, Gateway::Postgres);
        assert_eq!(config.environment, "prod");
        assert_eq!(config.concurrency_limit, 1);
        assert!(!config.ignore_cron);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = ResourceConfig::new("tests/project").with_concurrency_limit(0);
        assert!(matches!(
            config.validate().unwrap_err(),
            BridgeError::Config { .. }
        ));
    }

    #[test]
    fn test_gateway_parsing() {
        assert_eq!("duckdb".parse::<Gateway>().unwrap(), Gateway::DuckDb);
        assert_eq!("postgres".parse::<Gateway>().unwrap(), Gateway::Postgres);
        assert!("oracle".parse::<Gateway>().is_err());
    }

    #[test]
    fn test_load_request() {
        let config = ResourceConfig::new("tests/project")
            .with_gateway(Gateway::DuckDb)
            .with_environment("dev");
        let request = config.load_request();
        assert_eq!(request.gateway, "duckdb");
        assert_eq!(request.environment, "dev");
        assert_eq!(request.project_dir, PathBuf::from("tests/project"));
    }
}
