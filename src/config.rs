//! Application configuration loaded from environment variables.

use crate::models::TurnRepair;
use std::env;

/// Path the voice platform posts skill requests to.
pub const SKILL_PATH: &str = "/echo/whoseturn";

/// Where user documents live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Firestore,
    Memory,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// GCP project ID
    pub gcp_project_id: String,
    /// User document storage
    pub storage: StorageBackend,
    /// Expected skill application ID; unset disables the check
    pub skill_app_id: Option<String>,
    /// Maximum accepted age of a request timestamp, in seconds
    pub request_tolerance_secs: i64,
    /// Turn pointer policy when someone leaves an activity
    pub turn_repair: TurnRepair,
}

impl Config {
    /// Deterministic configuration for tests.
    pub fn test_default() -> Self {
        Self {
            port: 7152,
            gcp_project_id: "test-project".to_string(),
            storage: StorageBackend::Memory,
            skill_app_id: Some("amzn1.ask.skill.test".to_string()),
            request_tolerance_secs: 150,
            turn_repair: TurnRepair::Preserve,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage = match env::var("STORAGE_BACKEND") {
            Err(_) => StorageBackend::Firestore,
            Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
                "firestore" => StorageBackend::Firestore,
                "memory" => StorageBackend::Memory,
                _ => return Err(ConfigError::Invalid("STORAGE_BACKEND", v)),
            },
        };

        let turn_repair = match env::var("TURN_REPAIR") {
            Err(_) => TurnRepair::default(),
            Ok(v) => TurnRepair::parse(&v).ok_or(ConfigError::Invalid("TURN_REPAIR", v))?,
        };

        let request_tolerance_secs = match env::var("REQUEST_TOLERANCE_SECS") {
            Err(_) => 150,
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("REQUEST_TOLERANCE_SECS", v))?,
        };

        let port = match env::var("PORT") {
            Err(_) => 7152,
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", v))?,
        };

        Ok(Self {
            port,
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            storage,
            skill_app_id: env::var("SKILL_APP_ID")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            request_tolerance_secs,
            turn_repair,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so env mutations don't race with each other.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("STORAGE_BACKEND");
        env::remove_var("TURN_REPAIR");
        env::remove_var("REQUEST_TOLERANCE_SECS");
        env::set_var("SKILL_APP_ID", " amzn1.ask.skill.abc ");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 7152);
        assert_eq!(config.storage, StorageBackend::Firestore);
        assert_eq!(config.turn_repair, TurnRepair::Preserve);
        assert_eq!(config.request_tolerance_secs, 150);
        assert_eq!(config.skill_app_id.as_deref(), Some("amzn1.ask.skill.abc"));

        env::set_var("STORAGE_BACKEND", "memory");
        env::set_var("TURN_REPAIR", "shift");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.turn_repair, TurnRepair::Shift);

        env::set_var("PORT", "8080");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", v)) if v == "not-a-port"
        ));
        env::set_var("PORT", "70000");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", _))
        ));
        env::remove_var("PORT");

        env::set_var("REQUEST_TOLERANCE_SECS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("REQUEST_TOLERANCE_SECS", _))
        ));
        env::remove_var("REQUEST_TOLERANCE_SECS");

        env::set_var("STORAGE_BACKEND", "postgres");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("STORAGE_BACKEND", v)) if v == "postgres"
        ));
        env::set_var("STORAGE_BACKEND", "memory");

        env::set_var("TURN_REPAIR", "sideways");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("TURN_REPAIR", _))
        ));

        env::remove_var("STORAGE_BACKEND");
        env::remove_var("TURN_REPAIR");
        env::remove_var("SKILL_APP_ID");
    }
}
