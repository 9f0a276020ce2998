// src/common/config.rs
//! Runtime configuration read from the environment (and `.env`), with a
//! couple of CLI overrides for local runs.

use std::env;
use thiserror::Error;

use crate::validation::Role;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("default role '{0}' does not resolve to a policy")]
    UnresolvableDefaultRole(String),
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub default_role: Role,
    pub default_locale: String,
    pub cors_origins: Vec<String>,
    pub reset_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://course_api.db".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
            })?,
            Err(_) => 8080,
        };

        let default_role_raw = env::var("DEFAULT_ROLE").unwrap_or_else(|_| "STUDENT".to_string());
        let default_role = Role::from_token(Some(&default_role_raw));
        if default_role == Role::Unknown {
            return Err(ConfigError::UnresolvableDefaultRole(default_role_raw));
        }

        let default_locale = env::var("DEFAULT_LOCALE")
            .map(|l| l.trim().to_lowercase())
            .ok()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "en".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let reset_db = env::var("RESET_DB")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        Ok(Self {
            database_url,
            port,
            default_role,
            default_locale,
            cors_origins,
            reset_db,
        })
    }
}

/// CLI overrides: `--reset-db` and `--port <n>` (or `--port=<n>`).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub reset_db: Option<bool>,
    pub port: Option<u16>,
}

pub fn parse_cli_args<I>(args: I) -> Result<CliOverrides, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--reset-db" => overrides.reset_db = Some(true),
            "--port" => {
                let value = args.next().unwrap_or_default();
                overrides.port = Some(parse_port(&value)?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--port=") {
                    overrides.port = Some(parse_port(value)?);
                }
            }
        }
    }

    Ok(overrides)
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
        key: "--port",
        value: value.to_string(),
    })
}

pub fn apply_cli_overrides(mut config: AppConfig, overrides: CliOverrides) -> AppConfig {
    if let Some(reset_db) = overrides.reset_db {
        println!("🔧 CLI override: RESET_DB = {}", reset_db);
        config.reset_db = reset_db;
    }
    if let Some(port) = overrides.port {
        println!("🔧 CLI override: PORT = {}", port);
        config.port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_cli_args_empty() {
        let overrides = parse_cli_args(args(&["course_api"])).unwrap();
        assert_eq!(overrides, CliOverrides::default());
    }

    #[test]
    fn test_parse_cli_args_reset_and_port() {
        let overrides = parse_cli_args(args(&["course_api", "--reset-db", "--port", "9000"]))
            .unwrap();
        assert_eq!(overrides.reset_db, Some(true));
        assert_eq!(overrides.port, Some(9000));

        let overrides = parse_cli_args(args(&["course_api", "--port=7000"])).unwrap();
        assert_eq!(overrides.port, Some(7000));
    }

    #[test]
    fn test_parse_cli_args_rejects_bad_port() {
        let err = parse_cli_args(args(&["course_api", "--port", "not-a-port"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "--port", .. }));
    }

    #[test]
    fn test_apply_cli_overrides() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            port: 8080,
            default_role: Role::Student,
            default_locale: "en".to_string(),
            cors_origins: Vec::new(),
            reset_db: false,
        };

        let config = apply_cli_overrides(
            config,
            CliOverrides {
                reset_db: Some(true),
                port: Some(3001),
            },
        );
        assert!(config.reset_db);
        assert_eq!(config.port, 3001);
    }
}
