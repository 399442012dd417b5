use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub fcm: FcmConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

/// Credentials and target for Firebase Cloud Messaging.
///
/// The access token is a pre-issued OAuth bearer credential; the token
/// exchange itself belongs to the Firebase tooling, not this service. The
/// endpoint is overridable so tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct FcmConfig {
    pub project_id: String,
    pub access_token: SecretString,
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com";

impl Config {
    pub fn from_env() -> Result<Self> {
        // Server configuration
        let host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("Failed to parse SERVER_HOST")?;

        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("Failed to parse SERVER_PORT")?;

        let workers = match env::var("SERVER_WORKERS") {
            Ok(val) => Some(val.parse().context("Failed to parse SERVER_WORKERS")?),
            Err(_) => None,
        };

        // Database configuration
        let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let db_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(val) => Some(
                val.parse()
                    .context("Failed to parse DATABASE_MAX_CONNECTIONS")?,
            ),
            Err(_) => Some(10), // Default value
        };
        let db_min_connections = match env::var("DATABASE_MIN_CONNECTIONS") {
            Ok(val) => Some(
                val.parse()
                    .context("Failed to parse DATABASE_MIN_CONNECTIONS")?,
            ),
            Err(_) => Some(1), // Default value
        };

        // FCM configuration
        let fcm_project_id = env::var("FCM_PROJECT_ID").context("FCM_PROJECT_ID must be set")?;
        let fcm_access_token = env::var("FCM_ACCESS_TOKEN")
            .context("FCM_ACCESS_TOKEN must be set")
            .map(SecretString::from)?;
        let fcm_endpoint =
            env::var("FCM_ENDPOINT").unwrap_or_else(|_| DEFAULT_FCM_ENDPOINT.to_string());

        // App configuration
        let environment_str =
            env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let environment = match environment_str.to_lowercase().as_str() {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let app_name = env::var("APP_NAME").unwrap_or_else(|_| "ArenaX Notify".to_string());

        Ok(Config {
            server: ServerConfig {
                host,
                port,
                workers,
            },
            database: DatabaseConfig {
                url: db_url,
                max_connections: db_max_connections,
                min_connections: db_min_connections,
            },
            fcm: FcmConfig {
                project_id: fcm_project_id,
                access_token: fcm_access_token,
                endpoint: fcm_endpoint,
            },
            app: AppConfig {
                name: app_name,
                environment,
            },
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    #[allow(unused)]
    pub fn is_production(&self) -> bool {
        self.app.environment == Environment::Production
    }

    #[allow(unused)]
    pub fn is_development(&self) -> bool {
        self.app.environment == Environment::Development
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

// Use once_cell for a global config instance that's initialized once
use once_cell::sync::OnceCell;

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn init() -> Result<&'static Config> {
    CONFIG.get_or_try_init(Config::from_env)
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("Config is not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(
            "PRODUCTION".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert_eq!("staging".parse::<Environment>(), Ok(Environment::Staging));
        assert!("qa".parse::<Environment>().is_err());
    }
}
