//! Configuration module
//!
//! Runtime configuration for the Gazette service, loaded from environment
//! variables (with `.env` support via dotenvy). Validation is fail-fast:
//! misconfiguration is detected at startup, not at first request.

use std::env;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 50;
const DEFAULT_AUTH_MAX_FAILURES: u32 = 5;
const DEFAULT_AUTH_FAILURE_WINDOW_SECS: u64 = 300;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub max_file_size_bytes: usize,
    /// Argon2 PHC string the admin password is verified against.
    pub admin_password_hash: Option<String>,
    /// Plaintext admin password; hashed at startup. Rejected in production.
    pub admin_password: Option<String>,
    pub auth_max_failures: u32,
    pub auth_failure_window_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            auth_max_failures: env::var("AUTH_MAX_FAILURES")
                .unwrap_or_else(|_| DEFAULT_AUTH_MAX_FAILURES.to_string())
                .parse()
                .unwrap_or(DEFAULT_AUTH_MAX_FAILURES),
            auth_failure_window_secs: env::var("AUTH_FAILURE_WINDOW_SECS")
                .unwrap_or_else(|_| DEFAULT_AUTH_FAILURE_WINDOW_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_AUTH_FAILURE_WINDOW_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o.trim() == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.admin_password_hash.is_none() && self.admin_password.is_none() {
            return Err(anyhow::anyhow!(
                "Either ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set"
            ));
        }

        if self.is_production() && self.admin_password.is_some() {
            return Err(anyhow::anyhow!(
                "ADMIN_PASSWORD (plaintext) is not allowed in production; set ADMIN_PASSWORD_HASH"
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        Ok(())
    }
}
