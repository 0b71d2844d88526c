/// Configuration from environment variables
///
/// Everything has a development default; production refuses to start with
/// the default signing secret or an unset CORS origin list.
use serde::{Deserialize, Serialize};

const DEV_JWT_SECRET: &str = "postline-dev-secret";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or "*" for any.
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let is_production = env.eq_ignore_ascii_case("production");

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(value) if !value.trim().is_empty() => value,
            _ if is_production => {
                return Err("JWT_SECRET must be set in production".to_string());
            }
            _ => DEV_JWT_SECRET.to_string(),
        };
        if is_production && jwt_secret == DEV_JWT_SECRET {
            return Err("JWT_SECRET cannot be the development default in production".to_string());
        }

        let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) if !value.trim().is_empty() => value,
            _ if is_production => {
                return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string());
            }
            _ => "*".to_string(),
        };

        let port = match std::env::var("POSTLINE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| format!("POSTLINE_PORT is not a valid port: {value}"))?,
            Err(_) => 8080,
        };

        let token_ttl_hours = match std::env::var("TOKEN_TTL_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or_else(|| format!("TOKEN_TTL_HOURS must be a positive integer: {value}"))?,
            Err(_) => 24,
        };

        Ok(Config {
            app: AppConfig {
                env,
                host: std::env::var("POSTLINE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            cors: CorsConfig { allowed_origins },
            auth: AuthConfig {
                jwt_secret,
                token_ttl_hours,
            },
        })
    }
}
