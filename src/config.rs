use crate::error::{config::ConfigError, AppError};
use crate::model::poll::ScorePolicy;

const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    /// Origin allowed by the CORS layer, usually the frontend URL.
    pub app_url: String,
    pub port: u16,

    /// How the aggregator treats `unavailable` responses. Defaults to
    /// excluding the slot from the ranking.
    pub score_policy: ScorePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), value))?,
                Err(_) => DEFAULT_PORT,
            },
            score_policy: match std::env::var("SCORE_POLICY") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("SCORE_POLICY".to_string(), value))?,
                Err(_) => ScorePolicy::default(),
            },
        })
    }
}
