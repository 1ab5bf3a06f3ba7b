// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Questions drawn from the bank per simulado.
pub const SIMULADO_QUESTION_COUNT: usize = 30;

/// Time budget per simulado: 60 minutes.
pub const SIMULADO_TIME_BUDGET_SECS: u32 = 3600;

/// Minimum correct answers for approval. An absolute count, not a
/// percentage of the sampled set size.
pub const APPROVAL_THRESHOLD: usize = 21;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86400);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
        }
    }
}
