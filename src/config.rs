use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub user_agent: String,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let user_agent = lookup("MUSICSCRAPE_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let max_attempts = match lookup("MUSICSCRAPE_MAX_ATTEMPTS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::Config(format!("MUSICSCRAPE_MAX_ATTEMPTS is not a number: {}", raw))
            })?,
            None => DEFAULT_MAX_ATTEMPTS,
        };

        let retry_delay_ms = match lookup("MUSICSCRAPE_RETRY_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "MUSICSCRAPE_RETRY_DELAY_MS is not a number: {}",
                    raw
                ))
            })?,
            None => DEFAULT_RETRY_DELAY_MS,
        };

        let config = Self {
            user_agent,
            max_attempts,
            retry_delay: Duration::from_millis(retry_delay_ms),
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(AppError::Config(
                "max attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
