use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Anything that can turn a URL into page markup.
pub trait Fetch {
    fn get(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Outcome of a single attempt.
enum Attempt {
    Done(String),
    Retry(String),
    GiveUp(String),
}

/// HTTP page fetcher that retries transient failures.
pub struct PageFetcher {
    http_client: Client,
    max_attempts: u32,
    retry_delay: Duration,
}

impl PageFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let http_client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            http_client,
            max_attempts: config.max_attempts,
            retry_delay: config.retry_delay,
        })
    }

    async fn attempt(&self, url: &Url) -> Attempt {
        let response = match self.http_client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => return Attempt::GiveUp(e.to_string()),
            Err(e) => return Attempt::Retry(e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            let reason = format!("HTTP {}", status);
            return if is_transient(status) {
                Attempt::Retry(reason)
            } else {
                Attempt::GiveUp(reason)
            };
        }

        match response.text().await {
            Ok(body) => Attempt::Done(body),
            Err(e) => Attempt::Retry(e.to_string()),
        }
    }
}

/// Linear backoff, clamped instead of overflowing.
fn backoff(delay: Duration, attempt: u32) -> Duration {
    delay.saturating_mul(attempt)
}

fn is_transient(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

impl Fetch for PageFetcher {
    async fn get(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| AppError::fetch_failure(url, e))?;

        let mut attempt = 1;
        loop {
            match self.attempt(&parsed).await {
                Attempt::Done(body) => {
                    debug!("Fetched {} ({} bytes, attempt {})", url, body.len(), attempt);
                    return Ok(body);
                }
                Attempt::GiveUp(reason) => {
                    warn!("Giving up on {}: {}", url, reason);
                    return Err(AppError::fetch_failure(url, reason));
                }
                Attempt::Retry(reason) if attempt >= self.max_attempts => {
                    warn!("Failed to fetch {} after {} attempts: {}", url, attempt, reason);
                    return Err(AppError::fetch_failure(url, reason));
                }
                Attempt::Retry(reason) => {
                    debug!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt, self.max_attempts, url, reason
                    );
                    tokio::time::sleep(backoff(self.retry_delay, attempt)).await;
                    attempt += 1;
                }
            }
        }
    }
}
