pub mod orchestrator;

pub use orchestrator::{SearchOptions, Searcher};

use crate::catalog::Item;
use crate::config::Config;
use crate::error::Result;

/// One-shot lookup with the default configuration.
pub async fn search(url: &str) -> Result<Option<Item>> {
    Searcher::from_config(&Config::default(), SearchOptions::default())?
        .search(url)
        .await
}
