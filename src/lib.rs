pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod resolver;
pub mod search;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{classify, extract_song_id, Album, Artist, Item, LinkKind, Playlist, Track};
pub use config::Config;
pub use duration::parse_duration;
pub use error::{AppError, Result};
pub use fetcher::{Fetch, PageFetcher};
pub use resolver::{resolve_song, resolve_track};
pub use search::{search, SearchOptions, Searcher};
