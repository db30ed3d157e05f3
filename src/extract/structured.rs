use std::sync::LazyLock;

use futures::future::join_all;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{Album, Artist, Playlist, Track};
use crate::duration::parse_iso_duration;
use crate::error::{AppError, Result};
use crate::extract::{AlbumExtractor, Extraction};
use crate::fetcher::Fetch;
use crate::resolver::resolve_song;

static LD_JSON_SCRIPT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("static selector")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Summary fields only, no per-track work.
    Fast,
    /// Every track, fetching each playlist entry's own page.
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSummary {
    pub artist: Artist,
    pub album: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub title: String,
    pub creator: Artist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    AlbumSummary(AlbumSummary),
    Album(Album),
    PlaylistSummary(PlaylistSummary),
    Playlist(Playlist),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.first(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LdPerson {
    name: Option<String>,
    url: Option<String>,
}

impl LdPerson {
    fn to_artist(&self) -> Artist {
        Artist::new(
            self.name.clone().unwrap_or_default().trim(),
            self.url.clone().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct LdTrack {
    name: Option<String>,
    url: Option<String>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LdAlbum {
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "byArtist", default)]
    by_artist: OneOrMany<LdPerson>,
    #[serde(default, alias = "track")]
    tracks: Vec<LdTrack>,
}

#[derive(Debug, Deserialize)]
struct LdPlaylist {
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    author: OneOrMany<LdPerson>,
    #[serde(default, alias = "tracks")]
    track: Vec<LdTrack>,
}

enum Entity {
    Album(LdAlbum),
    Playlist(LdPlaylist),
}

fn first_artist(people: &OneOrMany<LdPerson>) -> Artist {
    people.first().map(LdPerson::to_artist).unwrap_or_default()
}

impl LdTrack {
    fn duration_secs(&self) -> u64 {
        self.duration
            .as_deref()
            .and_then(parse_iso_duration)
            .unwrap_or(0)
    }

    fn unresolved(&self) -> Track {
        Track::new(
            Artist::default(),
            self.name.clone().unwrap_or_default(),
            self.duration_secs(),
            self.url.clone().unwrap_or_default(),
        )
    }

    async fn resolve<F: Fetch>(&self, fetcher: &F) -> Track {
        let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) else {
            return self.unresolved();
        };

        match resolve_song(fetcher, url).await {
            Ok(mut track) => {
                track.duration = self.duration_secs();
                if track.title.is_empty() {
                    track.title = self.name.clone().unwrap_or_default();
                }
                track
            }
            Err(e) => {
                warn!("Could not resolve playlist track {}: {}", url, e);
                self.unresolved()
            }
        }
    }
}

impl LdAlbum {
    fn summary(self) -> AlbumSummary {
        AlbumSummary {
            artist: first_artist(&self.by_artist),
            album: self.name.unwrap_or_default(),
        }
    }

    fn into_album(self) -> Album {
        let artist = first_artist(&self.by_artist);
        let title = self.name.unwrap_or_default();

        let tracks = self
            .tracks
            .iter()
            .map(|entry| {
                Track::new(
                    artist.clone(),
                    entry.name.clone().unwrap_or_default(),
                    entry.duration_secs(),
                    "",
                )
                .with_album(title.as_str())
            })
            .collect();

        Album::new(artist, title, self.description.unwrap_or_default(), tracks)
    }
}

impl LdPlaylist {
    fn summary(self) -> PlaylistSummary {
        PlaylistSummary {
            title: self.name.unwrap_or_default(),
            creator: first_artist(&self.author),
        }
    }

    async fn resolve<F: Fetch>(self, fetcher: &F) -> Playlist {
        debug!("Resolving {} playlist tracks from their own pages", self.track.len());
        let tracks = join_all(self.track.iter().map(|entry| entry.resolve(fetcher))).await;

        Playlist::new(
            first_artist(&self.author),
            self.name.unwrap_or_default(),
            self.description.unwrap_or_default(),
            tracks,
        )
    }
}

fn has_type(node: &Value, wanted: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == wanted,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(wanted)),
        _ => false,
    }
}

/// Flatten arrays and `@graph` wrappers into individual nodes, keeping document order.
fn collect_nodes(value: Value, nodes: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_nodes(item, nodes);
            }
        }
        Value::Object(mut map) => match map.remove("@graph") {
            Some(graph) => collect_nodes(graph, nodes),
            None => nodes.push(Value::Object(map)),
        },
        _ => {}
    }
}

/// JSON-LD metadata embedded in a page.
#[derive(Debug, Clone, Default)]
pub struct StructuredData {
    nodes: Vec<Value>,
}

impl StructuredData {
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut nodes = Vec::new();

        for script in document.select(&LD_JSON_SCRIPT) {
            let raw = script.text().collect::<String>();
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(value) => collect_nodes(value, &mut nodes),
                Err(e) => debug!("Skipping unreadable structured data block: {}", e),
            }
        }

        Self { nodes }
    }

    /// First MusicAlbum or MusicPlaylist node in document order.
    fn find_entity(&self) -> Result<Entity> {
        for node in &self.nodes {
            if has_type(node, "MusicAlbum") {
                return Ok(Entity::Album(serde_json::from_value(node.clone())?));
            }
            if has_type(node, "MusicPlaylist") {
                return Ok(Entity::Playlist(serde_json::from_value(node.clone())?));
            }
        }
        Err(AppError::NoStructuredDataFound)
    }

    /// Read the page's album or playlist in the requested mode.
    /// Full-mode playlists fetch every track page concurrently; the track order
    /// is the playlist's declared order.
    pub async fn extract<F: Fetch>(&self, mode: Mode, fetcher: &F) -> Result<Record> {
        let record = match (self.find_entity()?, mode) {
            (Entity::Album(album), Mode::Fast) => Record::AlbumSummary(album.summary()),
            (Entity::Album(album), Mode::Full) => Record::Album(album.into_album()),
            (Entity::Playlist(playlist), Mode::Fast) => Record::PlaylistSummary(playlist.summary()),
            (Entity::Playlist(playlist), Mode::Full) => {
                Record::Playlist(playlist.resolve(fetcher).await)
            }
        };
        Ok(record)
    }

    pub fn album_summary(&self) -> Result<AlbumSummary> {
        match self.find_entity()? {
            Entity::Album(album) => Ok(album.summary()),
            Entity::Playlist(_) => Err(AppError::NoStructuredDataFound),
        }
    }

    pub fn album(&self) -> Result<Album> {
        match self.find_entity()? {
            Entity::Album(album) => Ok(album.into_album()),
            Entity::Playlist(_) => Err(AppError::NoStructuredDataFound),
        }
    }
}

/// Embedded-metadata strategy. Tracks come back without links.
pub struct StructuredDataExtractor;

impl AlbumExtractor for StructuredDataExtractor {
    fn name(&self) -> &'static str {
        "structured-data"
    }

    fn album(&self, html: &str) -> Extraction<Album> {
        Extraction::from_result(StructuredData::from_html(html).album())
    }
}
