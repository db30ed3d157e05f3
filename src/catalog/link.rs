use url::Url;

use crate::catalog::models::LinkKind;
use crate::error::{AppError, Result};

pub const CATALOG_HOST: &str = "music.apple.com";
pub const CATALOG_BASE: &str = "https://music.apple.com";

/// A catalog URL split into the parts classification cares about.
struct CatalogPath {
    segments: Vec<String>,
    song_id: Option<u64>,
}

impl CatalogPath {
    fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw.trim()).ok()?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str() != Some(CATALOG_HOST) {
            return None;
        }

        let segments = url
            .path_segments()?
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let song_id = url
            .query_pairs()
            .find(|(key, _)| key == "i")
            .and_then(|(_, value)| parse_digits(&value));

        Some(Self { segments, song_id })
    }

    /// `/<storefront>/<section>/<slug>...`
    fn is_section(&self, section: &str, min_segments: usize) -> bool {
        self.segments.len() >= min_segments && self.segments[1] == section
    }

    fn is_song(&self) -> bool {
        self.is_section("album", 4) && self.song_id.is_some()
    }

    fn is_playlist(&self) -> bool {
        self.is_section("playlist", 3)
    }

    fn is_album(&self) -> bool {
        self.is_section("album", 3)
    }
}

fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Decide whether `url` is a song, album or playlist link.
///
/// Song links are album links carrying a numeric `?i=` track index, so they are
/// checked before plain albums. A non-numeric index makes the link an album.
pub fn classify(url: &str) -> Result<LinkKind> {
    let path = CatalogPath::parse(url).ok_or_else(|| AppError::InvalidUrlKind(url.to_string()))?;

    if path.is_song() {
        Ok(LinkKind::Song)
    } else if path.is_playlist() {
        Ok(LinkKind::Playlist)
    } else if path.is_album() {
        Ok(LinkKind::Album)
    } else {
        Err(AppError::InvalidUrlKind(url.to_string()))
    }
}

/// The numeric `?i=` track index of a song link.
pub fn extract_song_id(url: &str) -> Option<u64> {
    CatalogPath::parse(url)
        .filter(CatalogPath::is_song)
        .and_then(|path| path.song_id)
}

/// Third path segment of a catalog link, percent-decoded.
/// For `/us/song/<slug>/<id>` links this is the song's slug.
pub fn song_title_slug(url: &str) -> Option<String> {
    let path = CatalogPath::parse(url)?;
    let slug = path.segments.get(2)?;
    if path.segments.len() < 4 {
        return None;
    }

    let decoded = urlencoding::decode(slug)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| slug.clone());
    Some(decoded)
}

/// Make a catalog-relative href absolute.
pub fn absolute_catalog_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", CATALOG_BASE, href)
    }
}
