use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::catalog::link::absolute_catalog_url;
use crate::catalog::{Album, Artist, Playlist, Track};
use crate::duration::parse_duration;
use crate::error::Result;
use crate::extract::{AlbumExtractor, Extraction};

struct Selectors {
    row: Selector,
    row_artist: Selector,
    row_title: Selector,
    row_time: Selector,
    row_album: Selector,
    row_preview: Selector,
    header: Selector,
    header_creator: Selector,
    header_title: Selector,
    header_notes: Selector,
    canonical_url: Selector,
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    row: selector("div.songs-list-row"),
    row_artist: selector("div.songs-list__col--artist a.songs-list-row__link"),
    row_title: selector("div.songs-list__col--song div.songs-list-row__song-name"),
    row_time: selector("div.songs-list__col--time time"),
    row_album: selector("div.songs-list__col--album a.songs-list-row__link"),
    row_preview: selector("div.songs-list__col--time button.preview-button"),
    header: selector("div.product-page-header"),
    header_creator: selector("div.product-creator a.dt-link-to"),
    header_title: selector("h1.product-name"),
    header_notes: selector("div.product-page-header__metadata--notes"),
    canonical_url: selector("meta[property='og:url']"),
});

fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

fn text(element: Option<ElementRef<'_>>) -> String {
    element
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn attr(element: Option<ElementRef<'_>>, name: &str) -> String {
    element
        .and_then(|el| el.value().attr(name))
        .unwrap_or_default()
        .to_string()
}

/// Page-level header shared by album and playlist pages.
struct Header {
    title: String,
    description: String,
    creator_name: String,
    creator_href: String,
}

impl Header {
    fn read(document: &Html) -> Self {
        let header = document.select(&SELECTORS.header).next();
        let find = |selector: &Selector| header.and_then(|h| first(h, selector));
        let creator = find(&SELECTORS.header_creator);

        Self {
            title: text(find(&SELECTORS.header_title)),
            description: text(find(&SELECTORS.header_notes)),
            creator_name: text(creator),
            creator_href: attr(creator, "href"),
        }
    }
}

/// A missing or empty time node means "unknown", anything else must parse.
fn row_duration(row: ElementRef<'_>) -> Result<u64> {
    let raw = text(first(row, &SELECTORS.row_time));
    if raw.is_empty() {
        return Ok(0);
    }
    parse_duration(&raw)
}

/// Track id from the preview button's click-metrics payload, `0` when unreadable.
fn row_target_id(row: ElementRef<'_>) -> u64 {
    first(row, &SELECTORS.row_preview)
        .and_then(|button| button.value().attr("data-metrics-click"))
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .and_then(|payload| match payload.get("targetId")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .unwrap_or(0)
}

fn rows(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&SELECTORS.row).collect()
}

fn playlist_from_document(document: &Html) -> Result<Option<Playlist>> {
    let rows = rows(document);
    if rows.is_empty() {
        return Ok(None);
    }

    let mut tracks = Vec::with_capacity(rows.len());
    for row in rows {
        let artist_link = first(row, &SELECTORS.row_artist);
        let album_link = first(row, &SELECTORS.row_album);

        let track = Track::new(
            Artist::new(text(artist_link), attr(artist_link, "href")),
            text(first(row, &SELECTORS.row_title)),
            row_duration(row)?,
            attr(album_link, "href"),
        )
        .with_album(text(album_link));
        tracks.push(track);
    }

    let header = Header::read(document);
    let creator_url = if header.creator_href.is_empty() {
        String::new()
    } else {
        absolute_catalog_url(&header.creator_href)
    };

    Ok(Some(Playlist::new(
        Artist::new(header.creator_name, creator_url),
        header.title,
        header.description,
        tracks,
    )))
}

fn album_from_document(document: &Html) -> Result<Option<Album>> {
    let rows = rows(document);
    if rows.is_empty() {
        return Ok(None);
    }

    let header = Header::read(document);
    let artist = Artist::new(header.creator_name, header.creator_href);
    let album_url = document
        .select(&SELECTORS.canonical_url)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|url| !url.is_empty());

    let mut tracks = Vec::with_capacity(rows.len());
    for row in rows {
        let url = album_url
            .map(|base| format!("{}?i={}", base, row_target_id(row)))
            .unwrap_or_default();

        let track = Track::new(
            artist.clone(),
            text(first(row, &SELECTORS.row_title)),
            row_duration(row)?,
            url,
        )
        .with_album(header.title.as_str());
        tracks.push(track);
    }

    Ok(Some(Album::new(artist, header.title, header.description, tracks)))
}

/// Scrape a playlist page's track rows and header.
pub fn extract_playlist(html: &str) -> Extraction<Playlist> {
    let document = Html::parse_document(html);
    match playlist_from_document(&document) {
        Ok(Some(playlist)) => {
            debug!("DOM playlist extraction found {} tracks", playlist.num_tracks());
            Extraction::Ok(playlist)
        }
        Ok(None) => Extraction::NeedsFallback("no track rows on playlist page".into()),
        Err(e) => Extraction::Fatal(e),
    }
}

/// Scrape an album page; every track inherits the header's artist.
pub fn extract_album(html: &str) -> Extraction<Album> {
    let document = Html::parse_document(html);
    match album_from_document(&document) {
        Ok(Some(album)) => {
            debug!("DOM album extraction found {} tracks", album.num_tracks());
            Extraction::Ok(album)
        }
        Ok(None) => Extraction::NeedsFallback("no track rows on album page".into()),
        Err(e) => Extraction::Fatal(e),
    }
}

/// Album made from the page header alone, for pages that list no tracks.
pub fn extract_album_header(html: &str) -> Album {
    let document = Html::parse_document(html);
    let header = Header::read(&document);
    Album::new(
        Artist::new(header.creator_name, header.creator_href),
        header.title,
        header.description,
        Vec::new(),
    )
}

/// Markup-structure strategy.
pub struct DomExtractor;

impl AlbumExtractor for DomExtractor {
    fn name(&self) -> &'static str {
        "dom"
    }

    fn album(&self, html: &str) -> Extraction<Album> {
        extract_album(html)
    }
}
