use tracing::{debug, info};

use crate::catalog::{classify, extract_song_id, Album, Item, LinkKind, Playlist};
use crate::config::Config;
use crate::error::Result;
use crate::extract::{
    dom, AlbumExtractor, DomExtractor, Extraction, Mode, Record, StructuredData,
    StructuredDataExtractor,
};
use crate::fetcher::{Fetch, PageFetcher};
use crate::resolver::resolve_track;

/// Per-request knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Report why a search came back empty at `info` level instead of `debug`.
    pub verbose: bool,
}

/// Playlist strategies, cheapest first.
const PLAYLIST_MODES: [Mode; 2] = [Mode::Fast, Mode::Full];

pub struct Searcher<F: Fetch = PageFetcher> {
    fetcher: F,
    options: SearchOptions,
    album_extractors: Vec<Box<dyn AlbumExtractor + Send + Sync>>,
}

impl Searcher<PageFetcher> {
    pub fn from_config(config: &Config, options: SearchOptions) -> Result<Self> {
        Ok(Self::new(PageFetcher::new(config)?, options))
    }
}

impl<F: Fetch> Searcher<F> {
    pub fn new(fetcher: F, options: SearchOptions) -> Self {
        Self {
            fetcher,
            options,
            album_extractors: vec![Box::new(DomExtractor), Box::new(StructuredDataExtractor)],
        }
    }

    /// Look up a song, album or playlist link.
    ///
    /// Links that are not catalog links are an error. Pages that cannot be
    /// fetched or read, and songs missing from their album, give `Ok(None)`.
    pub async fn search(&self, url: &str) -> Result<Option<Item>> {
        let kind = classify(url)?;
        info!("Searching {} link: {}", kind, url);

        let html = match self.fetcher.get(url).await {
            Ok(html) => html,
            Err(e) => {
                self.report(&format!("http request failed: {}", e));
                return Ok(None);
            }
        };

        match kind {
            LinkKind::Playlist => Ok(self.playlist(&html).await?.map(Item::Playlist)),
            LinkKind::Album => Ok(Some(Item::Album(self.album(&html)?))),
            LinkKind::Song => self.song(url, &html),
        }
    }

    fn report(&self, message: &str) {
        if self.options.verbose {
            info!("{}", message);
        } else {
            debug!("{}", message);
        }
    }

    async fn playlist(&self, html: &str) -> Result<Option<Playlist>> {
        let data = StructuredData::from_html(html);

        for mode in PLAYLIST_MODES {
            match self.playlist_with(mode, html, &data).await {
                Extraction::Ok(playlist) => {
                    info!(
                        "Read playlist {:?} with {} tracks ({:?} mode)",
                        playlist.title,
                        playlist.num_tracks(),
                        mode
                    );
                    return Ok(Some(playlist));
                }
                Extraction::NeedsFallback(reason) => {
                    self.report(&format!("{:?} playlist extraction failed: {}", mode, reason));
                }
                Extraction::Fatal(e) => return Err(e),
            }
        }

        Ok(None)
    }

    async fn playlist_with(&self, mode: Mode, html: &str, data: &StructuredData) -> Extraction<Playlist> {
        match mode {
            Mode::Fast => self.fast_playlist(html, data).await,
            Mode::Full => match data.extract(Mode::Full, &self.fetcher).await {
                Ok(Record::Playlist(playlist)) => Extraction::Ok(playlist),
                Ok(_) => Extraction::NeedsFallback("structured data does not describe a playlist".into()),
                Err(e) => Extraction::from_result(Err(e)),
            },
        }
    }

    /// Tracks from the markup, title and creator from the structured summary.
    /// Any failure on this path falls back to full mode.
    async fn fast_playlist(&self, html: &str, data: &StructuredData) -> Extraction<Playlist> {
        let scraped = match dom::extract_playlist(html) {
            Extraction::Ok(playlist) => playlist,
            Extraction::NeedsFallback(reason) => return Extraction::NeedsFallback(reason),
            Extraction::Fatal(e) => return Extraction::NeedsFallback(e.to_string()),
        };

        match data.extract(Mode::Fast, &self.fetcher).await {
            Ok(Record::PlaylistSummary(summary)) => Extraction::Ok(Playlist::new(
                summary.creator,
                summary.title,
                scraped.description,
                scraped.tracks,
            )),
            Ok(_) => Extraction::NeedsFallback("structured data does not describe a playlist".into()),
            Err(e) => Extraction::NeedsFallback(e.to_string()),
        }
    }

    /// Extractors run in order; a page no extractor can read still yields its header.
    fn album(&self, html: &str) -> Result<Album> {
        for extractor in &self.album_extractors {
            match extractor.album(html) {
                Extraction::Ok(album) => {
                    debug!(
                        "Read album {:?} with the {} extractor ({} tracks)",
                        album.title,
                        extractor.name(),
                        album.num_tracks()
                    );
                    return Ok(album);
                }
                Extraction::NeedsFallback(reason) => {
                    self.report(&format!("{} album extraction failed: {}", extractor.name(), reason));
                }
                Extraction::Fatal(e) => return Err(e),
            }
        }

        self.report("no extractor found album tracks, keeping the page header only");
        Ok(dom::extract_album_header(html))
    }

    /// Song links land on their album's page; pick the track out of it.
    fn song(&self, url: &str, html: &str) -> Result<Option<Item>> {
        let album = self.album(html)?;

        let Some(song_id) = extract_song_id(url) else {
            self.report("failed to extract song id");
            return Ok(None);
        };

        match resolve_track(&album, song_id) {
            Some(track) => Ok(Some(Item::Song(track.clone()))),
            None => {
                self.report("track not found in album");
                Ok(None)
            }
        }
    }
}
