use tracing::debug;

use crate::catalog::{song_title_slug, Album, Track};
use crate::error::Result;
use crate::extract::StructuredData;
use crate::fetcher::Fetch;

/// True when `url` carries `?i=<song_id>` with no further digits after the id.
fn has_track_index(url: &str, song_id: u64) -> bool {
    let needle = format!("?i={}", song_id);
    url.match_indices(&needle).any(|(pos, _)| {
        !url[pos + needle.len()..]
            .starts_with(|c: char| c.is_ascii_digit())
    })
}

/// Find the album track whose link points at `song_id`.
/// `None` is a normal outcome: the song may have been removed from the album.
pub fn resolve_track(album: &Album, song_id: u64) -> Option<&Track> {
    let track = album.tracks.iter().find(|t| has_track_index(&t.url, song_id));
    if track.is_none() {
        debug!("No track with id {} in album {:?}", song_id, album.title);
    }
    track
}

/// Build a track from a song's own page: artist and album come from the page's
/// album metadata, the title from the link's slug.
pub async fn resolve_song<F: Fetch>(fetcher: &F, url: &str) -> Result<Track> {
    let html = fetcher.get(url).await?;
    let summary = StructuredData::from_html(&html).album_summary()?;
    let title = song_title_slug(url).unwrap_or_default();

    Ok(Track::new(summary.artist, title, 0, url).with_album(summary.album))
}
