use serde::{Deserialize, Serialize};

/// What a catalog link points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Song,
    Album,
    Playlist,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Song => write!(f, "song"),
            LinkKind::Album => write!(f, "album"),
            LinkKind::Playlist => write!(f, "playlist"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    /// Relative or absolute depending on where it was read; empty when unknown.
    pub url: String,
}

impl Artist {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    pub artist: Artist,
    pub title: String,
    /// Seconds.
    pub duration: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    pub kind: LinkKind,
}

impl Track {
    pub fn new(artist: Artist, title: impl Into<String>, duration: u64, url: impl Into<String>) -> Self {
        Self {
            artist,
            title: title.into(),
            duration,
            url: url.into(),
            album: None,
            kind: LinkKind::Song,
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        let album = album.into();
        self.album = (!album.is_empty()).then_some(album);
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub artist: Artist,
    pub title: String,
    pub description: String,
    pub tracks: Vec<Track>,
    num_tracks: usize,
    pub kind: LinkKind,
}

impl Album {
    pub fn new(
        artist: Artist,
        title: impl Into<String>,
        description: impl Into<String>,
        tracks: Vec<Track>,
    ) -> Self {
        Self {
            artist,
            title: title.into(),
            description: description.into(),
            num_tracks: tracks.len(),
            tracks,
            kind: LinkKind::Album,
        }
    }

    pub fn num_tracks(&self) -> usize {
        self.num_tracks
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub creator: Artist,
    pub title: String,
    pub description: String,
    pub tracks: Vec<Track>,
    num_tracks: usize,
    pub kind: LinkKind,
}

impl Playlist {
    pub fn new(
        creator: Artist,
        title: impl Into<String>,
        description: impl Into<String>,
        tracks: Vec<Track>,
    ) -> Self {
        Self {
            creator,
            title: title.into(),
            description: description.into(),
            num_tracks: tracks.len(),
            tracks,
            kind: LinkKind::Playlist,
        }
    }

    pub fn num_tracks(&self) -> usize {
        self.num_tracks
    }
}

/// Result of a search; each record carries its own `kind`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Item {
    Album(Album),
    Playlist(Playlist),
    Song(Track),
}

impl Item {
    pub fn kind(&self) -> LinkKind {
        match self {
            Item::Album(album) => album.kind,
            Item::Playlist(playlist) => playlist.kind,
            Item::Song(track) => track.kind,
        }
    }
}

#[cfg(test)]
impl Track {
    pub fn mock(title: &str, url: &str) -> Self {
        Self::new(
            Artist::new("Mock Artist", "https://music.apple.com/us/artist/mock/1"),
            title,
            180,
            url,
        )
    }
}
