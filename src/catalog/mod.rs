pub mod link;
pub mod models;

pub use link::{classify, extract_song_id, song_title_slug};
pub use models::{Album, Artist, Item, LinkKind, Playlist, Track};
