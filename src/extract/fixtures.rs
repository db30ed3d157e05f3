//! Trimmed-down catalog pages used across the extraction and search tests.

pub const PLAYLIST_URL: &str =
    "https://music.apple.com/us/playlist/office-dj/pl.f820ed7063f9447f8751abf885525698";

pub const ALBUM_URL: &str = "https://music.apple.com/us/album/jazz/1440650428";

pub const SONG_URL_1: &str = "https://music.apple.com/us/song/mustapha/1440650711";
pub const SONG_URL_2: &str = "https://music.apple.com/us/song/heartbeat/1440650900";

const PLAYLIST_LD: &str = r#"
<script type="application/ld+json">
{
  "@context": "http://schema.org",
  "@type": "MusicPlaylist",
  "name": "Office DJ",
  "description": "Keep the office moving.",
  "author": {"@type": "Person", "name": "Apple Music", "url": "https://music.apple.com/us/curator/apple-music/976439548"},
  "track": [
    {"@type": "MusicRecording", "name": "Mustapha", "url": "https://music.apple.com/us/song/mustapha/1440650711", "duration": "PT3M1S"},
    {"@type": "MusicRecording", "name": "Heartbeat", "url": "https://music.apple.com/us/song/heartbeat/1440650900", "duration": "PT4M10S"}
  ]
}
</script>
"#;

const PLAYLIST_HEADER: &str = r#"
<div class="product-page-header">
  <h1 class="product-name"> Office DJ (header) </h1>
  <div class="product-creator"><a class="dt-link-to" href="/us/curator/apple-music/976439548"> Apple Music </a></div>
  <div class="product-page-header__metadata--notes"> Keep the office moving. </div>
</div>
"#;

const PLAYLIST_ROWS: &str = r#"
<div class="songs-list">
  <div class="songs-list-row">
    <div class="songs-list__col--song"><div class="songs-list-row__song-name">Mustapha</div></div>
    <div class="songs-list__col--artist"><a class="songs-list-row__link" href="https://music.apple.com/us/artist/queen/3296287">Queen</a></div>
    <div class="songs-list__col--album"><a class="songs-list-row__link" href="https://music.apple.com/us/album/jazz/1440650428?i=1440650711">Jazz</a></div>
    <div class="songs-list__col--time"><time>3:01</time></div>
  </div>
  <div class="songs-list-row">
    <div class="songs-list__col--song"><div class="songs-list-row__song-name">Heartbeat</div></div>
    <div class="songs-list__col--artist"><a class="songs-list-row__link" href="https://music.apple.com/us/artist/tears/1">Tears</a></div>
    <div class="songs-list__col--album"><a class="songs-list-row__link" href="https://music.apple.com/us/album/beat/1440650800?i=1440650900">Beat</a></div>
    <div class="songs-list__col--time"><time>
      4:10
    </time></div>
  </div>
</div>
"#;

pub fn playlist_page() -> String {
    playlist_page_with_metadata(PLAYLIST_LD)
}

/// Playlist markup with the given structured data in place of the playlist block.
pub fn playlist_page_with_metadata(ld: &str) -> String {
    format!(
        "<html><head>{}</head><body>{}{}</body></html>",
        ld, PLAYLIST_HEADER, PLAYLIST_ROWS
    )
}

/// Same playlist after a redesign renamed the row classes.
pub fn playlist_page_with_broken_rows() -> String {
    format!(
        "<html><head>{}</head><body>{}{}</body></html>",
        PLAYLIST_LD,
        PLAYLIST_HEADER,
        PLAYLIST_ROWS.replace("songs-list-row\"", "tracklist-item\"")
    )
}

pub const ALBUM_PAGE: &str = r#"
<html>
<head>
  <meta property="og:url" content="https://music.apple.com/us/album/jazz/1440650428">
  <script type="application/ld+json">
  {"@context": "http://schema.org", "@type": "MusicAlbum", "name": "Jazz",
   "byArtist": [{"@type": "MusicGroup", "name": "Queen", "url": "https://music.apple.com/us/artist/queen/3296287"}],
   "tracks": [{"@type": "MusicRecording", "name": "Mustapha", "duration": "PT3M1S"}]}
  </script>
</head>
<body>
  <div class="product-page-header">
    <h1 class="product-name">Jazz</h1>
    <div class="product-creator"><a class="dt-link-to" href="/us/artist/queen/3296287">Queen</a></div>
    <div class="product-page-header__metadata--notes">Seventh studio album.</div>
  </div>
  <div class="songs-list-row">
    <div class="songs-list__col--song"><div class="songs-list-row__song-name">Mustapha</div></div>
    <div class="songs-list__col--time">
      <button class="preview-button" data-metrics-click='{"actionType":"play","targetId":"1440650711"}'></button>
      <time>3:01</time>
    </div>
  </div>
  <div class="songs-list-row">
    <div class="songs-list__col--song"><div class="songs-list-row__song-name">Fat Bottomed Girls</div></div>
    <div class="songs-list__col--time">
      <button class="preview-button" data-metrics-click='{"targetId":1440650712}'></button>
      <time>4:16</time>
    </div>
  </div>
  <div class="songs-list-row">
    <div class="songs-list__col--song"><div class="songs-list-row__song-name">Jealousy</div></div>
    <div class="songs-list__col--time">
      <button class="preview-button" data-metrics-click='not json'></button>
    </div>
  </div>
</body>
</html>
"#;

/// Song pages expose the album they belong to as structured data.
pub fn song_page(album: &str, artist: &str) -> String {
    format!(
        r#"<html><head>
<script type="application/ld+json">{{"@context": "http://schema.org", "@type": "MusicAlbum", "name": "{}", "byArtist": {{"@type": "MusicGroup", "name": "{}", "url": "https://music.apple.com/us/artist/x/1"}}}}</script>
</head><body></body></html>"#,
        album, artist
    )
}
