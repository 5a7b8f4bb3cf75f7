use std::sync::Arc;
use std::time::SystemTime;

/// Metadata of the track the player is currently on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDetails {
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl TrackDetails {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
        }
    }

    /// Title with a fallback so the UI never renders an empty line.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "No Title"
        } else {
            &self.title
        }
    }

    pub fn display_artist(&self) -> &str {
        if self.artist.is_empty() {
            "Unknown Artist"
        } else {
            &self.artist
        }
    }

    pub fn display_album(&self) -> &str {
        if self.album.is_empty() {
            "Unknown Album"
        } else {
            &self.album
        }
    }
}

/// Immutable record of now-playing state at one instant.
///
/// Snapshots are produced whole by the poller and replaced whole; nothing
/// mutates one after construction. `track == None` is the idle sentinel:
/// player not running, stopped, or with nothing loaded.
#[derive(Debug, Clone)]
pub struct TrackSnapshot {
    pub track: Option<TrackDetails>,
    pub is_playing: bool,
    pub artwork: Option<Arc<Vec<u8>>>,
    pub captured_at: SystemTime,
}

impl TrackSnapshot {
    /// The "no track" sentinel.
    pub fn idle() -> Self {
        Self {
            track: None,
            is_playing: false,
            artwork: None,
            captured_at: SystemTime::now(),
        }
    }

    pub fn with_track(track: TrackDetails, is_playing: bool, artwork: Option<Vec<u8>>) -> Self {
        Self {
            track: Some(track),
            is_playing,
            artwork: artwork.map(Arc::new),
            captured_at: SystemTime::now(),
        }
    }

    pub fn has_track(&self) -> bool {
        self.track.is_some()
    }

    pub fn artwork_bytes(&self) -> Option<&[u8]> {
        self.artwork.as_deref().map(|b| b.as_slice())
    }
}

impl Default for TrackSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

impl From<crate::player::traits::NowPlaying> for TrackDetails {
    fn from(np: crate::player::traits::NowPlaying) -> Self {
        TrackDetails::new(np.title, np.artist, np.album)
    }
}
