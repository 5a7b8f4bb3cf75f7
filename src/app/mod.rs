pub mod cli;
pub mod events;

use crate::player::TrackSnapshot;
use crate::ui::Theme;
use image::DynamicImage;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

pub enum ArtworkState {
    Idle,
    Loaded(DynamicImage),
    Failed,
}

/// Interactive-view state: the last published snapshot plus the decoded
/// artwork for it. Everything here is replaced from snapshots; the app never
/// edits playback state directly.
pub struct App {
    pub snapshot: TrackSnapshot,
    pub artwork: ArtworkState,
    pub theme: Theme,
    pub show_artwork: bool,
    pub is_running: bool,
    artwork_hash: Option<u64>,
}

impl App {
    pub fn new(theme: Theme, show_artwork: bool) -> Self {
        Self {
            snapshot: TrackSnapshot::idle(),
            artwork: ArtworkState::Idle,
            theme,
            show_artwork,
            is_running: true,
            artwork_hash: None,
        }
    }

    /// Adopt a freshly published snapshot, decoding artwork only when the
    /// bytes actually changed.
    pub fn apply_snapshot(&mut self, snapshot: TrackSnapshot) {
        match snapshot.artwork_bytes() {
            Some(bytes) if self.show_artwork => {
                let hash = hash_bytes(bytes);
                if self.artwork_hash != Some(hash) {
                    self.artwork_hash = Some(hash);
                    self.artwork = match image::load_from_memory(bytes) {
                        Ok(img) => ArtworkState::Loaded(img),
                        Err(err) => {
                            debug!("artwork decode failed: {err}");
                            ArtworkState::Failed
                        }
                    };
                }
            }
            _ => {
                self.artwork_hash = None;
                self.artwork = ArtworkState::Idle;
            }
        }
        self.snapshot = snapshot;
    }
}

fn hash_bytes(data: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    data.hash(&mut hasher);
    hasher.finish()
}
