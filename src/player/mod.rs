pub mod generic;
pub mod snapshot;
pub mod traits;

#[cfg(target_os = "macos")]
pub mod macos;

pub use generic::DummyPlayer;
pub use snapshot::{TrackDetails, TrackSnapshot};
pub use traits::{AutomationError, MusicPlayer, NowPlaying};

#[cfg(target_os = "macos")]
pub use macos::AppleMusicPlayer;

use std::sync::Arc;

/// Factory to get the correct player for the current OS
pub fn get_player() -> Arc<dyn MusicPlayer> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(AppleMusicPlayer::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(DummyPlayer)
    }
}
