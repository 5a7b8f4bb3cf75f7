use thiserror::Error;

/// Failures of the automation surface itself. A player that is not running
/// or has nothing playing is a normal state, not an error, and is reported
/// through `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("automation script failed: {0}")]
    Script(String),

    #[error("unexpected automation response: {0:?}")]
    Malformed(String),

    #[error("automation call timed out")]
    Timeout,

    #[error("failed to spawn automation process: {0}")]
    Io(#[from] std::io::Error),
}

/// One round-trip worth of player state: metadata plus the playing flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub playing: bool,
}

/// The control/query surface the core needs from the external player.
///
/// Calls are synchronous and short-lived; the poller and bridge run them on
/// the blocking pool and apply their own timeout.
pub trait MusicPlayer: Send + Sync {
    fn is_running(&self) -> bool;

    /// Player state and current-track metadata in a single round-trip.
    /// `Ok(None)` means the player is stopped.
    fn now_playing(&self) -> Result<Option<NowPlaying>, AutomationError>;

    /// Current-track artwork as raw encoded bytes. Independent of the
    /// metadata round-trip; `Ok(None)` when the track has no artwork.
    fn artwork(&self) -> Result<Option<Vec<u8>>, AutomationError>;

    fn play(&self) -> Result<(), AutomationError>;
    fn pause(&self) -> Result<(), AutomationError>;
    fn next(&self) -> Result<(), AutomationError>;
    fn previous(&self) -> Result<(), AutomationError>;
}
