use crate::player::{AutomationError, MusicPlayer};
use crate::poller::StatePoller;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Translates user intents into automation calls against the player, then
/// reconciles observed state with a delayed poll.
///
/// Each command issues exactly one automation call with no return-value
/// dependency, then schedules exactly one poller refresh after
/// `refresh_delay`. The delay is a heuristic for the player's asynchronous
/// state transition, not a synchronization guarantee; the published snapshot
/// may lag the true player state for up to the delay window.
///
/// Commands return the scheduled task's handle. Interactive callers drop it
/// (fire-and-forget); one-shot callers await it so the follow-up refresh
/// lands before the process exits.
pub struct CommandBridge {
    player: Arc<dyn MusicPlayer>,
    poller: StatePoller,
    refresh_delay: Duration,
}

impl CommandBridge {
    pub fn new(player: Arc<dyn MusicPlayer>, poller: StatePoller, refresh_delay: Duration) -> Self {
        Self {
            player,
            poller,
            refresh_delay,
        }
    }

    pub fn play(&self) -> JoinHandle<()> {
        self.dispatch("play", |p| p.play())
    }

    pub fn pause(&self) -> JoinHandle<()> {
        self.dispatch("pause", |p| p.pause())
    }

    pub fn next(&self) -> JoinHandle<()> {
        self.dispatch("next", |p| p.next())
    }

    pub fn previous(&self) -> JoinHandle<()> {
        self.dispatch("previous", |p| p.previous())
    }

    /// Dispatch `pause` if the last *published* snapshot says the player is
    /// playing, else `play`. This reads cached state rather than re-querying
    /// the player, so it can issue the wrong command when state changed
    /// between the last poll and the toggle. The delayed refresh corrects
    /// the display either way.
    pub fn toggle_play_pause(&self) -> JoinHandle<()> {
        if self.poller.latest().is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    fn dispatch<F>(&self, name: &'static str, call: F) -> JoinHandle<()>
    where
        F: FnOnce(&dyn MusicPlayer) -> Result<(), AutomationError> + Send + 'static,
    {
        let player = self.player.clone();
        let poller = self.poller.clone();
        let delay = self.refresh_delay;
        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || call(player.as_ref())).await;
            match result {
                Ok(Ok(())) => debug!(command = name, "automation command issued"),
                Ok(Err(err)) => warn!(command = name, "automation command failed: {err}"),
                Err(err) => warn!(command = name, "automation task panicked: {err}"),
            }

            // The player applies commands asynchronously; give it a moment
            // before reading state back.
            tokio::time::sleep(delay).await;
            poller.refresh().await;
        })
    }
}
