use crate::player::traits::{AutomationError, MusicPlayer, NowPlaying};

/// Placeholder player for platforms without an Apple Music automation
/// surface. Reports "not running" so every poll yields the idle snapshot.
pub struct DummyPlayer;

impl MusicPlayer for DummyPlayer {
    fn is_running(&self) -> bool {
        false
    }

    fn now_playing(&self) -> Result<Option<NowPlaying>, AutomationError> {
        Ok(None)
    }

    fn artwork(&self) -> Result<Option<Vec<u8>>, AutomationError> {
        Ok(None)
    }

    fn play(&self) -> Result<(), AutomationError> {
        Ok(())
    }

    fn pause(&self) -> Result<(), AutomationError> {
        Ok(())
    }

    fn next(&self) -> Result<(), AutomationError> {
        Ok(())
    }

    fn previous(&self) -> Result<(), AutomationError> {
        Ok(())
    }
}
