pub mod script;

use crate::player::traits::{AutomationError, MusicPlayer, NowPlaying};
use script::{decode_data_descriptor, is_app_running, run_script};

/// Apple Music driven over AppleScript (`osascript`).
pub struct AppleMusicPlayer;

impl AppleMusicPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AppleMusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicPlayer for AppleMusicPlayer {
    fn is_running(&self) -> bool {
        is_app_running("Music")
    }

    fn now_playing(&self) -> Result<Option<NowPlaying>, AutomationError> {
        let script = r#"
            tell application "Music"
                if player state is stopped then
                    return "STOPPED"
                end if

                set tName to name of current track
                set tArtist to artist of current track
                set tAlbum to album of current track
                set tState to player state as string

                return tName & "|||" & tArtist & "|||" & tAlbum & "|||" & tState
            end tell
        "#;

        let output = run_script(script)?;
        parse_now_playing(&output)
    }

    fn artwork(&self) -> Result<Option<Vec<u8>>, AutomationError> {
        let script = r#"
            tell application "Music"
                if player state is stopped then
                    return ""
                end if
                try
                    return data of artwork 1 of current track
                on error
                    return ""
                end try
            end tell
        "#;

        let output = run_script(script)?;
        Ok(parse_artwork(&output))
    }

    fn play(&self) -> Result<(), AutomationError> {
        run_script("tell application \"Music\" to play")?;
        Ok(())
    }

    fn pause(&self) -> Result<(), AutomationError> {
        run_script("tell application \"Music\" to pause")?;
        Ok(())
    }

    fn next(&self) -> Result<(), AutomationError> {
        run_script("tell application \"Music\" to next track")?;
        Ok(())
    }

    fn previous(&self) -> Result<(), AutomationError> {
        run_script("tell application \"Music\" to previous track")?;
        Ok(())
    }
}

/// The artwork script returns `""` when the player is stopped or the track
/// has no artwork; anything else is a raw-data descriptor.
fn parse_artwork(output: &str) -> Option<Vec<u8>> {
    if output.is_empty() {
        return None;
    }
    decode_data_descriptor(output)
}

fn parse_now_playing(output: &str) -> Result<Option<NowPlaying>, AutomationError> {
    if output.trim() == "STOPPED" {
        return Ok(None);
    }

    let parts: Vec<&str> = output.split("|||").collect();
    if parts.len() < 4 {
        return Err(AutomationError::Malformed(output.to_string()));
    }

    Ok(Some(NowPlaying {
        title: parts[0].to_string(),
        artist: parts[1].to_string(),
        album: parts[2].to_string(),
        playing: parts[3].trim() == "playing",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_playing_track() {
        let np = parse_now_playing("Song A|||Artist A|||Album A|||playing")
            .unwrap()
            .unwrap();
        assert_eq!(np.title, "Song A");
        assert_eq!(np.artist, "Artist A");
        assert_eq!(np.album, "Album A");
        assert!(np.playing);
    }

    #[test]
    fn parses_paused_track() {
        let np = parse_now_playing("Song|||Artist|||Album|||paused")
            .unwrap()
            .unwrap();
        assert!(!np.playing);
    }

    #[test]
    fn stopped_sentinel_is_not_an_error() {
        assert!(parse_now_playing("STOPPED").unwrap().is_none());
    }

    #[test]
    fn short_response_is_malformed() {
        assert!(matches!(
            parse_now_playing("just noise"),
            Err(AutomationError::Malformed(_))
        ));
    }

    #[test]
    fn empty_artwork_response_is_none() {
        assert_eq!(parse_artwork(""), None);
    }

    #[test]
    fn artwork_descriptor_decodes() {
        assert_eq!(
            parse_artwork("«data tdta4A4B»"),
            Some(vec![0x4a, 0x4b])
        );
    }
}
