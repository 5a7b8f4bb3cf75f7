//! Single-line snapshot rendering for passive hosts (tmux status bars and
//! anything else that can only interpolate a command's stdout).

use crate::player::TrackSnapshot;

/// Format one status line for the snapshot. Never empty: the idle sentinel
/// renders the fixed placeholder.
pub fn format_status(snapshot: &TrackSnapshot) -> String {
    match &snapshot.track {
        Some(track) => {
            let glyph = if snapshot.is_playing { "▶" } else { "⏸" };
            format!(
                "{} {} — {}",
                glyph,
                track.display_title(),
                track.display_artist()
            )
        }
        None => "No Music Playing".to_string(),
    }
}
