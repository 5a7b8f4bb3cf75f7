pub mod player_card;
pub mod theme;
pub mod utils;

pub use theme::Theme;

use crate::app::App;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    player_card::render(f, f.area(), app);
}
