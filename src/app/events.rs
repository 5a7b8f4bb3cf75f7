use crate::player::TrackSnapshot;
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    Snapshot(TrackSnapshot),
    Tick,
}
