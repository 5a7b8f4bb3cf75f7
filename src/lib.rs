pub mod app;
pub mod bridge;
pub mod config;
pub mod player;
pub mod poller;
pub mod status;
pub mod ui;
