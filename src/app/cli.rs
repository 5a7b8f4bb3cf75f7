use clap::{Parser, Subcommand, ValueEnum};

/// tunebar - Apple Music in your terminal and your status bar 🎵
#[derive(Parser, Debug)]
#[command(name = "tunebar", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Issue a playback command and print the resulting state
    Control {
        #[arg(value_enum)]
        action: ControlAction,
    },

    /// Print one now-playing line and exit
    Status,

    /// Print a now-playing line on a fixed cadence (for status bars)
    Widget,
}

/// The three deep-link intents a passive surface can invoke.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ControlAction {
    Previous,
    Toggle,
    Next,
}
