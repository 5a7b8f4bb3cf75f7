use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tunebar::app::cli::{Args, Command, ControlAction};
use tunebar::app::events::AppEvent;
use tunebar::app::App;
use tunebar::bridge::CommandBridge;
use tunebar::config::AppConfig;
use tunebar::player;
use tunebar::poller::StatePoller;
use tunebar::status::format_status;
use tunebar::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load();
    let _log_guard = init_logging();

    let player = player::get_player();
    let poller = StatePoller::new(
        player.clone(),
        Duration::from_millis(config.automation_timeout_ms),
    );
    let bridge = CommandBridge::new(
        player,
        poller.clone(),
        Duration::from_millis(config.command_refresh_delay_ms),
    );

    match args.command {
        Some(Command::Control { action }) => run_control(action, &poller, &bridge).await,
        Some(Command::Status) => {
            let snapshot = poller.refresh().await;
            println!("{}", format_status(&snapshot));
            Ok(())
        }
        Some(Command::Widget) => run_widget(&config, &poller).await,
        None => run_tui(&config, poller, bridge).await,
    }
}

/// Deep-link surface: one command, one awaited follow-up refresh, then the
/// resulting state on stdout.
async fn run_control(
    action: ControlAction,
    poller: &StatePoller,
    bridge: &CommandBridge,
) -> Result<()> {
    let handle = match action {
        ControlAction::Previous => bridge.previous(),
        ControlAction::Next => bridge.next(),
        ControlAction::Toggle => {
            // Toggle decides from the last published snapshot; a one-shot
            // process has published nothing yet, so seed it with one poll.
            poller.refresh().await;
            bridge.toggle_play_pause()
        }
    };

    handle.await?;
    println!("{}", format_status(&poller.latest()));
    Ok(())
}

/// Passive widget surface: its own cadence, one line per tick, runs until
/// the host kills it.
async fn run_widget(config: &AppConfig, poller: &StatePoller) -> Result<()> {
    let mut interval = tokio::time::interval(Duration::from_millis(config.widget_interval_ms));
    let mut stdout = io::stdout();
    loop {
        interval.tick().await;
        let snapshot = poller.refresh().await;
        writeln!(stdout, "{}", format_status(&snapshot))?;
        stdout.flush()?;
    }
}

async fn run_tui(config: &AppConfig, poller: StatePoller, bridge: CommandBridge) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = ui::theme::load_current_theme();
    let mut app = App::new(theme, config.show_artwork);

    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

    // 1. Input Event Task
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Snapshot Forwarding Task (watch -> UI events)
    let tx_snapshot = tx.clone();
    let mut snapshot_rx = poller.subscribe();
    let forward_task = tokio::spawn(async move {
        while snapshot_rx.changed().await.is_ok() {
            let snapshot = snapshot_rx.borrow_and_update().clone();
            if tx_snapshot.send(AppEvent::Snapshot(snapshot)).await.is_err() {
                break;
            }
        }
    });

    // 3. Poll Task (first tick fires immediately)
    let poll_task = poller.spawn(Duration::from_millis(config.poll_interval_ms));

    // 4. Redraw Tick Task
    let tx_tick = tx.clone();
    let tick_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(500));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    info!("interactive view started");

    while app.is_running {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        match rx.recv().await {
            Some(AppEvent::Input(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.is_running = false,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.is_running = false;
                    }
                    KeyCode::Char(' ') => {
                        // Fire-and-forget; the bridge schedules its own
                        // refresh and the watch channel brings the result.
                        let _ = bridge.toggle_play_pause();
                    }
                    KeyCode::Char('n') | KeyCode::Right => {
                        let _ = bridge.next();
                    }
                    KeyCode::Char('p') | KeyCode::Left => {
                        let _ = bridge.previous();
                    }
                    _ => {}
                }
            }
            Some(AppEvent::Snapshot(snapshot)) => app.apply_snapshot(snapshot),
            Some(AppEvent::Input(_)) | Some(AppEvent::Tick) => {}
            None => app.is_running = false,
        }
    }

    // Teardown: polling stops with the owning view, not with process exit.
    poll_task.abort();
    input_task.abort();
    forward_task.abort();
    tick_task.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(AppConfig::config_dir(), "tunebar.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    guard
}
