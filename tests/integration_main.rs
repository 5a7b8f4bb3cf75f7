use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tunebar::bridge::CommandBridge;
use tunebar::player::{AutomationError, MusicPlayer, NowPlaying};
use tunebar::poller::StatePoller;

/// Scriptable automation surface that records every command it receives.
struct MockPlayer {
    running: AtomicBool,
    stopped: AtomicBool,
    playing: AtomicBool,
    fail_metadata: AtomicBool,
    fail_artwork: AtomicBool,
    artwork: Mutex<Option<Vec<u8>>>,
    now_playing_calls: AtomicUsize,
    commands: Mutex<Vec<&'static str>>,
}

impl MockPlayer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            running: AtomicBool::new(true),
            stopped: AtomicBool::new(false),
            playing: AtomicBool::new(true),
            fail_metadata: AtomicBool::new(false),
            fail_artwork: AtomicBool::new(false),
            artwork: Mutex::new(Some(vec![0x89, b'P', b'N', b'G'])),
            now_playing_calls: AtomicUsize::new(0),
            commands: Mutex::new(Vec::new()),
        })
    }

    fn commands(&self) -> Vec<&'static str> {
        self.commands.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.commands.lock().unwrap().push(name);
    }
}

impl MusicPlayer for MockPlayer {
    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn now_playing(&self) -> Result<Option<NowPlaying>, AutomationError> {
        self.now_playing_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_metadata.load(Ordering::SeqCst) {
            return Err(AutomationError::Script("mock metadata failure".into()));
        }
        if self.stopped.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(Some(NowPlaying {
            title: "Song A".to_string(),
            artist: "Artist A".to_string(),
            album: "Album A".to_string(),
            playing: self.playing.load(Ordering::SeqCst),
        }))
    }

    fn artwork(&self) -> Result<Option<Vec<u8>>, AutomationError> {
        if self.fail_artwork.load(Ordering::SeqCst) {
            return Err(AutomationError::Script("mock artwork failure".into()));
        }
        Ok(self.artwork.lock().unwrap().clone())
    }

    fn play(&self) -> Result<(), AutomationError> {
        self.record("play");
        Ok(())
    }

    fn pause(&self) -> Result<(), AutomationError> {
        self.record("pause");
        Ok(())
    }

    fn next(&self) -> Result<(), AutomationError> {
        self.record("next");
        Ok(())
    }

    fn previous(&self) -> Result<(), AutomationError> {
        self.record("previous");
        Ok(())
    }
}

fn poller_for(player: Arc<MockPlayer>) -> StatePoller {
    StatePoller::new(player, Duration::from_secs(1))
}

fn bridge_for(player: Arc<MockPlayer>, poller: StatePoller) -> CommandBridge {
    // Short reconcile delay keeps the tests fast without changing behavior.
    CommandBridge::new(player, poller, Duration::from_millis(10))
}

#[tokio::test]
async fn refresh_publishes_playing_track() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());

    let snap = poller.refresh().await;
    let track = snap.track.as_ref().expect("track should be present");
    assert_eq!(track.title, "Song A");
    assert_eq!(track.artist, "Artist A");
    assert_eq!(track.album, "Album A");
    assert!(snap.is_playing);
    assert_eq!(snap.artwork_bytes(), Some(&[0x89, b'P', b'N', b'G'][..]));
}

#[tokio::test]
async fn refresh_yields_idle_when_player_not_running_regardless_of_prior_state() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());

    let snap = poller.refresh().await;
    assert!(snap.has_track());

    player.running.store(false, Ordering::SeqCst);
    let snap = poller.refresh().await;
    assert!(!snap.has_track());
    assert!(!snap.is_playing);
    assert!(snap.artwork.is_none());
}

#[tokio::test]
async fn refresh_yields_idle_when_player_stopped() {
    let player = MockPlayer::new();
    player.stopped.store(true, Ordering::SeqCst);
    let poller = poller_for(player.clone());

    let snap = poller.refresh().await;
    assert!(!snap.has_track());
    assert!(!snap.is_playing);
    assert!(snap.artwork.is_none());
}

#[tokio::test]
async fn artwork_failure_does_not_block_metadata() {
    let player = MockPlayer::new();
    player.fail_artwork.store(true, Ordering::SeqCst);
    let poller = poller_for(player.clone());

    let snap = poller.refresh().await;
    let track = snap.track.expect("metadata must survive artwork failure");
    assert_eq!(track.title, "Song A");
    assert!(snap.artwork.is_none());
}

#[tokio::test]
async fn missing_artwork_is_not_an_error() {
    let player = MockPlayer::new();
    *player.artwork.lock().unwrap() = None;
    let poller = poller_for(player.clone());

    let snap = poller.refresh().await;
    assert!(snap.has_track());
    assert!(snap.artwork.is_none());
}

#[tokio::test]
async fn metadata_failure_retains_prior_snapshot() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());

    let first = poller.refresh().await;
    assert!(first.has_track());

    player.fail_metadata.store(true, Ordering::SeqCst);
    let second = poller.refresh().await;
    assert!(second.has_track());
    assert!(second.is_playing);
    assert_eq!(second.track, first.track);

    // A later successful tick corrects the published state.
    player.fail_metadata.store(false, Ordering::SeqCst);
    player.stopped.store(true, Ordering::SeqCst);
    let third = poller.refresh().await;
    assert!(!third.has_track());
}

#[tokio::test]
async fn every_refresh_republishes_even_when_identical() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());
    let mut rx = poller.subscribe();

    poller.refresh().await;
    assert!(rx.has_changed().unwrap());
    rx.borrow_and_update();

    poller.refresh().await;
    assert!(rx.has_changed().unwrap());
}

#[tokio::test]
async fn toggle_dispatches_play_when_last_published_state_is_paused() {
    let player = MockPlayer::new();
    player.playing.store(false, Ordering::SeqCst);
    let poller = poller_for(player.clone());
    let bridge = bridge_for(player.clone(), poller.clone());

    poller.refresh().await;
    bridge.toggle_play_pause().await.unwrap();

    assert_eq!(player.commands(), vec!["play"]);
}

#[tokio::test]
async fn toggle_dispatches_pause_when_last_published_state_is_playing() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());
    let bridge = bridge_for(player.clone(), poller.clone());

    poller.refresh().await;
    bridge.toggle_play_pause().await.unwrap();

    assert_eq!(player.commands(), vec!["pause"]);
}

#[tokio::test]
async fn toggle_reads_stale_published_state_not_live_state() {
    let player = MockPlayer::new();
    player.playing.store(false, Ordering::SeqCst);
    let poller = poller_for(player.clone());
    let bridge = bridge_for(player.clone(), poller.clone());

    poller.refresh().await;

    // Live state flips after the last poll; the toggle must not notice.
    player.playing.store(true, Ordering::SeqCst);
    bridge.toggle_play_pause().await.unwrap();

    assert_eq!(player.commands(), vec!["play"]);
}

#[tokio::test]
async fn each_command_triggers_exactly_one_follow_up_refresh() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());
    let bridge = bridge_for(player.clone(), poller.clone());

    let mut issued = Vec::new();
    for name in ["play", "pause", "next", "previous"] {
        let before = player.now_playing_calls.load(Ordering::SeqCst);
        let handle = match name {
            "play" => bridge.play(),
            "pause" => bridge.pause(),
            "next" => bridge.next(),
            _ => bridge.previous(),
        };
        handle.await.unwrap();
        let after = player.now_playing_calls.load(Ordering::SeqCst);

        assert_eq!(after - before, 1, "{name} must schedule exactly one refresh");
        issued.push(name);
        assert_eq!(player.commands(), issued);
    }
}

#[tokio::test]
async fn command_refresh_updates_published_snapshot() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());
    let bridge = bridge_for(player.clone(), poller.clone());
    let mut rx = poller.subscribe();

    bridge.play().await.unwrap();

    assert!(rx.has_changed().unwrap());
    let snap = rx.borrow_and_update().clone();
    assert!(snap.has_track());
}

#[tokio::test]
async fn spawned_poller_keeps_publishing() {
    let player = MockPlayer::new();
    let poller = poller_for(player.clone());

    let handle = poller.spawn(Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(120)).await;
    handle.abort();

    assert!(player.now_playing_calls.load(Ordering::SeqCst) >= 2);
    assert!(poller.latest().has_track());
}
