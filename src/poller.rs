use crate::player::{AutomationError, MusicPlayer, TrackSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Produces the latest [`TrackSnapshot`] on demand and on a timer, and
/// publishes it through a watch channel.
///
/// The watch channel is the single current-snapshot reference: writes swap
/// the whole value, readers either subscribe or read [`latest`]. Every
/// refresh republishes, even when nothing changed; consumers do their own
/// diffing if they care.
///
/// [`latest`]: StatePoller::latest
#[derive(Clone)]
pub struct StatePoller {
    player: Arc<dyn MusicPlayer>,
    tx: Arc<watch::Sender<TrackSnapshot>>,
    call_timeout: Duration,
}

impl StatePoller {
    pub fn new(player: Arc<dyn MusicPlayer>, call_timeout: Duration) -> Self {
        let (tx, _rx) = watch::channel(TrackSnapshot::idle());
        Self {
            player,
            tx: Arc::new(tx),
            call_timeout,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<TrackSnapshot> {
        self.tx.subscribe()
    }

    /// The last published snapshot.
    pub fn latest(&self) -> TrackSnapshot {
        self.tx.borrow().clone()
    }

    /// Query the player and publish a fresh snapshot.
    ///
    /// Player not running and player stopped both publish the idle sentinel.
    /// An automation failure on the metadata round-trip is logged and the
    /// prior snapshot is republished unchanged; the next successful tick
    /// corrects it. There is no fatal path here.
    pub async fn refresh(&self) -> TrackSnapshot {
        let snapshot = match self.query_player().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("poll failed, keeping previous snapshot: {err}");
                self.latest()
            }
        };
        self.tx.send_replace(snapshot.clone());
        snapshot
    }

    async fn query_player(&self) -> Result<TrackSnapshot, AutomationError> {
        let player = self.player.clone();
        let now_playing = self
            .blocking_call(move || {
                if !player.is_running() {
                    return Ok(None);
                }
                player.now_playing()
            })
            .await?;

        let Some(np) = now_playing else {
            return Ok(TrackSnapshot::idle());
        };

        // Artwork is a second, independent round-trip; any failure leaves
        // the snapshot with metadata only.
        let player = self.player.clone();
        let artwork = match self.blocking_call(move || player.artwork()).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("artwork fetch failed: {err}");
                None
            }
        };

        let playing = np.playing;
        Ok(TrackSnapshot::with_track(np.into(), playing, artwork))
    }

    async fn blocking_call<T, F>(&self, call: F) -> Result<T, AutomationError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, AutomationError> + Send + 'static,
    {
        let fut = tokio::task::spawn_blocking(call);
        match timeout(self.call_timeout, fut).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(AutomationError::Script(join_err.to_string())),
            Err(_) => Err(AutomationError::Timeout),
        }
    }

    /// Start a recurring poll at `period`. The owner stops polling by
    /// aborting the returned handle.
    pub fn spawn(&self, period: Duration) -> JoinHandle<()> {
        let poller = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                poller.refresh().await;
            }
        })
    }
}
