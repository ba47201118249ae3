//! Session actor: the single processing turn for one channel.

use crate::{ChatEvent, ChatGateway, GameEngine, Outcome, Scheduler, TokioScheduler};
use quizbot_core::SessionState;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Buffer size of the session channel.
pub const SESSION_CHANNEL_CAPACITY: usize = 64;

/// Message types for the session actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Inbound chat line
    Chat(ChatEvent),
    /// Scheduled next-question request issued in `epoch`
    AskNext {
        /// Session epoch at scheduling time
        epoch: u64,
    },
    /// Stop the session
    Shutdown,
    /// Stop once every scheduled follow-up has fired
    Drain,
}

/// Actor that owns a [`GameEngine`] and applies messages one at a time.
///
/// Chat events and scheduled follow-ups share one queue, so a follow-up
/// never interleaves with a command; it can only be ordered after one.
pub struct QuizSession<G, S, R> {
    engine: GameEngine<R>,
    gateway: Arc<G>,
    scheduler: S,
    rx: mpsc::Receiver<SessionMessage>,
    /// Follow-ups handed to the scheduler and not yet received back.
    pending: usize,
    draining: bool,
}

impl<G, R> QuizSession<G, TokioScheduler, R>
where
    G: ChatGateway,
    R: Rng,
{
    /// Create a session wired to a fresh channel and a tokio scheduler.
    ///
    /// Returns the session and the sender that feeds it chat events. The
    /// scheduler only holds a weak handle, so dropping every returned sender
    /// (and its clones) ends [`QuizSession::run`]; follow-ups still waiting
    /// at that point are discarded.
    pub fn with_tokio_scheduler(
        engine: GameEngine<R>,
        gateway: Arc<G>,
    ) -> (Self, mpsc::Sender<SessionMessage>) {
        let (tx, rx) = mpsc::channel(SESSION_CHANNEL_CAPACITY);
        let scheduler = TokioScheduler::new(&tx);
        (Self::new(engine, gateway, scheduler, rx), tx)
    }
}

impl<G, S, R> QuizSession<G, S, R>
where
    G: ChatGateway,
    S: Scheduler,
    R: Rng,
{
    /// Creates a new session.
    pub fn new(
        engine: GameEngine<R>,
        gateway: Arc<G>,
        scheduler: S,
        rx: mpsc::Receiver<SessionMessage>,
    ) -> Self {
        Self {
            engine,
            gateway,
            scheduler,
            rx,
            pending: 0,
            draining: false,
        }
    }

    /// Runs the session loop until it is told to stop or its channel closes.
    ///
    /// [`SessionMessage::Shutdown`] stops immediately, discarding scheduled
    /// follow-ups. [`SessionMessage::Drain`] stops once the follow-ups
    /// scheduled so far have been handled; the caller must keep a sender
    /// alive until then. Returns the final session state.
    #[instrument(skip(self), fields(channel = %self.gateway.channel()))]
    pub async fn run(mut self) -> SessionState {
        info!("Quiz session started");

        while let Some(msg) = self.rx.recv().await {
            let outcome = match msg {
                SessionMessage::Chat(event) => self.engine.handle_event(&event),
                SessionMessage::AskNext { epoch } => {
                    self.pending = self.pending.saturating_sub(1);
                    self.engine.ask_next(epoch)
                }
                SessionMessage::Shutdown => {
                    info!(pending = self.pending, "Quiz session shutting down");
                    break;
                }
                SessionMessage::Drain => {
                    debug!(pending = self.pending, "Draining quiz session");
                    self.draining = true;
                    Outcome::default()
                }
            };
            self.deliver(outcome).await;

            if self.draining && self.pending == 0 {
                info!("Quiz session drained");
                break;
            }
        }

        self.engine.state().clone()
    }

    async fn deliver(&mut self, outcome: Outcome) {
        for reply in outcome.replies() {
            if let Err(e) = self.gateway.say(reply).await {
                warn!(error = %e, "Failed to send chat message");
            }
        }

        if let Some(follow_up) = outcome.follow_up() {
            debug!(
                epoch = follow_up.epoch(),
                delay_ms = follow_up.delay().as_millis() as u64,
                "Scheduling next question"
            );
            self.scheduler.after(
                *follow_up.delay(),
                SessionMessage::AskNext {
                    epoch: *follow_up.epoch(),
                },
            );
            self.pending += 1;
        }
    }
}
