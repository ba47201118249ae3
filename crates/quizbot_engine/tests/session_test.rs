//! Tests for the session actor and scheduler wiring.

use async_trait::async_trait;
use quizbot_core::{GameMode, Question, QuestionBank, QuestionSource};
use quizbot_engine::{
    ChatEvent, ChatGateway, EngineConfig, GameEngine, QuizSession, SessionMessage,
};
use quizbot_error::GatewayError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};

/// Gateway that records everything said.
#[derive(Default)]
struct RecordingGateway {
    said: Mutex<Vec<String>>,
}

impl RecordingGateway {
    fn said(&self) -> Vec<String> {
        self.said.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatGateway for RecordingGateway {
    fn channel(&self) -> &str {
        "#streamer"
    }

    async fn say(&self, text: &str) -> Result<(), GatewayError> {
        self.said.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Gateway whose transport is always down.
struct BrokenGateway;

#[async_trait]
impl ChatGateway for BrokenGateway {
    fn channel(&self) -> &str {
        "#streamer"
    }

    async fn say(&self, _text: &str) -> Result<(), GatewayError> {
        Err(GatewayError::new("disconnected"))
    }
}

fn engine() -> GameEngine<StdRng> {
    let bank = Arc::new(
        QuestionBank::new(vec![
            Question::new("2+2?", "4"),
            Question::new("Capital of France?", "Paris"),
        ])
        .expect("Valid bank"),
    );
    let config = EngineConfig::new("streamer").with_next_question_delay(Duration::from_secs(2));
    GameEngine::with_source(config, QuestionSource::with_rng(bank, StdRng::seed_from_u64(3)))
}

async fn chat(tx: &mpsc::Sender<SessionMessage>, user: &str, text: &str) {
    tx.send(SessionMessage::Chat(ChatEvent::new(user, text)))
        .await
        .expect("Session running");
}

fn is_question(line: &str) -> bool {
    line.starts_with("🧠 Quiz Question: ")
}

#[tokio::test(start_paused = true)]
async fn test_next_question_arrives_after_delay() {
    let gateway = Arc::new(RecordingGateway::default());
    let (session, tx) = QuizSession::with_tokio_scheduler(engine(), Arc::clone(&gateway));
    let handle = tokio::spawn(session.run());

    chat(&tx, "alice", "!single").await;
    sleep(Duration::from_millis(10)).await;

    let said = gateway.said();
    let first = said.last().expect("Question posed").clone();
    let answer = if first.contains("2+2?") { "4" } else { "paris" };

    chat(&tx, "alice", &format!("!answer {}", answer)).await;
    sleep(Duration::from_millis(500)).await;
    assert!(!is_question(gateway.said().last().expect("Reply")));

    sleep(Duration::from_secs(3)).await;
    let said = gateway.said();
    let second = said.last().expect("Next question").clone();
    assert!(is_question(&second));
    assert_ne!(first, second);

    tx.send(SessionMessage::Shutdown).await.expect("Session running");
    let state = handle.await.expect("Session task");
    assert!(state.is_active());
    assert_eq!(state.mode(), GameMode::SinglePlayer);
    assert!(state.current().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_end_cancels_pending_question() {
    let gateway = Arc::new(RecordingGateway::default());
    let (session, tx) = QuizSession::with_tokio_scheduler(engine(), Arc::clone(&gateway));
    let handle = tokio::spawn(session.run());

    chat(&tx, "alice", "!single").await;
    chat(&tx, "alice", "!pass").await;
    chat(&tx, "Streamer", "!end").await;
    sleep(Duration::from_secs(10)).await;

    let said = gateway.said();
    assert_eq!(
        said.last().map(String::as_str),
        Some("🛑 Game ended by streamer. Type !playquiz to join next round!")
    );
    assert_eq!(said.iter().filter(|line| is_question(line)).count(), 1);

    tx.send(SessionMessage::Shutdown).await.expect("Session running");
    let state = handle.await.expect("Session task");
    assert!(!state.is_active());
    assert!(state.current().is_none());
    assert!(state.scores().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_ignored_chatter_produces_no_replies() {
    let gateway = Arc::new(RecordingGateway::default());
    let (session, tx) = QuizSession::with_tokio_scheduler(engine(), Arc::clone(&gateway));
    let handle = tokio::spawn(session.run());

    chat(&tx, "bob", "hello there").await;
    chat(&tx, "bob", "!answer").await;
    tx.send(SessionMessage::Shutdown).await.expect("Session running");
    handle.await.expect("Session task");

    assert_eq!(
        gateway.said(),
        ["bob, no active game right now. Type !playquiz to join and !start to begin."]
    );
}

#[tokio::test(start_paused = true)]
async fn test_gateway_failures_do_not_affect_state() {
    let (session, tx) = QuizSession::with_tokio_scheduler(engine(), Arc::new(BrokenGateway));
    let handle = tokio::spawn(session.run());

    chat(&tx, "alice", "!playquiz").await;
    chat(&tx, "bob", "!playquiz").await;
    chat(&tx, "streamer", "!start").await;
    tx.send(SessionMessage::Shutdown).await.expect("Session running");

    let state = handle.await.expect("Session task");
    assert!(state.is_active());
    assert_eq!(state.mode(), GameMode::Multiplayer);
    assert_eq!(state.scores().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_run_ends_when_senders_dropped() {
    let gateway = Arc::new(RecordingGateway::default());
    let (session, tx) = QuizSession::with_tokio_scheduler(engine(), Arc::clone(&gateway));
    let handle = tokio::spawn(session.run());

    chat(&tx, "alice", "!single").await;
    chat(&tx, "alice", "!pass").await;
    drop(tx);

    let state = timeout(Duration::from_secs(1), handle)
        .await
        .expect("Session stops without senders")
        .expect("Session task");
    assert!(state.is_active());
    assert!(state.current().is_none());

    // The skip scheduled a question; it has nowhere to go once the session is gone.
    sleep(Duration::from_secs(5)).await;
    assert_eq!(gateway.said().iter().filter(|line| is_question(line)).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_drain_waits_for_scheduled_question() {
    let gateway = Arc::new(RecordingGateway::default());
    let (session, tx) = QuizSession::with_tokio_scheduler(engine(), Arc::clone(&gateway));
    let handle = tokio::spawn(session.run());

    chat(&tx, "alice", "!single").await;
    chat(&tx, "alice", "!pass").await;
    tx.send(SessionMessage::Drain).await.expect("Session running");

    let state = timeout(Duration::from_secs(5), handle)
        .await
        .expect("Session drains")
        .expect("Session task");

    let said = gateway.said();
    assert!(is_question(said.last().expect("Reply")));
    assert_eq!(said.iter().filter(|line| is_question(line)).count(), 2);
    assert!(state.current().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_drain_with_nothing_scheduled_stops_at_once() {
    let gateway = Arc::new(RecordingGateway::default());
    let (session, tx) = QuizSession::with_tokio_scheduler(engine(), Arc::clone(&gateway));
    let handle = tokio::spawn(session.run());

    chat(&tx, "alice", "!single").await;
    tx.send(SessionMessage::Drain).await.expect("Session running");

    let state = timeout(Duration::from_millis(10), handle)
        .await
        .expect("Session stops")
        .expect("Session task");
    assert!(state.current().is_some());
    assert_eq!(gateway.said().len(), 2);
}
