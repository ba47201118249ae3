//! Console chat gateway: stdin lines in, stdout lines out.
//!
//! Stands in for a real chat transport when running locally. Each input
//! line is `user: message`; replies are printed prefixed with the channel.

use async_trait::async_trait;
use quizbot_engine::{ChatEvent, ChatGateway, SessionMessage};
use quizbot_error::GatewayError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Gateway printing chat replies to stdout.
pub struct ConsoleGateway {
    channel: String,
    stdout: Mutex<tokio::io::Stdout>,
}

impl ConsoleGateway {
    /// Create a gateway for `channel` (a leading `#` is added if missing).
    pub fn new(channel: impl Into<String>) -> Self {
        let channel = channel.into();
        let channel = if channel.starts_with('#') {
            channel
        } else {
            format!("#{}", channel)
        };
        Self {
            channel,
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

#[async_trait]
impl ChatGateway for ConsoleGateway {
    fn channel(&self) -> &str {
        &self.channel
    }

    async fn say(&self, text: &str) -> Result<(), GatewayError> {
        let mut out = String::new();
        for line in text.lines() {
            out.push_str(&format!("[{}] {}\n", self.channel, line));
        }

        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(out.as_bytes())
            .await
            .map_err(|e| GatewayError::new(format!("Failed to write to stdout: {}", e)))?;
        stdout
            .flush()
            .await
            .map_err(|e| GatewayError::new(format!("Failed to flush stdout: {}", e)))
    }
}

/// Parse a console line of the form `user: message`.
///
/// # Examples
///
/// ```
/// use quizbot::parse_console_line;
///
/// let event = parse_console_line("alice: !answer Paris").unwrap();
/// assert_eq!(event.user(), "alice");
/// assert_eq!(event.text(), "!answer Paris");
/// assert!(parse_console_line("no separator").is_none());
/// ```
pub fn parse_console_line(line: &str) -> Option<ChatEvent> {
    let (user, text) = line.split_once(':')?;
    let user = user.trim();
    if user.is_empty() || user.contains(char::is_whitespace) {
        return None;
    }
    Some(ChatEvent::new(user, text.trim()))
}

/// Read chat lines from stdin and feed them to the session.
///
/// Sends [`SessionMessage::Drain`] at end of input, so a question already
/// scheduled is still posted before the session stops. The session only
/// sees that question if some other sender outlives this reader.
pub fn spawn_console_reader(tx: mpsc::Sender<SessionMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(event) = parse_console_line(&line) else {
                        debug!(%line, "Skipping line without `user:` prefix");
                        continue;
                    };
                    if tx.send(SessionMessage::Chat(event)).await.is_err() {
                        warn!("Session closed, stopping console reader");
                        return;
                    }
                }
                Ok(None) => {
                    info!("End of input");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }

        if tx.send(SessionMessage::Drain).await.is_err() {
            debug!("Session already stopped");
        }
    })
}
