//! Outbound chat seam.

use async_trait::async_trait;
use quizbot_error::GatewayError;

/// Sink for text posted back to the channel a command came from.
///
/// Implemented by the chat transport. The engine treats sending as
/// fire-and-forget: a failed send is logged and never changes game state.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Channel this gateway posts to.
    fn channel(&self) -> &str;

    /// Post one message.
    ///
    /// # Errors
    ///
    /// Returns error if the transport could not deliver the message.
    async fn say(&self, text: &str) -> Result<(), GatewayError>;
}
