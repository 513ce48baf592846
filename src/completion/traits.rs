//! Trait abstraction for the completion client to enable mocking in tests

use super::TransportError;
use async_trait::async_trait;

/// A single round trip to a text-completion service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` and return the text of the one completion in the reply
    async fn get_completion(&self, prompt: &str) -> Result<String, TransportError>;
}
