//! Completion client module for the hosted language-model API

mod client;
mod error;
mod traits;

pub use client::{CompletionSettings, OpenAiClient};
pub use error::TransportError;
pub use traits::CompletionClient;

#[cfg(test)]
pub use traits::MockCompletionClient;
