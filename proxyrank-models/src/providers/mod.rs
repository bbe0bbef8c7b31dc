//! Model provider trait and implementations.
//!
//! The [`ModelProvider`] trait is the seam between an experiment and the
//! network. The experiment runner only ever sees `&dyn ModelProvider`, so
//! tests can substitute a scripted provider.
//!
//! # Example
//!
//! ```ignore
//! use proxyrank_models::providers::{ChatRequest, Message, ModelProvider};
//!
//! async fn ask(provider: &dyn ModelProvider) {
//!     let request = ChatRequest::new("openai/gpt-4o", vec![Message::user("Hello!")])
//!         .temperature(0.7);
//!
//!     let response = provider.chat(request).await?;
//!     println!("Response: {}", response.content);
//! }
//! ```

mod openrouter;
mod types;

use async_trait::async_trait;

pub use openrouter::{DEFAULT_BASE_URL, OpenRouterProvider};
pub use types::*;

use crate::Result;

/// Trait for chat model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Returns the provider name (e.g., "openrouter").
    fn name(&self) -> &str;

    /// Perform a chat completion request.
    ///
    /// # Errors
    ///
    /// Transport failures map to `Error::Request`; non-success HTTP statuses
    /// and malformed bodies map to `Error::ProviderApi`.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}
