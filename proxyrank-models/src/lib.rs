//! Model access for proxyrank.
//!
//! This crate provides:
//! - A catalogue mapping short aliases to provider model IDs
//! - Credential management for API keys
//! - Provider trait for unified inference interface
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   ModelCatalog                       │
//! │   claude-opus ─┐   gpt-4o ─┐   llama-3.1-70b ─┐     │
//! └────────────────┼───────────┼──────────────────┼─────┘
//!                  ▼           ▼                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │        OpenRouterProvider (OpenAI-compatible)        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                  CredentialStore                     │
//! │         (System Keyring + Env Fallback)             │
//! └─────────────────────────────────────────────────────┘
//! ```

mod error;
mod types;

pub mod auth;
pub mod providers;
pub mod registry;

pub use error::{Error, Result};
pub use registry::ModelCatalog;
pub use types::{ModelEntry, ModelId};
