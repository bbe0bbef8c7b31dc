//! Credential management for API keys.
//!
//! Provides secure storage of API keys using the system keyring with
//! environment variable fallback for CI/deployment scenarios.
//!
//! # Example
//!
//! ```ignore
//! use proxyrank_models::auth::CredentialStore;
//!
//! let store = CredentialStore::new("proxyrank").with_env_fallback();
//!
//! // Store a key in the system keyring
//! store.set("openrouter", "sk-or-...")?;
//!
//! // Retrieve it (checks keyring first, then env vars)
//! let key = store.get("openrouter")?;
//! ```

use std::env;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::{Error, Result};

/// Keyring service name used by the command-line tool.
pub const SERVICE_NAME: &str = "proxyrank";

/// A secure API key that prevents accidental logging.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create a new API key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Expose the secret key value.
    ///
    /// Use sparingly - only when actually sending to an API.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Environment variable names for each provider.
const ENV_VARS: &[(&str, &str)] = &[
    ("openrouter", "OPENROUTER_API_KEY"),
    ("openai", "OPENAI_API_KEY"),
    ("anthropic", "ANTHROPIC_API_KEY"),
];

/// Get the environment variable name for a provider.
pub fn env_var_for_provider(provider: &str) -> Option<&'static str> {
    ENV_VARS
        .iter()
        .find(|(p, _)| *p == provider)
        .map(|(_, v)| *v)
}

/// Secure credential storage with system keyring and environment fallback.
///
/// Lookups try the system keyring first, then the provider's environment
/// variable when `env_fallback` is enabled. Writes always go to the keyring.
pub struct CredentialStore {
    service_name: String,
    env_fallback: bool,
}

impl CredentialStore {
    /// Create a new credential store.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            env_fallback: false,
        }
    }

    /// Enable environment variable fallback.
    pub fn with_env_fallback(mut self) -> Self {
        self.env_fallback = true;
        self
    }

    /// Get an API key for a provider.
    ///
    /// # Errors
    ///
    /// Returns `Error::CredentialsNotFound` if no credentials are found.
    pub fn get(&self, provider: &str) -> Result<ApiKey> {
        if let Some(key) = self.get_from_keyring(provider) {
            debug!(provider, "retrieved API key from keyring");
            return Ok(key);
        }

        if self.env_fallback
            && let Some(key) = self.get_from_env(provider)
        {
            debug!(provider, "retrieved API key from environment");
            return Ok(key);
        }

        Err(Error::CredentialsNotFound(provider.to_string()))
    }

    /// Store an API key for a provider in the system keyring.
    ///
    /// # Errors
    ///
    /// Returns `Error::Keyring` if the keyring operation fails.
    pub fn set(&self, provider: &str, key: &str) -> Result<()> {
        let entry = self.keyring_entry(provider)?;
        entry
            .set_password(key)
            .map_err(|e| Error::Keyring(e.to_string()))?;
        debug!(provider, "stored API key in keyring");
        Ok(())
    }

    /// Delete an API key from the system keyring.
    ///
    /// # Errors
    ///
    /// Returns `Error::CredentialsNotFound` if no credentials exist, and
    /// `Error::Keyring` if the keyring operation fails.
    pub fn delete(&self, provider: &str) -> Result<()> {
        let entry = self.keyring_entry(provider)?;
        entry.delete_credential().map_err(|e| match e {
            keyring::Error::NoEntry => Error::CredentialsNotFound(provider.to_string()),
            _ => Error::Keyring(e.to_string()),
        })?;
        debug!(provider, "deleted API key from keyring");
        Ok(())
    }

    /// Check if credentials exist for a provider.
    pub fn has(&self, provider: &str) -> bool {
        self.get(provider).is_ok()
    }

    /// Check if a credential exists in the keyring (not env).
    pub fn has_in_keyring(&self, provider: &str) -> bool {
        self.get_from_keyring(provider).is_some()
    }

    /// Check if a credential exists in environment variables.
    pub fn has_in_env(&self, provider: &str) -> bool {
        self.get_from_env(provider).is_some()
    }

    /// Get the source of a credential (keyring or env).
    pub fn credential_source(&self, provider: &str) -> Option<CredentialSource> {
        if self.has_in_keyring(provider) {
            Some(CredentialSource::Keyring)
        } else if self.env_fallback && self.has_in_env(provider) {
            Some(CredentialSource::Environment)
        } else {
            None
        }
    }

    fn keyring_entry(&self, provider: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service_name, provider).map_err(|e| Error::Keyring(e.to_string()))
    }

    fn get_from_keyring(&self, provider: &str) -> Option<ApiKey> {
        let entry = self.keyring_entry(provider).ok()?;
        entry.get_password().ok().map(ApiKey::new)
    }

    fn get_from_env(&self, provider: &str) -> Option<ApiKey> {
        let env_var = env_var_for_provider(provider)?;
        env::var(env_var)
            .ok()
            .filter(|v| !v.is_empty())
            .map(ApiKey::new)
    }
}

/// Source of a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Stored in system keyring.
    Keyring,
    /// From environment variable.
    Environment,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyring => write!(f, "keyring"),
            Self::Environment => write!(f, "environment"),
        }
    }
}
