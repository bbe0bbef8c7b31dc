//! API credential management.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use dialoguer::{Password, theme::ColorfulTheme};
use proxyrank_models::auth::{CredentialStore, SERVICE_NAME, env_var_for_provider};

/// Provider whose key experiments use.
pub const DEFAULT_PROVIDER: &str = "openrouter";

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Store an API key in the system keyring
    Set {
        /// Provider to configure
        #[arg(default_value = DEFAULT_PROVIDER)]
        provider: String,
    },
    /// Delete a stored API key
    Delete {
        #[arg(default_value = DEFAULT_PROVIDER)]
        provider: String,
    },
    /// Show where the API key would be read from
    Status {
        #[arg(default_value = DEFAULT_PROVIDER)]
        provider: String,
    },
}

pub fn run(args: AuthArgs) -> Result<()> {
    let store = CredentialStore::new(SERVICE_NAME).with_env_fallback();
    match args.command {
        AuthCommand::Set { provider } => set(&store, &provider),
        AuthCommand::Delete { provider } => delete(&store, &provider),
        AuthCommand::Status { provider } => status(&store, &provider),
    }
}

fn set(store: &CredentialStore, provider: &str) -> Result<()> {
    let env_hint = env_var_for_provider(provider)
        .map(|v| format!(" (or set {})", v))
        .unwrap_or_default();

    println!("Enter API key for {}{}", provider, env_hint);

    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("API key")
        .interact()?;

    if key.is_empty() {
        bail!("API key cannot be empty");
    }

    store.set(provider, &key)?;
    println!("Credentials for '{}' saved to keyring.", provider);
    Ok(())
}

fn delete(store: &CredentialStore, provider: &str) -> Result<()> {
    match store.delete(provider) {
        Ok(()) => println!("Credentials for '{}' deleted.", provider),
        Err(proxyrank_models::Error::CredentialsNotFound(_)) => {
            println!("No credentials found for '{}'.", provider);
        }
        Err(e) => bail!("Failed to delete credentials: {}", e),
    }
    Ok(())
}

fn status(store: &CredentialStore, provider: &str) -> Result<()> {
    match store.credential_source(provider) {
        Some(source) => println!("{}: configured ({})", provider, source),
        None => {
            println!("{}: not configured", provider);
            println!();
            println!("Configure credentials with: proxyrank auth set {}", provider);
        }
    }
    Ok(())
}
