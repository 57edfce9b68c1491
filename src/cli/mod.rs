//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::Params;
use crate::errors::{Argon2idError, Result};

/// Environment variable checked before prompting for a password.
pub const PASSWORD_ENV: &str = "ARGON2ID_PASSWORD";

/// argon2id CLI: generate, verify and inspect Argon2id password hashes.
#[derive(Parser)]
#[command(
    name = "argon2id",
    about = "Argon2id password hashing tool",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Policy file (default: ./.argon2id.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Hash a password and print the encoded hash
    Hash {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Check a password against an encoded hash
    Verify {
        /// Encoded hash ($argon2id$v=19$...)
        hash: String,
    },

    /// Show the parameters stored in an encoded hash
    Inspect {
        /// Encoded hash ($argon2id$v=19$...)
        hash: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Report whether a hash is weaker than the configured policy
    NeedsRehash {
        /// Encoded hash ($argon2id$v=19$...)
        hash: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Verify a password and rehash it if the policy requires
    Upgrade {
        /// Encoded hash ($argon2id$v=19$...)
        hash: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, ignore_case = true)]
        shell: Shell,
    },
}

/// Per-invocation overrides for the policy file.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ParamArgs {
    /// Iterations (time cost)
    #[arg(short, long)]
    pub time: Option<u32>,

    /// Memory cost in KiB
    #[arg(short, long)]
    pub memory: Option<u32>,

    /// Lane count (1-255)
    #[arg(short, long)]
    pub parallelism: Option<u8>,

    /// Digest length in bytes
    #[arg(short, long)]
    pub key_length: Option<u32>,
}

impl ParamArgs {
    /// Apply the overrides on top of `base`.
    pub fn apply(&self, base: Params) -> Params {
        Params {
            time: self.time.unwrap_or(base.time),
            memory: self.memory.unwrap_or(base.memory),
            parallelism: self.parallelism.unwrap_or(base.parallelism),
            key_length: self.key_length.unwrap_or(base.key_length),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load the policy from `--config`, or `.argon2id.toml` in the working directory.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(Argon2idError::ConfigError(format!(
                    "config file not found at {}",
                    path.display()
                )));
            }
            Settings::load_from(path)
        }
        None => Settings::load(&std::env::current_dir()?),
    }
}

/// Resolve the target parameters: policy file, then command-line overrides.
pub fn resolve_params(cli: &Cli, overrides: &ParamArgs) -> Result<Params> {
    let settings = load_settings(cli)?;
    Ok(overrides.apply(settings.params()))
}

/// Get the password to check, trying in order:
/// 1. `ARGON2ID_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| Argon2idError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used by `hash`).
///
/// Also respects `ARGON2ID_PASSWORD` for scripted usage.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Password to hash")
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| Argon2idError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}
