//! `argon2id inspect` — show the parameters stored in a hash.
//!
//! Supported formats:
//! - `table` (default): human-readable table
//! - `json`: JSON object with the decoded parameters and salt length

use serde::Serialize;

use crate::cli::output;
use crate::errors::{Argon2idError, Result};
use crate::hash::format::{VARIANT, VERSION};
use crate::hash::{decode, DecodedHash};

/// JSON view of a decoded hash. Never includes the salt or digest bytes.
#[derive(Debug, Serialize)]
struct HashReport {
    variant: &'static str,
    version: &'static str,
    time: u32,
    memory_kib: u32,
    parallelism: u8,
    key_length: u32,
    salt_length: usize,
}

impl From<&DecodedHash> for HashReport {
    fn from(decoded: &DecodedHash) -> Self {
        Self {
            variant: VARIANT,
            version: VERSION,
            time: decoded.params.time,
            memory_kib: decoded.params.memory,
            parallelism: decoded.params.parallelism,
            key_length: decoded.params.key_length,
            salt_length: decoded.salt.len(),
        }
    }
}

/// Execute the `inspect` command.
pub fn execute(hash: &str, format: &str) -> Result<()> {
    let decoded = decode(hash)?;

    match format {
        "table" => output::print_params_table(&decoded),
        "json" => println!("{}", format_as_json(&decoded)?),
        other => {
            return Err(Argon2idError::CommandFailed(format!(
                "unknown inspect format '{other}' — use 'table' or 'json'"
            )));
        }
    }

    Ok(())
}

/// Format a decoded hash as a JSON object.
fn format_as_json(decoded: &DecodedHash) -> Result<String> {
    serde_json::to_string_pretty(&HashReport::from(decoded))
        .map_err(|e| Argon2idError::SerializationError(format!("JSON inspect: {e}")))
}
