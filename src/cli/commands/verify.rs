//! `argon2id verify` — check a password against an encoded hash.
//!
//! Exits non-zero on a wrong password or an unusable hash; the error
//! message tells the two apart.

use crate::cli::output;
use crate::cli::prompt_password;
use crate::errors::Result;
use crate::hash::{compare_hash_and_password, decode};

/// Execute the `verify` command.
pub fn execute(hash: &str) -> Result<()> {
    // Reject foreign or corrupt hashes before asking for a password.
    decode(hash)?;

    let password = prompt_password()?;
    compare_hash_and_password(hash, password.as_bytes())?;

    output::success("Password matches");
    Ok(())
}
