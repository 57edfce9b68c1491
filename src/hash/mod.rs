//! Password hash lifecycle: generate, verify, inspect and upgrade.
//!
//! ```no_run
//! use argon2id::hash::{compare_hash_and_password, generate_from_password};
//!
//! let hash = generate_from_password(b"hunter2", None)?;
//! compare_hash_and_password(&hash, b"hunter2")?;
//! # Ok::<(), argon2id::errors::Argon2idError>(())
//! ```

pub mod format;
pub mod policy;

pub use format::{decode, encode, DecodedHash};
pub use policy::needs_rehash;

use crate::crypto::{constant_time_eq, derive_digest, generate_salt, Params};
use crate::errors::{Argon2idError, Result};

/// Hash `password` with a fresh random salt.
///
/// `None` uses `Params::default()`. Parameters are validated before any
/// hashing work, so out-of-range costs never reach the KDF.
pub fn generate_from_password(password: &[u8], params: Option<&Params>) -> Result<String> {
    let params = params.copied().unwrap_or_default();
    params.validate()?;

    let salt = generate_salt();
    let digest = derive_digest(password, &salt, &params)?;

    Ok(encode(&params, &salt, &digest))
}

/// Check `password` against a stored hash.
///
/// Returns `Err(Mismatch)` for a wrong password. A malformed or foreign
/// hash returns its decode error instead, never `Mismatch`.
pub fn compare_hash_and_password(hash: &str, password: &[u8]) -> Result<()> {
    let decoded = decode(hash)?;
    let computed = derive_digest(password, &decoded.salt, &decoded.params)?;

    if constant_time_eq(&computed, &decoded.digest) {
        Ok(())
    } else {
        Err(Argon2idError::Mismatch)
    }
}

/// Like `compare_hash_and_password`, with a wrong password as `Ok(false)`.
pub fn verify_password(hash: &str, password: &[u8]) -> Result<bool> {
    match compare_hash_and_password(hash, password) {
        Ok(()) => Ok(true),
        Err(Argon2idError::Mismatch) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Return the parameters a hash was generated with.
pub fn extract_params(hash: &str) -> Result<Params> {
    Ok(decode(hash)?.params)
}

/// Verify a login and, if the stored hash is below `target`, rehash it.
///
/// The password is checked first; a wrong password or bad hash is an
/// error. Returns the replacement hash, or `None` if the stored hash
/// already meets the policy.
pub fn upgrade_on_login(hash: &str, password: &[u8], target: &Params) -> Result<Option<String>> {
    compare_hash_and_password(hash, password)?;

    if !needs_rehash(hash, target)? {
        return Ok(None);
    }

    generate_from_password(password, Some(target)).map(Some)
}
