//! Canonical Argon2id hash string format.
//!
//! An encoded hash has this layout:
//!
//! ```text
//! $argon2id$v=19$m=<memory>,t=<time>,p=<parallelism>$<salt>$<digest>
//! ```
//!
//! - **Variant** (`argon2id`): only Argon2id hashes are accepted.
//! - **Version** (`v=19`): Argon2 version 0x13.
//! - **Parameters**: memory (KiB), time and parallelism, always in the
//!   order `m`, `t`, `p`.
//! - **Salt** and **digest**: standard base64 alphabet, no padding.
//!
//! The digest length is not encoded; a decoded `Params::key_length` is
//! the length of the decoded digest.

use base64::engine::general_purpose::STANDARD_NO_PAD as BASE64;
use base64::Engine;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{Params, SALT_LEN};
use crate::errors::{Argon2idError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Variant tag in the second segment.
pub const VARIANT: &str = "argon2id";

/// Version tag in the third segment.
pub const VERSION: &str = "v=19";

/// Anything shorter cannot be a well-formed hash.
pub const MIN_HASH_LEN: usize = 30;

/// Leading empty marker + variant + version + params + salt + digest.
const SEGMENT_COUNT: usize = 6;

// ---------------------------------------------------------------------------
// DecodedHash
// ---------------------------------------------------------------------------

/// The structural parts of an encoded hash.
///
/// Salt and digest are wiped from memory on drop.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DecodedHash {
    #[zeroize(skip)]
    pub params: Params,
    pub salt: Vec<u8>,
    pub digest: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Encode parameters, salt and digest into the canonical string.
///
/// `params.key_length` is not written; the digest length carries it.
pub fn encode(params: &Params, salt: &[u8], digest: &[u8]) -> String {
    format!(
        "${VARIANT}${VERSION}$m={},t={},p={}${}${}",
        params.memory,
        params.time,
        params.parallelism,
        BASE64.encode(salt),
        BASE64.encode(digest),
    )
}

/// Decode a canonical hash string.
///
/// Checks run in a fixed order and the first failure is returned:
/// length, segment count, variant, version, parameter list, base64,
/// salt length, digest presence, and finally the parameter bounds.
pub fn decode(hash: &str) -> Result<DecodedHash> {
    if hash.len() < MIN_HASH_LEN {
        return Err(Argon2idError::TooShort(hash.len()));
    }

    let segments: Vec<&str> = hash.split('$').collect();
    if segments.len() != SEGMENT_COUNT {
        return Err(invalid(format!(
            "expected {SEGMENT_COUNT} '$'-separated segments, found {}",
            segments.len()
        )));
    }
    if !segments[0].is_empty() {
        return Err(invalid("hash must start with '$'"));
    }

    if segments[1] != VARIANT {
        return Err(Argon2idError::IncompatibleVariant(segments[1].to_string()));
    }
    if segments[2] != VERSION {
        return Err(Argon2idError::IncompatibleVersion(segments[2].to_string()));
    }

    let (memory, time, parallelism) = parse_params(segments[3])?;

    let salt = BASE64
        .decode(segments[4])
        .map_err(|e| invalid(format!("salt is not valid base64: {e}")))?;
    let digest = BASE64
        .decode(segments[5])
        .map_err(|e| invalid(format!("digest is not valid base64: {e}")))?;

    if salt.len() != SALT_LEN {
        return Err(invalid(format!(
            "salt must be {SALT_LEN} bytes, got {}",
            salt.len()
        )));
    }
    if digest.is_empty() {
        return Err(invalid("digest is empty"));
    }

    let key_length = u32::try_from(digest.len())
        .map_err(|_| invalid(format!("digest length {} exceeds u32::MAX", digest.len())))?;

    let params = Params {
        time,
        memory,
        parallelism,
        key_length,
    };
    params.validate()?;

    Ok(DecodedHash {
        params,
        salt,
        digest,
    })
}

// ---------------------------------------------------------------------------
// Parameter segment parsing
// ---------------------------------------------------------------------------

/// Parse `m=<u32>,t=<u32>,p=<u8>` in exactly that order.
fn parse_params(segment: &str) -> Result<(u32, u32, u8)> {
    let pairs: Vec<&str> = segment.split(',').collect();
    if pairs.len() != 3 {
        return Err(invalid(format!(
            "expected 3 parameters, found {}",
            pairs.len()
        )));
    }

    let memory = parse_number(expect_key(pairs[0], "m")?, "m")?;
    let time = parse_number(expect_key(pairs[1], "t")?, "t")?;
    let parallelism = parse_number(expect_key(pairs[2], "p")?, "p")?;

    Ok((memory, time, parallelism))
}

/// Split a `key=value` pair and check the key, returning the value.
fn expect_key<'a>(pair: &'a str, key: &str) -> Result<&'a str> {
    let (found, value) = pair
        .split_once('=')
        .ok_or_else(|| invalid(format!("parameter '{pair}' is not key=value")))?;

    if found != key {
        return Err(invalid(format!(
            "expected parameter '{key}', found '{found}'"
        )));
    }

    Ok(value)
}

/// Parse a plain decimal number. Signs, whitespace and overflow are errors.
fn parse_number<T: std::str::FromStr>(value: &str, key: &str) -> Result<T> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("parameter '{key}' has non-numeric value '{value}'")));
    }

    value
        .parse()
        .map_err(|_| invalid(format!("parameter '{key}' value '{value}' is out of range")))
}

fn invalid(msg: impl Into<String>) -> Argon2idError {
    Argon2idError::InvalidFormat(msg.into())
}
