//! Argon2id digest computation and salt generation.
//!
//! Thin wrapper over the `argon2` crate. Parameters are expected to be
//! validated already; anything the backend still rejects (for example
//! less than 8 KiB of memory per lane) surfaces as `KeyDerivationFailed`.

use argon2::{Algorithm, Argon2, Version};
use rand::RngCore;
use zeroize::Zeroizing;

use super::params::Params;
use crate::errors::{Argon2idError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Compute the Argon2id (v=19) digest of `password` under `salt` and `params`.
///
/// The digest is `params.key_length` bytes and is wiped from memory on drop.
pub fn derive_digest(password: &[u8], salt: &[u8], params: &Params) -> Result<Zeroizing<Vec<u8>>> {
    let output_len = usize::try_from(params.key_length).map_err(|_| {
        Argon2idError::KeyDerivationFailed(format!(
            "key length {} exceeds platform address space",
            params.key_length
        ))
    })?;

    let argon2_params = argon2::Params::new(
        params.memory,
        params.time,
        u32::from(params.parallelism),
        Some(output_len),
    )
    .map_err(|e| Argon2idError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut digest = Zeroizing::new(vec![0u8; output_len]);
    argon2
        .hash_password_into(password, salt, &mut digest)
        .map_err(|e| Argon2idError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}")))?;

    Ok(digest)
}

/// Generate a cryptographically random 16-byte salt.
///
/// Drawn fresh on every call; salts are never cached.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Params {
        Params {
            time: 1,
            memory: 64,
            parallelism: 1,
            key_length: 32,
        }
    }

    #[test]
    fn digest_has_requested_length() {
        let params = Params {
            key_length: 16,
            ..cheap()
        };
        let digest = derive_digest(b"password", &[7u8; SALT_LEN], &params).unwrap();
        assert_eq!(digest.len(), 16);
    }

    #[test]
    fn same_inputs_same_digest() {
        let salt = generate_salt();
        let a = derive_digest(b"password", &salt, &cheap()).unwrap();
        let b = derive_digest(b"password", &salt, &cheap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_salts_different_digests() {
        let a = derive_digest(b"password", &[1u8; SALT_LEN], &cheap()).unwrap();
        let b = derive_digest(b"password", &[2u8; SALT_LEN], &cheap()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn salts_are_not_reused() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn backend_rejection_is_key_derivation_failed() {
        // 8 KiB cannot hold 4 lanes.
        let params = Params {
            memory: 8,
            parallelism: 4,
            ..cheap()
        };
        let err = derive_digest(b"password", &[0u8; SALT_LEN], &params).unwrap_err();
        assert!(matches!(err, Argon2idError::KeyDerivationFailed(_)));
    }
}
