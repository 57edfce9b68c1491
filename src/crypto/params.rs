//! Argon2id cost parameters and their admissible ranges.
//!
//! Every `Params` that reaches the KDF has passed `Params::validate`.
//! Out-of-range values are rejected, never clamped: the caller adjusts
//! and retries.

use serde::{Deserialize, Serialize};

use crate::errors::{Argon2idError, Result};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default iteration count.
pub const DEFAULT_TIME: u32 = 3;

/// Default memory cost in KiB (64 MB).
pub const DEFAULT_MEMORY: u32 = 64 * 1024;

/// Default number of lanes.
pub const DEFAULT_PARALLELISM: u8 = 2;

/// Default digest length in bytes.
pub const DEFAULT_KEY_LENGTH: u32 = 32;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

pub const MIN_TIME: u32 = 1;
pub const MAX_TIME: u32 = 100;

/// Argon2 needs at least 8 KiB.
pub const MIN_MEMORY: u32 = 8;
/// 1 GB.
pub const MAX_MEMORY: u32 = 1024 * 1024;

pub const MIN_PARALLELISM: u8 = 1;

pub const MIN_KEY_LENGTH: u32 = 4;
pub const MAX_KEY_LENGTH: u32 = 128;

/// Argon2id cost parameters.
///
/// `key_length` is not part of the encoded hash string. On a decoded
/// hash it is always the length of the decoded digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Number of passes over memory.
    pub time: u32,
    /// Memory cost in KiB.
    pub memory: u32,
    /// Lane count (1-255).
    pub parallelism: u8,
    /// Digest length in bytes.
    pub key_length: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            time: DEFAULT_TIME,
            memory: DEFAULT_MEMORY,
            parallelism: DEFAULT_PARALLELISM,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

impl Params {
    /// Check the parameters against the policy bounds.
    ///
    /// All lower bounds are checked before any upper bound, so a set that
    /// is both too weak and too strong reports `ParametersTooWeak`.
    pub fn validate(&self) -> Result<()> {
        if self.time < MIN_TIME {
            return Err(too_weak("time", self.time, MIN_TIME));
        }
        if self.memory < MIN_MEMORY {
            return Err(too_weak("memory", self.memory, MIN_MEMORY));
        }
        if self.parallelism < MIN_PARALLELISM {
            return Err(too_weak(
                "parallelism",
                u32::from(self.parallelism),
                u32::from(MIN_PARALLELISM),
            ));
        }
        if self.key_length < MIN_KEY_LENGTH {
            return Err(too_weak("key_length", self.key_length, MIN_KEY_LENGTH));
        }

        if self.time > MAX_TIME {
            return Err(too_strong("time", self.time, MAX_TIME));
        }
        if self.memory > MAX_MEMORY {
            return Err(too_strong("memory", self.memory, MAX_MEMORY));
        }
        if self.key_length > MAX_KEY_LENGTH {
            return Err(too_strong("key_length", self.key_length, MAX_KEY_LENGTH));
        }

        Ok(())
    }
}

fn too_weak(field: &str, got: u32, min: u32) -> Argon2idError {
    Argon2idError::ParametersTooWeak(format!("{field} must be at least {min} (got {got})"))
}

fn too_strong(field: &str, got: u32, max: u32) -> Argon2idError {
    Argon2idError::ParametersTooStrong(format!("{field} must be at most {max} (got {got})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(time: u32, memory: u32, parallelism: u8, key_length: u32) -> Params {
        Params {
            time,
            memory,
            parallelism,
            key_length,
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let p = Params::default();
        assert_eq!(p.time, 3);
        assert_eq!(p.memory, 65_536);
        assert_eq!(p.parallelism, 2);
        assert_eq!(p.key_length, 32);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn accepts_minimum_bounds() {
        assert!(params(1, 8, 1, 4).validate().is_ok());
    }

    #[test]
    fn accepts_maximum_bounds() {
        assert!(params(100, 1_048_576, 255, 128).validate().is_ok());
    }

    #[test]
    fn rejects_below_lower_bounds() {
        for p in [
            params(0, 65_536, 2, 32),
            params(3, 7, 2, 32),
            params(3, 65_536, 0, 32),
            params(3, 65_536, 2, 3),
        ] {
            let err = p.validate().unwrap_err();
            assert!(
                matches!(err, Argon2idError::ParametersTooWeak(_)),
                "{p:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_above_upper_bounds() {
        for p in [
            params(101, 65_536, 2, 32),
            params(3, 1_048_577, 2, 32),
            params(3, 65_536, 2, 129),
        ] {
            let err = p.validate().unwrap_err();
            assert!(
                matches!(err, Argon2idError::ParametersTooStrong(_)),
                "{p:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn lower_bounds_win_over_upper_bounds() {
        let err = params(0, 2_000_000, 1, 32).validate().unwrap_err();
        assert!(matches!(err, Argon2idError::ParametersTooWeak(_)));
    }

    #[test]
    fn error_names_the_offending_field() {
        let err = params(3, 7, 2, 32).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameters too weak: memory must be at least 8 (got 7)"
        );
    }
}
