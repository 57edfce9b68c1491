use thiserror::Error;

/// All errors that can occur while hashing, decoding or verifying.
///
/// Decode failures keep their own variants so callers can tell a wrong
/// password (`Mismatch`) apart from a corrupt or foreign hash.
#[derive(Debug, Error)]
pub enum Argon2idError {
    // --- Decode errors ---
    #[error("hash too short: {0} characters")]
    TooShort(usize),

    #[error("invalid hash format: {0}")]
    InvalidFormat(String),

    #[error("incompatible variant '{0}' (expected argon2id)")]
    IncompatibleVariant(String),

    #[error("incompatible version '{0}' (expected v=19)")]
    IncompatibleVersion(String),

    // --- Parameter errors ---
    #[error("parameters too weak: {0}")]
    ParametersTooWeak(String),

    #[error("parameters too strong: {0}")]
    ParametersTooStrong(String),

    // --- Verification errors ---
    #[error("password does not match hash")]
    Mismatch,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for argon2id results.
pub type Result<T> = std::result::Result<T, Argon2idError>;
