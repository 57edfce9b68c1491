//! Cryptographic building blocks.
//!
//! This module provides:
//! - Argon2id cost parameters and their validation (`params`)
//! - Argon2id digest computation and salt generation (`kdf`)
//! - Constant-time digest comparison (`compare`)

pub mod compare;
pub mod kdf;
pub mod params;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_digest, generate_salt, Params, ...};
pub use compare::constant_time_eq;
pub use kdf::{derive_digest, generate_salt, SALT_LEN};
pub use params::Params;
