//! Argon2id password hashing with a bcrypt-style API.
//!
//! Hashes are stored in the canonical
//! `$argon2id$v=19$m=<memory>,t=<time>,p=<parallelism>$<salt>$<digest>`
//! form. See [`hash`] for generating, verifying and upgrading them.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod hash;

pub use crypto::Params;
pub use errors::{Argon2idError, Result};
pub use hash::{
    compare_hash_and_password, extract_params, generate_from_password, needs_rehash,
    upgrade_on_login, verify_password,
};
