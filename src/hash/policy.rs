//! Rehash decisions.
//!
//! A stored hash needs rehashing when its time cost or memory cost is
//! below the target's. Parallelism and key length never trigger a rehash.

use super::format::decode;
use crate::crypto::Params;
use crate::errors::Result;

impl Params {
    /// True if either cost axis is strictly below `target`.
    pub fn is_weaker_than(&self, target: &Params) -> bool {
        self.time < target.time || self.memory < target.memory
    }
}

/// Decide whether `hash` was produced with weaker costs than `target`.
///
/// Decode errors propagate; `target` itself is not validated.
pub fn needs_rehash(hash: &str, target: &Params) -> Result<bool> {
    let decoded = decode(hash)?;
    Ok(decoded.params.is_weaker_than(target))
}
