//! `argon2id needs-rehash` — compare a hash against the configured policy.
//!
//! Prints `yes` or `no` on stdout. Only time and memory cost count;
//! a differing lane count or key length is reported as a warning.

use crate::cli::output;
use crate::cli::{resolve_params, Cli, ParamArgs};
use crate::errors::Result;
use crate::hash::decode;

/// Execute the `needs-rehash` command.
pub fn execute(cli: &Cli, hash: &str, overrides: &ParamArgs) -> Result<()> {
    let target = resolve_params(cli, overrides)?;
    let stored = decode(hash)?.params;

    if stored.parallelism != target.parallelism {
        output::warning(&format!(
            "parallelism {} differs from policy ({}), not a rehash trigger",
            stored.parallelism, target.parallelism
        ));
    }
    if stored.key_length != target.key_length {
        output::warning(&format!(
            "key length {} differs from policy ({}), not a rehash trigger",
            stored.key_length, target.key_length
        ));
    }

    if stored.is_weaker_than(&target) {
        println!("yes");
        output::tip("Run `argon2id upgrade <HASH>` at the next successful login.");
    } else {
        println!("no");
    }

    Ok(())
}
