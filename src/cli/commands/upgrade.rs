//! `argon2id upgrade` — verify a password and rehash if the policy moved.
//!
//! Prints the hash that should be stored afterwards: a fresh one if the
//! old hash was weaker than the policy, otherwise the original.

use crate::cli::output;
use crate::cli::{prompt_password, resolve_params, Cli, ParamArgs};
use crate::errors::Result;
use crate::hash::{decode, upgrade_on_login};

/// Execute the `upgrade` command.
pub fn execute(cli: &Cli, hash: &str, overrides: &ParamArgs) -> Result<()> {
    let target = resolve_params(cli, overrides)?;
    target.validate()?;

    decode(hash)?;

    let password = prompt_password()?;

    match upgrade_on_login(hash, password.as_bytes(), &target)? {
        Some(new_hash) => {
            output::success(&format!(
                "Rehashed with m={},t={},p={}",
                target.memory, target.time, target.parallelism
            ));
            println!("{new_hash}");
        }
        None => {
            output::info("Hash already meets the policy");
            println!("{hash}");
        }
    }

    Ok(())
}
