//! `argon2id hash` — hash a password and print the encoded string.

use crate::cli::{prompt_new_password, resolve_params, Cli, ParamArgs};
use crate::errors::Result;
use crate::hash::generate_from_password;

/// Execute the `hash` command.
pub fn execute(cli: &Cli, overrides: &ParamArgs) -> Result<()> {
    let params = resolve_params(cli, overrides)?;

    // Validate before prompting so a bad policy fails fast.
    params.validate()?;

    let password = prompt_new_password()?;
    let hash = generate_from_password(password.as_bytes(), Some(&params))?;

    println!("{hash}");
    Ok(())
}
