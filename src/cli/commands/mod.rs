//! One module per subcommand, each exposing an `execute` function.

pub mod completions;
pub mod hash;
pub mod inspect;
pub mod needs_rehash;
pub mod upgrade;
pub mod verify;
