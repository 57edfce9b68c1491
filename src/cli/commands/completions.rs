//! `argon2id completions` — generate shell completion scripts.
//!
//! Usage:
//!   argon2id completions bash > ~/.bash_completion.d/argon2id
//!   argon2id completions zsh

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout();
    write_completions(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "argon2id", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn shell_names_parse_case_insensitively() {
        for name in ["bash", "zsh", "fish", "powershell", "elvish", "BASH"] {
            assert!(
                Cli::try_parse_from(["argon2id", "completions", name]).is_ok(),
                "{name}"
            );
        }
    }

    #[test]
    fn unknown_shell_is_rejected() {
        assert!(Cli::try_parse_from(["argon2id", "completions", "csh"]).is_err());
    }

    #[test]
    fn bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("argon2id"));
        assert!(script.contains("needs-rehash"));
    }
}
