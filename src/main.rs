use argon2id::cli::{Cli, Commands};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash { ref params } => argon2id::cli::commands::hash::execute(&cli, params),
        Commands::Verify { ref hash } => argon2id::cli::commands::verify::execute(hash),
        Commands::Inspect {
            ref hash,
            ref format,
        } => argon2id::cli::commands::inspect::execute(hash, format),
        Commands::NeedsRehash {
            ref hash,
            ref params,
        } => argon2id::cli::commands::needs_rehash::execute(&cli, hash, params),
        Commands::Upgrade {
            ref hash,
            ref params,
        } => argon2id::cli::commands::upgrade::execute(&cli, hash, params),
        Commands::Completions { shell } => argon2id::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        argon2id::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
