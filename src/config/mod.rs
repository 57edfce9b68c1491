//! Project-level configuration (`.argon2id.toml`).

pub mod settings;

pub use settings::Settings;
