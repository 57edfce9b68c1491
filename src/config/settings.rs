use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::params::{
    Params, DEFAULT_KEY_LENGTH, DEFAULT_MEMORY, DEFAULT_PARALLELISM, DEFAULT_TIME,
};
use crate::errors::{Argon2idError, Result};

/// Hashing policy, loaded from `.argon2id.toml`.
///
/// Every field has a sensible default so the tool works out-of-the-box
/// without any config file at all. Values are not validated here; they
/// are checked when a hash is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Argon2 iteration count (default: 3).
    #[serde(default = "default_time")]
    pub time: u32,

    /// Argon2 memory cost in KiB (default: 64 MB).
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,

    /// Argon2 lane count (default: 2).
    #[serde(default = "default_parallelism")]
    pub parallelism: u8,

    /// Digest length in bytes (default: 32).
    #[serde(default = "default_key_length")]
    pub key_length: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_time() -> u32 {
    DEFAULT_TIME
}

fn default_memory_kib() -> u32 {
    DEFAULT_MEMORY
}

fn default_parallelism() -> u8 {
    DEFAULT_PARALLELISM
}

fn default_key_length() -> u32 {
    DEFAULT_KEY_LENGTH
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            time: default_time(),
            memory_kib: default_memory_kib(),
            parallelism: default_parallelism(),
            key_length: default_key_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    pub const FILE_NAME: &'static str = ".argon2id.toml";

    /// Load settings from `<dir>/.argon2id.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_from(&dir.join(Self::FILE_NAME))
    }

    /// Load settings from an explicit file path.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            Argon2idError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Convert the settings into hashing parameters.
    pub fn params(&self) -> Params {
        Params {
            time: self.time,
            memory: self.memory_kib,
            parallelism: self.parallelism,
            key_length: self.key_length,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_match_default_params() {
        let s = Settings::default();
        assert_eq!(s.time, 3);
        assert_eq!(s.memory_kib, 65_536);
        assert_eq!(s.parallelism, 2);
        assert_eq!(s.key_length, 32);
        assert_eq!(s.params(), Params::default());
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.params(), Params::default());
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
time = 6
memory_kib = 131072
parallelism = 4
key_length = 64
"#;
        fs::write(tmp.path().join(".argon2id.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(
            settings.params(),
            Params {
                time: 6,
                memory: 131_072,
                parallelism: 4,
                key_length: 64,
            }
        );
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".argon2id.toml"), "time = 5\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.time, 5);
        // Rest should be defaults
        assert_eq!(settings.memory_kib, 65_536);
        assert_eq!(settings.parallelism, 2);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".argon2id.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(matches!(result, Err(Argon2idError::ConfigError(_))));
    }

    #[test]
    fn load_errors_on_unknown_field() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".argon2id.toml"), "iterations = 5\n").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn load_errors_on_parallelism_overflow() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".argon2id.toml"), "parallelism = 256\n").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn load_from_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("policy.toml");
        fs::write(&path, "memory_kib = 32768\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.memory_kib, 32_768);
    }
}
