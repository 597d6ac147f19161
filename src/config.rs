use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

// Development-only default. The cookie signing key is derived from this
// value; deployments override it in config.toml.
const DEFAULT_SECRET_KEY: &str = "insecure-development-secret-key-change-me-before-deploying";

// Signing key derivation rejects anything shorter.
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub download_dir: PathBuf,
    pub secret_key: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    listen_addr: Option<String>,
    download_dir: Option<String>,
    secret_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_owned(),
            download_dir: PathBuf::from("downloads"),
            secret_key: DEFAULT_SECRET_KEY.to_owned(),
        }
    }
}

impl Config {
    /// Loads the config file at `path`, falling back to defaults when the
    /// file does not exist. A present but unreadable or invalid file is a
    /// startup error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let defaults = Self::default();
        let cfg = Self {
            listen_addr: file.listen_addr.unwrap_or(defaults.listen_addr),
            download_dir: file
                .download_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.download_dir),
            secret_key: file.secret_key.unwrap_or(defaults.secret_key),
        };

        if cfg.secret_key.len() < MIN_SECRET_LEN {
            bail!(
                "secret_key must be at least {} bytes, got {}",
                MIN_SECRET_LEN,
                cfg.secret_key.len()
            );
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = Config::load("does-not-exist.toml").unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
        assert_eq!(cfg.download_dir, PathBuf::from("downloads"));
    }

    #[test]
    fn absent_keys_fall_back_per_key() {
        let file = write_config("listen_addr = \"0.0.0.0:9000\"\n");
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:9000");
        assert_eq!(cfg.download_dir, PathBuf::from("downloads"));
        assert_eq!(cfg.secret_key, DEFAULT_SECRET_KEY);
    }

    #[test]
    fn full_file_round_trips() {
        let file = write_config(
            "listen_addr = \"127.0.0.1:3000\"\n\
             download_dir = \"/tmp/videos\"\n\
             secret_key = \"0123456789abcdef0123456789abcdef\"\n",
        );
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:3000");
        assert_eq!(cfg.download_dir, PathBuf::from("/tmp/videos"));
        assert_eq!(cfg.secret_key, "0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn short_secret_is_rejected() {
        let file = write_config("secret_key = \"too short\"\n");
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let file = write_config("listen_addr = [not toml");
        assert!(Config::load(file.path()).is_err());
    }
}
