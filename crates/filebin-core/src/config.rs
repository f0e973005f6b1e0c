//! Configuration module
//!
//! Environment-driven configuration for the HTTP listener and the two
//! on-disk stores (blob directory and metadata document).

use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_METADATA_FILE: &str = "files.json";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port for the HTTP listener (`PORT`, default 3000).
    pub server_port: u16,
    /// Directory holding the uploaded blobs (`UPLOAD_DIR`).
    pub upload_dir: PathBuf,
    /// Path of the persisted metadata document (`METADATA_FILE`).
    pub metadata_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{value}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let upload_dir =
            PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into()));
        let metadata_file = PathBuf::from(
            env::var("METADATA_FILE").unwrap_or_else(|_| DEFAULT_METADATA_FILE.into()),
        );

        Ok(Config {
            server_port,
            upload_dir,
            metadata_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            metadata_file: PathBuf::from(DEFAULT_METADATA_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.metadata_file, PathBuf::from("files.json"));
    }
}
