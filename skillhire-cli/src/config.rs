//! Configuration module
//!
//! Handles CLI configuration: the API location and where the login session
//! is kept between invocations.

use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the REST API (e.g., "http://localhost:8000/api")
    pub api_url: String,

    /// File holding the persisted session
    pub session_file: PathBuf,
}

impl Config {
    /// `<config dir>/skillhire/session.json`, or the working directory when
    /// the platform has no config dir
    pub fn default_session_file() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skillhire")
            .join("session.json")
    }
}
