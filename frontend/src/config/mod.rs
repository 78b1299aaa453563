//! Application-wide configuration.
//!
//! Resolves the registry base URL and the token slot path from the
//! environment, with working defaults for a local setup. The resulting
//! struct is passed explicitly to whatever needs it.

use std::env;
use std::path::PathBuf;

const API_URL_VAR: &str = "MEDIDESK_API_URL";
const TOKEN_FILE_VAR: &str = "MEDIDESK_TOKEN_FILE";

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the patient-registry service.
    pub api_url: String,
    /// Location of the single-slot token file.
    pub token_path: PathBuf,
}

impl Config {
    /// Reads the configuration from the environment.
    pub fn from_env() -> Self {
        let api_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let token_path = env::var(TOKEN_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_path());

        Self {
            api_url,
            token_path,
        }
    }
}

/// Token slot under the OS data directory, next to other per-user app state.
fn default_token_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("medidesk").join("token"),
        None => PathBuf::from(".medidesk-token"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Process-wide environment, so both variables are covered in one test.
    #[test]
    fn environment_overrides_the_defaults() {
        env::remove_var(API_URL_VAR);
        env::remove_var(TOKEN_FILE_VAR);
        let defaults = Config::from_env();
        assert_eq!(defaults.api_url, DEFAULT_API_URL);

        env::set_var(API_URL_VAR, "https://registry.clinic.example");
        env::set_var(TOKEN_FILE_VAR, "/tmp/medidesk-token");
        let overridden = Config::from_env();
        env::remove_var(API_URL_VAR);
        env::remove_var(TOKEN_FILE_VAR);

        assert_eq!(overridden.api_url, "https://registry.clinic.example");
        assert_eq!(overridden.token_path, PathBuf::from("/tmp/medidesk-token"));
    }
}
