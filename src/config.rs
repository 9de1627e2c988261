//! Static configuration for the OMDb API.
//!
//! The key and endpoint live in one place and are injected into the client
//! as a struct, so tests can point it at a double.

use std::env;

const OMDB_API_KEY: &str = "c44b12b1";
const OMDB_API_URL: &str = "https://www.omdbapi.com";

/// Connection settings for the OMDb API.
#[derive(Clone, Debug)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: OMDB_API_KEY.to_string(),
            base_url: OMDB_API_URL.to_string(),
        }
    }
}

impl OmdbConfig {
    /// Built-in defaults, overridable through `OMDB_API_KEY` / `OMDB_API_URL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("OMDB_API_KEY").unwrap_or(defaults.api_key),
            base_url: env::var("OMDB_API_URL").unwrap_or(defaults.base_url),
        }
    }
}
