use crate::{Confirmer, FilterConfig, Result};
use std::env;

/// Environment variable consulted when no URL is given on the command line.
pub const URL_ENV_VAR: &str = "HEADPHONES_URL";
/// Environment variable consulted when no API key is given on the command line.
pub const API_KEY_ENV_VAR: &str = "HEADPHONES_API_KEY";

const DEFAULT_URL: &str = "http://headphones:8181";

/// Where the Headphones server lives and how to authenticate with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub url: String,
    /// Opaque API key, passed through unchanged.
    pub api_key: String,
}

impl ServerConfig {
    pub fn new(url: &str, api_key: impl Into<String>) -> Self {
        Self {
            url: normalize_url(url),
            api_key: api_key.into(),
        }
    }

    /// Resolve the server settings from explicit values, then the
    /// environment, then by asking the operator.
    pub fn resolve(
        url: Option<String>,
        api_key: Option<String>,
        confirmer: &dyn Confirmer,
    ) -> Result<Self> {
        Self::resolve_with(url, api_key, confirmer, |name| env::var(name).ok())
    }

    fn resolve_with(
        url: Option<String>,
        api_key: Option<String>,
        confirmer: &dyn Confirmer,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let url = match non_empty(url).or_else(|| non_empty(lookup(URL_ENV_VAR))) {
            Some(url) => url,
            None => confirmer.prompt_value(
                &format!("Headphones URL [{DEFAULT_URL}]: "),
                Some(DEFAULT_URL),
            )?,
        };

        let api_key = match non_empty(api_key).or_else(|| non_empty(lookup(API_KEY_ENV_VAR))) {
            Some(api_key) => api_key,
            None => confirmer.prompt_value("Headphones API key: ", None)?,
        };

        Ok(Self::new(&url, api_key))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Add a scheme to bare `host:port` URLs and drop trailing slashes.
fn normalize_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Per-run settings for an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Queue albums after adding them.
    pub queue: bool,
    /// When queueing, only look for lossless releases.
    pub lossless: bool,
    pub filter: FilterConfig,
    /// Keep loading the remaining playlists when one cannot be read.
    pub skip_errors: bool,
}
