//! Runtime configuration.

use swaggerbuddy_api::DEFAULT_API_URL;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "SWAGGER_BUDDY_API_URL";

/// Settings needed to reach the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Picks the API URL: explicit override, then environment, then default.
    /// Blank values are ignored.
    pub fn resolve(api_url: Option<&str>, env_value: Option<String>) -> Self {
        let chosen = api_url
            .map(str::to_string)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()));
        match chosen {
            Some(url) => Self {
                api_url: url.trim().trim_end_matches('/').to_string(),
            },
            None => Self::default(),
        }
    }
}
