//! Client configuration
//!
//! One injected base URL for every request, instead of per-screen constants.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | MENU_API_URL | http://localhost:8000 | REST API base URL |
//! | MENU_SITE_URL | http://localhost:8000 | Host serving published menus |
//! | MENU_REQUEST_TIMEOUT | 30 | Request timeout (seconds) |

use reqwest::Url;

use crate::{ClientError, ClientResult};

/// Default API base URL (local development backend)
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration for connecting to the menu API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Base URL of the host that serves published menus under `{subdomain}.`
    pub site_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            site_url: base_url.clone(),
            base_url,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("MENU_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let mut config = Self::new(base_url);
        if let Ok(site_url) = std::env::var("MENU_SITE_URL") {
            config.site_url = site_url;
        }
        if let Some(timeout) = std::env::var("MENU_REQUEST_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Set the published-menu host
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Check that both URLs parse and use http(s)
    pub fn validate(&self) -> ClientResult<()> {
        for (name, value) in [("base_url", &self.base_url), ("site_url", &self.site_url)] {
            let url = Url::parse(value)
                .map_err(|e| ClientError::Config(format!("{name} {value:?}: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ClientError::Config(format!(
                    "{name} must be http or https, got {}",
                    url.scheme()
                )));
            }
        }
        Ok(())
    }

    /// URL of a restaurant's published menu: `{scheme}://{subdomain}.{host}/menu`
    pub fn live_menu_url(&self, subdomain: &str) -> ClientResult<String> {
        let mut url = Url::parse(&self.site_url)
            .map_err(|e| ClientError::Config(format!("site_url {:?}: {e}", self.site_url)))?;
        let host = url
            .host_str()
            .ok_or_else(|| ClientError::Config("site_url has no host".into()))?
            .to_string();
        url.set_host(Some(&format!("{subdomain}.{host}")))
            .map_err(|e| ClientError::Config(format!("subdomain {subdomain:?}: {e}")))?;
        url.set_path("/menu");
        Ok(url.to_string())
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<super::NetworkHttpClient> {
        self.validate()?;
        super::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
