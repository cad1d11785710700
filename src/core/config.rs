use std::{
    env,
    time::Duration,
};

use url::Url;

use crate::core::CloudError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const BACKEND_URL_VAR: &str = "WORDCLOUD_BACKEND_URL";
pub const TIMEOUT_VAR: &str = "WORDCLOUD_TIMEOUT_SECS";

pub const SAMPLE_URLS: [&str; 3] =
    ["https://www.bbc.com/news", "https://www.cnn.com/", "https://www.nytimes.com/"];

/// Startup configuration, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base address of the analysis service. Always ends with `/`.
    pub backend_url: Url,
    /// `None` leaves reqwest's default (no timeout).
    pub request_timeout: Option<Duration>,
    pub sample_urls: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, CloudError> {
        Self::from_values(env::var(BACKEND_URL_VAR).ok(), env::var(TIMEOUT_VAR).ok())
    }

    pub fn from_values(
        backend_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, CloudError> {
        let raw = backend_url
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let backend_url = parse_backend_url(&raw)?;

        let request_timeout = match timeout_secs.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                let secs: u64 = value.parse().map_err(|_| {
                    CloudError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds"))
                })?;
                if secs == 0 {
                    return Err(CloudError::Config(format!("{TIMEOUT_VAR} must be positive")));
                }
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            backend_url,
            request_timeout,
            sample_urls: SAMPLE_URLS.iter().map(|url| url.to_string()).collect(),
        })
    }

    /// Resolves `path` below the backend base, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url, CloudError> {
        Ok(self.backend_url.join(path.trim_start_matches('/'))?)
    }

    pub fn default_url(&self) -> String {
        self.sample_urls.first().cloned().unwrap_or_default()
    }
}

fn parse_backend_url(raw: &str) -> Result<Url, CloudError> {
    let mut url = Url::parse(raw)
        .map_err(|e| CloudError::Config(format!("{BACKEND_URL_VAR} '{raw}' is not a URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CloudError::Config(format!(
            "{BACKEND_URL_VAR} must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
