/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including the `/api` prefix, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/api".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                     |
    /// |-----------------------------|-----------------------------|
    /// | `LOOKBOOK_API_URL`          | `http://localhost:3000/api` |
    /// | `LOOKBOOK_API_TIMEOUT_SECS` | `10`                        |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = std::env::var("LOOKBOOK_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let timeout_secs: u64 = std::env::var("LOOKBOOK_API_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse()
                    .expect("LOOKBOOK_API_TIMEOUT_SECS must be a valid u64")
            })
            .unwrap_or(defaults.timeout_secs);

        Self {
            api_url,
            timeout_secs,
        }
    }
}
