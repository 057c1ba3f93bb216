use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,

    /// Base origin used for hreflang alternate links
    pub base_url: String,

    /// Simulated inquiry-delivery delay in milliseconds
    pub submission_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BASE_URL")
            .unwrap_or_else(|_| "https://webbuilder.bg".to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!("BASE_URL must be an absolute origin, got '{}'", base_url);
        }

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            base_url: base_url.trim_end_matches('/').to_string(),
            submission_delay_ms: std::env::var("SUBMISSION_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
        })
    }
}
