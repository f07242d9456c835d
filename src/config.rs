use std::time::Duration;

use clap::Parser;

use crate::cmd::Cmd;

/// Fetch and print the athlete roster
#[derive(Parser, Debug, Clone)]
#[command(name = "athlete-list", version, about)]
pub struct Config {
    /// Base URL of the athletes API
    #[arg(long, env = "ATHLETES_API_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// HTTP timeout in seconds (0 disables it)
    #[arg(long, env = "ATHLETES_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

impl Config {
    pub fn validate(&mut self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid base url '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base url must be http or https, got '{}'", url.scheme());
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
