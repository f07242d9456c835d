use std::io::Write;
use std::sync::Arc;

use clap::Subcommand;
use tracing::debug;

use crate::api_client::HttpClient;
use crate::client::Client;
use crate::config::Config;
use crate::loader::{AthleteListLoader, LoadState};
use crate::render::{render, View};

#[derive(Subcommand, Debug, Clone)]
pub enum Cmd {
    /// Print the roster, one athlete per line (default)
    List,
    /// Print the roster as JSON
    Json,
}

impl Cmd {
    pub async fn run(self, config: &Config) -> anyhow::Result<()> {
        let client = HttpClient::new(&config.base_url, config.timeout())?;
        let mut stdout = std::io::stdout().lock();
        self.run_with(Arc::new(client), &mut stdout).await
    }

    async fn run_with(self, client: Arc<dyn Client>, out: &mut impl Write) -> anyhow::Result<()> {
        let mut loader = AthleteListLoader::new(client);
        loader.activate();

        let result = self.print(&mut loader, out).await;
        loader.deactivate();
        result
    }

    async fn print(&self, loader: &mut AthleteListLoader, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Cmd::List => {
                writeln!(out, "{}", render(loader.state()))?;
                match render(loader.settle().await) {
                    View::List(rows) => {
                        for row in rows {
                            debug!(key = ?row.key, "{}", row.text);
                            writeln!(out, "{}", row.text)?;
                        }
                    }
                    view => writeln!(out, "{view}")?,
                }
            }
            Cmd::Json => match loader.settle().await {
                LoadState::Loaded { records } => {
                    writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
                }
                LoadState::Failed { message } => anyhow::bail!("{}", message),
                LoadState::Pending => anyhow::bail!("athlete retrieval never completed"),
            },
        }

        Ok(())
    }
}
