use clap::Parser;
use dotenv::dotenv;

mod api_client;
mod client;
mod cmd;
mod config;
mod error;
mod loader;
mod render;
mod types;

use cmd::Cmd;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // stdout is reserved for rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::parse();
    config.validate()?;

    config.cmd.clone().unwrap_or(Cmd::List).run(&config).await
}
