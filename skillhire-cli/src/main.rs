//! SkillHire CLI
//!
//! Command-line interface for the SkillHire hiring platform API.

mod commands;
mod config;
mod session_store;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use skillhire_client::ApiClient;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skillhire")]
#[command(about = "SkillHire skill-based hiring CLI", long_about = None)]
struct Cli {
    /// API root URL
    #[arg(long, env = "SKILLHIRE_API_URL", default_value = skillhire_client::DEFAULT_API_URL)]
    api_url: String,

    /// Where the login session is stored
    #[arg(long, env = "SKILLHIRE_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillhire=warn,skillhire_client=warn,skillhire_poller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        session_file: cli
            .session_file
            .unwrap_or_else(Config::default_session_file),
    };

    let session = session_store::load(&config.session_file)?;
    let client = ApiClient::new(config.api_url.clone()).with_session(session);

    let result = handle_command(cli.command, &client).await;

    // Persist refreshed tokens or a forced logout even when the command failed
    session_store::save(&config.session_file, client.session().get().as_ref())?;

    result
}
