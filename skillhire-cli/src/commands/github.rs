//! GitHub command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use skillhire_client::ApiClient;

/// GitHub subcommands
#[derive(Subcommand)]
pub enum GithubCommands {
    /// Print the URL to authorize GitHub access
    OauthUrl,
    /// Finish connecting with the code GitHub redirected back with
    Connect { code: String },
    /// List repositories available for linking
    Repos,
}

pub async fn handle_github_command(command: GithubCommands, client: &ApiClient) -> Result<()> {
    match command {
        GithubCommands::OauthUrl => {
            let url = client.github_oauth_url().await?;
            println!("Open this URL to connect GitHub:");
            println!("  {}", url.cyan());
        }
        GithubCommands::Connect { code } => {
            let message = client.connect_github(&code).await?;
            println!("{} {}", "✓".green(), message);
        }
        GithubCommands::Repos => {
            let repos = client.list_github_repositories().await?;
            if repos.is_empty() {
                println!("{}", "No GitHub repositories found.".yellow());
            }
            for repo in repos {
                println!(
                    "  {} {} {}",
                    "▸".cyan(),
                    repo.full_name.bold(),
                    repo.language.unwrap_or_default().dimmed()
                );
                if let Some(description) = repo.description.filter(|d| !d.is_empty()) {
                    println!("    {}", description);
                }
            }
        }
    }

    Ok(())
}
