//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod assessment;
mod auth;
mod employer;
mod github;
mod profile;
mod repo;

pub use assessment::AssessmentCommands;
pub use auth::AuthCommands;
pub use employer::EmployerCommands;
pub use github::GithubCommands;
pub use profile::ProfileCommands;
pub use repo::RepoCommands;

use anyhow::Result;
use clap::Subcommand;
use skillhire_client::ApiClient;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Account registration and login
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// GitHub connection
    Github {
        #[command(subcommand)]
        command: GithubCommands,
    },
    /// Candidate profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Linked repositories and their analysis
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// Repository assessments
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommands,
    },
    /// Employer profile and candidate search
    Employer {
        #[command(subcommand)]
        command: EmployerCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, client: &ApiClient) -> Result<()> {
    match command {
        Commands::Auth { command } => auth::handle_auth_command(command, client).await,
        Commands::Github { command } => github::handle_github_command(command, client).await,
        Commands::Profile { command } => profile::handle_profile_command(command, client).await,
        Commands::Repo { command } => repo::handle_repo_command(command, client).await,
        Commands::Assessment { command } => {
            assessment::handle_assessment_command(command, client).await
        }
        Commands::Employer { command } => employer::handle_employer_command(command, client).await,
    }
}
