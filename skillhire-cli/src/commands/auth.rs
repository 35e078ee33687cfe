//! Auth command handlers

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use skillhire_client::ApiClient;
use skillhire_core::domain::user::User;

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create a candidate account
    Register {
        email: String,
        #[arg(long, env = "SKILLHIRE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an employer account
    RegisterEmployer {
        email: String,
        #[arg(long)]
        company: String,
        #[arg(long, env = "SKILLHIRE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in
    Login {
        email: String,
        #[arg(long, env = "SKILLHIRE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in account
    Whoami,
}

pub async fn handle_auth_command(command: AuthCommands, client: &ApiClient) -> Result<()> {
    match command {
        AuthCommands::Register { email, password } => {
            let auth = client.register_candidate(&email, &password).await?;
            print_logged_in("Registered", &auth.user);
        }
        AuthCommands::RegisterEmployer {
            email,
            company,
            password,
        } => {
            let auth = client.register_employer(&email, &password, &company).await?;
            print_logged_in("Registered", &auth.user);
            println!("  Company:  {}", company.cyan());
        }
        AuthCommands::Login { email, password } => {
            let auth = client.login(&email, &password).await?;
            print_logged_in("Logged in", &auth.user);
            if !auth.user.has_github {
                println!(
                    "{}",
                    "  GitHub is not connected yet: run `skillhire github oauth-url`".yellow()
                );
            }
        }
        AuthCommands::Logout => {
            client.logout();
            println!("{}", "Logged out.".green());
        }
        AuthCommands::Whoami => match client.session().get() {
            Some(session) => {
                print_logged_in("Logged in", &session.user);
                if let Some(company) = &session.company_name {
                    println!("  Company:  {}", company.cyan());
                }
            }
            None => bail!("Not logged in"),
        },
    }

    Ok(())
}

fn print_logged_in(verb: &str, user: &User) {
    println!("{} {}", "✓".green(), format!("{} as {}", verb, user.email).bold());
    println!("  Role:     {}", user.role.to_string().cyan());
    println!(
        "  GitHub:   {}",
        if user.has_github {
            "connected".green()
        } else {
            "not connected".dimmed()
        }
    );
}
