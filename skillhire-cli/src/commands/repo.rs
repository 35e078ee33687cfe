//! Repository command handlers
//!
//! Handles linking repositories and following their analysis. `watch` runs
//! the job poller against the API until every watched analysis settles.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::*;
use skillhire_client::ApiClient;
use skillhire_core::domain::{AnalysisStatus, LinkedRepository, ResourceId};
use skillhire_poller::{JobPoller, PollOutcome, PollerConfig, StopReason};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Repository subcommands
#[derive(Subcommand)]
pub enum RepoCommands {
    /// List linked repositories
    List,
    /// Link a GitHub repository and queue its analysis
    Add {
        /// Repository as owner/name
        full_name: String,

        /// Keep watching until the analysis settles
        #[arg(short, long)]
        watch: bool,

        #[command(flatten)]
        timing: WatchTiming,
    },
    /// Get repository details
    Get { id: String },
    /// Unlink a repository
    Delete { id: String },
    /// Show the analysis summary
    Summary { id: String },
    /// Print a file of an analyzed repository
    File { id: String, path: String },
    /// Follow analysis status until it completes, fails or times out
    Watch {
        /// Repository IDs to watch
        ids: Vec<String>,

        /// Watch every repository whose analysis has not settled
        #[arg(long, conflicts_with = "ids")]
        all: bool,

        #[command(flatten)]
        timing: WatchTiming,
    },
}

/// Poll cadence overrides; unset values come from the environment
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WatchTiming {
    /// Milliseconds between status checks
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl WatchTiming {
    fn config(self) -> PollerConfig {
        let mut config = PollerConfig::from_env();
        if let Some(ms) = self.interval_ms {
            config.interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.timeout_ms {
            config.timeout = Duration::from_millis(ms);
        }
        config
    }
}

pub async fn handle_repo_command(command: RepoCommands, client: &ApiClient) -> Result<()> {
    match command {
        RepoCommands::List => list_repositories(client).await,
        RepoCommands::Add {
            full_name,
            watch,
            timing,
        } => add_repository(client, &full_name, watch, timing).await,
        RepoCommands::Get { id } => get_repository(client, &id.into()).await,
        RepoCommands::Delete { id } => delete_repository(client, &id.into()).await,
        RepoCommands::Summary { id } => show_summary(client, &id.into()).await,
        RepoCommands::File { id, path } => show_file(client, &id.into(), &path).await,
        RepoCommands::Watch { ids, all, timing } => {
            let ids = if all {
                pending_repositories(client).await?
            } else if ids.is_empty() {
                bail!("Pass repository IDs to watch, or --all");
            } else {
                ids.into_iter().map(ResourceId::from).collect()
            };
            watch_repositories(client, ids, timing).await
        }
    }
}

async fn list_repositories(client: &ApiClient) -> Result<()> {
    let repos = client.list_repositories().await?;

    if repos.is_empty() {
        println!("{}", "No linked repositories.".yellow());
    } else {
        println!("{}", format!("Found {} repository(ies):", repos.len()).bold());
        println!();
        for repo in repos {
            print_repository_summary(&repo);
        }
    }

    Ok(())
}

async fn add_repository(
    client: &ApiClient,
    full_name: &str,
    watch: bool,
    timing: WatchTiming,
) -> Result<()> {
    let repo = client.add_repository(full_name).await?;

    println!("{}", "✓ Repository linked".green());
    print_repository_summary(&repo);

    if watch && repo.needs_polling() {
        watch_repositories(client, vec![repo.id], timing).await?;
    }

    Ok(())
}

async fn get_repository(client: &ApiClient, id: &ResourceId) -> Result<()> {
    let repo = client.get_repository(id).await?;
    print_repository_details(&repo);
    Ok(())
}

async fn delete_repository(client: &ApiClient, id: &ResourceId) -> Result<()> {
    client.delete_repository(id).await?;
    println!("{}", format!("✓ Repository {} unlinked", id).green());
    Ok(())
}

async fn show_summary(client: &ApiClient, id: &ResourceId) -> Result<()> {
    let summary = client.get_repository_summary(id).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

async fn show_file(client: &ApiClient, id: &ResourceId, path: &str) -> Result<()> {
    let lines = client.get_file_content(id, path).await?;

    println!("{}", path.bold());
    println!("{}", "─".repeat(80).dimmed());
    let width = lines.len().to_string().len();
    for (n, line) in lines.iter().enumerate() {
        println!("{} {}", format!("{:>width$}", n + 1).dimmed(), line);
    }
    println!("{}", "─".repeat(80).dimmed());

    Ok(())
}

async fn pending_repositories(client: &ApiClient) -> Result<Vec<ResourceId>> {
    let ids: Vec<ResourceId> = client
        .list_repositories()
        .await?
        .into_iter()
        .filter(LinkedRepository::needs_polling)
        .map(|repo| repo.id)
        .collect();

    if ids.is_empty() {
        println!("{}", "No analyses in progress.".yellow());
    }
    Ok(ids)
}

/// Poll every id until all loops stop, printing each status change
///
/// Ctrl-C cancels every loop. Fails if any analysis failed or timed out.
async fn watch_repositories(
    client: &ApiClient,
    ids: Vec<ResourceId>,
    timing: WatchTiming,
) -> Result<()> {
    // A repeated id would replace its own loop and report a false failure
    let ids = unique_ids(ids);
    if ids.is_empty() {
        return Ok(());
    }

    let config = timing.config();
    config.validate()?;
    println!(
        "{}",
        format!(
            "Watching {} repository(ies) every {:?} (timeout {:?})",
            ids.len(),
            config.interval,
            config.timeout
        )
        .dimmed()
    );

    let poller = JobPoller::new(Arc::new(client.clone()), config);
    let mut waits = JoinSet::new();
    for id in ids {
        let mut last_status = None;
        let handle = poller.start_polling(id, move |repo: &LinkedRepository| {
            if last_status != Some(repo.analysis_status) {
                last_status = Some(repo.analysis_status);
                print_status_update(repo);
            }
        })?;
        waits.spawn(async move {
            let outcome = handle.wait().await;
            (handle.job_id().clone(), outcome)
        });
    }

    let mut unsettled = 0;
    loop {
        tokio::select! {
            joined = waits.join_next() => match joined {
                Some(Ok((id, outcome))) => {
                    if !print_outcome(&id, &outcome) {
                        unsettled += 1;
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                println!("{}", "Interrupted, stopping watchers".yellow());
                poller.cancel_all();
            }
        }
    }

    if unsettled > 0 {
        bail!("{} analysis(es) did not complete", unsettled);
    }
    Ok(())
}

/// Drops repeated ids, keeping first-seen order
fn unique_ids(ids: Vec<ResourceId>) -> Vec<ResourceId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

/// Print how a watch loop ended; returns whether the analysis completed
fn print_outcome(id: &ResourceId, outcome: &PollOutcome<LinkedRepository>) -> bool {
    let name = outcome
        .last
        .as_ref()
        .map(|repo| repo.repo_name.clone())
        .unwrap_or_else(|| format!("repository {}", id));

    match outcome.reason {
        StopReason::Completed => {
            let score = outcome
                .last
                .as_ref()
                .and_then(|repo| repo.assessment_score)
                .map(|s| format!(" (score {:.1})", s))
                .unwrap_or_default();
            println!("{} {}{}", "✓".green(), format!("{} analyzed", name).bold(), score);
            true
        }
        StopReason::Failed => {
            println!("{} {}", "✗".red(), format!("{} analysis failed", name).bold());
            false
        }
        StopReason::TimedOut => {
            println!(
                "{} {} after {} check(s)",
                "⏱".yellow(),
                format!("Gave up waiting for {}", name).bold(),
                outcome.updates
            );
            false
        }
        StopReason::Cancelled | StopReason::Replaced => {
            println!("{} {}", "■".dimmed(), format!("Stopped watching {}", name).dimmed());
            false
        }
    }
}

fn print_status_update(repo: &LinkedRepository) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        repo.repo_name.bold(),
        colorize_status(repo.analysis_status)
    );
}

fn print_repository_summary(repo: &LinkedRepository) {
    println!("  {} {} {}", "▸".cyan(), repo.repo_name.bold(), repo.id.to_string().dimmed());
    println!("    Status:    {}", colorize_status(repo.analysis_status));
    if !repo.languages.is_empty() {
        println!("    Languages: {}", repo.languages.join(", "));
    }
    println!();
}

fn print_repository_details(repo: &LinkedRepository) {
    println!("{}", "Repository Details:".bold());
    println!("  ID:        {}", repo.id.to_string().cyan());
    println!("  Name:      {}", repo.repo_name);
    println!("  URL:       {}", repo.repo_url.dimmed());
    println!("  Status:    {}", colorize_status(repo.analysis_status));
    if let Some(description) = &repo.description {
        println!("  About:     {}", description);
    }
    if !repo.languages.is_empty() {
        println!("  Languages: {}", repo.languages.join(", "));
    }
    if let Some(score) = repo.assessment_score {
        println!("  Score:     {:.1}", score);
    }
    if let Some(at) = repo.last_analyzed {
        println!(
            "  Analyzed:  {}",
            at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
}

fn colorize_status(status: AnalysisStatus) -> ColoredString {
    match status {
        AnalysisStatus::Pending => "pending".yellow(),
        AnalysisStatus::Analyzing => "analyzing".cyan(),
        AnalysisStatus::Complete => "complete".green(),
        AnalysisStatus::Failed => "failed".red(),
    }
}
