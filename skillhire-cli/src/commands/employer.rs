//! Employer command handlers

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::*;
use skillhire_client::ApiClient;
use skillhire_core::domain::employer::{Candidate, EmployerProfile, SortBy, WorkType};
use skillhire_core::dto::employer::{CandidateSearch, UpdateEmployerProfile};

/// Employer subcommands
#[derive(Subcommand)]
pub enum EmployerCommands {
    /// Show the company profile
    Profile,
    /// Update fields of the company profile
    UpdateProfile {
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        overview: Option<String>,
        #[arg(long, value_enum)]
        work_type: Option<WorkTypeArg>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Search candidates
    Search {
        /// Free text query
        #[arg(short, long)]
        query: Option<String>,

        /// Required skill (repeatable)
        #[arg(long = "skill")]
        skills: Vec<String>,

        #[arg(long, value_enum)]
        sort_by: Option<SortByArg>,
    },
    /// Show a candidate
    Candidate { id: String },
    /// Show one of a candidate's projects
    Project { candidate_id: String, project_id: String },
    /// Send a message to a candidate
    Contact {
        candidate_id: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WorkTypeArg {
    Remote,
    Hybrid,
    Onsite,
}

impl From<WorkTypeArg> for WorkType {
    fn from(arg: WorkTypeArg) -> Self {
        match arg {
            WorkTypeArg::Remote => WorkType::Remote,
            WorkTypeArg::Hybrid => WorkType::Hybrid,
            WorkTypeArg::Onsite => WorkType::Onsite,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortByArg {
    BestMatch,
    SkillScore,
}

impl From<SortByArg> for SortBy {
    fn from(arg: SortByArg) -> Self {
        match arg {
            SortByArg::BestMatch => SortBy::BestMatch,
            SortByArg::SkillScore => SortBy::SkillScore,
        }
    }
}

pub async fn handle_employer_command(command: EmployerCommands, client: &ApiClient) -> Result<()> {
    match command {
        EmployerCommands::Profile => {
            let profile = client.get_employer_profile().await?;
            print_employer_profile(&profile);
        }
        EmployerCommands::UpdateProfile {
            company_name,
            overview,
            work_type,
            location,
        } => {
            let update = UpdateEmployerProfile {
                company_name,
                company_overview: overview,
                work_type: work_type.map(Into::into),
                location,
            };
            let profile = client.update_employer_profile(&update).await?;
            println!("{}", "Profile updated.".green());
            print_employer_profile(&profile);
        }
        EmployerCommands::Search {
            query,
            skills,
            sort_by,
        } => {
            let search = CandidateSearch {
                query,
                skills,
                sort_by: sort_by.map(Into::into),
            };
            search_candidates(client, &search).await?;
        }
        EmployerCommands::Candidate { id } => {
            let detail = client.get_candidate(&id.into()).await?;
            print_candidate(&detail.candidate);
            if !detail.bio.is_empty() {
                println!("    {}", detail.bio);
            }
        }
        EmployerCommands::Project {
            candidate_id,
            project_id,
        } => {
            let project = client
                .get_candidate_project(&candidate_id.into(), &project_id.into())
                .await?;
            println!("{}", "Project Details:".bold());
            println!("  ID:        {}", project.id.to_string().cyan());
            println!("  Name:      {}", project.repo_name);
            println!("  URL:       {}", project.repo_url.dimmed());
            println!("  Status:    {}", project.analysis_status);
            if !project.languages.is_empty() {
                println!("  Languages: {}", project.languages.join(", "));
            }
            if let Some(results) = &project.analysis_results {
                println!("{}", serde_json::to_string_pretty(results)?);
            }
        }
        EmployerCommands::Contact {
            candidate_id,
            subject,
            message,
        } => {
            client
                .contact_candidate(&candidate_id.into(), &subject, &message)
                .await?;
            println!("{}", "✓ Message sent".green());
        }
    }

    Ok(())
}

async fn search_candidates(client: &ApiClient, search: &CandidateSearch) -> Result<()> {
    let candidates = client.search_candidates(search).await?;

    if candidates.is_empty() {
        println!("{}", "No candidates matched.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} candidate(s):", candidates.len()).bold()
        );
        println!();
        for candidate in &candidates {
            print_candidate(candidate);
            println!();
        }
    }

    Ok(())
}

fn print_employer_profile(profile: &EmployerProfile) {
    println!("{}", "Company Profile:".bold());
    println!("  Company:   {}", profile.company_name.cyan());
    if let Some(work_type) = profile.work_type {
        println!("  Work type: {}", work_type);
    }
    if !profile.location.is_empty() {
        println!("  Location:  {}", profile.location);
    }
    if !profile.company_overview.is_empty() {
        println!("\n{}", profile.company_overview);
    }
}

fn print_candidate(candidate: &Candidate) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        candidate.full_name.bold(),
        candidate.id.to_string().dimmed()
    );
    println!(
        "    Score:     {} (skill {:.1})",
        format!("{:.1}", candidate.overall_score).green(),
        candidate.skill_score
    );
    if !candidate.skills.is_empty() {
        println!("    Skills:    {}", candidate.skills.join(", "));
    }
    if !candidate.location.is_empty() {
        println!("    Location:  {}", candidate.location);
    }
}
