//! Assessment command handlers

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use skillhire_client::ApiClient;
use skillhire_core::domain::ResourceId;
use skillhire_core::domain::assessment::Assessment;

/// Assessment subcommands
#[derive(Subcommand)]
pub enum AssessmentCommands {
    /// Generate an assessment from an analyzed repository
    Generate {
        /// Repository ID
        repo_id: String,
    },
    /// Show the assessment of a repository
    Show {
        /// Repository ID
        repo_id: String,
    },
    /// Submit answers for grading
    Submit {
        /// Assessment ID
        assessment_id: String,

        /// Chosen option per question, e.g. 0,2,1
        #[arg(long, value_delimiter = ',', required = true)]
        answers: Vec<usize>,

        /// Seconds spent answering
        #[arg(long, default_value_t = 0)]
        time_spent: u64,
    },
}

pub async fn handle_assessment_command(
    command: AssessmentCommands,
    client: &ApiClient,
) -> Result<()> {
    match command {
        AssessmentCommands::Generate { repo_id } => {
            let assessment = client.generate_assessment(&repo_id.into()).await?;
            println!("{}", "✓ Assessment generated".green());
            print_assessment(&assessment);
        }
        AssessmentCommands::Show { repo_id } => {
            let assessment = client.get_assessment(&repo_id.into()).await?;
            print_assessment(&assessment);
        }
        AssessmentCommands::Submit {
            assessment_id,
            answers,
            time_spent,
        } => submit(client, assessment_id.into(), answers, time_spent).await?,
    }

    Ok(())
}

async fn submit(
    client: &ApiClient,
    assessment_id: ResourceId,
    answers: Vec<usize>,
    time_spent: u64,
) -> Result<()> {
    if answers.is_empty() {
        bail!("At least one answer is required");
    }

    let total = answers.len();
    let attempt = client
        .submit_assessment(&assessment_id, answers, time_spent)
        .await?;

    println!("{}", "✓ Assessment submitted".green());
    println!("  Correct: {}/{}", attempt.correct_answers, total);
    println!("  Score:   {}", format!("{:.1}", attempt.score).cyan().bold());
    Ok(())
}

fn print_assessment(assessment: &Assessment) {
    println!(
        "{} {}",
        "Assessment".bold(),
        assessment.id.to_string().cyan()
    );
    match assessment.score {
        Some(score) if assessment.is_completed() => {
            println!("  Score: {}", format!("{:.1}", score).green())
        }
        _ => println!("  {}", "Not completed yet".yellow()),
    }
    println!();

    for (n, question) in assessment.questions.iter().enumerate() {
        println!("{} {}", format!("{}.", n + 1).bold(), question.text);
        for (i, option) in question.options.iter().enumerate() {
            println!("   {} {}", format!("[{}]", i).dimmed(), option);
        }
        println!();
    }
}
