//! Candidate profile command handlers

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use skillhire_client::ApiClient;
use skillhire_core::domain::profile::CandidateProfile;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the candidate profile
    Show,
    /// Update fields of the candidate profile
    Update(ProfileUpdate),
}

#[derive(Args)]
pub struct ProfileUpdate {
    #[arg(long)]
    full_name: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    education_level: Option<String>,
    #[arg(long)]
    bio: Option<String>,
}

impl ProfileUpdate {
    fn apply(self, profile: &mut CandidateProfile) {
        if let Some(v) = self.full_name {
            profile.full_name = v;
        }
        if let Some(v) = self.age {
            profile.age = Some(v);
        }
        if let Some(v) = self.gender {
            profile.gender = v;
        }
        if let Some(v) = self.location {
            profile.location = v;
        }
        if let Some(v) = self.education_level {
            profile.education_level = v;
        }
        if let Some(v) = self.bio {
            profile.bio = v;
        }
    }
}

pub async fn handle_profile_command(command: ProfileCommands, client: &ApiClient) -> Result<()> {
    match command {
        ProfileCommands::Show => {
            let profile = client.get_candidate_profile().await?;
            print_profile(&profile);
        }
        ProfileCommands::Update(update) => {
            // The endpoint replaces the whole profile
            let mut profile = client.get_candidate_profile().await?;
            update.apply(&mut profile);
            let saved = client.update_candidate_profile(&profile).await?;
            println!("{}", "Profile updated.".green());
            print_profile(&saved);
        }
    }

    Ok(())
}

fn print_profile(profile: &CandidateProfile) {
    println!("{}", "Candidate Profile:".bold());
    println!("  Name:       {}", profile.full_name.cyan());
    if let Some(age) = profile.age {
        println!("  Age:        {}", age);
    }
    println!("  Gender:     {}", profile.gender);
    println!("  Location:   {}", profile.location);
    println!("  Education:  {}", profile.education_level);
    if !profile.bio.is_empty() {
        println!("\n{}", profile.bio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_only_touches_given_fields() {
        let mut profile = CandidateProfile {
            full_name: "Ada".to_string(),
            location: "London".to_string(),
            ..Default::default()
        };
        ProfileUpdate {
            full_name: None,
            age: Some(36),
            gender: None,
            location: Some("Paris".to_string()),
            education_level: None,
            bio: None,
        }
        .apply(&mut profile);

        assert_eq!(profile.full_name, "Ada");
        assert_eq!(profile.age, Some(36));
        assert_eq!(profile.location, "Paris");
    }
}
