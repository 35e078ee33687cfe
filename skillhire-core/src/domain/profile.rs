//! Candidate profile

use serde::{Deserialize, Serialize};

/// Candidate profile as edited on the profile setup page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub bio: String,
}

impl CandidateProfile {
    /// First word of the full name, used for greetings
    pub fn first_name(&self) -> Option<&str> {
        self.full_name.split_whitespace().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let profile = CandidateProfile {
            full_name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.first_name(), Some("Ada"));
        assert_eq!(CandidateProfile::default().first_name(), None);
    }

    #[test]
    fn test_null_age_accepted() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"id": 1, "full_name": "A", "age": null}"#).unwrap();
        assert_eq!(profile.age, None);
    }
}
