use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{loose_string, null_as_default, Validate};

/// Public profile of the interviewer, reorganized from search excerpts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_info: ProfileInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ProfileExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<ProfileEducation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organizations: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activity: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub location: Option<String>,
    /// "500+" or a number, depending on how the page shows it.
    #[serde(default, deserialize_with = "loose_string")]
    pub connections: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileExperience {
    #[serde(default, deserialize_with = "loose_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileEducation {
    #[serde(default, deserialize_with = "loose_string")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub start_year: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub end_year: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub description: Option<String>,
}

impl Validate for ProfileRecord {
    fn validate(&mut self) -> Result<(), String> {
        self.experience
            .retain(|e| e.title.is_some() || e.company.is_some());
        self.education.retain(|e| e.school.is_some());
        Ok(())
    }
}
