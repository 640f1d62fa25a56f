use serde::{Deserialize, Serialize};

use super::{loose_string, null_as_default, Validate};

/// Structured résumé produced once per request from the extracted page text.
///
/// The four top-level keys are required; a reply missing any of them is
/// rejected at parse time. Inner fields tolerate omissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub user_info: ContactInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "loose_string")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub graduation_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, deserialize_with = "loose_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub dates: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

impl Validate for ResumeRecord {
    fn validate(&mut self) -> Result<(), String> {
        self.skills.retain(|s| !s.trim().is_empty());
        Ok(())
    }
}
