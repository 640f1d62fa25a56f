use serde::{Deserialize, Serialize};

use super::{loose_string, null_as_default, Validate};

/// Structured job posting, reorganized from the posting page's excerpts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_info: JobInfo,
    pub description: JobDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobInfo {
    #[serde(default, deserialize_with = "loose_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub seniority_level: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub department_or_team: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub job_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    #[serde(default, deserialize_with = "loose_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Requirements,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: SkillSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compensation_and_benefits: Compensation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default, deserialize_with = "null_as_default")]
    pub must_have: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nice_to_have: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub soft: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools_and_technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    #[serde(default, deserialize_with = "loose_string")]
    pub salary_range: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub equity: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub bonus: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
}

impl Validate for JobRecord {
    fn validate(&mut self) -> Result<(), String> {
        // Template placeholders ("") survive when the model copies the schema verbatim.
        let d = &mut self.description;
        for list in [
            &mut d.responsibilities,
            &mut d.requirements.must_have,
            &mut d.requirements.nice_to_have,
            &mut d.skills.technical,
            &mut d.skills.soft,
            &mut d.skills.tools_and_technologies,
            &mut d.compensation_and_benefits.benefits,
        ] {
            list.retain(|s| !s.trim().is_empty());
        }
        Ok(())
    }
}
