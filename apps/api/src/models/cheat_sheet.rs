use serde::{Deserialize, Serialize};

use super::{check_score, loose_string, null_as_default, score, text_or_list, Validate};

pub const MAX_SPEAK_POINTS: usize = 8;
pub const MAX_LEETCODE_TOPICS: usize = 10;

/// Distilled interview-preparation summary built from every upstream record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheatSheetRecord {
    #[serde(default, deserialize_with = "text_or_list")]
    pub speak_points: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub company_must_knows: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub recent_news: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub people_experience: Vec<PersonExperience>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub leetcode_topics: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interviewer_intel: InterviewerIntel,
    pub fit_score_summary: FitScoreSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonExperience {
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub interview_tip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewerIntel {
    #[serde(default, deserialize_with = "text_or_list")]
    pub technical_specialties: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub affiliations: Vec<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub background_summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitScoreSummary {
    #[serde(deserialize_with = "score")]
    pub overall: i64,
    #[serde(default, deserialize_with = "text_or_list")]
    pub skills_gaps: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub recommended_improvements: Vec<String>,
}

impl Validate for CheatSheetRecord {
    fn validate(&mut self) -> Result<(), String> {
        check_score("fitScoreSummary.overall", self.fit_score_summary.overall)?;
        self.speak_points.truncate(MAX_SPEAK_POINTS);
        self.leetcode_topics.truncate(MAX_LEETCODE_TOPICS);
        self.people_experience
            .retain(|p| p.name.is_some() || p.role.is_some() || p.interview_tip.is_some());
        Ok(())
    }
}
