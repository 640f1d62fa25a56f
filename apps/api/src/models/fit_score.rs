use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{check_score, loose_string, score, Validate};

/// Categories every fit score reply must cover.
pub const FIT_CATEGORIES: [&str; 6] = [
    "technical_skills_match",
    "experience_alignment",
    "education_background",
    "gpa_and_academics",
    "previous_company_experience",
    "leadership_and_involvement",
];

/// Fit of a résumé against a job, 0-100 overall and per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitScoreRecord {
    #[serde(deserialize_with = "score")]
    pub overall_fit_score: i64,
    pub categories: BTreeMap<String, CategoryScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    #[serde(deserialize_with = "score")]
    pub score: i64,
    #[serde(default, deserialize_with = "loose_string")]
    pub reason: Option<String>,
}

impl Validate for FitScoreRecord {
    fn validate(&mut self) -> Result<(), String> {
        check_score("overall_fit_score", self.overall_fit_score)?;
        for name in FIT_CATEGORIES {
            if !self.categories.contains_key(name) {
                return Err(format!("category '{name}' is missing"));
            }
        }
        for (name, category) in &self.categories {
            check_score(name, category.score)?;
        }
        Ok(())
    }
}
