use serde::{Deserialize, Serialize};

use super::{loose_string, text_or_list, Validate};

/// Interview-relevant research about a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyResearch {
    pub company_info: CompanyInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default, deserialize_with = "loose_string")]
    pub mission_statement: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub core_values: Vec<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub engineering_culture: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub interview_process: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub common_interview_questions: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub leetcode_topics: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub recent_news: Vec<String>,
}

impl CompanyResearch {
    pub fn leetcode_topics(&self) -> &[String] {
        &self.company_info.leetcode_topics
    }
}

impl Validate for CompanyResearch {}

/// A practice problem likely to come up in the company's coding rounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeetcodeProblem {
    pub problem_name: String,
    #[serde(default)]
    pub url: String,
}

/// Models answer with a bare array or wrap it in an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LeetcodeReply {
    List(Vec<LeetcodeProblem>),
    Wrapped { problems: Vec<LeetcodeProblem> },
}

impl LeetcodeReply {
    pub fn into_problems(self) -> Vec<LeetcodeProblem> {
        match self {
            LeetcodeReply::List(problems) | LeetcodeReply::Wrapped { problems } => problems,
        }
    }
}

impl Validate for LeetcodeReply {
    fn validate(&mut self) -> Result<(), String> {
        let problems = match self {
            LeetcodeReply::List(problems) | LeetcodeReply::Wrapped { problems } => problems,
        };
        problems.retain(|p| !p.problem_name.trim().is_empty());
        if problems.is_empty() {
            return Err("no problems were returned".to_string());
        }
        Ok(())
    }
}
