use serde::{Deserialize, Serialize};

use super::{loose_string, null_as_default, Validate};

pub const QUESTION_COUNT: usize = 5;

/// Practice questions tailored to the job and the candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestions {
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub rationale: Option<String>,
}

impl Validate for InterviewQuestions {
    fn validate(&mut self) -> Result<(), String> {
        self.questions.retain(|q| !q.question.trim().is_empty());
        if self.questions.is_empty() {
            return Err("no questions were generated".to_string());
        }
        self.questions.truncate(QUESTION_COUNT);
        Ok(())
    }
}
