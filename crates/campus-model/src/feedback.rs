use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_max_rating() -> u32 {
    5
}

/// A single rating question on a feedback form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "question_text")]
    pub text: String,
    pub category: String,
    /// Denominator shown next to each rating (e.g. "4/5").
    #[serde(default = "default_max_rating", alias = "max_rating")]
    pub max_rating: u32,
}

/// A feedback form definition with its questions in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackForm {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// One rated answer inside a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub rating: u32,
}

/// One complete answer set from a respondent at a point in time.
///
/// Submissions are immutable once created; the aggregator only reads and
/// regroups them. A submission never carries two answers for the same
/// question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub respondent_email: String,
    #[serde(default)]
    pub respondent_name: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Submission {
    /// Look up the rating this submission gave for a question.
    pub fn rating_for(&self, question_id: &str) -> Option<u32> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
            .map(|answer| answer.rating)
    }
}
