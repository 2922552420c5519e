//! Headline statistics for a form's responses.

use std::collections::BTreeSet;

use campus_model::{Question, Submission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The stat-card numbers shown at the top of the responses view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub total_submissions: usize,
    pub question_count: usize,
    pub respondent_count: usize,
    /// Submissions per question, rounded to two decimals.
    pub avg_per_question: f64,
    pub latest_submission: Option<DateTime<Utc>>,
}

impl ResponseSummary {
    pub fn compute(submissions: &[Submission], questions: &[Question]) -> Self {
        let respondents: BTreeSet<&str> = submissions
            .iter()
            .map(|submission| submission.respondent_email.as_str())
            .collect();
        let avg_per_question = if submissions.is_empty() {
            0.0
        } else {
            let denominator = questions.len().max(1) as f64;
            (submissions.len() as f64 / denominator * 100.0).round() / 100.0
        };
        Self {
            total_submissions: submissions.len(),
            question_count: questions.len(),
            respondent_count: respondents.len(),
            avg_per_question,
            latest_submission: submissions
                .iter()
                .map(|submission| submission.submitted_at)
                .max(),
        }
    }
}
