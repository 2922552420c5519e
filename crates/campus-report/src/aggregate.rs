//! Grouping of submissions by respondent identity.

use campus_model::Submission;
use chrono::{DateTime, Utc};

/// All submissions from one respondent, identified by email.
#[derive(Debug, Clone)]
pub struct RespondentGroup {
    pub email: String,
    pub submissions: Vec<Submission>,
}

impl RespondentGroup {
    /// Display name taken from the most recent submission. Names are
    /// labels only; identity is the email key.
    pub fn display_name(&self) -> &str {
        self.submissions
            .iter()
            .max_by_key(|submission| submission.submitted_at)
            .map(|submission| submission.respondent_name.as_str())
            .unwrap_or_default()
    }

    /// Timestamp of the most recent submission in the group.
    pub fn latest(&self) -> Option<DateTime<Utc>> {
        self.submissions
            .iter()
            .map(|submission| submission.submitted_at)
            .max()
    }

    pub fn count(&self) -> usize {
        self.submissions.len()
    }
}

/// Partition submissions by `respondent_email`.
///
/// Groups appear in first-seen order and keep the input order of their
/// submissions; every submission lands in exactly one group. Sorting is
/// a separate step ([`sort_latest_first`]).
pub fn group_by_respondent(submissions: &[Submission]) -> Vec<RespondentGroup> {
    let mut groups: Vec<RespondentGroup> = Vec::new();
    for submission in submissions {
        match groups
            .iter_mut()
            .find(|group| group.email == submission.respondent_email)
        {
            Some(group) => group.submissions.push(submission.clone()),
            None => groups.push(RespondentGroup {
                email: submission.respondent_email.clone(),
                submissions: vec![submission.clone()],
            }),
        }
    }
    groups
}

/// Order groups by their most recent submission, newest first, and each
/// group's submissions the same way.
pub fn sort_latest_first(groups: &mut [RespondentGroup]) {
    for group in groups.iter_mut() {
        group
            .submissions
            .sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    }
    groups.sort_by(|a, b| b.latest().cmp(&a.latest()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_model::Answer;
    use chrono::{Datelike, TimeZone};

    fn submission(email: &str, name: &str, day: u32) -> Submission {
        Submission {
            id: format!("sub-{email}-{day}"),
            respondent_email: email.to_string(),
            respondent_name: name.to_string(),
            submitted_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            answers: vec![Answer {
                question_id: "q1".to_string(),
                rating: 4,
            }],
        }
    }

    #[test]
    fn grouping_is_a_disjoint_cover() {
        let submissions = vec![
            submission("a@x.com", "Ann", 1),
            submission("b@x.com", "Ben", 2),
            submission("a@x.com", "Ann", 3),
        ];
        let groups = group_by_respondent(&submissions);
        assert_eq!(groups.len(), 2);
        let total: usize = groups.iter().map(RespondentGroup::count).sum();
        assert_eq!(total, submissions.len());
        for group in &groups {
            assert!(
                group
                    .submissions
                    .iter()
                    .all(|s| s.respondent_email == group.email)
            );
        }
    }

    #[test]
    fn groups_preserve_input_order_until_sorted() {
        let submissions = vec![
            submission("a@x.com", "Ann", 3),
            submission("a@x.com", "Ann", 1),
        ];
        let groups = group_by_respondent(&submissions);
        assert_eq!(groups[0].submissions[0].submitted_at.day(), 3);
        assert_eq!(groups[0].submissions[1].submitted_at.day(), 1);
    }

    #[test]
    fn latest_first_orders_groups_and_submissions() {
        let submissions = vec![
            submission("a@x.com", "Ann", 1),
            submission("b@x.com", "Ben", 9),
            submission("a@x.com", "Ann", 5),
        ];
        let mut groups = group_by_respondent(&submissions);
        sort_latest_first(&mut groups);
        assert_eq!(groups[0].email, "b@x.com");
        assert_eq!(groups[1].email, "a@x.com");
        assert_eq!(groups[1].submissions[0].submitted_at.day(), 5);
    }

    #[test]
    fn display_name_comes_from_most_recent_submission() {
        let mut older = submission("a@x.com", "Ann", 1);
        older.respondent_name = "A. Smith".to_string();
        let newer = submission("a@x.com", "Ann Smith", 8);
        let groups = group_by_respondent(&[older, newer]);
        assert_eq!(groups[0].display_name(), "Ann Smith");
    }
}
