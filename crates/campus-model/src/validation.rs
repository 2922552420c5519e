//! Pre-persistence validation for feedback forms.
//!
//! These are the checks the console runs before any save call: an invalid
//! form is reported and the operation aborted locally, never sent to the
//! backend.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A validation issue found on a feedback form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable issue code (e.g., "FORM001").
    pub code: String,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Severity level.
    pub severity: IssueSeverity,
    /// Question id the issue refers to (if applicable).
    pub question_id: Option<String>,
}

/// Validation report for a single form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(rename = "form")]
    pub form_id: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Validate a feedback form before persistence.
///
/// Never fails the process; all findings are collected into the report.
pub fn validate_form(form: &FeedbackForm) -> ValidationReport {
    let mut issues = Vec::new();

    if form.title.trim().is_empty() {
        issues.push(ValidationIssue {
            code: "FORM001".to_string(),
            message: "Form title is required".to_string(),
            severity: IssueSeverity::Error,
            question_id: None,
        });
    }

    if form.questions.is_empty() {
        issues.push(ValidationIssue {
            code: "FORM002".to_string(),
            message: "At least one question is required".to_string(),
            severity: IssueSeverity::Error,
            question_id: None,
        });
    }

    let mut seen_ids: BTreeSet<&str> = BTreeSet::new();
    for question in &form.questions {
        if question.text.trim().is_empty() {
            issues.push(ValidationIssue {
                code: "FORM003".to_string(),
                message: "All questions must have text".to_string(),
                severity: IssueSeverity::Error,
                question_id: Some(question.id.clone()),
            });
        }
        if !question.id.is_empty() && !seen_ids.insert(question.id.as_str()) {
            issues.push(ValidationIssue {
                code: "FORM004".to_string(),
                message: format!("Duplicate question id: {}", question.id),
                severity: IssueSeverity::Error,
                question_id: Some(question.id.clone()),
            });
        }
        if question.max_rating == 0 {
            issues.push(ValidationIssue {
                code: "FORM005".to_string(),
                message: "Question max rating must be positive".to_string(),
                severity: IssueSeverity::Error,
                question_id: Some(question.id.clone()),
            });
        }
    }

    ValidationReport {
        form_id: form.id.clone(),
        issues,
    }
}

/// Check the single-active-form constraint across a set of forms.
///
/// The backend allows exactly one active form at a time; a second active
/// form is reported as a warning on each active form past the first.
pub fn check_single_active(forms: &[FeedbackForm]) -> Vec<ValidationIssue> {
    let active: Vec<&FeedbackForm> = forms.iter().filter(|form| form.is_active).collect();
    if active.len() <= 1 {
        return Vec::new();
    }
    active
        .iter()
        .skip(1)
        .map(|form| ValidationIssue {
            code: "FORM010".to_string(),
            message: format!("An active feedback form already exists; '{}' should be deactivated", form.title),
            severity: IssueSeverity::Warning,
            question_id: None,
        })
        .collect()
}
