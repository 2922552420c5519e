//! Shared data model for campus content collections and feedback.

pub mod entity;
pub mod feedback;
pub mod validation;

pub use entity::{Collection, CollectionKind, OrderableItem};
pub use feedback::{Answer, FeedbackForm, Question, Submission};
pub use validation::{
    IssueSeverity, ValidationIssue, ValidationReport, check_single_active, validate_form,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_counts() {
        let report = ValidationReport {
            form_id: "form-1".to_string(),
            issues: vec![
                ValidationIssue {
                    code: "FORM001".to_string(),
                    message: "Form title is required".to_string(),
                    severity: IssueSeverity::Error,
                    question_id: None,
                },
                ValidationIssue {
                    code: "FORM010".to_string(),
                    message: "An active feedback form already exists".to_string(),
                    severity: IssueSeverity::Warning,
                    question_id: None,
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn orderable_item_accepts_backend_field_names() {
        let json = r#"{
            "_id": "col-1",
            "name": "Engineering",
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let item: OrderableItem = serde_json::from_str(json).expect("deserialize item");
        assert_eq!(item.id, "col-1");
        assert_eq!(item.label, "Engineering");
        assert!(item.index.is_none());
        assert!(item.created_at.is_some());
    }
}
