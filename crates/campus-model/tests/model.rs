use campus_model::{
    Answer, CollectionKind, FeedbackForm, IssueSeverity, Question, Submission,
    check_single_active, validate_form,
};
use chrono::{TimeZone, Utc};

fn question(id: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        category: "General".to_string(),
        max_rating: 5,
    }
}

fn form(title: &str, questions: Vec<Question>) -> FeedbackForm {
    FeedbackForm {
        id: "form-1".to_string(),
        title: title.to_string(),
        description: String::new(),
        is_active: false,
        questions,
    }
}

#[test]
fn valid_form_has_no_issues() {
    let report = validate_form(&form("Semester Feedback", vec![question("q1", "Good?")]));
    assert!(report.issues.is_empty());
    assert!(!report.has_errors());
}

#[test]
fn empty_title_is_an_error() {
    let report = validate_form(&form("   ", vec![question("q1", "Good?")]));
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].code, "FORM001");
}

#[test]
fn zero_questions_is_an_error() {
    let report = validate_form(&form("Semester Feedback", vec![]));
    assert!(report.has_errors());
    assert_eq!(report.issues[0].code, "FORM002");
}

#[test]
fn empty_question_text_is_an_error() {
    let report = validate_form(&form(
        "Semester Feedback",
        vec![question("q1", "Good?"), question("q2", "  ")],
    ));
    assert_eq!(report.error_count(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.code, "FORM003");
    assert_eq!(issue.question_id.as_deref(), Some("q2"));
}

#[test]
fn duplicate_question_ids_are_flagged() {
    let report = validate_form(&form(
        "Semester Feedback",
        vec![question("q1", "Good?"), question("q1", "Bad?")],
    ));
    assert!(report.issues.iter().any(|issue| issue.code == "FORM004"));
}

#[test]
fn zero_max_rating_is_an_error() {
    let mut bad = question("q1", "Good?");
    bad.max_rating = 0;
    let report = validate_form(&form("Semester Feedback", vec![bad]));
    assert!(report.issues.iter().any(|issue| issue.code == "FORM005"));
}

#[test]
fn second_active_form_is_a_warning() {
    let mut first = form("Spring", vec![question("q1", "Good?")]);
    first.is_active = true;
    let mut second = form("Fall", vec![question("q1", "Good?")]);
    second.id = "form-2".to_string();
    second.is_active = true;

    let issues = check_single_active(&[first.clone(), second]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, IssueSeverity::Warning);

    assert!(check_single_active(&[first]).is_empty());
}

#[test]
fn collection_kind_parses_filename_variants() {
    assert_eq!(
        "carousel-images".parse::<CollectionKind>().unwrap(),
        CollectionKind::CarouselImages
    );
    assert_eq!(
        "Highlights".parse::<CollectionKind>().unwrap(),
        CollectionKind::Highlights
    );
    assert!("unknown".parse::<CollectionKind>().is_err());
}

#[test]
fn submission_rating_lookup_is_keyed_by_question() {
    let submission = Submission {
        id: "sub-1".to_string(),
        respondent_email: "a@x.com".to_string(),
        respondent_name: "Ann".to_string(),
        submitted_at: Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap(),
        answers: vec![
            Answer {
                question_id: "q2".to_string(),
                rating: 3,
            },
            Answer {
                question_id: "q1".to_string(),
                rating: 4,
            },
        ],
    };
    assert_eq!(submission.rating_for("q1"), Some(4));
    assert_eq!(submission.rating_for("q2"), Some(3));
    assert_eq!(submission.rating_for("q3"), None);
}

#[test]
fn submission_deserializes_backend_export() {
    let json = r#"{
        "_id": "resp-1",
        "respondent_email": "a@x.com",
        "respondent_name": "Ann",
        "submitted_at": "2024-05-10T09:30:00Z",
        "answers": [{"question_id": "q1", "rating": 4}]
    }"#;
    let submission: Submission = serde_json::from_str(json).expect("deserialize submission");
    assert_eq!(submission.id, "resp-1");
    assert_eq!(submission.answers.len(), 1);
}
