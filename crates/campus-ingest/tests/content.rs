//! Loading and saving tests against real files.

use campus_ingest::{load_collection, load_form, load_order, load_submissions, save_order};
use campus_model::CollectionKind;
use campus_order::{OrderSnapshot, WorkingOrder};
use tempfile::TempDir;

#[test]
fn loads_a_bare_collection_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colleges.json");
    std::fs::write(
        &path,
        r#"[
            {"_id": "col-2", "name": "Law", "index": 1},
            {"_id": "col-1", "name": "Engineering", "index": 0}
        ]"#,
    )
    .unwrap();

    let collection = load_collection(&path, CollectionKind::Colleges).unwrap();
    assert_eq!(collection.kind, CollectionKind::Colleges);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.items[0].id, "col-2");
}

#[test]
fn loads_a_backend_response_envelope() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highlights.json");
    std::fs::write(
        &path,
        r#"{"data": [{"_id": "hl-1", "title": "Convocation", "createdAt": "2024-02-01T00:00:00Z"}]}"#,
    )
    .unwrap();

    let collection = load_collection(&path, CollectionKind::Highlights).unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.items[0].label, "Convocation");
    assert!(collection.items[0].index.is_none());
}

#[test]
fn loads_form_and_submissions() {
    let dir = TempDir::new().unwrap();
    let form_path = dir.path().join("semester-form.json");
    std::fs::write(
        &form_path,
        r#"{
            "_id": "form-1",
            "title": "Semester Feedback",
            "is_active": true,
            "questions": [
                {"_id": "q1", "question_text": "Good?", "category": "General", "max_rating": 5}
            ]
        }"#,
    )
    .unwrap();
    let responses_path = dir.path().join("semester-responses.json");
    std::fs::write(
        &responses_path,
        r#"{"data": [{
            "_id": "resp-1",
            "respondent_email": "a@x.com",
            "respondent_name": "Ann",
            "submitted_at": "2024-05-10T09:30:00Z",
            "answers": [{"question_id": "q1", "rating": 4}]
        }]}"#,
    )
    .unwrap();

    let form = load_form(&form_path).unwrap();
    assert_eq!(form.title, "Semester Feedback");
    assert_eq!(form.questions.len(), 1);
    assert_eq!(form.questions[0].text, "Good?");

    let submissions = load_submissions(&responses_path).unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].respondent_email, "a@x.com");
}

#[test]
fn order_payload_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colleges-order.json");
    let snapshots = vec![
        OrderSnapshot {
            id: "col-1".to_string(),
            index: 0,
        },
        OrderSnapshot {
            id: "col-2".to_string(),
            index: 1,
        },
    ];

    save_order(&path, &snapshots).unwrap();
    let loaded = load_order(&path).unwrap();
    assert_eq!(loaded, snapshots);
}

#[test]
fn saved_order_matches_engine_diff() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colleges.json");
    std::fs::write(
        &path,
        r#"[
            {"_id": "a", "name": "A", "index": 0},
            {"_id": "b", "name": "B", "index": 1},
            {"_id": "c", "name": "C", "index": 2}
        ]"#,
    )
    .unwrap();

    let collection = load_collection(&path, CollectionKind::Colleges).unwrap();
    let mut order = WorkingOrder::initialize(collection.items);
    order.move_by_position(0, 2);

    let out = dir.path().join("colleges-order.json");
    save_order(&out, &order.diff()).unwrap();
    let loaded = load_order(&out).unwrap();
    let ids: Vec<&str> = loaded.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

#[test]
fn missing_file_is_reported_with_path() {
    let error = load_form(std::path::Path::new("/nonexistent/form.json")).unwrap_err();
    assert!(error.to_string().contains("/nonexistent/form.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();
    let error = load_submissions(&path).unwrap_err();
    assert!(matches!(error, campus_ingest::IngestError::Parse { .. }));
}
