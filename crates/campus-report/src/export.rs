//! Canonical CSV export of feedback submissions.

use campus_model::{Question, Submission};
use chrono::{DateTime, NaiveDate, Utc};
use csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;

/// Render a submission timestamp for display and export.
///
/// Display-only; ordering always uses the underlying instant.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Serialize submissions into the export CSV.
///
/// Header row: `Respondent Name, Email, Submitted At`, then one column
/// per question in form order, labeled `Q<n>: <text> (<category>)`.
/// Ratings are matched to questions by question id; a submission with no
/// answer for a question gets an empty cell rather than an error. Every
/// field is quoted. No trailing newline.
pub fn to_csv(submissions: &[Submission], questions: &[Question]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    let mut header = vec![
        "Respondent Name".to_string(),
        "Email".to_string(),
        "Submitted At".to_string(),
    ];
    for (position, question) in questions.iter().enumerate() {
        header.push(format!(
            "Q{}: {} ({})",
            position + 1,
            question.text,
            question.category
        ));
    }
    writer.write_record(&header)?;

    for submission in submissions {
        let mut row = vec![
            submission.respondent_name.clone(),
            submission.respondent_email.clone(),
            format_timestamp(submission.submitted_at),
        ];
        for question in questions {
            let cell = submission
                .rating_for(&question.id)
                .map(|rating| rating.to_string())
                .unwrap_or_default();
            row.push(cell);
        }
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|error| error.into_error())?;
    let mut text = String::from_utf8(bytes)?;
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    Ok(text)
}

/// Export filename convention: `feedback-responses-<title>-<YYYY-MM-DD>.csv`.
///
/// The form title is slugged to filesystem-safe characters.
pub fn export_filename(title: &str, date: NaiveDate) -> String {
    format!(
        "feedback-responses-{}-{}.csv",
        slug(title),
        date.format("%Y-%m-%d")
    )
}

fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_dash = true;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("form");
    }
    out
}
