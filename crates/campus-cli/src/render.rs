//! Terminal table rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use campus_model::{IssueSeverity, OrderableItem, Question, ValidationIssue};
use campus_report::{RespondentGroup, ResponseSummary, format_timestamp};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Table of a collection in serve order.
pub fn collection_table(items: &[OrderableItem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Created"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, item) in items.iter().enumerate() {
        let created = item
            .created_at
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(position + 1),
            dim_cell(&item.id),
            Cell::new(&item.label),
            Cell::new(created),
        ]);
    }
    table
}

/// Table of the responses stat cards.
pub fn summary_table(summary: &ResponseSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Responses"),
        header_cell("Questions"),
        header_cell("Respondents"),
        header_cell("Avg / Question"),
        header_cell("Latest"),
    ]);
    apply_table_style(&mut table);
    let latest = summary
        .latest_submission
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string());
    table.add_row(vec![
        Cell::new(summary.total_submissions),
        Cell::new(summary.question_count),
        Cell::new(summary.respondent_count),
        Cell::new(summary.avg_per_question),
        Cell::new(latest),
    ]);
    table
}

/// Table of one respondent's submissions, one row per submission with a
/// rating column per question.
pub fn group_table(group: &RespondentGroup, questions: &[Question]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Submitted At")];
    for (position, question) in questions.iter().enumerate() {
        header.push(header_cell(&format!("Q{}", position + 1)));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    for submission in &group.submissions {
        let mut row = vec![Cell::new(format_timestamp(submission.submitted_at))];
        for question in questions {
            let cell = match submission.rating_for(&question.id) {
                Some(rating) => Cell::new(format!("{}/{}", rating, question.max_rating)),
                None => dim_cell("-"),
            };
            row.push(cell);
        }
        table.add_row(row);
    }
    table
}

/// Table of validation issues across the checked forms.
pub fn issue_table(issues: &[(String, ValidationIssue)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Form"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Question"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for (form, issue) in issues {
        table.add_row(vec![
            Cell::new(form),
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            Cell::new(issue.question_id.clone().unwrap_or_else(|| "-".to_string())),
            Cell::new(&issue.message),
        ]);
    }
    table
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}
