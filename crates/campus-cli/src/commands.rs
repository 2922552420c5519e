use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use crate::logging::redact_respondent;
use campus_ingest::{infer_collection_kind, load_collection, load_form, load_submissions, save_order};
use campus_model::{
    CollectionKind, FeedbackForm, Submission, ValidationIssue, check_single_active, validate_form,
};
use campus_order::WorkingOrder;
use campus_report::{
    ResponseSummary, export_filename, group_by_respondent, sort_latest_first, to_csv,
};

use crate::cli::{CheckArgs, CollectionKindArg, ExportArgs, ListArgs, ReorderArgs, ResponsesArgs};
use crate::render::{collection_table, group_table, issue_table, summary_table};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let kind = resolve_kind(args.kind, &args.collection)?;
    let collection = load_collection(&args.collection, kind).context("load collection")?;
    info!(collection = %kind, item_count = collection.len(), "listing collection");
    let order = WorkingOrder::initialize(collection.items);
    println!("{}: {} items", kind, order.len());
    println!("{}", collection_table(order.items()));
    Ok(())
}

/// Apply the requested moves and write the replace-order payload.
///
/// Returns the payload path, or `None` on a dry run.
pub fn run_reorder(args: &ReorderArgs) -> Result<Option<PathBuf>> {
    let kind = resolve_kind(args.kind, &args.collection)?;
    let span = info_span!("reorder", collection = %kind);
    let _guard = span.enter();

    let collection = load_collection(&args.collection, kind).context("load collection")?;
    let mut order = WorkingOrder::initialize(collection.items);

    println!("Current order:");
    println!("{}", collection_table(order.items()));

    for op in &args.moves {
        debug!(op = %op, "applying move");
        op.apply(&mut order);
    }

    println!("New order:");
    println!("{}", collection_table(order.items()));

    if !order.is_dirty() {
        info!("order unchanged");
    }
    if args.dry_run {
        info!("dry run, payload not written");
        return Ok(None);
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| default_order_path(&args.collection));
    save_order(&out, &order.diff()).context("write order payload")?;
    order.mark_saved();
    info!(path = %out.display(), item_count = order.len(), "order payload written");
    println!("Order payload: {}", out.display());
    Ok(Some(out))
}

pub fn run_responses(args: &ResponsesArgs) -> Result<()> {
    let form = load_form(&args.form).context("load feedback form")?;
    let submissions = load_submissions(&args.submissions).context("load submissions")?;
    warn_unknown_questions(&form, &submissions);

    let summary = ResponseSummary::compute(&submissions, &form.questions);
    println!("Form: {}", form.title);
    println!("{}", summary_table(&summary));

    if submissions.is_empty() {
        println!("No responses received yet for this feedback form.");
        return Ok(());
    }

    let mut groups = group_by_respondent(&submissions);
    sort_latest_first(&mut groups);
    info!(
        group_count = groups.len(),
        submission_count = submissions.len(),
        "grouped responses"
    );

    for group in &groups {
        debug!(
            respondent = redact_respondent(&group.email),
            submissions = group.count(),
            "rendering group"
        );
        let latest = group
            .latest()
            .map(campus_report::format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        println!();
        println!(
            "{} <{}> - {} submission{}, latest {}",
            group.display_name(),
            group.email,
            group.count(),
            if group.count() == 1 { "" } else { "s" },
            latest
        );
        println!("{}", group_table(group, &form.questions));
    }
    Ok(())
}

/// Write the CSV export and return its path, or `None` when printed to
/// stdout.
pub fn run_export(args: &ExportArgs) -> Result<Option<PathBuf>> {
    let form = load_form(&args.form).context("load feedback form")?;
    let submissions = load_submissions(&args.submissions).context("load submissions")?;
    warn_unknown_questions(&form, &submissions);

    let csv = to_csv(&submissions, &form.questions).context("serialize csv")?;
    if args.stdout {
        println!("{csv}");
        return Ok(None);
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let filename = export_filename(&form.title, chrono::Utc::now().date_naive());
    let path = output_dir.join(filename);
    std::fs::write(&path, &csv).with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %path.display(),
        submission_count = submissions.len(),
        "csv export written"
    );
    println!("Exported {} responses: {}", submissions.len(), path.display());
    Ok(Some(path))
}

#[derive(Debug, Default)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let mut forms: Vec<FeedbackForm> = Vec::new();
    let mut issues: Vec<(String, ValidationIssue)> = Vec::new();

    for path in &args.forms {
        let form = load_form(path).with_context(|| format!("load {}", path.display()))?;
        let report = validate_form(&form);
        let label = if form.title.trim().is_empty() {
            path.display().to_string()
        } else {
            form.title.clone()
        };
        for issue in report.issues {
            issues.push((label.clone(), issue));
        }
        forms.push(form);
    }
    for issue in check_single_active(&forms) {
        issues.push(("(all forms)".to_string(), issue));
    }

    let outcome = CheckOutcome {
        errors: issues
            .iter()
            .filter(|(_, issue)| issue.severity == campus_model::IssueSeverity::Error)
            .count(),
        warnings: issues
            .iter()
            .filter(|(_, issue)| issue.severity == campus_model::IssueSeverity::Warning)
            .count(),
    };

    if issues.is_empty() {
        println!("All {} form(s) valid.", forms.len());
    } else {
        println!("{}", issue_table(&issues));
        println!("{} error(s), {} warning(s)", outcome.errors, outcome.warnings);
    }
    Ok(outcome)
}

fn resolve_kind(arg: Option<CollectionKindArg>, path: &Path) -> Result<CollectionKind> {
    if let Some(kind) = arg {
        return Ok(kind.into());
    }
    match infer_collection_kind(path) {
        Some(kind) => Ok(kind),
        None => bail!(
            "cannot infer collection kind from '{}'; pass --kind",
            path.display()
        ),
    }
}

fn default_order_path(collection: &Path) -> PathBuf {
    let stem = collection
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("collection");
    collection.with_file_name(format!("{stem}-order.json"))
}

/// Answers referencing a question the form does not define are a
/// data-shape anomaly: logged and skipped, never fatal.
fn warn_unknown_questions(form: &FeedbackForm, submissions: &[Submission]) {
    for submission in submissions {
        for answer in &submission.answers {
            if !form
                .questions
                .iter()
                .any(|question| question.id == answer.question_id)
            {
                warn!(
                    question_id = %answer.question_id,
                    respondent = redact_respondent(&submission.respondent_email),
                    "answer references unknown question"
                );
            }
        }
    }
}
