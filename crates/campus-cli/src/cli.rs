//! CLI argument definitions for the campus console.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use campus_model::CollectionKind;

use crate::moves::MoveOp;

#[derive(Parser)]
#[command(
    name = "campus-console",
    version,
    about = "Campus Content Console - Manage college content collections and feedback",
    long_about = "Manage the ordered collections and feedback forms of a campus content\n\
                  backend from exported JSON files.\n\n\
                  Reorders collections via a replace-order payload, aggregates feedback\n\
                  responses by respondent, and exports them as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow respondent emails in log output.
    ///
    /// Respondent identities are redacted from logs by default; tables and
    /// exports always carry them.
    #[arg(long = "log-respondents", global = true)]
    pub log_respondents: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List a collection in serve order.
    List(ListArgs),

    /// Reorder a collection and write the replace-order payload.
    Reorder(ReorderArgs),

    /// Show feedback responses grouped by respondent, latest first.
    Responses(ResponsesArgs),

    /// Export feedback responses as CSV.
    Export(ExportArgs),

    /// Validate feedback form definitions.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Path to the collection JSON file.
    #[arg(value_name = "COLLECTION_FILE")]
    pub collection: PathBuf,

    /// Collection kind (default: inferred from the filename).
    #[arg(long = "kind", value_enum)]
    pub kind: Option<CollectionKindArg>,
}

#[derive(Parser)]
pub struct ReorderArgs {
    /// Path to the collection JSON file.
    #[arg(value_name = "COLLECTION_FILE")]
    pub collection: PathBuf,

    /// Collection kind (default: inferred from the filename).
    #[arg(long = "kind", value_enum)]
    pub kind: Option<CollectionKindArg>,

    /// A move to apply, in command-line order. Repeatable.
    ///
    /// Forms: FROM:TO (positions), start:ID, end:ID, left:ID, right:ID.
    #[arg(long = "move", value_name = "OP")]
    pub moves: Vec<MoveOp>,

    /// Output path for the replace-order payload
    /// (default: <COLLECTION_FILE stem>-order.json alongside the input).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Show the resulting order without writing the payload.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ResponsesArgs {
    /// Path to the feedback form JSON file.
    #[arg(value_name = "FORM_FILE")]
    pub form: PathBuf,

    /// Path to the submissions JSON file.
    #[arg(value_name = "SUBMISSIONS_FILE")]
    pub submissions: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the feedback form JSON file.
    #[arg(value_name = "FORM_FILE")]
    pub form: PathBuf,

    /// Path to the submissions JSON file.
    #[arg(value_name = "SUBMISSIONS_FILE")]
    pub submissions: PathBuf,

    /// Directory the CSV is written into (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Feedback form JSON files to validate.
    #[arg(value_name = "FORM_FILE", required = true)]
    pub forms: Vec<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CollectionKindArg {
    Colleges,
    Highlights,
    Carousel,
}

impl From<CollectionKindArg> for CollectionKind {
    fn from(arg: CollectionKindArg) -> Self {
        match arg {
            CollectionKindArg::Colleges => CollectionKind::Colleges,
            CollectionKindArg::Highlights => CollectionKind::Highlights,
            CollectionKindArg::Carousel => CollectionKind::CarouselImages,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
