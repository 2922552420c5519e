//! Feedback response aggregation and export.
//!
//! Turns a flat submission list plus a form's question list into a
//! grouped, latest-first view for display and a canonical CSV export.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod summary;

pub use aggregate::{RespondentGroup, group_by_respondent, sort_latest_first};
pub use error::{ReportError, Result};
pub use export::{export_filename, format_timestamp, to_csv};
pub use summary::ResponseSummary;
