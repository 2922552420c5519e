//! Content ingestion for the campus console.
//!
//! JSON files play the role of the REST backend: collections, feedback
//! forms, and submission lists are loaded from disk, and the
//! replace-order payload is written back the same way.

pub mod content;
pub mod discovery;
pub mod error;

pub use content::{
    OrderPayload, load_collection, load_form, load_order, load_submissions, save_order,
};
pub use discovery::{
    ContentClass, ContentFile, discover_content, infer_collection_kind, list_json_files,
};
pub use error::{IngestError, Result};
