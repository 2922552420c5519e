//! Loading and saving of content files.
//!
//! JSON files stand in for the REST backend. Both bare payloads and the
//! backend's `{"data": ...}` response envelope are accepted, so exported
//! API responses load without reshaping.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use campus_model::{Collection, CollectionKind, FeedbackForm, OrderableItem, Submission};
use campus_order::OrderSnapshot;

use crate::error::{IngestError, Result};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// The replace-order payload written on save.
#[derive(Debug, serde::Serialize, Deserialize)]
pub struct OrderPayload {
    pub items: Vec<OrderSnapshot>,
}

fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_payload<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T> {
    match serde_json::from_str::<T>(text) {
        Ok(value) => Ok(value),
        Err(direct_error) => serde_json::from_str::<Envelope<T>>(text)
            .map(|envelope| envelope.data)
            .map_err(|_| IngestError::Parse {
                path: path.to_path_buf(),
                source: direct_error,
            }),
    }
}

/// Load an orderable collection from a JSON file.
///
/// Items missing a persisted index are tolerated (the reorder engine
/// assigns positional defaults) but logged, since they indicate records
/// created before ordering was introduced.
pub fn load_collection(path: &Path, kind: CollectionKind) -> Result<Collection> {
    let text = read_text(path)?;
    let items: Vec<OrderableItem> = parse_payload(path, &text)?;
    let unindexed = items.iter().filter(|item| item.index.is_none()).count();
    if unindexed > 0 {
        warn!(
            collection = %kind,
            path = %path.display(),
            unindexed,
            "items without persisted index; positional defaults will apply"
        );
    }
    Ok(Collection::new(kind, items))
}

/// Load a feedback form definition.
pub fn load_form(path: &Path) -> Result<FeedbackForm> {
    let text = read_text(path)?;
    parse_payload(path, &text)
}

/// Load a flat list of feedback submissions.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>> {
    let text = read_text(path)?;
    parse_payload(path, &text)
}

/// Write the replace-order payload for a collection.
///
/// The whole order is sent, not an incremental patch, so the write is
/// idempotent and safe to retry after a failure.
pub fn save_order(path: &Path, snapshots: &[OrderSnapshot]) -> Result<()> {
    let payload = OrderPayload {
        items: snapshots.to_vec(),
    };
    let text = serde_json::to_string_pretty(&payload).map_err(|source| IngestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Read back a previously saved replace-order payload.
pub fn load_order(path: &Path) -> Result<Vec<OrderSnapshot>> {
    let text = read_text(path)?;
    let payload: OrderPayload = parse_payload(path, &text)?;
    Ok(payload.items)
}
