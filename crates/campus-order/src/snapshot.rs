use serde::{Deserialize, Serialize};

/// One entry of the replace-order persistence payload.
///
/// On save the whole collection's snapshots are sent back, not a minimal
/// patch, so a retried save is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: String,
    pub index: u32,
}
