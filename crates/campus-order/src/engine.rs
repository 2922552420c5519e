use campus_model::OrderableItem;
use tracing::debug;

use crate::snapshot::OrderSnapshot;

/// The in-memory, not-yet-persisted sequence of items being reordered.
///
/// All move operations are total over well-formed input: out-of-range
/// positions are clamped or ignored rather than raised as errors, since
/// a stale drag target is a local UI concern with no invalid external
/// state behind it.
#[derive(Debug, Clone)]
pub struct WorkingOrder {
    items: Vec<OrderableItem>,
    baseline: Vec<OrderableItem>,
}

impl WorkingOrder {
    /// Build a working order from a server-provided collection.
    ///
    /// Items carrying a persisted `index` sort by it. Items lacking one
    /// are first assigned a provisional index from their creation-time
    /// position (input order when no creation time is known; both sorts
    /// are stable), mirroring how pre-ordering records are slotted in.
    /// Every item then gets a dense positional rank, so re-initializing
    /// from the result is the identity.
    pub fn initialize(mut items: Vec<OrderableItem>) -> Self {
        items.sort_by_key(|item| item.created_at);
        for (position, item) in items.iter_mut().enumerate() {
            if item.index.is_none() {
                item.index = Some(position as u32);
            }
        }
        items.sort_by_key(|item| item.index);
        reassign_ranks(&mut items);
        let baseline = items.clone();
        Self { items, baseline }
    }

    /// Current working copy, in serve order.
    pub fn items(&self) -> &[OrderableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of an item in the working copy.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Remove the item at `from` and reinsert it at `to`.
    ///
    /// `to` clamps to `[0, len-1]`; an out-of-range `from`, or
    /// `from == to` after clamping, leaves the order unchanged.
    pub fn move_by_position(&mut self, from: usize, to: usize) {
        if self.items.is_empty() || from >= self.items.len() {
            return;
        }
        let to = to.min(self.items.len() - 1);
        if from == to {
            return;
        }
        let moved = self.items.remove(from);
        debug!(item_id = %moved.id, from, to, "move item");
        self.items.insert(to, moved);
        reassign_ranks(&mut self.items);
    }

    /// Move an item to the front of the order. Unknown ids are ignored.
    pub fn move_to_start(&mut self, id: &str) {
        if let Some(position) = self.position_of(id) {
            self.move_by_position(position, 0);
        }
    }

    /// Move an item to the back of the order. Unknown ids are ignored.
    pub fn move_to_end(&mut self, id: &str) {
        if let Some(position) = self.position_of(id) {
            self.move_by_position(position, self.items.len().saturating_sub(1));
        }
    }

    /// Move an item one step toward the front; no-op at the boundary.
    pub fn move_left(&mut self, id: &str) {
        if let Some(position) = self.position_of(id) {
            if position > 0 {
                self.move_by_position(position, position - 1);
            }
        }
    }

    /// Move an item one step toward the back; no-op at the boundary.
    pub fn move_right(&mut self, id: &str) {
        if let Some(position) = self.position_of(id) {
            self.move_by_position(position, position + 1);
        }
    }

    /// The full id-to-index mapping for persistence.
    pub fn diff(&self) -> Vec<OrderSnapshot> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| OrderSnapshot {
                id: item.id.clone(),
                index: position as u32,
            })
            .collect()
    }

    /// True when the working copy differs from the last-persisted order.
    pub fn is_dirty(&self) -> bool {
        let baseline_ids: Vec<&str> = self.baseline.iter().map(|item| item.id.as_str()).collect();
        let working_ids: Vec<&str> = self.items.iter().map(|item| item.id.as_str()).collect();
        baseline_ids != working_ids
    }

    /// Drop unsaved moves and revert to the last-persisted order.
    pub fn discard(&mut self) {
        self.items = self.baseline.clone();
    }

    /// Promote the working copy to the persisted baseline.
    ///
    /// Called after a successful save. On save failure the working copy
    /// is deliberately retained so the caller can retry the whole
    /// replace-order command.
    pub fn mark_saved(&mut self) {
        self.baseline = self.items.clone();
    }
}

fn reassign_ranks(items: &mut [OrderableItem]) {
    for (position, item) in items.iter_mut().enumerate() {
        item.index = Some(position as u32);
    }
}
