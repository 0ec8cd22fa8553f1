use crate::zone::ZoneMap;

/// Maximum number of snapshots kept on either stack.
pub const MAX_UNDO_STEPS: usize = 20;

/// Bounded undo/redo history over full [`ZoneMap`] snapshots.
///
/// Each entry is a complete copy of the map at the moment before an edit,
/// not a diff. When a stack is at capacity the oldest snapshot is evicted,
/// so very long sessions lose their earliest undo steps rather than growing
/// without bound.
#[derive(Debug)]
pub struct SnapshotHistory {
    undo_stack: Vec<ZoneMap>,
    redo_stack: Vec<ZoneMap>,
    max_depth: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::with_depth(MAX_UNDO_STEPS)
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record a snapshot taken just before a new edit. Clears the redo stack,
    /// since the edit starts a new branch of history.
    pub fn record_edit(&mut self, before: ZoneMap) {
        Self::push_capped(&mut self.undo_stack, before, self.max_depth);
        self.redo_stack.clear();
    }

    /// Step back: trade the current map for the most recent undo snapshot.
    /// Returns `None` if there is nothing to undo.
    pub fn undo(&mut self, current: &ZoneMap) -> Option<ZoneMap> {
        let restored = self.undo_stack.pop()?;
        Self::push_capped(&mut self.redo_stack, current.clone(), self.max_depth);
        Some(restored)
    }

    /// Step forward again after an undo. Returns `None` if there is nothing
    /// to redo.
    pub fn redo(&mut self, current: &ZoneMap) -> Option<ZoneMap> {
        let restored = self.redo_stack.pop()?;
        Self::push_capped(&mut self.undo_stack, current.clone(), self.max_depth);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_capped(stack: &mut Vec<ZoneMap>, snapshot: ZoneMap, max_depth: usize) {
        stack.push(snapshot);
        if stack.len() > max_depth {
            stack.remove(0);
        }
    }
}
