//! Linear undo/redo history over canvas snapshots.

use super::frame::Frame;
use super::shape::Shape;

/// Branch-discarding undo/redo log of full canvas snapshots.
///
/// The history owns an ordered sequence of committed [`Frame`]s plus a
/// cursor selecting the snapshot currently shown; `None` selects the empty
/// canvas that precedes the first commit. Undo and redo only move the
/// cursor. Committing while the cursor sits below the tail discards the
/// redo tail first, flattening the would-be branch into a stack.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Frame>,
    /// Active snapshot index; `None` is the empty canvas before any commit.
    cursor: Option<usize>,
}

impl History {
    /// Creates an empty history showing the empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a deep copy of `frame` as the new active snapshot.
    ///
    /// Any snapshots after the cursor are discarded first. A frame that is
    /// structurally identical to the active snapshot is skipped so that
    /// no-op gestures do not pile up duplicate entries.
    ///
    /// Returns `true` if a snapshot was pushed.
    pub fn commit(&mut self, frame: &Frame) -> bool {
        if self.active_snapshot() == frame.shapes.as_slice() {
            return false;
        }

        let keep = self.cursor.map_or(0, |i| i + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(frame.clone());
        self.cursor = Some(self.snapshots.len() - 1);
        true
    }

    /// Steps the cursor back one snapshot, reaching the empty canvas from
    /// the first one. Returns `false` when already at the empty canvas.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                true
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                true
            }
            None => false,
        }
    }

    /// Steps the cursor forward one snapshot. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next < self.snapshots.len() {
            self.cursor = Some(next);
            true
        } else {
            false
        }
    }

    /// Shapes of the active snapshot; empty at the empty canvas.
    pub fn active_snapshot(&self) -> &[Shape] {
        match self.cursor {
            Some(i) => &self.snapshots[i].shapes,
            None => &[],
        }
    }

    /// True unless the cursor already shows the empty canvas.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// True when snapshots exist after the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |i| i + 1) < self.snapshots.len()
    }

    /// Number of committed snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
