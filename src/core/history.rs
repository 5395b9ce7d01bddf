//! Linear undo/redo container.
//!
//! Wraps a value of any clonable, comparable type and records snapshots of
//! it on committed mutations. Two mutation modes exist:
//!
//! * `set`: immediate commit, one history entry per call. For discrete
//!   actions (add pair, delete pair, set-to-now, reset).
//! * `begin_change` / `set_unrecorded` / `commit_change`: deferred commit.
//!   The snapshot taken at `begin_change` covers the whole burst of
//!   unrecorded updates, so continuous input (typing, repeated increments)
//!   coalesces into a single undo step. The caller decides where a burst
//!   ends (blur, debounce timeout, next command); the store itself is fully
//!   synchronous.
//!
//! The past stack is capped: when full, the oldest snapshot is evicted.

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct History<T: Clone + PartialEq> {
    present: T,
    past: Vec<T>,
    future: Vec<T>,
    pending: Option<T>,
    limit: usize,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_LIMIT)
    }

    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            present: initial,
            past: Vec::new(),
            future: Vec::new(),
            pending: None,
            limit,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    fn push_past(&mut self, snapshot: T) {
        self.past.push(snapshot);
        if self.past.len() > self.limit {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Immediate commit: records one history entry and replaces the value.
    /// An outstanding begin-snapshot, if any, is what gets recorded: it is
    /// the value from before the in-flight edit started.
    pub fn set(&mut self, new_value: T) {
        let snapshot = self.pending.take().unwrap_or_else(|| self.present.clone());
        self.push_past(snapshot);
        self.present = new_value;
    }

    /// Replace the value without touching history. Used while a field is
    /// actively being edited so each keystroke does not become an undo step.
    pub fn set_unrecorded(&mut self, new_value: T) {
        self.present = new_value;
    }

    /// Capture the current value as the snapshot for an upcoming burst of
    /// unrecorded updates. Idempotent while a snapshot is already pending:
    /// the value from before the first update of the burst is what counts.
    pub fn begin_change(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.present.clone());
        }
    }

    /// Close a burst. The pending snapshot becomes a history entry only if
    /// the value actually changed; either way the snapshot is cleared.
    pub fn commit_change(&mut self) {
        if let Some(snapshot) = self.pending.take()
            && snapshot != self.present
        {
            self.push_past(snapshot);
        }
    }

    /// Step back one entry. An in-flight edit is committed first so it is
    /// not silently lost. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.commit_change();

        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.insert(0, current);
                true
            }
            None => false,
        }
    }

    /// Step forward one entry. Returns false when there is nothing to redo.
    /// No cap enforcement here: this path only mirrors a prior undo.
    pub fn redo(&mut self) -> bool {
        if self.future.is_empty() {
            return false;
        }

        let next = self.future.remove(0);
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Establish a fresh baseline that cannot be undone past.
    pub fn reset(&mut self, new_value: T) {
        self.past.clear();
        self.future.clear();
        self.pending = None;
        self.present = new_value;
    }
}
