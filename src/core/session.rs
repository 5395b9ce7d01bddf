//! Form session: the host that ties the history store to the persistence
//! and clock ports and exposes every editing operation of the tool.
//!
//! All mutations run synchronously; each one persists the resulting pair
//! sequence before returning. Undo history lives for the lifetime of the
//! session only, it is never persisted.

use crate::core::calculator;
use crate::core::history::History;
use crate::errors::{AppError, AppResult};
use crate::models::pair::single_empty_pair;
use crate::models::{Field, TimePair};
use crate::storage::KvStore;
use crate::utils::clock::Clock;

/// Storage key holding the serialized pair sequence.
pub const PAIRS_KEY: &str = "timePairs";
/// Storage key holding the date of the last "set to now" action.
pub const LAST_DATE_KEY: &str = "lastRecordedDate";

pub struct Session<S: KvStore, C: Clock> {
    history: History<Vec<TimePair>>,
    last_recorded_date: Option<String>,
    store: S,
    clock: C,
}

impl<S: KvStore, C: Clock> Session<S, C> {
    /// Open a session over previously persisted state. Malformed stored
    /// JSON is discarded (the key removed) and replaced with a single empty
    /// pair; this is recovery, not an error.
    pub fn open(store: S, clock: C) -> Self {
        Self::open_with_limit(store, clock, crate::core::history::DEFAULT_LIMIT)
    }

    /// As `open`, with a configurable history depth.
    pub fn open_with_limit(mut store: S, clock: C, history_limit: usize) -> Self {
        let pairs = match store.get(PAIRS_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<TimePair>>(&raw) {
                Ok(pairs) => pairs,
                Err(_) => {
                    store.remove(PAIRS_KEY).ok();
                    single_empty_pair()
                }
            },
            None => single_empty_pair(),
        };
        let last_recorded_date = store.get(LAST_DATE_KEY);

        Self {
            history: History::with_limit(pairs, history_limit),
            last_recorded_date,
            store,
            clock,
        }
    }

    /// The underlying store, e.g. to inspect persisted state in tests.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ---------------------------
    // Queries
    // ---------------------------

    pub fn pairs(&self) -> &[TimePair] {
        self.history.present()
    }

    pub fn total_hours(&self) -> f64 {
        calculator::total_hours(self.pairs())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn last_recorded_date(&self) -> Option<&str> {
        self.last_recorded_date.as_deref()
    }

    // ---------------------------
    // Committed mutations
    // ---------------------------

    /// Append an empty pair row.
    pub fn add_pair(&mut self) -> AppResult<()> {
        let mut pairs = self.pairs().to_vec();
        pairs.push(TimePair::default());
        self.history.set(pairs);
        self.persist_pairs()
    }

    /// Add a pair with pre-filled values (CLI `add START END`). The lone
    /// fully-empty baseline row is filled in place rather than appended
    /// after, so the first `add` produces pair 1, not a phantom empty row
    /// followed by pair 2.
    pub fn add_filled_pair(&mut self, start: &str, end: &str) -> AppResult<()> {
        let mut pairs = self.pairs().to_vec();
        if let [only] = pairs.as_mut_slice()
            && only.is_empty()
        {
            *only = TimePair::new(start, end);
        } else {
            pairs.push(TimePair::new(start, end));
        }
        self.history.set(pairs);
        self.persist_pairs()
    }

    /// Delete the pair at `index`.
    pub fn delete_pair(&mut self, index: usize) -> AppResult<()> {
        self.check_index(index)?;
        let mut pairs = self.pairs().to_vec();
        pairs.remove(index);
        self.history.set(pairs);
        self.persist_pairs()
    }

    /// Set one field to a literal value as a discrete, undoable action.
    pub fn set_field(&mut self, index: usize, field: Field, value: &str) -> AppResult<()> {
        self.check_index(index)?;
        let mut pairs = self.pairs().to_vec();
        pairs[index].set(field, value);
        self.history.set(pairs);
        self.persist_pairs()
    }

    /// Set one field to the current wall-clock time and record today's date
    /// as the last-recorded date. Returns the "HH:MM" value written.
    pub fn set_now(&mut self, index: usize, field: Field) -> AppResult<String> {
        self.check_index(index)?;
        let time = self.clock.now_time();
        let today = self.clock.today();

        let mut pairs = self.pairs().to_vec();
        pairs[index].set(field, time.clone());
        self.history.set(pairs);
        self.persist_pairs()?;
        self.set_last_recorded_date(Some(today))?;
        Ok(time)
    }

    /// Fill the first empty field (start before end, in pair order) with the
    /// current time; when every field is filled, append a new pair starting
    /// now. Returns the position written and the "HH:MM" value.
    pub fn set_now_first_empty(&mut self) -> AppResult<(usize, Field, String)> {
        let time = self.clock.now_time();
        let today = self.clock.today();

        let mut pairs = self.pairs().to_vec();
        let target = pairs.iter().enumerate().find_map(|(i, pair)| {
            if pair.start.is_empty() {
                Some((i, Field::Start))
            } else if pair.end.is_empty() {
                Some((i, Field::End))
            } else {
                None
            }
        });

        let (index, field) = match target {
            Some(found) => found,
            None => {
                pairs.push(TimePair::default());
                (pairs.len() - 1, Field::Start)
            }
        };
        pairs[index].set(field, time.clone());

        self.history.set(pairs);
        self.persist_pairs()?;
        self.set_last_recorded_date(Some(today))?;
        Ok((index, field, time))
    }

    /// Clear the last non-empty field, scanning pairs from the end (end
    /// before start within a pair). A pair left fully empty is removed when
    /// it is not the only one. Returns false when every field is empty.
    pub fn delete_latest(&mut self) -> AppResult<bool> {
        let mut pairs = self.pairs().to_vec();

        for i in (0..pairs.len()).rev() {
            let field = if !pairs[i].end.is_empty() {
                Field::End
            } else if !pairs[i].start.is_empty() {
                Field::Start
            } else {
                continue;
            };

            let other = match field {
                Field::End => &pairs[i].start,
                Field::Start => &pairs[i].end,
            };
            if other.is_empty() && pairs.len() > 1 {
                pairs.remove(i);
            } else {
                pairs[i].set(field, "");
            }

            self.history.set(pairs);
            self.persist_pairs()?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Reset to a single empty pair and clear the last-recorded date, as one
    /// undoable step. Returns false (and records nothing) when there is
    /// nothing to clear.
    pub fn reset_all(&mut self) -> AppResult<bool> {
        let has_value = self.pairs().iter().any(|p| !p.is_empty());
        if !has_value && self.last_recorded_date.is_none() {
            return Ok(false);
        }

        self.history.set(single_empty_pair());
        self.persist_pairs()?;
        self.set_last_recorded_date(None)?;
        Ok(true)
    }

    // ---------------------------
    // Batched (typed) mutations
    // ---------------------------

    /// One keystroke-level update of a field. Opens a coalescing burst on
    /// the first call; the burst becomes a single undo step at
    /// `commit_edit`. The uncommitted value is persisted immediately.
    pub fn typed_edit(&mut self, index: usize, field: Field, value: &str) -> AppResult<()> {
        self.check_index(index)?;
        self.history.begin_change();
        let mut pairs = self.pairs().to_vec();
        pairs[index].set(field, value);
        self.history.set_unrecorded(pairs);
        self.persist_pairs()
    }

    /// Close a typed burst (blur / debounce expiry / next command).
    pub fn commit_edit(&mut self) {
        self.history.commit_change();
    }

    // ---------------------------
    // History navigation
    // ---------------------------

    pub fn undo(&mut self) -> AppResult<bool> {
        if self.history.undo() {
            self.persist_pairs()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn redo(&mut self) -> AppResult<bool> {
        if self.history.redo() {
            self.persist_pairs()?;
            return Ok(true);
        }
        Ok(false)
    }

    // ---------------------------
    // Internals
    // ---------------------------

    fn check_index(&self, index: usize) -> AppResult<()> {
        if index >= self.pairs().len() {
            return Err(AppError::InvalidPair(index));
        }
        Ok(())
    }

    fn persist_pairs(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(self.history.present())
            .map_err(|e| AppError::Storage(e.to_string()))?;
        self.store.set(PAIRS_KEY, &json)
    }

    fn set_last_recorded_date(&mut self, date: Option<String>) -> AppResult<()> {
        match &date {
            Some(d) => self.store.set(LAST_DATE_KEY, d)?,
            None => self.store.remove(LAST_DATE_KEY)?,
        }
        self.last_recorded_date = date;
        Ok(())
    }
}
