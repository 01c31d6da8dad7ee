//! SRS store and the learner's progress aggregate.
//!
//! `Progress` is the single serializable state object the persistence
//! collaborator loads and saves. Nothing in this crate holds it globally;
//! every operation takes it (or its store) as an explicit parameter and
//! the calling layer serializes all writes.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::types::{Badge, HistoryEntry, Profile, SrsRecord};

/// Scheduling records keyed by item id.
///
/// Records are created here (one per catalog item, box 1, due today) and
/// mutated only by [`crate::scheduler::Leitner::record_answer`]. They are
/// never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SrsStore {
    records: HashMap<String, SrsRecord>,
}

impl SrsStore {
    /// Fresh store with one record per catalog item.
    pub fn initialize(catalog: &Catalog, today: NaiveDate) -> Self {
        let records = catalog
            .items()
            .iter()
            .map(|item| (item.id.clone(), SrsRecord::new(today)))
            .collect();
        Self { records }
    }

    pub fn get(&self, id: &str) -> Option<&SrsRecord> {
        self.records.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut SrsRecord> {
        self.records.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SrsRecord)> {
        self.records.iter().map(|(id, rec)| (id.as_str(), rec))
    }
}

/// Everything the trainer persists for one learner: profile counters, the
/// SRS store, and the daily points history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub profile: Profile,
    pub store: SrsStore,
    pub history: Vec<HistoryEntry>,
}

impl Progress {
    /// Initial progress for a learner the persistence collaborator has
    /// nothing saved for.
    pub fn new(catalog: &Catalog, today: NaiveDate) -> Self {
        Self {
            profile: Profile::new(today),
            store: SrsStore::initialize(catalog, today),
            history: Vec::new(),
        }
    }

    /// Backfill records for catalog items this progress has never seen.
    ///
    /// Lets a saved profile pick up items added to the catalog after the
    /// save was written. Existing records are left untouched.
    pub fn ensure_records(&mut self, catalog: &Catalog, today: NaiveDate) {
        let mut added = 0usize;
        for item in catalog.items() {
            self.store
                .records
                .entry(item.id.clone())
                .or_insert_with(|| {
                    added += 1;
                    SrsRecord::new(today)
                });
        }
        if added > 0 {
            debug!(added, "backfilled records for new catalog items");
        }
    }

    /// Add earned points, merging into today's history entry when there
    /// is one.
    pub fn add_points(&mut self, points: u32, today: NaiveDate) {
        self.profile.points += points;
        match self.history.last_mut() {
            Some(last) if last.date == today => last.points += points,
            _ => self.history.push(HistoryEntry {
                date: today,
                points,
            }),
        }
    }

    /// Keep the daily streak up to date.
    ///
    /// Same-day calls are no-ops; exactly one day since the last activity
    /// extends the streak; any other gap restarts it at 1.
    pub fn touch_streak(&mut self, today: NaiveDate) {
        if self.profile.last_active == today {
            return;
        }
        let gap = (today - self.profile.last_active).num_days();
        self.profile.streak = if gap == 1 { self.profile.streak + 1 } else { 1 };
        self.profile.last_active = today;
    }

    /// Award a badge once; returns false when it was already earned.
    pub fn award_badge(&mut self, id: &str, title: &str) -> bool {
        if self.profile.badges.iter().any(|b| b.id == id) {
            return false;
        }
        self.profile.badges.push(Badge {
            id: id.to_string(),
            title: title.to_string(),
        });
        true
    }
}
