//! Leitner-box spaced repetition scheduler.
//!
//! Items live in boxes 1..=max_box. A correct answer promotes an item one
//! box (capped), a wrong answer demotes it one box (floored at 1), and the
//! next due date comes from the destination box's interval. Box 1 has a
//! zero-day interval: its items stay in the same-day review pool until the
//! learner gets them right.

use chrono::{Duration, NaiveDate};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::store::SrsStore;
use crate::types::{SrsRecord, VocabItem};

/// A due vocabulary item paired with a snapshot of its scheduling record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueItem {
    pub item: VocabItem,
    pub record: SrsRecord,
}

/// Leitner scheduler configuration.
///
/// `intervals[box - 1]` is the number of calendar days until an item in
/// that box comes due again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leitner {
    pub max_box: u8,
    pub intervals: Vec<i64>,
}

impl Default for Leitner {
    fn default() -> Self {
        Self {
            max_box: 5,
            intervals: vec![0, 1, 2, 4, 7],
        }
    }
}

impl Leitner {
    /// Days until an item in `box_level` is due again.
    fn interval_for(&self, box_level: u8) -> i64 {
        self.intervals
            .get(box_level as usize - 1)
            .copied()
            .unwrap_or_else(|| self.intervals.last().copied().unwrap_or(0))
    }

    /// Every item due on or before `today`, sorted by kind to mix words,
    /// phrases and verbs in a batch, truncated to `limit`.
    ///
    /// Ties within a kind keep catalog order, so the result is
    /// deterministic and two calls without an intervening
    /// [`record_answer`](Self::record_answer) return the same sequence.
    /// Returns fewer than `limit` items (possibly none) when fewer are
    /// due; never pads with items that are not due.
    pub fn due_items(
        &self,
        store: &SrsStore,
        catalog: &Catalog,
        today: NaiveDate,
        limit: usize,
    ) -> Vec<DueItem> {
        let mut due: Vec<DueItem> = catalog
            .items()
            .iter()
            .filter_map(|item| {
                store
                    .get(&item.id)
                    .filter(|rec| rec.next_due <= today)
                    .map(|rec| DueItem {
                        item: item.clone(),
                        record: rec.clone(),
                    })
            })
            .collect();

        due.sort_by_key(|d| d.item.kind);
        debug!(due = due.len(), limit, "selected due items");
        due.truncate(limit);
        due
    }

    /// Record an answer for `id`: move the box, bump the counter, and
    /// reschedule from the destination box's interval.
    ///
    /// Returns the updated record, or `None` when the id has no record —
    /// a benign case (the item may have left the catalog) that mutates
    /// nothing.
    pub fn record_answer(
        &self,
        store: &mut SrsStore,
        id: &str,
        correct: bool,
        today: NaiveDate,
    ) -> Option<SrsRecord> {
        let Some(rec) = store.get_mut(id) else {
            debug!(id, "answer for unknown item ignored");
            return None;
        };

        if correct {
            rec.box_level = (rec.box_level + 1).min(self.max_box);
            rec.correct_count += 1;
        } else {
            rec.box_level = rec.box_level.saturating_sub(1).max(1);
            rec.wrong_count += 1;
        }

        rec.last_reviewed = today;
        rec.next_due = today + Duration::days(self.interval_for(rec.box_level));

        Some(rec.clone())
    }
}

/// Draw up to `k` distractors from `pool`, excluding the correct item,
/// without replacement.
///
/// Uses a Fisher–Yates shuffle for an unbiased draw. Returns fewer than
/// `k` items when the pool is short.
pub fn sample_distractors<R: Rng + ?Sized>(
    pool: &[VocabItem],
    correct: &VocabItem,
    k: usize,
    rng: &mut R,
) -> Vec<VocabItem> {
    let mut eligible: Vec<&VocabItem> = pool.iter().filter(|x| x.id != correct.id).collect();
    eligible.shuffle(rng);
    eligible.into_iter().take(k).cloned().collect()
}
