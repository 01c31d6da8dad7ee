//! Core types for the vocabulary trainer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of vocabulary item.
///
/// The derived ordering (word < phrase < verb) is the batch-mixing order
/// the scheduler sorts due items by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Word,
    Phrase,
    Verb,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Phrase => "phrase",
            Self::Verb => "verb",
        }
    }
}

/// A concrete vocabulary item produced by catalog expansion.
///
/// Immutable after the catalog is built; identified by `id` across the
/// whole system (the SRS store keys its records on it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub id: String,
    /// French surface form.
    pub target_text: String,
    /// English gloss.
    pub gloss_text: String,
    /// Phonetic hint, when the seed data carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    pub kind: ItemKind,
}

/// Per-item Leitner scheduling record.
///
/// Invariants: `1 <= box_level <= max_box` and `next_due >= last_reviewed`.
/// Mutated only through [`crate::scheduler::Leitner::record_answer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrsRecord {
    pub box_level: u8,
    pub last_reviewed: NaiveDate,
    pub next_due: NaiveDate,
    pub correct_count: u32,
    pub wrong_count: u32,
}

impl SrsRecord {
    /// Fresh record for an unseen item: box 1, due immediately.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            box_level: 1,
            last_reviewed: today,
            next_due: today,
            correct_count: 0,
            wrong_count: 0,
        }
    }
}

/// A badge earned by the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub title: String,
}

/// One day's worth of earned points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub points: u32,
}

/// Learner profile counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub level: u32,
    pub points: u32,
    pub streak: u32,
    /// Last day the learner answered anything; drives streak upkeep.
    pub last_active: NaiveDate,
    pub badges: Vec<Badge>,
}

impl Profile {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: "Traveler".to_string(),
            level: 1,
            points: 0,
            streak: 0,
            last_active: today,
            badges: Vec::new(),
        }
    }
}

/// Session-level tunables used by the embedding application when it asks
/// the scheduler for batches and turns similarity scores into pass/fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Items per flashcard/quiz batch.
    pub review_batch: usize,
    /// Items per timed quick-review run.
    pub quick_review_batch: usize,
    /// Items drawn for the weekly exam.
    pub exam_pool: usize,
    /// Wrong options per multiple-choice question.
    pub distractor_count: usize,
    /// Minimum similarity score counted as a correct dictation.
    pub dictation_pass_score: u8,
    /// Minimum similarity score counted as a correct pronunciation.
    pub pronunciation_pass_score: u8,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            review_batch: 12,
            quick_review_batch: 30,
            exam_pool: 20,
            distractor_count: 3,
            dictation_pass_score: 70,
            pronunciation_pass_score: 65,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ordering_mixes_words_before_phrases_before_verbs() {
        assert!(ItemKind::Word < ItemKind::Phrase);
        assert!(ItemKind::Phrase < ItemKind::Verb);
    }

    #[test]
    fn fresh_record_is_due_immediately() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let rec = SrsRecord::new(today);
        assert_eq!(rec.box_level, 1);
        assert_eq!(rec.next_due, today);
        assert_eq!(rec.last_reviewed, today);
    }
}
