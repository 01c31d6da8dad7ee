//! Core library for a French-vocabulary trainer.
//!
//! Provides:
//! - Catalog expansion of template phrases into concrete vocabulary items
//! - Leitner-box spaced repetition scheduling (due selection, promotion/
//!   demotion, distractor sampling)
//! - Similarity scoring for dictation and pronunciation answers
//!   (Levenshtein distance over normalized text)
//! - The serializable `Progress` aggregate the persistence layer owns
//!
//! Rendering, audio I/O and storage live in the embedding application;
//! this crate is pure, synchronous computation over in-memory data.

pub mod catalog;
pub mod error;
pub mod scheduler;
pub mod scoring;
pub mod store;
pub mod types;

pub use catalog::{builtin_seeds, Catalog, Seed, SubstitutionTables};
pub use error::{CatalogError, Result};
pub use scheduler::{sample_distractors, DueItem, Leitner};
pub use scoring::{levenshtein, normalize, similarity_score};
pub use store::{Progress, SrsStore};
pub use types::{
    Badge, HistoryEntry, ItemKind, Profile, SessionSettings, SrsRecord, VocabItem,
};
