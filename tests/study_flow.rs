//! End-to-end study session flow over the public API: load (or create)
//! progress, pull a due batch, answer, score a dictation attempt, save.

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, SeedableRng};
use vocab_core::{
    sample_distractors, similarity_score, Catalog, Leitner, Progress, SessionSettings,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn first_session_drills_and_reschedules() {
    let catalog = Catalog::builtin();
    let leitner = Leitner::default();
    let settings = SessionSettings::default();
    let today = date(2024, 3, 1);

    // persistence found nothing saved
    let mut progress = Progress::new(&catalog, today);

    let batch = leitner.due_items(&progress.store, &catalog, today, settings.review_batch);
    assert_eq!(batch.len(), settings.review_batch);

    // multiple-choice round: build options, answer, record
    let mut rng = StdRng::seed_from_u64(1);
    for due in &batch {
        let distractors =
            sample_distractors(catalog.items(), &due.item, settings.distractor_count, &mut rng);
        assert_eq!(distractors.len(), settings.distractor_count);

        leitner.record_answer(&mut progress.store, &due.item.id, true, today);
        progress.add_points(2, today);
    }
    progress.touch_streak(today);

    // everything answered moved to box 2 and left today's pool
    for due in &batch {
        let rec = progress.store.get(&due.item.id).unwrap();
        assert_eq!(rec.box_level, 2);
        assert_eq!(rec.next_due, today + Duration::days(1));
    }
    let remaining = leitner.due_items(&progress.store, &catalog, today, usize::MAX);
    assert_eq!(remaining.len(), catalog.len() - settings.review_batch);

    assert_eq!(progress.profile.points, 2 * settings.review_batch as u32);
    assert_eq!(progress.history.len(), 1);
}

#[test]
fn dictation_scoring_feeds_the_scheduler() {
    let catalog = Catalog::builtin();
    let leitner = Leitner::default();
    let settings = SessionSettings::default();
    let today = date(2024, 3, 1);
    let mut progress = Progress::new(&catalog, today);

    let target = catalog.get("w3").unwrap(); // "s’il vous plaît"

    // a near-miss transcription still clears the dictation bar
    let score = similarity_score(&target.target_text, "sil vous plait");
    assert!(score >= settings.dictation_pass_score);
    leitner.record_answer(
        &mut progress.store,
        &target.id,
        score >= settings.dictation_pass_score,
        today,
    );
    assert_eq!(progress.store.get("w3").unwrap().box_level, 2);

    // a garbled one does not
    let score = similarity_score(&target.target_text, "bonsoir");
    assert!(score < settings.dictation_pass_score);
    leitner.record_answer(
        &mut progress.store,
        &target.id,
        score >= settings.dictation_pass_score,
        today,
    );
    let rec = progress.store.get("w3").unwrap();
    assert_eq!(rec.box_level, 1);
    assert_eq!(rec.correct_count, 1);
    assert_eq!(rec.wrong_count, 1);
}

#[test]
fn saved_progress_survives_a_catalog_addition() {
    let today = date(2024, 3, 1);
    let catalog = Catalog::builtin();
    let leitner = Leitner::default();
    let mut progress = Progress::new(&catalog, today);
    leitner.record_answer(&mut progress.store, "w1", true, today);

    // save and reload through the persistence collaborator's format
    let saved = serde_json::to_string(&progress).unwrap();
    let mut reloaded: Progress = serde_json::from_str(&saved).unwrap();
    assert_eq!(reloaded, progress);

    // the catalog grew since the save was written
    let mut seeds = vocab_core::builtin_seeds();
    seeds.push(vocab_core::Seed::new(
        "w21",
        "bientôt",
        "soon",
        vocab_core::ItemKind::Word,
    ));
    let grown = Catalog::expand(seeds, &vocab_core::SubstitutionTables::default()).unwrap();

    let later = date(2024, 3, 5);
    reloaded.ensure_records(&grown, later);
    assert_eq!(reloaded.store.len(), grown.len());
    assert_eq!(reloaded.store.get("w1").unwrap().box_level, 2);

    // the new item is immediately due alongside the old ones
    let due = leitner.due_items(&reloaded.store, &grown, later, usize::MAX);
    assert!(due.iter().any(|d| d.item.id == "w21"));
}
