//! Drill session scheduling
//!
//! One run goes through: due cards are collected, shuffled and cut to the
//! batch limit; each is checked once and its record updated; then the cards
//! that were missed are drilled again until a pass has no misses. Only the
//! first pass is scored.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use super::algorithm::{apply_verdict, is_due};
use super::drills::Drill;
use super::models::{DrillType, SessionStore};
use super::prompt::Prompter;
use super::storage::Result;
use crate::cards::CardStore;

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Cards due before the batch limit was applied
    pub due: usize,
    pub drilled: usize,
    pub passed: usize,
    /// Cards missed on the scored pass
    pub failed: usize,
    pub retry_passes: usize,
}

pub struct DrillScheduler<'a> {
    cards: &'a CardStore,
    today: NaiveDate,
    limit: Option<usize>,
}

impl<'a> DrillScheduler<'a> {
    pub fn new(cards: &'a CardStore, today: NaiveDate) -> Self {
        Self { cards, today, limit: None }
    }

    /// Cap the number of cards drilled per run
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Keys of the cards due for `drill_type`, in store order. Records for
    /// cards missing from the card store are never due.
    pub fn due_cards(&self, store: &SessionStore, drill_type: DrillType) -> Vec<String> {
        store
            .iter()
            .filter(|(key, _)| self.cards.contains(key.as_str()))
            .filter(|(_, record)| is_due(record.get(drill_type), self.today))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Run one drill session over `store`
    pub fn run<R: Rng + ?Sized>(
        &self,
        store: &mut SessionStore,
        drill: &dyn Drill,
        prompter: &mut dyn Prompter,
        rng: &mut R,
    ) -> Result<SessionSummary> {
        let drill_type = drill.drill_type();
        let mut batch = self.due_cards(store, drill_type);
        let mut summary = SessionSummary { due: batch.len(), ..Default::default() };

        if batch.is_empty() {
            prompter.render_line(&format!("No cards due for {}", drill_type.label()))?;
            return Ok(summary);
        }

        batch.shuffle(rng);
        if let Some(limit) = self.limit {
            batch.truncate(limit);
        }
        log::info!(
            "Drilling {} of {} due cards ({})",
            batch.len(),
            summary.due,
            drill_type.label()
        );
        prompter.render_line(&format!(
            "{}: {}/{} due cards",
            drill_type.label(),
            batch.len(),
            summary.due
        ))?;

        let mut failures = Vec::new();
        for (idx, key) in batch.iter().enumerate() {
            let Some(card) = self.cards.get(key) else {
                continue;
            };
            prompter.render_line(&format!("[{}/{}]", idx + 1, batch.len()))?;
            let passed = drill.check(card, prompter)?;
            if let Some(record) = store.get_mut(key) {
                apply_verdict(record.get_mut(drill_type), passed, self.today);
            }
            summary.drilled += 1;
            if passed {
                summary.passed += 1;
            } else {
                failures.push(key.clone());
            }
        }
        summary.failed = failures.len();

        while !failures.is_empty() {
            summary.retry_passes += 1;
            failures.shuffle(rng);
            prompter.render_line(&format!("Retrying {} missed cards", failures.len()))?;
            log::debug!("Retry pass {} over {} cards", summary.retry_passes, failures.len());

            let mut missed = Vec::new();
            for key in failures {
                let Some(card) = self.cards.get(&key) else {
                    continue;
                };
                if !drill.check(card, prompter)? {
                    missed.push(key);
                }
            }
            failures = missed;
        }

        prompter.render_line(&format!(
            "Done: {}/{} correct on first try",
            summary.passed, summary.drilled
        ))?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Phrase};
    use crate::flashcards::drills::{KanjiToMeaning, MeaningToKanji};
    use crate::flashcards::models::CardRecord;
    use crate::flashcards::prompt::testing::{Answer, ScriptedPrompter};
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn card(key: &str) -> Card {
        Card {
            key: key.to_string(),
            kanji: format!("kanji-{}", key),
            meaning: format!("meaning-{}", key),
            strokes: 3,
            reading: "カ".to_string(),
            legacy_rank: key.to_string(),
            phrase: Phrase {
                text: String::new(),
                reading: String::new(),
                meaning: String::new(),
            },
        }
    }

    fn setup(count: usize) -> (CardStore, SessionStore) {
        let cards = CardStore::new((1..=count).map(|i| card(&i.to_string())).collect());
        let mut store = SessionStore::new();
        store.reconcile(cards.keys(), today() - Duration::days(3));
        (cards, store)
    }

    #[test]
    fn test_due_cards_skip_removed_and_waiting() {
        let (cards, mut store) = setup(3);
        let mut waiting = CardRecord::new(today() - Duration::days(1));
        waiting.get_mut(DrillType::MeaningToKanji).streak = 2;
        store.insert("2".to_string(), waiting);
        store.insert("gone".to_string(), CardRecord::new(today()));

        let scheduler = DrillScheduler::new(&cards, today());
        assert_eq!(
            scheduler.due_cards(&store, DrillType::MeaningToKanji),
            vec!["1".to_string(), "3".to_string()]
        );
        assert_eq!(scheduler.due_cards(&store, DrillType::KanjiToMeaning).len(), 3);
    }

    #[test]
    fn test_nothing_due() {
        let (cards, mut store) = setup(2);
        for key in ["1", "2"] {
            store.get_mut(key).unwrap().get_mut(DrillType::MeaningToKanji).streak = 10;
        }
        let before = store.clone();
        let mut prompter = ScriptedPrompter::default();
        let summary = DrillScheduler::new(&cards, today())
            .run(&mut store, &MeaningToKanji, &mut prompter, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(summary, SessionSummary::default());
        assert_eq!(store, before);
        assert!(prompter.lines[0].starts_with("No cards due"));
    }

    #[test]
    fn test_batch_limit_shows_full_due_count() {
        let (cards, mut store) = setup(5);
        let mut prompter = ScriptedPrompter::new([Answer::Yes, Answer::Yes, Answer::Yes]);
        let summary = DrillScheduler::new(&cards, today())
            .with_limit(Some(3))
            .run(&mut store, &MeaningToKanji, &mut prompter, &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(summary.due, 5);
        assert_eq!(summary.drilled, 3);
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.retry_passes, 0);
        assert!(prompter.lines[0].contains("3/5"));
        assert_eq!(prompter.remaining(), 0);

        let reviewed: Vec<_> = store
            .iter()
            .filter(|(_, r)| r.get(DrillType::MeaningToKanji).last_reviewed == today())
            .collect();
        assert_eq!(reviewed.len(), 3);
        for (_, record) in reviewed {
            assert_eq!(record.get(DrillType::MeaningToKanji).streak, 1);
        }
    }

    #[test]
    fn test_failures_repeat_until_cleared_without_rescoring() {
        let (cards, mut store) = setup(2);
        for key in ["1", "2"] {
            let record = store.get_mut(key).unwrap().get_mut(DrillType::MeaningToKanji);
            record.streak = 3;
        }

        // First pass: one right, one wrong. Retries: wrong, wrong, right.
        let answers = [Answer::Yes, Answer::No, Answer::No, Answer::No, Answer::Yes];
        let mut prompter = ScriptedPrompter::new(answers);
        let summary = DrillScheduler::new(&cards, today())
            .run(&mut store, &MeaningToKanji, &mut prompter, &mut StdRng::seed_from_u64(3))
            .unwrap();

        assert_eq!(summary.drilled, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.retry_passes, 3);
        assert_eq!(prompter.remaining(), 0);

        let mut streaks: Vec<u32> = store
            .iter()
            .map(|(_, r)| r.get(DrillType::MeaningToKanji).streak)
            .collect();
        streaks.sort();
        // The missed card stays at 0 even though a retry got it right
        assert_eq!(streaks, vec![0, 4]);
        for (_, record) in store.iter() {
            assert_eq!(record.get(DrillType::MeaningToKanji).last_reviewed, today());
        }
    }

    #[test]
    fn test_typed_drill_and_other_drills_untouched() {
        let (cards, mut store) = setup(1);
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("Meaning-1".to_string()),
            Answer::Text("meaning-1".to_string()),
        ]);
        let summary = DrillScheduler::new(&cards, today())
            .run(&mut store, &KanjiToMeaning, &mut prompter, &mut StdRng::seed_from_u64(11))
            .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.retry_passes, 1);
        let record = store.get("1").unwrap();
        assert_eq!(record.get(DrillType::KanjiToMeaning).streak, 0);
        assert_eq!(record.get(DrillType::KanjiToMeaning).last_reviewed, today());
        assert_eq!(
            record.get(DrillType::MeaningToKanji).last_reviewed,
            today() - Duration::days(3)
        );
    }

    #[test]
    fn test_prompt_failure_is_an_error() {
        let (cards, mut store) = setup(1);
        let mut prompter = ScriptedPrompter::default();
        let result = DrillScheduler::new(&cards, today()).run(
            &mut store,
            &MeaningToKanji,
            &mut prompter,
            &mut StdRng::seed_from_u64(5),
        );
        assert!(result.is_err());
    }
}
