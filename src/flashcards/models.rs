//! Data models for the drill records

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrillType {
    /// Show the meaning, recall the kanji
    MeaningToKanji,
    /// Show the kanji, type the meaning
    KanjiToMeaning,
    /// Show the kanji and its phrase, type the reading
    KanjiToReading,
}

impl DrillType {
    /// All drill types, in the order they are stored in a [`CardRecord`]
    pub const ALL: [DrillType; 3] = [
        DrillType::MeaningToKanji,
        DrillType::KanjiToMeaning,
        DrillType::KanjiToReading,
    ];

    fn index(self) -> usize {
        match self {
            DrillType::MeaningToKanji => 0,
            DrillType::KanjiToMeaning => 1,
            DrillType::KanjiToReading => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrillType::MeaningToKanji => "meaning → kanji",
            DrillType::KanjiToMeaning => "kanji → meaning",
            DrillType::KanjiToReading => "kanji → reading",
        }
    }
}

/// Progress of one card in one drill.
///
/// Persisted as a `[streak, "YYYY-MM-DD"]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, NaiveDate)", into = "(u32, NaiveDate)")]
pub struct DrillRecord {
    /// Consecutive successful reviews
    pub streak: u32,
    pub last_reviewed: NaiveDate,
}

impl DrillRecord {
    pub fn new(today: NaiveDate) -> Self {
        Self { streak: 0, last_reviewed: today }
    }
}

impl From<(u32, NaiveDate)> for DrillRecord {
    fn from((streak, last_reviewed): (u32, NaiveDate)) -> Self {
        Self { streak, last_reviewed }
    }
}

impl From<DrillRecord> for (u32, NaiveDate) {
    fn from(record: DrillRecord) -> Self {
        (record.streak, record.last_reviewed)
    }
}

/// One [`DrillRecord`] per drill type, in [`DrillType::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord([DrillRecord; 3]);

impl CardRecord {
    pub fn new(today: NaiveDate) -> Self {
        Self([DrillRecord::new(today); 3])
    }

    pub fn get(&self, drill_type: DrillType) -> &DrillRecord {
        &self.0[drill_type.index()]
    }

    pub fn get_mut(&mut self, drill_type: DrillType) -> &mut DrillRecord {
        &mut self.0[drill_type.index()]
    }
}

/// Card key → progress, the only state kept between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    records: BTreeMap<String, CardRecord>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CardRecord> {
        self.records.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut CardRecord> {
        self.records.get_mut(key)
    }

    pub fn insert(&mut self, key: String, record: CardRecord) {
        self.records.insert(key, record);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CardRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add fresh records for card keys the store has not seen.
    /// Records whose card is gone are kept. Returns the number added.
    pub fn reconcile<'k>(
        &mut self,
        keys: impl IntoIterator<Item = &'k str>,
        today: NaiveDate,
    ) -> usize {
        let mut added = 0;
        for key in keys {
            if !self.records.contains_key(key) {
                self.records.insert(key.to_string(), CardRecord::new(today));
                added += 1;
            }
        }
        added
    }
}

/// Statistics for one drill type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub drill_type: DrillType,
    pub total_cards: usize,
    pub due_cards: usize,
    /// Cards with a streak of zero
    pub fresh_cards: usize,
    pub reviewed_today: usize,
    pub longest_streak: u32,
    pub mean_streak: f32,
}

impl ReviewStats {
    pub fn new(drill_type: DrillType) -> Self {
        Self {
            drill_type,
            total_cards: 0,
            due_cards: 0,
            fresh_cards: 0,
            reviewed_today: 0,
            longest_streak: 0,
            mean_streak: 0.0,
        }
    }
}
